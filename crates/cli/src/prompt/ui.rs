use std::io::{stdout, Stdout, Write};

use crossterm::cursor::MoveToPreviousLine;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::queue;

use gitfx_core::error::Result;
use gitfx_core::scope::Scope;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

const MENU_HEIGHT: u16 = Scope::ALL.len() as u16;

/// Presents the three-scope menu and returns the chosen scope, or
/// `None` if the user cancelled with Escape, 'q' or Ctrl-C.
///
/// The menu is drawn in place below the cursor; raw mode is restored
/// whenever this function returns.
pub fn select_scope() -> Result<Option<Scope>> {
    let mut stdout = stdout();

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print("Choose git config scope"),
        SetAttribute(Attribute::Reset),
        Print("\n")
    )?;
    stdout.flush()?;

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let mut selected: usize = 0;
    draw_options(&mut stdout, selected)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    selected = selected.checked_sub(1).unwrap_or(Scope::ALL.len() - 1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    selected = (selected + 1) % Scope::ALL.len();
                }
                KeyCode::Enter => return Ok(Some(Scope::ALL[selected])),
                KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                _ => continue,
            }

            queue!(stdout, MoveToPreviousLine(MENU_HEIGHT))?;
            draw_options(&mut stdout, selected)?;
        }
    }
}

fn draw_options(stdout: &mut Stdout, selected: usize) -> Result<()> {
    for (i, scope) in Scope::ALL.iter().enumerate() {
        queue!(stdout, Clear(ClearType::CurrentLine))?;

        if i == selected {
            queue!(
                stdout,
                SetForegroundColor(Color::Black),
                SetBackgroundColor(Color::DarkGreen),
                Print(format!("> {}", scope.menu_item())),
                ResetColor
            )?;
        } else {
            queue!(stdout, Print(format!("  {}", scope.menu_item())))?;
        }

        // Raw mode needs the explicit carriage return
        queue!(stdout, Print("\r\n"))?;
    }

    stdout.flush()?;
    Ok(())
}
