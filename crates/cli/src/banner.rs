//! Welcome display.

use std::io::stdout;

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use gitfx_core::error::Result;

const BANNER_ART: &str = r"
         _ _    __
   __ _ (_) |_ / _|_  __
  / _` || | __| |_\ \/ /
 | (_| || | |_|  _|>  <
  \__, ||_|\__|_| /_/\_\
  |___/
";

/// Prints the banner and two lines of usage guidance.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_welcome() -> Result<()> {
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(208)),
        Print(BANNER_ART),
        ResetColor
    )?;

    println!("Welcome to gitfx — a friendlier front-end for git.");
    println!("Type `gitfx help` to view available commands and options.");

    Ok(())
}
