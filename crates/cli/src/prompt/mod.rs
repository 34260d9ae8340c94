//! Interactive terminal prompts.
//!
//! This module provides the two interactions the identity flow needs:
//! a single-select menu for the configuration scope and a single-line
//! value prompt. Both are reachable only through the [`Prompter`]
//! trait so the flow can be driven by a scripted fake in tests.
//!
//! # User Interface
//!
//! The scope menu supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter to accept the highlighted scope
//! - Escape, 'q' or Ctrl-C to cancel

pub mod input;
pub mod ui;

use gitfx_core::error::Result;
use gitfx_core::scope::Scope;

/// Source of user answers for the identity flow.
pub trait Prompter {
    /// Presents the scope menu. `Ok(None)` means the user cancelled,
    /// which aborts the whole flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or drawn.
    fn select_scope(&mut self) -> Result<Option<Scope>>;

    /// Prompts for a single-line value, returning the trimmed input.
    /// Empty input is allowed; a non-empty `default` is returned when
    /// the user just presses Enter.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin or stdout fails. The flow treats this
    /// as cancellation, not as an empty answer.
    fn prompt_value(&mut self, label: &str, default: &str) -> Result<String>;
}

/// [`Prompter`] backed by the real terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select_scope(&mut self) -> Result<Option<Scope>> {
        ui::select_scope()
    }

    fn prompt_value(&mut self, label: &str, default: &str) -> Result<String> {
        input::prompt_value(label, default)
    }
}
