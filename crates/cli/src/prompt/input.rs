use std::io::{stdin, stdout, Write};

use gitfx_core::error::Result;

/// Prompts the user for a single-line value and trims whitespace.
///
/// A non-empty default is shown in brackets and returned when the
/// user enters nothing. Empty input with no default is a valid answer
/// (the identity flow reads it as "skip this field").
pub fn prompt_value(label: &str, default: &str) -> Result<String> {
    if default.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{default}]: ");
    }

    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    let read_value = input.trim();

    if read_value.is_empty() && !default.is_empty() {
        return Ok(default.to_string());
    }

    Ok(read_value.to_string())
}
