//! Operator prompts for the CLI.
//!
//! On a terminal, `dialoguer` handles the input (hidden for passwords). When
//! stdin is piped, answers are read line by line so scripts keep working.

use crate::utils::error::{AdminError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use std::io::{self, BufRead, IsTerminal};

pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

pub fn username(prompt: &str) -> Result<String> {
    if !is_interactive() {
        return read_answer(&mut io::stdin().lock());
    }
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(dialog_error)
}

/// Hidden input on a terminal.
pub fn password(prompt: &str) -> Result<String> {
    if !is_interactive() {
        return read_answer(&mut io::stdin().lock());
    }
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(dialog_error)
}

/// Yes/no question, `false` unless the operator agrees.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !is_interactive() {
        return Ok(is_affirmative(&read_answer(&mut io::stdin().lock())?));
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(dialog_error)
}

/// One line from `reader`, without its line ending.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "o" | "oui" | "y" | "yes"
    )
}

fn dialog_error(e: dialoguer::Error) -> AdminError {
    AdminError::IoError(io::Error::other(e.to_string()))
}
