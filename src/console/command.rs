//! Console command parsing

use crate::{error::InputError, state::Unit};

/// Top-level command entered at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a unit, then prompt for an adjustment value
    Edit(Unit),
    Start,
    Stop,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.trim() {
            "h" => Ok(Command::Edit(Unit::Hours)),
            "m" => Ok(Command::Edit(Unit::Minutes)),
            "s" => Ok(Command::Edit(Unit::Seconds)),
            "f" => Ok(Command::Start),
            "r" => Ok(Command::Stop),
            "e" => Ok(Command::Exit),
            other => Err(InputError::InvalidCommand(other.to_string())),
        }
    }
}

/// Parse a signed integer adjustment such as `5`, `+5` or `-12`
pub fn parse_adjustment(input: &str) -> Result<i64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::InvalidAdjustment(input.to_string()))
}
