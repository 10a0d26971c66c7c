//! Move input parsing.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::coord::Coord;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,3})[\s,]+(\d{1,3})$").expect("COORD_RE regex should be valid")
});
static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(undo|u|restart|r|quit|q|exit)$").expect("COMMAND_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("input closed")]
    UserExit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// Place a stone at `row col`.
    Coordinate(Coord),
    Undo,
    Restart,
    Quit,
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        if let Some(caps) = COORD_RE.captures(input) {
            let parse = |i: usize| {
                caps[i].parse::<usize>().map_err(|_| InputError::InvalidInput {
                    input: input.to_string(),
                })
            };
            return Ok(MoveInput::Coordinate(Coord::new(parse(1)?, parse(2)?)));
        }

        if let Some(caps) = COMMAND_RE.captures(input) {
            return match caps[1].to_lowercase().as_str() {
                "undo" | "u" => Ok(MoveInput::Undo),
                "restart" | "r" => Ok(MoveInput::Restart),
                _ => Ok(MoveInput::Quit),
            };
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it. End of input is reported as
/// `UserExit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("7 7".parse(), Ok(MoveInput::Coordinate(Coord::new(7, 7))));
        assert_eq!(
            "  3, 12 \n".parse(),
            Ok(MoveInput::Coordinate(Coord::new(3, 12)))
        );
        assert_eq!("0,0".parse(), Ok(MoveInput::Coordinate(Coord::new(0, 0))));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("undo".parse(), Ok(MoveInput::Undo));
        assert_eq!("U".parse(), Ok(MoveInput::Undo));
        assert_eq!("restart".parse(), Ok(MoveInput::Restart));
        assert_eq!("quit".parse(), Ok(MoveInput::Quit));
        assert_eq!("q".parse(), Ok(MoveInput::Quit));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "7", "a7", "7 7 7", "-1 3", "resign"] {
            assert_eq!(
                input.parse::<MoveInput>(),
                Err(InputError::InvalidInput {
                    input: input.to_string()
                }),
                "{:?}",
                input
            );
        }
    }
}
