use crate::board::color::Color;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError>;

    /// Asked once the game has ended; only a person can restart it.
    fn get_menu_input(&self) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::Quit))
    }
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::InvalidInput { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Every move is typed in by a person.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }

    fn get_menu_input(&self) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }
}

/// Every move is chosen by the searcher.
pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

/// A person plays `human_color`, the searcher plays the other side.
pub struct ConditionalInput {
    pub human_color: Color,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_color {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }

    fn get_menu_input(&self) -> Result<Option<MoveInput>, InputError> {
        read_human_move()
    }
}
