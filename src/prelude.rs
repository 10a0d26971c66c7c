//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::coord::Coord;
pub use crate::board::error::BoardError;
pub use crate::board::Board;
pub use crate::evaluate::Evaluator;
pub use crate::game::engine::{Engine, GameConfig, GameEnding, Player};
pub use crate::move_generator::MoveGenerator;
pub use crate::searcher::{SearchError, Searcher};
