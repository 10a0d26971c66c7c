use thiserror::Error;

use super::coord::Coord;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a stone on {coord}, the cell is already occupied")]
    CellOccupiedError { coord: Coord },
    #[error("Cannot place a stone on {coord}, it is outside a {size}x{size} board")]
    OutOfBoundsError { coord: Coord, size: usize },
    #[error("Cannot revoke a move, the move history is empty")]
    EmptyHistoryError,
    #[error("Invalid stone count: {black} black and {white} white stones cannot arise from alternating play")]
    UnbalancedStoneCountError { black: usize, white: usize },
    #[error("Invalid board dimensions: size {size}, connection {connection}")]
    InvalidDimensionsError { size: usize, connection: usize },
    #[error("Invalid position: {msg}")]
    InvalidPositionError { msg: String },
}
