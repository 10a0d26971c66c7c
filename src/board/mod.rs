pub mod color;
pub mod coord;
pub mod error;

mod display;
mod position;


use std::hash::{Hash, Hasher};

use color::Color;
use coord::Coord;
use error::BoardError;

pub const DEFAULT_SIZE: usize = 15;
pub const DEFAULT_CONNECTION: usize = 5;

/// Row, column, main diagonal and anti-diagonal steps.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Represents the state of a game board: an N×N grid of stones plus the
/// ordered history of played cells. The side to move is derived from the
/// history length, so the history and the grid always agree on the number
/// of stones.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    connection: usize,
    cells: Vec<Option<Color>>,
    history: Vec<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_CONNECTION)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.connection == other.connection && self.cells == other.cells
    }
}

impl Eq for Board {}

// history is not part of the identity: two move orders reaching the same
// grid hash identically
impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.connection.hash(state);
        self.cells.hash(state);
    }
}

impl Board {
    /// Creates an empty `size`×`size` board where `connection` stones in a
    /// line win.
    pub fn new(size: usize, connection: usize) -> Self {
        Self {
            size,
            connection,
            cells: vec![None; size * size],
            history: Vec::with_capacity(size * size),
        }
    }

    /// Like [`Board::new`], but rejects degenerate dimensions.
    pub fn try_new(size: usize, connection: usize) -> Result<Self, BoardError> {
        if size == 0 || connection == 0 || connection > size {
            return Err(BoardError::InvalidDimensionsError { size, connection });
        }
        Ok(Self::new(size, connection))
    }

    /// Builds a board from a row-major grid. The history is reconstructed by
    /// alternating Black and White stones in grid order, which requires Black
    /// to have as many stones as White or exactly one more.
    pub fn from_grid(
        size: usize,
        connection: usize,
        cells: Vec<Option<Color>>,
    ) -> Result<Self, BoardError> {
        if cells.len() != size * size {
            return Err(BoardError::InvalidPositionError {
                msg: format!("expected {} cells, got {}", size * size, cells.len()),
            });
        }

        // a connection longer than the board is allowed, as in `Board::new`
        if size == 0 || connection == 0 {
            return Err(BoardError::InvalidDimensionsError { size, connection });
        }

        let mut board = Self::new(size, connection);
        let stones_of = |color: Color| -> Vec<Coord> {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Some(color))
                .map(|(i, _)| Coord::new(i / size, i % size))
                .collect()
        };
        let black = stones_of(Color::Black);
        let white = stones_of(Color::White);

        if black.len() != white.len() && black.len() != white.len() + 1 {
            return Err(BoardError::UnbalancedStoneCountError {
                black: black.len(),
                white: white.len(),
            });
        }

        for (i, coord) in black.iter().enumerate() {
            board.history.push(*coord);
            if let Some(reply) = white.get(i) {
                board.history.push(*reply);
            }
        }
        board.cells = cells;

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn connection(&self) -> usize {
        self.connection
    }

    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.history.last().copied()
    }

    /// The color whose turn it is: Black after an even number of moves.
    pub fn turn(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn piece_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_full(&self) -> bool {
        self.piece_count() == self.size * self.size
    }

    /// Bounds check only; occupancy is not considered.
    pub fn legal(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    pub fn get(&self, coord: Coord) -> Option<Color> {
        if coord.x >= self.size || coord.y >= self.size {
            return None;
        }
        self.cells[self.index(coord)]
    }

    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Places a stone for the side to move. Returns whether the stone
    /// completes a line of at least `connection` stones.
    pub fn play(&mut self, coord: Coord) -> Result<bool, BoardError> {
        let color = self.turn();
        self.play_as(coord, color)
    }

    /// Places a stone of an explicit color. The board is left untouched when
    /// the cell is off the board or already occupied.
    pub fn play_as(&mut self, coord: Coord, color: Color) -> Result<bool, BoardError> {
        if !self.legal(coord.x as isize, coord.y as isize) {
            return Err(BoardError::OutOfBoundsError {
                coord,
                size: self.size,
            });
        }

        let index = self.index(coord);
        if self.cells[index].is_some() {
            return Err(BoardError::CellOccupiedError { coord });
        }

        self.cells[index] = Some(color);
        self.history.push(coord);

        Ok(self.is_winning_move(coord))
    }

    /// Removes the most recent stone and returns its cell.
    pub fn revoke(&mut self) -> Result<Coord, BoardError> {
        let coord = self.history.pop().ok_or(BoardError::EmptyHistoryError)?;
        let index = self.index(coord);
        self.cells[index] = None;
        Ok(coord)
    }

    /// Clears the grid and history in place.
    pub fn restart(&mut self) {
        self.history.clear();
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Returns true if the stone on `coord` is part of an unbroken line of at
    /// least `connection` stones along any of the four axes.
    pub fn is_winning_move(&self, coord: Coord) -> bool {
        let color = match self.get(coord) {
            Some(color) => color,
            None => return false,
        };

        DIRECTIONS.iter().any(|&(dx, dy)| {
            let mut run = 1;
            if run >= self.connection {
                return true;
            }

            for sign in [-1isize, 1] {
                for step in 1..self.connection as isize {
                    let x = coord.x as isize + sign * step * dx;
                    let y = coord.y as isize + sign * step * dy;
                    if !self.legal(x, y) || self.get(Coord::new(x as usize, y as usize)) != Some(color)
                    {
                        break;
                    }

                    run += 1;
                    if run >= self.connection {
                        return true;
                    }
                }
            }

            false
        })
    }

    fn index(&self, coord: Coord) -> usize {
        coord.x * self.size + coord.y
    }
}
