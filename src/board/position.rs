use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::color::Color;
use super::error::BoardError;
use super::{Board, DEFAULT_CONNECTION};

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?:([1-9][0-9]*);)?     # optional connection length
        ([XOxo.]+(?:/[XOxo.]+)*) # rows, top to bottom
        $
        ",
    )
    .expect("POSITION_RE regex should be valid")
});

/// Parses the compact text form: rows separated by `/`, `X` for Black, `O`
/// for White and `.` for an empty cell, e.g. `.X./.O./...`. A `K;` prefix
/// overrides the default connection length.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let caps = POSITION_RE
            .captures(position.trim())
            .ok_or_else(|| BoardError::InvalidPositionError {
                msg: format!("could not parse board from `{}`", position),
            })?;

        let connection = match caps.get(1) {
            Some(k) => k
                .as_str()
                .parse::<usize>()
                .map_err(|err| BoardError::InvalidPositionError {
                    msg: err.to_string(),
                })?,
            None => DEFAULT_CONNECTION,
        };

        let rows: Vec<&str> = caps[2].split('/').collect();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (x, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(BoardError::InvalidPositionError {
                    msg: format!("row {} has {} cells, expected {}", x, row.len(), size),
                });
            }
            cells.extend(row.chars().map(Color::from_char));
        }

        Board::from_grid(size, connection, cells)
    }
}

impl Board {
    /// The inverse of the `FromStr` implementation.
    pub fn to_position_string(&self) -> String {
        let mut rows = Vec::with_capacity(self.size);
        for x in 0..self.size {
            let row: String = (0..self.size)
                .map(|y| match self.get((x, y).into()) {
                    Some(color) => color.to_char(),
                    None => '.',
                })
                .collect();
            rows.push(row);
        }

        let body = rows.join("/");
        if self.connection == DEFAULT_CONNECTION {
            body
        } else {
            format!("{};{}", self.connection, body)
        }
    }
}

/// Builds a square board from a visual block of `X`, `O` and `.` cells, top
/// row first. Intended for tests; panics on malformed input.
#[macro_export]
macro_rules! gobang_position {
    ($($cell:tt)*) => {{
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .map(|c| match c {
                '.' => None,
                _ => Some(
                    $crate::board::color::Color::from_char(c)
                        .expect("Invalid character in gobang position"),
                ),
            })
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(size * size, cells.len(), "Position must be square, got {} cells", cells.len());
        $crate::board::Board::from_grid(size, $crate::board::DEFAULT_CONNECTION, cells)
            .expect("Position must be reachable by alternating play")
    }};
}
