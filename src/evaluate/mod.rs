//! Static evaluation of a board by pattern matching along every line.
//!
//! Scores are signed: positive favors Black, negative favors White, so the
//! searcher can maximize for Black and minimize for White without flipping
//! signs between plies.

pub mod patterns;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::{Board, DIRECTIONS};

use self::patterns::{PatternTable, PATTERN_TABLE};

// These scores are significantly larger than any sum of pattern weights,
// and therefore will incentivize the engine to select for (or against) a
// completed line.
pub const BLACK_WINS: i32 = i32::MAX / 2;
pub const WHITE_WINS: i32 = i32::MIN / 2;

const WINDOW_LENGTHS: [usize; 3] = [4, 5, 6];
const MIN_LINE_LENGTH: usize = 4;

// No signature has fewer than two stones, so sparser windows are skipped.
const MIN_WINDOW_STONES: usize = 2;

/// Returns the decisive score for a win by `color`.
pub fn winning_score(color: Color) -> i32 {
    match color {
        Color::Black => BLACK_WINS,
        Color::White => WHITE_WINS,
    }
}

/// Pattern-based static evaluator. All evaluators share one pattern table,
/// built the first time any of them is created.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    patterns: &'static PatternTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            patterns: &PATTERN_TABLE,
        }
    }

    /// Returns the score of the board. Pure: the same board always yields
    /// the same score.
    pub fn score(&self, board: &Board) -> i32 {
        lines(board)
            .iter()
            .map(|line| self.line_score(line))
            .sum()
    }

    /// Sums every matching window of length 4, 5 and 6 along one line. Both
    /// colors are tried on each window; White matches count negatively.
    fn line_score(&self, line: &[Option<Color>]) -> i32 {
        if count_stones(line) < MIN_WINDOW_STONES {
            return 0;
        }

        let mut score = 0;
        for length in WINDOW_LENGTHS {
            for window in line.windows(length) {
                if count_stones(window) < MIN_WINDOW_STONES {
                    continue;
                }

                for color in Color::ALL {
                    if let Some(weight) = self.patterns.match_window(window, color) {
                        score += color.sign() * weight;
                    }
                }
            }
        }

        score
    }
}

#[inline(always)]
fn count_stones(cells: &[Option<Color>]) -> usize {
    cells.iter().filter(|cell| cell.is_some()).count()
}

/// Decomposes the board into every maximal line along the four directions,
/// dropping lines too short to hold a window.
pub fn lines(board: &Board) -> Vec<Vec<Option<Color>>> {
    let size = board.size() as isize;
    let mut lines = Vec::with_capacity(6 * board.size());

    for &(dx, dy) in DIRECTIONS.iter() {
        for (x, y) in line_starts(size, dx, dy) {
            let mut line = Vec::with_capacity(board.size());
            let (mut cx, mut cy) = (x, y);
            while board.legal(cx, cy) {
                line.push(board.get(Coord::new(cx as usize, cy as usize)));
                cx += dx;
                cy += dy;
            }
            if line.len() >= MIN_LINE_LENGTH {
                lines.push(line);
            }
        }
    }

    lines
}

/// Cells from which a walk along `(dx, dy)` covers each line exactly once:
/// the cells whose predecessor along the direction is off the board.
fn line_starts(size: isize, dx: isize, dy: isize) -> Vec<(isize, isize)> {
    let on_board = |x: isize, y: isize| x >= 0 && y >= 0 && x < size && y < size;
    (0..size)
        .flat_map(|x| (0..size).map(move |y| (x, y)))
        .filter(|&(x, y)| !on_board(x - dx, y - dy))
        .collect()
}
