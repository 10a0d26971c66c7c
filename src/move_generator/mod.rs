//! Candidate move generation for the searcher.

use std::ops::Range;

use rustc_hash::FxHashSet;

use crate::board::coord::Coord;
use crate::board::Board;

/// Produces candidate moves for a position. With a `breadth` of zero every
/// empty cell is a candidate. Otherwise only empty cells within `breadth`
/// king steps of a stone already on the board are offered, which keeps the
/// branching factor small at the price of ignoring distant cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveGenerator {
    breadth: usize,
}

impl MoveGenerator {
    pub fn new(breadth: usize) -> Self {
        Self { breadth }
    }

    pub fn breadth(&self) -> usize {
        self.breadth
    }

    pub fn is_exhaustive(&self) -> bool {
        self.breadth == 0
    }

    /// Returns the candidate moves for `board`. Every returned cell is empty
    /// and appears once. Neighbourhoods are visited from the most recent stone
    /// backwards, so cells around the last move come first.
    pub fn generate_moves(&self, board: &Board) -> Vec<Coord> {
        if self.is_exhaustive() {
            return board.empty_cells();
        }

        let size = board.size();
        let mut seen = FxHashSet::default();
        let mut candidates = Vec::new();

        for stone in board.history().iter().rev() {
            let rows = neighbourhood(stone.x, self.breadth, size);
            for x in rows {
                for y in neighbourhood(stone.y, self.breadth, size) {
                    let coord = Coord::new(x, y);
                    if board.get(coord).is_none() && seen.insert(coord) {
                        candidates.push(coord);
                    }
                }
            }
        }

        candidates
    }
}

/// Indices within `radius` of `center` along one axis, clipped to the board.
fn neighbourhood(center: usize, radius: usize, size: usize) -> Range<usize> {
    let end = center.saturating_add(radius).saturating_add(1).min(size);
    center.saturating_sub(radius)..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;

    fn sample_board() -> Board {
        let mut board = Board::default();
        for coord in [(7, 7), (7, 8), (8, 6), (3, 12)] {
            board.play(coord.into()).unwrap();
        }
        board
    }

    #[test]
    fn test_exhaustive_returns_every_empty_cell() {
        let board = sample_board();
        let generator = MoveGenerator::new(0);
        assert!(generator.is_exhaustive());
        assert_eq!(generator.generate_moves(&board), board.empty_cells());
    }

    #[test]
    fn test_exhaustive_on_empty_board() {
        let board = Board::new(9, 5);
        assert_eq!(MoveGenerator::default().generate_moves(&board).len(), 81);
    }

    #[test]
    fn test_breadth_limits_to_neighbourhood() {
        let board = sample_board();
        let generator = MoveGenerator::new(1);
        let candidates = generator.generate_moves(&board);
        let empty = board.empty_cells();

        assert!(candidates.len() < empty.len());
        for coord in candidates.iter() {
            assert!(board.get(*coord).is_none());
            assert!(empty.contains(coord));
            assert!(board
                .history()
                .iter()
                .any(|stone| stone.distance(*coord) <= 1));
        }
    }

    #[test]
    fn test_includes_every_neighbour_of_last_move() {
        let board = sample_board();
        let last = board.last_move().unwrap();
        for breadth in 1..=3 {
            let candidates = MoveGenerator::new(breadth).generate_moves(&board);
            for coord in board.empty_cells() {
                if coord.distance(last) == 1 {
                    assert!(candidates.contains(&coord), "missing {}", coord);
                }
            }
        }
    }

    #[test]
    fn test_candidates_are_unique() {
        let board = sample_board();
        let candidates = MoveGenerator::new(2).generate_moves(&board);
        let unique: FxHashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn test_last_move_neighbourhood_comes_first() {
        let board = sample_board();
        let candidates = MoveGenerator::new(1).generate_moves(&board);
        // (3, 12) is isolated and was played last
        assert_eq!(candidates.len(), 8 + 14);
        assert!(candidates[..8]
            .iter()
            .all(|coord| coord.distance(Coord::new(3, 12)) == 1));
    }

    #[test]
    fn test_neighbourhood_is_clipped_at_the_edge() {
        let mut board = Board::new(9, 5);
        board.play_as(Coord::new(0, 0), Color::Black).unwrap();
        let candidates = MoveGenerator::new(1).generate_moves(&board);
        assert_eq!(candidates.len(), 3);

        let wide = MoveGenerator::new(2).generate_moves(&board);
        assert_eq!(wide.len(), 8);
    }

    #[test]
    fn test_huge_breadth_covers_the_whole_board() {
        let board = sample_board();
        let candidates = MoveGenerator::new(usize::MAX).generate_moves(&board);
        let mut expected = board.empty_cells();
        let mut sorted = candidates.clone();
        expected.sort();
        sorted.sort();
        assert_eq!(sorted, expected);
        // the last stone's neighbourhood is walked first
        assert_eq!(candidates[0], Coord::new(0, 0));
    }

    #[test]
    fn test_empty_board_has_no_local_candidates() {
        let board = Board::default();
        assert!(MoveGenerator::new(1).generate_moves(&board).is_empty());
    }
}
