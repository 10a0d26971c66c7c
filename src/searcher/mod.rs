//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Black maximizes and White minimizes the evaluator's signed score, so the
//! role at each node follows directly from the side to move. Every child
//! position is searched on its own copy of the board; no state is shared
//! between sibling branches.
//!
//! The depth handed to [`Searcher::new`] counts full move pairs. The search
//! runs `2 * depth` plies, so the leaf positions always have the root mover to
//! play again and the evaluation never stops halfway through an exchange.
//!
//! A candidate that completes a line ends the node immediately with a
//! decisive score: an exact win dominates any heuristic evaluation. When
//! several candidates win at once only the first one found is kept, since
//! they are all worth the same.

use std::time::{Duration, Instant};

use log::{debug, error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::Board;
use crate::evaluate::{winning_score, Evaluator};
use crate::move_generator::MoveGenerator;


#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub depth: u8,
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub last_score: Option<i32>,
    pub last_duration: Option<Duration>,
}

pub struct Searcher {
    depth: u8,
    max_ply: u16,
    move_generator: MoveGenerator,
    evaluator: Evaluator,
    rng: StdRng,
    stats: SearchStats,
}

impl Searcher {
    /// `depth` is measured in full moves (one stone per side); `breadth` of
    /// zero searches every empty cell.
    pub fn new(depth: u8, breadth: usize) -> Self {
        Self::with_rng(depth, breadth, StdRng::from_entropy())
    }

    /// Same as [`Searcher::new`] with reproducible tie-breaking.
    pub fn with_seed(depth: u8, breadth: usize, seed: u64) -> Self {
        Self::with_rng(depth, breadth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: u8, breadth: usize, rng: StdRng) -> Self {
        Self {
            depth,
            max_ply: u16::from(depth) * 2,
            move_generator: MoveGenerator::new(breadth),
            evaluator: Evaluator::new(),
            rng,
            stats: SearchStats {
                depth,
                ..Default::default()
            },
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn max_ply(&self) -> u16 {
        self.max_ply
    }

    pub fn breadth(&self) -> usize {
        self.move_generator.breadth()
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Chooses a move for the side to play. The board itself is never
    /// modified.
    ///
    /// On an empty board the center is played. A single stone on the board
    /// is answered diagonally next to it. Anything else goes through the
    /// alpha-beta search and one of the equally best moves is picked at
    /// random.
    pub fn choose_move(&mut self, board: &Board) -> Result<Coord, SearchError> {
        if self.depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        if board.is_full() {
            return Err(SearchError::NoAvailableMoves);
        }

        self.reset_stats();

        match board.history() {
            [] => {
                let center = board.size() / 2;
                Ok(Coord::new(center, center))
            }
            [first] => Ok(self.opening_reply(board, *first)),
            _ => self.search(board),
        }
    }

    fn search(&mut self, board: &Board) -> Result<Coord, SearchError> {
        debug!(
            "alpha-beta search: depth {} ({} plies), breadth {}",
            self.depth,
            self.max_ply,
            self.breadth()
        );
        let start = Instant::now();

        let (score, best_moves) = self.search_root(board);

        let duration = start.elapsed();
        self.stats.last_score = Some(score);
        self.stats.last_duration = Some(duration);
        debug!(
            "searched {} positions ({} cutoffs) in {:?}; score {}, {} tied best moves",
            self.stats.positions_searched,
            self.stats.cutoffs,
            duration,
            score,
            best_moves.len()
        );

        best_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoAvailableMoves)
    }

    /// Searches every root candidate and returns the best score together
    /// with all moves achieving it.
    fn search_root(&mut self, board: &Board) -> (i32, Vec<Coord>) {
        self.stats.positions_searched += 1;

        let mover = board.turn();
        let maximizing = mover.maximize_score();
        let mut candidates = self.move_generator.generate_moves(board);
        if candidates.is_empty() {
            candidates = board.empty_cells();
        }

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut value = initial_value(mover);
        let mut best_moves = Vec::new();

        for coord in candidates {
            let mut child = board.clone();
            match self.play_candidate(&mut child, coord, mover) {
                Some(true) => return (winning_score(mover), vec![coord]),
                Some(false) => {}
                None => continue,
            }

            let score = self.alpha_beta(&child, 1, alpha, beta);
            let improves = if maximizing {
                score > value
            } else {
                score < value
            };

            if improves {
                value = score;
                best_moves.clear();
                best_moves.push(coord);
            } else if score == value {
                best_moves.push(coord);
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if alpha > beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (value, best_moves)
    }

    fn alpha_beta(&mut self, board: &Board, ply: u16, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.positions_searched += 1;

        if ply >= self.max_ply {
            return self.evaluator.score(board);
        }

        let candidates = self.move_generator.generate_moves(board);
        if candidates.is_empty() {
            return self.evaluator.score(board);
        }

        let mover = board.turn();
        let maximizing = mover.maximize_score();
        let mut value = initial_value(mover);

        for coord in candidates {
            let mut child = board.clone();
            match self.play_candidate(&mut child, coord, mover) {
                Some(true) => return winning_score(mover),
                Some(false) => {}
                None => continue,
            }

            let score = self.alpha_beta(&child, ply + 1, alpha, beta);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if alpha > beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        value
    }

    /// Plays a generated candidate on a child board. Returns whether it wins,
    /// or `None` if the candidate could not be played; the generator only
    /// offers empty cells, so that case is logged and the candidate skipped.
    fn play_candidate(&self, child: &mut Board, coord: Coord, mover: Color) -> Option<bool> {
        match child.play_as(coord, mover) {
            Ok(won) => Some(won),
            Err(err) => {
                error!("skipping unplayable candidate {}: {}", coord, err);
                None
            }
        }
    }

    /// Answers the first stone on the board with a diagonal neighbour. Each
    /// axis steps one cell in a random direction, reflecting back if the
    /// step would leave the board.
    fn opening_reply(&mut self, board: &Board, stone: Coord) -> Coord {
        let size = board.size() as isize;
        let mut step = |v: usize| -> usize {
            let delta: isize = if self.rng.gen::<bool>() { 1 } else { -1 };
            let target = v as isize + delta;
            if (0..size).contains(&target) {
                target as usize
            } else {
                (v as isize - delta) as usize
            }
        };

        let x = step(stone.x);
        let y = step(stone.y);
        Coord::new(x, y)
    }

    fn reset_stats(&mut self) {
        self.stats = SearchStats {
            depth: self.depth,
            ..Default::default()
        };
    }
}

/// The worst possible score for `mover`, the starting point of its node.
fn initial_value(mover: Color) -> i32 {
    if mover.maximize_score() {
        i32::MIN
    } else {
        i32::MAX
    }
}
