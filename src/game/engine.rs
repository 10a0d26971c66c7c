use std::fmt;
use std::str::FromStr;

use log::info;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::board::{Board, DEFAULT_CONNECTION, DEFAULT_SIZE};
use crate::searcher::{SearchError, SearchStats, Searcher};

/// Core engine configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub connection: usize,
    /// Search depth in full moves.
    pub search_depth: u8,
    /// Neighbourhood radius for candidate moves; zero searches every cell.
    pub search_breadth: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            connection: DEFAULT_CONNECTION,
            search_depth: 1,
            search_breadth: 1,
            seed: None,
        }
    }
}

/// Who sits at a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for Player {
    type Err = &'static str;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "human" => Ok(Player::Human),
            "computer" | "ai" => Ok(Player::Computer),
            _ => Err("invalid player; options are: human, computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Win(color) => write!(f, "{} wins", color),
            GameEnding::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("the game is over")]
    GameOver,
    #[error("there is no move to take back")]
    NothingToUndo,
    #[error("board error: {error}")]
    BoardError { error: BoardError },
    #[error("search error: {error}")]
    SearchError { error: SearchError },
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        EngineError::BoardError { error }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        EngineError::SearchError { error }
    }
}

/// A game session: the board, the computer player and who sits at which
/// color.
pub struct Engine {
    board: Board,
    searcher: Searcher,
    black: Player,
    white: Player,
    ending: Option<GameEnding>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Board::default(), Searcher::new(1, 1), Player::Human, Player::Computer)
    }
}

impl Engine {
    pub fn new(board: Board, searcher: Searcher, black: Player, white: Player) -> Self {
        Self {
            board,
            searcher,
            black,
            white,
            ending: None,
        }
    }

    pub fn with_config(config: GameConfig, black: Player, white: Player) -> Result<Self, EngineError> {
        let board = Board::try_new(config.size, config.connection)?;
        Ok(Self::with_board(board, &config, black, white))
    }

    /// Starts a session from an existing position. Sizes in `config` are
    /// ignored in favor of the board's own.
    pub fn with_board(board: Board, config: &GameConfig, black: Player, white: Player) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::with_seed(config.search_depth, config.search_breadth, seed),
            None => Searcher::new(config.search_depth, config.search_breadth),
        };
        let mut engine = Self::new(board, searcher, black, white);
        engine.ending = engine.detect_ending();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> Player {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn current_player(&self) -> Player {
        self.player(self.board.turn())
    }

    pub fn ending(&self) -> Option<GameEnding> {
        self.ending
    }

    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    pub fn search_stats(&self) -> &SearchStats {
        self.searcher.stats()
    }

    /// Static evaluation of the current position, positive favoring Black.
    pub fn evaluate(&self) -> i32 {
        self.searcher.evaluator().score(&self.board)
    }

    /// Plays `coord` for the side to move.
    pub fn make_move(&mut self, coord: Coord) -> Result<Option<GameEnding>, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let color = self.board.turn();
        let won = self.board.play(coord)?;
        info!("{} plays {}", color, coord);

        self.ending = if won {
            Some(GameEnding::Win(color))
        } else if self.board.is_full() {
            Some(GameEnding::Draw)
        } else {
            None
        };

        if let Some(ending) = self.ending {
            info!("game over: {}", ending);
        }
        Ok(self.ending)
    }

    /// Lets the searcher pick a move for the side to play and plays it.
    pub fn make_best_move(&mut self) -> Result<(Coord, Option<GameEnding>), EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let coord = self.searcher.choose_move(&self.board)?;
        let ending = self.make_move(coord)?;
        Ok((coord, ending))
    }

    /// True while the game is running and a human stone can be taken back.
    pub fn can_undo(&self) -> bool {
        !self.is_over()
            && (0..self.board.piece_count()).any(|i| self.player(color_of_move(i)) == Player::Human)
    }

    /// Takes back the last stone, and keeps taking back while a computer
    /// seat is to move, so that the human gets their previous turn back.
    /// Returns the revoked cells, most recent first.
    pub fn undo(&mut self) -> Result<Vec<Coord>, EngineError> {
        if !self.can_undo() {
            return Err(EngineError::NothingToUndo);
        }

        let mut revoked = vec![self.board.revoke()?];
        while self.current_player() == Player::Computer && self.board.piece_count() > 0 {
            revoked.push(self.board.revoke()?);
        }

        info!("took back {:?}", revoked);
        Ok(revoked)
    }

    pub fn restart(&mut self) {
        self.board.restart();
        self.ending = None;
        info!("game restarted");
    }

    fn detect_ending(&self) -> Option<GameEnding> {
        let winner = self
            .board
            .history()
            .iter()
            .find(|coord| self.board.is_winning_move(**coord))
            .and_then(|coord| self.board.get(*coord));

        match winner {
            Some(color) => Some(GameEnding::Win(color)),
            None if self.board.is_full() => Some(GameEnding::Draw),
            None => None,
        }
    }
}

/// The color that played the `index`-th move of a game.
fn color_of_move(index: usize) -> Color {
    if index % 2 == 0 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig {
            size: 9,
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut engine = Engine::with_config(config(), Player::Human, Player::Human).unwrap();
        for y in 0..4 {
            assert_eq!(engine.make_move(Coord::new(0, y)), Ok(None));
            assert_eq!(engine.make_move(Coord::new(8, y)), Ok(None));
        }
        assert_eq!(
            engine.make_move(Coord::new(0, 4)),
            Ok(Some(GameEnding::Win(Color::Black)))
        );
        assert!(engine.is_over());
        assert_eq!(
            engine.make_move(Coord::new(5, 5)),
            Err(EngineError::GameOver)
        );
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_small_board_dimensions() {
        let config = GameConfig {
            size: 2,
            connection: 2,
            ..config()
        };
        let mut engine = Engine::with_config(config, Player::Human, Player::Human).unwrap();
        assert_eq!(engine.make_move(Coord::new(0, 0)), Ok(None));
        assert_eq!(engine.make_move(Coord::new(0, 1)), Ok(None));
        assert_eq!(engine.make_move(Coord::new(1, 1)), Ok(Some(GameEnding::Win(Color::Black))));

        let config = GameConfig {
            size: 2,
            connection: 3,
            ..GameConfig::default()
        };
        assert!(Engine::with_config(config, Player::Human, Player::Human).is_err());
    }

    #[test]
    fn test_draw_when_board_fills_without_a_line() {
        let board: Board = "3;XOX/XOO/OX.".parse().unwrap();
        let mut engine = Engine::with_board(board, &config(), Player::Human, Player::Human);
        assert_eq!(engine.make_move(Coord::new(2, 2)), Ok(Some(GameEnding::Draw)));
    }

    #[test]
    fn test_occupied_cell_is_an_error() {
        let mut engine = Engine::with_config(config(), Player::Human, Player::Human).unwrap();
        engine.make_move(Coord::new(4, 4)).unwrap();
        assert!(matches!(
            engine.make_move(Coord::new(4, 4)),
            Err(EngineError::BoardError { .. })
        ));
        assert_eq!(engine.board().piece_count(), 1);
    }

    #[test]
    fn test_computer_replies() {
        let mut engine = Engine::with_config(config(), Player::Human, Player::Computer).unwrap();
        engine.make_move(Coord::new(4, 4)).unwrap();
        assert_eq!(engine.current_player(), Player::Computer);

        let (reply, ending) = engine.make_best_move().unwrap();
        assert_eq!(ending, None);
        assert_eq!(reply.distance(Coord::new(4, 4)), 1);
        assert_eq!(engine.board().get(reply), Some(Color::White));
    }

    #[test]
    fn test_undo_takes_back_computer_reply_too() {
        let mut engine = Engine::with_config(config(), Player::Human, Player::Computer).unwrap();
        assert!(!engine.can_undo());

        engine.make_move(Coord::new(4, 4)).unwrap();
        engine.make_best_move().unwrap();
        engine.make_move(Coord::new(4, 6)).unwrap();
        engine.make_best_move().unwrap();
        assert_eq!(engine.board().piece_count(), 4);

        let revoked = engine.undo().unwrap();
        assert_eq!(revoked.len(), 2);
        assert_eq!(revoked[1], Coord::new(4, 6));
        assert_eq!(engine.board().piece_count(), 2);
        assert_eq!(engine.current_player(), Player::Human);
    }

    #[test]
    fn test_undo_when_computer_plays_black() {
        let mut engine = Engine::with_config(config(), Player::Computer, Player::Human).unwrap();
        engine.make_best_move().unwrap();
        assert!(!engine.can_undo());
        assert_eq!(engine.undo(), Err(EngineError::NothingToUndo));

        engine.make_move(Coord::new(0, 0)).unwrap();
        engine.make_best_move().unwrap();
        assert!(engine.can_undo());

        engine.undo().unwrap();
        assert_eq!(engine.board().piece_count(), 1);
        assert_eq!(engine.current_player(), Player::Human);
    }

    #[test]
    fn test_undo_between_humans_takes_back_one_stone() {
        let mut engine = Engine::with_config(config(), Player::Human, Player::Human).unwrap();
        engine.make_move(Coord::new(4, 4)).unwrap();
        engine.make_move(Coord::new(4, 5)).unwrap();
        assert_eq!(engine.undo(), Ok(vec![Coord::new(4, 5)]));
        assert_eq!(engine.board().turn(), Color::White);
    }

    #[test]
    fn test_restart_clears_board_and_ending() {
        let board: Board = "XXXX./OOOO./...../...../.....".parse().unwrap();
        let mut engine = Engine::with_board(board, &config(), Player::Human, Player::Human);
        engine.make_move(Coord::new(0, 4)).unwrap();
        assert!(engine.is_over());

        engine.restart();
        assert!(!engine.is_over());
        assert_eq!(engine.board().piece_count(), 0);
        assert_eq!(engine.board().size(), 5);
    }

    #[test]
    fn test_loading_finished_position_detects_ending() {
        let board: Board = "XXXXX/OOOO./...../...../.....".parse().unwrap();
        let engine = Engine::with_board(board, &config(), Player::Human, Player::Computer);
        assert_eq!(engine.ending(), Some(GameEnding::Win(Color::Black)));
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("human".parse::<Player>(), Ok(Player::Human));
        assert_eq!("computer".parse::<Player>(), Ok(Player::Computer));
        assert!("robot".parse::<Player>().is_err());
    }
}
