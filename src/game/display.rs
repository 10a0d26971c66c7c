use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::color::Color;
use crate::board::Board;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // writing into a String cannot fail
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        stats: Option<&str>,
        message: Option<&str>,
    ) {
        self.clear();

        let _ = writeln!(self.buffer, "{}", board);
        let _ = writeln!(self.buffer, "Turn: {} ({})", current_turn, current_turn.to_char());
        match board.last_move() {
            Some(coord) => {
                let _ = writeln!(self.buffer, "Last move: {}", coord);
            }
            None => self.buffer.push_str("Last move: -\n"),
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }
        if let Some(message) = message {
            let _ = writeln!(self.buffer, "\n{}", message);
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::Coord;

    #[test]
    fn test_frame_contains_board_and_info() {
        let mut board = Board::new(9, 5);
        board.play(Coord::new(4, 4)).unwrap();

        let mut display = GameDisplay::new();
        display.render_game_state(&board, board.turn(), Some("* Score: 0"), Some("hello"));
        let frame = display.buffer();

        assert!(frame.contains(&board.to_string()));
        assert!(frame.contains("Turn: white (O)"));
        assert!(frame.contains("Last move: (4, 4)"));
        assert!(frame.contains("* Score: 0"));
        assert!(frame.ends_with("hello\n"));
    }
}
