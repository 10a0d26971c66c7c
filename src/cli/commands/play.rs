//! Play command - play a game against the computer.

use gobang::board::color::Color;
use gobang::game::engine::Player;
use gobang::game::input_source::ConditionalInput;
use gobang::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{run_game_loop, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
}

impl Command for PlayArgs {
    fn execute(self) {
        let (black, white) = match self.color {
            Color::Black => (Player::Human, Player::Computer),
            Color::White => (Player::Computer, Player::Human),
        };
        run_game_loop(
            ConditionalInput {
                human_color: self.color,
            },
            ConditionalStatsRenderer {
                human_color: self.color,
            },
            self.game.config(),
            black,
            white,
        );
    }
}
