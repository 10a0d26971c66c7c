//! Watch command - watch the computer play against itself.

use std::time::Duration;

use gobang::game::engine::Player;
use gobang::game::input_source::EngineInput;
use gobang::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{run_game_loop, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(
        long = "delay-ms",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(
            EngineInput,
            renderer,
            self.game.config(),
            Player::Computer,
            Player::Computer,
        );
    }
}
