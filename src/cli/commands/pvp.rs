//! PvP command - play a game against another human.

use gobang::game::engine::{GameConfig, Player};
use gobang::game::input_source::HumanInput;
use gobang::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "15")]
    pub size: usize,
    #[structopt(short = "k", long, default_value = "5", help = "Stones in a row needed to win")]
    pub connection: usize,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = GameConfig {
            size: self.size,
            connection: self.connection,
            ..Default::default()
        };
        run_game_loop(HumanInput, SimpleRenderer, config, Player::Human, Player::Human);
    }
}
