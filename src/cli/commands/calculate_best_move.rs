//! Calculate best move command - determine the best move from a position.

use gobang::board::Board;
use gobang::game::engine::{Engine, GameConfig, Player};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "1")]
    pub depth: u8,
    #[structopt(short, long, default_value = "1")]
    pub breadth: usize,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = GameConfig {
            search_depth: self.depth,
            search_breadth: self.breadth,
            seed: self.seed,
            ..Default::default()
        };
        let mut engine = Engine::with_board(
            self.starting_position,
            &config,
            Player::Computer,
            Player::Computer,
        );

        if let Some(ending) = engine.ending() {
            eprintln!("The game is already over: {}.", ending);
            return;
        }

        match engine.make_best_move() {
            Ok((coord, _)) => println!("{} {}", coord.x, coord.y),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
