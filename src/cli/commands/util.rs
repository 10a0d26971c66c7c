//! Shared utilities for CLI commands.

use gobang::game::engine::{Engine, GameConfig, Player};
use gobang::game::input_source::InputSource;
use gobang::game::r#loop::GameLoop;
use gobang::game::renderer::GameRenderer;
use structopt::StructOpt;

/// Board and search options shared by the interactive commands.
#[derive(StructOpt)]
pub struct GameArgs {
    #[structopt(short, long, default_value = "1", help = "Search depth in full moves")]
    pub depth: u8,
    #[structopt(
        short,
        long,
        default_value = "1",
        help = "Only consider cells within this distance of a stone; 0 considers every cell"
    )]
    pub breadth: usize,
    #[structopt(short, long, default_value = "15")]
    pub size: usize,
    #[structopt(short = "k", long, default_value = "5", help = "Stones in a row needed to win")]
    pub connection: usize,
    #[structopt(long, help = "Seed for reproducible tie-breaking")]
    pub seed: Option<u64>,
}

impl GameArgs {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            connection: self.connection,
            search_depth: self.depth,
            search_breadth: self.breadth,
            seed: self.seed,
        }
    }
}

pub(crate) fn run_game_loop<I, R>(
    input_source: I,
    renderer: R,
    config: GameConfig,
    black: Player,
    white: Player,
) where
    I: InputSource,
    R: GameRenderer,
{
    match Engine::with_config(config, black, white) {
        Ok(engine) => GameLoop::new(input_source, renderer, engine).run(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
