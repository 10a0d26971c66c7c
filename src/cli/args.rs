//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "gobang",
    about = "Gobang (five in a row) with an alpha-beta search engine"
)]
pub enum Gobang {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches `--depth` full moves ahead (default: 1) among cells within `--breadth` of a stone (default: 1, 0 searches every cell). Your color is chosen at random unless you specify it with `--color`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 1)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the move the engine chooses for a `--position` given as rows of `X`, `O` and `.` separated by `/`, optionally prefixed with `K;` for a connection length other than five."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Gobang {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
        }
    }
}
