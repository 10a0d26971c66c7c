mod cli;

use cli::commands::Command;
use cli::Gobang;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Gobang::from_args().execute();
}
