//! Terminal maze demo.
//!
//! Run: cargo run --bin maze-demo -- --size 25 --seed 7 --explored

use clap::Parser;
use maze_demo::Cli;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = maze_demo::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
