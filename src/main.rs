//! CLI entry point for the match-3 engine

use candy_cascade::io::cli::{Cli, GameRunner};
use clap::Parser;

fn main() -> candy_cascade::Result<()> {
    let cli = Cli::parse();
    let runner = GameRunner::new(cli);
    runner.run()
}
