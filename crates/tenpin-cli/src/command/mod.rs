use clap::{Parser, Subcommand};

use crate::logging;

use self::{replay::ReplayArg, score::ScoreArg, simulate::SimulateArg};

mod replay;
mod score;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output (overridden by `RUST_LOG`)
    #[clap(long, short, global = true)]
    verbose: bool,
    /// What to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score a sequence of rolls
    Score(#[clap(flatten)] ScoreArg),
    /// Replay a recorded game and verify its score
    Replay(#[clap(flatten)] ReplayArg),
    /// Let a random bowler play one full game
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbose);

    match args.mode {
        Mode::Score(arg) => score::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
