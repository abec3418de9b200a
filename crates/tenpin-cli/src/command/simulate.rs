use std::{io, path::PathBuf};

use anyhow::Context as _;
use rand::Rng as _;

use crate::{
    bowler::RandomBowler,
    report,
    schema::record::{PlayerInfo, RecordedGame},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Seed for the random bowler (random if omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Probability that each standing pin falls on a roll (0.0 to 1.0)
    #[clap(long, default_value_t = 0.8, value_parser = parse_skill)]
    skill: f64,
    /// Save the game record to this file (JSON format)
    #[clap(long)]
    output: Option<PathBuf>,
}

fn parse_skill(s: &str) -> Result<f64, String> {
    let skill: f64 = s.parse().map_err(|e| format!("invalid skill: {e}"))?;
    if !(0.0..=1.0).contains(&skill) {
        return Err(format!("skill must be between 0.0 and 1.0, got {skill}"));
    }
    Ok(skill)
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        seed,
        skill,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, skill, "simulating game");

    let mut bowler = RandomBowler::new(seed, *skill);
    let tracker = bowler
        .play()
        .context("random bowler produced an illegal roll")?;

    report::write_card(&mut io::stdout().lock(), &tracker)?;

    if let Some(path) = output {
        let player = PlayerInfo::Simulated {
            seed,
            skill: *skill,
        };
        let record = RecordedGame::from_tracker(&tracker, player);
        util::save_record(path, &record)?;
        tracing::info!("saved game record to {}", path.display());
    }

    Ok(())
}
