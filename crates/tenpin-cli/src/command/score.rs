use std::{io, path::PathBuf};

use anyhow::Context as _;
use tenpin_engine::ScoreTracker;

use crate::{
    report,
    schema::record::{PlayerInfo, RecordedGame},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    /// Pins knocked down by each roll, in order
    #[clap(required = true)]
    pins: Vec<u8>,
    /// Save the game record to this file (JSON format)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let ScoreArg { pins, output } = arg;

    let mut tracker = ScoreTracker::new();
    for (index, &roll) in pins.iter().enumerate() {
        let frame = tracker.current_frame();
        if let Err(err) = tracker.add_roll(roll) {
            tracing::warn!(roll = index + 1, pins = roll, frame, "roll rejected: {err}");
            return Err(err)
                .with_context(|| format!("roll #{} ({roll} pins) rejected", index + 1));
        }
        tracing::debug!(roll = index + 1, pins = roll, frame, "roll recorded");
    }

    report::write_card(&mut io::stdout().lock(), &tracker)?;

    if let Some(path) = output {
        let record = RecordedGame::from_tracker(&tracker, PlayerInfo::Manual);
        util::save_record(path, &record)?;
        tracing::info!("saved game record to {}", path.display());
    }

    Ok(())
}
