use std::{io, path::PathBuf};

use crate::{report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Path to the game record file (JSON format)
    record_file: PathBuf,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { record_file } = arg;

    tracing::info!("loading game record from {}", record_file.display());
    let record = util::load_record(record_file)?;
    tracing::info!(
        rolls = record.rolls.len(),
        recorded_at = %record.recorded_at,
        "loaded game record"
    );

    let tracker = record.replay()?;
    report::write_card(&mut io::stdout().lock(), &tracker)?;

    Ok(())
}
