use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

use crate::schema::record::RecordedGame;

/// Loads a game record written by [`save_record`].
pub fn load_record(path: &Path) -> anyhow::Result<RecordedGame> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open game record: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse game record: {}", path.display()))
}

/// Saves a game record as pretty-printed JSON, creating parent directories.
pub fn save_record(path: &Path, record: &RecordedGame) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create game record: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record)
        .with_context(|| format!("Failed to write game record to {}", path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush game record to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tenpin_engine::ScoreTracker;

    use super::*;
    use crate::schema::record::PlayerInfo;

    #[test]
    fn test_save_creates_directories_and_loads_back() {
        let dir = std::env::temp_dir().join(format!("tenpin-util-{}", std::process::id()));
        let path = dir.join("records").join("game.json");

        let tracker = ScoreTracker::from_rolls([10, 4, 6, 3]).unwrap();
        let record = RecordedGame::from_tracker(&tracker, PlayerInfo::Manual);
        save_record(&path, &record).unwrap();

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded.rolls, [10, 4, 6, 3]);
        assert_eq!(loaded.frames, record.frames);
        assert_eq!(loaded.final_score, 36);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_record_fails() {
        let path = std::env::temp_dir().join("tenpin-util-missing").join("none.json");
        let err = load_record(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open game record"));
    }
}
