use anyhow::{Context as _, ensure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenpin_engine::{ScoreCard, ScoreTracker};

/// Recorded game with metadata for replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when the record was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Who produced the rolls
    pub player: PlayerInfo,
    /// Every accepted roll, in order
    pub rolls: Vec<u8>,
    /// Score card at the time of recording, frame 0 included
    pub frames: ScoreCard,
    /// Total at the time of recording
    pub final_score: u16,
    /// Whether all ten frames were complete
    pub finished: bool,
}

/// Information about where the rolls came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerInfo {
    /// Rolls entered on the command line
    Manual,
    /// Rolls produced by the random bowler
    Simulated { seed: u64, skill: f64 },
}

impl RecordedGame {
    pub fn from_tracker(tracker: &ScoreTracker, player: PlayerInfo) -> Self {
        Self {
            recorded_at: Utc::now(),
            player,
            rolls: tracker.rolls().to_vec(),
            frames: tracker.score_card().clone(),
            final_score: tracker.calculate_final_score(),
            finished: tracker.is_finished(),
        }
    }

    /// Feeds the recorded rolls through a fresh tracker and checks that the
    /// stored score card and total agree with the result.
    pub fn replay(&self) -> anyhow::Result<ScoreTracker> {
        let tracker = ScoreTracker::from_rolls(self.rolls.iter().copied())
            .context("recorded rolls are not a legal game")?;

        ensure!(
            tracker.score_card() == &self.frames,
            "recorded score card does not match the replayed rolls"
        );
        ensure!(
            tracker.calculate_final_score() == self.final_score,
            "recorded final score {} does not match replayed score {}",
            self.final_score,
            tracker.calculate_final_score()
        );
        ensure!(
            tracker.is_finished() == self.finished,
            "recorded game state does not match the replayed rolls"
        );

        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> ScoreTracker {
        ScoreTracker::from_rolls([
            10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1,
        ])
        .unwrap()
    }

    #[test]
    fn test_record_captures_tracker() {
        let tracker = sample_game();
        let record = RecordedGame::from_tracker(&tracker, PlayerInfo::Manual);

        assert_eq!(record.rolls, tracker.rolls());
        assert_eq!(record.final_score, 167);
        assert!(record.finished);
    }

    #[test]
    fn test_replay_after_json_roundtrip() {
        let tracker = sample_game();
        let record = RecordedGame::from_tracker(
            &tracker,
            PlayerInfo::Simulated {
                seed: 42,
                skill: 0.75,
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let parsed: RecordedGame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.player, record.player);

        let replayed = parsed.replay().unwrap();
        assert_eq!(replayed, tracker);
    }

    #[test]
    fn test_replay_detects_tampered_score() {
        let mut record = RecordedGame::from_tracker(&sample_game(), PlayerInfo::Manual);
        record.final_score = 300;
        assert!(record.replay().is_err());
    }

    #[test]
    fn test_replay_rejects_illegal_rolls() {
        let mut record = RecordedGame::from_tracker(&sample_game(), PlayerInfo::Manual);
        record.rolls[1] = 11;
        assert!(record.replay().is_err());
    }
}
