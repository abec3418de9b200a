use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{FRAME_COUNT, frame_score::FrameScore};

/// Frame-by-frame record of rolls and bonuses.
///
/// Stored as a fixed array of `FRAME_COUNT + 1` rows indexed directly by frame
/// number. Row 0 is the sentinel pre-game frame and is always recorded. A row
/// becomes recorded when its frame receives its first roll, so the recorded rows
/// always form the contiguous prefix `0..recorded_frames()`.
///
/// # Example
///
/// ```
/// use tenpin_engine::ScoreTracker;
///
/// let mut tracker = ScoreTracker::new();
/// tracker.add_roll(5).unwrap();
/// tracker.add_roll(5).unwrap();
/// tracker.add_roll(2).unwrap();
///
/// let rows: Vec<_> = tracker.score_card().rows().collect();
/// assert_eq!(rows, [[0, 0, 0], [5, 5, 2], [2, 0, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    frames: [FrameScore; FRAME_COUNT + 1],
    recorded: usize,
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCard {
    pub const INITIAL: Self = Self {
        frames: [FrameScore::EMPTY; FRAME_COUNT + 1],
        recorded: 1,
    };

    /// Creates a score card holding only the sentinel frame 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    /// Returns the recorded rows, starting with the sentinel frame 0.
    #[must_use]
    pub fn frames(&self) -> &[FrameScore] {
        &self.frames[..self.recorded]
    }

    /// Returns a recorded row, or `None` if the frame has not been reached yet.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&FrameScore> {
        self.frames().get(index)
    }

    /// Iterates over the recorded rows as plain triples.
    pub fn rows(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.frames().iter().map(FrameScore::as_array)
    }

    /// Number of recorded rows, counting the sentinel frame.
    #[must_use]
    pub const fn recorded_frames(&self) -> usize {
        self.recorded
    }

    /// Sums every slot of frames 1 through 10.
    ///
    /// Bonuses are already resolved into the third slot as rolls arrive, so this
    /// is a plain aggregation with no strike or spare lookahead.
    #[must_use]
    pub fn final_score(&self) -> u16 {
        self.frames[1..].iter().map(FrameScore::total).sum()
    }

    /// Yields the cumulative score after each recorded playable frame.
    ///
    /// Frames whose bonus is still pending contribute what they hold so far.
    pub fn running_totals(&self) -> impl Iterator<Item = u16> + '_ {
        self.frames()
            .iter()
            .skip(1)
            .scan(0, |total, frame| {
                *total += frame.total();
                Some(*total)
            })
    }

    pub(crate) const fn get(&self, index: usize) -> &FrameScore {
        &self.frames[index]
    }

    pub(crate) fn set_roll(&mut self, index: usize, slot: usize, pins: u8) {
        self.frames[index].set_slot(slot, pins);
        self.recorded = self.recorded.max(index + 1);
    }

    pub(crate) fn add_bonus(&mut self, index: usize, pins: u8) {
        self.frames[index].add_bonus(pins);
    }
}

impl Serialize for ScoreCard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.frames().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScoreCard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<FrameScore>::deserialize(deserializer)?;
        if rows.is_empty() || rows.len() > FRAME_COUNT + 1 {
            return Err(serde::de::Error::custom(format!(
                "invalid score card: expected 1 to {} frames, got {}",
                FRAME_COUNT + 1,
                rows.len()
            )));
        }
        if rows[0] != FrameScore::EMPTY {
            return Err(serde::de::Error::custom(
                "invalid score card: frame 0 must be [0, 0, 0]",
            ));
        }
        if let Some((index, frame)) = rows
            .iter()
            .enumerate()
            .find(|(_, frame)| !frame.is_within_rack())
        {
            return Err(serde::de::Error::custom(format!(
                "invalid score card: frame {index} holds {:?}, more pins than a rack allows",
                frame.as_array()
            )));
        }

        let mut card = Self::INITIAL;
        card.frames[..rows.len()].copy_from_slice(&rows);
        card.recorded = rows.len();
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_card_holds_only_sentinel() {
        let card = ScoreCard::new();
        assert_eq!(card.recorded_frames(), 1);
        assert_eq!(card.rows().collect::<Vec<_>>(), [[0, 0, 0]]);
        assert_eq!(card.frame(1), None);
        assert_eq!(card.final_score(), 0);
    }

    #[test]
    fn test_set_roll_records_frame() {
        let mut card = ScoreCard::new();
        card.set_roll(1, 0, 3);
        assert_eq!(card.recorded_frames(), 2);
        assert_eq!(card.frame(1), Some(&FrameScore::new([3, 0, 0])));

        // Writing into an already recorded frame does not grow the card
        card.set_roll(1, 1, 4);
        assert_eq!(card.recorded_frames(), 2);
        assert_eq!(card.frame(1), Some(&FrameScore::new([3, 4, 0])));
    }

    #[test]
    fn test_final_score_ignores_sentinel_and_counts_bonus() {
        let mut card = ScoreCard::new();
        card.set_roll(1, 0, 10);
        card.add_bonus(1, 7);
        card.set_roll(2, 0, 5);
        card.set_roll(2, 1, 2);
        assert_eq!(card.final_score(), 24);
    }

    #[test]
    fn test_running_totals() {
        let mut card = ScoreCard::new();
        card.set_roll(1, 0, 5);
        card.set_roll(1, 1, 5);
        card.add_bonus(1, 2);
        card.set_roll(2, 0, 2);
        card.set_roll(2, 1, 3);
        card.set_roll(3, 0, 10);

        assert_eq!(card.running_totals().collect::<Vec<_>>(), [12, 17, 27]);
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serializes_recorded_frames_only() {
            let mut card = ScoreCard::new();
            card.set_roll(1, 0, 10);
            card.add_bonus(1, 3);
            card.set_roll(2, 0, 1);
            card.set_roll(2, 1, 2);

            let json = serde_json::to_string(&card).unwrap();
            assert_eq!(json, "[[0,0,0],[10,0,3],[1,2,0]]");

            let parsed: ScoreCard = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, card);
        }

        #[test]
        fn test_rejects_empty_card() {
            assert!(serde_json::from_str::<ScoreCard>("[]").is_err());
        }

        #[test]
        fn test_rejects_rolls_above_rack() {
            assert!(serde_json::from_str::<ScoreCard>("[[0,0,0],[5,251,0]]").is_err());
            assert!(serde_json::from_str::<ScoreCard>("[[0,0,0],[11,0,0]]").is_err());
            assert!(serde_json::from_str::<ScoreCard>("[[0,0,0],[10,0,21]]").is_err());
        }

        #[test]
        fn test_accepts_full_tenth_frame() {
            let mut json = String::from("[[0,0,0]");
            for _ in 1..FRAME_COUNT {
                json.push_str(",[10,0,20]");
            }
            json.push_str(",[10,10,10]]");

            let card: ScoreCard = serde_json::from_str(&json).unwrap();
            assert_eq!(card.final_score(), 300);
            assert!(card.frames().iter().all(|frame| !frame.is_spare()));
        }

        #[test]
        fn test_rejects_dirty_sentinel() {
            assert!(serde_json::from_str::<ScoreCard>("[[1,0,0]]").is_err());
        }

        #[test]
        fn test_rejects_too_many_frames() {
            let rows = vec![[0u8, 0, 0]; FRAME_COUNT + 2];
            let json = serde_json::to_string(&rows).unwrap();
            assert!(serde_json::from_str::<ScoreCard>(&json).is_err());
        }
    }
}
