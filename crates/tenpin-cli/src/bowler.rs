use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tenpin_engine::{RollError, ScoreTracker};

/// Bowler that knocks down each standing pin independently with probability `skill`.
///
/// Always rolls within the pins left standing, so every game it plays is legal.
/// The same seed and skill always produce the same game.
#[derive(Debug, Clone)]
pub struct RandomBowler {
    rng: Pcg32,
    skill: f64,
}

impl RandomBowler {
    /// # Panics
    ///
    /// Panics if `skill` is outside `0.0..=1.0`.
    pub fn new(seed: u64, skill: f64) -> Self {
        assert!((0.0..=1.0).contains(&skill), "skill out of range: {skill}");
        Self {
            rng: Pcg32::seed_from_u64(seed),
            skill,
        }
    }

    pub fn roll(&mut self, standing: u8) -> u8 {
        (0..standing).fold(0, |knocked, _| {
            knocked + u8::from(self.rng.random_bool(self.skill))
        })
    }

    /// Plays rolls until the tenth frame is complete.
    pub fn play(&mut self) -> Result<ScoreTracker, RollError> {
        let mut tracker = ScoreTracker::new();
        while !tracker.is_finished() {
            let pins = self.roll(tracker.standing_pins());
            tracker.add_roll(pins)?;
        }
        Ok(tracker)
    }
}
