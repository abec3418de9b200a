//! Scoring state machine.
//!
//! - [`ScoreTracker`] - Records rolls, validates them and resolves bonuses
//! - [`Cursor`] - Position of the next roll (frame number and roll number)
//!
//! # Game Flow
//!
//! 1. Create a [`ScoreTracker`] (cursor at frame 1, roll 1)
//! 2. Feed each roll with [`ScoreTracker::add_roll`]
//! 3. Spare and strike bonuses are credited to earlier frames as rolls land
//! 4. After the tenth frame the cursor moves to frame 11 and further rolls fail
//! 5. Read the total with [`ScoreTracker::calculate_final_score`]
//!
//! # Example
//!
//! ```
//! use tenpin_engine::{RollError, ScoreTracker};
//!
//! let mut tracker = ScoreTracker::new();
//! for _ in 0..12 {
//!     tracker.add_roll(10)?;
//! }
//!
//! assert!(tracker.is_finished());
//! assert_eq!(tracker.calculate_final_score(), 300);
//! assert_eq!(tracker.add_roll(3), Err(RollError::GameOver));
//! # Ok::<(), RollError>(())
//! ```

pub use self::{cursor::*, score_tracker::*};

mod cursor;
mod score_tracker;
