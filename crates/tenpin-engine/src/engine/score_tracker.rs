use arrayvec::ArrayVec;

use crate::{
    RollError,
    core::{FRAME_COUNT, MAX_PINS, MAX_ROLLS, ScoreCard},
};

use super::cursor::Cursor;

/// Ten-pin bowling score tracker for a single game.
///
/// Owns the score card and the roll cursor. [`add_roll`](Self::add_roll) is the
/// only operation that moves the game forward:
///
/// - The roll is validated before anything is written
/// - The pins are recorded in the current frame
/// - Outstanding spare and strike bonuses of the previous two frames are credited
/// - The cursor advances (a strike in frames 1-9 closes the frame immediately)
///
/// Frame 10 takes a third roll when its first roll is a strike or its first two
/// rolls make a spare. The per-frame pin cap is not applied in frame 10.
///
/// # Example
///
/// ```
/// use tenpin_engine::ScoreTracker;
///
/// let mut tracker = ScoreTracker::new();
/// tracker.add_roll(10).unwrap();
/// tracker.add_roll(10).unwrap();
/// tracker.add_roll(2).unwrap();
/// tracker.add_roll(4).unwrap();
///
/// let card = tracker.score_card();
/// assert_eq!(card.frame(1).unwrap().as_array(), [10, 0, 12]);
/// assert_eq!(card.frame(2).unwrap().as_array(), [10, 0, 6]);
/// assert_eq!(card.frame(3).unwrap().as_array(), [2, 4, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    card: ScoreCard,
    cursor: Cursor,
    rolls: ArrayVec<u8, MAX_ROLLS>,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    /// Creates a tracker at frame 1, roll 1 with an empty score card.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cursor(Cursor::INITIAL)
    }

    /// Like [`Self::new`], but starting from an arbitrary cursor position.
    ///
    /// The score card starts empty. Useful for exercising late-game states
    /// (such as [`Cursor::FINISHED`]) without playing the earlier frames.
    #[must_use]
    pub fn with_cursor(cursor: Cursor) -> Self {
        Self {
            card: ScoreCard::new(),
            cursor,
            rolls: ArrayVec::new(),
        }
    }

    /// Replays a sequence of rolls on a fresh tracker.
    ///
    /// Stops at the first rejected roll and returns its error.
    pub fn from_rolls<I>(rolls: I) -> Result<Self, RollError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut tracker = Self::new();
        for pins in rolls {
            tracker.add_roll(pins)?;
        }
        Ok(tracker)
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn current_frame(&self) -> usize {
        self.cursor.frame()
    }

    #[must_use]
    pub const fn previous_frame(&self) -> usize {
        self.cursor.frame() - 1
    }

    /// Returns the roll number within the current frame (1, 2, or 3 in frame 10).
    #[must_use]
    pub const fn roll_number(&self) -> u8 {
        self.cursor.roll()
    }

    #[must_use]
    pub const fn is_first_roll(&self) -> bool {
        self.cursor.is_first_roll()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.cursor.is_finished()
    }

    #[must_use]
    pub const fn score_card(&self) -> &ScoreCard {
        &self.card
    }

    /// Returns every accepted roll in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    #[must_use]
    pub const fn previous_frame_is_spare(&self) -> bool {
        self.card.get(self.previous_frame()).is_spare()
    }

    #[must_use]
    pub const fn previous_frame_is_strike(&self) -> bool {
        self.card.get(self.previous_frame()).is_strike()
    }

    #[must_use]
    pub const fn is_strike(pins: u8) -> bool {
        pins == MAX_PINS
    }

    /// Returns how many pins are standing for the next roll, or 0 once finished.
    ///
    /// In frame 10 the rack is reset after a strike or a spare.
    #[must_use]
    pub fn standing_pins(&self) -> u8 {
        if self.is_finished() {
            return 0;
        }
        let frame = self.card.get(self.current_frame());
        match (self.roll_number(), self.current_frame()) {
            (1, _) => MAX_PINS,
            (2, FRAME_COUNT) if frame.is_strike() => MAX_PINS,
            (2, _) => MAX_PINS.saturating_sub(frame.first()),
            _ if frame.is_spare() || Self::is_strike(frame.second()) => MAX_PINS,
            _ => MAX_PINS.saturating_sub(frame.second()),
        }
    }

    /// Moves the cursor to the first roll of the next frame.
    pub const fn next_frame(&mut self) {
        self.cursor.next_frame();
    }

    /// Moves the cursor to the next roll of the current frame.
    pub const fn change_roll_number(&mut self) {
        self.cursor.change_roll_number();
    }

    /// Records one roll.
    ///
    /// # Errors
    ///
    /// - [`RollError::InvalidRoll`] if `pins` is greater than 10
    /// - [`RollError::GameOver`] if the tenth frame is already complete
    /// - [`RollError::InvalidFrame`] if the second roll of frames 1-9 would bring
    ///   the frame above 10 pins
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if pins > MAX_PINS {
            return Err(RollError::InvalidRoll { pins });
        }
        if self.is_finished() {
            return Err(RollError::GameOver);
        }

        let frame = self.current_frame();
        let roll = self.roll_number();
        if frame < FRAME_COUNT && roll == 2 {
            let first = self.card.get(frame).first();
            if first + pins > MAX_PINS {
                return Err(RollError::InvalidFrame {
                    first,
                    second: pins,
                });
            }
        }

        self.card.set_roll(frame, usize::from(roll - 1), pins);
        self.rolls.push(pins);
        self.credit_bonuses(frame, roll, pins);
        self.advance(frame, roll, pins);
        Ok(())
    }

    /// Sums every frame of the score card.
    #[must_use]
    pub fn calculate_final_score(&self) -> u16 {
        self.card.final_score()
    }

    /// Credits `pins` to earlier frames still waiting on bonus rolls.
    ///
    /// A spare waits on one roll, a strike on two. When the previous frame is a
    /// strike it was closed by a single roll, so a strike one frame further back
    /// is still waiting on the first roll of this frame.
    fn credit_bonuses(&mut self, frame: usize, roll: u8, pins: u8) {
        let previous = frame - 1;
        // the bonus ball of frame 10 belongs to frame 10 alone
        if previous == 0 || roll > 2 {
            return;
        }

        let previous_frame = *self.card.get(previous);
        if previous_frame.is_strike() {
            self.card.add_bonus(previous, pins);
            if roll == 1 && previous > 1 && self.card.get(previous - 1).is_strike() {
                self.card.add_bonus(previous - 1, pins);
            }
        } else if previous_frame.is_spare() && roll == 1 {
            self.card.add_bonus(previous, pins);
        }
    }

    fn advance(&mut self, frame: usize, roll: u8, pins: u8) {
        if frame < FRAME_COUNT {
            if roll == 1 && !Self::is_strike(pins) {
                self.change_roll_number();
            } else {
                self.next_frame();
            }
            return;
        }

        let tenth = *self.card.get(frame);
        match roll {
            1 => self.change_roll_number(),
            2 if tenth.is_strike() || tenth.is_spare() => self.change_roll_number(),
            _ => self.next_frame(),
        }
    }
}
