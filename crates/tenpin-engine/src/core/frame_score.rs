use serde::{Deserialize, Serialize};

use super::MAX_PINS;

/// One row of the score card: `[first roll, second roll, bonus-or-third-roll]`.
///
/// The meaning of the third slot depends on the frame:
///
/// - Frames 1-9: pins credited afterwards as a spare or strike bonus
/// - Frame 10: the bonus ball actually rolled in that frame
///
/// Frame 0 is a sentinel row that always stays `[0, 0, 0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameScore([u8; 3]);

impl From<[u8; 3]> for FrameScore {
    fn from(slots: [u8; 3]) -> Self {
        Self(slots)
    }
}

impl FrameScore {
    pub const EMPTY: Self = Self([0; 3]);

    #[must_use]
    pub const fn new(slots: [u8; 3]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub const fn as_array(&self) -> [u8; 3] {
        self.0
    }

    #[must_use]
    pub const fn first(&self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.0[1]
    }

    /// Bonus pins for frames 1-9, the third roll for frame 10.
    #[must_use]
    pub const fn extra(&self) -> u8 {
        self.0[2]
    }

    /// Sum of all three slots.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&pins| u16::from(pins)).sum()
    }

    /// Checks if the first roll knocked down every pin.
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        self.first() == MAX_PINS
    }

    /// Checks if the first two rolls cleared the rack without a strike.
    #[must_use]
    pub const fn is_spare(&self) -> bool {
        self.first() < MAX_PINS
            && matches!(self.first().checked_add(self.second()), Some(MAX_PINS))
    }

    /// Checks that both rolls fit in one rack and the third slot fits two racks.
    ///
    /// Every row produced by a score tracker satisfies this.
    #[must_use]
    pub const fn is_within_rack(&self) -> bool {
        self.first() <= MAX_PINS && self.second() <= MAX_PINS && self.extra() <= 2 * MAX_PINS
    }

    pub(crate) const fn set_slot(&mut self, slot: usize, pins: u8) {
        self.0[slot] = pins;
    }

    pub(crate) const fn add_bonus(&mut self, pins: u8) {
        self.0[2] += pins;
    }
}
