pub use self::{frame_score::*, score_card::*};

pub(crate) mod frame_score;
pub(crate) mod score_card;

/// Number of playable frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Pins standing at the start of a rack.
pub const MAX_PINS: u8 = 10;

/// Upper bound on rolls in one game: two per frame for frames 1-9, three in the tenth.
pub const MAX_ROLLS: usize = (FRAME_COUNT - 1) * 2 + 3;
