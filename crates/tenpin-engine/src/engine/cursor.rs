use crate::core::FRAME_COUNT;

/// Position of the next roll.
///
/// `frame` runs from 1 to 10 while the game is in progress and is 11 once the
/// game has finished. `roll` is 1 or 2, or 3 for the bonus ball of frame 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    frame: usize,
    roll: u8,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Cursor {
    pub const INITIAL: Self = Self { frame: 1, roll: 1 };
    pub const FINISHED: Self = Self {
        frame: FRAME_COUNT + 1,
        roll: 1,
    };

    /// Creates a cursor, or `None` if the position cannot occur in a game.
    #[must_use]
    pub const fn new(frame: usize, roll: u8) -> Option<Self> {
        if frame == 0 || frame > FRAME_COUNT + 1 {
            return None;
        }
        if roll == 0 || roll > max_roll(frame) {
            return None;
        }
        Some(Self { frame, roll })
    }

    #[must_use]
    pub const fn frame(self) -> usize {
        self.frame
    }

    #[must_use]
    pub const fn roll(self) -> u8 {
        self.roll
    }

    #[must_use]
    pub const fn is_first_roll(self) -> bool {
        self.roll == 1
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.frame > FRAME_COUNT
    }

    /// Moves to the first roll of the next frame. Stops at [`Self::FINISHED`].
    pub(crate) const fn next_frame(&mut self) {
        if !self.is_finished() {
            self.frame += 1;
        }
        self.roll = 1;
    }

    /// Moves to the next roll within the current frame.
    ///
    /// Saturates at roll 2 in frames 1-9 and at roll 3 in frame 10.
    pub(crate) const fn change_roll_number(&mut self) {
        if self.roll < max_roll(self.frame) {
            self.roll += 1;
        }
    }
}

const fn max_roll(frame: usize) -> u8 {
    match frame {
        FRAME_COUNT => 3,
        f if f > FRAME_COUNT => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_position() {
        assert_eq!(Cursor::new(1, 1), Some(Cursor::INITIAL));
        assert_eq!(Cursor::new(11, 1), Some(Cursor::FINISHED));
        assert!(Cursor::new(9, 2).is_some());
        assert!(Cursor::new(10, 3).is_some());

        assert_eq!(Cursor::new(0, 1), None);
        assert_eq!(Cursor::new(12, 1), None);
        assert_eq!(Cursor::new(5, 0), None);
        assert_eq!(Cursor::new(9, 3), None);
        assert_eq!(Cursor::new(11, 2), None);
    }

    #[test]
    fn test_next_frame_resets_roll() {
        let mut cursor = Cursor::new(3, 2).unwrap();
        cursor.next_frame();
        assert_eq!(cursor, Cursor::new(4, 1).unwrap());
    }

    #[test]
    fn test_next_frame_stops_when_finished() {
        let mut cursor = Cursor::new(10, 3).unwrap();
        cursor.next_frame();
        assert_eq!(cursor, Cursor::FINISHED);
        cursor.next_frame();
        assert_eq!(cursor, Cursor::FINISHED);
    }

    #[test]
    fn test_change_roll_number_saturates() {
        let mut cursor = Cursor::INITIAL;
        cursor.change_roll_number();
        assert_eq!(cursor.roll(), 2);
        cursor.change_roll_number();
        assert_eq!(cursor.roll(), 2);

        let mut tenth = Cursor::new(10, 2).unwrap();
        tenth.change_roll_number();
        assert_eq!(tenth.roll(), 3);
        tenth.change_roll_number();
        assert_eq!(tenth.roll(), 3);
    }
}
