pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reasons a roll is rejected by [`ScoreTracker::add_roll`].
///
/// Every variant is a caller-input violation. A rejected roll leaves the
/// tracker untouched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum RollError {
    #[display("You cannot knock more than 10 pins in one roll.")]
    InvalidRoll { pins: u8 },
    #[display("You cannot knock more than 10 pins in one frame.")]
    InvalidFrame { first: u8, second: u8 },
    #[display("The game has finished.")]
    GameOver,
}
