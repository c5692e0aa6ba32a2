//! Utility modules: persistence helpers and frame countdowns.

pub mod countdown;
pub mod persistence;

pub use countdown::{Countdown, TimedMessage};
