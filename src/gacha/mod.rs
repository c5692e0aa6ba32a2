//! Gacha machine: pay coins, spin the roulette, win a ship color.

pub mod logic;
pub mod types;

pub use logic::GachaMachine;
pub use types::{GachaCommand, GachaPhase, GachaResult};
