//! Economy simulator for Monte Carlo analysis.
//!
//! Plays thousands of headless sessions through the public API to look at:
//! - How many coins a run earns and where they go (shop vs gacha)
//! - How fast the color collection fills up and the duplicate rate
//! - Which achievements a typical run unlocks

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
