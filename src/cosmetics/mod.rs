//! Ship color cosmetics.
//!
//! Colors come from the gacha machine or from achievement rewards and last
//! for the current session only.

pub mod palette;
pub mod registry;
pub mod types;

pub use palette::{Palette, PaletteCommand};
pub use registry::ColorRegistry;
pub use types::{color_name, NamedColor, ShipColor, DEFAULT_COLOR, GACHA_POOL, REWARD_POOL};
