//! Ship color value type and the named color pools.

use serde::{Deserialize, Serialize};

/// An RGB ship color. Compared by value, never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShipColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as an `(r, g, b)` tuple for the draw layer.
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// A pool entry: color plus its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub color: ShipColor,
    pub name: &'static str,
}

const fn named(r: u8, g: u8, b: u8, name: &'static str) -> NamedColor {
    NamedColor {
        color: ShipColor::rgb(r, g, b),
        name,
    }
}

pub const DEFAULT_COLOR: ShipColor = ShipColor::rgb(0, 255, 0);
pub const DEFAULT_COLOR_NAME: &str = "Green";
pub const UNKNOWN_COLOR_NAME: &str = "Unknown";

/// Colors the gacha machine can roll, in roulette order.
pub const GACHA_POOL: [NamedColor; 15] = [
    named(255, 0, 0, "Red"),
    named(0, 0, 255, "Blue"),
    named(0, 255, 255, "Cyan"),
    named(255, 0, 255, "Magenta"),
    named(255, 200, 0, "Orange"),
    named(255, 175, 175, "Pink"),
    named(255, 255, 0, "Yellow"),
    named(255, 255, 255, "White"),
    named(255, 20, 147, "Deep Pink"),
    named(0, 255, 127, "Spring Green"),
    named(138, 43, 226, "Blue Violet"),
    named(255, 165, 0, "Orange Red"),
    named(0, 191, 255, "Deep Sky Blue"),
    named(255, 215, 0, "Gold"),
    named(50, 205, 50, "Lime Green"),
];

pub const CRIMSON: ShipColor = ShipColor::rgb(220, 20, 60);
pub const TEAL: ShipColor = ShipColor::rgb(0, 128, 128);
pub const BRONZE: ShipColor = ShipColor::rgb(205, 127, 50);
pub const INDIGO: ShipColor = ShipColor::rgb(75, 0, 130);
pub const SILVER: ShipColor = ShipColor::rgb(192, 192, 192);

/// Colors granted only by achievements. Disjoint from `GACHA_POOL`.
pub const REWARD_POOL: [NamedColor; 5] = [
    NamedColor {
        color: CRIMSON,
        name: "Crimson",
    },
    NamedColor {
        color: TEAL,
        name: "Teal",
    },
    NamedColor {
        color: BRONZE,
        name: "Bronze",
    },
    NamedColor {
        color: INDIGO,
        name: "Indigo",
    },
    NamedColor {
        color: SILVER,
        name: "Silver",
    },
];

/// Display name: gacha pool first, then reward pool, then the default.
pub fn color_name(color: ShipColor) -> &'static str {
    GACHA_POOL
        .iter()
        .chain(REWARD_POOL.iter())
        .find(|entry| entry.color == color)
        .map(|entry| entry.name)
        .unwrap_or(if color == DEFAULT_COLOR {
            DEFAULT_COLOR_NAME
        } else {
            UNKNOWN_COLOR_NAME
        })
}

/// Position of a color in the gacha pool.
pub fn gacha_index(color: ShipColor) -> Option<usize> {
    GACHA_POOL.iter().position(|entry| entry.color == color)
}
