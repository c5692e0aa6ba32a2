//! Error types shared across the progression core.
//!
//! Storage errors are never shown to the player; they are logged and healed.
//! Economy errors carry the message the shop and gacha screens display.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the persistence gateway.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine home directory")]
    HomeDirUnavailable,
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("save file version {found} is not supported")]
    UnsupportedVersion { found: u32 },
}

/// Rejected shop purchase. `Display` is the player-facing feedback line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Invalid level!")]
    InvalidLevel { level: u8, max_level: u8 },
    #[error("Already owned!")]
    AlreadyOwned { current_level: u8 },
    #[error("Not enough coins!")]
    InsufficientFunds { price: u32, balance: u32 },
    /// The price was refunded before this error was returned.
    #[error("Purchase failed!")]
    ApplyFailed { refunded: u32 },
}

/// Rejected gacha roll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("Not enough coins! Need {price} coins.")]
    InsufficientFunds { price: u32, balance: u32 },
    #[error("A roll is already spinning.")]
    AlreadySpinning,
}

/// The upgrade-effects collaborator refused a level change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("level {level} exceeds max level {max_level}")]
    AboveMax { level: u8, max_level: u8 },
    #[error("upgrade system rejected the change: {0}")]
    Rejected(String),
}

/// Invalid economy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("config {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("spin slowdown start ({slowdown_start}) must be below spin duration ({duration})")]
    SlowdownAfterEnd { slowdown_start: u32, duration: u32 },
}
