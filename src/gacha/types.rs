use crate::cosmetics::ShipColor;

/// Roulette state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GachaPhase {
    Idle,
    Spinning,
}

/// Result of a completed roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GachaResult {
    pub color: ShipColor,
    pub color_name: &'static str,
    /// False when the color was already owned.
    pub is_new: bool,
    pub message: String,
}

/// Outcome of a gacha screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GachaCommand {
    None,
    RollStarted,
    RollRejected,
    Close,
}
