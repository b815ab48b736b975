//! Difficulty tables — per-species growth divisor and the active tier.

use serde::{Deserialize, Serialize};

/// Growth-time divisor for species difficulty 1–5.
///
/// Higher difficulty stretches the growth curve. Unknown values are
/// neutral rather than an error.
pub fn growth_divisor(difficulty: u8) -> f32 {
    match difficulty {
        1 => 1.0,
        2 => 1.2,
        3 => 1.5,
        4 => 2.0,
        5 => 3.0,
        _ => 1.0,
    }
}

/// World-level difficulty setting chosen by the player.
///
/// Scales growth speed and harvest yield globally, on top of the
/// per-species difficulty divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Story,
    Explore,
    #[default]
    Normal,
    Hardcore,
}

impl DifficultyTier {
    /// Multiplier on every growth rate, per-tick and offline alike.
    pub fn growth_scalar(self) -> f32 {
        match self {
            DifficultyTier::Story => 1.5,
            DifficultyTier::Explore => 1.2,
            DifficultyTier::Normal => 1.0,
            DifficultyTier::Hardcore => 0.8,
        }
    }

    /// Multiplier on every collected yield.
    pub fn yield_mult(self) -> f32 {
        match self {
            DifficultyTier::Story => 1.5,
            DifficultyTier::Explore => 1.3,
            DifficultyTier::Normal => 1.0,
            DifficultyTier::Hardcore => 0.8,
        }
    }

    /// Parse a tier identifier. Unknown names fall back to `Normal`.
    pub fn parse(name: &str) -> DifficultyTier {
        match name.to_ascii_lowercase().as_str() {
            "story" => DifficultyTier::Story,
            "explore" => DifficultyTier::Explore,
            "hardcore" => DifficultyTier::Hardcore,
            _ => DifficultyTier::Normal,
        }
    }
}
