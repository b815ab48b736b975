//! Tree components: the growing plant and its harvestable facet.

use serde::{Deserialize, Serialize};
use verdant_logic::species::{GrowthStage, YieldEntry};

/// A growing plant. One per planted or wild-spawned tree entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Reference into the species catalog
    pub species: String,
    /// Current lifecycle stage; monotonically non-decreasing
    pub stage: GrowthStage,
    /// Fractional completion of the current stage, [0, 1)
    pub progress: f32,
    /// One-shot growth bonus, cleared on every stage advance
    pub watered: bool,
    /// Doubles growth for the rest of the stage, cleared on stage advance
    pub fertilized: bool,
    /// Consumed by the next successful collection, not by stage advance
    pub pruned: bool,
    /// Cumulative seconds of growth actually applied. Diagnostic only.
    pub total_growth_time: f64,
}

impl Tree {
    /// A freshly planted seed.
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            stage: GrowthStage::Seed,
            progress: 0.0,
            watered: false,
            fertilized: false,
            pruned: false,
            total_growth_time: 0.0,
        }
    }

    pub fn with_stage(mut self, stage: GrowthStage, progress: f32) -> Self {
        self.stage = stage;
        self.progress = progress;
        self
    }
}

/// Harvest-tracking facet, attached once a tree reaches Mature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harvestable {
    /// Base, un-multiplied per-cycle yield snapshot. All multipliers are
    /// computed fresh at collection time, never folded in here.
    pub resources: Vec<YieldEntry>,
    pub cooldown_elapsed: f32,
    /// Species harvest-cycle length in seconds
    pub cooldown_total: f32,
    /// Monotonic false→true; only collection resets it
    pub ready: bool,
}

impl Harvestable {
    pub fn new(resources: Vec<YieldEntry>, cooldown_total: f32) -> Self {
        Self {
            resources,
            cooldown_elapsed: 0.0,
            cooldown_total,
            ready: false,
        }
    }
}
