//! Yield composition — the late-bound multiplier product applied at
//! collection time.
//!
//! Base yields are stored un-multiplied on the harvest facet; everything
//! here is evaluated fresh from current tree/world state when the player
//! collects, so season changes, new structures, or a pruning between
//! readiness and collection are all honored.

use crate::constants::{
    AUTUMN_FRUIT_YIELD_MULT, DENSE_TIMBER_YIELD_MULT, OLD_GROWTH_YIELD_MULT, PRUNED_YIELD_MULT,
};
use crate::difficulty::DifficultyTier;
use crate::season::Season;
use crate::species::{GrowthStage, ResourceKind, SpeciesSpecial, YieldEntry};
use serde::{Deserialize, Serialize};

/// Everything that scales a harvest, gathered at collection time.
#[derive(Debug, Clone, Copy)]
pub struct YieldModifiers {
    pub stage: GrowthStage,
    pub pruned: bool,
    /// Nearby-structure harvest boost; 1.0 absent any structure.
    pub structure_mult: f32,
    pub season: Season,
    pub tier: DifficultyTier,
    pub special: Option<SpeciesSpecial>,
}

/// One collected stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceYield {
    pub resource: ResourceKind,
    pub amount: u32,
}

/// Apply the combined multiplier to each base entry.
///
/// Species specials scale per resource *kind*, not globally — a timber
/// bonus must not inflate a co-yielded sap line. Rounding is always
/// upward, so any positive base yield lands at least one unit.
pub fn compose_yield(base: &[YieldEntry], m: &YieldModifiers) -> Vec<ResourceYield> {
    let stage_mult = if m.stage >= GrowthStage::OldGrowth {
        OLD_GROWTH_YIELD_MULT
    } else {
        1.0
    };
    let pruned_mult = if m.pruned { PRUNED_YIELD_MULT } else { 1.0 };
    let common = stage_mult * pruned_mult * m.structure_mult * m.tier.yield_mult();

    base.iter()
        .map(|entry| {
            let special_mult = match (m.special, entry.resource) {
                (Some(SpeciesSpecial::DenseTimber), ResourceKind::Timber)
                    if m.stage >= GrowthStage::OldGrowth =>
                {
                    DENSE_TIMBER_YIELD_MULT
                }
                (Some(SpeciesSpecial::AutumnGold), ResourceKind::Fruit)
                    if m.season == Season::Autumn =>
                {
                    AUTUMN_FRUIT_YIELD_MULT
                }
                _ => 1.0,
            };
            ResourceYield {
                resource: entry.resource,
                // Saturating float-to-int cast clamps negatives to zero
                amount: (entry.amount * common * special_mult).ceil() as u32,
            }
        })
        .collect()
}
