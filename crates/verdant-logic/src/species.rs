//! Species catalog — growth curves, yields, and the hard-coded specials.
//!
//! The catalog is read-only input to the engine. A handful of species
//! carry special rules (cold-hardiness, water proximity, clustering,
//! old-growth timber, autumn fruit); these are a closed enum resolved by
//! id in [`species_special`] rather than generic data fields, so the rate
//! and yield functions stay total and exhaustively testable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Discrete lifecycle phase. `OldGrowth` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum GrowthStage {
    Seed = 0,
    Sprout = 1,
    Sapling = 2,
    Mature = 3,
    OldGrowth = 4,
}

impl GrowthStage {
    /// Ordinal, also the index into `base_growth_times` while non-terminal.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stage for an ordinal; values past the end clamp to `OldGrowth`.
    pub fn from_index(index: u8) -> GrowthStage {
        match index {
            0 => GrowthStage::Seed,
            1 => GrowthStage::Sprout,
            2 => GrowthStage::Sapling,
            3 => GrowthStage::Mature,
            _ => GrowthStage::OldGrowth,
        }
    }

    /// The following stage; saturates at `OldGrowth`.
    pub fn next(self) -> GrowthStage {
        GrowthStage::from_index(self as u8 + 1)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GrowthStage::OldGrowth)
    }
}

/// Resource categories a harvest can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Timber,
    Fruit,
    Sap,
    Seeds,
    Resin,
}

/// One base-yield line in a species definition: per-cycle, un-multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEntry {
    pub resource: ResourceKind,
    pub amount: f32,
}

impl YieldEntry {
    pub fn new(resource: ResourceKind, amount: f32) -> Self {
        Self { resource, amount }
    }
}

/// Static species data: growth curve, difficulty, harvest cycle, yields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub id: String,
    pub name: String,
    /// Seconds to complete stages 0–3. The terminal stage has no exit time.
    pub base_growth_times: [f32; 4],
    /// 1 (fast) to 5 (slow) — indexes the growth divisor table.
    pub difficulty: u8,
    pub evergreen: bool,
    /// Seconds between harvests once mature.
    pub harvest_cycle_sec: f32,
    pub base_yield: Vec<YieldEntry>,
}

/// Well-known species ids referenced by the special-rule table.
pub mod species_ids {
    pub const OAK: &str = "oak";
    pub const ALDER: &str = "alder";
    pub const PINE: &str = "pine";
    pub const CHERRY: &str = "cherry";
    pub const FROSTBARK: &str = "frostbark";
    pub const CLUSTERFERN: &str = "clusterfern";
    pub const IRONWOOD: &str = "ironwood";
    pub const GLOAMFRUIT: &str = "gloamfruit";
}

/// Hard-coded per-species exceptions to the generic rate/yield formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesSpecial {
    /// Grows at half rate through winter and 1.2x next to water.
    ColdHardy,
    /// Gains up to +60% growth from trees on its 8-neighbor ring.
    ClusterLoving,
    /// Timber yields triple once the tree reaches old growth.
    DenseTimber,
    /// Fruit yields triple when collected in autumn.
    AutumnGold,
}

/// Resolve the special rule for a species id, if it has one.
pub fn species_special(id: &str) -> Option<SpeciesSpecial> {
    match id {
        species_ids::FROSTBARK => Some(SpeciesSpecial::ColdHardy),
        species_ids::CLUSTERFERN => Some(SpeciesSpecial::ClusterLoving),
        species_ids::IRONWOOD => Some(SpeciesSpecial::DenseTimber),
        species_ids::GLOAMFRUIT => Some(SpeciesSpecial::AutumnGold),
        _ => None,
    }
}

/// Read-only species lookup table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    species: HashMap<String, SpeciesDef>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipping species table.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for def in builtin_species() {
            catalog.insert(def);
        }
        catalog
    }

    pub fn insert(&mut self, def: SpeciesDef) {
        self.species.insert(def.id.clone(), def);
    }

    pub fn get(&self, id: &str) -> Option<&SpeciesDef> {
        self.species.get(id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Species ids in stable (sorted) order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.species.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn builtin_species() -> Vec<SpeciesDef> {
    use ResourceKind::*;
    vec![
        SpeciesDef {
            id: species_ids::OAK.into(),
            name: "Oak".into(),
            base_growth_times: [45.0, 120.0, 300.0, 600.0],
            difficulty: 2,
            evergreen: false,
            harvest_cycle_sec: 120.0,
            base_yield: vec![YieldEntry::new(Timber, 3.0), YieldEntry::new(Seeds, 1.0)],
        },
        SpeciesDef {
            id: species_ids::ALDER.into(),
            name: "Alder".into(),
            base_growth_times: [30.0, 90.0, 210.0, 450.0],
            difficulty: 1,
            evergreen: false,
            harvest_cycle_sec: 90.0,
            base_yield: vec![YieldEntry::new(Timber, 2.0)],
        },
        SpeciesDef {
            id: species_ids::PINE.into(),
            name: "Pine".into(),
            base_growth_times: [60.0, 150.0, 360.0, 720.0],
            difficulty: 2,
            evergreen: true,
            harvest_cycle_sec: 150.0,
            base_yield: vec![YieldEntry::new(Resin, 2.0), YieldEntry::new(Timber, 2.0)],
        },
        SpeciesDef {
            id: species_ids::CHERRY.into(),
            name: "Cherry".into(),
            base_growth_times: [40.0, 110.0, 260.0, 520.0],
            difficulty: 2,
            evergreen: false,
            harvest_cycle_sec: 75.0,
            base_yield: vec![YieldEntry::new(Fruit, 4.0), YieldEntry::new(Sap, 1.0)],
        },
        // Cold-hardy: half-rate winter growth, 1.2x next to water
        SpeciesDef {
            id: species_ids::FROSTBARK.into(),
            name: "Frostbark".into(),
            base_growth_times: [75.0, 180.0, 420.0, 840.0],
            difficulty: 3,
            evergreen: true,
            harvest_cycle_sec: 180.0,
            base_yield: vec![YieldEntry::new(Resin, 3.0), YieldEntry::new(Timber, 1.0)],
        },
        // Cluster-loving: grows faster surrounded by other trees
        SpeciesDef {
            id: species_ids::CLUSTERFERN.into(),
            name: "Clusterfern".into(),
            base_growth_times: [15.0, 40.0, 90.0, 180.0],
            difficulty: 1,
            evergreen: false,
            harvest_cycle_sec: 45.0,
            base_yield: vec![YieldEntry::new(Seeds, 2.0)],
        },
        // Dense timber: triple timber at old growth
        SpeciesDef {
            id: species_ids::IRONWOOD.into(),
            name: "Ironwood".into(),
            base_growth_times: [120.0, 300.0, 700.0, 1400.0],
            difficulty: 5,
            evergreen: false,
            harvest_cycle_sec: 240.0,
            base_yield: vec![YieldEntry::new(Timber, 2.0), YieldEntry::new(Sap, 1.0)],
        },
        // Autumn gold: triple fruit when collected in autumn
        SpeciesDef {
            id: species_ids::GLOAMFRUIT.into(),
            name: "Gloamfruit".into(),
            base_growth_times: [50.0, 140.0, 320.0, 640.0],
            difficulty: 4,
            evergreen: false,
            harvest_cycle_sec: 100.0,
            base_yield: vec![YieldEntry::new(Fruit, 3.0), YieldEntry::new(Seeds, 1.0)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ordering() {
        assert!(GrowthStage::Seed < GrowthStage::Sprout);
        assert!(GrowthStage::Mature < GrowthStage::OldGrowth);
        assert!(GrowthStage::OldGrowth.is_terminal());
        assert!(!GrowthStage::Mature.is_terminal());
    }

    #[test]
    fn test_stage_next_saturates() {
        assert_eq!(GrowthStage::Seed.next(), GrowthStage::Sprout);
        assert_eq!(GrowthStage::Mature.next(), GrowthStage::OldGrowth);
        assert_eq!(GrowthStage::OldGrowth.next(), GrowthStage::OldGrowth);
    }

    #[test]
    fn test_builtin_catalog_sane() {
        let catalog = SpeciesCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        for id in catalog.ids() {
            let def = catalog.get(&id).unwrap();
            assert!(def.base_growth_times.iter().all(|&t| t > 0.0), "{}", id);
            assert!((1..=5).contains(&def.difficulty), "{}", id);
            assert!(def.harvest_cycle_sec > 0.0, "{}", id);
            assert!(!def.base_yield.is_empty(), "{}", id);
        }
    }

    #[test]
    fn test_specials_closed_set() {
        assert_eq!(
            species_special(species_ids::FROSTBARK),
            Some(SpeciesSpecial::ColdHardy)
        );
        assert_eq!(
            species_special(species_ids::CLUSTERFERN),
            Some(SpeciesSpecial::ClusterLoving)
        );
        assert_eq!(
            species_special(species_ids::IRONWOOD),
            Some(SpeciesSpecial::DenseTimber)
        );
        assert_eq!(
            species_special(species_ids::GLOAMFRUIT),
            Some(SpeciesSpecial::AutumnGold)
        );
        assert_eq!(species_special(species_ids::OAK), None);
        assert_eq!(species_special("unknown"), None);
    }

    #[test]
    fn test_catalog_lookup_missing() {
        let catalog = SpeciesCatalog::builtin();
        assert!(catalog.get("ghostwood").is_none());
    }
}
