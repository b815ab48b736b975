//! Growth system - per-tick progress accumulation and stage transitions

use crate::components::{GridPosition, Structure, Tree, WaterTile};
use hecs::World;
use std::collections::{HashMap, HashSet};
use verdant_logic::constants::{
    FERTILIZED_GROWTH_MULT, NEAR_WATER_GROWTH_MULT, TERMINAL_PROGRESS_CLAMP,
};
use verdant_logic::growth::{calc_growth_rate, cluster_bonus};
use verdant_logic::season::Season;
use verdant_logic::species::{species_special, SpeciesCatalog, SpeciesSpecial};

/// Read-only spatial snapshot built once per sweep: water tiles, tree
/// occupancy counts, and structure auras.
///
/// O(n) to build, O(1) per neighbor lookup. Mutations made while a sweep
/// runs never feed back into these lookups.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    water: HashSet<(i32, i32)>,
    tree_counts: HashMap<(i32, i32), u32>,
    structures: Vec<(GridPosition, Structure)>,
}

impl SpatialIndex {
    /// Snapshot the world before any tree is mutated.
    pub fn build(world: &World) -> Self {
        let mut index = SpatialIndex::default();
        for (_, (pos, _)) in world.query::<(&GridPosition, &WaterTile)>().iter() {
            index.water.insert((pos.x, pos.z));
        }
        for (_, (pos, _)) in world.query::<(&GridPosition, &Tree)>().iter() {
            *index.tree_counts.entry((pos.x, pos.z)).or_insert(0) += 1;
        }
        for (_, (pos, structure)) in world.query::<(&GridPosition, &Structure)>().iter() {
            index.structures.push((*pos, *structure));
        }
        index
    }

    /// Any water tile on the 8-neighbor ring?
    pub fn water_adjacent(&self, pos: GridPosition) -> bool {
        pos.ring().any(|p| self.water.contains(&(p.x, p.z)))
    }

    /// Trees on the 8-neighbor ring (the tree's own tile excluded).
    pub fn adjacent_trees(&self, pos: GridPosition) -> u32 {
        pos.ring()
            .map(|p| self.tree_counts.get(&(p.x, p.z)).copied().unwrap_or(0))
            .sum()
    }

    /// Product of growth auras from structures in range; 1.0 without any.
    pub fn structure_growth_mult(&self, pos: GridPosition) -> f32 {
        self.structures
            .iter()
            .filter(|(spos, s)| pos.dist_sq(*spos) <= (s.radius as i64) * (s.radius as i64))
            .map(|(_, s)| s.growth_mult)
            .product()
    }
}

/// Advance every non-terminal tree by `delta_secs`.
///
/// Missing species data or a non-positive stage time silently freezes
/// that tree for the tick; nothing here returns an error or panics. The
/// difficulty scalar comes from the active tier and is applied on the
/// offline path too, keeping the two integrators consistent.
pub fn growth_system(
    world: &mut World,
    delta_secs: f32,
    season: Season,
    weather_mult: f32,
    difficulty_scalar: f32,
    catalog: &SpeciesCatalog,
) {
    let index = SpatialIndex::build(world);

    for (_, (tree, pos)) in world.query_mut::<(&mut Tree, &GridPosition)>() {
        if tree.stage.is_terminal() {
            continue;
        }
        let Some(species) = catalog.get(&tree.species) else {
            continue;
        };
        let base_time = species.base_growth_times[tree.stage.index()];
        if base_time <= 0.0 {
            continue;
        }

        let special = species_special(&tree.species);
        let rate = calc_growth_rate(
            base_time,
            species.difficulty,
            season,
            tree.watered,
            species.evergreen,
            special,
        );
        if rate <= 0.0 {
            continue;
        }

        let structure_mult = index.structure_growth_mult(*pos);
        let fertilized_mult = if tree.fertilized {
            FERTILIZED_GROWTH_MULT
        } else {
            1.0
        };
        let species_bonus = match special {
            Some(SpeciesSpecial::ColdHardy) if index.water_adjacent(*pos) => NEAR_WATER_GROWTH_MULT,
            Some(SpeciesSpecial::ClusterLoving) => cluster_bonus(index.adjacent_trees(*pos)),
            _ => 1.0,
        };

        tree.progress += rate
            * weather_mult
            * structure_mult
            * fertilized_mult
            * species_bonus
            * difficulty_scalar
            * delta_secs;
        tree.total_growth_time += delta_secs as f64;

        // A single oversized tick may cross several stage boundaries
        while tree.progress >= 1.0 && !tree.stage.is_terminal() {
            tree.progress -= 1.0;
            tree.stage = tree.stage.next();
            tree.watered = false;
            tree.fertilized = false;
        }
        if tree.stage.is_terminal() {
            tree.progress = tree.progress.min(TERMINAL_PROGRESS_CLAMP);
        }
    }
}
