//! Generation - procedural seeding of groves

use crate::components::{GridPosition, Structure, StructureKind, Tree, WaterTile};
use hecs::{Entity, World};
use rand::Rng;
use verdant_logic::species::SpeciesCatalog;

/// Parameters for seeding a grove.
#[derive(Debug, Clone)]
pub struct GroveConfig {
    pub width: i32,
    pub depth: i32,
    pub tree_count: usize,
    pub water_tile_count: usize,
    pub structure_count: usize,
}

impl Default for GroveConfig {
    fn default() -> Self {
        Self {
            width: 32,
            depth: 32,
            tree_count: 40,
            water_tile_count: 12,
            structure_count: 3,
        }
    }
}

/// Scatter water, structures and seed-stage trees across the grid.
/// Returns the tree entities. Deterministic for a seeded rng.
pub fn generate_grove(
    world: &mut World,
    catalog: &SpeciesCatalog,
    config: &GroveConfig,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    for _ in 0..config.water_tile_count {
        let pos = random_tile(config, rng);
        world.spawn((WaterTile, pos));
    }

    let kinds = [
        StructureKind::Greenhouse,
        StructureKind::Sprinkler,
        StructureKind::CompostSilo,
        StructureKind::HarvestTotem,
    ];
    for _ in 0..config.structure_count {
        let kind = kinds[rng.gen_range(0..kinds.len())];
        world.spawn((Structure::new(kind), random_tile(config, rng)));
    }

    // Sorted ids so a seeded rng always picks the same species sequence
    let species_ids = catalog.ids();
    let mut trees = Vec::with_capacity(config.tree_count);
    for _ in 0..config.tree_count {
        if species_ids.is_empty() {
            break;
        }
        let id = &species_ids[rng.gen_range(0..species_ids.len())];
        trees.push(world.spawn((Tree::new(id.clone()), random_tile(config, rng))));
    }
    trees
}

fn random_tile(config: &GroveConfig, rng: &mut impl Rng) -> GridPosition {
    GridPosition::new(
        rng.gen_range(0..config.width.max(1)),
        rng.gen_range(0..config.depth.max(1)),
    )
}
