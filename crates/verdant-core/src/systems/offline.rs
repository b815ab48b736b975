//! Offline catch-up sweep - batch application of the closed-form integrator

use crate::components::Tree;
use hecs::World;
use verdant_logic::offline::calculate_offline_growth;
use verdant_logic::species::{species_special, SpeciesCatalog};

/// Apply catch-up growth to every tree in one pass.
///
/// Trees whose species cannot be resolved are left unchanged apart from
/// losing their water bonus (water never survives an absence). A stage
/// advance clears the one-shot fertilizer flag, matching the live sweep.
pub fn offline_growth_system(
    world: &mut World,
    elapsed_secs: f32,
    difficulty_scalar: f32,
    catalog: &SpeciesCatalog,
) {
    for (_, tree) in world.query_mut::<&mut Tree>() {
        let Some(species) = catalog.get(&tree.species) else {
            tree.watered = false;
            continue;
        };
        let special = species_special(&tree.species);
        let outcome = calculate_offline_growth(
            tree.stage,
            tree.progress,
            elapsed_secs,
            species,
            special,
            difficulty_scalar,
        );
        if outcome.stage != tree.stage {
            tree.fertilized = false;
        }
        tree.stage = outcome.stage;
        tree.progress = outcome.progress;
        tree.watered = outcome.watered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::GridPosition;
    use verdant_logic::species::{species_ids, GrowthStage};

    #[test]
    fn test_batch_advances_all_trees() {
        let mut world = World::new();
        let catalog = SpeciesCatalog::builtin();
        let fern = world.spawn((Tree::new(species_ids::CLUSTERFERN), GridPosition::new(0, 0)));
        let oak = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(5, 5)));

        offline_growth_system(&mut world, 30.0, 1.0, &catalog);

        // Clusterfern seed stage is 15s at difficulty 1 — already past it
        assert!(world.get::<&Tree>(fern).unwrap().stage > GrowthStage::Seed);
        assert!(world.get::<&Tree>(oak).unwrap().progress > 0.0);
    }

    #[test]
    fn test_unresolved_species_only_loses_water() {
        let mut world = World::new();
        let catalog = SpeciesCatalog::builtin();
        let entity = world.spawn((Tree::new("ghostwood"), GridPosition::new(0, 0)));
        world.get::<&mut Tree>(entity).unwrap().watered = true;
        world.get::<&mut Tree>(entity).unwrap().progress = 0.4;

        offline_growth_system(&mut world, 10_000.0, 1.0, &catalog);

        let tree = world.get::<&Tree>(entity).unwrap();
        assert_eq!(tree.stage, GrowthStage::Seed);
        assert!((tree.progress - 0.4).abs() < 1e-6);
        assert!(!tree.watered);
    }

    #[test]
    fn test_water_evaporates_during_absence() {
        let mut world = World::new();
        let catalog = SpeciesCatalog::builtin();
        let entity = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 0)));
        world.get::<&mut Tree>(entity).unwrap().watered = true;

        offline_growth_system(&mut world, 5.0, 1.0, &catalog);

        assert!(!world.get::<&Tree>(entity).unwrap().watered);
    }

    #[test]
    fn test_stage_advance_clears_fertilizer() {
        let mut world = World::new();
        let catalog = SpeciesCatalog::builtin();
        let entity = world.spawn((Tree::new(species_ids::CLUSTERFERN), GridPosition::new(0, 0)));
        world.get::<&mut Tree>(entity).unwrap().fertilized = true;

        offline_growth_system(&mut world, 30.0, 1.0, &catalog);

        let tree = world.get::<&Tree>(entity).unwrap();
        assert!(tree.stage > GrowthStage::Seed);
        assert!(!tree.fertilized);
    }
}
