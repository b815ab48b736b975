//! Harvest system - facet attachment, cooldown tracking, collection

use crate::components::{GridPosition, Harvestable, Structure, Tree};
use hecs::{Entity, World};
use verdant_logic::difficulty::DifficultyTier;
use verdant_logic::harvest::{compose_yield, ResourceYield, YieldModifiers};
use verdant_logic::season::Season;
use verdant_logic::species::{species_special, GrowthStage, SpeciesCatalog};

/// Product of harvest auras from structures in range of `pos`; 1.0
/// without any. Evaluated fresh at collection time, never cached.
pub fn structure_harvest_mult(world: &World, pos: GridPosition) -> f32 {
    world
        .query::<(&GridPosition, &Structure)>()
        .iter()
        .filter(|(_, (spos, s))| pos.dist_sq(**spos) <= (s.radius as i64) * (s.radius as i64))
        .map(|(_, (_, s))| s.harvest_mult)
        .product()
}

/// Attach or refresh the harvest facet on one tree.
///
/// No-op below Mature or for an unresolvable species. On an already
/// tracked tree only the snapshot (base yields, cycle length) is
/// refreshed — accumulated cooldown and readiness survive, so a pruning
/// credit applied just before re-invocation is not discarded.
pub fn init_harvestable(world: &mut World, entity: Entity, catalog: &SpeciesCatalog) {
    let snapshot = {
        let Ok(tree) = world.get::<&Tree>(entity) else {
            return;
        };
        if tree.stage < GrowthStage::Mature {
            return;
        }
        match catalog.get(&tree.species) {
            Some(species) => (species.base_yield.clone(), species.harvest_cycle_sec),
            None => return,
        }
    };

    if let Ok(mut facet) = world.get::<&mut Harvestable>(entity) {
        facet.resources = snapshot.0;
        facet.cooldown_total = snapshot.1;
        return;
    }
    let _ = world.insert_one(entity, Harvestable::new(snapshot.0, snapshot.1));
}

/// Attach facets to any Mature+ tree not yet tracked.
///
/// Run after the growth sweep so stage transitions feed harvest tracking
/// the same tick they happen.
pub fn attach_harvestables(world: &mut World, catalog: &SpeciesCatalog) {
    let mut pending: Vec<Entity> = Vec::new();
    for (entity, tree) in world.query::<&Tree>().iter() {
        if tree.stage >= GrowthStage::Mature && world.get::<&Harvestable>(entity).is_err() {
            pending.push(entity);
        }
    }
    for entity in pending {
        init_harvestable(world, entity, catalog);
    }
}

/// Advance cooldowns; flip `ready` once the cycle completes.
///
/// Ready facets are left untouched — only collection resets them.
pub fn harvest_system(world: &mut World, delta_secs: f32) {
    for (_, facet) in world.query_mut::<&mut Harvestable>() {
        if facet.ready {
            continue;
        }
        facet.cooldown_elapsed += delta_secs;
        if facet.cooldown_elapsed >= facet.cooldown_total {
            facet.ready = true;
        }
    }
}

/// Collect a ready harvest.
///
/// Returns `None` when there is nothing to collect — no facet, or the
/// cooldown is still running. That is the normal signal, not an error.
/// On success the cooldown restarts and the pruned flag is consumed.
pub fn collect_harvest(
    world: &mut World,
    entity: Entity,
    season: Season,
    tier: DifficultyTier,
) -> Option<Vec<ResourceYield>> {
    {
        let facet = world.get::<&Harvestable>(entity).ok()?;
        if !facet.ready {
            return None;
        }
    }

    let pos = world.get::<&GridPosition>(entity).ok().map(|p| *p);
    let structure_mult = pos.map(|p| structure_harvest_mult(world, p)).unwrap_or(1.0);

    let (stage, pruned, special, base) = {
        let tree = world.get::<&Tree>(entity).ok()?;
        let facet = world.get::<&Harvestable>(entity).ok()?;
        (
            tree.stage,
            tree.pruned,
            species_special(&tree.species),
            facet.resources.clone(),
        )
    };

    let yields = compose_yield(
        &base,
        &YieldModifiers {
            stage,
            pruned,
            structure_mult,
            season,
            tier,
            special,
        },
    );

    if let Ok(mut facet) = world.get::<&mut Harvestable>(entity) {
        facet.ready = false;
        facet.cooldown_elapsed = 0.0;
    }
    if let Ok(mut tree) = world.get::<&mut Tree>(entity) {
        tree.pruned = false;
    }

    Some(yields)
}
