//! Grove engine - main entry point for running the simulation

use crate::components::{GridPosition, Harvestable, Structure, StructureKind, Tree, WaterTile};
use crate::generation::{generate_grove, GroveConfig};
use crate::systems::{
    attach_harvestables, collect_harvest, growth_system, harvest_system, init_harvestable,
    offline_growth_system,
};
use hecs::{Entity, World};
use verdant_logic::constants::{OFFLINE_CAP_SECS, PRUNE_COOLDOWN_CREDIT};
use verdant_logic::difficulty::DifficultyTier;
use verdant_logic::harvest::ResourceYield;
use verdant_logic::season::{Season, Weather};
use verdant_logic::species::{GrowthStage, SpeciesCatalog};

/// Main simulation engine for a grove of growable trees
pub struct GroveEngine {
    /// ECS world containing trees, water tiles and structures
    pub world: World,
    /// Simulation time in seconds since start
    pub sim_time: f64,
    /// Season threaded into the growth sweep each tick
    pub season: Season,
    /// Weather threaded into the growth sweep each tick
    pub weather: Weather,
    /// Active difficulty tier (growth scalar + yield multiplier)
    pub difficulty: DifficultyTier,
    /// Read-only species data tables
    pub catalog: SpeciesCatalog,

    // Update timing
    last_harvest_update: f64,

    // Configuration
    time_scale: f32,
}

impl GroveEngine {
    /// Create a new empty simulation with the shipping species catalog
    pub fn new() -> Self {
        Self {
            world: World::new(),
            sim_time: 0.0,
            season: Season::Spring,
            weather: Weather::Clear,
            difficulty: DifficultyTier::Normal,
            catalog: SpeciesCatalog::builtin(),
            last_harvest_update: 0.0,
            time_scale: 1.0,
        }
    }

    /// Seed a grove of water tiles, structures and trees
    pub fn generate(&mut self, config: GroveConfig) {
        let mut rng = rand::thread_rng();
        generate_grove(&mut self.world, &self.catalog, &config, &mut rng);
    }

    /// Update the simulation by delta_seconds
    pub fn update(&mut self, delta_seconds: f32) {
        let scaled_delta = delta_seconds * self.time_scale;
        self.sim_time += scaled_delta as f64;

        // Growth every frame
        growth_system(
            &mut self.world,
            scaled_delta,
            self.season,
            self.weather.growth_mult(),
            self.difficulty.growth_scalar(),
            &self.catalog,
        );

        // Newly mature trees enter harvest tracking the same tick
        attach_harvestables(&mut self.world, &self.catalog);

        // Cooldowns tick at 1 Hz (per-second resolution)
        let harvest_interval = 1.0;
        if self.sim_time - self.last_harvest_update >= harvest_interval {
            let elapsed = (self.sim_time - self.last_harvest_update) as f32;
            harvest_system(&mut self.world, elapsed);
            self.last_harvest_update = self.sim_time;
        }
    }

    /// Fast-forward the world after an absence (e.g., on login).
    ///
    /// Applies the closed-form integrator (capped at 24 hours), attaches
    /// facets for trees that matured while away, then credits the same
    /// capped window to harvest cooldowns.
    pub fn resume(&mut self, elapsed_seconds: f32) {
        let credited = elapsed_seconds.clamp(0.0, OFFLINE_CAP_SECS);

        offline_growth_system(
            &mut self.world,
            elapsed_seconds,
            self.difficulty.growth_scalar(),
            &self.catalog,
        );
        attach_harvestables(&mut self.world, &self.catalog);
        harvest_system(&mut self.world, credited);

        self.sim_time += credited as f64;
        self.last_harvest_update = self.sim_time;
    }

    // ── Player actions ──────────────────────────────────────────────────

    /// Plant a new seed-stage tree. Returns the new entity.
    pub fn plant(&mut self, species: &str, x: i32, z: i32) -> Entity {
        self.world.spawn((Tree::new(species), GridPosition::new(x, z)))
    }

    /// Place a water tile.
    pub fn place_water(&mut self, x: i32, z: i32) -> Entity {
        self.world.spawn((WaterTile, GridPosition::new(x, z)))
    }

    /// Place a structure with its default aura.
    pub fn place_structure(&mut self, kind: StructureKind, x: i32, z: i32) -> Entity {
        self.world.spawn((Structure::new(kind), GridPosition::new(x, z)))
    }

    /// One-shot water bonus for the tree's current stage.
    pub fn water(&mut self, entity: Entity) -> bool {
        if let Ok(mut tree) = self.world.get::<&mut Tree>(entity) {
            tree.watered = true;
            true
        } else {
            false
        }
    }

    /// Double growth for the remainder of the tree's current stage.
    pub fn fertilize(&mut self, entity: Entity) -> bool {
        if let Ok(mut tree) = self.world.get::<&mut Tree>(entity) {
            tree.fertilized = true;
            true
        } else {
            false
        }
    }

    /// Mark a tree pruned: the next collection yields more, and a quarter
    /// of the harvest cooldown is credited immediately.
    pub fn prune(&mut self, entity: Entity) -> bool {
        let Ok(mut tree) = self.world.get::<&mut Tree>(entity) else {
            return false;
        };
        tree.pruned = true;
        drop(tree);

        if let Ok(mut facet) = self.world.get::<&mut Harvestable>(entity) {
            facet.cooldown_elapsed += facet.cooldown_total * PRUNE_COOLDOWN_CREDIT;
        }
        init_harvestable(&mut self.world, entity, &self.catalog);
        true
    }

    /// Collect a ready harvest; `None` means nothing to collect.
    pub fn collect(&mut self, entity: Entity) -> Option<Vec<ResourceYield>> {
        collect_harvest(&mut self.world, entity, self.season, self.difficulty)
    }

    // ── World state ─────────────────────────────────────────────────────

    pub fn set_season(&mut self, season: Season) {
        self.season = season;
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyTier) {
        self.difficulty = difficulty;
    }

    /// Set time scale (1.0 = real-time, 2.0 = 2x speed, etc.)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Get current time scale
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get current simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    // ── Read-only queries for UI / AI consumers ─────────────────────────

    /// Count all trees in the simulation
    pub fn tree_count(&self) -> usize {
        self.world.query::<&Tree>().iter().count()
    }

    /// Count trees at Mature or beyond
    pub fn mature_count(&self) -> usize {
        self.world
            .query::<&Tree>()
            .iter()
            .filter(|(_, t)| t.stage >= GrowthStage::Mature)
            .count()
    }

    /// Count trees with a harvest ready to collect
    pub fn ready_count(&self) -> usize {
        self.world
            .query::<&Harvestable>()
            .iter()
            .filter(|(_, h)| h.ready)
            .count()
    }

    /// Stage of one tree, if it exists
    pub fn stage_of(&self, entity: Entity) -> Option<GrowthStage> {
        self.world.get::<&Tree>(entity).ok().map(|t| t.stage)
    }

    /// Readiness of one tree's harvest, if tracked
    pub fn is_ready(&self, entity: Entity) -> bool {
        self.world
            .get::<&Harvestable>(entity)
            .map(|h| h.ready)
            .unwrap_or(false)
    }
}

impl Default for GroveEngine {
    fn default() -> Self {
        Self::new()
    }
}
