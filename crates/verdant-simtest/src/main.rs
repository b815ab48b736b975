//! Verdant Headless Simulation Harness
//!
//! Validates pure simulation logic and data without a game client.
//! Runs entirely in-process — no DB, no networking, no rendering.
//!
//! Usage:
//!   cargo run -p verdant-simtest
//!   cargo run -p verdant-simtest -- --verbose

use hecs::World;
use serde::Deserialize;
use verdant_core::components::{GridPosition, Harvestable, Tree, WaterTile};
use verdant_core::generation::GroveConfig;
use verdant_core::prelude::GroveEngine;
use verdant_core::systems::{collect_harvest, growth_system, harvest_system, init_harvestable};
use verdant_logic::difficulty::{growth_divisor, DifficultyTier};
use verdant_logic::growth::{calc_growth_rate, cluster_bonus};
use verdant_logic::offline::calculate_offline_growth;
use verdant_logic::season::{season_for_day, Season, Weather};
use verdant_logic::species::{species_ids, species_special, GrowthStage, SpeciesCatalog};

// ── Species manifest (same JSON an authoring pipeline edits) ────────────
const MANIFEST_JSON: &str = include_str!("../../../data/species_manifest.json");

#[derive(Debug, Deserialize)]
struct SpeciesSpec {
    id: String,
    #[allow(dead_code)]
    name: String,
    base_growth_times: [f32; 4],
    difficulty: u8,
    evergreen: bool,
    harvest_cycle_sec: f32,
    base_yield: Vec<YieldSpec>,
}

#[derive(Debug, Deserialize)]
struct YieldSpec {
    #[allow(dead_code)]
    resource: String,
    amount: f32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Verdant Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Species manifest validation
    results.extend(validate_species_manifest(verbose));

    // 2. Growth-rate model sweep
    results.extend(validate_growth_rates(verbose));

    // 3. Stage engine behavior
    results.extend(validate_stage_engine(verbose));

    // 4. Species spatial bonuses
    results.extend(validate_spatial_bonuses(verbose));

    // 5. Harvest readiness & yield loop
    results.extend(validate_harvest_loop(verbose));

    // 6. Offline catch-up integrator
    results.extend(validate_offline_integrator(verbose));

    // 7. End-to-end grove scenario
    results.extend(validate_grove_scenario(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Species Manifest ─────────────────────────────────────────────────

fn validate_species_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Species Manifest ---");
    let mut results = Vec::new();

    let manifest: Vec<SpeciesSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "manifest_not_empty".into(),
        passed: !manifest.is_empty(),
        detail: format!("{} species loaded", manifest.len()),
    });

    let bad_times: Vec<_> = manifest
        .iter()
        .filter(|s| s.base_growth_times.iter().any(|&t| t <= 0.0))
        .collect();
    results.push(TestResult {
        name: "manifest_positive_growth_times".into(),
        passed: bad_times.is_empty(),
        detail: if bad_times.is_empty() {
            "all stage times positive".into()
        } else {
            format!("{} species with non-positive stage time", bad_times.len())
        },
    });

    let bad_difficulty: Vec<_> = manifest
        .iter()
        .filter(|s| !(1..=5).contains(&s.difficulty))
        .collect();
    results.push(TestResult {
        name: "manifest_difficulty_range".into(),
        passed: bad_difficulty.is_empty(),
        detail: if bad_difficulty.is_empty() {
            "all difficulties in 1-5".into()
        } else {
            format!(
                "{} species out of range: {}",
                bad_difficulty.len(),
                bad_difficulty
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    });

    let bad_cycle: Vec<_> = manifest
        .iter()
        .filter(|s| s.harvest_cycle_sec <= 0.0)
        .collect();
    results.push(TestResult {
        name: "manifest_positive_cycles".into(),
        passed: bad_cycle.is_empty(),
        detail: format!("{} species with non-positive cycle", bad_cycle.len()),
    });

    let bad_yield: Vec<_> = manifest
        .iter()
        .filter(|s| s.base_yield.is_empty() || s.base_yield.iter().any(|y| y.amount <= 0.0))
        .collect();
    results.push(TestResult {
        name: "manifest_positive_yields".into(),
        passed: bad_yield.is_empty(),
        detail: format!("{} species with empty/non-positive yield", bad_yield.len()),
    });

    // Manifest and built-in catalog must describe the same species
    let catalog = SpeciesCatalog::builtin();
    let mut manifest_ids: Vec<String> = manifest.iter().map(|s| s.id.clone()).collect();
    manifest_ids.sort();
    results.push(TestResult {
        name: "manifest_matches_catalog".into(),
        passed: manifest_ids == catalog.ids(),
        detail: format!(
            "manifest {} ids vs catalog {} ids",
            manifest_ids.len(),
            catalog.len()
        ),
    });

    let mut mismatches = Vec::new();
    for spec in &manifest {
        if let Some(def) = catalog.get(&spec.id) {
            let same = def.base_growth_times == spec.base_growth_times
                && def.difficulty == spec.difficulty
                && def.evergreen == spec.evergreen
                && (def.harvest_cycle_sec - spec.harvest_cycle_sec).abs() < f32::EPSILON
                && def.base_yield.len() == spec.base_yield.len();
            if !same {
                mismatches.push(spec.id.clone());
            }
        }
    }
    results.push(TestResult {
        name: "manifest_fields_agree".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            "manifest fields agree with built-in catalog".into()
        } else {
            format!("diverging species: {}", mismatches.join(", "))
        },
    });

    // The four special-rule species must exist
    let specials = [
        species_ids::FROSTBARK,
        species_ids::CLUSTERFERN,
        species_ids::IRONWOOD,
        species_ids::GLOAMFRUIT,
    ];
    let all_present = specials.iter().all(|id| catalog.get(id).is_some());
    results.push(TestResult {
        name: "manifest_special_species_present".into(),
        passed: all_present,
        detail: "frostbark/clusterfern/ironwood/gloamfruit present".into(),
    });

    if verbose {
        println!("  Species table:");
        for spec in &manifest {
            let special = species_special(&spec.id)
                .map(|s| format!(" [{:?}]", s))
                .unwrap_or_default();
            println!(
                "    {:12} diff={} evergreen={} cycle={}s{}",
                spec.id, spec.difficulty, spec.evergreen, spec.harvest_cycle_sec, special
            );
        }
    }

    results
}

// ── 2. Growth Rates ─────────────────────────────────────────────────────

fn validate_growth_rates(_verbose: bool) -> Vec<TestResult> {
    println!("--- Growth Rates ---");
    let mut results = Vec::new();

    let rate = |season: Season, watered: bool, evergreen: bool, special| {
        calc_growth_rate(100.0, 1, season, watered, evergreen, special)
    };

    let summer = rate(Season::Summer, false, false, None);
    let spring = rate(Season::Spring, false, false, None);
    let autumn = rate(Season::Autumn, false, false, None);
    results.push(TestResult {
        name: "rate_season_ratios".into(),
        passed: (spring / summer - 1.5).abs() < 1e-6 && (autumn / summer - 0.8).abs() < 1e-6,
        detail: format!("spring/summer={:.2} autumn/summer={:.2}", spring / summer, autumn / summer),
    });

    let wet = rate(Season::Summer, true, false, None);
    results.push(TestResult {
        name: "rate_water_bonus".into(),
        passed: (wet / summer - 1.3).abs() < 1e-6,
        detail: format!("watered/unwatered={:.2}", wet / summer),
    });

    let winter_dead = rate(Season::Winter, false, false, None);
    let winter_evergreen = rate(Season::Winter, false, true, None);
    let winter_hardy = rate(
        Season::Winter,
        false,
        true,
        species_special(species_ids::FROSTBARK),
    );
    results.push(TestResult {
        name: "rate_winter_overrides".into(),
        passed: winter_dead == 0.0
            && (winter_evergreen / summer - 0.3).abs() < 1e-6
            && (winter_hardy / summer - 0.5).abs() < 1e-6,
        detail: format!(
            "deciduous=0, evergreen={:.2}, cold-hardy={:.2}",
            winter_evergreen / summer,
            winter_hardy / summer
        ),
    });

    results.push(TestResult {
        name: "rate_bad_base_time".into(),
        passed: calc_growth_rate(0.0, 1, Season::Summer, false, false, None) == 0.0
            && calc_growth_rate(-10.0, 1, Season::Summer, false, false, None) == 0.0,
        detail: "non-positive base time → rate 0".into(),
    });

    let mut ascending = true;
    let mut prev = 0.0;
    for d in 1..=5u8 {
        let div = growth_divisor(d);
        if div <= prev {
            ascending = false;
        }
        prev = div;
    }
    results.push(TestResult {
        name: "rate_difficulty_divisors_ascend".into(),
        passed: ascending && growth_divisor(0) == 1.0 && growth_divisor(99) == 1.0,
        detail: "divisors strictly ascend; unknown keys neutral".into(),
    });

    results.push(TestResult {
        name: "rate_cluster_curve".into(),
        passed: (cluster_bonus(2) - 1.3).abs() < 1e-6 && (cluster_bonus(8) - 1.6).abs() < 1e-6,
        detail: format!("2 neighbors={:.2}, 8 neighbors={:.2} (capped)", cluster_bonus(2), cluster_bonus(8)),
    });

    results
}

// ── 3. Stage Engine ─────────────────────────────────────────────────────

fn validate_stage_engine(_verbose: bool) -> Vec<TestResult> {
    println!("--- Stage Engine ---");
    let mut results = Vec::new();
    let catalog = SpeciesCatalog::builtin();

    // Oversized tick crosses multiple stage boundaries and resets flags
    let mut world = World::new();
    let entity = world.spawn((
        Tree::new(species_ids::OAK).with_stage(GrowthStage::Sprout, 0.99),
        GridPosition::new(0, 0),
    ));
    {
        let mut tree = world.get::<&mut Tree>(entity).unwrap();
        tree.watered = true;
        tree.fertilized = true;
    }
    growth_system(&mut world, 100.0, Season::Spring, 1.0, 1.0, &catalog);
    {
        let tree = world.get::<&Tree>(entity).unwrap();
        results.push(TestResult {
            name: "stage_oversized_tick".into(),
            passed: tree.stage > GrowthStage::Sprout && tree.progress < 1.0,
            detail: format!("sprout/0.99 + 100s spring → {:?}/{:.2}", tree.stage, tree.progress),
        });
        results.push(TestResult {
            name: "stage_advance_clears_flags".into(),
            passed: !tree.watered && !tree.fertilized,
            detail: "watered/fertilized reset on stage advance".into(),
        });
    }

    // Terminal clamp survives any delta
    let mut world = World::new();
    let entity = world.spawn((
        Tree::new(species_ids::CLUSTERFERN).with_stage(GrowthStage::Mature, 0.5),
        GridPosition::new(0, 0),
    ));
    growth_system(&mut world, 1.0e7, Season::Spring, 1.0, 1.0, &catalog);
    let tree = world.get::<&Tree>(entity).unwrap().clone();
    results.push(TestResult {
        name: "stage_terminal_clamp".into(),
        passed: tree.stage == GrowthStage::OldGrowth && tree.progress <= 0.99,
        detail: format!("progress clamped at {:.2}", tree.progress),
    });

    // Fertilizer doubles progress
    let mut world = World::new();
    let plain = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 0)));
    let fed = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(10, 10)));
    world.get::<&mut Tree>(fed).unwrap().fertilized = true;
    growth_system(&mut world, 1.0, Season::Summer, 1.0, 1.0, &catalog);
    let ratio = world.get::<&Tree>(fed).unwrap().progress
        / world.get::<&Tree>(plain).unwrap().progress;
    results.push(TestResult {
        name: "stage_fertilizer_doubles".into(),
        passed: (ratio - 2.0).abs() < 1e-3,
        detail: format!("fertilized/unfertilized={:.3}", ratio),
    });

    // Unknown species and broken data freeze, never crash
    let mut world = World::new();
    let ghost = world.spawn((Tree::new("ghostwood"), GridPosition::new(0, 0)));
    growth_system(&mut world, 1000.0, Season::Summer, 1.0, 1.0, &catalog);
    let frozen = world.get::<&Tree>(ghost).unwrap().progress == 0.0;
    results.push(TestResult {
        name: "stage_missing_data_freezes".into(),
        passed: frozen,
        detail: "unresolved species → no growth, no panic".into(),
    });

    results
}

// ── 4. Spatial Bonuses ──────────────────────────────────────────────────

fn validate_spatial_bonuses(_verbose: bool) -> Vec<TestResult> {
    println!("--- Spatial Bonuses ---");
    let mut results = Vec::new();
    let catalog = SpeciesCatalog::builtin();

    // Frostbark next to water vs alone
    let mut world = World::new();
    let near = world.spawn((Tree::new(species_ids::FROSTBARK), GridPosition::new(0, 0)));
    let lone = world.spawn((Tree::new(species_ids::FROSTBARK), GridPosition::new(40, 40)));
    world.spawn((WaterTile, GridPosition::new(1, 0)));
    growth_system(&mut world, 1.0, Season::Summer, 1.0, 1.0, &catalog);
    let ratio = world.get::<&Tree>(near).unwrap().progress
        / world.get::<&Tree>(lone).unwrap().progress;
    results.push(TestResult {
        name: "spatial_frostbark_near_water".into(),
        passed: (ratio - 1.2).abs() < 1e-3,
        detail: format!("near-water/lone={:.3}", ratio),
    });

    // Clusterfern with 2 neighbors = 1.3x, full ring = 1.6x capped
    let mut world = World::new();
    let lone = world.spawn((Tree::new(species_ids::CLUSTERFERN), GridPosition::new(40, 40)));
    let pair = world.spawn((Tree::new(species_ids::CLUSTERFERN), GridPosition::new(0, 0)));
    world.spawn((Tree::new(species_ids::OAK), GridPosition::new(1, 0)));
    world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 1)));
    let packed = world.spawn((Tree::new(species_ids::CLUSTERFERN), GridPosition::new(20, 20)));
    for pos in GridPosition::new(20, 20).ring() {
        world.spawn((Tree::new(species_ids::OAK), pos));
    }
    growth_system(&mut world, 1.0, Season::Summer, 1.0, 1.0, &catalog);
    let lone_p = world.get::<&Tree>(lone).unwrap().progress;
    let pair_ratio = world.get::<&Tree>(pair).unwrap().progress / lone_p;
    let packed_ratio = world.get::<&Tree>(packed).unwrap().progress / lone_p;
    results.push(TestResult {
        name: "spatial_cluster_two_neighbors".into(),
        passed: (pair_ratio - 1.3).abs() < 1e-3,
        detail: format!("2 neighbors={:.3}", pair_ratio),
    });
    results.push(TestResult {
        name: "spatial_cluster_cap".into(),
        passed: (packed_ratio - 1.6).abs() < 1e-3,
        detail: format!("8 neighbors={:.3} (cap 1.6)", packed_ratio),
    });

    // A lone oak gains nothing from either rule
    results.push(TestResult {
        name: "spatial_no_bonus_for_plain_species".into(),
        passed: {
            let mut world = World::new();
            let oak = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 0)));
            let oak_wet = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(20, 20)));
            world.spawn((WaterTile, GridPosition::new(21, 20)));
            growth_system(&mut world, 1.0, Season::Summer, 1.0, 1.0, &catalog);
            let a = world.get::<&Tree>(oak).unwrap().progress;
            let b = world.get::<&Tree>(oak_wet).unwrap().progress;
            (a - b).abs() < 1e-7
        },
        detail: "water adjacency is frostbark-only".into(),
    });

    results
}

// ── 5. Harvest Loop ─────────────────────────────────────────────────────

fn validate_harvest_loop(_verbose: bool) -> Vec<TestResult> {
    println!("--- Harvest Loop ---");
    let mut results = Vec::new();
    let catalog = SpeciesCatalog::builtin();

    // Cooldown thresholds on a 45s cycle
    let mut world = World::new();
    let entity = world.spawn((
        Tree::new(species_ids::CLUSTERFERN).with_stage(GrowthStage::Mature, 0.0),
        GridPosition::new(0, 0),
    ));
    init_harvestable(&mut world, entity, &catalog);
    harvest_system(&mut world, 20.0);
    let at_20 = world.get::<&Harvestable>(entity).unwrap().ready;
    harvest_system(&mut world, 30.0);
    let at_50 = world.get::<&Harvestable>(entity).unwrap().ready;
    harvest_system(&mut world, 500.0);
    let still = world.get::<&Harvestable>(entity).unwrap().ready;
    results.push(TestResult {
        name: "harvest_cooldown_thresholds".into(),
        passed: !at_20 && at_50 && still,
        detail: "45s cycle: 20s not ready, 50s ready, stays ready".into(),
    });

    // Collect: yields, resets, prune consumed
    world.get::<&mut Tree>(entity).unwrap().pruned = true;
    let collected = collect_harvest(&mut world, entity, Season::Summer, DifficultyTier::Normal);
    let tree_after = (*world.get::<&Tree>(entity).unwrap()).clone();
    let facet_after = (*world.get::<&Harvestable>(entity).unwrap()).clone();
    results.push(TestResult {
        name: "harvest_collect_side_effects".into(),
        passed: collected.is_some()
            && !facet_after.ready
            && facet_after.cooldown_elapsed == 0.0
            && !tree_after.pruned,
        detail: "ready/cooldown reset, pruned consumed".into(),
    });

    // Nothing to collect: absent facet or not ready
    let second = collect_harvest(&mut world, entity, Season::Summer, DifficultyTier::Normal);
    let mut bare_world = World::new();
    let bare = bare_world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 0)));
    let none = collect_harvest(&mut bare_world, bare, Season::Summer, DifficultyTier::Normal);
    results.push(TestResult {
        name: "harvest_null_signals".into(),
        passed: second.is_none() && none.is_none(),
        detail: "not-ready and facet-less both → None".into(),
    });

    // Boosted harvest strictly more than double a plain one
    let run = |stage: GrowthStage, pruned: bool, tier: DifficultyTier| -> u32 {
        let mut world = World::new();
        let e = world.spawn((
            Tree::new(species_ids::CHERRY).with_stage(stage, 0.0),
            GridPosition::new(0, 0),
        ));
        init_harvestable(&mut world, e, &catalog);
        world.get::<&mut Tree>(e).unwrap().pruned = pruned;
        harvest_system(&mut world, 80.0);
        collect_harvest(&mut world, e, Season::Summer, tier)
            .map(|ys| ys.iter().map(|y| y.amount).sum())
            .unwrap_or(0)
    };
    let plain = run(GrowthStage::Mature, false, DifficultyTier::Normal);
    let boosted = run(GrowthStage::OldGrowth, true, DifficultyTier::Explore);
    results.push(TestResult {
        name: "harvest_boosted_beats_double".into(),
        passed: boosted > plain * 2,
        detail: format!("old-growth+pruned@explore {} vs mature@normal {}", boosted, plain),
    });

    // Species specials scale per resource kind only
    let mut world = World::new();
    let iron = world.spawn((
        Tree::new(species_ids::IRONWOOD).with_stage(GrowthStage::OldGrowth, 0.5),
        GridPosition::new(0, 0),
    ));
    init_harvestable(&mut world, iron, &catalog);
    harvest_system(&mut world, 300.0);
    let yields = collect_harvest(&mut world, iron, Season::Summer, DifficultyTier::Normal)
        .unwrap_or_default();
    // timber 2.0 * 1.5 (stage) * 3.0 (dense) = 9; sap 1.0 * 1.5 = 2 (ceil)
    let timber_ok = yields.first().map(|y| y.amount == 9).unwrap_or(false);
    let sap_ok = yields.get(1).map(|y| y.amount == 2).unwrap_or(false);
    results.push(TestResult {
        name: "harvest_dense_timber_per_kind".into(),
        passed: timber_ok && sap_ok,
        detail: format!("yields {:?}", yields),
    });

    results
}

// ── 6. Offline Integrator ───────────────────────────────────────────────

fn validate_offline_integrator(_verbose: bool) -> Vec<TestResult> {
    println!("--- Offline Integrator ---");
    let mut results = Vec::new();
    let catalog = SpeciesCatalog::builtin();
    let ironwood = catalog.get(species_ids::IRONWOOD).unwrap();

    // Anything past the 24h cap behaves like exactly 24h
    let slow = {
        let mut def = ironwood.clone();
        def.base_growth_times = [200_000.0, 200_000.0, 200_000.0, 200_000.0];
        def
    };
    let capped = calculate_offline_growth(GrowthStage::Seed, 0.0, 86_400.0, &slow, None, 1.0);
    let over = calculate_offline_growth(GrowthStage::Seed, 0.0, 900_000.0, &slow, None, 1.0);
    results.push(TestResult {
        name: "offline_cap_24h".into(),
        passed: capped.stage == over.stage && (capped.progress - over.progress).abs() < 1e-6,
        detail: format!("24h and 250h both land at {:.4}", capped.progress),
    });

    // Small-step per-tick run converges to one offline call
    let oak = catalog.get(species_ids::OAK).unwrap();
    let offline = calculate_offline_growth(GrowthStage::Seed, 0.0, 100.0, oak, None, 1.0);
    let mut world = World::new();
    let entity = world.spawn((Tree::new(species_ids::OAK), GridPosition::new(0, 0)));
    let mut remaining = 100.0f32;
    while remaining > 0.0 {
        let dt = remaining.min(0.05);
        growth_system(&mut world, dt, Season::Summer, 1.0, 1.0, &catalog);
        remaining -= dt;
    }
    let ticked = world.get::<&Tree>(entity).unwrap().clone();
    results.push(TestResult {
        name: "offline_matches_per_tick".into(),
        passed: ticked.stage == offline.stage && (ticked.progress - offline.progress).abs() < 0.01,
        detail: format!(
            "per-tick {:?}/{:.4} vs offline {:?}/{:.4}",
            ticked.stage, ticked.progress, offline.stage, offline.progress
        ),
    });

    // Output always reports the water bonus gone
    let wet = calculate_offline_growth(GrowthStage::Sprout, 0.3, 60.0, oak, None, 1.0);
    results.push(TestResult {
        name: "offline_water_evaporates".into(),
        passed: !wet.watered,
        detail: "watered=false after any absence".into(),
    });

    // Terminal input returns clamped immediately
    let terminal = calculate_offline_growth(GrowthStage::OldGrowth, 2.0, 86_400.0, oak, None, 1.0);
    results.push(TestResult {
        name: "offline_terminal_clamp".into(),
        passed: terminal.stage == GrowthStage::OldGrowth && terminal.progress <= 0.99,
        detail: format!("terminal progress {:.2}", terminal.progress),
    });

    results
}

// ── 7. Grove Scenario ───────────────────────────────────────────────────

fn validate_grove_scenario(verbose: bool) -> Vec<TestResult> {
    println!("--- Grove Scenario ---");
    let mut results = Vec::new();

    let mut engine = GroveEngine::new();
    engine.set_season(Season::Summer);
    engine.set_weather(Weather::Clear);
    engine.generate(GroveConfig {
        tree_count: 30,
        water_tile_count: 8,
        structure_count: 4,
        ..Default::default()
    });
    results.push(TestResult {
        name: "grove_generation".into(),
        passed: engine.tree_count() == 30,
        detail: format!("{} trees planted", engine.tree_count()),
    });

    // A season clock day sweep stays on the 4-season cycle
    let seasons: Vec<Season> = (0u64..112).step_by(28).map(season_for_day).collect();
    results.push(TestResult {
        name: "grove_season_clock".into(),
        passed: seasons
            == vec![Season::Spring, Season::Summer, Season::Autumn, Season::Winter],
        detail: format!("{:?}", seasons),
    });

    // Ten simulated minutes of summer in 1s ticks
    for _ in 0..600 {
        engine.update(1.0);
    }
    let any_progress = engine
        .world
        .query::<&Tree>()
        .iter()
        .any(|(_, t)| t.progress > 0.0 || t.stage > GrowthStage::Seed);
    results.push(TestResult {
        name: "grove_population_grows".into(),
        passed: any_progress,
        detail: format!(
            "{} mature after 600s, sim_time {:.0}s",
            engine.mature_count(),
            engine.sim_time()
        ),
    });

    // Offline resume after a long absence matures a fast species
    let mut engine = GroveEngine::new();
    engine.set_season(Season::Summer);
    let fern = engine.plant(species_ids::CLUSTERFERN, 0, 0);
    engine.resume(86_400.0);
    let matured = engine.stage_of(fern) == Some(GrowthStage::OldGrowth);
    results.push(TestResult {
        name: "grove_resume_matures_fern".into(),
        passed: matured && engine.world.get::<&Harvestable>(fern).is_ok(),
        detail: "24h absence → old growth with harvest facet".into(),
    });

    // Harvest a ready tree end-to-end
    for _ in 0..50 {
        engine.update(1.0);
    }
    let ready = engine.is_ready(fern);
    let yields = engine.collect(fern);
    results.push(TestResult {
        name: "grove_end_to_end_harvest".into(),
        passed: ready && yields.as_ref().map(|y| !y.is_empty()).unwrap_or(false),
        detail: format!("collected {:?}", yields.unwrap_or_default()),
    });

    if verbose {
        println!(
            "  Final counts: {} trees, {} mature, {} ready",
            engine.tree_count(),
            engine.mature_count(),
            engine.ready_count()
        );
    }

    results
}
