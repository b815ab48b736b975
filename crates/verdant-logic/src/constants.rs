//! Simulation tuning constants — multipliers, caps, season length.
//!
//! These are the knobs shared by the per-tick engine and the offline
//! integrator. Both paths must read the same values or their long-run
//! results diverge.

/// One-shot growth bonus while a tree is watered.
pub const WATERED_GROWTH_MULT: f32 = 1.3;

/// Fertilizer doubles growth for the remainder of the current stage.
pub const FERTILIZED_GROWTH_MULT: f32 = 2.0;

/// Evergreen species keep growing at this fraction in winter.
pub const EVERGREEN_WINTER_MULT: f32 = 0.3;

/// The cold-hardy species outpaces even evergreens in winter.
pub const COLD_HARDY_WINTER_MULT: f32 = 0.5;

/// Cold-hardy species bonus when a water tile sits on its 8-neighbor ring.
pub const NEAR_WATER_GROWTH_MULT: f32 = 1.2;

/// Cluster-species bonus per adjacent tree, and its cap.
pub const CLUSTER_BONUS_PER_NEIGHBOR: f32 = 0.15;
pub const CLUSTER_BONUS_CAP: f32 = 0.6;

/// Yield multipliers applied at collection time.
pub const OLD_GROWTH_YIELD_MULT: f32 = 1.5;
pub const PRUNED_YIELD_MULT: f32 = 1.5;
pub const DENSE_TIMBER_YIELD_MULT: f32 = 3.0;
pub const AUTUMN_FRUIT_YIELD_MULT: f32 = 3.0;

/// Fraction of the harvest cooldown credited by a pruning action.
pub const PRUNE_COOLDOWN_CREDIT: f32 = 0.25;

/// Offline catch-up is capped at 24 hours of real time per resume.
pub const OFFLINE_CAP_SECS: f32 = 86_400.0;

/// Progress ceiling at the terminal stage — never reported as exactly 1.0.
pub const TERMINAL_PROGRESS_CLAMP: f32 = 0.99;

/// Length of one season on the fixed calendar.
pub const SEASON_LENGTH_DAYS: u64 = 28;
