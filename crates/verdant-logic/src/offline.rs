//! Offline catch-up — closed-form growth over long elapsed real time.
//!
//! Reproduces the per-tick rate model without per-frame stepping, under a
//! simplified modifier set: summer-equivalent season, no water bonus, and
//! none of the live-world multipliers (weather, structures, fertilizer,
//! spatial bonuses). Only the active difficulty tier's growth scalar is
//! applied, matching the per-tick path so the two stay consistent.

use crate::constants::{OFFLINE_CAP_SECS, TERMINAL_PROGRESS_CLAMP};
use crate::growth::calc_growth_rate;
use crate::season::Season;
use crate::species::{GrowthStage, SpeciesDef, SpeciesSpecial};

/// Result of one catch-up calculation. Water never survives an absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineOutcome {
    pub stage: GrowthStage,
    pub progress: f32,
    pub watered: bool,
}

/// Advance a `(stage, progress)` snapshot by up to 24 hours of elapsed
/// real time, crossing as many stage boundaries as the time pays for.
///
/// Freezes in place on malformed stage times or a zero rate; never
/// panics, never returns progress of 1.0 or more.
pub fn calculate_offline_growth(
    stage: GrowthStage,
    progress: f32,
    elapsed_secs: f32,
    species: &SpeciesDef,
    special: Option<SpeciesSpecial>,
    growth_scalar: f32,
) -> OfflineOutcome {
    let mut remaining = elapsed_secs.clamp(0.0, OFFLINE_CAP_SECS);
    let mut stage = stage;
    let mut progress = progress;

    if stage.is_terminal() {
        return OfflineOutcome {
            stage,
            progress: progress.min(TERMINAL_PROGRESS_CLAMP),
            watered: false,
        };
    }

    while remaining > 0.0 && !stage.is_terminal() {
        let base_time = species.base_growth_times[stage.index()];
        if base_time <= 0.0 {
            break;
        }
        let rate = calc_growth_rate(
            base_time,
            species.difficulty,
            Season::Summer,
            false,
            species.evergreen,
            special,
        ) * growth_scalar;
        if rate <= 0.0 {
            break;
        }

        let seconds_to_fill = (1.0 - progress) / rate;
        if remaining >= seconds_to_fill {
            remaining -= seconds_to_fill;
            stage = stage.next();
            progress = 0.0;
        } else {
            progress += rate * remaining;
            remaining = 0.0;
        }
    }

    progress = progress.min(1.0);
    if stage.is_terminal() {
        progress = progress.min(TERMINAL_PROGRESS_CLAMP);
    }
    OfflineOutcome {
        stage,
        progress,
        watered: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::{ResourceKind, YieldEntry};

    fn quickwood() -> SpeciesDef {
        SpeciesDef {
            id: "quickwood".into(),
            name: "Quickwood".into(),
            base_growth_times: [10.0, 20.0, 40.0, 80.0],
            difficulty: 1,
            evergreen: false,
            harvest_cycle_sec: 30.0,
            base_yield: vec![YieldEntry::new(ResourceKind::Timber, 1.0)],
        }
    }

    #[test]
    fn test_partial_stage_fill() {
        let out = calculate_offline_growth(GrowthStage::Seed, 0.0, 5.0, &quickwood(), None, 1.0);
        assert_eq!(out.stage, GrowthStage::Seed);
        assert!((out.progress - 0.5).abs() < 1e-5);
        assert!(!out.watered);
    }

    #[test]
    fn test_multi_stage_crossing() {
        // 10 + 20 + half of 40 = 50 seconds
        let out = calculate_offline_growth(GrowthStage::Seed, 0.0, 50.0, &quickwood(), None, 1.0);
        assert_eq!(out.stage, GrowthStage::Sapling);
        assert!((out.progress - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_runs_to_terminal() {
        // Full curve is 150s; anything beyond parks at old growth
        let out = calculate_offline_growth(GrowthStage::Seed, 0.0, 10_000.0, &quickwood(), None, 1.0);
        assert_eq!(out.stage, GrowthStage::OldGrowth);
        assert!(out.progress <= TERMINAL_PROGRESS_CLAMP);
    }

    #[test]
    fn test_cap_at_one_day() {
        let mut slow = quickwood();
        slow.base_growth_times = [100_000.0, 100_000.0, 100_000.0, 100_000.0];
        let capped = calculate_offline_growth(GrowthStage::Seed, 0.0, OFFLINE_CAP_SECS, &slow, None, 1.0);
        let over = calculate_offline_growth(GrowthStage::Seed, 0.0, OFFLINE_CAP_SECS * 10.0, &slow, None, 1.0);
        assert_eq!(capped.stage, over.stage);
        assert!((capped.progress - over.progress).abs() < 1e-6);
    }

    #[test]
    fn test_negative_elapsed_is_noop() {
        let out = calculate_offline_growth(GrowthStage::Sprout, 0.25, -100.0, &quickwood(), None, 1.0);
        assert_eq!(out.stage, GrowthStage::Sprout);
        assert!((out.progress - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_freezes_on_bad_stage_time() {
        let mut broken = quickwood();
        broken.base_growth_times[1] = 0.0;
        // Fills Seed (10s) then freezes at Sprout/0.0
        let out = calculate_offline_growth(GrowthStage::Seed, 0.0, 500.0, &broken, None, 1.0);
        assert_eq!(out.stage, GrowthStage::Sprout);
        assert_eq!(out.progress, 0.0);
    }

    #[test]
    fn test_terminal_input_clamps_and_returns() {
        let out = calculate_offline_growth(GrowthStage::OldGrowth, 1.7, 1_000.0, &quickwood(), None, 1.0);
        assert_eq!(out.stage, GrowthStage::OldGrowth);
        assert!(out.progress <= TERMINAL_PROGRESS_CLAMP);
        assert!(!out.watered);
    }

    #[test]
    fn test_difficulty_scalar_scales_linearly() {
        let normal = calculate_offline_growth(GrowthStage::Seed, 0.0, 4.0, &quickwood(), None, 1.0);
        let story = calculate_offline_growth(GrowthStage::Seed, 0.0, 4.0, &quickwood(), None, 1.5);
        assert!((story.progress / normal.progress - 1.5).abs() < 1e-4);
    }
}
