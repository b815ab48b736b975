//! Growth-rate model — the single source of truth for per-tick and
//! offline growth.

use crate::constants::{
    CLUSTER_BONUS_CAP, CLUSTER_BONUS_PER_NEIGHBOR, COLD_HARDY_WINTER_MULT,
    EVERGREEN_WINTER_MULT, WATERED_GROWTH_MULT,
};
use crate::difficulty::growth_divisor;
use crate::season::Season;
use crate::species::SpeciesSpecial;

/// Progress-per-second for one tree in its current stage.
///
/// Returns 0.0 for halted growth (winter for ordinary deciduous species)
/// and for malformed data (non-positive base time) — never an error.
pub fn calc_growth_rate(
    base_time: f32,
    difficulty: u8,
    season: Season,
    watered: bool,
    evergreen: bool,
    special: Option<SpeciesSpecial>,
) -> f32 {
    let season_mult = match season {
        Season::Winter => {
            if special == Some(SpeciesSpecial::ColdHardy) {
                COLD_HARDY_WINTER_MULT
            } else if evergreen {
                EVERGREEN_WINTER_MULT
            } else {
                0.0
            }
        }
        other => other.growth_mult(),
    };
    if season_mult <= 0.0 {
        return 0.0;
    }
    if base_time <= 0.0 {
        return 0.0;
    }

    let water_mult = if watered { WATERED_GROWTH_MULT } else { 1.0 };
    (season_mult * water_mult) / (base_time * growth_divisor(difficulty))
}

/// Cluster-species growth bonus from trees on the 8-neighbor ring
/// (self excluded): +0.15 per neighbor, capped at +0.6.
pub fn cluster_bonus(adjacent_trees: u32) -> f32 {
    1.0 + (CLUSTER_BONUS_PER_NEIGHBOR * adjacent_trees as f32).min(CLUSTER_BONUS_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: f32 = 100.0;

    fn rate(season: Season, watered: bool, evergreen: bool, special: Option<SpeciesSpecial>) -> f32 {
        calc_growth_rate(BASE, 1, season, watered, evergreen, special)
    }

    #[test]
    fn test_season_ratios() {
        let summer = rate(Season::Summer, false, false, None);
        let spring = rate(Season::Spring, false, false, None);
        let autumn = rate(Season::Autumn, false, false, None);
        assert!((spring / summer - 1.5).abs() < 1e-6);
        assert!((autumn / summer - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_water_ratio() {
        let dry = rate(Season::Summer, false, false, None);
        let wet = rate(Season::Summer, true, false, None);
        assert!((wet / dry - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_winter_halts_deciduous() {
        assert_eq!(rate(Season::Winter, false, false, None), 0.0);
        // Watering doesn't resurrect a halted tree
        assert_eq!(rate(Season::Winter, true, false, None), 0.0);
    }

    #[test]
    fn test_winter_evergreen() {
        let summer = rate(Season::Summer, false, true, None);
        let winter = rate(Season::Winter, false, true, None);
        assert!((winter / summer - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_winter_cold_hardy() {
        let summer = rate(Season::Summer, false, true, Some(SpeciesSpecial::ColdHardy));
        let winter = rate(Season::Winter, false, true, Some(SpeciesSpecial::ColdHardy));
        assert!((winter / summer - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bad_base_time() {
        assert_eq!(calc_growth_rate(0.0, 1, Season::Summer, false, false, None), 0.0);
        assert_eq!(calc_growth_rate(-5.0, 1, Season::Summer, false, false, None), 0.0);
    }

    #[test]
    fn test_difficulty_slows_growth() {
        let easy = calc_growth_rate(BASE, 1, Season::Summer, false, false, None);
        let hard = calc_growth_rate(BASE, 5, Season::Summer, false, false, None);
        assert!(hard < easy);
        // Unknown difficulty is neutral, same as 1
        let unknown = calc_growth_rate(BASE, 77, Season::Summer, false, false, None);
        assert_eq!(unknown, easy);
    }

    #[test]
    fn test_cluster_bonus_curve() {
        assert_eq!(cluster_bonus(0), 1.0);
        assert!((cluster_bonus(2) - 1.3).abs() < 1e-6);
        assert!((cluster_bonus(4) - 1.6).abs() < 1e-6);
        // Capped past 4 neighbors
        assert!((cluster_bonus(8) - 1.6).abs() < 1e-6);
        assert!((cluster_bonus(100) - 1.6).abs() < 1e-6);
    }
}
