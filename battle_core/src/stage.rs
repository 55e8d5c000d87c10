//! Stage scaling - difficulty multiplier applied to enemy base stats

use crate::config::StageConstants;
use crate::types::CombatantStats;

/// Stat multiplier for a stage number
///
/// `base_multiplier + stage * multiplier_per_stage` - with defaults,
/// +10% per stage and stage 0 is a no-op.
pub fn stage_multiplier(stage: u32, constants: &StageConstants) -> f64 {
    constants.base_multiplier + f64::from(stage) * constants.multiplier_per_stage
}

/// Scale a base stat line for a stage
///
/// Returns a new `CombatantStats`; atk and def are floored after the
/// multiplier, crit_rate and crit_damage pass through unchanged (they
/// are rates, not magnitudes).
pub fn scale_stats(base: &CombatantStats, stage: u32, constants: &StageConstants) -> CombatantStats {
    let multiplier = stage_multiplier(stage, constants);
    CombatantStats {
        atk: (f64::from(base.atk) * multiplier).floor() as u32,
        def: (f64::from(base.def) * multiplier).floor() as u32,
        crit_rate: base.crit_rate,
        crit_damage: base.crit_damage,
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_scaling_never_shrinks_stats(atk in 0u32..100_000, def in 0u32..100_000, stage in 0u32..100) {
            let constants = StageConstants::default();
            let base = CombatantStats { atk, def, crit_rate: 0.1, crit_damage: 1.5 };
            let scaled = scale_stats(&base, stage, &constants);
            prop_assert!(scaled.atk >= base.atk);
            prop_assert!(scaled.def >= base.def);
        }

        #[test]
        fn prop_multiplier_is_linear_in_stage(stage in 0u32..1_000) {
            let constants = StageConstants::default();
            let expected = 1.0 + f64::from(stage) * 0.1;
            prop_assert!((stage_multiplier(stage, &constants) - expected).abs() < 1e-9);
        }
    }
}
