//! Damage calculation - the attack formula with defense mitigation,
//! armor penetration, criticals, and lifesteal

use super::{DamageInput, DamageResult};
use crate::config::DamageConstants;
use rand::Rng;

/// Defense remaining after armor penetration
///
/// `def * (1 - armor_pen / 100)`, kept fractional on purpose - flooring
/// happens once, at the end of the damage formula.
pub fn effective_def(def: u32, armor_pen: u8) -> f64 {
    f64::from(def) * (1.0 - f64::from(armor_pen) / 100.0)
}

/// Damage of a raw attack value against a defending stat line
///
/// Uses a diminishing-returns formula:
/// `reduction = eff_def / (eff_def + def_scaling_factor)`
///
/// At def 0 this returns the full attack; as def grows the reduction
/// approaches (but never reaches) 100%, and the `min_damage` floor
/// guarantees at least 1.
pub fn calculate_with_def(atk: u32, def: u32, armor_pen: u8, constants: &DamageConstants) -> u32 {
    mitigate(f64::from(atk), def, armor_pen, constants)
}

fn mitigate(base: f64, def: u32, armor_pen: u8, constants: &DamageConstants) -> u32 {
    let eff = effective_def(def, armor_pen);
    let reduction = eff / (eff + constants.def_scaling_factor);
    let damage = (base * (1.0 - reduction)).floor() as u32;
    damage.max(constants.min_damage)
}

/// Final damage for an attack, without rolling criticals
///
/// `base = attacker_atk * skill_multiplier`; routed through defense
/// mitigation when enabled and a defense value is present.
pub fn calculate(input: &DamageInput, constants: &DamageConstants) -> u32 {
    let base = f64::from(input.attacker_atk) * input.skill_multiplier;

    match input.defender_def {
        Some(def) if constants.use_defense => mitigate(base, def, input.armor_pen, constants),
        _ => (base.floor() as u32).max(constants.min_damage),
    }
}

/// Roll for a critical hit with probability `crit_chance / 100`
pub fn roll_critical(crit_chance: u8, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < f64::from(crit_chance) / 100.0
}

/// Apply the critical multiplier: `floor(damage * crit_damage / 100)`
///
/// `crit_damage` is a percentage multiplier (150 = x1.5).
pub fn apply_critical(damage: u32, crit_damage: u32) -> u32 {
    (f64::from(damage) * f64::from(crit_damage) / 100.0).floor() as u32
}

/// Display classification for narratively big hits
///
/// True when the hit exceeds `critical_damage_threshold` of the
/// defender's max HP. Independent of [`roll_critical`] - this flags
/// large hits for the log, it does not gate the crit roll.
pub fn is_critical_damage(damage: u32, defender_max_hp: i32, constants: &DamageConstants) -> bool {
    f64::from(damage) > f64::from(defender_max_hp) * constants.critical_damage_threshold
}

/// Full attack resolution: mitigation, crit roll, and lifesteal
///
/// `lifesteal` is the percentage of final damage returned to the
/// attacker as healing.
pub fn calculate_with_details(
    input: &DamageInput,
    lifesteal: u8,
    constants: &DamageConstants,
    rng: &mut impl Rng,
) -> DamageResult {
    let base_damage = calculate(input, constants);
    let is_crit = roll_critical(input.crit_chance, rng);
    let final_damage = if is_crit {
        apply_critical(base_damage, input.crit_damage)
    } else {
        base_damage
    };

    DamageResult {
        final_damage,
        base_damage,
        is_crit,
        crit_bonus: final_damage.saturating_sub(base_damage),
        lifesteal_amount: (f64::from(final_damage) * f64::from(lifesteal) / 100.0).floor() as u32,
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn prop_min_damage_always_holds(atk in 0u32..10_000, def in 0u32..1_000_000, pen in 0u8..=100) {
            let constants = DamageConstants::default();
            prop_assert!(calculate_with_def(atk, def, pen, &constants) >= 1);
        }

        #[test]
        fn prop_effective_def_formula(def in 0u32..1_000_000, pen in 0u8..=100) {
            let expected = f64::from(def) * (1.0 - f64::from(pen) / 100.0);
            prop_assert!((effective_def(def, pen) - expected).abs() < 1e-6);
        }

        #[test]
        fn prop_apply_critical_is_floored_multiply(damage in 0u32..100_000, crit in 100u32..500) {
            let expected = (f64::from(damage) * f64::from(crit) / 100.0).floor() as u32;
            prop_assert_eq!(apply_critical(damage, crit), expected);
        }

        #[test]
        fn prop_no_def_equals_floored_atk(atk in 1u32..100_000) {
            let constants = DamageConstants {
                use_defense: false,
                ..Default::default()
            };
            let damage = calculate(&DamageInput::new(atk), &constants);
            prop_assert_eq!(damage, atk.max(1));
        }

        #[test]
        fn prop_details_invariants(
            atk in 1u32..10_000,
            def in 0u32..10_000,
            crit_chance in 0u8..=100,
            crit_damage in 100u32..300,
            lifesteal in 0u8..=100,
            seed in any::<u64>(),
        ) {
            let constants = DamageConstants::default();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let input = DamageInput {
                crit_chance,
                crit_damage,
                ..DamageInput::against(atk, def)
            };
            let result = calculate_with_details(&input, lifesteal, &constants, &mut rng);

            prop_assert!(result.base_damage >= 1);
            prop_assert!(result.final_damage >= result.base_damage);
            prop_assert_eq!(result.crit_bonus, result.final_damage - result.base_damage);
            if !result.is_crit {
                prop_assert_eq!(result.crit_bonus, 0);
            }
        }
    }
}
