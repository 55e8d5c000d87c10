//! Battle log formatting
//!
//! Pure display helpers; nothing in the engine depends on these
//! strings. Attack templates are selected solely by the crit and
//! lifesteal flags of the damage result.

use crate::damage::DamageResult;
use crate::skill::SkillActivation;
use crate::victory::VictoryResult;

/// One combat-log line for an attack
pub fn format_attack_message(attacker: &str, defender: &str, result: &DamageResult) -> String {
    match (result.is_crit, result.lifesteal_amount > 0) {
        (true, true) => format!(
            "{attacker} lands a CRITICAL hit on {defender} for {} damage (+{} crit) and drains {} HP!",
            result.final_damage, result.crit_bonus, result.lifesteal_amount
        ),
        (true, false) => format!(
            "{attacker} lands a CRITICAL hit on {defender} for {} damage (+{} crit)!",
            result.final_damage, result.crit_bonus
        ),
        (false, true) => format!(
            "{attacker} hits {defender} for {} damage and drains {} HP.",
            result.final_damage, result.lifesteal_amount
        ),
        (false, false) => format!(
            "{attacker} hits {defender} for {} damage.",
            result.final_damage
        ),
    }
}

/// Log line for a gem skill firing
pub fn format_skill_message(owner: &str, activation: &SkillActivation) -> String {
    format!("{owner}'s {} activates!", activation.gem_name)
}

/// Log line for the end of the battle
pub fn format_victory_message(result: &VictoryResult) -> String {
    format!(
        "{} wins after {} turns!",
        result.winner_name, result.total_turns
    )
}
