//! DamageInput - parameters for a single attack calculation

use serde::{Deserialize, Serialize};

/// Inputs to one damage calculation
///
/// Ranges (`armor_pen` 0-100, `crit_chance` 0-100, `crit_damage` >= 100)
/// are enforced upstream by the data layer; the engine does not
/// re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageInput {
    pub attacker_atk: u32,
    /// Defense is optional; without it the attack bypasses mitigation
    #[serde(default)]
    pub defender_def: Option<u32>,
    /// Skill damage multiplier (1.0 = plain attack)
    #[serde(default = "default_skill_multiplier")]
    pub skill_multiplier: f64,
    /// Percentage of defense ignored, 0-100
    #[serde(default)]
    pub armor_pen: u8,
    /// Critical hit chance, 0-100
    #[serde(default)]
    pub crit_chance: u8,
    /// Critical damage as a percentage multiplier (150 = x1.5)
    #[serde(default = "default_crit_damage")]
    pub crit_damage: u32,
}

impl DamageInput {
    /// Plain attack with no defense, no crit, no penetration
    pub fn new(attacker_atk: u32) -> Self {
        DamageInput {
            attacker_atk,
            ..Default::default()
        }
    }

    /// Plain attack against a defending stat line
    pub fn against(attacker_atk: u32, defender_def: u32) -> Self {
        DamageInput {
            attacker_atk,
            defender_def: Some(defender_def),
            ..Default::default()
        }
    }
}

impl Default for DamageInput {
    fn default() -> Self {
        DamageInput {
            attacker_atk: 0,
            defender_def: None,
            skill_multiplier: default_skill_multiplier(),
            armor_pen: 0,
            crit_chance: 0,
            crit_damage: default_crit_damage(),
        }
    }
}

fn default_skill_multiplier() -> f64 {
    1.0
}

fn default_crit_damage() -> u32 {
    100
}
