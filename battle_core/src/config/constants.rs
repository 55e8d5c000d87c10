//! Tunable battle constants

use serde::{Deserialize, Serialize};

/// Tunable constants for the battle engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BattleConstants {
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub stage: StageConstants,
}

/// Constants for the damage formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Floor applied to every computed damage value
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
    /// Formula constant: reduction = def / (def + factor)
    ///
    /// Diminishing-returns knob, not a hard cap. At def == factor the
    /// reduction is exactly 50%.
    #[serde(default = "default_def_scaling_factor")]
    pub def_scaling_factor: f64,
    /// Fraction of max HP above which a hit is flagged as a "big hit"
    /// for display. Independent of the critical roll.
    #[serde(default = "default_critical_damage_threshold")]
    pub critical_damage_threshold: f64,
    /// Whether defense mitigation is applied at all
    #[serde(default = "default_use_defense")]
    pub use_defense: bool,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            min_damage: 1,
            def_scaling_factor: 100.0,
            critical_damage_threshold: 0.3,
            use_defense: true,
        }
    }
}

fn default_min_damage() -> u32 {
    1
}
fn default_def_scaling_factor() -> f64 {
    100.0
}
fn default_critical_damage_threshold() -> f64 {
    0.3
}
fn default_use_defense() -> bool {
    true
}

/// Constants for stage-based difficulty scaling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConstants {
    /// Multiplier at stage 0
    #[serde(default = "default_base_multiplier")]
    pub base_multiplier: f64,
    /// Added per stage (0.1 = +10% per stage)
    #[serde(default = "default_multiplier_per_stage")]
    pub multiplier_per_stage: f64,
}

impl Default for StageConstants {
    fn default() -> Self {
        StageConstants {
            base_multiplier: 1.0,
            multiplier_per_stage: 0.1,
        }
    }
}

fn default_base_multiplier() -> f64 {
    1.0
}
fn default_multiplier_per_stage() -> f64 {
    0.1
}
