//! Gems - equippable items granting passive, chance-based skills
//!
//! Gems are authored externally and immutable during battle. The skill
//! payload is a tagged union: the `skill_type` tag selects the variant
//! and each variant carries only the tunables it actually uses.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ConfigError;

/// Phase during which a gem's skill may attempt to activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Movement,
    Combat,
}

/// Skill payload of a gem, tagged by skill type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "skill_type", rename_all = "snake_case")]
pub enum SkillEffect {
    /// Push the defender away from the attacker after a hit
    Knockback {
        #[serde(default = "default_push_distance")]
        distance: u8,
    },
    /// Pull the attacker away from the defender after a hit
    Retreat {
        #[serde(default = "default_push_distance")]
        distance: u8,
    },
    /// Replace the normal move with a longer one in the same direction
    DoubleMove {
        #[serde(default = "default_move_distance")]
        move_distance: u8,
    },
    /// Attack a second time if the defender survived the first hit
    DoubleAttack,
    /// Finish a defender below a percentage of max HP
    Execute {
        /// Percentage of max HP; strictly below this the defender dies
        #[serde(default = "default_execute_threshold")]
        threshold: f64,
    },
    /// Jump next to a nearby enemy and knock it back
    LeapStrike {
        /// Maximum distance (in cells) at which the leap can trigger
        #[serde(default = "default_leap_range")]
        leap_range: u8,
        /// Cells the enemy is pushed from the landing position
        #[serde(default = "default_leap_knockback")]
        leap_knockback: u8,
    },
}

impl SkillEffect {
    /// The phase this skill activates in, fixed per skill type
    pub fn trigger(&self) -> Trigger {
        match self {
            SkillEffect::DoubleMove { .. } | SkillEffect::LeapStrike { .. } => Trigger::Movement,
            SkillEffect::Knockback { .. }
            | SkillEffect::Retreat { .. }
            | SkillEffect::DoubleAttack
            | SkillEffect::Execute { .. } => Trigger::Combat,
        }
    }
}

fn default_push_distance() -> u8 {
    1
}
fn default_move_distance() -> u8 {
    2
}
fn default_execute_threshold() -> f64 {
    15.0
}
fn default_leap_range() -> u8 {
    2
}
fn default_leap_knockback() -> u8 {
    2
}

/// An equippable gem
///
/// `activation_chance` may arrive out of range from hand-edited data;
/// it is clamped at roll time, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub effect: SkillEffect,
    /// Activation chance in percent, 0-100
    pub activation_chance: i32,
    /// Turns between activations, 0-10
    pub cooldown: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Parse a JSON gem list
pub fn parse_gems(content: &str) -> Result<Vec<Gem>, ConfigError> {
    let gems: Vec<Gem> = serde_json::from_str(content)?;
    Ok(gems)
}

/// Load a JSON gem list from a file
pub fn load_gems(path: &Path) -> Result<Vec<Gem>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_gems(&content)
}
