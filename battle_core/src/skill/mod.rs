//! Skill system - gem cooldown state machine and skill resolution
//!
//! Every transition is copy-on-write: callers get new state values back
//! and own when to adopt them, so the engine stays safe to reuse across
//! parallel battle simulations.

mod combat;
mod movement;
mod state;

pub use combat::{process_combat_skills, AppliedAttack, CombatResolution};
pub use movement::{process_movement_skills, MovementResolution};
pub use state::{
    can_activate, decrement_cooldowns, try_activate, ActivationRoll, BattleCardGems,
    EquippedGemState, MAX_EQUIPPED_GEMS,
};

use crate::gem::Trigger;
use serde::{Deserialize, Serialize};

/// Record of a skill that fired, for the battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillActivation {
    pub gem_id: String,
    pub gem_name: String,
    pub trigger: Trigger,
}
