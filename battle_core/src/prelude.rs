//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::position::Position;
pub use crate::types::{BattlePhase, BattleState, Combatant, CombatantStats, Side};

// Damage system
pub use crate::damage::{
    apply_critical, calculate, calculate_with_def, calculate_with_details, DamageInput,
    DamageResult,
};

// Stage scaling
pub use crate::stage::{scale_stats, stage_multiplier};

// Skill system
pub use crate::gem::{Gem, SkillEffect, Trigger};
pub use crate::skill::{
    decrement_cooldowns, process_combat_skills, process_movement_skills, AppliedAttack,
    BattleCardGems, EquippedGemState, SkillActivation,
};

// Victory
pub use crate::victory::{check_victory, is_defeated, VictoryResult};

// Messages
pub use crate::message::{format_attack_message, format_skill_message, format_victory_message};

// Config
pub use crate::config::{BattleConstants, DamageConstants, StageConstants};
