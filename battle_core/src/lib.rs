//! battle_core - Battle resolution engine for the card battler
//!
//! This library provides:
//! - Damage Calculator: the attack formula with defense mitigation,
//!   armor penetration, criticals, and lifesteal
//! - Stage Scaling: difficulty multiplier for enemy base stats
//! - Skill System: gem cooldown state machine plus movement/combat
//!   skill resolution on an 8-cell battle line
//! - Victory System: battle-end determination
//! - Message Formatter: combat-log lines for display
//!
//! The engine is synchronous and side-effect-free apart from injected
//! randomness (`&mut impl Rng`), so battles are reproducible under a
//! seeded RNG and safe to run in parallel.

pub mod config;
pub mod damage;
pub mod gem;
pub mod message;
pub mod position;
pub mod prelude;
pub mod skill;
pub mod stage;
pub mod types;
pub mod victory;

// Re-export core types for convenience
pub use config::{BattleConstants, ConfigError, DamageConstants, StageConstants};
pub use damage::{DamageInput, DamageResult};
pub use gem::{Gem, SkillEffect, Trigger};
pub use position::{Position, ARENA_MAX, ARENA_MIN};
pub use skill::{
    AppliedAttack, BattleCardGems, CombatResolution, EquippedGemState, MovementResolution,
    SkillActivation,
};
pub use types::{BattlePhase, BattleState, Combatant, CombatantStats, Side};
pub use victory::VictoryResult;
