//! Core battle types shared across the engine

use serde::{Deserialize, Serialize};

use crate::victory::VictoryResult;

/// Which side of the battle a combatant fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    /// The other side
    pub fn other(&self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

/// Base offensive/defensive profile of a card or enemy
///
/// Immutable during battle. Stage scaling produces a new instance
/// rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub atk: u32,
    pub def: u32,
    /// Critical hit chance in [0, 1]
    pub crit_rate: f64,
    /// Critical damage multiplier, >= 1.0 (1.5 = +50% on crit)
    pub crit_damage: f64,
}

/// Active buff on a combatant
///
/// Carried for display and future use; the battle engine itself reads
/// none of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub buff_id: String,
    pub name: String,
    /// Turns remaining
    pub duration_remaining: u32,
    pub stacks: u32,
    pub is_debuff: bool,
}

/// A fighting card or enemy in a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub base_stats: CombatantStats,
    /// Mutated every attack by the orchestrator; may go below zero
    pub current_hp: i32,
    pub max_hp: i32,
    #[serde(default)]
    pub buffs: Vec<ActiveBuff>,
    /// Advisory only; defeat is always recomputed from current_hp
    #[serde(default)]
    pub is_defeated: bool,
    /// Attack range in cells
    pub effective_range: u8,
}

/// Phase of a running battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    Setup,
    Combat,
    Finished,
}

/// Full state of one battle, owned and mutated by the orchestrator
///
/// The engine only reads this (victory checks) or is fed derived
/// fields (skill resolution).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub phase: BattlePhase,
    /// Current turn number, starting at 1
    pub turn: u32,
    pub challenger: Combatant,
    pub opponent: Combatant,
    pub current_attacker: Side,
    #[serde(default)]
    pub battle_log: Vec<String>,
    #[serde(default)]
    pub result: Option<VictoryResult>,
    #[serde(default)]
    pub is_auto_battle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Challenger.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Challenger);
    }

    #[test]
    fn test_combatant_roundtrip() {
        let combatant = Combatant {
            id: "card_1".to_string(),
            name: "Gravekeeper".to_string(),
            image_url: None,
            base_stats: CombatantStats {
                atk: 120,
                def: 80,
                crit_rate: 0.15,
                crit_damage: 1.5,
            },
            current_hp: 300,
            max_hp: 300,
            buffs: Vec::new(),
            is_defeated: false,
            effective_range: 1,
        };

        let json = serde_json::to_string(&combatant).unwrap();
        let parsed: Combatant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, combatant);
    }

    #[test]
    fn test_combatant_optional_fields_default() {
        let json = r#"{
            "id": "e1",
            "name": "Slime",
            "base_stats": { "atk": 10, "def": 5, "crit_rate": 0.0, "crit_damage": 1.5 },
            "current_hp": 50,
            "max_hp": 50,
            "effective_range": 1
        }"#;

        let parsed: Combatant = serde_json::from_str(json).unwrap();
        assert!(parsed.buffs.is_empty());
        assert!(!parsed.is_defeated);
        assert!(parsed.image_url.is_none());
    }
}
