//! DamageResult - the detailed outcome of one attack

use serde::{Deserialize, Serialize};

/// Detailed outcome of one attack
///
/// Produced fresh per attack and never mutated. Invariants:
/// `final_damage >= base_damage >= 1`, `crit_bonus >= 0`,
/// `lifesteal_amount >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Damage after the critical multiplier, if any
    pub final_damage: u32,
    /// Damage before the critical multiplier
    pub base_damage: u32,
    pub is_crit: bool,
    /// `final_damage - base_damage` (0 when no crit)
    pub crit_bonus: u32,
    /// HP returned to the attacker
    pub lifesteal_amount: u32,
}

impl DamageResult {
    /// A plain non-crit hit with no lifesteal
    pub fn plain(damage: u32) -> Self {
        DamageResult {
            final_damage: damage,
            base_damage: damage,
            is_crit: false,
            crit_bonus: 0,
            lifesteal_amount: 0,
        }
    }
}
