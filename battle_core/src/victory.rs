//! Victory determination

use serde::{Deserialize, Serialize};

use crate::types::{BattleState, Combatant, Side};

/// Terminal result of a battle; created once, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryResult {
    pub winner: Side,
    pub winner_name: String,
    pub total_turns: u32,
}

/// Whether a combatant is defeated
///
/// Authoritative check on current HP; the advisory `is_defeated` flag
/// on [`Combatant`] is deliberately ignored.
pub fn is_defeated(combatant: &Combatant) -> bool {
    combatant.current_hp <= 0
}

/// Check whether the battle has ended
///
/// The challenger is checked first, so a simultaneous defeat resolves
/// to an opponent win. Returns `None` while both sides stand.
pub fn check_victory(state: &BattleState) -> Option<VictoryResult> {
    if is_defeated(&state.challenger) {
        return Some(VictoryResult {
            winner: Side::Opponent,
            winner_name: state.opponent.name.clone(),
            total_turns: state.turn,
        });
    }

    if is_defeated(&state.opponent) {
        return Some(VictoryResult {
            winner: Side::Challenger,
            winner_name: state.challenger.name.clone(),
            total_turns: state.turn,
        });
    }

    None
}
