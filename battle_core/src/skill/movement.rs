//! Movement skill resolution
//!
//! Movement gems are evaluated in equip order and at most one resolves
//! per move: the first ready gem whose roll succeeds wins, the rest are
//! not attempted. Failed rolls fall through to the next gem and finally
//! to the normal move target.

use rand::Rng;

use super::state::{try_activate, BattleCardGems};
use super::SkillActivation;
use crate::gem::{SkillEffect, Trigger};
use crate::position::Position;

/// Outcome of resolving movement skills for one move
#[derive(Debug, Clone, PartialEq)]
pub struct MovementResolution {
    /// Where the card ends up
    pub final_position: Position,
    /// Set only when a leap strike displaced the enemy
    pub enemy_new_position: Option<Position>,
    pub activated: Vec<SkillActivation>,
    /// Updated loadout with re-armed cooldowns
    pub gems: BattleCardGems,
}

/// Resolve movement-triggered skills for one move
///
/// `normal_target` is where the card would move without any skill;
/// it also supplies the travel direction for `double_move`.
pub fn process_movement_skills(
    card_gems: &BattleCardGems,
    current: Position,
    normal_target: Position,
    enemy: Position,
    rng: &mut impl Rng,
) -> MovementResolution {
    let mut gems = card_gems.clone();
    let mut activated = Vec::new();
    let mut final_position = normal_target;
    let mut enemy_new_position = None;

    for state in gems.gems.iter_mut() {
        if state.gem.effect.trigger() != Trigger::Movement {
            continue;
        }

        match state.gem.effect {
            SkillEffect::DoubleMove { move_distance } => {
                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    let direction = current.direction_to(normal_target);
                    final_position = current.offset(direction * i32::from(move_distance));
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Movement,
                    });
                }
            }
            SkillEffect::LeapStrike {
                leap_range,
                leap_knockback,
            } => {
                // Same cell (distance 0) never qualifies
                let distance = current.distance_to(enemy);
                if distance == 0 || distance > leap_range {
                    continue;
                }

                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    // Land adjacent on the approach side, then knock the
                    // enemy further away from the landing cell
                    let approach = current.direction_to(enemy);
                    final_position = enemy.offset(-approach);
                    let away = final_position.direction_to(enemy);
                    enemy_new_position = Some(enemy.offset(away * i32::from(leap_knockback)));
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Movement,
                    });
                }
            }
            _ => {}
        }

        if !activated.is_empty() {
            break;
        }
    }

    MovementResolution {
        final_position,
        enemy_new_position,
        activated,
        gems,
    }
}
