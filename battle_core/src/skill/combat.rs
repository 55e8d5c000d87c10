//! Combat skill resolution
//!
//! Runs after an attack has landed. Unlike movement skills, every
//! combat gem is tried independently - several may fire from the same
//! attack. Position and HP changes thread through the resolution so
//! later gems see the effects of earlier ones.

use rand::Rng;

use super::state::{try_activate, BattleCardGems};
use super::SkillActivation;
use crate::damage::DamageResult;
use crate::gem::{SkillEffect, Trigger};
use crate::position::Position;

/// An attack that has already been applied to the defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedAttack {
    pub damage: DamageResult,
    /// Defender HP after the attack was applied
    pub defender_new_hp: i32,
    pub defender_max_hp: i32,
}

/// Outcome of resolving combat skills after one attack
#[derive(Debug, Clone, PartialEq)]
pub struct CombatResolution {
    pub attacker_new_position: Position,
    pub defender_new_position: Position,
    pub defender_new_hp: i32,
    /// Results of extra attacks triggered by double_attack
    pub additional_attacks: Vec<DamageResult>,
    pub activated: Vec<SkillActivation>,
    /// Updated attacker loadout with re-armed cooldowns
    pub gems: BattleCardGems,
}

/// Resolve combat-triggered skills on the attacker's gems
///
/// `perform_attack` supplies the extra attack for `double_attack`; when
/// absent the skill still activates (and consumes its cooldown) but
/// performs no second attack. The same applies when the defender is
/// already defeated.
pub fn process_combat_skills(
    attacker_gems: &BattleCardGems,
    attacker_position: Position,
    defender_position: Position,
    attack: &AppliedAttack,
    mut perform_attack: Option<&mut dyn FnMut() -> AppliedAttack>,
    rng: &mut impl Rng,
) -> CombatResolution {
    let mut gems = attacker_gems.clone();
    let mut attacker_new_position = attacker_position;
    let mut defender_new_position = defender_position;
    let mut defender_new_hp = attack.defender_new_hp;
    let mut additional_attacks = Vec::new();
    let mut activated = Vec::new();

    for state in gems.gems.iter_mut() {
        if state.gem.effect.trigger() != Trigger::Combat {
            continue;
        }

        match state.gem.effect {
            SkillEffect::Knockback { distance } => {
                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    let away = attacker_new_position.direction_to(defender_new_position);
                    defender_new_position = defender_new_position.offset(away * i32::from(distance));
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Combat,
                    });
                }
            }
            SkillEffect::Retreat { distance } => {
                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    let away = defender_new_position.direction_to(attacker_new_position);
                    attacker_new_position = attacker_new_position.offset(away * i32::from(distance));
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Combat,
                    });
                }
            }
            SkillEffect::DoubleAttack => {
                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    // Activation (and the cooldown) is consumed even when
                    // the extra attack is suppressed
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Combat,
                    });
                    if defender_new_hp > 0 {
                        if let Some(attack_fn) = perform_attack.as_mut() {
                            let extra = attack_fn();
                            defender_new_hp = extra.defender_new_hp;
                            additional_attacks.push(extra.damage);
                        }
                    }
                }
            }
            SkillEffect::Execute { threshold } => {
                // Never attempted against an already-defeated defender
                if defender_new_hp <= 0 {
                    continue;
                }

                let roll = try_activate(state, rng);
                state.current_cooldown = roll.new_cooldown;
                if roll.activated {
                    activated.push(SkillActivation {
                        gem_id: state.gem.id.clone(),
                        gem_name: state.gem.name.clone(),
                        trigger: Trigger::Combat,
                    });
                    let hp_percent =
                        f64::from(defender_new_hp) / f64::from(attack.defender_max_hp) * 100.0;
                    // Strictly below the threshold, not at it
                    if hp_percent < threshold {
                        defender_new_hp = 0;
                    }
                }
            }
            _ => {}
        }
    }

    CombatResolution {
        attacker_new_position,
        defender_new_position,
        defender_new_hp,
        additional_attacks,
        activated,
        gems,
    }
}
