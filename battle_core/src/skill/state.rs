//! Per-battle gem state and the cooldown/activation state machine
//!
//! A gem is either ON_COOLDOWN (`current_cooldown > 0`) or READY
//! (`current_cooldown == 0`). A successful activation re-arms the
//! cooldown; a failed roll leaves it at 0 so the gem may retry on the
//! next trigger.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::gem::Gem;

/// Maximum gems a card may take into battle
pub const MAX_EQUIPPED_GEMS: usize = 3;

/// Per-battle mutable state of one equipped gem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedGemState {
    pub gem: Gem,
    /// Turns until the gem is ready again; never negative
    #[serde(default)]
    pub current_cooldown: u8,
}

impl EquippedGemState {
    /// Equip a gem, ready to activate immediately
    pub fn new(gem: Gem) -> Self {
        EquippedGemState {
            gem,
            current_cooldown: 0,
        }
    }
}

/// Gem loadout of one combatant, recreated per battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleCardGems {
    pub card_id: String,
    pub gems: Vec<EquippedGemState>,
}

impl BattleCardGems {
    /// Empty loadout for a card
    pub fn new(card_id: impl Into<String>) -> Self {
        BattleCardGems {
            card_id: card_id.into(),
            gems: Vec::new(),
        }
    }

    /// Add a gem to the loadout; gems past the limit are ignored
    pub fn with_gem(mut self, gem: Gem) -> Self {
        if self.gems.len() < MAX_EQUIPPED_GEMS {
            self.gems.push(EquippedGemState::new(gem));
        }
        self
    }
}

/// Outcome of a single activation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationRoll {
    pub activated: bool,
    pub new_cooldown: u8,
}

/// Whether a gem is ready to attempt activation
pub fn can_activate(state: &EquippedGemState) -> bool {
    state.current_cooldown == 0
}

/// Attempt to activate a gem
///
/// On cooldown: no roll, cooldown untouched. Ready: rolls against the
/// clamped activation chance; success re-arms the cooldown, failure
/// leaves it at 0.
pub fn try_activate(state: &EquippedGemState, rng: &mut impl Rng) -> ActivationRoll {
    if !can_activate(state) {
        return ActivationRoll {
            activated: false,
            new_cooldown: state.current_cooldown,
        };
    }

    let chance = state.gem.activation_chance.clamp(0, 100);
    if rng.gen::<f64>() < f64::from(chance) / 100.0 {
        ActivationRoll {
            activated: true,
            new_cooldown: state.gem.cooldown,
        }
    } else {
        ActivationRoll {
            activated: false,
            new_cooldown: 0,
        }
    }
}

/// Tick every cooldown down by one, floored at 0
///
/// Called once per combatant per turn end. Gem identity and card id are
/// preserved; a new loadout value is returned.
pub fn decrement_cooldowns(card_gems: &BattleCardGems) -> BattleCardGems {
    BattleCardGems {
        card_id: card_gems.card_id.clone(),
        gems: card_gems
            .gems
            .iter()
            .map(|state| EquippedGemState {
                gem: state.gem.clone(),
                current_cooldown: state.current_cooldown.saturating_sub(1),
            })
            .collect(),
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::gem::SkillEffect;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn prop_decrement_never_goes_negative(cooldowns in proptest::collection::vec(0u8..=10, 0..3), ticks in 0u8..20) {
            let mut loadout = BattleCardGems {
                card_id: "c".to_string(),
                gems: cooldowns
                    .iter()
                    .map(|&cd| EquippedGemState {
                        gem: Gem {
                            id: "g".to_string(),
                            name: "G".to_string(),
                            description: String::new(),
                            effect: SkillEffect::DoubleAttack,
                            activation_chance: 50,
                            cooldown: 5,
                            created_at: None,
                            updated_at: None,
                        },
                        current_cooldown: cd,
                    })
                    .collect(),
            };

            for _ in 0..ticks {
                loadout = decrement_cooldowns(&loadout);
            }
            for state in &loadout.gems {
                prop_assert!(state.current_cooldown <= 10);
            }
        }

        #[test]
        fn prop_activation_cooldown_is_armed_or_cleared(chance in -50i32..200, cooldown in 0u8..=10, seed in any::<u64>()) {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let state = EquippedGemState::new(Gem {
                id: "g".to_string(),
                name: "G".to_string(),
                description: String::new(),
                effect: SkillEffect::DoubleAttack,
                activation_chance: chance,
                cooldown,
                created_at: None,
                updated_at: None,
            });

            let roll = try_activate(&state, &mut rng);
            if roll.activated {
                prop_assert_eq!(roll.new_cooldown, cooldown);
            } else {
                prop_assert_eq!(roll.new_cooldown, 0);
            }
        }
    }
}
