//! Integration test: a full auto-battle driven the way an orchestrator
//! would drive the engine - stage scaling at spawn, movement skills
//! before each approach, damage + combat skills per attack, cooldown
//! ticks and a victory check at every turn end.

use battle_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_combatant(id: &str, name: &str, stats: CombatantStats, max_hp: i32) -> Combatant {
    Combatant {
        id: id.to_string(),
        name: name.to_string(),
        image_url: None,
        base_stats: stats,
        current_hp: max_hp,
        max_hp,
        buffs: Vec::new(),
        is_defeated: false,
        effective_range: 1,
    }
}

fn make_gem(id: &str, effect: SkillEffect, chance: i32, cooldown: u8) -> Gem {
    Gem {
        id: id.to_string(),
        name: format!("{id} gem"),
        description: String::new(),
        effect,
        activation_chance: chance,
        cooldown,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_full_battle_runs_to_a_victory() {
    let constants = BattleConstants::default();
    let mut rng = StdRng::seed_from_u64(4242);

    let challenger_stats = CombatantStats {
        atk: 120,
        def: 60,
        crit_rate: 0.0,
        crit_damage: 1.5,
    };
    let opponent_base = CombatantStats {
        atk: 60,
        def: 40,
        crit_rate: 0.0,
        crit_damage: 1.5,
    };

    // Stage 3 enemy spawn: +30%
    let opponent_stats = scale_stats(&opponent_base, 3, &constants.stage);
    assert_eq!(opponent_stats.atk, 78);
    assert_eq!(opponent_stats.def, 52);

    let mut state = BattleState {
        phase: BattlePhase::Combat,
        turn: 1,
        challenger: make_combatant("c1", "Hero", challenger_stats, 400),
        opponent: make_combatant("e1", "Stage Boss", opponent_stats, 400),
        current_attacker: Side::Challenger,
        battle_log: Vec::new(),
        result: None,
        is_auto_battle: true,
    };

    let mut challenger_gems = BattleCardGems::new("c1")
        .with_gem(make_gem(
            "dm",
            SkillEffect::DoubleMove { move_distance: 2 },
            100,
            2,
        ))
        .with_gem(make_gem("ex", SkillEffect::Execute { threshold: 15.0 }, 100, 1));
    let mut opponent_gems = BattleCardGems::new("e1");

    let mut challenger_pos = Position::new(0);
    let mut opponent_pos = Position::new(7);

    for _ in 0..100 {
        let (attacker_stats, defender_def, attacker_pos, defender_pos) =
            match state.current_attacker {
                Side::Challenger => (
                    state.challenger.base_stats,
                    state.opponent.base_stats.def,
                    challenger_pos,
                    opponent_pos,
                ),
                Side::Opponent => (
                    state.opponent.base_stats,
                    state.challenger.base_stats.def,
                    opponent_pos,
                    challenger_pos,
                ),
            };

        // Step toward the enemy, letting movement skills override
        let in_range = attacker_pos.distance_to(defender_pos) <= 1;
        let normal_target = if in_range {
            attacker_pos
        } else {
            attacker_pos.offset(attacker_pos.direction_to(defender_pos))
        };
        let attacker_gems = match state.current_attacker {
            Side::Challenger => &challenger_gems,
            Side::Opponent => &opponent_gems,
        };
        let movement =
            process_movement_skills(attacker_gems, attacker_pos, normal_target, defender_pos, &mut rng);
        let mut new_attacker_pos = movement.final_position;
        let mut new_defender_pos = movement.enemy_new_position.unwrap_or(defender_pos);
        let mut moved_gems = movement.gems;

        // Attack only when adjacent after movement
        if new_attacker_pos.distance_to(new_defender_pos) <= 1 {
            let input = DamageInput::against(attacker_stats.atk, defender_def);
            let result = calculate_with_details(&input, 0, &constants.damage, &mut rng);

            let (defender_hp, defender_max_hp) = match state.current_attacker {
                Side::Challenger => (&mut state.opponent.current_hp, state.opponent.max_hp),
                Side::Opponent => (&mut state.challenger.current_hp, state.challenger.max_hp),
            };
            *defender_hp -= result.final_damage as i32;
            state
                .battle_log
                .push(format_attack_message("attacker", "defender", &result));

            let attack = AppliedAttack {
                damage: result,
                defender_new_hp: *defender_hp,
                defender_max_hp,
            };
            let combat = process_combat_skills(
                &moved_gems,
                new_attacker_pos,
                new_defender_pos,
                &attack,
                None,
                &mut rng,
            );
            *defender_hp = combat.defender_new_hp;
            new_attacker_pos = combat.attacker_new_position;
            new_defender_pos = combat.defender_new_position;
            moved_gems = combat.gems;
        }

        // Write back positions and gem state
        match state.current_attacker {
            Side::Challenger => {
                challenger_pos = new_attacker_pos;
                opponent_pos = new_defender_pos;
                challenger_gems = moved_gems;
            }
            Side::Opponent => {
                opponent_pos = new_attacker_pos;
                challenger_pos = new_defender_pos;
                opponent_gems = moved_gems;
            }
        }

        // Turn end: tick cooldowns once per combatant, then check victory
        challenger_gems = decrement_cooldowns(&challenger_gems);
        opponent_gems = decrement_cooldowns(&opponent_gems);

        if let Some(result) = check_victory(&state) {
            state.battle_log.push(format_victory_message(&result));
            state.result = Some(result);
            state.phase = BattlePhase::Finished;
            break;
        }

        state.current_attacker = state.current_attacker.other();
        state.turn += 1;
    }

    let result = state.result.expect("battle should finish within 100 turns");
    // The challenger out-stats the scaled enemy decisively
    assert_eq!(result.winner, Side::Challenger);
    assert!(result.total_turns >= 1);
    assert!(!state.battle_log.is_empty());
    assert!(state.challenger.current_hp > 0);
    assert!(state.opponent.current_hp <= 0);
}

#[test]
fn test_double_attack_feeds_back_into_hp() {
    let constants = BattleConstants::default();
    let mut rng = StdRng::seed_from_u64(11);

    let gems = BattleCardGems::new("c1").with_gem(make_gem(
        "da",
        SkillEffect::DoubleAttack,
        100,
        2,
    ));

    let mut defender_hp = 90i32;
    let input = DamageInput::against(100, 100);

    // First attack: 50 damage
    let first = calculate_with_details(&input, 0, &constants.damage, &mut rng);
    assert_eq!(first.final_damage, 50);
    defender_hp -= first.final_damage as i32;

    let attack = AppliedAttack {
        damage: first,
        defender_new_hp: defender_hp,
        defender_max_hp: 90,
    };

    let constants_ref = &constants;
    let mut extra_rng = StdRng::seed_from_u64(12);
    let mut hp_for_callback = defender_hp;
    let mut second_attack = || {
        let result = calculate_with_details(&input, 0, &constants_ref.damage, &mut extra_rng);
        hp_for_callback -= result.final_damage as i32;
        AppliedAttack {
            damage: result,
            defender_new_hp: hp_for_callback,
            defender_max_hp: 90,
        }
    };

    let resolution = process_combat_skills(
        &gems,
        Position::new(3),
        Position::new(4),
        &attack,
        Some(&mut second_attack),
        &mut rng,
    );

    // 90 - 50 - 50 = -10: the extra attack finished the defender
    assert_eq!(resolution.additional_attacks.len(), 1);
    assert_eq!(resolution.defender_new_hp, -10);
}
