//! battle_sim - Seeded auto-battle demo driving battle_core
//!
//! Runs one full battle between a challenger card and a stage-scaled
//! enemy, printing every combat-log line. Pass a seed to reproduce a
//! run exactly:
//!
//! ```text
//! battle_sim [seed] [stage]
//! ```

use battle_core::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::env;

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

fn make_gem(id: &str, name: &str, effect: SkillEffect, chance: i32, cooldown: u8) -> Gem {
    Gem {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        effect,
        activation_chance: chance,
        cooldown,
        created_at: None,
        updated_at: None,
    }
}

struct Fighter {
    combatant: Combatant,
    gems: BattleCardGems,
    position: Position,
    lifesteal: u8,
}

fn main() {
    let mut args = env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen());
    let stage: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let constants = BattleConstants::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("=== battle_sim (seed {seed}, stage {stage}) ===\n");

    let challenger_stats = CombatantStats {
        atk: 110,
        def: 70,
        crit_rate: 0.2,
        crit_damage: 1.5,
    };
    let enemy_base = CombatantStats {
        atk: 80,
        def: 50,
        crit_rate: 0.1,
        crit_damage: 1.5,
    };
    let enemy_stats = scale_stats(&enemy_base, stage, &constants.stage);
    println!(
        "Enemy scaled for stage {stage}: atk {} def {} (x{:.1})",
        enemy_stats.atk,
        enemy_stats.def,
        stage_multiplier(stage, &constants.stage)
    );

    let mut challenger = Fighter {
        combatant: make_combatant("c1", "Ashen Duelist", challenger_stats, 420),
        gems: BattleCardGems::new("c1")
            .with_gem(make_gem(
                "leap",
                "Leap Gem",
                SkillEffect::LeapStrike {
                    leap_range: 2,
                    leap_knockback: 2,
                },
                40,
                3,
            ))
            .with_gem(make_gem("da", "Frenzy Gem", SkillEffect::DoubleAttack, 30, 2)),
        position: Position::new(0),
        lifesteal: 10,
    };
    let mut opponent = Fighter {
        combatant: make_combatant("e1", "Stage Warden", enemy_stats, 450),
        gems: BattleCardGems::new("e1")
            .with_gem(make_gem(
                "kb",
                "Bulwark Gem",
                SkillEffect::Knockback { distance: 1 },
                50,
                2,
            ))
            .with_gem(make_gem(
                "ex",
                "Reaper Gem",
                SkillEffect::Execute { threshold: 15.0 },
                60,
                4,
            )),
        position: Position::new(7),
        lifesteal: 0,
    };

    let mut state = BattleState {
        phase: BattlePhase::Combat,
        turn: 1,
        challenger: challenger.combatant.clone(),
        opponent: opponent.combatant.clone(),
        current_attacker: Side::Challenger,
        battle_log: Vec::new(),
        result: None,
        is_auto_battle: true,
    };

    while state.result.is_none() && state.turn <= 200 {
        let side = state.current_attacker;
        let (attacker, defender) = match side {
            Side::Challenger => (&mut challenger, &mut opponent),
            Side::Opponent => (&mut opponent, &mut challenger),
        };

        run_turn(attacker, defender, &constants, &mut rng, &mut state.battle_log);

        // Sync engine-facing state and tick cooldowns once per combatant
        challenger.gems = decrement_cooldowns(&challenger.gems);
        opponent.gems = decrement_cooldowns(&opponent.gems);
        state.challenger = challenger.combatant.clone();
        state.opponent = opponent.combatant.clone();

        if let Some(result) = check_victory(&state) {
            state.battle_log.push(format_victory_message(&result));
            state.result = Some(result);
            state.phase = BattlePhase::Finished;
            break;
        }

        state.current_attacker = side.other();
        state.turn += 1;
    }

    for line in &state.battle_log {
        println!("{line}");
    }

    match state.result {
        Some(result) => println!(
            "\nWinner: {} ({:?}) in {} turns",
            result.winner_name, result.winner, result.total_turns
        ),
        None => println!("\nNo winner within the turn limit"),
    }
}

fn run_turn(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    constants: &BattleConstants,
    rng: &mut ChaCha8Rng,
    log: &mut Vec<String>,
) {
    // Movement phase: one step toward the enemy unless a skill overrides
    let in_range = attacker
        .position
        .distance_to(defender.position)
        <= attacker.combatant.effective_range;
    let normal_target = if in_range {
        attacker.position
    } else {
        attacker
            .position
            .offset(attacker.position.direction_to(defender.position))
    };

    let movement = process_movement_skills(
        &attacker.gems,
        attacker.position,
        normal_target,
        defender.position,
        rng,
    );
    for activation in &movement.activated {
        log.push(format_skill_message(&attacker.combatant.name, activation));
    }
    attacker.position = movement.final_position;
    if let Some(enemy_pos) = movement.enemy_new_position {
        defender.position = enemy_pos;
    }
    attacker.gems = movement.gems;

    // Attack phase
    if attacker.position.distance_to(defender.position) > attacker.combatant.effective_range {
        return;
    }

    let input = DamageInput {
        crit_chance: (attacker.combatant.base_stats.crit_rate * 100.0) as u8,
        crit_damage: (attacker.combatant.base_stats.crit_damage * 100.0) as u32,
        ..DamageInput::against(
            attacker.combatant.base_stats.atk,
            defender.combatant.base_stats.def,
        )
    };

    let result = calculate_with_details(&input, attacker.lifesteal, &constants.damage, rng);
    defender.combatant.current_hp -= result.final_damage as i32;
    attacker.combatant.current_hp =
        (attacker.combatant.current_hp + result.lifesteal_amount as i32)
            .min(attacker.combatant.max_hp);
    log.push(format_attack_message(
        &attacker.combatant.name,
        &defender.combatant.name,
        &result,
    ));

    // Combat skill phase, with a live double-attack callback
    let attack = AppliedAttack {
        damage: result,
        defender_new_hp: defender.combatant.current_hp,
        defender_max_hp: defender.combatant.max_hp,
    };

    let mut extra_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let mut defender_hp = defender.combatant.current_hp;
    let defender_max_hp = defender.combatant.max_hp;
    let mut second_attack = || {
        let extra = calculate_with_details(&input, 0, &constants.damage, &mut extra_rng);
        defender_hp -= extra.final_damage as i32;
        AppliedAttack {
            damage: extra,
            defender_new_hp: defender_hp,
            defender_max_hp,
        }
    };

    let combat = process_combat_skills(
        &attacker.gems,
        attacker.position,
        defender.position,
        &attack,
        Some(&mut second_attack),
        rng,
    );
    for activation in &combat.activated {
        log.push(format_skill_message(&attacker.combatant.name, activation));
    }
    for extra in &combat.additional_attacks {
        log.push(format_attack_message(
            &attacker.combatant.name,
            &defender.combatant.name,
            extra,
        ));
    }
    attacker.position = combat.attacker_new_position;
    defender.position = combat.defender_new_position;
    defender.combatant.current_hp = combat.defender_new_hp;
    attacker.gems = combat.gems;
}
