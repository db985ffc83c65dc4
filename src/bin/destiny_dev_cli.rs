// src/bin/destiny_dev_cli.rs

use destiny_deck::api::{execute_command, Command, CommandResponse, ResolveOutcomeCommand};
use destiny_deck::balance::narrative::outcome_flavor;
use destiny_deck::balance::{DeckRules, RulesProfile};
use destiny_deck::engine::{
    ActionRequest, ActionResolver, ActivityKind, BoostSource, Difficulty, SkillBoost, SkillFamily,
};
use destiny_deck::eval::HandRank;
use destiny_deck::infra::RngSeed;

fn main() {
    env_logger::init();

    println!("=== DESTINY DECK DEV CLI ===\n");

    // Seed можно передать первым аргументом, чтобы переиграть сессию.
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1849);

    let rules = DeckRules::from_profile(RulesProfile::Standard);
    let rng = RngSeed::from_u64(seed).derive(1, 1, 0).to_rng();
    let mut resolver = match ActionResolver::new(rules, rng) {
        Ok(resolver) => resolver,
        Err(err) => {
            eprintln!("Правила не прошли проверку: {err}");
            std::process::exit(1);
        }
    };

    println!("Seed = {seed}\n");

    let requests = [
        ActionRequest {
            character_id: 1,
            family: SkillFamily::Combat,
            base_skill: 12,
            boosts: vec![SkillBoost::new(BoostSource::Equipment, 3)],
            activity: ActivityKind::Expedition,
            tier: 1,
            difficulty: Difficulty::Normal,
        },
        ActionRequest {
            character_id: 2,
            family: SkillFamily::Cunning,
            base_skill: 35,
            boosts: vec![
                SkillBoost::new(BoostSource::Gang, 5),
                SkillBoost::new(BoostSource::Debuff, -4),
            ],
            activity: ActivityKind::Raid,
            tier: 3,
            difficulty: Difficulty::Hard,
        },
        ActionRequest {
            character_id: 3,
            family: SkillFamily::Spirit,
            base_skill: 50,
            boosts: Vec::new(),
            activity: ActivityKind::Contract,
            tier: 5,
            difficulty: Difficulty::Extreme,
        },
    ];

    for req in &requests {
        match resolver.resolve_action(req) {
            Ok(res) => {
                let b = &res.scored.breakdown;
                println!(
                    "Персонаж {} ({:?}, {:?} t{} {:?})",
                    req.character_id, req.family, req.activity, req.tier, req.difficulty
                );
                println!("  Рука:   {}  → {}", res.scored.hand, res.scored.rank);
                println!(
                    "  Эфф.:   {} × {:.2} × {:.2} = {}",
                    b.base_value, b.suit_multiplier, b.skill_multiplier, b.effectiveness
                );
                println!(
                    "  Бросок: {:.2} → {:.2} ⇒ {:?} (×{:.2})",
                    res.raw_roll, res.outcome.roll, res.outcome.outcome, res.outcome.reward_multiplier
                );
                println!("  \"{}\"\n", outcome_flavor(req.activity, res.outcome.outcome));
            }
            Err(err) => println!("Персонаж {}: ошибка {}", req.character_id, err),
        }
    }

    println!("NPC по сложностям:");
    for difficulty in Difficulty::ALL {
        match resolver.npc_draw(difficulty) {
            Ok(draw) => println!(
                "  {:?}: {}  → {} (переборов: {})",
                difficulty, draw.hand, draw.rank, draw.redraws_used
            ),
            Err(err) => println!("  {:?}: ошибка {}", difficulty, err),
        }
    }

    println!("\nКоманда API с броском сервера:");
    let cmd = Command::ResolveOutcome(ResolveOutcomeCommand {
        activity: ActivityKind::Raid,
        tier: 2,
        difficulty: Difficulty::Normal,
        roll: 73.5,
    });
    match execute_command(&mut resolver, cmd) {
        Ok(CommandResponse::OutcomeResolved(dto)) => {
            println!("  {:?} (×{:.2}): {}", dto.outcome, dto.reward_multiplier, dto.flavor)
        }
        Ok(other) => println!("  неожиданный ответ: {other:?}"),
        Err(err) => println!("  ошибка API: {err:?}"),
    }

    let m = resolver.metrics();
    println!("\n=== МЕТРИКИ ===");
    println!("Рук оценено: {}", m.hands_scored());
    println!("Средняя эффективность: {:.1}", m.mean_effectiveness());
    for rank in HandRank::ALL {
        let n = m.count_for_rank(rank);
        if n > 0 {
            println!("  {rank}: {n}");
        }
    }
    println!("NPC: {} рук, {} переборов", m.npc_draws(), m.npc_redraws());
}
