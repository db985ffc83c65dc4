//! ActionResolver: полный цикл действия, бонус броска, NPC, счётчики.

use std::collections::VecDeque;

use destiny_deck::balance::{ConfigError, DeckRules};
use destiny_deck::domain::{Card, Rank, Suit};
use destiny_deck::engine::*;
use destiny_deck::eval::HandRank;
use destiny_deck::infra::DeterministicRng;
use destiny_deck::mock::mock_action_request;

/// RNG без перемешивания и с постоянным броском.
/// Нетронутая колода сверху отдаёт T♠ J♠ Q♠ K♠ A♠.
struct FixedRng {
    roll: f64,
}

impl RandomSource for FixedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn roll_percent(&mut self) -> f64 {
        self.roll
    }
}

/// RNG, который на каждое перемешивание делает одну заданную перестановку
/// двух позиций колоды. Руку дают последние 5 карт.
struct SwapRng {
    swaps: VecDeque<(usize, usize)>,
}

impl RandomSource for SwapRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        if let Some((a, b)) = self.swaps.pop_front() {
            slice.swap(a, b);
        }
    }

    fn roll_percent(&mut self) -> f64 {
        0.0
    }
}

fn fixed(roll: f64) -> ActionResolver<FixedRng> {
    ActionResolver::new(DeckRules::standard(), FixedRng { roll }).unwrap()
}

#[test]
fn full_action_with_known_deck_and_roll() {
    let mut resolver = fixed(10.0);
    let request = ActionRequest {
        family: SkillFamily::Cunning,
        base_skill: 50,
        ..mock_action_request(7)
    };

    let res = resolver.resolve_action(&request).unwrap();

    assert_eq!(res.character_id, 7);
    assert_eq!(res.scored.rank, HandRank::RoyalFlush);
    assert_eq!(res.scored.breakdown.matching_cards, 5);
    assert_eq!(res.scored.breakdown.effectiveness, 1125);
    assert_eq!(res.raw_roll, 10.0);
    // 10 + 1125 / 50 = 32.5 → Partial у экспедиции.
    assert_eq!(res.outcome.roll, 32.5);
    assert_eq!(res.outcome.outcome, Outcome::Partial);
    assert_eq!(res.outcome.reward_multiplier, 0.6);
}

#[test]
fn boosts_are_capped_by_rules() {
    let mut resolver = fixed(0.0);
    let request = ActionRequest {
        base_skill: 45,
        boosts: vec![
            SkillBoost::new(BoostSource::Equipment, 10),
            SkillBoost::new(BoostSource::Buff, 10),
        ],
        ..mock_action_request(1)
    };
    let res = resolver.resolve_action(&request).unwrap();
    assert_eq!(res.scored.breakdown.skill_level, 50);
}

#[test]
fn adjusted_roll_never_reaches_one_hundred() {
    let resolver = fixed(0.0);
    assert_eq!(resolver.adjusted_roll(99.0, 1125), 99.99);
    assert_eq!(resolver.adjusted_roll(20.0, 500), 30.0);
    assert_eq!(resolver.adjusted_roll(20.0, 0), 20.0);
}

#[test]
fn resolve_roll_rejects_bad_rolls_and_counts_good_ones() {
    let mut resolver = fixed(0.0);
    assert!(matches!(
        resolver.resolve_roll(ActivityKind::Raid, 1, Difficulty::Normal, 100.0),
        Err(EngineError::RollOutOfRange(_))
    ));
    let ok = resolver
        .resolve_roll(ActivityKind::Raid, 1, Difficulty::Normal, 95.0)
        .unwrap();
    assert_eq!(ok.outcome, Outcome::CriticalSuccess);
    assert_eq!(resolver.metrics().count_for_outcome(Outcome::CriticalSuccess), 1);
}

#[test]
fn same_seed_same_resolution() {
    let request = mock_action_request(3);
    let mut a = ActionResolver::new(DeckRules::standard(), DeterministicRng::from_u64(1849)).unwrap();
    let mut b = ActionResolver::new(DeckRules::standard(), DeterministicRng::from_u64(1849)).unwrap();
    for _ in 0..20 {
        assert_eq!(a.resolve_action(&request).unwrap(), b.resolve_action(&request).unwrap());
    }
}

#[test]
fn easy_npc_never_redraws() {
    let mut resolver = ActionResolver::new(DeckRules::standard(), DeterministicRng::from_u64(11)).unwrap();
    for _ in 0..100 {
        assert_eq!(resolver.npc_draw(Difficulty::Easy).unwrap().redraws_used, 0);
    }
}

#[test]
fn npc_redraws_are_bounded_by_difficulty() {
    let rules = DeckRules::standard();
    let mut resolver = ActionResolver::new(rules.clone(), DeterministicRng::from_u64(12)).unwrap();
    for difficulty in Difficulty::ALL {
        for _ in 0..50 {
            let draw = resolver.npc_draw(difficulty).unwrap();
            assert!(draw.redraws_used <= rules.npc_redraws_for(difficulty));
            if draw.redraws_used < rules.npc_redraws_for(difficulty) {
                // Остановился раньше — значит рука уже не хуже пары.
                assert!(draw.rank >= HandRank::Pair);
            }
        }
    }
}

#[test]
fn npc_uses_every_redraw_when_bar_is_out_of_reach() {
    let rules = DeckRules {
        npc_redraw_below: HandRank::RoyalFlush,
        ..DeckRules::standard()
    };
    let mut rng = DeterministicRng::from_u64(13);
    let draw = npc_draw(&rules, Difficulty::Extreme, &mut rng).unwrap();
    assert_eq!(draw.redraws_used, 3);
}

#[test]
fn metrics_track_hands_outcomes_and_npc_draws() {
    let mut resolver = ActionResolver::new(DeckRules::standard(), DeterministicRng::from_u64(21)).unwrap();
    let request = mock_action_request(9);
    for _ in 0..10 {
        resolver.resolve_action(&request).unwrap();
    }
    resolver.npc_draw(Difficulty::Normal).unwrap();

    let m = resolver.take_metrics();
    assert_eq!(m.hands_scored(), 10);
    let outcomes: u64 = Outcome::ALL.iter().map(|o| m.count_for_outcome(*o)).sum();
    assert_eq!(outcomes, 10);
    assert_eq!(m.npc_draws(), 1);
    assert!(m.mean_effectiveness() >= 50.0);

    assert_eq!(resolver.metrics().hands_scored(), 0);
}

#[test]
fn npc_keeps_the_strongest_hand_seen() {
    // Нетронутая колода: индекс 11 — K♣, 51 — A♠, 0 — 2♣.
    // Первая раздача: T♠ J♠ Q♠ K♠ K♣ (пара), перебор: T♠ J♠ Q♠ K♠ 2♣ (старшая карта).
    let rules = DeckRules {
        npc_redraw_below: HandRank::TwoPair,
        ..DeckRules::standard()
    };
    let mut rng = SwapRng {
        swaps: VecDeque::from([(11, 51), (0, 51)]),
    };

    let draw = npc_draw(&rules, Difficulty::Normal, &mut rng).unwrap();

    assert_eq!(draw.redraws_used, 1);
    assert_eq!(draw.rank, HandRank::Pair);
    assert!(draw.hand.contains(&Card::new(Rank::King, Suit::Clubs)));
    assert_eq!(draw.strength.rank(), HandRank::Pair);
}

#[test]
fn resolver_rejects_invalid_rules() {
    let rules = DeckRules::standard().with_effectiveness_roll_divisor(-1.0);
    assert!(matches!(
        ActionResolver::new(rules, FixedRng { roll: 0.0 }),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn scoring_alone_does_not_touch_metrics() {
    let mut resolver = fixed(0.0);
    let hand = "Ah Ad 9c 7s 3h".parse().unwrap();
    let scored = resolver.score(hand, SkillFamily::Combat, 10);
    assert_eq!(scored.rank, HandRank::Pair);
    assert_eq!(resolver.metrics().hands_scored(), 0);

    resolver.resolve_action(&mock_action_request(1)).unwrap();
    assert_eq!(resolver.metrics().hands_scored(), 1);
}
