use serde::{Deserialize, Serialize};

use crate::balance::config::DeckRules;
use crate::domain::{Deck, Hand};
use crate::engine::errors::EngineError;
use crate::engine::outcome::Difficulty;
use crate::engine::RandomSource;
use crate::eval::{evaluate_strength, HandRank, HandStrength};

/// Рука NPC после всех переборов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NpcDraw {
    pub hand: Hand,
    pub rank: HandRank,
    pub strength: HandStrength,
    pub redraws_used: u8,
}

/// Свежая перемешанная колода → 5 карт.
fn fresh_hand<R: RandomSource>(rng: &mut R) -> Result<(Hand, HandStrength), EngineError> {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    let hand = deck.draw_hand()?;
    Ok((hand, evaluate_strength(&hand)))
}

/// NPC тянет руку. Пока она слабее `rules.npc_redraw_below` и есть
/// переборы (по сложности) — тянет заново. Остаётся сильнейшая из виденных.
pub fn npc_draw<R: RandomSource>(
    rules: &DeckRules,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<NpcDraw, EngineError> {
    let allowed = rules.npc_redraws_for(difficulty);

    let (mut best_hand, mut best) = fresh_hand(rng)?;
    let mut used = 0u8;

    while used < allowed && best.rank() < rules.npc_redraw_below {
        used += 1;
        let (hand, strength) = fresh_hand(rng)?;
        log::debug!(
            "npc redraw {used}/{allowed}: {} -> {}",
            best.rank(),
            strength.rank()
        );
        if strength > best {
            best_hand = hand;
            best = strength;
        }
    }

    Ok(NpcDraw {
        hand: best_hand,
        rank: best.rank(),
        strength: best,
        redraws_used: used,
    })
}
