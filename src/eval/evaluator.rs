use crate::domain::card::{Card, Rank};
use crate::domain::errors::DeckError;
use crate::domain::hand::{Hand, HAND_SIZE};

use super::hand_rank::{HandRank, HandStrength};
use super::lookup_tables::{detect_straight, rank_to_bit, straight_ranks, RankMask};

/// Максимум карт, из которых выбирается лучшая пятёрка.
pub const MAX_BEST_OF: usize = 7;

/// Категория руки из 5 карт.
pub fn evaluate_hand(hand: &Hand) -> HandRank {
    evaluate_strength(hand).rank()
}

/// Проверить карты и сразу оценить.
///
/// Ошибка, если карт не 5 или есть дубли.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandRank, DeckError> {
    Hand::from_cards(cards).map(|h| evaluate_hand(&h))
}

/// Лучшая 5-карточная рука из 5..=7 карт (перебор всех пятёрок).
pub fn evaluate_best_hand(cards: &[Card]) -> Result<HandStrength, DeckError> {
    let n = cards.len();
    if !(HAND_SIZE..=MAX_BEST_OF).contains(&n) {
        return Err(DeckError::CardCountOutOfRange {
            min: HAND_SIZE,
            max: MAX_BEST_OF,
            got: n,
        });
    }

    let mut best: Option<HandStrength> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let hand = Hand::from_cards(&[cards[a], cards[b], cards[c], cards[d], cards[e]])?;
                        let s = evaluate_strength(&hand);
                        if best.map_or(true, |cur| s > cur) {
                            best = Some(s);
                        }
                    }
                }
            }
        }
    }

    // n >= 5, значит хотя бы одна пятёрка была.
    best.ok_or(DeckError::CardCountOutOfRange {
        min: HAND_SIZE,
        max: MAX_BEST_OF,
        got: n,
    })
}

/// Полная оценка руки: категория + кикеры.
pub fn evaluate_strength(hand: &Hand) -> HandStrength {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut rank_mask: RankMask = 0;

    for card in hand.iter() {
        suit_counts[card.suit.index()] += 1;
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c as usize == HAND_SIZE);
    let straight_high = detect_straight(rank_mask);

    // (count, rank), сначала по количеству, затем по рангу — по убыванию.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|r| (rank_counts[r.value() as usize], *r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let pattern: Vec<u8> = groups.iter().map(|(count, _)| *count).collect();
    // Ранги в порядке значимости, добитые двойками до 5 (хвост не сравнивается по смыслу).
    let mut ordered = [Rank::Two; 5];
    for (slot, (_, r)) in ordered.iter_mut().zip(groups.iter()) {
        *slot = *r;
    }

    if let (true, Some(high)) = (is_flush, straight_high) {
        let rank = if high == Rank::Ace {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };
        return HandStrength::new(rank, straight_ranks(high));
    }

    match pattern.as_slice() {
        [4, 1] => return HandStrength::new(HandRank::FourOfAKind, ordered),
        [3, 2] => return HandStrength::new(HandRank::FullHouse, ordered),
        _ => {}
    }

    if is_flush {
        return HandStrength::new(HandRank::Flush, ordered);
    }

    if let Some(high) = straight_high {
        return HandStrength::new(HandRank::Straight, straight_ranks(high));
    }

    let rank = match pattern.as_slice() {
        [3, 1, 1] => HandRank::ThreeOfAKind,
        [2, 2, 1] => HandRank::TwoPair,
        [2, 1, 1, 1] => HandRank::Pair,
        _ => HandRank::HighCard,
    };
    HandStrength::new(rank, ordered)
}
