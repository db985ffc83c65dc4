// src/mock/hands.rs

use crate::domain::{Card, DeckError, Hand, Rank, Suit};
use crate::engine::RandomSource;
use crate::eval::lookup_tables::{detect_straight, mask_from_ranks, straight_ranks};
use crate::eval::HandRank;

/// Случайная рука ровно заданной категории.
///
/// Руки собираются напрямую (без перебора через оценщик), оценка
/// сгенерированной руки всегда совпадает с `rank`.
pub fn mock_hand_by_rank<R: RandomSource>(rank: HandRank, rng: &mut R) -> Result<Hand, DeckError> {
    let mut cards = match rank {
        HandRank::HighCard => {
            let ranks = distinct_non_straight(rng);
            zip_cards(&ranks, &mixed_suits(rng, ranks.len()))
        }
        HandRank::Pair => {
            let ranks = pick_ranks(rng, 4, &[]);
            let mut cards = same_rank(rng, ranks[0], 2);
            cards.extend(singles(rng, &ranks[1..]));
            cards
        }
        HandRank::TwoPair => {
            let ranks = pick_ranks(rng, 3, &[]);
            let mut cards = same_rank(rng, ranks[0], 2);
            cards.extend(same_rank(rng, ranks[1], 2));
            cards.extend(singles(rng, &ranks[2..]));
            cards
        }
        HandRank::ThreeOfAKind => {
            let ranks = pick_ranks(rng, 3, &[]);
            let mut cards = same_rank(rng, ranks[0], 3);
            cards.extend(singles(rng, &ranks[1..]));
            cards
        }
        HandRank::Straight => {
            let high = pick_straight_high(rng, Rank::Ace);
            zip_cards(&straight_ranks(high), &mixed_suits(rng, 5))
        }
        HandRank::Flush => {
            let ranks = distinct_non_straight(rng);
            let suit = pick_suit(rng);
            zip_cards(&ranks, &[suit; 5])
        }
        HandRank::FullHouse => {
            let ranks = pick_ranks(rng, 2, &[]);
            let mut cards = same_rank(rng, ranks[0], 3);
            cards.extend(same_rank(rng, ranks[1], 2));
            cards
        }
        HandRank::FourOfAKind => {
            let ranks = pick_ranks(rng, 2, &[]);
            let mut cards = same_rank(rng, ranks[0], 4);
            cards.extend(singles(rng, &ranks[1..]));
            cards
        }
        HandRank::StraightFlush => {
            let high = pick_straight_high(rng, Rank::King);
            let suit = pick_suit(rng);
            zip_cards(&straight_ranks(high), &[suit; 5])
        }
        HandRank::RoyalFlush => {
            let suit = pick_suit(rng);
            zip_cards(&straight_ranks(Rank::Ace), &[suit; 5])
        }
    };

    rng.shuffle(&mut cards);
    Hand::from_cards(&cards)
}

/// `n` разных рангов, не входящих в `exclude`.
fn pick_ranks<R: RandomSource>(rng: &mut R, n: usize, exclude: &[Rank]) -> Vec<Rank> {
    let mut pool: Vec<Rank> = Rank::ALL
        .into_iter()
        .filter(|r| !exclude.contains(r))
        .collect();
    rng.shuffle(&mut pool);
    pool.truncate(n);
    pool
}

fn pick_suit<R: RandomSource>(rng: &mut R) -> Suit {
    let mut suits = Suit::ALL;
    rng.shuffle(&mut suits);
    suits[0]
}

/// Старшая карта стрита в Five..=`max_high`.
fn pick_straight_high<R: RandomSource>(rng: &mut R, max_high: Rank) -> Rank {
    let mut highs: Vec<Rank> = Rank::ALL
        .into_iter()
        .filter(|r| *r >= Rank::Five && *r <= max_high)
        .collect();
    rng.shuffle(&mut highs);
    highs[0]
}

/// 5 разных рангов, не образующих стрит.
fn distinct_non_straight<R: RandomSource>(rng: &mut R) -> Vec<Rank> {
    loop {
        let ranks = pick_ranks(rng, 5, &[]);
        if detect_straight(mask_from_ranks(&ranks)).is_none() {
            return ranks;
        }
    }
}

/// Случайные масти, но не все одинаковые.
fn mixed_suits<R: RandomSource>(rng: &mut R, n: usize) -> Vec<Suit> {
    let mut suits: Vec<Suit> = (0..n).map(|_| pick_suit(rng)).collect();
    if n > 1 && suits.iter().all(|s| *s == suits[0]) {
        let other = Suit::ALL
            .into_iter()
            .find(|s| *s != suits[0])
            .unwrap_or(Suit::Clubs);
        suits[n - 1] = other;
    }
    suits
}

/// `count` карт одного ранга разных мастей.
fn same_rank<R: RandomSource>(rng: &mut R, rank: Rank, count: usize) -> Vec<Card> {
    let mut suits = Suit::ALL;
    rng.shuffle(&mut suits);
    suits[..count].iter().map(|s| Card::new(rank, *s)).collect()
}

/// По одной карте каждого ранга, масти любые.
fn singles<R: RandomSource>(rng: &mut R, ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|r| Card::new(*r, pick_suit(rng))).collect()
}

fn zip_cards(ranks: &[Rank], suits: &[Suit]) -> Vec<Card> {
    ranks
        .iter()
        .zip(suits.iter())
        .map(|(r, s)| Card::new(*r, *s))
        .collect()
}
