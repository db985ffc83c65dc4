//! Оценщик рук: все 10 категорий, порядок силы, кикеры, лучшая из 7.

use destiny_deck::domain::{Card, DeckError, Hand, Rank, Suit};
use destiny_deck::eval::*;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand literal")
}

#[test]
fn every_category_is_detected() {
    let cases = [
        ("Ah Kd 9c 7s 3h", HandRank::HighCard),
        ("Ah Ad 9c 7s 3h", HandRank::Pair),
        ("Ah Ad 9c 9s 3h", HandRank::TwoPair),
        ("Ah Ad Ac 7s 3h", HandRank::ThreeOfAKind),
        ("9h 8d 7c 6s 5h", HandRank::Straight),
        ("Ah 2d 3c 4s 5h", HandRank::Straight),
        ("Ah Kd Qc Js Th", HandRank::Straight),
        ("Ah Jh 9h 6h 2h", HandRank::Flush),
        ("Ah Ad Ac 7s 7h", HandRank::FullHouse),
        ("Ah Ad Ac As 3h", HandRank::FourOfAKind),
        ("9c 8c 7c 6c 5c", HandRank::StraightFlush),
        ("As Ks Qs Js Ts", HandRank::RoyalFlush),
    ];

    for (cards, expected) in cases {
        assert_eq!(evaluate_hand(&hand(cards)), expected, "hand {cards}");
    }
}

#[test]
fn ace_does_not_wrap_around() {
    // Q-K-A-2-3 — не стрит.
    assert_eq!(evaluate_hand(&hand("Qh Kd Ac 2s 3h")), HandRank::HighCard);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate_strength(&hand("Ah 2d 3c 4s 5h"));
    let six_high = evaluate_strength(&hand("2h 3d 4c 5s 6h"));
    assert!(six_high > wheel);
    assert_eq!(wheel.ranks()[0], Rank::Five);
}

#[test]
fn categories_are_totally_ordered() {
    for pair in HandRank::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(HandRank::ALL.len(), 10);
}

#[test]
fn higher_category_always_beats_lower_strength() {
    // Самая слабая пара бьёт самую сильную старшую карту.
    let best_high_card = evaluate_strength(&hand("Ah Kd Qc Js 9h"));
    let worst_pair = evaluate_strength(&hand("2h 2d 3c 4s 5d"));
    assert_eq!(worst_pair.rank(), HandRank::Pair);
    assert!(worst_pair > best_high_card);

    let best_flush = evaluate_strength(&hand("Ah Kh Qh Jh 9h"));
    let worst_full_house = evaluate_strength(&hand("2h 2d 2c 3s 3d"));
    assert!(worst_full_house > best_flush);
}

#[test]
fn kicker_ordering_inside_two_pair() {
    let a = evaluate_strength(&hand("Kh Kd 5c 5s Ah"));
    let b = evaluate_strength(&hand("Ks Kc 5h 5d Qh"));
    assert!(a > b);
    assert_eq!(&a.ranks()[..3], &[Rank::King, Rank::Five, Rank::Ace]);
}

#[test]
fn strength_roundtrips_rank() {
    for (cards, rank) in [("As Ks Qs Js Ts", HandRank::RoyalFlush), ("Ah Kd 9c 7s 3h", HandRank::HighCard)] {
        let s = evaluate_strength(&hand(cards));
        assert_eq!(s.rank(), rank);
        assert_eq!(HandStrength::new(s.rank(), s.ranks()), s);
    }
}

#[test]
fn evaluate_cards_validates_count() {
    let cards = [Card::new(Rank::Ace, Suit::Hearts); 1];
    assert_eq!(evaluate_cards(&cards), Err(DeckError::WrongCardCount(1)));
}

#[test]
fn best_of_seven_finds_hidden_flush() {
    let cards: Vec<Card> = ["2h", "7h", "Kc", "9h", "Jh", "3d", "Qh"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let best = evaluate_best_hand(&cards).unwrap();
    assert_eq!(best.rank(), HandRank::Flush);
    assert_eq!(best.ranks()[0], Rank::Queen);
}

#[test]
fn best_of_rejects_out_of_range_counts() {
    let four: Vec<Card> = ["2h", "7h", "Kc", "9h"].iter().map(|s| s.parse().unwrap()).collect();
    assert!(matches!(
        evaluate_best_hand(&four),
        Err(DeckError::CardCountOutOfRange { got: 4, .. })
    ));
}

#[test]
fn describe_names_every_category() {
    assert_eq!(describe_hand(HandRank::RoyalFlush), "Royal flush");
    assert_eq!(HandRank::FullHouse.to_string(), "Full house");
}
