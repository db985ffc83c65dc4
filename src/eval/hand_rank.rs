use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория руки Destiny Deck по силе.
///
/// Порядок объявления = порядок силы, поэтому `Ord` можно сравнивать напрямую.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    /// Все категории от слабейшей к сильнейшей.
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    const fn from_index(i: u8) -> HandRank {
        match i {
            1 => HandRank::Pair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            8 => HandRank::StraightFlush,
            9 => HandRank::RoyalFlush,
            _ => HandRank::HighCard,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(describe_hand(*self))
    }
}

/// Человеческое название категории.
pub fn describe_hand(rank: HandRank) -> &'static str {
    match rank {
        HandRank::HighCard => "High card",
        HandRank::Pair => "Pair",
        HandRank::TwoPair => "Two pair",
        HandRank::ThreeOfAKind => "Three of a kind",
        HandRank::Straight => "Straight",
        HandRank::Flush => "Flush",
        HandRank::FullHouse => "Full house",
        HandRank::FourOfAKind => "Four of a kind",
        HandRank::StraightFlush => "Straight flush",
        HandRank::RoyalFlush => "Royal flush",
    }
}

/// Полная сила руки: категория + кикеры, упакованные в u32.
///
/// Схема кодирования:
///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
/// Rank: 2..14 (2..A) влазит в 4 бита. Сравнение u32 = сравнение рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(pub u32);

impl HandStrength {
    /// Собрать силу из категории и 5 рангов (от старшего к младшему).
    pub fn new(rank: HandRank, ranks: [Rank; 5]) -> Self {
        let packed = ranks
            .iter()
            .fold(rank as u32, |acc, r| (acc << 4) | (r.value() as u32 & 0x0F));
        HandStrength(packed)
    }

    /// Вытащить категорию.
    pub fn rank(&self) -> HandRank {
        HandRank::from_index(((self.0 >> 20) & 0x0F) as u8)
    }

    /// Достать 5 рангов (от старшего к младшему).
    pub fn ranks(&self) -> [Rank; 5] {
        let nibble = |shift: u32| Rank::from_value(((self.0 >> shift) & 0x0F) as u8).unwrap_or(Rank::Two);
        [nibble(16), nibble(12), nibble(8), nibble(4), nibble(0)]
    }
}
