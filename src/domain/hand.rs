use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::errors::DeckError;

/// Размер руки Destiny Deck.
pub const HAND_SIZE: usize = 5;

/// Рука: ровно 5 разных карт.
///
/// Живёт ровно одну оценку — нигде не хранится.
/// В serde — список карт; при чтении проходит ту же проверку, что `from_cards`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Строгий конструктор: ровно 5 карт, без дублей.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        let arr: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| DeckError::WrongCardCount(cards.len()))?;

        for (i, card) in arr.iter().enumerate() {
            if arr[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards: arr })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Сколько карт заданной масти в руке (0..=5).
    pub fn count_suit(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::from_cards(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Ah Kh Qh Jh Th`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Парсинг руки из строки карт через пробел или запятую.
impl FromStr for Hand {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::from_cards(&cards)
    }
}
