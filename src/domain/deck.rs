use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::DeckError;
use crate::domain::hand::{Hand, HAND_SIZE};

/// Колода Destiny Deck. В домене — просто упорядоченный список карт.
/// Перемешивание делает вызывающий код (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut taken = self.cards.split_off(keep);
        taken.reverse();
        taken
    }

    /// Снять руку из 5 карт. Если карт не хватает — колода не трогается.
    pub fn draw_hand(&mut self) -> Result<Hand, DeckError> {
        if self.cards.len() < HAND_SIZE {
            return Err(DeckError::DeckExhausted {
                remaining: self.cards.len(),
                needed: HAND_SIZE,
            });
        }
        Hand::from_cards(&self.draw_n(HAND_SIZE))
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
