use std::fmt;

use serde::Serialize;

use crate::{
    card::Card,
    deck::CardPile,
    score::{Score, BLACKJACK},
};

/// Cards held by the player or the dealer, in the order they were dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    cards: Vec<Card>,
    is_only_hand: bool,
}

impl Hand {
    pub fn new() -> Self {
        Hand {
            cards: Vec::new(),
            is_only_hand: true,
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand {
            cards,
            is_only_hand: true,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// False once this hand has been split.
    pub fn is_only_hand(&self) -> bool {
        self.is_only_hand
    }

    pub fn score(&self) -> Score {
        Score::new(&self.cards)
    }

    pub fn top_score(&self) -> i8 {
        self.score().top()
    }

    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    pub fn is_blackjack(&self) -> bool {
        if !self.is_only_hand {
            return false;
        }
        match self.cards.as_slice() {
            [a, b] => (a.is_ace() && b.rank() >= 10) || (b.is_ace() && a.rank() >= 10),
            _ => false,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    /// Moves the second card of a pair into a new hand. Both hands are marked as split.
    /// Returns `None` unless the hand is a pair.
    pub fn split(&mut self) -> Option<Hand> {
        if !self.is_pair() {
            return None;
        }
        let card = self.cards.pop()?;
        self.is_only_hand = false;
        Some(Hand {
            cards: vec![card],
            is_only_hand: false,
        })
    }

    pub(crate) fn has_twenty_one(&self) -> bool {
        self.top_score() == BLACKJACK
    }
}

impl Default for Hand {
    fn default() -> Self {
        Hand::new()
    }
}

impl CardPile for Hand {
    fn add(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score();
        if score.is_bust() {
            writeln!(f, "Bust!")?;
        } else {
            writeln!(f, "Score: {score}")?;
        }
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        if self.is_blackjack() {
            writeln!(f, "Blackjack!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, ACE, JACK, KING};

    fn hand(ranks: &[u8]) -> Hand {
        Hand::from_cards(
            ranks
                .iter()
                .map(|&rank| Card::new(Suit::Clubs, rank).unwrap())
                .collect(),
        )
    }

    #[test]
    fn ace_and_ten_value_is_blackjack() {
        assert!(hand(&[ACE, KING]).is_blackjack());
        assert!(hand(&[10, ACE]).is_blackjack());
        assert_eq!(hand(&[ACE, JACK]).top_score(), 21);
    }

    #[test]
    fn three_card_twenty_one_is_not_blackjack() {
        let h = hand(&[ACE, 5, 5]);
        assert_eq!(h.top_score(), 21);
        assert!(!h.is_blackjack());
    }

    #[test]
    fn split_hands_are_never_naturals() {
        let mut first = hand(&[ACE, ACE]);
        let mut second = first.split().unwrap();
        first.add(Card::new(Suit::Hearts, KING).unwrap());
        second.add(Card::new(Suit::Hearts, 10).unwrap());
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert!(!first.is_only_hand());
        assert!(!second.is_only_hand());
        assert!(!first.is_blackjack());
        assert!(!second.is_blackjack());
        assert_eq!(first.top_score(), 21);
    }

    #[test]
    fn only_pairs_split() {
        let mut h = hand(&[KING, JACK]);
        assert!(!h.is_pair());
        assert!(h.split().is_none());
        assert_eq!(h.len(), 2);
        assert!(h.is_only_hand());
    }

    #[test]
    fn display_lists_score_cards_and_natural() {
        let h = Hand::from_cards(vec![
            Card::new(Suit::Spades, ACE).unwrap(),
            Card::new(Suit::Hearts, KING).unwrap(),
        ]);
        assert_eq!(
            h.to_string(),
            "Score: 11 or 21\nAce of Spades\nKing of Hearts\nBlackjack!\n"
        );
    }

    #[test]
    fn display_marks_bust() {
        let h = hand(&[KING, 8, 9]);
        assert!(h.is_bust());
        assert!(h.to_string().starts_with("Bust!\n"));
    }
}
