use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const ACE: u8 = 1;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize)]
struct CardInput {
    suit: Suit,
    rank: u8,
}

/// A single playing card. Ranks run 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardInput")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl TryFrom<CardInput> for Card {
    type Error = GameError;

    fn try_from(input: CardInput) -> Result<Self, Self::Error> {
        Card::new(input.suit, input.rank)
    }
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Result<Self, GameError> {
        if !(ACE..=KING).contains(&rank) {
            return Err(GameError::InvalidRank(rank));
        }
        Ok(Card { suit, rank })
    }

    /// For callers that only produce ranks in `ACE..=KING`.
    pub(crate) const fn unchecked(suit: Suit, rank: u8) -> Self {
        Card { suit, rank }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Points for a non-Ace card; face cards count ten.
    pub fn value(&self) -> u8 {
        self.rank.min(10)
    }

    pub fn name(&self) -> String {
        match self.rank {
            ACE => "Ace".to_string(),
            JACK => "Jack".to_string(),
            QUEEN => "Queen".to_string(),
            KING => "King".to_string(),
            n => n.to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.name(), self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_rank() {
        let ace = Card::new(Suit::Spades, ACE).unwrap();
        let seven = Card::new(Suit::Hearts, 7).unwrap();
        let queen = Card::new(Suit::Clubs, QUEEN).unwrap();
        assert_eq!(ace.to_string(), "Ace of Spades");
        assert_eq!(seven.to_string(), "7 of Hearts");
        assert_eq!(queen.to_string(), "Queen of Clubs");
    }

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in 10..=KING {
            assert_eq!(Card::new(Suit::Diamonds, rank).unwrap().value(), 10);
        }
        assert_eq!(Card::new(Suit::Diamonds, 9).unwrap().value(), 9);
    }

    #[test]
    fn rejects_out_of_range_ranks() {
        assert!(matches!(Card::new(Suit::Hearts, 0), Err(GameError::InvalidRank(0))));
        assert!(matches!(Card::new(Suit::Hearts, 14), Err(GameError::InvalidRank(14))));
    }

    #[test]
    fn deserialize_validates_rank() {
        let card: Card = serde_json::from_str(r#"{"suit":"Clubs","rank":1}"#).unwrap();
        assert!(card.is_ace());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"Clubs","rank":20}"#).is_err());
    }
}
