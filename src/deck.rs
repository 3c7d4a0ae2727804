use std::collections::VecDeque;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use crate::card::{Card, Suit, ACE, KING};

pub const CARDS_PER_DECK: usize = 52;

/// Anything cards can be dealt onto.
pub trait CardPile {
    fn add(&mut self, card: Card);
}

/// The shoe. Deals from the front and refills itself with `num_decks` fresh,
/// shuffled decks whenever it runs dry.
pub struct Deck {
    num_decks: u8,
    cards: VecDeque<Card>,
    rng: SmallRng,
}

impl Deck {
    /// A full, shuffled shoe.
    pub fn new(num_decks: u8, seed: u64) -> Self {
        let mut deck = Deck::stacked(num_decks, seed, Vec::new());
        deck.add_new_decks();
        deck.shuffle();
        deck
    }

    /// A shoe holding exactly `cards` in deal order. Refills still use `num_decks`
    /// and the seeded rng once these run out.
    pub fn stacked(num_decks: u8, seed: u64, cards: Vec<Card>) -> Self {
        Deck {
            // a refill must add at least one deck
            num_decks: num_decks.max(1),
            cards: cards.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                return card;
            }
            self.replenish();
        }
    }

    /// Moves `count` cards from the front of the shoe onto `target`, in order.
    pub fn deal_into<P: CardPile + ?Sized>(&mut self, target: &mut P, count: usize) {
        for _ in 0..count {
            let card = self.deal();
            target.add(card);
        }
    }

    fn replenish(&mut self) {
        self.add_new_decks();
        self.shuffle();
        debug!(
            num_decks = self.num_decks,
            remaining = self.cards.len(),
            "shoe replenished"
        );
    }

    fn add_new_decks(&mut self) {
        self.cards.reserve(self.num_decks as usize * CARDS_PER_DECK);
        for _ in 0..self.num_decks {
            for suit in Suit::ALL {
                for rank in ACE..=KING {
                    self.cards.push_back(Card::unchecked(suit, rank));
                }
            }
        }
    }
}

impl CardPile for Deck {
    fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spades, rank).unwrap()
    }

    #[test]
    fn new_shoe_holds_every_card_per_deck() {
        let deck = Deck::new(2, 7);
        assert_eq!(deck.remaining_cards(), 2 * CARDS_PER_DECK);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(*card).or_default() += 1;
        }
        assert_eq!(counts.len(), CARDS_PER_DECK);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn deals_from_the_front() {
        let mut deck = Deck::stacked(1, 0, vec![card(3), card(4), card(5)]);
        assert_eq!(deck.deal(), card(3));
        assert_eq!(deck.deal(), card(4));
        assert_eq!(deck.remaining_cards(), 1);
    }

    #[test]
    fn add_returns_cards_to_the_back() {
        let mut deck = Deck::stacked(1, 0, vec![card(3)]);
        deck.add(card(9));
        assert_eq!(deck.deal(), card(3));
        assert_eq!(deck.deal(), card(9));
    }

    #[test]
    fn empty_shoe_replenishes_before_dealing() {
        let mut deck = Deck::stacked(3, 11, Vec::new());
        let _ = deck.deal();
        assert_eq!(deck.remaining_cards(), 3 * CARDS_PER_DECK - 1);
    }

    #[test]
    fn replenishes_midway_through_a_multi_card_deal() {
        let mut source = Deck::stacked(1, 5, vec![card(2)]);
        let mut target = Deck::stacked(1, 5, Vec::new());
        source.deal_into(&mut target, 3);
        assert_eq!(target.remaining_cards(), 3);
        assert_eq!(target.cards().next(), Some(&card(2)));
        assert_eq!(source.remaining_cards(), CARDS_PER_DECK - 2);
    }

    #[test]
    fn same_seed_same_order() {
        let a: Vec<Card> = Deck::new(1, 42).cards().copied().collect();
        let b: Vec<Card> = Deck::new(1, 42).cards().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::stacked(1, 9, (1..=13).map(card).collect());
        deck.shuffle();
        let mut ranks: Vec<u8> = deck.cards().map(|c| c.rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=13).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn never_runs_dry(num_decks in 1u8..=4, deals in 0usize..600, seed in any::<u64>()) {
            let mut deck = Deck::stacked(num_decks, seed, Vec::new());
            for _ in 0..deals {
                let card = deck.deal();
                prop_assert!((ACE..=KING).contains(&card.rank()));
            }
            prop_assert!(deck.remaining_cards() < num_decks as usize * CARDS_PER_DECK);
        }
    }
}
