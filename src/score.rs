//! Hand scoring under the dual-valued Ace.
//!
//! Every Ace forks each live total into a low (+1) and high (+11) branch, so a
//! hand can carry several valid totals at once. Branches that pass 21 collapse to
//! [`BUST`] and stop contributing.

use std::fmt;

use crate::card::Card;

pub const BLACKJACK: i8 = 21;
/// Marker for a branch whose total went over 21.
pub const BUST: i8 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    scores: Vec<i8>,
}

impl Score {
    pub fn new(cards: &[Card]) -> Self {
        let mut scores = vec![0];
        for card in cards {
            add_card(&mut scores, card);
        }
        // An Ace drawn onto an all-bust hand leaves nothing to branch from.
        if scores.is_empty() {
            scores.push(BUST);
        }
        scores.sort_unstable();
        scores.dedup();
        Score { scores }
    }

    /// Distinct candidates in ascending order, including [`BUST`] when any branch busted.
    pub fn scores(&self) -> &[i8] {
        &self.scores
    }

    /// Candidates that have not busted, ascending.
    pub fn totals(&self) -> impl Iterator<Item = i8> + '_ {
        self.scores.iter().copied().filter(|&s| s != BUST)
    }

    pub fn top(&self) -> i8 {
        self.scores.last().copied().unwrap_or(BUST)
    }

    pub fn is_bust(&self) -> bool {
        self.totals().next().is_none()
    }
}

fn add_card(scores: &mut Vec<i8>, card: &Card) {
    if card.is_ace() {
        *scores = scores
            .iter()
            .filter(|&&s| s != BUST)
            .flat_map(|&s| [s + 1, s + 11])
            .collect();
    } else {
        let value = card.value() as i8;
        for score in scores.iter_mut().filter(|s| **s != BUST) {
            *score += value;
        }
    }
    for score in scores.iter_mut() {
        if *score > BLACKJACK {
            *score = BUST;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bust() {
            return write!(f, "{BUST}");
        }
        for (i, total) in self.totals().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{total}")?;
        }
        Ok(())
    }
}
