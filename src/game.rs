use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    deck::Deck,
    error::GameError,
    hand::Hand,
    table::{Action, Table},
};

/// The dealer stops drawing once its top score passes this.
pub const DEALER_STANDS_ABOVE: i8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    DealerWins,
    PlayerWins,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::DealerWins => "Dealer wins!",
            Outcome::PlayerWins => "You win!",
            Outcome::Draw => "Draw!",
        })
    }
}

/// Which of the two hands a result belongs to after a split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HandLabel {
    First,
    Second,
}

impl HandLabel {
    pub fn prefix(self) -> &'static str {
        match self {
            HandLabel::First => "First Hand: ",
            HandLabel::Second => "Second Hand: ",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<HandLabel>,
    pub hand: Hand,
    pub top_score: i8,
    pub outcome: Outcome,
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            f.write_str(label.prefix())?;
        }
        write!(f, "{}", self.outcome)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub dealer: Hand,
    pub dealer_top_score: i8,
    pub hands: Vec<HandResult>,
}

/// Plays rounds against the dealer from a shared shoe.
pub struct RoundController {
    deck: Deck,
}

impl RoundController {
    pub fn new(deck: Deck) -> Self {
        RoundController { deck }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn play_round<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<RoundReport, GameError> {
        let remaining = self.deck.remaining_cards();
        let mut dealer = Hand::new();
        let mut first = Hand::new();
        self.deck.deal_into(&mut dealer, 1);
        self.deck.deal_into(&mut first, 2);
        table.round_started(remaining, &dealer)?;

        let mut hands = vec![first];
        if hands[0].is_pair() && table.offer_split(&hands[0])? {
            if let Some(mut second) = hands[0].split() {
                self.deck.deal_into(&mut hands[0], 1);
                self.deck.deal_into(&mut second, 1);
                debug!("player split a pair");
                hands.push(second);
            }
        }

        for hand in &mut hands {
            if !hand.has_twenty_one() {
                self.resolve_hand(hand, table)?;
            }
        }

        while should_dealer_hit(&dealer, &hands) {
            self.deck.deal_into(&mut dealer, 1);
            debug!(dealer_top = dealer.top_score(), "dealer draws");
        }

        let labelled = hands.len() > 1;
        let results: Vec<HandResult> = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| {
                let label = labelled.then_some(if i == 0 {
                    HandLabel::First
                } else {
                    HandLabel::Second
                });
                HandResult {
                    label,
                    top_score: hand.top_score(),
                    outcome: determine_outcome(&dealer, &hand),
                    hand,
                }
            })
            .collect();

        for result in &results {
            info!(
                player_top = result.top_score,
                dealer_top = dealer.top_score(),
                outcome = ?result.outcome,
                "hand resolved"
            );
        }

        Ok(RoundReport {
            dealer_top_score: dealer.top_score(),
            dealer,
            hands: results,
        })
    }

    fn resolve_hand<T: Table + ?Sized>(
        &mut self,
        hand: &mut Hand,
        table: &mut T,
    ) -> Result<(), GameError> {
        table.player_hand(hand)?;
        loop {
            match table.choose_action(hand)? {
                Action::Hit => {
                    self.deck.deal_into(hand, 1);
                    table.hand_updated(hand)?;
                    if hand.is_bust() {
                        table.hand_busted(hand)?;
                        return Ok(());
                    }
                    if hand.has_twenty_one() {
                        return Ok(());
                    }
                }
                Action::Stand => return Ok(()),
            }
        }
    }
}

/// The dealer keeps drawing while it is live, on 16 or less, and behind every player hand.
///
/// Hands are compared on top score alone, so a busted player hand (top score -1)
/// is never ahead of the dealer.
pub fn should_dealer_hit(dealer: &Hand, player_hands: &[Hand]) -> bool {
    if dealer.is_bust() {
        return false;
    }
    let dealer_top = dealer.top_score();
    if dealer_top > DEALER_STANDS_ABOVE {
        return false;
    }
    !player_hands.is_empty() && player_hands.iter().all(|hand| hand.top_score() > dealer_top)
}

pub fn determine_outcome(dealer: &Hand, player: &Hand) -> Outcome {
    if player.is_bust() {
        return Outcome::DealerWins;
    }
    let dealer_top = dealer.top_score();
    let player_top = player.top_score();
    if dealer_top > player_top {
        Outcome::DealerWins
    } else if dealer_top < player_top {
        Outcome::PlayerWins
    } else {
        Outcome::Draw
    }
}
