use serde::Serialize;
use tracing::info;

use crate::{
    config::GameConfig,
    deck::Deck,
    error::GameError,
    game::{Outcome, RoundController, RoundReport},
    table::Table,
};

/// Hands won by each side across a session. Draws count for neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub dealer_wins: u32,
    pub player_wins: u32,
}

impl Tally {
    pub fn record(&mut self, report: &RoundReport) {
        for result in &report.hands {
            match result.outcome {
                Outcome::DealerWins => self.dealer_wins += 1,
                Outcome::PlayerWins => self.player_wins += 1,
                Outcome::Draw => {}
            }
        }
    }
}

pub struct Session {
    controller: RoundController,
    tally: Tally,
}

impl Session {
    pub fn new(deck: Deck) -> Self {
        Session {
            controller: RoundController::new(deck),
            tally: Tally::default(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.resolved_seed();
        info!(num_decks = config.num_decks, seed, "starting session");
        Ok(Session::new(Deck::new(config.num_decks, seed)))
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn play_round<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<RoundReport, GameError> {
        let report = self.controller.play_round(table)?;
        self.tally.record(&report);
        table.round_finished(&report, &self.tally)?;
        Ok(report)
    }

    /// Plays rounds until the table declines another.
    pub fn run<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<Tally, GameError> {
        loop {
            self.play_round(table)?;
            if !table.continue_playing()? {
                break;
            }
        }
        table.session_finished(&self.tally)?;
        Ok(self.tally)
    }
}
