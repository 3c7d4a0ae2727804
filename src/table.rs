use crate::{error::GameError, game::RoundReport, hand::Hand, session::Tally};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    /// Parses the exact, case-sensitive response token.
    pub fn from_code(code: &str) -> Option<Action> {
        match code {
            "hit" => Some(Action::Hit),
            "stand" => Some(Action::Stand),
            _ => None,
        }
    }
}

/// Parses an exact `yes` / `no` response.
pub fn parse_yes_no(response: &str) -> Option<bool> {
    match response {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Where a round gets its decisions from and shows its progress.
///
/// Only the three decisions are required; the display hooks default to doing nothing.
pub trait Table {
    fn offer_split(&mut self, hand: &Hand) -> Result<bool, GameError>;

    fn choose_action(&mut self, hand: &Hand) -> Result<Action, GameError>;

    fn continue_playing(&mut self) -> Result<bool, GameError>;

    fn round_started(&mut self, _remaining_cards: usize, _dealer: &Hand) -> Result<(), GameError> {
        Ok(())
    }

    /// A player hand is about to be played out.
    fn player_hand(&mut self, _hand: &Hand) -> Result<(), GameError> {
        Ok(())
    }

    fn hand_updated(&mut self, _hand: &Hand) -> Result<(), GameError> {
        Ok(())
    }

    fn hand_busted(&mut self, _hand: &Hand) -> Result<(), GameError> {
        Ok(())
    }

    fn round_finished(&mut self, _report: &RoundReport, _tally: &Tally) -> Result<(), GameError> {
        Ok(())
    }

    fn session_finished(&mut self, _tally: &Tally) -> Result<(), GameError> {
        Ok(())
    }
}
