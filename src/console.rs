//! Text session over any reader/writer pair; the binary wires it to stdin/stdout.

use std::io::{BufRead, Write};

use crate::{
    error::GameError,
    game::RoundReport,
    hand::Hand,
    session::Tally,
    table::{parse_yes_no, Action, Table},
};

const SPLIT_PROMPT: &str = "Do you want to split your hand? ";
const ACTION_PROMPT: &str = "What do you want to do? (hit or stand)";
const CONTINUE_PROMPT: &str = "Do you want to continue playing? ";
const YES_NO_HINT: &str = "Valid options are 'yes' or 'no'";
const HIT_STAND_HINT: &str = "Valid options are 'hit' or 'stand'";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts until `parse` accepts the response, printing `hint` after each miss.
    fn ask<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            if let Some(value) = parse(line.trim_end_matches(['\r', '\n'])) {
                return Ok(value);
            }
            writeln!(self.output, "{hint}")?;
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, GameError> {
        self.ask(prompt, YES_NO_HINT, parse_yes_no)
    }

    fn show_hand(&mut self, title: &str, hand: &Hand) -> Result<(), GameError> {
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{hand}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn offer_split(&mut self, hand: &Hand) -> Result<bool, GameError> {
        self.show_hand("Your hand:", hand)?;
        self.ask_yes_no(SPLIT_PROMPT)
    }

    fn choose_action(&mut self, _hand: &Hand) -> Result<Action, GameError> {
        self.ask(ACTION_PROMPT, HIT_STAND_HINT, Action::from_code)
    }

    fn continue_playing(&mut self) -> Result<bool, GameError> {
        self.ask_yes_no(CONTINUE_PROMPT)
    }

    fn round_started(&mut self, remaining_cards: usize, dealer: &Hand) -> Result<(), GameError> {
        writeln!(self.output, "Cards remaining: {remaining_cards}")?;
        self.show_hand("Dealer showing:", dealer)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn player_hand(&mut self, hand: &Hand) -> Result<(), GameError> {
        self.show_hand("Your hand:", hand)
    }

    fn hand_updated(&mut self, hand: &Hand) -> Result<(), GameError> {
        writeln!(self.output, "{hand}")?;
        Ok(())
    }

    fn hand_busted(&mut self, _hand: &Hand) -> Result<(), GameError> {
        writeln!(self.output, "You busted!")?;
        Ok(())
    }

    fn round_finished(&mut self, report: &RoundReport, tally: &Tally) -> Result<(), GameError> {
        writeln!(self.output, "-----Final hands-----")?;
        for (i, result) in report.hands.iter().enumerate() {
            let title = if i == 0 { "Your hand:" } else { "Your second hand:" };
            self.show_hand(title, &result.hand)?;
        }
        self.show_hand("Dealer's hand:", &report.dealer)?;
        for result in &report.hands {
            writeln!(self.output, "{result}")?;
        }
        writeln!(
            self.output,
            "Dealer has won {} hands, player has won {} hands.",
            tally.dealer_wins, tally.player_wins
        )?;
        Ok(())
    }

    fn session_finished(&mut self, _tally: &Tally) -> Result<(), GameError> {
        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }
}
