use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod card;
pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod score;
pub mod session;
pub mod table;

use crate::{
    card::Card,
    config::GameConfig,
    deck::Deck,
    error::GameError,
    game::RoundController,
    hand::Hand,
    score::Score,
    table::{parse_yes_no, Action, Table},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreSummary {
    scores: Vec<i8>,
    display: String,
    top_score: i8,
    bust: bool,
}

#[wasm_bindgen]
pub fn score_cards(cards: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let cards: Vec<Card> = serde_wasm_bindgen::from_value(cards.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let score = Score::new(&cards);
    let summary = ScoreSummary {
        scores: score.scores().to_vec(),
        display: score.to_string(),
        top_score: score.top(),
        bust: score.is_bust(),
    };

    serde_wasm_bindgen::to_value(&summary)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

/// Plays one round, asking `decide(prompt, handJson)` for every player decision.
/// `prompt` is `"split"` (answer `"yes"`/`"no"`) or `"action"` (answer `"hit"`/`"stand"`).
#[wasm_bindgen]
pub fn play_round(params: &JsValue, decide: &Function) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let config: GameConfig = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let deck = Deck::new(config.num_decks, config.resolved_seed());
    let mut controller = RoundController::new(deck);
    let mut table = CallbackTable { decide };
    let report = controller
        .play_round(&mut table)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

struct CallbackTable<'a> {
    decide: &'a Function,
}

impl CallbackTable<'_> {
    fn ask(&self, prompt: &str, hand: &Hand) -> Result<String, GameError> {
        let hand_json = serde_json::to_string(hand)?;
        let answer = self
            .decide
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(prompt),
                &JsValue::from_str(&hand_json),
            )
            .map_err(|err| GameError::InvalidInput(format!("decision callback threw: {err:?}")))?;
        answer.as_string().ok_or_else(|| {
            GameError::InvalidInput("decision callback must return a string".to_string())
        })
    }
}

impl Table for CallbackTable<'_> {
    fn offer_split(&mut self, hand: &Hand) -> Result<bool, GameError> {
        let answer = self.ask("split", hand)?;
        parse_yes_no(&answer).ok_or_else(|| {
            GameError::InvalidInput(format!("expected 'yes' or 'no', got '{answer}'"))
        })
    }

    fn choose_action(&mut self, hand: &Hand) -> Result<Action, GameError> {
        let answer = self.ask("action", hand)?;
        Action::from_code(&answer).ok_or_else(|| {
            GameError::InvalidInput(format!("expected 'hit' or 'stand', got '{answer}'"))
        })
    }

    fn continue_playing(&mut self) -> Result<bool, GameError> {
        Ok(false)
    }
}
