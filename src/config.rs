use serde::Deserialize;

use crate::error::GameError;

fn default_num_decks() -> u8 {
    1
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Decks in the shoe, and decks added on every refill.
    #[serde(default = "default_num_decks")]
    pub num_decks: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            num_decks: default_num_decks(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_decks == 0 {
            return Err(GameError::InvalidConfig(
                "num_decks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
