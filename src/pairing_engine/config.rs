use serde::{Deserialize, Serialize};

use crate::pairing_engine::{
    error::{GameError, Result},
    models::WordSelector,
    vocabulary::MAX_LEVEL,
};

pub const MIN_TARGET_PAIRS: u32 = 1;
pub const MAX_TARGET_PAIRS: u32 = 500;
pub const MIN_ROWS: usize = 1;
pub const MAX_ROWS: usize = 10;
pub const DEFAULT_TARGET_PAIRS: u32 = 10;
pub const DEFAULT_ROWS: usize = 5;
/// Ticks between two replenishment checks.
pub const DEFAULT_REFRESH_RATE: u32 = 10;

/// Construction parameters of a [`PairingGame`](crate::PairingGame).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub selector: WordSelector,
    /// Correct matches needed to finish the round.
    pub target_pairs: u32,
    /// Rows visible on the board at once.
    pub rows: usize,
    pub refresh_rate: u32,
    /// `Some(seed)` makes every draw and shuffle reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selector: WordSelector::default(),
            target_pairs: DEFAULT_TARGET_PAIRS,
            rows: DEFAULT_ROWS,
            refresh_rate: DEFAULT_REFRESH_RATE,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Minimal constructor; the refresh rate defaults to 10 ticks and the RNG
    /// seeds from entropy.
    pub fn new(selector: impl Into<WordSelector>, target_pairs: u32, rows: usize) -> Self {
        Self { selector: selector.into(), target_pairs, rows, ..Self::default() }
    }

    pub fn with_refresh_rate(mut self, refresh_rate: u32) -> Self {
        self.refresh_rate = refresh_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check every parameter, including the word selector.
    pub fn validate(&self) -> Result<()> {
        self.validate_round()?;
        match &self.selector {
            WordSelector::Level(level) if !(1..=MAX_LEVEL).contains(level) => Err(GameError::config(
                format!("level must be between 1 and {MAX_LEVEL} (got {level})"),
            )),
            WordSelector::Categories(categories) if categories.is_empty() => {
                Err(GameError::config("no words selected, enable at least one category"))
            }
            _ => Ok(()),
        }
    }

    /// Check the round shape only (`target_pairs`, `rows`, `refresh_rate`).
    pub fn validate_round(&self) -> Result<()> {
        if !(MIN_TARGET_PAIRS..=MAX_TARGET_PAIRS).contains(&self.target_pairs) {
            return Err(GameError::config(format!(
                "targetPairs must be between {MIN_TARGET_PAIRS} and {MAX_TARGET_PAIRS} (got {})",
                self.target_pairs
            )));
        }
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(GameError::config(format!(
                "rows must be between {MIN_ROWS} and {MAX_ROWS} (got {})",
                self.rows
            )));
        }
        if self.refresh_rate == 0 {
            return Err(GameError::config("refreshRate must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing_engine::models::Category;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert_eq!(GameConfig::default().refresh_rate, 10);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(GameConfig::new(1u32, 1, 1).validate().is_ok());
        assert!(GameConfig::new(20u32, 500, 10).validate().is_ok());
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        let bad = [
            GameConfig::new(1u32, 0, 3),
            GameConfig::new(1u32, 501, 3),
            GameConfig::new(1u32, 10, 0),
            GameConfig::new(1u32, 10, 11),
            GameConfig::new(0u32, 10, 3),
            GameConfig::new(21u32, 10, 3),
            GameConfig::new(Vec::<Category>::new(), 10, 3),
            GameConfig::new(1u32, 10, 3).with_refresh_rate(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(GameError::Configuration(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "targetPairs": 25 }"#).unwrap();
        assert_eq!(config.target_pairs, 25);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.selector, WordSelector::Level(1));
    }

    #[test]
    fn category_selector_deserializes() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "selector": { "categories": ["animals", "bodyParts"] } }"#).unwrap();
        assert_eq!(
            config.selector,
            WordSelector::Categories(vec![Category::Animals, Category::BodyParts])
        );
    }
}
