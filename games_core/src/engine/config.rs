use crate::logic::board::Color;
use serde::{Deserialize, Serialize};

/// Which policy plays the computer side in Xiangqi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    #[default]
    Random,
    AlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side the human plays in Xiangqi.
    pub player_color: Color,
    pub opponent: OpponentKind,
    pub xiangqi_depth: u8,
    pub gomoku_depth: u8,
    /// Fixed seed for the random opponent; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Pause the driver inserts before the computer replies.
    pub reply_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_color: Color::Red,
            opponent: OpponentKind::Random,
            xiangqi_depth: 3,
            gomoku_depth: 3,
            seed: None,
            reply_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Missing keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = GameConfig::load_from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.gomoku_depth, 3);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{
            "player_color": "black",
            "opponent": "alpha_beta",
            "seed": 42
        }"#;
        let config = GameConfig::load_from_json(json).unwrap();
        assert_eq!(config.player_color, Color::Black);
        assert_eq!(config.opponent, OpponentKind::AlphaBeta);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.xiangqi_depth, 3);
    }

    #[test]
    fn test_load_config_rejects_unknown_opponent() {
        assert!(GameConfig::load_from_json(r#"{ "opponent": "oracle" }"#).is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig {
            reply_delay_ms: 0,
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::load_from_json(&json).unwrap(), config);
    }
}
