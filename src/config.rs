//! Game and engine configuration
//!
//! Nothing here has a hidden global default: the shells build a
//! [`GameConfig`], validate it, and hand each engine an [`EngineConfig`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Search depth used by tiers without a fixed depth
pub const FALLBACK_DEPTH: u8 = 2;

/// Deepest search accepted as an explicit depth
pub const MAX_EXPLICIT_DEPTH: u8 = 4;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board edge outside `1..=MAX_BOARD_SIZE`
    #[error("board size {0} out of range (1..={max})", max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    /// Explicit search depth outside `1..=MAX_EXPLICIT_DEPTH`
    #[error("search depth {0} out of range (1..={max})", max = MAX_EXPLICIT_DEPTH)]
    InvalidDepth(u8),

    /// `Stone::Empty` where a player was expected
    #[error("{0} stone must be Black or White")]
    EmptyStone(&'static str),

    /// Both sides were given the same color
    #[error("engine and opponent both play {}", .0.name())]
    SameStones(Stone),
}

/// AI strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Win, block, otherwise random. No search.
    Easy,
    /// Minimax at depth 1
    #[default]
    Normal,
    /// Minimax at depth 3
    Hard,
    /// Any other tier: minimax at the given depth
    Depth(u8),
}

impl Difficulty {
    /// Tiers offered by the GUI menu
    pub const MENU: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Minimax depth for this tier, `None` for Easy
    pub fn search_depth(self) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Normal => Some(1),
            Difficulty::Hard => Some(3),
            Difficulty::Depth(depth) => Some(depth),
        }
    }

    /// Parse a difficulty label.
    ///
    /// Only the exact tier names `Easy`, `Normal`, and `Hard` select a
    /// tier. Any other label, numbers included, falls back to depth 2.
    pub fn parse_lenient(label: &str) -> Self {
        match label {
            "Easy" => Difficulty::Easy,
            "Normal" => Difficulty::Normal,
            "Hard" => Difficulty::Hard,
            other => {
                warn!(
                    "unknown difficulty {:?}, searching at depth {}",
                    other, FALLBACK_DEPTH
                );
                Difficulty::Depth(FALLBACK_DEPTH)
            }
        }
    }

    /// Explicit search depth, limited to `1..=MAX_EXPLICIT_DEPTH`
    pub fn with_depth(depth: u8) -> Result<Self, ConfigError> {
        if (1..=MAX_EXPLICIT_DEPTH).contains(&depth) {
            Ok(Difficulty::Depth(depth))
        } else {
            Err(ConfigError::InvalidDepth(depth))
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Depth(depth) => write!(f, "Depth {}", depth),
        }
    }
}

/// Settings for one AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Stone the engine plays
    pub stone: Stone,
    pub difficulty: Difficulty,
    /// Seed for Easy-tier random picks. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new(stone: Stone, difficulty: Difficulty) -> Self {
        Self {
            stone,
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject `Stone::Empty` as the engine's side
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stone.is_player() {
            return Err(ConfigError::EmptyStone("engine"));
        }
        Ok(())
    }
}

/// Settings for one game against the AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length
    pub board_size: usize,
    pub difficulty: Difficulty,
    /// Stone the AI plays. The human takes the other one.
    pub ai_stone: Stone,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::Normal,
            ai_stone: Stone::White,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check the board size and the AI stone
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        self.engine().validate()
    }

    /// Stone of the human side
    pub fn human_stone(&self) -> Stone {
        self.ai_stone.opponent()
    }

    /// Engine settings for the AI side
    pub fn engine(&self) -> EngineConfig {
        EngineConfig::new(self.ai_stone, self.difficulty).with_seed(self.seed)
    }
}

/// Board edge must be in `1..=MAX_BOARD_SIZE`
pub fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if (1..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::InvalidBoardSize(size))
    }
}

/// Two engines facing each other must play different colors
pub fn validate_pairing(first: &EngineConfig, second: &EngineConfig) -> Result<(), ConfigError> {
    first.validate()?;
    second.validate()?;
    if first.stone == second.stone {
        return Err(ConfigError::SameStones(first.stone));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_depths() {
        assert_eq!(Difficulty::Easy.search_depth(), None);
        assert_eq!(Difficulty::Normal.search_depth(), Some(1));
        assert_eq!(Difficulty::Hard.search_depth(), Some(3));
        assert_eq!(Difficulty::Depth(4).search_depth(), Some(4));
    }

    #[test]
    fn test_parse_named_tiers() {
        assert_eq!(Difficulty::parse_lenient("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient("Normal"), Difficulty::Normal);
        assert_eq!(Difficulty::parse_lenient("Hard"), Difficulty::Hard);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        let difficulty = Difficulty::parse_lenient("impossible");
        assert_eq!(difficulty, Difficulty::Depth(FALLBACK_DEPTH));
        assert_eq!(difficulty.search_depth(), Some(2));
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Depth(2));
    }

    #[test]
    fn test_parse_other_spellings_fall_back() {
        for label in ["easy", "HARD", " Normal ", "normal"] {
            assert_eq!(
                Difficulty::parse_lenient(label),
                Difficulty::Depth(FALLBACK_DEPTH),
                "{label:?}"
            );
        }
    }

    #[test]
    fn test_numeric_labels_fall_back() {
        for label in ["7", "200", "0", "2"] {
            let difficulty = Difficulty::parse_lenient(label);
            assert_eq!(difficulty, Difficulty::Depth(FALLBACK_DEPTH), "{label:?}");
            assert_eq!(difficulty.search_depth(), Some(2));
        }
        assert_eq!("200".parse::<Difficulty>(), Ok(Difficulty::Depth(2)));
    }

    #[test]
    fn test_explicit_depth_is_bounded() {
        assert_eq!(Difficulty::with_depth(1), Ok(Difficulty::Depth(1)));
        assert_eq!(
            Difficulty::with_depth(MAX_EXPLICIT_DEPTH),
            Ok(Difficulty::Depth(4))
        );
        assert_eq!(Difficulty::with_depth(0), Err(ConfigError::InvalidDepth(0)));
        assert_eq!(
            Difficulty::with_depth(200),
            Err(ConfigError::InvalidDepth(200))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(Difficulty::Depth(2).to_string(), "Depth 2");
    }

    #[test]
    fn test_default_game_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.ai_stone, Stone::White);
        assert_eq!(config.human_stone(), Stone::Black);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_board_size() {
        let config = GameConfig {
            board_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBoardSize(0)));

        let config = GameConfig {
            board_size: MAX_BOARD_SIZE + 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBoardSize(_))
        ));
    }

    #[test]
    fn test_empty_ai_stone_rejected() {
        let config = GameConfig {
            ai_stone: Stone::Empty,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyStone("engine")));
    }

    #[test]
    fn test_engine_config_from_game() {
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            seed: Some(7),
            ..GameConfig::default()
        };
        let engine = config.engine();
        assert_eq!(engine.stone, Stone::White);
        assert_eq!(engine.difficulty, Difficulty::Hard);
        assert_eq!(engine.seed, Some(7));
    }

    #[test]
    fn test_pairing() {
        let black = EngineConfig::new(Stone::Black, Difficulty::Easy);
        let white = EngineConfig::new(Stone::White, Difficulty::Hard);
        assert!(validate_pairing(&black, &white).is_ok());
        assert_eq!(
            validate_pairing(&black, &black),
            Err(ConfigError::SameStones(Stone::Black))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidBoardSize(30).to_string(),
            "board size 30 out of range (1..=25)"
        );
        assert_eq!(
            ConfigError::SameStones(Stone::White).to_string(),
            "engine and opponent both play White"
        );
        assert_eq!(
            ConfigError::InvalidDepth(9).to_string(),
            "search depth 9 out of range (1..=4)"
        );
    }
}
