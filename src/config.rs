use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, MIN_DIM};

/// Board configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height < MIN_DIM {
            return Err(ConfigError::Validation(format!(
                "height must be >= {MIN_DIM}"
            )));
        }
        if self.width < MIN_DIM {
            return Err(ConfigError::Validation(format!(
                "width must be >= {MIN_DIM}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.height, 6);
        assert_eq!(config.width, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: GameConfig = toml::from_str("height = 8\nwidth = 9\n").unwrap();
        assert_eq!(config, GameConfig { height: 8, width: 9 });
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("width = 10\n").unwrap();
        assert_eq!(config.height, 6);
        assert_eq!(config.width, 10);
    }

    #[test]
    fn test_validation_rejects_small_dimensions() {
        let config = GameConfig { height: 3, width: 7 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        let config = GameConfig { height: 6, width: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig { height: 5, width: 8 };
        let text = toml::to_string(&config).unwrap();
        let parsed: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
