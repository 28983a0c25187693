use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::{LEVEL_COUNT, MAX_WALK_STEPS};
use crate::levels::FileLevelSource;
use crate::render::BoardLayout;

pub const DEFAULT_CONFIG_FILE: &str = "sokoban.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("level_count must be at least 1")]
    NoLevels,
    #[error("layout.square_size must be positive, got {0}")]
    BadSquareSize(i32),
}

/// Settings read from `sokoban.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub level_dir: PathBuf,
    pub level_prefix: String,
    pub level_extension: String,
    pub level_count: usize,
    pub layout: BoardLayout,
    pub max_walk_steps: usize,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            level_dir: PathBuf::from("levels"),
            level_prefix: "warehouse".to_string(),
            level_extension: "txt".to_string(),
            level_count: LEVEL_COUNT,
            layout: BoardLayout::default(),
            max_walk_steps: MAX_WALK_STEPS,
            log_file: PathBuf::from("sokoban.log"),
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        if config.layout.square_size <= 0 {
            return Err(ConfigError::BadSquareSize(config.layout.square_size));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Loads `path` if given, otherwise `sokoban.toml` when present, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn level_source(&self) -> FileLevelSource {
        FileLevelSource::new(&self.level_dir, &self.level_prefix, &self.level_extension)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml("", Path::new("x.toml")).unwrap();
        assert_eq!(GameConfig::default(), config);
        assert_eq!(4, config.level_count);
        assert_eq!(25, config.layout.square_size);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let text = r#"
level_dir = "custom"
max_walk_steps = 10

[layout]
square_size = 32
"#;
        let config = GameConfig::from_toml(text, Path::new("x.toml")).unwrap();
        assert_eq!(PathBuf::from("custom"), config.level_dir);
        assert_eq!(10, config.max_walk_steps);
        assert_eq!(32, config.layout.square_size);
        assert_eq!(40, config.layout.left_margin);
        assert_eq!("warehouse", config.level_prefix);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = GameConfig::from_toml("level_count = \"four\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let err = GameConfig::from_toml("level_count = 0", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NoLevels));
    }

    #[test]
    fn square_size_must_be_positive() {
        for size in [0, -25] {
            let text = format!("[layout]\nsquare_size = {}\n", size);
            let err = GameConfig::from_toml(&text, Path::new("x.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::BadSquareSize(s) if s == size));
        }
        let config = GameConfig::from_toml("[layout]\nsquare_size = 1\n", Path::new("x.toml")).unwrap();
        assert_eq!(1, config.layout.square_size);
    }

    #[test]
    fn named_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = GameConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let present = dir.path().join("game.toml");
        std::fs::write(&present, "level_count = 2\n").unwrap();
        assert_eq!(2, GameConfig::load_or_default(Some(&present)).unwrap().level_count);
    }
}
