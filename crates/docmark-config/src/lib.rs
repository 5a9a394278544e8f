use docmark_engine::{FoldPolicy, Lexer, ParseOptions, parsing::lines::DEFAULT_TAB_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {config_path}: {message}")]
    Invalid {
        config_path: PathBuf,
        message: String,
    },
}

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// [parser]
/// fold_policy = "question-marks"
///
/// [lexer]
/// tab_size = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
    pub lexer: LexerSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    pub fold_policy: FoldPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerSection {
    /// Columns a tab advances to when measuring indentation.
    pub tab_size: usize,
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        // Expand shell variables and tilde in the given path
        let config_path =
            Self::expand_path(config_path).unwrap_or_else(|| config_path.to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        config.validate(&config_path)?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Options to hand to [`docmark_engine::parse_with`].
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_fold_policy(self.parser.fold_policy)
    }

    pub fn tab_size(&self) -> usize {
        self.lexer.tab_size
    }

    /// A lexer over `text` using the configured tab size.
    pub fn lexer<'a>(&self, text: &'a str) -> Lexer<'a> {
        Lexer::with_tab_size(text, self.lexer.tab_size)
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        if self.lexer.tab_size == 0 {
            return Err(ConfigError::Invalid {
                config_path: config_path.to_path_buf(),
                message: "lexer.tab_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
