use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::errors::{SearchError, SearchResult};
use crate::filters::Filter;
use crate::search::Searcher;

/// Settings for building a [`Searcher`] from files on disk.
///
/// # Configuration Locations
///
/// Configuration is merged from these locations, later ones taking precedence:
/// 1. Global `$HOME/.config/wordscout/config.yaml`
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. An explicit file passed to [`WordscoutConfig::load_from`]
///
/// # Configuration Format
///
/// ```yaml
/// # Newline-separated word list
/// dictionary_path: "/usr/share/dict/words"
///
/// # Length filter; omitted fields keep their defaults
/// filter:
///   min_length: 3
///   max_length: 8
///   exact_length: 0
///   prefer_longest_non_overlapping: true
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordscoutConfig {
    /// Word selection and overlap policy
    #[serde(default)]
    pub filter: Filter,

    /// Word list to load, one word per line
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for WordscoutConfig {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            dictionary_path: None,
            log_level: default_log_level(),
        }
    }
}

impl WordscoutConfig {
    /// Loads configuration from the default locations
    pub fn load() -> SearchResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus `config_path`.
    ///
    /// The default locations are optional; an explicit path must exist.
    pub fn load_from(config_path: Option<&Path>) -> SearchResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let default_files = [
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            Some(PathBuf::from(".wordscout.yaml")),
        ];

        for path in default_files.iter().flatten() {
            if path.exists() {
                debug!("Reading configuration from {}", path.display());
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Loads the configured word list
    pub fn dictionary(&self) -> SearchResult<Dictionary> {
        let path = self
            .dictionary_path
            .as_deref()
            .ok_or_else(|| SearchError::config_error("dictionary_path is not set"))?;
        Dictionary::load(path)
    }

    /// Loads the configured word list and builds a searcher with the
    /// configured filter
    pub fn build_searcher(&self) -> SearchResult<Searcher> {
        let dictionary = self.dictionary()?;
        Ok(Searcher::new(&dictionary, self.filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            dictionary_path: "words.txt"
            filter:
              min_length: 3
              max_length: 4
              prefer_longest_non_overlapping: true
            log_level: "debug"
        "#;
        fs::write(&config_path, config_content).unwrap();

        let config = WordscoutConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.filter.min_length, 3);
        assert_eq!(config.filter.max_length, 4);
        assert_eq!(config.filter.exact_length, 0);
        assert!(config.filter.prefer_longest_non_overlapping);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "log_level: \"warn\"\n").unwrap();

        let config = WordscoutConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.filter, Filter::default());
        assert_eq!(config.dictionary_path, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            filter:
              min_length: "three"
        "#;
        fs::write(&config_path, config_content).unwrap();

        let result = WordscoutConfig::load_from(Some(&config_path));
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = WordscoutConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_dictionary_requires_path() {
        let config = WordscoutConfig::default();
        assert!(matches!(
            config.dictionary(),
            Err(SearchError::ConfigError(_))
        ));
    }

    #[test]
    fn test_build_searcher() {
        let dir = tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        fs::write(&words_path, "a\nhe\nhello\nworld\n").unwrap();

        let config = WordscoutConfig {
            filter: Filter::exact(5),
            dictionary_path: Some(words_path),
            ..WordscoutConfig::default()
        };

        let searcher = config.build_searcher().unwrap();
        assert_eq!(searcher.word_count(), 2);
        assert_eq!(searcher.find("Hello, World!").word_count, 2);
    }
}
