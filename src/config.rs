// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.headline-style.toml`) that control the transformer's behavior.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Options, SmallWords};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".headline-style.toml";

/// Configuration for the headline transformer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Replacement small word list (default: the built-in list).
    pub small_words: Option<Vec<String>>,

    /// Path to an acronym word list (default: `~/.headline-style.txt`).
    /// Relative paths are resolved against the configuration file's
    /// directory when loaded with [`Config::from_file`].
    pub wordlist: Option<PathBuf>,

    /// Keep blank lines in the output (default: false).
    pub preserve_blank_lines: bool,

    /// Capitalize small words at the start and end of a line (default: true).
    pub capitalize_boundary_small_words: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            small_words: None,
            wordlist: None,
            preserve_blank_lines: false,
            capitalize_boundary_small_words: true,
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config =
            Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        if let (Some(wordlist), Some(dir)) = (&config.wordlist, path.parent())
            && wordlist.is_relative()
        {
            config.wordlist = Some(dir.join(wordlist));
        }
        Ok(config)
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.headline-style.toml` in each
    /// parent directory until the filesystem root is reached. Returns `None`
    /// if no configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Build transformer options from this configuration.
    pub fn to_options(&self) -> Options {
        let small_words = match &self.small_words {
            Some(words) => SmallWords::new(words),
            None => SmallWords::default(),
        };
        Options {
            small_words,
            capitalize_boundary_small_words: self.capitalize_boundary_small_words,
            preserve_blank_lines: self.preserve_blank_lines,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.small_words, None);
        assert_eq!(config.wordlist, None);
        assert!(!config.preserve_blank_lines);
        assert!(config.capitalize_boundary_small_words);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
small_words = ["a", "an", "the", "with"]
wordlist = "/etc/acronyms.txt"
preserve_blank_lines = true
capitalize_boundary_small_words = false
"#,
        )
        .unwrap();
        assert_eq!(
            config.small_words,
            Some(vec![
                "a".to_string(),
                "an".to_string(),
                "the".to_string(),
                "with".to_string()
            ])
        );
        assert_eq!(config.wordlist, Some(PathBuf::from("/etc/acronyms.txt")));
        assert!(config.preserve_blank_lines);
        assert!(!config.capitalize_boundary_small_words);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml("preserve_blank_lines = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_to_options_default() {
        let options = Config::default().to_options();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_to_options_small_words() {
        let config = Config::from_toml(r#"small_words = ["with"]"#).unwrap();
        let options = config.to_options();
        assert!(options.small_words.is_small("with"));
        assert!(!options.small_words.is_small("the"));
    }

    #[test]
    fn test_from_file_resolves_relative_wordlist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, r#"wordlist = "acronyms.txt""#).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.wordlist, Some(temp_dir.path().join("acronyms.txt")));
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, _)));
    }

    #[test]
    fn test_discover_no_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        // A config further up the real tree would be found, so only check
        // that nothing inside the temporary directory is reported.
        let result = Config::discover(&nested).unwrap();
        assert!(result.is_none_or(|(path, _)| !path.starts_with(temp_dir.path())));
    }

    #[test]
    fn test_discover_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "preserve_blank_lines = true").unwrap();

        let result = Config::discover(temp_dir.path()).unwrap();
        let (path, config) = result.unwrap();
        assert_eq!(path, config_path);
        assert!(config.preserve_blank_lines);
    }

    #[test]
    fn test_discover_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub_dir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&sub_dir).unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "capitalize_boundary_small_words = false").unwrap();

        let (path, config) = Config::discover(&sub_dir).unwrap().unwrap();
        assert_eq!(path, config_path);
        assert!(!config.capitalize_boundary_small_words);
    }

    #[test]
    fn test_discover_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "small_words = 3").unwrap();
        let err = Config::discover(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
    }
}
