// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Per-word overrides and the acronym word list.
//!
//! A word list is a plain text file with one word per line, written in its
//! canonical casing (`UDP`, `PPPoE`). Any word matching an entry
//! case-insensitively is replaced by the entry verbatim.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// The default word list file name, looked up in the home directory.
pub const WORDLIST_FILE_NAME: &str = ".headline-style.txt";

/// Chooses the exact casing of a word ahead of the built-in rules.
///
/// Returning `None` (or an empty string) lets the rules decide.
pub trait WordOverride {
    /// Returns the replacement for `word`. `all_caps` is true when the line
    /// containing the word is entirely uppercase.
    fn override_word(&self, word: &str, all_caps: bool) -> Option<String>;
}

impl<F> WordOverride for F
where
    F: Fn(&str, bool) -> Option<String>,
{
    fn override_word(&self, word: &str, all_caps: bool) -> Option<String> {
        self(word, all_caps)
    }
}

/// A case-insensitive list of words with fixed casing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wordlist {
    entries: IndexMap<String, String>,
}

impl Wordlist {
    /// Parses a word list, one word per line. Surrounding whitespace is
    /// trimmed and blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Builds a word list from individual words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            entries.insert(word.to_uppercase(), word.to_string());
        }
        Self { entries }
    }

    /// Reads a word list file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let wordlist = Self::parse(&content);
        for word in wordlist.entries.values() {
            tracing::debug!(%word, "registered abbreviation");
        }
        Ok(wordlist)
    }

    /// Reads a word list file, falling back to an empty list when no path
    /// is given or the file cannot be read.
    pub fn from_file(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("no abbreviations file path given");
            return Self::default();
        };
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no abbreviations file found");
            return Self::default();
        }
        tracing::debug!(path = %path.display(), "reading abbreviations");
        match Self::load(path) {
            Ok(wordlist) => wordlist,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read abbreviations");
                Self::default()
            }
        }
    }

    /// The default word list location, `~/.headline-style.txt`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(WORDLIST_FILE_NAME))
    }

    /// The canonical casing for `word`, if listed.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_uppercase()).map(String::as_str)
    }

    /// Number of listed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listed words in file order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}

impl WordOverride for Wordlist {
    fn override_word(&self, word: &str, _all_caps: bool) -> Option<String> {
        self.get(word).map(str::to_string)
    }
}
