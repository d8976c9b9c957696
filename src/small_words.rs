// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! The list of small words that stay lowercase inside a headline.
//!
//! A [`SmallWords`] value compiles one alternation into the four patterns the
//! transformer needs. It is an ordinary value carried in [`crate::Options`],
//! so different callers can use different lists at the same time.

use std::sync::LazyLock;

use regex::Regex;

use crate::transform::rules::PUNCT;

/// The default small words: the New York Times Manual of Style list plus
/// `v` and `vs`, written as a regular expression alternation.
pub const DEFAULT_SMALL_WORDS: &str =
    r"a|an|and|as|at|but|by|en|for|if|in|of|on|or|the|to|v\.?|via|vs\.?";

static DEFAULT: LazyLock<SmallWords> = LazyLock::new(|| {
    SmallWords::from_pattern(DEFAULT_SMALL_WORDS).expect("default small word pattern is valid")
});

/// A compiled set of small words.
#[derive(Debug, Clone)]
pub struct SmallWords {
    source: String,
    patterns: Option<Patterns>,
}

#[derive(Debug, Clone)]
struct Patterns {
    exact: Regex,
    first: Regex,
    last: Regex,
    subphrase: Regex,
}

impl SmallWords {
    /// Builds a list from plain words. Each word is matched literally and
    /// case-insensitively; blank entries are skipped.
    ///
    /// An empty list is valid and disables every small-word rule.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternation = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Self {
                source: alternation,
                patterns: None,
            };
        }
        // Escaped literals always form a valid alternation.
        Self::from_pattern(&alternation).expect("escaped small words form a valid pattern")
    }

    /// Builds a list from a raw regular expression alternation such as
    /// `a|an|the|vs\.?`.
    pub fn from_pattern(alternation: &str) -> Result<Self, SmallWordsError> {
        if alternation.trim().is_empty() {
            return Ok(Self {
                source: String::new(),
                patterns: None,
            });
        }
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| SmallWordsError::InvalidPattern(alternation.into(), e))
        };
        let patterns = Patterns {
            exact: compile(format!(r"(?i)^(?:{alternation})$"))?,
            first: compile(format!(r"(?i)^([{PUNCT}]*)({alternation})\b"))?,
            last: compile(format!(r"(?i)\b({alternation})[{PUNCT}]?$"))?,
            subphrase: compile(format!(r"([:.;?!\-–‒—―][ ])({alternation})"))?,
        };
        Ok(Self {
            source: alternation.to_string(),
            patterns: Some(patterns),
        })
    }

    /// The alternation this list was compiled from.
    pub fn as_pattern(&self) -> &str {
        &self.source
    }

    /// Whether the whole word is a small word.
    pub fn is_small(&self, word: &str) -> bool {
        self.patterns
            .as_ref()
            .is_some_and(|p| p.exact.is_match(word))
    }

    /// Capitalizes a small word at the start of `word`, after any leading
    /// punctuation.
    pub(crate) fn capitalize_first(&self, word: &str) -> String {
        let Some(patterns) = &self.patterns else {
            return word.to_string();
        };
        patterns
            .first
            .replace(word, |caps: &regex::Captures| {
                format!("{}{}", &caps[1], capitalize(&caps[2]))
            })
            .into_owned()
    }

    /// Capitalizes a small word at the end of `word`, allowing one trailing
    /// punctuation character.
    pub(crate) fn capitalize_last(&self, word: &str) -> String {
        let Some(patterns) = &self.patterns else {
            return word.to_string();
        };
        patterns
            .last
            .replace(word, |caps: &regex::Captures| capitalize(&caps[0]))
            .into_owned()
    }

    /// Byte ranges of lowercase small words that open a sub-phrase in `line`.
    pub(crate) fn subphrase_starts(&self, line: &str) -> Vec<std::ops::Range<usize>> {
        let Some(patterns) = &self.patterns else {
            return Vec::new();
        };
        patterns
            .subphrase
            .captures_iter(line)
            .filter_map(|caps| caps.get(2).map(|m| m.range()))
            .collect()
    }
}

impl Default for SmallWords {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl PartialEq for SmallWords {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

/// Errors that can occur when building a small word list.
#[derive(Debug)]
pub enum SmallWordsError {
    /// The alternation did not compile.
    InvalidPattern(String, regex::Error),
}

impl std::fmt::Display for SmallWordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmallWordsError::InvalidPattern(pattern, err) => {
                write!(f, "invalid small word pattern '{}': {}", pattern, err)
            }
        }
    }
}

impl std::error::Error for SmallWordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SmallWordsError::InvalidPattern(_, err) => Some(err),
        }
    }
}
