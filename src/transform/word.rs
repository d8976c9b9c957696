// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Per-word classification.

use super::{MAX_DEPTH, Transformer};
use super::rules::{
    ALL_CONSONANTS, APOS_SECOND, CAPFIRST, INLINE_PERIOD, MAC_MC, MR_MRS_MS_DR, UC_ELSEWHERE,
    UC_INITIALS,
};
use crate::small_words::capitalize;

/// A word after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    pub text: String,
    /// Set when an override chose the casing; later passes leave it alone.
    pub locked: bool,
}

impl Word {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locked: false,
        }
    }

    fn locked(text: String) -> Self {
        Self { text, locked: true }
    }
}

impl Transformer<'_> {
    /// Assigns a casing to a single word. The first matching rule wins.
    pub(super) fn classify(&self, word: &str, all_caps: bool) -> Word {
        if let Some(replacement) = self
            .overrides
            .and_then(|o| o.override_word(word, all_caps))
            .filter(|r| !r.is_empty())
        {
            return Word::locked(replacement);
        }

        if all_caps && UC_INITIALS.is_match(word) {
            return Word::new(word);
        }

        if APOS_SECOND.is_match(word) {
            return Word::new(name_with_apostrophe(word));
        }

        if let Some(caps) = MAC_MC.captures(word) {
            let rest = if self.depth < MAX_DEPTH {
                self.nested().text(&caps[2], true, false)
            } else {
                capitalize_first_letter(&caps[2])
            };
            return Word::new(format!("{}{}", capitalize(&caps[1]), rest));
        }

        if MR_MRS_MS_DR.is_match(word) {
            if all_caps {
                return Word::new(uppercase_first_char(&word.to_lowercase()));
            }
            return Word::new(uppercase_first_char(word));
        }

        if INLINE_PERIOD.is_match(word) || (!all_caps && UC_ELSEWHERE.is_match(word)) {
            return Word::new(word);
        }

        if self.small_words.is_small(word) {
            return Word::new(word.to_lowercase());
        }

        if word.contains('/') && !word.contains("//") {
            return Word::new(self.compound(word, '/'));
        }

        if word.contains('-') {
            return Word::new(self.compound(word, '-'));
        }

        let word = if all_caps {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        if word.chars().count() > 2 && ALL_CONSONANTS.is_match(&word) {
            return Word::new(word.to_uppercase());
        }

        Word::new(capitalize_first_letter(&word))
    }

    /// Transforms each part of a compound word on its own and rejoins them.
    fn compound(&self, word: &str, separator: char) -> String {
        word.split(separator)
            .map(|part| self.nested().text(part, false, false))
            .collect::<Vec<_>>()
            .join(&separator.to_string())
    }
}

/// `o'brien` becomes `O'Brien`; `l'grange` becomes `l'Grange`.
fn name_with_apostrophe(word: &str) -> String {
    let mut chars = word.chars();
    let (Some(prefix), Some(apostrophe), Some(initial)) = (chars.next(), chars.next(), chars.next())
    else {
        return word.to_string();
    };

    let mut result = String::with_capacity(word.len());
    if "aeiouAEIOU".contains(prefix) {
        result.extend(prefix.to_uppercase());
    } else {
        result.extend(prefix.to_lowercase());
    }
    result.push(apostrophe);
    result.extend(initial.to_uppercase());
    result.push_str(chars.as_str());
    result
}

fn uppercase_first_char(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Uppercases the first letter and any punctuation in front of it.
fn capitalize_first_letter(word: &str) -> String {
    match CAPFIRST.find(word) {
        Some(m) => format!("{}{}", m.as_str().to_uppercase(), &word[m.end()..]),
        None => word.to_string(),
    }
}
