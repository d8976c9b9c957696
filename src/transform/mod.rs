// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Headline style transformation.
//!
//! Text is split into lines and each line into words. Every word is
//! classified by [`word`], then small words at the line boundaries and at
//! the start of sub-phrases are capitalized again.

pub(crate) mod rules;
mod word;


use crate::small_words::{SmallWords, capitalize};
use crate::wordlist::WordOverride;

use rules::{LINE_BREAK, LINE_BREAKS};
use word::Word;

/// How deep `Mc` prefixes may nest before the rest of a word is simply
/// capitalized.
pub(crate) const MAX_DEPTH: usize = 64;

/// Transforms `text` to headline style.
pub(crate) fn transform(
    text: &str,
    small_words: &SmallWords,
    overrides: Option<&dyn WordOverride>,
    capitalize_boundaries: bool,
    preserve_blank_lines: bool,
) -> String {
    let transformer = Transformer {
        small_words,
        overrides,
        depth: 0,
    };
    let result = transformer.text(text, capitalize_boundaries, preserve_blank_lines);
    tracing::debug!(%result, "transformed text");
    result
}

/// The state shared by a transformation and all of its recursive calls.
#[derive(Clone, Copy)]
pub(crate) struct Transformer<'a> {
    small_words: &'a SmallWords,
    overrides: Option<&'a dyn WordOverride>,
    depth: usize,
}

impl Transformer<'_> {
    /// The transformer for fragments of a word handled at this level.
    fn nested(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Transforms every line of `text`. Compound words re-enter here with
    /// their fragments.
    fn text(&self, text: &str, capitalize_boundaries: bool, preserve_blank_lines: bool) -> String {
        let breaks = if preserve_blank_lines {
            &*LINE_BREAK
        } else {
            &*LINE_BREAKS
        };
        breaks
            .split(text)
            .map(|line| self.line(line, capitalize_boundaries))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line(&self, line: &str, capitalize_boundaries: bool) -> String {
        let all_caps = line.to_uppercase() == line;
        let mut words: Vec<Word> = line
            .split(['\t', ' '])
            .map(|word| self.classify(word, all_caps))
            .collect();

        if capitalize_boundaries {
            if let Some(first) = words.first_mut().filter(|w| !w.locked) {
                first.text = self.small_words.capitalize_first(&first.text);
            }
            if let Some(last) = words.last_mut().filter(|w| !w.locked) {
                last.text = self.small_words.capitalize_last(&last.text);
            }
        }

        self.join_capitalizing_subphrases(&words)
    }

    /// Joins words with single spaces, capitalizing a small word that
    /// follows a clause delimiter unless that word is locked.
    fn join_capitalizing_subphrases(&self, words: &[Word]) -> String {
        let mut joined = String::new();
        let mut locked_starts = Vec::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            if word.locked {
                locked_starts.push(joined.len());
            }
            joined.push_str(&word.text);
        }

        let starts = self.small_words.subphrase_starts(&joined);
        if starts.is_empty() {
            return joined;
        }

        let mut result = String::with_capacity(joined.len());
        let mut cursor = 0;
        for range in starts {
            if locked_starts.contains(&range.start) {
                continue;
            }
            result.push_str(&joined[cursor..range.start]);
            result.push_str(&capitalize(&joined[range.clone()]));
            cursor = range.end;
        }
        result.push_str(&joined[cursor..]);
        result
    }
}
