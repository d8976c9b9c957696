//! headline-style converts text to headline style (title case): major words
//! are capitalized while small words such as "a", "of" and "the" stay
//! lowercase, following newspaper style guide conventions.
//!
//! Acronyms, hyphenated and slashed compounds, `Mc` and `O'` names,
//! honorifics and all-caps input all get special treatment.
//!
//! # Example
//!
//! ```
//! use headline_style::{headline, Options};
//!
//! let output = headline("the quick brown fox jumps over a lazy dog", &Options::default());
//! assert_eq!(output, "The Quick Brown Fox Jumps Over a Lazy Dog");
//! ```

pub mod config;
mod small_words;
mod transform;
#[cfg(feature = "wasm")]
mod wasm;
mod wordlist;

pub use small_words::{DEFAULT_SMALL_WORDS, SmallWords, SmallWordsError};
pub use wordlist::{WORDLIST_FILE_NAME, WordOverride, Wordlist};

/// Options for the headline transformer.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Words kept lowercase inside a line. Default: the built-in list.
    pub small_words: SmallWords,
    /// Capitalize small words that start or end a line. Default: true.
    pub capitalize_boundary_small_words: bool,
    /// Keep blank lines instead of collapsing them. Default: false.
    pub preserve_blank_lines: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            small_words: SmallWords::default(),
            capitalize_boundary_small_words: true,
            preserve_blank_lines: false,
        }
    }
}

/// Converts `text` to headline style.
///
/// Lines are transformed independently and joined with `\n`. The
/// transformation never fails; empty input gives empty output.
pub fn headline(text: &str, options: &Options) -> String {
    transform::transform(
        text,
        &options.small_words,
        None,
        options.capitalize_boundary_small_words,
        options.preserve_blank_lines,
    )
}

/// Converts `text` to headline style, consulting `overrides` before the
/// built-in rules for every word.
///
/// A word given a casing by `overrides` is used verbatim and is not touched
/// by any later pass.
///
/// ```
/// use headline_style::{headline_with, Options, Wordlist};
///
/// let acronyms = Wordlist::from_words(["TCP", "UDP"]);
/// let output = headline_with("a simple tcp and udp wrapper", &Options::default(), &acronyms);
/// assert_eq!(output, "A Simple TCP and UDP Wrapper");
/// ```
pub fn headline_with(text: &str, options: &Options, overrides: &dyn WordOverride) -> String {
    transform::transform(
        text,
        &options.small_words,
        Some(overrides),
        options.capitalize_boundary_small_words,
        options.preserve_blank_lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_empty_input() {
        assert_eq!(headline("", &Options::default()), "");
    }

    #[test]
    fn test_headline_plain_text() {
        assert_eq!(
            headline("small word at end is nothing to be afraid of", &Options::default()),
            "Small Word at End Is Nothing to Be Afraid Of"
        );
    }

    #[test]
    fn test_headline_with_closure() {
        let at_and_t = |word: &str, _: bool| {
            (word.to_uppercase() == "AT&T").then(|| word.to_uppercase())
        };
        assert_eq!(headline_with("at&t", &Options::default(), &at_and_t), "AT&T");
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(options.capitalize_boundary_small_words);
        assert!(!options.preserve_blank_lines);
        assert_eq!(options.small_words.as_pattern(), DEFAULT_SMALL_WORDS);
    }
}
