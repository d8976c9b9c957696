// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Fixed word classification patterns.
//!
//! Small-word patterns depend on the configured list and live in
//! [`crate::SmallWords`]; everything here is independent of it.

use std::sync::LazyLock;

use regex::Regex;

/// Punctuation that may precede or follow a word, as the body of a regex
/// character class.
pub const PUNCT: &str = r#"!"“#$%\&'‘()*+,\-–‒—―./:;?@\[\\\]_`\{|\}\~"#;

/// Line terminators, collapsed when blank lines are dropped.
pub static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| compile(r"[\r\n]+"));

/// A single line terminator.
pub static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"[\r\n]"));

/// Uppercase initials such as `A.` or `D.C.`.
pub static UC_INITIALS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\p{Lu}\.|\p{Lu}\.\p{Lu})+$"));

/// A `d`, `o` or `l` prefix followed by an apostrophe, as in `o'brien`.
pub static APOS_SECOND: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^[dol]['‘]\p{L}+(?:['s]{2})?$"));

/// `Mc` prefixed names; group 1 is the prefix, group 2 the remainder.
pub static MAC_MC: LazyLock<Regex> = LazyLock::new(|| compile(r"^([Mm]c|MC)(\w.+)"));

/// Honorifics.
pub static MR_MRS_MS_DR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(?:m(?:rs?|s)|dr)\.?$"));

/// A period between two letters, as in domain names.
pub static INLINE_PERIOD: LazyLock<Regex> = LazyLock::new(|| compile(r"\p{L}\.\p{L}"));

/// An uppercase letter after the first letter of a word.
pub static UC_ELSEWHERE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^[{PUNCT}]*?\p{{L}}+\p{{Lu}}")));

/// The first letter of a word along with any punctuation before it.
pub static CAPFIRST: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^[{PUNCT}]*?\p{{L}}")));

/// Words made only of consonants. `y` counts as a vowel.
pub static ALL_CONSONANTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^[bcdfghjklmnpqrstvwxz]+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_with_trailing_period() {
        assert!(UC_INITIALS.is_match("A.B."));
        assert!(UC_INITIALS.is_match("D.C."));
    }

    #[test]
    fn test_initials_without_trailing_period() {
        assert!(UC_INITIALS.is_match("A.B"));
    }

    #[test]
    fn test_initials_reject_plain_acronym() {
        assert!(!UC_INITIALS.is_match("ABCD"));
        assert!(!UC_INITIALS.is_match("a.b."));
    }

    #[test]
    fn test_apostrophe_prefix() {
        assert!(APOS_SECOND.is_match("o'brien"));
        assert!(APOS_SECOND.is_match("L'Grange"));
        assert!(APOS_SECOND.is_match("o‘grange's"));
        assert!(!APOS_SECOND.is_match("o'melveny/o'doyle"));
        assert!(!APOS_SECOND.is_match("shouldn't"));
    }

    #[test]
    fn test_mac_mc_needs_two_letter_remainder() {
        assert!(MAC_MC.is_match("mcby"));
        assert!(MAC_MC.is_match("MCFOO-BAR,"));
        assert!(!MAC_MC.is_match("mc"));
        assert!(!MAC_MC.is_match("mac"));
        assert!(!MAC_MC.is_match("mCdonald"));
    }

    #[test]
    fn test_honorifics() {
        for word in ["Mr", "mr", "Mrs", "MS", "Dr", "dr.", "Mrs."] {
            assert!(MR_MRS_MS_DR.is_match(word), "{word}");
        }
        for word in ["Mss", "Drs", "Mister"] {
            assert!(!MR_MRS_MS_DR.is_match(word), "{word}");
        }
    }

    #[test]
    fn test_internal_uppercase() {
        assert!(UC_ELSEWHERE.is_match("iTunes"));
        assert!(UC_ELSEWHERE.is_match("AT&T's"));
        assert!(UC_ELSEWHERE.is_match("'OmniFocus'"));
        assert!(!UC_ELSEWHERE.is_match("Q&A"));
        assert!(!UC_ELSEWHERE.is_match("o'Melveny"));
        assert!(!UC_ELSEWHERE.is_match("Apple"));
    }

    #[test]
    fn test_inline_period() {
        assert!(INLINE_PERIOD.is_match("example.com"));
        assert!(INLINE_PERIOD.is_match("del.icio.us"));
        assert!(!INLINE_PERIOD.is_match("end."));
        assert!(!INLINE_PERIOD.is_match("v."));
    }

    #[test]
    fn test_capfirst_skips_leading_punctuation() {
        assert_eq!(CAPFIRST.find("‘thoughts").map(|m| m.as_str()), Some("‘t"));
        assert!(CAPFIRST.find("34th").is_none());
        assert!(CAPFIRST.find("—").is_none());
    }

    #[test]
    fn test_all_consonants() {
        assert!(ALL_CONSONANTS.is_match("cnn"));
        assert!(ALL_CONSONANTS.is_match("MSS"));
        assert!(!ALL_CONSONANTS.is_match("udp"));
        assert!(!ALL_CONSONANTS.is_match("gym"));
        assert!(!ALL_CONSONANTS.is_match("5th"));
    }
}
