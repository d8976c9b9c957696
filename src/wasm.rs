//! WebAssembly bindings for headline-style.
//!
//! This module provides JavaScript-friendly bindings for the transformer.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{Options, SmallWords, WordOverride, Wordlist};

/// JavaScript-friendly options struct.
///
/// All fields are optional and use camelCase naming for JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Small words replacing the built-in list.
    pub small_words: Option<Vec<String>>,

    /// Acronyms with fixed casing.
    pub acronyms: Option<Vec<String>>,

    /// Keep blank lines (default: false).
    pub preserve_blank_lines: Option<bool>,

    /// Capitalize small words at line boundaries (default: true).
    pub capitalize_boundary_small_words: Option<bool>,
}

impl JsOptions {
    /// Convert JavaScript options to Rust Options.
    fn to_options(&self) -> Options {
        let mut opts = Options::default();

        if let Some(ref v) = self.small_words {
            opts.small_words = SmallWords::new(v);
        }
        if let Some(v) = self.preserve_blank_lines {
            opts.preserve_blank_lines = v;
        }
        if let Some(v) = self.capitalize_boundary_small_words {
            opts.capitalize_boundary_small_words = v;
        }

        opts
    }

    fn wordlist(&self) -> Wordlist {
        self.acronyms
            .as_deref()
            .map(Wordlist::from_words)
            .unwrap_or_default()
    }
}

/// Overrides from the acronym list first, then from a JavaScript callback.
struct JsOverride {
    wordlist: Wordlist,
    callback: Option<js_sys::Function>,
}

impl WordOverride for JsOverride {
    fn override_word(&self, word: &str, all_caps: bool) -> Option<String> {
        if let Some(word) = self.wordlist.get(word) {
            return Some(word.to_string());
        }
        let func = self.callback.as_ref()?;
        let this = JsValue::null();
        let word_js = JsValue::from_str(word);
        let all_caps_js = JsValue::from_bool(all_caps);
        match func.call2(&this, &word_js, &all_caps_js) {
            Ok(result) => {
                if result.is_null() || result.is_undefined() {
                    None
                } else {
                    result.as_string()
                }
            }
            Err(_) => None,
        }
    }
}

/// Convert text to headline style.
///
/// # Arguments
///
/// * `text` - Text to convert
/// * `options` - Optional options as a JavaScript object
/// * `override_word` - Optional JavaScript callback `(word: string, allCaps: boolean) => string | null`
///   returning the exact casing for a word, or null/undefined to apply the rules.
///
/// # Returns
///
/// The converted string.
#[wasm_bindgen]
pub fn headline(
    text: &str,
    options: JsValue,
    override_word: Option<js_sys::Function>,
) -> Result<String, JsError> {
    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    let opts = js_opts.to_options();
    let overrides = JsOverride {
        wordlist: js_opts.wordlist(),
        callback: override_word,
    };
    Ok(crate::headline_with(text, &opts, &overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_options_default() {
        let js_opts = JsOptions::default();
        let opts = js_opts.to_options();
        assert_eq!(opts, Options::default());
        assert!(js_opts.wordlist().is_empty());
    }

    #[test]
    fn test_js_options_partial() {
        let js_opts = JsOptions {
            preserve_blank_lines: Some(true),
            ..Default::default()
        };
        let opts = js_opts.to_options();
        assert!(opts.preserve_blank_lines);
        assert!(opts.capitalize_boundary_small_words); // default
    }

    #[test]
    fn test_js_options_small_words() {
        let js_opts = JsOptions {
            small_words: Some(vec!["with".to_string()]),
            ..Default::default()
        };
        let opts = js_opts.to_options();
        assert!(opts.small_words.is_small("with"));
        assert!(!opts.small_words.is_small("the"));
    }

    #[test]
    fn test_js_options_acronyms() {
        let js_opts = JsOptions {
            acronyms: Some(vec!["PPPoE".to_string()]),
            ..Default::default()
        };
        assert_eq!(js_opts.wordlist().get("pppoe"), Some("PPPoE"));
    }
}
