//! Text canonicalization used before any lexicon matching.
//!
//! Lowercases, strips diacritics (NFD + drop combining marks), turns every
//! non `[a-z0-9]` character into a space and collapses whitespace, so that
//! "Très HEUREUX !!" and "tres heureux" compare equal.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw user text for matching. Total over any input.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();

    let mut out = String::with_capacity(lower.len());
    let mut pending_space = false;
    for c in lower.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Très HEUREUX"), "tres heureux");
        assert_eq!(normalize("mélancolie"), "melancolie");
        assert_eq!(normalize("Colère"), "colere");
    }

    #[test]
    fn punctuation_becomes_single_space() {
        assert_eq!(normalize("j'ai peur!!! dans... le noir"), "j ai peur dans le noir");
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  \t calme \n\n  zen  "), "calme zen");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!… ❤ 😊"), "");
    }

    #[test]
    fn non_latin_letters_are_dropped() {
        // No ASCII decomposition exists for these, so they act as separators.
        assert_eq!(normalize("joie开心joie"), "joie joie");
    }

    #[test]
    fn every_combining_mark_class_is_removed() {
        // Mn (acute), Mc (visarga) and Me (enclosing circle) all vanish
        // instead of splitting the word.
        assert_eq!(normalize("e\u{0301}te"), "ete");
        assert_eq!(normalize("a\u{0903}b"), "ab");
        assert_eq!(normalize("a\u{20DD}b"), "ab");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("24kHz, 10s"), "24khz 10s");
    }

    proptest! {
        #[test]
        fn proptest_output_alphabet_is_restricted(text in "\\PC{0,64}") {
            let out = normalize(&text);
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn proptest_normalize_is_idempotent(text in "\\PC{0,64}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
