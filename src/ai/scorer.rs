//! Weighted whole-token matching of text against a lexicon.

use std::collections::BTreeMap;

use super::lexicon::{Lexicon, BASELINE_CATEGORY};
use super::normalize::normalize;

/// Raw integer score per category.
pub type RawScores = BTreeMap<String, i64>;

/// Score `text` against `lexicon`, falling back to `{calme: 1}` when nothing matches.
pub fn score(text: &str, lexicon: &Lexicon) -> RawScores {
    score_with_baseline(text, lexicon, BASELINE_CATEGORY)
}

/// Same as [`score`] with an explicit baseline category.
///
/// Entries are normalized like the text and matched with a space on each
/// side, so "fort" never matches inside "effort" and "coeur brise" matches
/// only as a whole phrase.
pub fn score_with_baseline(text: &str, lexicon: &Lexicon, baseline: &str) -> RawScores {
    let haystack = format!(" {} ", normalize(text));
    let mut scores = RawScores::new();

    for (category, words) in lexicon.iter() {
        for (word, weight) in words {
            let needle = normalize(word);
            if needle.is_empty() {
                continue;
            }
            if haystack.contains(&format!(" {} ", needle)) {
                let total = scores.entry(category.to_string()).or_insert(0);
                *total = total.saturating_add(*weight);
            }
        }
    }

    if scores.is_empty() {
        scores.insert(baseline.to_string(), 1);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(json: &str) -> Lexicon {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sums_weights_per_category() {
        let scores = score("je suis tres heureux et content", &Lexicon::default_lexicon());
        assert_eq!(scores.get("joie"), Some(&4));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn word_inside_longer_token_does_not_match() {
        let lex = lexicon(r#"{ "energie": { "fort": 1 } }"#);
        let scores = score("quel effort", &lex);
        assert_eq!(scores.get("energie"), None);
        assert_eq!(scores.get("calme"), Some(&1));
    }

    #[test]
    fn empty_text_gets_baseline() {
        let scores = score("", &Lexicon::default_lexicon());
        assert_eq!(scores, RawScores::from([("calme".to_string(), 1)]));
    }

    #[test]
    fn custom_baseline_category() {
        let scores = score_with_baseline("rien", &Lexicon::default_lexicon(), "neutre");
        assert_eq!(scores, RawScores::from([("neutre".to_string(), 1)]));
    }

    #[test]
    fn phrase_matches_across_punctuation() {
        let scores = score("Mon cœur... brisé !", &Lexicon::default_lexicon());
        // "coeur" does not decompose from "cœur", so only an exact spelling hits.
        assert_eq!(scores.get("tristesse"), None);

        let scores = score("Mon coeur... brisé !", &Lexicon::default_lexicon());
        assert_eq!(scores.get("tristesse"), Some(&3));
    }

    #[test]
    fn phrase_requires_whole_tokens() {
        let lex = lexicon(r#"{ "tristesse": { "coeur brise": 3 } }"#);
        assert_eq!(score("coeur brisee", &lex).get("tristesse"), None);
        assert_eq!(score("acoeur brise", &lex).get("tristesse"), None);
    }

    #[test]
    fn word_shared_by_categories_scores_both() {
        let scores = score("une nuit sombre", &Lexicon::default_lexicon());
        assert_eq!(scores.get("tristesse"), Some(&1));
        assert_eq!(scores.get("peur"), Some(&1));
        assert_eq!(scores.get("calme"), Some(&1));
    }

    #[test]
    fn accented_entries_match_plain_input() {
        let scores = score("je suis motive", &Lexicon::default_lexicon());
        assert_eq!(scores.get("energie"), Some(&2));
    }

    #[test]
    fn huge_external_weights_saturate() {
        let lex = lexicon(r#"{ "joie": { "a": 9223372036854775807, "b": 1 }, "peur": { "c": 1 } }"#);
        let scores = score("a b c", &lex);
        assert_eq!(scores.get("joie"), Some(&i64::MAX));
        assert_eq!(scores.get("peur"), Some(&1));

        let probs = crate::ai::probability::from_raw_scores(&scores);
        assert!(probs.values().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));
        assert!((probs.values().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs["joie"] > probs["peur"]);
    }

    #[test]
    fn huge_negative_weights_saturate() {
        let lex = lexicon(r#"{ "joie": { "a": -9223372036854775808, "b": -1 } }"#);
        assert_eq!(score("a b", &lex).get("joie"), Some(&i64::MIN));
    }

    #[test]
    fn repeated_word_counts_once() {
        let scores = score("peur peur peur", &Lexicon::default_lexicon());
        assert_eq!(scores.get("peur"), Some(&3));
    }
}
