//! One-shot emotion analysis: score → softmax → valence/arousal.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::lexicon::{Lexicon, BASELINE_CATEGORY};
use super::mood::{CoordinateTable, MoodPoint};
use super::probability::{from_raw_scores, Probabilities};
use super::scorer::{score_with_baseline, RawScores};

/// Default number of top categories kept in [`EmotionOutput::labels`].
pub const DEFAULT_TOP_LABELS: usize = 2;

/// Result of analyzing one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionOutput {
    /// Top categories by descending probability, ties alphabetical.
    pub labels: Vec<String>,
    /// Normalized scores (sum = 1).
    pub probs: Probabilities,
    /// Probability-weighted valence/arousal.
    pub va: MoodPoint,
    /// Raw scores, for debugging.
    pub raw_scores: RawScores,
}

impl EmotionOutput {
    pub fn primary(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// Read-only analysis context built once at startup and shared by every call.
#[derive(Debug, Clone)]
pub struct EmotionAnalyzer {
    lexicon: Lexicon,
    coordinates: CoordinateTable,
    top_labels: usize,
    baseline: String,
}

impl EmotionAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            coordinates: CoordinateTable::default(),
            top_labels: DEFAULT_TOP_LABELS,
            baseline: BASELINE_CATEGORY.to_string(),
        }
    }

    pub fn with_coordinates(mut self, coordinates: CoordinateTable) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn with_top_labels(mut self, top_labels: usize) -> Self {
        self.top_labels = top_labels;
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze(&self, text: &str) -> EmotionOutput {
        run(
            text,
            &self.lexicon,
            &self.coordinates,
            self.top_labels,
            &self.baseline,
        )
    }
}

/// Analyze `text` with the reference coordinate table and default settings.
pub fn analyze(text: &str, lexicon: &Lexicon) -> EmotionOutput {
    run(
        text,
        lexicon,
        &CoordinateTable::default(),
        DEFAULT_TOP_LABELS,
        BASELINE_CATEGORY,
    )
}

fn run(
    text: &str,
    lexicon: &Lexicon,
    coordinates: &CoordinateTable,
    top: usize,
    baseline: &str,
) -> EmotionOutput {
    let raw_scores = score_with_baseline(text, lexicon, baseline);
    let probs = from_raw_scores(&raw_scores);
    let va = coordinates.aggregate(&probs);
    let labels = top_labels(&probs, top);

    EmotionOutput {
        labels,
        probs,
        va,
        raw_scores,
    }
}

/// The `n` most probable categories, highest first, ties broken alphabetically.
pub fn top_labels(probs: &Probabilities, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, &f64)> = probs.iter().collect();
    ranked.sort_by(|(ka, pa), (kb, pb)| {
        pb.partial_cmp(pa)
            .unwrap_or(Ordering::Equal)
            .then_with(|| ka.cmp(kb))
    });
    ranked.into_iter().take(n).map(|(k, _)| k.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_alphabetically() {
        let probs = Probabilities::from([
            ("peur".to_string(), 0.4),
            ("joie".to_string(), 0.4),
            ("calme".to_string(), 0.2),
        ]);
        assert_eq!(top_labels(&probs, 2), vec!["joie", "peur"]);
        assert_eq!(top_labels(&probs, 5), vec!["joie", "peur", "calme"]);
        assert!(top_labels(&probs, 0).is_empty());
    }

    #[test]
    fn higher_probability_comes_first() {
        let probs = Probabilities::from([("calme".to_string(), 0.1), ("tristesse".to_string(), 0.9)]);
        assert_eq!(top_labels(&probs, 1), vec!["tristesse"]);
    }

    #[test]
    fn analyzer_respects_top_label_count() {
        let analyzer = EmotionAnalyzer::new(Lexicon::default_lexicon()).with_top_labels(1);
        let out = analyzer.analyze("une nuit sombre et calme");
        assert_eq!(out.labels.len(), 1);
        assert_eq!(out.primary(), Some("calme"));
    }

    #[test]
    fn analyzer_uses_custom_baseline() {
        let analyzer = EmotionAnalyzer::new(Lexicon::default_lexicon()).with_baseline("mystere");
        let out = analyzer.analyze("rien a signaler");
        assert_eq!(out.labels, vec!["mystere"]);
        assert!((out.va.valence - 0.45).abs() < 1e-9);
    }

    #[test]
    fn output_serializes_to_json() {
        let out = analyze("peur", &Lexicon::default_lexicon());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["labels"][0], "peur");
        assert_eq!(json["raw_scores"]["peur"], 3);
        assert!(json["va"]["valence"].is_number());
    }
}
