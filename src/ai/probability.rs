//! Softmax over raw category scores.

use std::collections::BTreeMap;

/// Probability per category, summing to 1.0.
pub type Probabilities = BTreeMap<String, f64>;

/// Max-shifted softmax. Empty in, empty out. If the exponentials are not
/// finite (infinite or NaN scores) the result is uniform over the categories.
pub fn to_probabilities<I, K>(scores: I) -> Probabilities
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let scores: Vec<(String, f64)> = scores.into_iter().map(|(k, v)| (k.into(), v)).collect();
    if scores.is_empty() {
        return Probabilities::new();
    }

    let max = scores
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);

    let exps: Vec<f64> = scores.iter().map(|(_, v)| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    if !sum.is_finite() || sum <= 0.0 || exps.iter().any(|e| !e.is_finite()) {
        tracing::debug!("[Mood] Non-finite softmax input — using uniform distribution");
        return uniform(scores.into_iter().map(|(k, _)| k));
    }

    scores
        .into_iter()
        .zip(exps)
        .map(|((k, _), e)| (k, e / sum))
        .collect()
}

/// Convenience for integer scores straight out of the scorer.
pub fn from_raw_scores(scores: &BTreeMap<String, i64>) -> Probabilities {
    to_probabilities(scores.iter().map(|(k, v)| (k.clone(), *v as f64)))
}

fn uniform(keys: impl Iterator<Item = String>) -> Probabilities {
    let keys: Vec<String> = keys.collect();
    let p = 1.0 / keys.len() as f64;
    keys.into_iter().map(|k| (k, p)).collect()
}
