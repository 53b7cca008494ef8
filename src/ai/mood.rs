//! Valence/arousal aggregation over a category distribution.
//!
//! Valence: 0.0 (unpleasant) to 1.0 (pleasant).
//! Arousal: 0.0 (calm, passive) to 1.0 (excited, active).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::probability::Probabilities;

/// A point in valence/arousal space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub valence: f64,
    pub arousal: f64,
}

impl MoodPoint {
    pub const NEUTRAL: MoodPoint = MoodPoint {
        valence: 0.5,
        arousal: 0.5,
    };

    pub const fn new(valence: f64, arousal: f64) -> Self {
        Self { valence, arousal }
    }
}

impl From<MoodPoint> for (f64, f64) {
    fn from(p: MoodPoint) -> Self {
        (p.valence, p.arousal)
    }
}

const REFERENCE_TABLE: &[(&str, MoodPoint)] = &[
    ("joie", MoodPoint::new(0.90, 0.70)),      // very positive, fairly active
    ("tristesse", MoodPoint::new(0.15, 0.20)), // very negative, very passive
    ("colere", MoodPoint::new(0.10, 0.90)),    // very negative, very active
    ("calme", MoodPoint::new(0.60, 0.10)),     // slightly positive, very passive
    ("mystere", MoodPoint::new(0.45, 0.50)),   // neutral, mid activity
    ("energie", MoodPoint::new(0.75, 0.95)),   // positive, very active
    ("peur", MoodPoint::new(0.20, 0.80)),      // negative, very active
];

/// Fixed category → (valence, arousal) mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable {
    points: BTreeMap<String, MoodPoint>,
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self {
            points: REFERENCE_TABLE
                .iter()
                .map(|(k, p)| (k.to_string(), *p))
                .collect(),
        }
    }
}

impl CoordinateTable {
    /// Coordinates for `category`; unknown categories sit at the neutral midpoint.
    pub fn lookup(&self, category: &str) -> MoodPoint {
        self.points
            .get(category)
            .copied()
            .unwrap_or(MoodPoint::NEUTRAL)
    }

    /// Probability-weighted mean of the category coordinates.
    ///
    /// Empty input yields the neutral midpoint.
    pub fn aggregate(&self, probs: &Probabilities) -> MoodPoint {
        if probs.is_empty() {
            return MoodPoint::NEUTRAL;
        }
        let (valence, arousal) = probs.iter().fold((0.0, 0.0), |(v, a), (emo, p)| {
            let point = self.lookup(emo);
            (v + point.valence * p, a + point.arousal * p)
        });
        MoodPoint { valence, arousal }
    }
}

/// Aggregate against the reference table.
pub fn aggregate(probs: &Probabilities) -> MoodPoint {
    CoordinateTable::default().aggregate(probs)
}
