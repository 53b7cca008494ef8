//! Category-keyed emotion lexicon.
//!
//! Loaded once at startup, either from the built-in reference table or from
//! an external JSON document of the shape
//! `{ "category": { "word or phrase": weight, ... }, ... }`.
//! Weight 1 = ordinary word, 2 = strong word, 3 = determinant word.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LexiconError;

/// Category scored when nothing in the text matches.
pub const BASELINE_CATEGORY: &str = "calme";

/// Per-category word weights.
pub type WordWeights = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    categories: BTreeMap<String, WordWeights>,
}

// ── Reference table ────────────────────────────────────────

#[rustfmt::skip]
const JOIE: &[(&str, i64)] = &[
    ("heureux", 2), ("heureuse", 2), ("content", 2), ("contente", 2), ("joie", 3),
    ("bonheur", 3), ("sourire", 2), ("rire", 2), ("fete", 2), ("amusement", 2),
    ("super", 1), ("genial", 2), ("top", 1), ("excellent", 2), ("adore", 2),
    ("plaisir", 2), ("ravi", 2), ("enjoue", 2), ("magnifique", 2), ("succes", 2),
    ("gagner", 2), ("victoire", 2), ("paradisiaque", 2), ("soleil", 1), ("beau", 1),
    ("belle", 1), ("merveilleux", 2), ("cool", 1), ("fun", 1), ("positif", 1),
    ("amour", 2), ("passion", 2), ("aime", 1), ("celebrer", 2), ("enthousiasme", 3),
];

#[rustfmt::skip]
const TRISTESSE: &[(&str, i64)] = &[
    ("triste", 3), ("tristesse", 3), ("pleurer", 3), ("larmes", 2), ("chagrin", 3),
    ("malheureux", 2), ("seul", 2), ("solitude", 2), ("abandon", 2), ("perdu", 2),
    ("deception", 2), ("decu", 2), ("gris", 1), ("sombre", 1), ("pluie", 1),
    ("nostalgie", 2), ("melancolie", 3), ("deprime", 3), ("desespoir", 3),
    ("douleur", 2), ("souffrance", 2), ("regret", 2), ("echec", 2), ("fatigue", 1),
    ("las", 1), ("vide", 2), ("coeur brise", 3), ("adieu", 2), ("mort", 2), ("deuil", 3),
];

#[rustfmt::skip]
const COLERE: &[(&str, i64)] = &[
    ("colere", 3), ("rage", 3), ("furieux", 3), ("enerve", 2), ("fache", 2),
    ("haine", 3), ("deteste", 2), ("insupportable", 2), ("cri", 2), ("hurler", 2),
    ("agressif", 2), ("violence", 3), ("bagarre", 2), ("guerre", 2), ("conflit", 2),
    ("tuer", 3), ("frapper", 2), ("idiot", 1), ("stupide", 1), ("merde", 2),
    ("putain", 2), ("vengeance", 3), ("jalousie", 2), ("frustration", 2),
    ("tension", 1), ("ennemi", 2), ("revolte", 2), ("brutal", 2),
];

#[rustfmt::skip]
const CALME: &[(&str, i64)] = &[
    ("calme", 3), ("paisible", 3), ("zen", 3), ("tranquille", 2), ("repos", 2),
    ("silence", 2), ("doux", 2), ("douceur", 2), ("lent", 1), ("lentement", 1),
    ("dormir", 2), ("reve", 2), ("nuit", 1), ("serein", 3), ("apaisant", 3),
    ("relax", 2), ("detente", 2), ("meditation", 3), ("nature", 1), ("foret", 1),
    ("riviere", 1), ("brise", 1), ("harmonie", 2), ("confort", 1), ("placide", 2),
];

#[rustfmt::skip]
const MYSTERE: &[(&str, i64)] = &[
    ("mystere", 3), ("etrange", 2), ("bizarre", 1), ("inconnu", 2), ("secret", 2),
    ("enigme", 2), ("suspect", 1), ("doute", 1), ("ombre", 2), ("cache", 1),
    ("brume", 2), ("brouillard", 2), ("fantome", 2), ("esprit", 1), ("magie", 1),
    ("sorcier", 1), ("cosmos", 1), ("univers", 1), ("profond", 1), ("lointain", 1),
    ("flou", 1), ("invisible", 2), ("suspense", 2), ("tension", 1), ("curieux", 1),
];

#[rustfmt::skip]
const ENERGIE: &[(&str, i64)] = &[
    ("energie", 3), ("force", 2), ("puissant", 2), ("fort", 1), ("rapide", 2),
    ("vite", 2), ("vitesse", 2), ("courir", 2), ("sauter", 1), ("danser", 2),
    ("bouger", 1), ("sport", 2), ("action", 2), ("explosif", 3), ("boom", 2),
    ("rythme", 2), ("intense", 2), ("electrique", 2), ("fou", 1), ("dingue", 1),
    ("frenesie", 3), ("adrenaline", 3), ("motivé", 2), ("determination", 2),
];

#[rustfmt::skip]
const PEUR: &[(&str, i64)] = &[
    ("peur", 3), ("crainte", 2), ("effraye", 3), ("terreur", 3), ("horreur", 3),
    ("panique", 3), ("danger", 2), ("mortel", 2), ("monstre", 2), ("cauchemar", 2),
    ("anxiete", 2), ("stress", 2), ("nervous", 1), ("fuir", 2), ("cri", 1),
    ("glace", 1), ("sombre", 1), ("effroi", 3), ("phobie", 2),
];

const DEFAULT_TABLE: &[(&str, &[(&str, i64)])] = &[
    ("joie", JOIE),
    ("tristesse", TRISTESSE),
    ("colere", COLERE),
    ("calme", CALME),
    ("mystere", MYSTERE),
    ("energie", ENERGIE),
    ("peur", PEUR),
];

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_lexicon()
    }
}

impl Lexicon {
    /// Build a lexicon from an already-parsed category table, verbatim.
    pub fn from_map(categories: BTreeMap<String, WordWeights>) -> Self {
        Self { categories }
    }

    /// The built-in reference lexicon.
    pub fn default_lexicon() -> Self {
        let categories = DEFAULT_TABLE
            .iter()
            .map(|(category, words)| {
                let words = words
                    .iter()
                    .map(|(word, weight)| (word.to_string(), *weight))
                    .collect();
                (category.to_string(), words)
            })
            .collect();
        Self { categories }
    }

    /// Read an external JSON lexicon. Content is accepted as-is: weight
    /// ranges and category names are not checked.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        if !path.exists() {
            return Err(LexiconError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LexiconError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the external lexicon at `path` if given, otherwise the built-in
    /// one. Any read/parse failure falls back to the built-in lexicon with a
    /// warning; this never fails.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default_lexicon();
        };
        match Self::from_path(path) {
            Ok(lexicon) => {
                tracing::info!(
                    "[Lexicon] Loaded {} categories from {}",
                    lexicon.len(),
                    path.display()
                );
                lexicon
            }
            Err(e) => {
                tracing::warn!("[Lexicon] {} — using built-in lexicon", e);
                Self::default_lexicon()
            }
        }
    }

    /// Write the lexicon as pretty JSON, e.g. to seed an override file.
    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| LexiconError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        let io_err = |source: std::io::Error| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, json).map_err(io_err)?;
        tracing::info!("[Lexicon] Saved {} categories to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn weight(&self, category: &str, word: &str) -> Option<i64> {
        self.categories.get(category)?.get(word).copied()
    }

    /// Iterate `(category, words)` in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordWeights)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }
}
