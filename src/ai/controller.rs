//! Controller-facing pipeline: load the lexicon once, then turn each user
//! submission into an emotion analysis plus a tagged generation prompt.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::analysis::{EmotionAnalyzer, EmotionOutput};
use super::lexicon::Lexicon;
use super::prompts::{format_prompt, tag_prompt};
use crate::config::{load_config, MoodEngineConfig};

/// Everything produced for one user submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub emotion: EmotionOutput,
    /// Prompt without the emotion tag.
    pub base_prompt: String,
    /// `[emotion:x] <base_prompt>`, handed to generation backends.
    pub prompt: String,
}

/// Cheap to clone; all clones share the same read-only analyzer.
#[derive(Debug, Clone)]
pub struct MoodController {
    analyzer: Arc<EmotionAnalyzer>,
    fallback_label: String,
}

impl MoodController {
    /// Build from config, loading the lexicon (built-in or override) once.
    pub fn from_config(config: &MoodEngineConfig) -> Result<Self> {
        let path = config.resolve_lexicon_path();
        let lexicon = Lexicon::load(path.as_deref());
        Self::new(lexicon, config)
    }

    /// Read `mood_config.json` (defaults when absent) and build from it.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Self::from_config(&load_config(path))
    }

    /// Fails when the lexicon has no category, since every analysis would
    /// then collapse onto the baseline.
    pub fn new(lexicon: Lexicon, config: &MoodEngineConfig) -> Result<Self> {
        if lexicon.is_empty() {
            bail!("lexicon has no categories; refusing to build the mood pipeline");
        }
        if config.top_labels == 0 {
            bail!("top_labels must be at least 1");
        }
        tracing::info!("[Mood] Lexicon ready: {} categories", lexicon.len());

        let analyzer = EmotionAnalyzer::new(lexicon)
            .with_top_labels(config.top_labels)
            .with_baseline(config.baseline_category.clone());

        Ok(Self {
            analyzer: Arc::new(analyzer),
            fallback_label: config.fallback_label.clone(),
        })
    }

    pub fn analyzer(&self) -> &EmotionAnalyzer {
        &self.analyzer
    }

    pub fn analyze(&self, text: &str) -> EmotionOutput {
        self.analyzer.analyze(text)
    }

    pub fn process(&self, user_text: &str) -> PipelineOutput {
        let emotion = self.analyzer.analyze(user_text);
        let base_prompt = format_prompt(user_text, &emotion);
        let primary = emotion.primary().unwrap_or(self.fallback_label.as_str());
        let prompt = tag_prompt(primary, &base_prompt);

        tracing::debug!(
            "[Mood] primary={} valence={:.2} arousal={:.2}",
            primary,
            emotion.va.valence,
            emotion.va.arousal
        );

        PipelineOutput {
            emotion,
            base_prompt,
            prompt,
        }
    }
}
