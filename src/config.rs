//! Shared config utilities for loading/saving JSON config files
//! and resolving the lexicon override path from fields or environment variables.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Read `path` as JSON into `T`. A missing, unreadable or malformed file
/// yields `T::default()`; only the latter two are worth a warning.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("[{}] {} absent, using defaults", label, path.display());
            return T::default();
        }
        Err(e) => {
            tracing::warn!("[{}] Cannot read {}: {}, using defaults", label, path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => {
            tracing::info!("[{}] Loaded {}", label, path.display());
            config
        }
        Err(e) => {
            tracing::warn!("[{}] Bad JSON in {}: {}, using defaults", label, path.display(), e);
            T::default()
        }
    }
}

/// Write `config` as pretty JSON, creating missing parent directories.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, json).map_err(io_err)?;
    tracing::info!("[{}] Saved {}", label, path.display());
    Ok(())
}

/// Resolve the lexicon path: check the direct `lexicon_path` field first,
/// then fall back to reading the environment variable named in `lexicon_path_env`.
pub fn resolve_lexicon_path(
    lexicon_path: &Option<PathBuf>,
    lexicon_path_env: &Option<String>,
) -> Option<PathBuf> {
    if let Some(ref path) = lexicon_path {
        if !path.as_os_str().is_empty() {
            return Some(path.clone());
        }
    }
    if let Some(ref env_var) = lexicon_path_env {
        if let Ok(path) = std::env::var(env_var) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

// ── Engine Config ──────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEngineConfig {
    /// External JSON lexicon replacing the built-in table.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Environment variable consulted when `lexicon_path` is unset.
    #[serde(default = "default_lexicon_path_env")]
    pub lexicon_path_env: Option<String>,
    /// How many categories end up in `EmotionOutput::labels`.
    #[serde(default = "default_top_labels")]
    pub top_labels: usize,
    /// Category scored when nothing in the text matches.
    #[serde(default = "default_baseline_category")]
    pub baseline_category: String,
    /// Tag used in the final prompt when the analysis has no label.
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

impl MoodEngineConfig {
    pub fn resolve_lexicon_path(&self) -> Option<PathBuf> {
        resolve_lexicon_path(&self.lexicon_path, &self.lexicon_path_env)
    }
}

fn default_lexicon_path_env() -> Option<String> {
    Some("MOOD_LEXICON_PATH".to_string())
}
fn default_top_labels() -> usize {
    2
}
fn default_baseline_category() -> String {
    crate::ai::lexicon::BASELINE_CATEGORY.to_string()
}
fn default_fallback_label() -> String {
    "neutre".to_string()
}

impl Default for MoodEngineConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            lexicon_path_env: default_lexicon_path_env(),
            top_labels: default_top_labels(),
            baseline_category: default_baseline_category(),
            fallback_label: default_fallback_label(),
        }
    }
}

/// Load config from a JSON file. Falls back to defaults if file is missing or invalid.
pub fn load_config(path: &Path) -> MoodEngineConfig {
    load_json_config(path, "Config")
}

/// Save config to a JSON file.
pub fn save_config(path: &Path, config: &MoodEngineConfig) -> Result<(), ConfigError> {
    save_json_config(path, config, "Config")
}
