pub mod ai;
pub mod config;
pub mod error;

pub use ai::{analyze, format_prompt, EmotionOutput, Lexicon, MoodController, PipelineOutput};
pub use error::{ConfigError, LexiconError};

use std::path::Path;

/// Install the global `tracing` subscriber, honouring `RUST_LOG` (default `info`).
/// Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the lexicon once at startup: `path` if usable, otherwise the built-in table.
pub fn load_lexicon(path: Option<&Path>) -> Lexicon {
    Lexicon::load(path)
}
