pub mod analysis;
pub mod controller;
pub mod lexicon;
pub mod mood;
pub mod normalize;
pub mod probability;
pub mod prompts;
pub mod scorer;


pub use analysis::{analyze, EmotionAnalyzer, EmotionOutput};
pub use controller::{MoodController, PipelineOutput};
pub use lexicon::Lexicon;
pub use mood::{CoordinateTable, MoodPoint};
pub use prompts::format_prompt;
