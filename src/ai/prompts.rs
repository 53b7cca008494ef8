use super::analysis::EmotionOutput;

pub const SPECTROGRAM_STYLE: &str = "ambient sound, sustained tones, minimal rhythm";
pub const SAMPLE_RATE_TAG: &str = "24kHz";
pub const DURATION_TAG: &str = "10s";
pub const TEXTURE_TAG: &str = "clean texture";

/// Render the technical generation prompt for `user_text`.
///
/// Line breaks in the user text are flattened to spaces so the prompt stays
/// on one line.
pub fn format_prompt(user_text: &str, emo: &EmotionOutput) -> String {
    let safe_text = user_text.replace(['\r', '\n'], " ");
    let safe_text = safe_text.trim();
    let mood = emo.labels.join(", ");

    format!(
        "{}. spectrogram of {} {}. valence:{:.2}, arousal:{:.2}, {}, {}, {}",
        safe_text,
        mood,
        SPECTROGRAM_STYLE,
        emo.va.valence,
        emo.va.arousal,
        SAMPLE_RATE_TAG,
        DURATION_TAG,
        TEXTURE_TAG
    )
}

/// Prefix a prompt with the `[emotion:x]` tag used by downstream generators.
pub fn tag_prompt(emotion: &str, prompt: &str) -> String {
    format!("[emotion:{}] {}", emotion, prompt)
}
