use super::voice::{VoiceProfile, DEFAULT_ACCENT};

/// Map a playback speed multiplier onto the pace wording the model follows.
pub fn speed_description(speed: f32) -> &'static str {
    if speed < 0.75 {
        "very slow"
    } else if speed < 0.9 {
        "slow"
    } else if speed <= 1.1 {
        "normal"
    } else if speed < 1.5 {
        "fast"
    } else {
        "very fast"
    }
}

/// Build the natural-language instruction sent to the provider.
pub fn build_prompt(
    text: &str,
    voice: &VoiceProfile,
    voice_style: &str,
    accent: &str,
    speed: f32,
) -> String {
    let mut instruction = format!("Adopt a {} voice style", voice_style.to_lowercase());
    if !accent.is_empty() && accent != DEFAULT_ACCENT {
        instruction.push_str(&format!(" with a {} accent", accent.to_lowercase()));
    }

    format!(
        "{}. {} Deliver the following text at a {} pace, with natural pauses for emphasis: \"{}\"",
        instruction,
        voice.tone_instruction,
        speed_description(speed),
        text
    )
}
