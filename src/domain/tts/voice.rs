use serde::Serialize;

/// Persona used when a request names an unknown voice
pub const FALLBACK_VOICE_ID: &str = "motivational_male";

/// Persona used when a request names no voice at all
pub const DEFAULT_VOICE_ID: &str = "real_man_voice";

pub const DEFAULT_ACCENT: &str = "Default";
pub const DEFAULT_VOICE_STYLE: &str = "Motivational";
pub const DEFAULT_SPEED: f32 = 1.0;

/// A selectable voice persona and how it maps onto the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceProfile {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub provider_voice: &'static str,
    #[serde(skip)]
    pub tone_instruction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedPreset {
    pub value: f32,
    pub name: &'static str,
}

pub const VOICES: &[VoiceProfile] = &[
    VoiceProfile {
        id: "real_man_voice",
        name: "Real Man Voice (Deep, warm, confident)",
        provider_voice: "Charon",
        tone_instruction: "Adopt a deep, warm, and confident tone with slight breathiness and natural pacing.",
    },
    VoiceProfile {
        id: "motivational_male",
        name: "Motivational Male (Deep, confident)",
        provider_voice: "Charon",
        tone_instruction: "The tone should be deep and confident.",
    },
    VoiceProfile {
        id: "motivational_female",
        name: "Motivational Female (Energetic, uplifting)",
        provider_voice: "Kore",
        tone_instruction: "The tone should be energetic and uplifting.",
    },
    VoiceProfile {
        id: "calm_female",
        name: "Calm Female (Soft, peaceful)",
        provider_voice: "Kore",
        tone_instruction: "The tone should be soft and peaceful.",
    },
    VoiceProfile {
        id: "narrator_male",
        name: "Narrator Male (Clear, balanced)",
        provider_voice: "Charon",
        tone_instruction: "The tone should be clear and balanced.",
    },
    VoiceProfile {
        id: "cinematic_male",
        name: "Cinematic Male (Dramatic, intense)",
        provider_voice: "Charon",
        tone_instruction: "The tone should be dramatic and intense.",
    },
    VoiceProfile {
        id: "cinematic_female",
        name: "Cinematic Female (Epic, emotional)",
        provider_voice: "Kore",
        tone_instruction: "The tone should be epic and emotional.",
    },
    VoiceProfile {
        id: "storyteller_male",
        name: "Storyteller Male (Warm, expressive)",
        provider_voice: "Fenrir",
        tone_instruction: "The tone should be warm and expressive.",
    },
    VoiceProfile {
        id: "storyteller_female",
        name: "Storyteller Female (Comforting, vivid)",
        provider_voice: "Kore",
        tone_instruction: "The tone should be comforting and vivid.",
    },
    VoiceProfile {
        id: "corporate_male",
        name: "Corporate Male (Neutral, confident)",
        provider_voice: "Charon",
        tone_instruction: "The tone should be neutral and confident.",
    },
    VoiceProfile {
        id: "corporate_female",
        name: "Corporate Female (Professional, calm)",
        provider_voice: "Kore",
        tone_instruction: "The tone should be professional and calm.",
    },
    VoiceProfile {
        id: "robotic_male",
        name: "Robotic Male (Slightly synthetic)",
        provider_voice: "Puck",
        tone_instruction: "Adopt a slightly synthetic, robotic male voice.",
    },
    VoiceProfile {
        id: "robotic_female",
        name: "Robotic Female (Digital, sleek)",
        provider_voice: "Kore",
        tone_instruction: "Adopt a digital, sleek, robotic female voice.",
    },
    VoiceProfile {
        id: "standard_male",
        name: "Man",
        provider_voice: "Charon",
        tone_instruction: "Adopt a standard, neutral male voice.",
    },
    VoiceProfile {
        id: "standard_female",
        name: "Woman",
        provider_voice: "Kore",
        tone_instruction: "Adopt a standard, neutral female voice.",
    },
    VoiceProfile {
        id: "baby_boy",
        name: "Baby Boy (Playful, high-pitched)",
        provider_voice: "Kore",
        tone_instruction: "Adopt a high-pitched, playful, and innocent young boy's voice, simulating a baby or toddler's tone.",
    },
    VoiceProfile {
        id: "baby_girl",
        name: "Baby Girl (Playful, high-pitched)",
        provider_voice: "Kore",
        tone_instruction: "Adopt a high-pitched, playful, and innocent young girl's voice, simulating a baby or toddler's tone.",
    },
    VoiceProfile {
        id: "spooky_ethereal",
        name: "Spooky / ethereal (soft, echo-like, cinematic female voice for horror or mystery)",
        provider_voice: "Kore",
        tone_instruction: "Adopt a soft, ethereal, and slightly echoing cinematic female voice. The tone should be spooky and suitable for horror or mystery, with a haunting quality.",
    },
    VoiceProfile {
        id: "glitched_ghost",
        name: "Glitched / robotic ghost (digital distortion, eerie whisper)",
        provider_voice: "Puck",
        tone_instruction: "Adopt a digitally distorted, eerie whispering voice, like a glitched robotic ghost. The tone should be unsettling and synthetic.",
    },
    VoiceProfile {
        id: "spirit_narrator",
        name: "Spirit narrator (calm, distant, floating voice for storytelling)",
        provider_voice: "Kore",
        tone_instruction: "Adopt a calm, distant, and floating narrative voice, like a spirit telling a story. The tone should be serene yet otherworldly.",
    },
];

pub const ACCENTS: &[CatalogEntry] = &[
    CatalogEntry { id: "Default", name: "Default (American)" },
    CatalogEntry { id: "British", name: "British" },
    CatalogEntry { id: "Australian", name: "Australian" },
    CatalogEntry { id: "Scottish", name: "Scottish" },
    CatalogEntry { id: "Bengali", name: "Bengali" },
];

pub const VOICE_STYLES: &[CatalogEntry] = &[
    CatalogEntry { id: "Motivational", name: "Motivational" },
    CatalogEntry { id: "Documentary", name: "Documentary" },
    CatalogEntry { id: "Emotional", name: "Emotional" },
    CatalogEntry { id: "Horror", name: "Horror" },
    CatalogEntry { id: "Calm", name: "Calm" },
    CatalogEntry { id: "Corporate", name: "Corporate" },
];

pub const SPEEDS: &[SpeedPreset] = &[
    SpeedPreset { value: 0.75, name: "Slower (Calm/Emotional)" },
    SpeedPreset { value: 1.0, name: "Normal (Default)" },
    SpeedPreset { value: 1.25, name: "Faster (Motivational)" },
    SpeedPreset { value: 1.5, name: "Very Fast (Energetic)" },
];

/// Look up a persona by id, falling back to [`FALLBACK_VOICE_ID`].
pub fn resolve_voice(voice_id: &str) -> &'static VoiceProfile {
    find_voice(voice_id).unwrap_or_else(|| {
        tracing::warn!(voice = voice_id, "Unknown voice, using fallback persona");
        fallback_voice()
    })
}

pub fn find_voice(voice_id: &str) -> Option<&'static VoiceProfile> {
    VOICES.iter().find(|v| v.id == voice_id)
}

fn fallback_voice() -> &'static VoiceProfile {
    // VOICES always contains the fallback id; see test_fallback_voice_exists
    &VOICES[1]
}
