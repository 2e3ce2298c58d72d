use serde::{Deserialize, Serialize};

use super::voice::{CatalogEntry, SpeedPreset, VoiceProfile};
use crate::domain::audio::EncodedAudioPayload;

/// Request for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

/// Response for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub audio: EncodedAudioPayload,
    pub mime_type: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub voice: String,
    pub provider_voice: String,
    pub char_count: usize,
    pub duration_seconds: f64,
}

/// Request for POST /api/tts/download
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub audio: EncodedAudioPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Response for GET /api/tts/voices
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub voices: &'static [VoiceProfile],
    pub accents: &'static [CatalogEntry],
    pub voice_styles: &'static [CatalogEntry],
    pub speeds: &'static [SpeedPreset],
    pub default_voice: &'static str,
}
