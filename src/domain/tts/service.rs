use super::error::TtsServiceError;
use super::prompt::build_prompt;
use super::voice::{
    resolve_voice, VoiceProfile, DEFAULT_ACCENT, DEFAULT_SPEED, DEFAULT_VOICE_ID,
    DEFAULT_VOICE_STYLE,
};
use crate::domain::audio::{
    create_wav_blob, decode_audio_data, AudioError, AudioRenderBuffer, EncodedAudioPayload,
    PcmFormat, WavFile, PROVIDER_FORMAT, PROVIDER_MIME_TYPE,
};
use crate::infrastructure::repositories::{SpeechRequest, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Delivery options for a synthesis request. `None` fields take the catalog
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct SpeechOptions {
    pub voice: Option<String>,
    pub voice_style: Option<String>,
    pub accent: Option<String>,
    pub speed: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub payload: EncodedAudioPayload,
    pub voice: &'static VoiceProfile,
    pub format: PcmFormat,
    pub mime_type: String,
    pub char_count: usize,
    pub duration: Duration,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    max_text_chars: usize,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, max_text_chars: usize) -> Self {
        Self {
            tts_repo,
            max_text_chars,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech
    ///
    /// This operation:
    /// - Validates text length and speed
    /// - Resolves the voice persona and builds the provider prompt
    /// - Calls the provider and verifies the returned audio decodes as PCM
    ///
    /// Returns the provider payload along with format metadata
    async fn synthesize(
        &self,
        text: String,
        options: SpeechOptions,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: String,
        options: SpeechOptions,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        // 1. Validate; the script goes to the provider as written
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }
        let char_count = text.chars().count();
        if char_count > self.max_text_chars {
            return Err(TtsServiceError::TooLarge(format!(
                "Text must be {} characters or less",
                self.max_text_chars
            )));
        }

        let speed = options.speed.unwrap_or(DEFAULT_SPEED);
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TtsServiceError::Invalid(
                "Speed must be a positive number".to_string(),
            ));
        }

        // 2. Resolve persona and build the prompt
        let voice = resolve_voice(options.voice.as_deref().unwrap_or(DEFAULT_VOICE_ID));
        let voice_style = options.voice_style.as_deref().unwrap_or(DEFAULT_VOICE_STYLE);
        let accent = options.accent.as_deref().unwrap_or(DEFAULT_ACCENT);
        let prompt = build_prompt(&text, voice, voice_style, accent, speed);

        tracing::info!(
            voice = voice.id,
            provider_voice = voice.provider_voice,
            voice_style = voice_style,
            accent = accent,
            speed = speed,
            char_count = char_count,
            "TTS synthesis request"
        );

        // 3. Call the provider
        let audio = self
            .tts_repo
            .synthesize(&SpeechRequest {
                prompt,
                provider_voice: voice.provider_voice.to_string(),
            })
            .await?;

        if let Some(rate) = audio.mime_type.as_deref().and_then(declared_sample_rate) {
            if rate != PROVIDER_FORMAT.sample_rate {
                tracing::warn!(
                    declared_rate = rate,
                    assumed_rate = PROVIDER_FORMAT.sample_rate,
                    "Provider declared an unexpected sample rate"
                );
            }
        }

        // 4. Verify the payload decodes before handing it out
        let buffer = self.render_buffer(&audio.payload)?;

        tracing::info!(
            provider = self.tts_repo.name(),
            frames = buffer.frame_count(),
            duration_ms = buffer.duration().as_millis(),
            "TTS audio verified"
        );

        Ok(TtsSynthesisResult {
            payload: audio.payload,
            voice,
            format: PROVIDER_FORMAT,
            mime_type: audio
                .mime_type
                .unwrap_or_else(|| PROVIDER_MIME_TYPE.to_string()),
            char_count,
            duration: buffer.duration(),
        })
    }
}

impl TtsService {
    /// Decode a provider payload into a playable buffer.
    pub fn render_buffer(
        &self,
        payload: &EncodedAudioPayload,
    ) -> Result<AudioRenderBuffer, AudioError> {
        let bytes = payload.decode()?;
        decode_audio_data(&bytes, PROVIDER_FORMAT.sample_rate, PROVIDER_FORMAT.channels)
    }

    /// Wrap a provider payload in a WAV container for download.
    pub fn render_wav(&self, payload: &EncodedAudioPayload) -> Result<WavFile, AudioError> {
        let bytes = payload.decode()?;
        let block_align = PROVIDER_FORMAT.block_align()? as usize;
        if bytes.len() % block_align != 0 {
            return Err(AudioError::MalformedAudio {
                byte_len: bytes.len(),
                frame_size: block_align,
            });
        }

        let wav = create_wav_blob(&bytes, PROVIDER_FORMAT)?;
        tracing::debug!(
            pcm_bytes = bytes.len(),
            wav_bytes = wav.len(),
            "WAV container built"
        );
        Ok(wav)
    }
}

/// Extract `rate=NNNN` from a MIME type like `audio/L16;codec=pcm;rate=24000`
fn declared_sample_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse().ok())
}
