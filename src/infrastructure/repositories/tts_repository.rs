use crate::domain::audio::EncodedAudioPayload;
use async_trait::async_trait;

/// What the provider is asked to speak, already resolved to provider terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Natural-language prompt embedding the text and delivery instructions
    pub prompt: String,
    /// Provider-side prebuilt voice name
    pub provider_voice: String,
}

#[derive(Debug, Clone)]
pub struct ProviderAudio {
    pub payload: EncodedAudioPayload,
    /// MIME type declared by the provider, if any (e.g. `audio/L16;codec=pcm;rate=24000`)
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider rejected the API key: {0}")]
    InvalidApiKey(String),
    #[error("provider rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("provider rejected the input: {0}")]
    InvalidInput(String),
    #[error("provider blocked the request: {0}")]
    Blocked(String),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider returned no audio")]
    NoAudio,
    #[error("provider request failed: {0}")]
    Transport(String),
}

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (Gemini, or anything returning
/// base64-encoded 24 kHz mono PCM).
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize the prompt with the given provider voice
    ///
    /// Returns the provider's base64 audio payload, untouched
    ///
    /// # Errors
    /// Returns a classified [`ProviderError`] if synthesis fails
    async fn synthesize(&self, request: &SpeechRequest) -> Result<ProviderAudio, ProviderError>;

    /// Short provider name for logs and readiness checks
    fn name(&self) -> &'static str;
}
