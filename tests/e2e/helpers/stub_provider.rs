use async_trait::async_trait;
use cinevoice_backend::domain::audio::{encode, samples_to_pcm, EncodedAudioPayload};
use cinevoice_backend::infrastructure::repositories::{
    ProviderAudio, ProviderError, SpeechRequest, TtsRepository,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Half a second of a quiet ramp at 24 kHz
pub static HALF_SECOND_PCM: Lazy<Vec<u8>> = Lazy::new(|| {
    let samples: Vec<i16> = (0..12000).map(|i| ((i % 200) as i16 - 100) * 10).collect();
    samples_to_pcm(&samples)
});

/// Stands in for the speech provider and records what it was asked
pub struct StubTtsRepository {
    response: Result<ProviderAudio, ProviderError>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl StubTtsRepository {
    pub fn returning(payload: EncodedAudioPayload) -> Self {
        Self {
            response: Ok(ProviderAudio {
                payload,
                mime_type: Some("audio/L16;codec=pcm;rate=24000".to_string()),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn half_second() -> Self {
        Self::returning(encode(&HALF_SECOND_PCM))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl TtsRepository for StubTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<ProviderAudio, ProviderError> {
        self.requests.lock().push(request.clone());
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
