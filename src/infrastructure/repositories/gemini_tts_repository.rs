use super::tts_repository::{ProviderAudio, ProviderError, SpeechRequest, TtsRepository};
use crate::domain::audio::EncodedAudioPayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Finish reasons that mean the model refused to produce audio
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Gemini TTS implementation of TTS repository
pub struct GeminiTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiTtsRepository {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }

    fn build_body<'a>(request: &'a SpeechRequest) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &request.provider_voice,
                        },
                    },
                },
            },
        }
    }
}

/// Map a non-success HTTP response onto a provider error.
///
/// The message is checked before the status because Gemini reports a bad API
/// key as a plain 400.
fn classify_failure(status: u16, message: &str) -> ProviderError {
    let lowered = message.to_lowercase();
    let detail = if message.is_empty() {
        format!("HTTP {}", status)
    } else {
        message.to_string()
    };

    if lowered.contains("api key not valid") || status == 401 || status == 403 {
        ProviderError::InvalidApiKey(detail)
    } else if status == 429 || lowered.contains("quota") || lowered.contains("rate limit") {
        ProviderError::RateLimited(detail)
    } else if lowered.contains("safety") || lowered.contains("blocked") {
        ProviderError::Blocked(detail)
    } else if status == 400 {
        ProviderError::InvalidInput(detail)
    } else if status >= 500 {
        ProviderError::Unavailable(detail)
    } else {
        ProviderError::Transport(detail)
    }
}

/// Pull the first inline audio part out of a successful response.
fn extract_audio(response: GenerateContentResponse) -> Result<ProviderAudio, ProviderError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::NoAudio)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if BLOCKING_FINISH_REASONS.contains(&reason) {
            return Err(ProviderError::Blocked(reason.to_string()));
        }
    }

    let inline = candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.inline_data)
        .filter(|d| !d.data.is_empty())
        .ok_or(ProviderError::NoAudio)?;

    Ok(ProviderAudio {
        payload: EncodedAudioPayload::new(inline.data),
        mime_type: inline.mime_type,
    })
}

#[async_trait]
impl TtsRepository for GeminiTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<ProviderAudio, ProviderError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            voice = %request.provider_voice,
            prompt_length = request.prompt.len(),
            "Calling Gemini TTS API"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    voice = %request.provider_voice,
                    "Gemini TTS request failed"
                );
                ProviderError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            let error = classify_failure(status.as_u16(), &message);
            tracing::error!(
                status = status.as_u16(),
                error = %error,
                "Gemini TTS API returned an error"
            );
            return Err(error);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Gemini TTS response");
            ProviderError::Transport(format!("invalid response body: {}", e))
        })?;

        let audio = extract_audio(body)?;

        tracing::info!(
            provider = "gemini",
            model = %self.model,
            voice = %request.provider_voice,
            latency_ms = start_time.elapsed().as_millis(),
            payload_length = audio.payload.as_str().len(),
            mime_type = audio.mime_type.as_deref().unwrap_or("unknown"),
            "TTS synthesis completed"
        );

        Ok(audio)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
