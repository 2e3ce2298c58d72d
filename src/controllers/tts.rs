use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        audio::{PROVIDER_FORMAT, WAV_MIME_TYPE},
        tts::{
            voice::{ACCENTS, DEFAULT_VOICE_ID, SPEEDS, VOICES, VOICE_STYLES},
            CatalogResponse, DownloadRequest, SpeechOptions, SynthesizeRequest,
            SynthesizeResponse, TtsService, TtsServiceApi,
        },
    },
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
    download_filename: String,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, download_filename: String) -> Self {
        Self {
            tts_service,
            download_filename,
        }
    }

    /// GET /api/tts/voices - List voices, accents, styles and speeds
    pub async fn voices() -> Json<CatalogResponse> {
        Json(CatalogResponse {
            voices: VOICES,
            accents: ACCENTS,
            voice_styles: VOICE_STYLES,
            speeds: SPEEDS,
            default_voice: DEFAULT_VOICE_ID,
        })
    }

    /// POST /api/tts/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        let options = SpeechOptions {
            voice: request.voice,
            voice_style: request.voice_style,
            accent: request.accent,
            speed: request.speed,
        };

        let result = controller
            .tts_service
            .synthesize(request.text, options)
            .await
            .map_err(AppError::from)?;

        Ok(Json(SynthesizeResponse {
            audio: result.payload,
            mime_type: result.mime_type,
            sample_rate: result.format.sample_rate,
            channels: result.format.channels,
            bits_per_sample: result.format.bits_per_sample,
            voice: result.voice.id.to_string(),
            provider_voice: result.voice.provider_voice.to_string(),
            char_count: result.char_count,
            duration_seconds: result.duration.as_secs_f64(),
        }))
    }

    /// POST /api/tts/download - Wrap synthesized audio in a WAV file
    pub async fn download(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<DownloadRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if request.audio.is_empty() {
            return Err(AppError::BadRequest("Audio cannot be empty".to_string()));
        }

        let wav = controller.tts_service.render_wav(&request.audio)?;
        let duration_seconds = wav.data().len() as f64
            / (PROVIDER_FORMAT.sample_rate as f64 * PROVIDER_FORMAT.channels as f64 * 2.0);

        let filename = request
            .filename
            .as_deref()
            .map(sanitize_filename)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| controller.download_filename.clone());

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(WAV_MIME_TYPE));
        headers.insert(
            header::CONTENT_DISPOSITION,
            header_value(format!("attachment; filename=\"{}\"", filename))?,
        );
        headers.insert(
            "X-Duration-Seconds",
            header_value(format!("{:.3}", duration_seconds))?,
        );

        tracing::info!(
            filename = %filename,
            wav_bytes = wav.len(),
            "WAV download prepared"
        );

        Ok((StatusCode::OK, headers, Body::from(wav.into_bytes())))
    }
}

fn header_value(value: String) -> AppResult<HeaderValue> {
    HeaderValue::from_str(&value)
        .map_err(|e| AppError::Internal(format!("invalid header value: {}", e)))
}

/// Keep a download name to safe ASCII and force the `.wav` extension
fn sanitize_filename(name: &str) -> String {
    let stem = name.trim();
    let stem = stem
        .strip_suffix(".wav")
        .or_else(|| stem.strip_suffix(".WAV"))
        .unwrap_or(stem);

    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');

    if cleaned.is_empty() {
        String::new()
    } else {
        format!("{}.wav", cleaned)
    }
}
