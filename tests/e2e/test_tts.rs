use crate::e2e::helpers;

use cinevoice_backend::domain::audio::decode;
use cinevoice_backend::infrastructure::repositories::ProviderError;
use helpers::stub_provider::{StubTtsRepository, HALF_SECOND_PCM};
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

// ============================================================================
// Catalog
// ============================================================================

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_the_voice_catalog(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/voices").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let voices = body["voices"].as_array().unwrap();
    assert_eq!(voices.len(), 20);
    assert_eq!(voices[0]["id"], "real_man_voice");
    // Provider voice names stay server-side
    assert!(voices[0].get("provider_voice").is_none());

    assert_eq!(body["default_voice"], "real_man_voice");
    assert!(body["accents"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"] == "British"));
    assert!(!body["voice_styles"].as_array().unwrap().is_empty());
    assert!(!body["speeds"].as_array().unwrap().is_empty());
}

// ============================================================================
// Synthesis
// ============================================================================

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_with_format_metadata(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Never give up.\nNot today." }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["sample_rate"], 24000);
    assert_eq!(body["channels"], 1);
    assert_eq!(body["bits_per_sample"], 16);
    assert_eq!(body["mime_type"], "audio/L16;codec=pcm;rate=24000");
    assert_eq!(body["voice"], "real_man_voice");
    assert_eq!(body["provider_voice"], "Charon");
    assert_eq!(body["char_count"], "Never give up.\nNot today.".len());
    assert!((body["duration_seconds"].as_f64().unwrap() - 0.5).abs() < 1e-9);

    // Payload is passed through untouched
    let audio = body["audio"].as_str().unwrap();
    assert_eq!(decode(audio).unwrap(), *HALF_SECOND_PCM);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_delivery_options_in_the_prompt(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Rise and shine.",
                "voice": "motivational_female",
                "voice_style": "Calm",
                "accent": "British",
                "speed": 0.8
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let requests = ctx.provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].provider_voice, "Kore");
    assert!(requests[0].prompt.contains("calm voice style"));
    assert!(requests[0].prompt.contains("british accent"));
    assert!(requests[0].prompt.contains("slow pace"));
    assert!(requests[0].prompt.contains("\"Rise and shine.\""));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_for_unknown_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Keep going.", "voice": "no_such_voice" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["voice"], "motivational_male");
    assert_eq!(body["provider_voice"], "Charon");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": " \n\t " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Text cannot be empty");
    assert!(ctx.provider.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_the_limit(ctx: &TestContext) {
    let text = "a".repeat(ctx.config.max_text_chars + 1);

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": text }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("characters or less");
    assert!(ctx.provider.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_positive_speed(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Go.", "speed": 0 }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Speed must be a positive number");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_text_field(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "voice": "calm_female" }))
        .await
        .unwrap();

    assert!(response.status.is_client_error());
}

// ============================================================================
// Provider failures
// ============================================================================

#[tokio::test]
async fn it_should_map_blocked_content_to_422() {
    let ctx = TestContext::with_provider(StubTtsRepository::failing(ProviderError::Blocked(
        "SAFETY".to_string(),
    )))
    .await;

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("blocked due to safety filters");
}

#[tokio::test]
async fn it_should_map_rate_limits_to_429() {
    let ctx = TestContext::with_provider(StubTtsRepository::failing(
        ProviderError::RateLimited("quota".to_string()),
    ))
    .await;

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::TOO_MANY_REQUESTS)
        .assert_error_message("exceeded the request limit");
}

#[tokio::test]
async fn it_should_map_missing_audio_to_502() {
    let ctx = TestContext::with_provider(StubTtsRepository::failing(ProviderError::NoAudio)).await;

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("No audio data was returned");
}

#[tokio::test]
async fn it_should_reject_provider_audio_with_partial_frames() {
    let ctx = TestContext::with_provider(StubTtsRepository::returning(
        cinevoice_backend::domain::audio::encode(&[0x01, 0x02, 0x03]),
    ))
    .await;

    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
}
