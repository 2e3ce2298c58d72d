use crate::e2e::helpers;

use cinevoice_backend::domain::audio::encode;
use helpers::stub_provider::HALF_SECOND_PCM;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_synthesized_audio_as_wav(ctx: &TestContext) {
    let synth = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "You got this." }))
        .await
        .unwrap();
    synth.assert_status(StatusCode::OK);
    let audio = synth.body.as_ref().unwrap()["audio"].clone();

    let response = ctx
        .client
        .post("/api/tts/download", &json!({ "audio": audio }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav")
        .assert_header(
            "content-disposition",
            "attachment; filename=\"CineVoice_Motivator.wav\"",
        )
        .assert_header("x-duration-seconds", "0.500");

    let wav = &response.body_bytes;
    assert_eq!(wav.len(), 44 + HALF_SECOND_PCM.len());
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(wav, 4), 36 + HALF_SECOND_PCM.len() as u32);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(wav, 16), 16);
    assert_eq!(u16_at(wav, 20), 1);
    assert_eq!(u16_at(wav, 22), 1);
    assert_eq!(u32_at(wav, 24), 24000);
    assert_eq!(u32_at(wav, 28), 48000);
    assert_eq!(u16_at(wav, 32), 2);
    assert_eq!(u16_at(wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(wav, 40), HALF_SECOND_PCM.len() as u32);
    assert_eq!(&wav[44..], HALF_SECOND_PCM.as_slice());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_a_sanitized_custom_filename(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/download",
            &json!({ "audio": encode(&[0x00, 0x00, 0xFF, 0x7F]), "filename": "Morning Pep Talk" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header(
            "content-disposition",
            "attachment; filename=\"Morning_Pep_Talk.wav\"",
        );
    assert_eq!(response.body_bytes.len(), 48);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_audio(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/download", &json!({ "audio": "" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Audio cannot be empty");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_base64(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/download", &json!({ "audio": "not-valid-base64!!" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_audio_with_partial_frames(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/download", &json!({ "audio": encode(&[0x01, 0x02, 0x03]) }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_clips_longer_than_a_minute(ctx: &TestContext) {
    // 75 s of 24 kHz mono PCM, ~4.8 MB once base64-encoded
    let pcm = vec![0u8; 24000 * 2 * 75];

    let response = ctx
        .client
        .post("/api/tts/download", &json!({ "audio": encode(&pcm) }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-duration-seconds", "75.000");
    assert_eq!(response.body_bytes.len(), 44 + pcm.len());
    assert_eq!(u32_at(&response.body_bytes, 40), pcm.len() as u32);
}
