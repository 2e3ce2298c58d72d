use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};
use serde::{Deserialize, Serialize};

use super::error::AudioError;

/// Standard alphabet; emits padding, accepts input with or without it and
/// ignores stray bits in the last symbol the way browser `atob` does.
const TRANSPORT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64 transport string carrying raw audio bytes, as returned by the
/// speech provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedAudioPayload(String);

impl EncodedAudioPayload {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode into raw audio bytes.
    pub fn decode(&self) -> Result<Vec<u8>, AudioError> {
        decode(self.as_str())
    }
}

/// Decode a base64 string into raw bytes.
///
/// # Errors
/// Returns [`AudioError::Decode`] for characters outside the standard
/// alphabet, a dangling single-character final group, or misplaced padding.
pub fn decode(payload: &str) -> Result<Vec<u8>, AudioError> {
    Ok(TRANSPORT.decode(payload)?)
}

pub fn encode(bytes: &[u8]) -> EncodedAudioPayload {
    EncodedAudioPayload(TRANSPORT.encode(bytes))
}
