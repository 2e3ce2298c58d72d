use super::error::AudioError;

pub const WAV_HEADER_LEN: usize = 44;
pub const WAV_MIME_TYPE: &str = "audio/wav";

const FMT_CHUNK_SIZE: u32 = 16;
const FORMAT_PCM: u16 = 1;

/// Layout of uncompressed PCM data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl PcmFormat {
    fn validate(&self) -> Result<(), AudioError> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidFormat(
                "sample rate must be greater than zero".to_string(),
            ));
        }
        if self.channels == 0 {
            return Err(AudioError::InvalidFormat(
                "channel count must be at least 1".to_string(),
            ));
        }
        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(AudioError::InvalidFormat(format!(
                "bits per sample must be a positive multiple of 8, got {}",
                self.bits_per_sample
            )));
        }
        Ok(())
    }

    pub fn block_align(&self) -> Result<u16, AudioError> {
        self.channels
            .checked_mul(self.bits_per_sample / 8)
            .ok_or_else(|| AudioError::InvalidFormat("block align overflows u16".to_string()))
    }

    pub fn byte_rate(&self) -> Result<u32, AudioError> {
        self.sample_rate
            .checked_mul(self.block_align()? as u32)
            .ok_or_else(|| AudioError::InvalidFormat("byte rate overflows u32".to_string()))
    }
}

/// A complete RIFF/WAVE file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    bytes: Vec<u8>,
}

impl WavFile {
    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[WAV_HEADER_LEN..]
    }
}

/// Stamp a 44-byte canonical WAV header in front of `pcm_bytes`.
///
/// The PCM payload is copied through unmodified; its content is never
/// inspected.
///
/// # Errors
/// Returns [`AudioError::InvalidFormat`] if `format` is unusable or a header
/// field would not fit its on-disk width.
pub fn create_wav_blob(pcm_bytes: &[u8], format: PcmFormat) -> Result<WavFile, AudioError> {
    format.validate()?;
    let block_align = format.block_align()?;
    let byte_rate = format.byte_rate()?;

    let data_len = u32::try_from(pcm_bytes.len())
        .ok()
        .filter(|len| *len <= u32::MAX - 36)
        .ok_or_else(|| {
            AudioError::InvalidFormat(format!(
                "{} bytes of PCM does not fit in a WAV file",
                pcm_bytes.len()
            ))
        })?;

    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + pcm_bytes.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    bytes.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    bytes.extend_from_slice(&format.channels.to_le_bytes());
    bytes.extend_from_slice(&format.sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&format.bits_per_sample.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(pcm_bytes);

    Ok(WavFile { bytes })
}
