use std::time::Duration;

use super::error::AudioError;

const BYTES_PER_SAMPLE: usize = 2;
const I16_SCALE: f32 = 32768.0;

/// Decoded audio ready to hand to an output device: one sample stream per
/// channel, all of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioRenderBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioRenderBuffer {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}

/// Interpret `bytes` as interleaved signed 16-bit little-endian PCM and split
/// it into per-channel streams of `f32` amplitudes (`sample / 32768.0`).
///
/// # Errors
/// - [`AudioError::InvalidFormat`] if `sample_rate` or `channel_count` is zero
/// - [`AudioError::MalformedAudio`] if the byte length is not a whole number
///   of frames
pub fn decode_audio_data(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: u16,
) -> Result<AudioRenderBuffer, AudioError> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidFormat(
            "sample rate must be greater than zero".to_string(),
        ));
    }
    if channel_count == 0 {
        return Err(AudioError::InvalidFormat(
            "channel count must be at least 1".to_string(),
        ));
    }

    let channel_count = channel_count as usize;
    let frame_size = BYTES_PER_SAMPLE * channel_count;
    if bytes.len() % frame_size != 0 {
        return Err(AudioError::MalformedAudio {
            byte_len: bytes.len(),
            frame_size,
        });
    }

    let frame_count = bytes.len() / frame_size;
    let mut channels: Vec<Vec<f32>> = (0..channel_count)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();

    for frame in bytes.chunks_exact(frame_size) {
        for (channel, sample) in channels.iter_mut().zip(frame.chunks_exact(BYTES_PER_SAMPLE)) {
            let s = i16::from_le_bytes([sample[0], sample[1]]);
            channel.push(s as f32 / I16_SCALE);
        }
    }

    Ok(AudioRenderBuffer {
        sample_rate,
        channels,
    })
}

/// Read raw bytes as signed 16-bit little-endian samples.
///
/// # Errors
/// Returns [`AudioError::MalformedAudio`] on odd-length input.
pub fn pcm_to_samples(bytes: &[u8]) -> Result<Vec<i16>, AudioError> {
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(AudioError::MalformedAudio {
            byte_len: bytes.len(),
            frame_size: BYTES_PER_SAMPLE,
        });
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect())
}

pub fn samples_to_pcm(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}
