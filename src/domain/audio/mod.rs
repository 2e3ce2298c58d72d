pub mod error;
pub mod payload;
pub mod pcm;
pub mod wav;

pub use error::AudioError;
pub use payload::{decode, encode, EncodedAudioPayload};
pub use pcm::{decode_audio_data, pcm_to_samples, samples_to_pcm, AudioRenderBuffer};
pub use wav::{create_wav_blob, PcmFormat, WavFile, WAV_MIME_TYPE};

/// Output format of the speech provider: 16-bit signed little-endian mono PCM
/// at 24 kHz. The provider does not negotiate this.
pub const PROVIDER_FORMAT: PcmFormat = PcmFormat {
    sample_rate: 24000,
    channels: 1,
    bits_per_sample: 16,
};

/// MIME designation for headerless provider PCM.
pub const PROVIDER_MIME_TYPE: &str = "audio/L16;codec=pcm;rate=24000";
