pub mod dto;
pub mod error;
pub mod prompt;
pub mod service;
pub mod voice;

pub use dto::{CatalogResponse, DownloadRequest, SynthesizeRequest, SynthesizeResponse};
pub use error::TtsServiceError;
pub use service::{SpeechOptions, TtsService, TtsServiceApi, TtsSynthesisResult};
pub use voice::{resolve_voice, VoiceProfile};
