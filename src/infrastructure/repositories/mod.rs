pub mod gemini_tts_repository;
pub mod tts_repository;

pub use gemini_tts_repository::GeminiTtsRepository;
pub use tts_repository::{ProviderAudio, ProviderError, SpeechRequest, TtsRepository};
