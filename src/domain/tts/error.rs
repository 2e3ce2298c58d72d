use crate::domain::audio::AudioError;
use crate::error::AppError;
use crate::infrastructure::repositories::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("provider returned malformed audio: {0}")]
    MalformedAudio(#[from] AudioError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            TtsServiceError::Provider(e) => match e {
                ProviderError::InvalidApiKey(_) => AppError::ExternalService(
                    "The API key is invalid. Please check your configuration.".to_string(),
                ),
                ProviderError::RateLimited(_) => AppError::RateLimitExceeded(
                    "You have exceeded the request limit. Please wait a moment and try again."
                        .to_string(),
                ),
                ProviderError::InvalidInput(_) => AppError::BadRequest(
                    "The input text may be invalid. Please revise your script and try again."
                        .to_string(),
                ),
                ProviderError::Blocked(_) => AppError::ContentBlocked(
                    "The request was blocked due to safety filters. Please modify your text."
                        .to_string(),
                ),
                ProviderError::Unavailable(_) => AppError::ServiceUnavailable(
                    "The AI service is currently unavailable. Please try again later."
                        .to_string(),
                ),
                ProviderError::NoAudio => AppError::ExternalService(
                    "No audio data was returned from the API.".to_string(),
                ),
                ProviderError::Transport(_) => AppError::ExternalService(
                    "Failed to generate speech due to an unexpected error.".to_string(),
                ),
            },
            TtsServiceError::MalformedAudio(e) => AppError::ExternalService(e.to_string()),
        }
    }
}
