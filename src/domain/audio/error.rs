use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("invalid base64 audio payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("malformed audio: {byte_len} bytes is not a whole number of {frame_size}-byte frames")]
    MalformedAudio { byte_len: usize, frame_size: usize },
    #[error("invalid audio format: {0}")]
    InvalidFormat(String),
}

impl From<AudioError> for AppError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::Decode(_) | AudioError::MalformedAudio { .. } => {
                AppError::BadRequest(err.to_string())
            }
            AudioError::InvalidFormat(msg) => AppError::Internal(msg),
        }
    }
}
