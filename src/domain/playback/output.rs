use crate::domain::audio::AudioRenderBuffer;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio output unavailable: {0}")]
    OutputUnavailable(String),
    #[error("audio output failed: {0}")]
    Output(String),
}

/// Receiving side of a playback cancellation.
///
/// Resolves once cancellation is requested or the requesting side goes away.
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

impl CancelSignal {
    pub fn pair() -> (watch::Sender<bool>, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (tx, CancelSignal(rx))
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    pub async fn cancelled(&mut self) {
        loop {
            if *self.0.borrow_and_update() {
                return;
            }
            if self.0.changed().await.is_err() {
                return;
            }
        }
    }
}

/// A device (or stand-in) that can render decoded audio.
#[async_trait]
pub trait AudioOutput: Send + Sync {
    /// Render the whole buffer, returning early with
    /// [`RenderOutcome::Cancelled`] once `cancel` fires
    async fn render(
        &self,
        buffer: Arc<AudioRenderBuffer>,
        cancel: CancelSignal,
    ) -> Result<RenderOutcome, PlaybackError>;

    /// Free device resources. Called once when the owning handle is released.
    fn close(&self) {}
}

/// Output that produces no sound and takes exactly as long as the buffer
/// lasts on the tokio clock. Used when no device is attached.
#[derive(Debug, Default)]
pub struct ClockedOutput;

#[async_trait]
impl AudioOutput for ClockedOutput {
    async fn render(
        &self,
        buffer: Arc<AudioRenderBuffer>,
        mut cancel: CancelSignal,
    ) -> Result<RenderOutcome, PlaybackError> {
        let duration = buffer.duration();
        tracing::debug!(
            frames = buffer.frame_count(),
            duration_ms = duration.as_millis(),
            "Rendering on clocked output"
        );

        tokio::select! {
            _ = tokio::time::sleep(duration) => Ok(RenderOutcome::Completed),
            _ = cancel.cancelled() => Ok(RenderOutcome::Cancelled),
        }
    }
}

pub type OutputFactory =
    Box<dyn Fn() -> Result<Arc<dyn AudioOutput>, PlaybackError> + Send + Sync>;

/// Caller-owned audio output with an explicit lifecycle: opened on first use,
/// reused afterwards, closed by [`AudioOutputHandle::release`].
pub struct AudioOutputHandle {
    factory: OutputFactory,
    output: Option<Arc<dyn AudioOutput>>,
}

impl AudioOutputHandle {
    pub fn new(factory: OutputFactory) -> Self {
        Self {
            factory,
            output: None,
        }
    }

    pub fn clocked() -> Self {
        Self::new(Box::new(|| Ok(Arc::new(ClockedOutput) as Arc<dyn AudioOutput>)))
    }

    pub fn is_open(&self) -> bool {
        self.output.is_some()
    }

    pub fn acquire(&mut self) -> Result<Arc<dyn AudioOutput>, PlaybackError> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }

        let output = (self.factory)()?;
        tracing::debug!("Audio output opened");
        self.output = Some(output.clone());
        Ok(output)
    }

    pub fn release(&mut self) {
        if let Some(output) = self.output.take() {
            output.close();
            tracing::debug!("Audio output released");
        }
    }
}

impl Drop for AudioOutputHandle {
    fn drop(&mut self) {
        self.release();
    }
}
