use super::output::{AudioOutputHandle, CancelSignal, PlaybackError, RenderOutcome};
use crate::domain::audio::AudioRenderBuffer;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Stopped,
}

#[derive(Debug)]
struct Shared {
    state: PlaybackState,
    generation: u64,
}

struct ActivePlayback {
    generation: u64,
    cancel: Arc<watch::Sender<bool>>,
}

/// Handle to a single play request. Dropping it does not stop playback.
pub struct PlaybackHandle {
    generation: u64,
    cancel: Arc<watch::Sender<bool>>,
    task: JoinHandle<Result<RenderOutcome, PlaybackError>>,
}

impl PlaybackHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Wait for the render to finish, either naturally or by cancellation.
    pub async fn wait(self) -> Result<RenderOutcome, PlaybackError> {
        self.task
            .await
            .map_err(|e| PlaybackError::Output(format!("playback task failed: {}", e)))?
    }
}

/// Drives one audio output through `Idle -> Playing -> {Idle, Stopped}`.
///
/// Must be used from within a tokio runtime; each play runs on its own task.
pub struct PlaybackController {
    output: AudioOutputHandle,
    shared: Arc<Mutex<Shared>>,
    active: Option<ActivePlayback>,
}

impl PlaybackController {
    pub fn new(output: AudioOutputHandle) -> Self {
        Self {
            output,
            shared: Arc::new(Mutex::new(Shared {
                state: PlaybackState::Idle,
                generation: 0,
            })),
            active: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    pub fn output_open(&self) -> bool {
        self.output.is_open()
    }

    /// Start rendering `buffer`, replacing anything currently playing.
    pub fn play(&mut self, buffer: AudioRenderBuffer) -> Result<PlaybackHandle, PlaybackError> {
        self.stop();
        let output = self.output.acquire()?;

        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.state = PlaybackState::Playing;
            shared.generation
        };

        let (tx, signal) = CancelSignal::pair();
        let cancel = Arc::new(tx);
        let shared = self.shared.clone();

        tracing::info!(
            generation = generation,
            frames = buffer.frame_count(),
            sample_rate = buffer.sample_rate(),
            "Playback started"
        );

        let task = tokio::spawn(async move {
            let outcome = output.render(Arc::new(buffer), signal).await;

            let mut shared = shared.lock();
            if shared.generation == generation {
                shared.state = match &outcome {
                    Ok(RenderOutcome::Cancelled) => PlaybackState::Stopped,
                    Ok(RenderOutcome::Completed) => PlaybackState::Idle,
                    Err(e) => {
                        tracing::error!(error = %e, generation = generation, "Playback failed");
                        PlaybackState::Idle
                    }
                };
            }
            outcome
        });

        self.active = Some(ActivePlayback {
            generation,
            cancel: cancel.clone(),
        });

        Ok(PlaybackHandle {
            generation,
            cancel,
            task,
        })
    }

    /// Cancel the current play, if any. Returns whether something was stopped.
    pub fn stop(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        let mut shared = self.shared.lock();
        if shared.generation != active.generation || shared.state != PlaybackState::Playing {
            return false;
        }

        let _ = active.cancel.send(true);
        shared.state = PlaybackState::Stopped;
        tracing::info!(generation = active.generation, "Playback stopped");
        true
    }

    /// Stop if playing, otherwise play `buffer`.
    pub fn toggle(
        &mut self,
        buffer: AudioRenderBuffer,
    ) -> Result<Option<PlaybackHandle>, PlaybackError> {
        if self.is_playing() {
            self.stop();
            Ok(None)
        } else {
            self.play(buffer).map(Some)
        }
    }

    /// End the session: stop playback and close the output.
    pub fn release(&mut self) {
        self.stop();
        self.output.release();

        // Retire the last generation so a late completion cannot move us out of Idle
        let mut shared = self.shared.lock();
        shared.generation += 1;
        shared.state = PlaybackState::Idle;
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            let _ = active.cancel.send(true);
        }
    }
}
