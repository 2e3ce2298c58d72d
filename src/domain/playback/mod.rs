pub mod controller;
pub mod output;

pub use controller::{PlaybackController, PlaybackHandle, PlaybackState};
pub use output::{
    AudioOutput, AudioOutputHandle, CancelSignal, ClockedOutput, OutputFactory, PlaybackError,
    RenderOutcome,
};
