//! Sound cues played on every recognised press.

use serde::Serialize;
use tracing::debug;

/// The two sounds the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Wipe sound after a correct press.
    Hit,
    /// Buzzer after an incorrect press.
    Miss,
}

/// Audio surface. Playback is fire-and-forget: no queue, overlapping calls may overlap.
pub trait AudioSink: Send + Sync {
    /// Start playing `cue` now.
    fn play(&self, cue: SoundCue);
}

/// Sink that only logs, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&self, cue: SoundCue) {
        debug!(?cue, "sound cue");
    }
}
