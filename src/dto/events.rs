use serde::Serialize;

use crate::{
    game::{ClassifiedPress, Direction, ScoreCounts},
    sync::StatusKind,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
/// Notification pushed to the rendering surface.
pub enum GameEvent {
    /// A press matched the active cue.
    Hit {
        /// Classified key press.
        press: ClassifiedPress,
        /// Counts after the press.
        score: ScoreCounts,
    },
    /// A press missed the active cue.
    Miss {
        /// Classified key press.
        press: ClassifiedPress,
        /// Counts after the press.
        score: ScoreCounts,
    },
    /// A new cue has been installed.
    CueChanged {
        /// Newly active cue.
        cue: Direction,
    },
    /// A status message was shown or replaced.
    StatusChanged {
        /// Which message.
        kind: StatusKind,
        /// Its text.
        text: String,
    },
    /// The status message started fading out.
    StatusExiting,
    /// The status message was removed.
    StatusCleared,
    /// The remote store acknowledged these counts.
    Synced {
        /// Counts now stored remotely.
        acknowledged: ScoreCounts,
    },
}

impl GameEvent {
    /// Status change event for `kind`.
    pub fn status(kind: StatusKind) -> Self {
        GameEvent::StatusChanged {
            kind,
            text: kind.text().into(),
        }
    }
}
