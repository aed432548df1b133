//! Score synchronisation phases and the status message lifecycle.

/// Status message lifecycle.
pub mod status;

use serde::Serialize;

pub use self::status::{StatusBoard, StatusKind, StatusMessage};

/// Observable phase of the score synchronisation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPhase {
    /// Waiting for the next timer tick.
    Idle,
    /// A push to the remote store is in flight.
    Syncing,
    /// A status message is on screen.
    Reporting,
    /// The status message is fading out.
    Exiting,
}

impl SyncPhase {
    /// Derive the phase from the in-flight flag and the status board.
    ///
    /// An in-flight push wins over any message still on screen.
    pub fn derive(sync_in_flight: bool, message: Option<StatusMessage>) -> Self {
        match (sync_in_flight, message) {
            (true, _) => SyncPhase::Syncing,
            (false, Some(StatusMessage { exiting: true, .. })) => SyncPhase::Exiting,
            (false, Some(_)) => SyncPhase::Reporting,
            (false, None) => SyncPhase::Idle,
        }
    }
}

/// What a single timer tick decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The view has been torn down.
    Closed,
    /// Another push is still in flight.
    InFlight,
    /// Local counts equal the acknowledged ones; nothing to send.
    UpToDate,
    /// Counts differ but there is no usable session.
    LoginRequired,
    /// A push was started.
    Started(CycleId),
}

/// Identifier attached to one sync attempt for log correlation.
pub type CycleId = uuid::Uuid;
