use serde::Serialize;

use crate::{
    game::{Board, ControlState, Direction, Position, ScoreBoard},
    sync::{StatusMessage, SyncPhase},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Read-only view of everything the rendering surface draws.
pub struct ViewSnapshot {
    /// Direction the player must press next.
    pub active_cue: Option<Direction>,
    /// Set while a mis-press is being shown.
    pub wrong: bool,
    /// Movable sprite.
    pub marker: Position,
    /// Target indicator.
    pub spot: Position,
    /// False while the spot relocates.
    pub spot_visible: bool,
    /// Per-key decoration, in [`Direction::ALL`] order.
    pub controls: [ControlState; 4],
    /// Correct presses.
    pub points: u64,
    /// All recognised presses.
    pub attempts: u64,
    /// Message on screen, if any.
    pub status: Option<StatusSnapshot>,
    /// Sync engine phase.
    pub sync_phase: SyncPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Status message as drawn on screen.
pub struct StatusSnapshot {
    /// Human-readable text.
    pub text: String,
    /// Fading out.
    pub exiting: bool,
    /// Drawn in the alarm colour.
    pub alert: bool,
}

impl From<StatusMessage> for StatusSnapshot {
    fn from(message: StatusMessage) -> Self {
        Self {
            text: message.text().into(),
            exiting: message.exiting,
            alert: message.kind.is_alert(),
        }
    }
}

impl ViewSnapshot {
    /// Assemble a snapshot from the individual sub-states.
    pub fn capture(board: &Board, score: &ScoreBoard, status: Option<StatusMessage>) -> Self {
        Self {
            active_cue: board.active_cue(),
            wrong: board.is_wrong(),
            marker: board.marker(),
            spot: board.spot(),
            spot_visible: board.spot_visible(),
            controls: board.controls(),
            points: score.points(),
            attempts: score.attempts(),
            status: status.map(Into::into),
            sync_phase: SyncPhase::derive(score.sync_in_flight(), status),
        }
    }
}
