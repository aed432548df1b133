//! Pure game state: cues, board, score buffer. No timers or I/O live here.

/// Cue, marker and spot state.
pub mod board;
/// Random cue selection.
pub mod cue;
/// Directions and their screen coordinates.
pub mod direction;
/// Points, attempts and acknowledged counts.
pub mod score;

pub use self::board::{Board, ClassifiedPress, ControlState, Verdict};
pub use self::cue::CueSequencer;
pub use self::direction::{Direction, MARKER_REST, Position, SPOT_ORIGIN};
pub use self::score::{ScoreBoard, ScoreCounts};
