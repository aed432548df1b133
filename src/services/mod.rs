//! Asynchronous operations on a mounted game view.

/// Cue installation and spot relocation.
pub mod cue_service;
/// Marker displacement and sound cues.
pub mod feedback_service;
/// Keyboard input classification.
pub mod input_service;
/// Mount and teardown of a game view.
pub mod lifecycle_service;
/// Periodic score push and status messages.
pub mod sync_service;
