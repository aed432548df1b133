//! Payloads handed to the rendering surface.

/// Events broadcast to subscribers.
pub mod events;
/// Read-only render state.
pub mod snapshot;
