//! Collaborator access: remote score store and session cache.

/// Entities exchanged with the score API and the session cache.
pub mod models;
/// Remote score persistence.
pub mod score_store;
/// Session cache and credentials.
pub mod session;
/// Store-agnostic error type.
pub mod storage;
