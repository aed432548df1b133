//! Library crate for window-wipe, exposing the reaction game core and its score
//! synchronisation engine for the binary and integration tests.

pub mod audio;
pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod game;
pub mod services;
pub mod state;
pub mod sync;
