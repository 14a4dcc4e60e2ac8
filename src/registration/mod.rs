//! Worklist-based registration of scans into a shared global frame.
//!
//! Each scan moves through a small state machine: **pending** (never tried
//! against the current map), **retry** (failed its latest attempt, requeued
//! at the tail), **registered** (terminal, merged into the map). The
//! worklist drains in finite time whenever the scan overlap graph is
//! connected through scanner 0; otherwise the engine reports a stall.

mod engine;
mod error;

pub use engine::{EngineConfig, RegistrationEngine, RegistrationReport};
pub use error::RegistrationError;
