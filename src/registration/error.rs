//! Registration failure modes.

use thiserror::Error;

/// Errors produced by the registration engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The input collection contained no scans.
    #[error("no scans supplied")]
    NoScans,

    /// The worklist stopped making progress: every remaining scan failed
    /// to align against an unchanged global map.
    #[error("registration stalled: {registered} scanners registered, {remaining} scans unalignable")]
    Stalled {
        /// Scanners registered before the stall, including scanner 0.
        registered: usize,
        /// Scans still on the worklist when progress stopped.
        remaining: usize,
    },
}
