//! Scan alignment module.
//!
//! Decides whether an unregistered scan fits into the current global frame
//! and computes its placement when it does.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    ALIGNMENT PIPELINE                         │
//! │                                                               │
//! │  BeaconScan (local frame)                                     │
//! │       │                                                       │
//! │       ▼                                                       │
//! │  ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐ │
//! │  │ 24 rotations │──▶│ anchor x beacon  │──▶│ overlap >= 12 │ │
//! │  │  (catalog)   │   │ translation diff │   │   accept      │ │
//! │  └──────────────┘   └──────────────────┘   └───────────────┘ │
//! │                                                   │           │
//! │                                                   ▼           │
//! │                                             ScanPlacement     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exploration order is rotation-outer, then global anchor, then scan
//! beacon. The acceptance criterion is order-independent, so any traversal
//! order yields the same accept/reject outcome.

mod aligner;
mod config;
mod traits;
mod types;

pub use aligner::BruteForceAligner;
pub use config::AlignerConfig;
pub use traits::ScanAligner;
pub use types::ScanPlacement;
