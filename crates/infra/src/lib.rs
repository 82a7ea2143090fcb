//! # MeetLedger Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Taxonomy configuration loading (TOML/JSON files, env probing)
//! - The fixture meeting source used for demos and offline runs
//!
//! ## Architecture
//! - Implements traits defined in `meetledger-core`
//! - Depends on `meetledger-domain` and `meetledger-core`
//! - Contains all "impure" code (filesystem, environment)

pub mod config;
pub mod fixtures;

// Re-export commonly used items
pub use config::*;
pub use fixtures::*;
