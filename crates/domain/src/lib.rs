//! # MeetLedger Domain
//!
//! Business domain types and models for MeetLedger.
//!
//! This crate contains:
//! - Domain data types (MeetingRecord, Taxonomy, ClassifiedMeeting, etc.)
//! - Domain error types and Result definitions
//! - Classification constants and sentinel labels
//! - Text-matching utilities shared by the classification heuristics
//!
//! ## Architecture
//! - No dependencies on other MeetLedger crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export text utilities used by the classification heuristics
pub use utils::text::{combined_text, email_domain, first_bracket_token};
