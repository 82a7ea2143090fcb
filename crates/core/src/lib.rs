//! # MeetLedger Core
//!
//! Business logic layer for meeting classification and time allocation.
//! This crate is pure: no I/O, no clocks, no external services. Everything
//! here is a deterministic function of its inputs, which keeps the whole
//! pipeline replayable and unit-testable without fixtures or mocks.
//!
//! ## Architecture
//!
//! - `classify` - rule-based customer/project/category detection
//! - `review` - manual override sessions over classified meetings
//! - `report` - time-allocation aggregation views
//! - `allocate` - background-time reallocation of unallocated hours
//! - `ports` - interfaces implemented by the infra layer

pub mod allocate;
pub mod classify;
pub mod ports;
pub mod report;
pub mod review;

// Re-export the main service types
pub use allocate::{
    distribute, unallocated_hours, Adjustment, AllocationSession, Distribution, Selection, Share,
};
pub use classify::{ClassificationService, PartialRatioScorer, SimilarityScorer};
pub use ports::MeetingSource;
pub use report::AllocationCalculator;
pub use review::{OverrideOutcome, OverrideSet, ReviewSession};
