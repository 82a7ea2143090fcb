//! Manual review of classified meetings

pub mod session;

pub use session::{OverrideOutcome, OverrideSet, ReviewSession};
