//! Domain types and models

pub mod classification;
pub mod meeting;
pub mod taxonomy;

// Re-export the pipeline types for convenience
pub use classification::{
    Allocation, ClassificationMethod, ClassificationResult, ClassifiedMeeting, SummaryStats,
};
pub use meeting::{Attendee, Importance, MeetingRecord, ResponseStatus};
pub use taxonomy::{CategoryRule, Customer, Project, ProjectKind, Taxonomy};
