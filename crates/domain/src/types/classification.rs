//! Classification results and allocation buckets

use serde::{Deserialize, Serialize};

use crate::constants::{
    GENERAL_PROJECT_LABEL, INTERNAL_CUSTOMER_LABEL, NO_PATTERNS_RATIONALE, UNCATEGORIZED_CATEGORY,
};
use crate::errors::Result;
use crate::types::meeting::MeetingRecord;

/// How a classification was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Produced by the rule engine
    #[default]
    Rule,
    /// At least one field was manually corrected during review
    Manual,
}

/// Outcome of classifying one meeting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Detected customer, if any heuristic fired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Detected project, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Assigned category (never empty; defaults to the uncategorized label)
    pub category: String,
    /// Combined confidence in [0, 1]
    pub confidence: f32,
    /// Ordered evidence strings from each detection stage
    #[serde(default)]
    pub rationale: Vec<String>,
    /// Provenance tag
    #[serde(default)]
    pub method: ClassificationMethod,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            customer: None,
            project: None,
            category: UNCATEGORIZED_CATEGORY.to_string(),
            confidence: 0.0,
            rationale: Vec::new(),
            method: ClassificationMethod::Rule,
        }
    }
}

impl ClassificationResult {
    /// Rationale entries joined as a single trail, or the no-patterns
    /// sentinel when no heuristic contributed a reason
    pub fn rationale_trail(&self) -> String {
        if self.rationale.is_empty() {
            NO_PATTERNS_RATIONALE.to_string()
        } else {
            self.rationale.join("; ")
        }
    }
}

/// Meeting record paired with its classification and adjustable time
///
/// Invariant: `total_hours() == duration_hours + prep_hours + follow_up_hours`
/// and is never below `duration_hours` (prep and follow-up are non-negative
/// by construction in the review layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMeeting {
    /// The source record (read-only)
    pub record: MeetingRecord,
    /// Classification outcome, mutable only through the review layer
    pub classification: ClassificationResult,
    /// Hours derived from the record's start/end pair
    pub duration_hours: f64,
    /// User-supplied preparation time in hours
    pub prep_hours: f64,
    /// User-supplied follow-up time in hours
    pub follow_up_hours: f64,
}

impl ClassifiedMeeting {
    /// Pair a record with its classification, deriving the duration
    ///
    /// # Errors
    /// Returns `MeetLedgerError::InvalidRecord` if the record's end precedes
    /// its start.
    pub fn new(record: MeetingRecord, classification: ClassificationResult) -> Result<Self> {
        let duration_hours = record.duration_hours()?;
        Ok(Self { record, classification, duration_hours, prep_hours: 0.0, follow_up_hours: 0.0 })
    }

    /// Meeting duration plus prep and follow-up time
    pub fn total_hours(&self) -> f64 {
        self.duration_hours + self.prep_hours + self.follow_up_hours
    }
}

/// An aggregation bucket over classified meetings
///
/// Grouping-key fields are `Some` only for the dimensions that participate
/// in the view that produced the bucket. Member events are borrowed from the
/// run's event list; buckets are recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation<'a> {
    /// Customer label (sentinel-resolved), when grouped by customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Project label, when grouped by project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Category label, when grouped by category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sum of member `total_hours`
    pub total_hours: f64,
    /// Number of member meetings
    pub meeting_count: usize,
    /// Member events in insertion order
    #[serde(skip_serializing)]
    pub events: Vec<&'a ClassifiedMeeting>,
}

impl Allocation<'_> {
    /// Customer grouping label, falling back to the internal sentinel
    pub fn customer_label(&self) -> &str {
        self.customer.as_deref().unwrap_or(INTERNAL_CUSTOMER_LABEL)
    }

    /// Project grouping label; absent projects render as the general bucket
    pub fn project_label(&self) -> &str {
        self.project.as_deref().unwrap_or(GENERAL_PROJECT_LABEL)
    }

    /// Category grouping label, falling back to the uncategorized sentinel
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED_CATEGORY)
    }
}

/// Summary statistics over a full event set
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SummaryStats {
    /// Number of classified meetings
    pub total_meetings: usize,
    /// Sum of `total_hours` across all meetings
    pub total_hours: f64,
    /// Arithmetic mean of `total_hours` (0 when there are no meetings)
    pub avg_meeting_length: f64,
    /// Distinct customers, excluding the internal sentinel
    pub customer_count: usize,
    /// Distinct categories
    pub category_count: usize,
}
