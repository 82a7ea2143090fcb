//! Override application and audit trail
//!
//! Overrides are partial: a field that is absent leaves the current value
//! untouched. Manual entries are trusted verbatim, so applying one flips
//! the method tag to manual without rescoring confidence or rewriting the
//! rationale the rules produced.

use std::collections::HashMap;

use meetledger_domain::{
    ClassificationMethod, ClassifiedMeeting, MeetLedgerError, Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Partial set of manual corrections for one meeting
///
/// `customer` and `project` are doubly optional to distinguish "not
/// overridden" (outer `None`) from "cleared" (`Some(None)`). Time
/// adjustments ride along without being classification changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideSet {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub customer: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub project: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_hours: Option<f64>,
}

impl OverrideSet {
    /// Whether no field is present at all
    pub fn is_empty(&self) -> bool {
        self.customer.is_none()
            && self.project.is_none()
            && self.category.is_none()
            && self.prep_hours.is_none()
            && self.follow_up_hours.is_none()
    }

    /// Whether a classification field (not just a time adjustment) is present
    fn touches_classification(&self) -> bool {
        self.customer.is_some() || self.project.is_some() || self.category.is_some()
    }

    /// Parse an override set from a JSON payload
    ///
    /// # Errors
    /// Returns `MeetLedgerError::InvalidOverride` when the payload names an
    /// unknown field or carries a malformed value.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|err| MeetLedgerError::InvalidOverride(err.to_string()))
    }

    /// Fold `other` into `self`; per field, the later write wins
    fn merge(&mut self, other: &Self) {
        if other.customer.is_some() {
            self.customer = other.customer.clone();
        }
        if other.project.is_some() {
            self.project = other.project.clone();
        }
        if other.category.is_some() {
            self.category = other.category.clone();
        }
        if other.prep_hours.is_some() {
            self.prep_hours = other.prep_hours;
        }
        if other.follow_up_hours.is_some() {
            self.follow_up_hours = other.follow_up_hours;
        }
    }
}

/// Result of one override application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// Fields were applied to the matching meeting
    Applied,
    /// No meeting carried the given record id; recorded and skipped
    UnknownRecord,
}

/// Per-run review context holding the override audit map
///
/// The session never owns the meetings; it mutates the slice handed to
/// `apply` and keeps a merged copy of every override keyed by record id so
/// a run can be audited or replayed later.
#[derive(Debug, Default)]
pub struct ReviewSession {
    overrides: HashMap<String, OverrideSet>,
    skipped: Vec<String>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial override to the meeting with the given record id
    ///
    /// Present fields are written verbatim. Customer, project, and category
    /// changes flip the method tag to manual; prep and follow-up time
    /// adjustments alone do not. Confidence and rationale are never
    /// touched. Re-applying the same fields is idempotent.
    pub fn apply(
        &mut self,
        meetings: &mut [ClassifiedMeeting],
        record_id: &str,
        fields: OverrideSet,
    ) -> OverrideOutcome {
        let Some(meeting) = meetings.iter_mut().find(|m| m.record.id == record_id) else {
            warn!(record_id, "override targets an unknown record, skipping");
            self.skipped.push(record_id.to_string());
            return OverrideOutcome::UnknownRecord;
        };

        if let Some(customer) = &fields.customer {
            meeting.classification.customer = customer.clone();
        }
        if let Some(project) = &fields.project {
            meeting.classification.project = project.clone();
        }
        if let Some(category) = &fields.category {
            meeting.classification.category = category.clone();
        }
        if let Some(prep) = fields.prep_hours {
            meeting.prep_hours = prep;
        }
        if let Some(follow_up) = fields.follow_up_hours {
            meeting.follow_up_hours = follow_up;
        }
        if fields.touches_classification() {
            meeting.classification.method = ClassificationMethod::Manual;
        }

        debug!(record_id, "override applied");
        self.overrides.entry(record_id.to_string()).or_default().merge(&fields);
        OverrideOutcome::Applied
    }

    /// Merged overrides keyed by record id, for audit or replay
    pub fn overrides(&self) -> &HashMap<String, OverrideSet> {
        &self.overrides
    }

    /// Record ids that were targeted but not present in the run
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}
