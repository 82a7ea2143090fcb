//! Calendar meeting record types
//!
//! Records are produced by an external calendar source and are read-only to
//! the pipeline. Duration is derived from the start/end pair; a record whose
//! end precedes its start violates the source contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{MeetLedgerError, Result};

/// Attendee response status as reported by the calendar source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Accepted,
    Declined,
    Tentative,
    #[default]
    NoResponse,
}

/// Meeting importance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
}

/// Single attendee on a meeting record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address (may be empty for large broadcast meetings)
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether this attendee organized the meeting
    #[serde(default)]
    pub is_organizer: bool,
    /// Response status
    #[serde(default)]
    pub response_status: ResponseStatus,
}

impl Attendee {
    /// Create an attendee with just an email and display name
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            is_organizer: false,
            response_status: ResponseStatus::NoResponse,
        }
    }
}

/// Immutable calendar meeting record supplied by the record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    /// Source-assigned identifier, unique within a run
    pub id: String,
    /// Meeting subject line
    pub subject: String,
    /// Optional body/description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Start timestamp
    pub start: DateTime<Utc>,
    /// End timestamp (must not precede `start`)
    pub end: DateTime<Utc>,
    /// Organizer email address
    #[serde(default)]
    pub organizer: String,
    /// Attendees in source declaration order
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    /// Free-form tags attached by the user in their calendar
    #[serde(default)]
    pub tags: Vec<String>,
    /// Physical or virtual location string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the meeting has an online-meeting link
    #[serde(default)]
    pub is_online_meeting: bool,
    /// Whether the meeting is an all-day event
    #[serde(default)]
    pub is_all_day: bool,
    /// Whether the meeting was cancelled
    #[serde(default)]
    pub is_cancelled: bool,
    /// Importance level
    #[serde(default)]
    pub importance: Importance,
}

impl MeetingRecord {
    /// Meeting duration in hours, derived from the start/end pair
    ///
    /// # Errors
    /// Returns `MeetLedgerError::InvalidRecord` if `end` precedes `start`;
    /// negative durations are a source contract violation and must not
    /// propagate into the aggregation math.
    pub fn duration_hours(&self) -> Result<f64> {
        let seconds = (self.end - self.start).num_seconds();
        if seconds < 0 {
            return Err(MeetLedgerError::InvalidRecord(format!(
                "meeting '{}' ends before it starts ({} < {})",
                self.id, self.end, self.start
            )));
        }
        Ok(seconds as f64 / 3600.0)
    }

    /// Attendee email addresses in declaration order, skipping empty entries
    pub fn attendee_emails(&self) -> Vec<&str> {
        self.attendees
            .iter()
            .filter(|a| !a.email.is_empty())
            .map(|a| a.email.as_str())
            .collect()
    }

    /// Minimal record for tests
    #[cfg(test)]
    pub fn test_minimal(id: &str, subject: &str) -> Self {
        use chrono::TimeZone;

        let start = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).single().unwrap_or_default();
        Self {
            id: id.to_string(),
            subject: subject.to_string(),
            body: None,
            start,
            end: start + chrono::Duration::hours(1),
            organizer: String::new(),
            attendees: Vec::new(),
            tags: Vec::new(),
            location: None,
            is_online_meeting: false,
            is_all_day: false,
            is_cancelled: false,
            importance: Importance::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn duration_from_start_end_pair() {
        let mut record = MeetingRecord::test_minimal("evt_1", "Standup");
        record.end = record.start + Duration::minutes(90);

        assert!((record.duration_hours().unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_length_meeting_is_valid() {
        let mut record = MeetingRecord::test_minimal("evt_2", "Placeholder");
        record.end = record.start;

        assert_eq!(record.duration_hours().unwrap(), 0.0);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut record = MeetingRecord::test_minimal("evt_3", "Broken");
        record.end = record.start - Duration::minutes(15);

        let err = record.duration_hours().unwrap_err();
        assert!(matches!(err, MeetLedgerError::InvalidRecord(_)));
    }

    #[test]
    fn attendee_emails_skip_empty_entries() {
        let mut record = MeetingRecord::test_minimal("evt_4", "Review");
        record.attendees = vec![
            Attendee::new("a@example.com", "A"),
            Attendee::new("", "Broadcast"),
            Attendee::new("b@example.com", "B"),
        ];

        assert_eq!(record.attendee_emails(), vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).single().unwrap();
        let record = MeetingRecord {
            id: "evt_5".to_string(),
            subject: "Contoso - Kickoff".to_string(),
            body: Some("Agenda attached".to_string()),
            start,
            end: start + Duration::hours(1),
            organizer: "you@company.com".to_string(),
            attendees: vec![Attendee::new("client@contoso.com", "Jane Client")],
            tags: vec!["Kickoff".to_string()],
            location: Some("Teams".to_string()),
            is_online_meeting: true,
            is_all_day: false,
            is_cancelled: false,
            importance: Importance::High,
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: MeetingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
