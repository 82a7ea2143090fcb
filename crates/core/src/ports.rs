//! Port interfaces implemented by the infrastructure layer

use chrono::{DateTime, Utc};
use meetledger_domain::{MeetingRecord, Result};

/// Supplies fully materialized meeting records for a bounded date range.
///
/// Sources must hand back complete records in one batch: consistent
/// timezones, `end >= start` per record, no partial or streamed data.
/// Range bounds are inclusive on both ends and filter on the record's
/// start time.
pub trait MeetingSource: Send + Sync {
    /// Fetch every record whose start time falls within `[start, end]`.
    ///
    /// # Errors
    /// Returns `MeetLedgerError::Source` when the backing store cannot be
    /// reached or returns malformed data.
    fn fetch_meetings(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MeetingRecord>>;
}
