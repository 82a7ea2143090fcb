//! Percentage-based distribution of unallocated hours
//!
//! Meetings never cover a whole work week. The gap between the expected
//! work-hour budget and the classified total is a pool the user can spread
//! across customers or projects by percentage, all-or-nothing: selections
//! accumulate in a session and nothing is allocated until commit.

use meetledger_domain::constants::WORK_DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gap between the expected work-hour budget and classified hours
///
/// The weekly budget is normalized over a 5-day work week regardless of the
/// period length, and the result is floored at zero so an over-booked week
/// never produces a negative pool.
pub fn unallocated_hours(
    total_classified_hours: f64,
    work_hours_per_week: f64,
    period_days: u32,
) -> f64 {
    let budget = work_hours_per_week / WORK_DAYS_PER_WEEK * f64::from(period_days);
    (budget - total_classified_hours).max(0.0)
}

/// One requested share of the pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Target bucket, a customer or project name
    pub bucket: String,
    /// Requested percentage of the pool; `None` on the final selection
    /// takes whatever budget remains
    pub percentage: Option<f64>,
}

impl Selection {
    pub fn new(bucket: impl Into<String>, percentage: Option<f64>) -> Self {
        Self { bucket: bucket.into(), percentage }
    }
}

/// Record of a request that had to be clamped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub bucket: String,
    pub requested: f64,
    pub granted: f64,
}

/// One granted share of the pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub bucket: String,
    pub percentage: f64,
    pub hours: f64,
}

/// Committed outcome of a distribution
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Distribution {
    /// Granted shares in selection order; a repeated bucket name keeps one
    /// entry holding the last grant
    pub shares: Vec<Share>,
    /// Clamps applied while distributing
    pub adjustments: Vec<Adjustment>,
    /// Percentage budget left after all selections
    pub remaining_percentage: f64,
}

impl Distribution {
    /// Hours granted to a bucket, if it received a share
    pub fn hours_for(&self, bucket: &str) -> Option<f64> {
        self.shares.iter().find(|share| share.bucket == bucket).map(|share| share.hours)
    }

    /// Sum of all granted hours
    pub fn total_hours(&self) -> f64 {
        self.shares.iter().map(|share| share.hours).sum()
    }
}

/// Distribute a pool of hours across ordered percentage selections
///
/// The percentage budget starts at 100. Each selection is clamped to what
/// remains, and every clamp (including a negative request floored at zero)
/// is reported as an adjustment. A `None` percentage anywhere but the final
/// selection grants nothing; on the final selection it takes the exact
/// remainder. Distribution stops once the budget is exhausted, so granted
/// hours can never sum above `pool_hours`.
pub fn distribute(pool_hours: f64, selections: &[Selection]) -> Distribution {
    let mut distribution =
        Distribution { remaining_percentage: 100.0, ..Distribution::default() };

    for (index, selection) in selections.iter().enumerate() {
        if distribution.remaining_percentage <= 0.0 {
            debug!(
                skipped = selections.len() - index,
                "percentage budget exhausted, stopping distribution"
            );
            break;
        }

        let is_final = index == selections.len() - 1;
        let requested = match selection.percentage {
            Some(value) => value,
            None if is_final => distribution.remaining_percentage,
            None => 0.0,
        };

        let granted = if requested > distribution.remaining_percentage {
            distribution.adjustments.push(Adjustment {
                bucket: selection.bucket.clone(),
                requested,
                granted: distribution.remaining_percentage,
            });
            distribution.remaining_percentage
        } else if requested < 0.0 {
            distribution.adjustments.push(Adjustment {
                bucket: selection.bucket.clone(),
                requested,
                granted: 0.0,
            });
            0.0
        } else {
            requested
        };

        let hours = granted / 100.0 * pool_hours;
        match distribution.shares.iter_mut().find(|share| share.bucket == selection.bucket) {
            Some(share) => {
                share.percentage = granted;
                share.hours = hours;
            }
            None => distribution.shares.push(Share {
                bucket: selection.bucket.clone(),
                percentage: granted,
                hours,
            }),
        }
        distribution.remaining_percentage -= granted;
    }

    distribution
}

/// Transactional reallocation session
///
/// Selections accumulate without side effects. `commit` computes the whole
/// distribution in one step; dropping the session (or calling `abort`)
/// allocates nothing.
#[derive(Debug, Clone)]
pub struct AllocationSession {
    pool_hours: f64,
    selections: Vec<Selection>,
}

impl AllocationSession {
    pub fn new(pool_hours: f64) -> Self {
        Self { pool_hours, selections: Vec::new() }
    }

    /// Queue a selection; order matters for clamping and the remainder rule
    pub fn select(&mut self, bucket: impl Into<String>, percentage: Option<f64>) -> &mut Self {
        self.selections.push(Selection::new(bucket, percentage));
        self
    }

    /// Queued selections in order
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Pool of hours this session distributes
    pub fn pool_hours(&self) -> f64 {
        self.pool_hours
    }

    /// Commit the session, computing the distribution
    pub fn commit(self) -> Distribution {
        distribute(self.pool_hours, &self.selections)
    }

    /// Discard the session without allocating anything
    pub fn abort(self) {}
}
