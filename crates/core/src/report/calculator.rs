//! Allocation views over classified meetings
//!
//! Every view is recomputed from the borrowed meeting slice on each call,
//! so a mutation applied through the review layer shows up in the next
//! query without any cache invalidation.

use meetledger_domain::constants::{GENERAL_PROJECT_LABEL, INTERNAL_CUSTOMER_LABEL};
use meetledger_domain::{Allocation, ClassifiedMeeting, SummaryStats};

/// Read-only aggregation over a run's classified meetings
///
/// Groups preserve first-appearance order before sorting, which keeps tie
/// order deterministic: two buckets with equal hours stay in the order
/// their first meetings appeared.
#[derive(Debug, Clone, Copy)]
pub struct AllocationCalculator<'a> {
    meetings: &'a [ClassifiedMeeting],
}

impl<'a> AllocationCalculator<'a> {
    pub fn new(meetings: &'a [ClassifiedMeeting]) -> Self {
        Self { meetings }
    }

    /// Sum of meeting, prep, and follow-up hours across the run
    pub fn total_meeting_hours(&self) -> f64 {
        self.meetings.iter().map(ClassifiedMeeting::total_hours).sum()
    }

    /// Hours per customer, sorted by total hours descending
    ///
    /// Meetings without a customer land in the internal bucket.
    pub fn by_customer(&self) -> Vec<Allocation<'a>> {
        let mut allocations: Vec<Allocation<'a>> = self
            .group_by(|meeting| {
                meeting
                    .classification
                    .customer
                    .clone()
                    .unwrap_or_else(|| INTERNAL_CUSTOMER_LABEL.to_string())
            })
            .into_iter()
            .map(|(customer, members)| Allocation {
                customer: Some(customer),
                project: None,
                category: None,
                total_hours: bucket_hours(&members),
                meeting_count: members.len(),
                events: members,
            })
            .collect();
        allocations.sort_by(|a, b| b.total_hours.total_cmp(&a.total_hours));
        allocations
    }

    /// Hours per category, sorted by total hours descending
    pub fn by_category(&self) -> Vec<Allocation<'a>> {
        let mut allocations: Vec<Allocation<'a>> = self
            .group_by(|meeting| meeting.classification.category.clone())
            .into_iter()
            .map(|(category, members)| Allocation {
                customer: None,
                project: None,
                category: Some(category),
                total_hours: bucket_hours(&members),
                meeting_count: members.len(),
                events: members,
            })
            .collect();
        allocations.sort_by(|a, b| b.total_hours.total_cmp(&a.total_hours));
        allocations
    }

    /// Hours per (customer, project) pair
    ///
    /// Sorted by customer name ascending, then hours descending within a
    /// customer. Meetings without a project fall into a general bucket that
    /// reports `project: None`.
    pub fn by_customer_and_project(&self) -> Vec<Allocation<'a>> {
        let mut allocations: Vec<Allocation<'a>> = self
            .group_by(|meeting| {
                (
                    meeting
                        .classification
                        .customer
                        .clone()
                        .unwrap_or_else(|| INTERNAL_CUSTOMER_LABEL.to_string()),
                    meeting
                        .classification
                        .project
                        .clone()
                        .unwrap_or_else(|| GENERAL_PROJECT_LABEL.to_string()),
                )
            })
            .into_iter()
            .map(|((customer, project), members)| {
                let project = (project != GENERAL_PROJECT_LABEL).then_some(project);
                Allocation {
                    customer: Some(customer),
                    project,
                    category: None,
                    total_hours: bucket_hours(&members),
                    meeting_count: members.len(),
                    events: members,
                }
            })
            .collect();
        allocations.sort_by(|a, b| {
            a.customer.cmp(&b.customer).then_with(|| b.total_hours.total_cmp(&a.total_hours))
        });
        allocations
    }

    /// Headline statistics for the run; all zeros when the run is empty
    pub fn summary_stats(&self) -> SummaryStats {
        if self.meetings.is_empty() {
            return SummaryStats::default();
        }
        let total_hours = self.total_meeting_hours();
        let customer_count = self
            .by_customer()
            .iter()
            .filter(|a| a.customer.as_deref() != Some(INTERNAL_CUSTOMER_LABEL))
            .count();
        SummaryStats {
            total_meetings: self.meetings.len(),
            total_hours,
            avg_meeting_length: total_hours / self.meetings.len() as f64,
            customer_count,
            category_count: self.by_category().len(),
        }
    }

    /// Share of the grand total carried by one allocation, as a percentage
    ///
    /// Zero when the grand total is zero, so an empty run never divides by
    /// zero.
    pub fn percentage_of_total(&self, allocation: &Allocation<'_>) -> f64 {
        let total = self.total_meeting_hours();
        if total == 0.0 {
            return 0.0;
        }
        allocation.total_hours / total * 100.0
    }

    /// Share of total hours spent with one named customer
    ///
    /// The name must match the customer label exactly; the internal bucket
    /// can be queried with its sentinel label.
    pub fn customer_percentage(&self, customer: &str) -> f64 {
        let total = self.total_meeting_hours();
        if total == 0.0 {
            return 0.0;
        }
        let customer_hours: f64 = self
            .meetings
            .iter()
            .filter(|m| {
                m.classification.customer.as_deref().unwrap_or(INTERNAL_CUSTOMER_LABEL) == customer
            })
            .map(ClassifiedMeeting::total_hours)
            .sum();
        customer_hours / total * 100.0
    }

    /// Gap between the expected work-hour budget and classified hours
    pub fn unallocated_hours(&self, work_hours_per_week: f64, period_days: u32) -> f64 {
        crate::allocate::unallocated_hours(
            self.total_meeting_hours(),
            work_hours_per_week,
            period_days,
        )
    }

    /// Group meetings by key, preserving first-appearance order
    fn group_by<K, F>(&self, key_of: F) -> Vec<(K, Vec<&'a ClassifiedMeeting>)>
    where
        K: PartialEq,
        F: Fn(&ClassifiedMeeting) -> K,
    {
        let mut groups: Vec<(K, Vec<&'a ClassifiedMeeting>)> = Vec::new();
        for meeting in self.meetings {
            let key = key_of(meeting);
            match groups.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, members)) => members.push(meeting),
                None => groups.push((key, vec![meeting])),
            }
        }
        groups
    }
}

fn bucket_hours(members: &[&ClassifiedMeeting]) -> f64 {
    members.iter().map(|m| m.total_hours()).sum()
}
