//! Plain-text rendering for allocation reports
//!
//! Formats the aggregation views into aligned text tables: a summary block,
//! per-customer and per-category tables with view-relative percentages, a
//! per-customer project breakdown, and a closing insights block. All numbers
//! come from the calculator; this module only formats.

use std::fmt::Write as _;

use meetledger_core::AllocationCalculator;
use meetledger_domain::{Allocation, SummaryStats};

const BANNER_WIDTH: usize = 60;

/// Label, hours, and meeting count for one table row.
type TableRow<'a> = (&'a str, f64, usize);

/// Render the complete report: banner, summary, and all three views.
pub fn full_report(calculator: &AllocationCalculator<'_>) -> String {
    let mut out = String::new();

    out.push_str(&banner("TIME ALLOCATION REPORT"));
    out.push('\n');

    out.push_str(&summary_block(&calculator.summary_stats()));
    out.push('\n');

    let by_customer = calculator.by_customer();
    let customer_rows: Vec<TableRow<'_>> = by_customer
        .iter()
        .map(|a| (a.customer_label(), a.total_hours, a.meeting_count))
        .collect();
    out.push_str(&allocation_table("Time Allocation by Customer", "Customer", &customer_rows));
    out.push('\n');

    let by_category = calculator.by_category();
    let category_rows: Vec<TableRow<'_>> = by_category
        .iter()
        .map(|a| (a.category_label(), a.total_hours, a.meeting_count))
        .collect();
    out.push_str(&allocation_table("Time Allocation by Category", "Category", &category_rows));

    let by_pair = calculator.by_customer_and_project();
    if by_pair.iter().any(|allocation| allocation.project.is_some()) {
        out.push('\n');
        out.push_str(&project_breakdown(&by_pair));
    }

    out
}

/// Render the closing insights: unallocated hours and top customers.
pub fn insights(
    calculator: &AllocationCalculator<'_>,
    work_hours_per_week: f64,
    period_days: u32,
) -> String {
    let mut out = String::new();

    out.push_str(&banner("ADDITIONAL INSIGHTS"));
    out.push('\n');

    let unallocated = calculator.unallocated_hours(work_hours_per_week, period_days);
    let _ = writeln!(
        out,
        "Unallocated hours ({work_hours_per_week:.0}h work week): {unallocated:.1}h"
    );
    let _ = writeln!(out, "This time could go to background projects or customers.");

    let by_customer = calculator.by_customer();
    if !by_customer.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Top customers by time:");
        for (rank, allocation) in by_customer.iter().take(3).enumerate() {
            let label = allocation.customer_label();
            let share = calculator.customer_percentage(label);
            let _ = writeln!(out, "  {}. {label}: {share:.1}%", rank + 1);
        }
    }

    out
}

fn banner(title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "{title:^BANNER_WIDTH$}");
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));
    out
}

fn summary_block(stats: &SummaryStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Summary Statistics");
    let _ = writeln!(out, "{}", "-".repeat("Summary Statistics".len()));
    let _ = writeln!(out, "  Total meetings:     {}", stats.total_meetings);
    let _ = writeln!(out, "  Total hours:        {:.1}h", stats.total_hours);
    let _ = writeln!(out, "  Avg meeting length: {:.1}h", stats.avg_meeting_length);
    let _ = writeln!(out, "  Customers:          {}", stats.customer_count);
    let _ = writeln!(out, "  Categories:         {}", stats.category_count);

    out
}

/// One aligned table over a grouped view, with percentages relative to the
/// view's own total.
fn allocation_table(title: &str, label_header: &str, rows: &[TableRow<'_>]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));

    if rows.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }

    let view_total: f64 = rows.iter().map(|(_, hours, _)| hours).sum();
    let label_width = rows
        .iter()
        .map(|(label, _, _)| label.len())
        .chain(std::iter::once(label_header.len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "  {label_header:<label_width$}  {:>8}  {:>7}  {:>8}",
        "Hours", "Share", "Meetings"
    );
    for &(label, hours, count) in rows {
        let share = if view_total > 0.0 { hours / view_total * 100.0 } else { 0.0 };
        let _ = writeln!(
            out,
            "  {label:<label_width$}  {:>8}  {:>7}  {count:>8}",
            format!("{hours:.1}h"),
            format!("{share:.1}%"),
        );
    }

    out
}

/// Per-customer project sub-tables, in the pair view's sorted order.
fn project_breakdown(allocations: &[Allocation<'_>]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Projects by Customer");
    let _ = writeln!(out, "{}", "-".repeat("Projects by Customer".len()));

    let project_width =
        allocations.iter().map(|a| a.project_label().len()).max().unwrap_or(0);

    let mut current_customer: Option<&str> = None;
    for allocation in allocations {
        let customer = allocation.customer_label();
        if current_customer != Some(customer) {
            let _ = writeln!(out, "{customer}");
            current_customer = Some(customer);
        }
        let meetings_word = if allocation.meeting_count == 1 { "meeting" } else { "meetings" };
        let _ = writeln!(
            out,
            "  {:<project_width$}  {:>8}  {:>3} {meetings_word}",
            allocation.project_label(),
            format!("{:.1}h", allocation.total_hours),
            allocation.meeting_count,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use meetledger_domain::{
        ClassificationMethod, ClassificationResult, ClassifiedMeeting, Importance, MeetingRecord,
    };

    use super::*;

    fn meeting(
        id: &str,
        hours: i64,
        customer: Option<&str>,
        project: Option<&str>,
        category: &str,
    ) -> ClassifiedMeeting {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let record = MeetingRecord {
            id: id.to_string(),
            subject: format!("meeting {id}"),
            body: None,
            start,
            end: start + Duration::hours(hours),
            organizer: String::new(),
            attendees: Vec::new(),
            tags: Vec::new(),
            location: None,
            is_online_meeting: false,
            is_all_day: false,
            is_cancelled: false,
            importance: Importance::Normal,
        };
        let classification = ClassificationResult {
            customer: customer.map(ToString::to_string),
            project: project.map(ToString::to_string),
            category: category.to_string(),
            confidence: 0.75,
            rationale: vec![],
            method: ClassificationMethod::Rule,
        };
        ClassifiedMeeting::new(record, classification).unwrap()
    }

    fn sample_run() -> Vec<ClassifiedMeeting> {
        vec![
            meeting("m1", 2, Some("Contoso"), Some("Phase 2"), "Customer Meeting"),
            meeting("m2", 1, None, None, "Team Meeting"),
            meeting("m3", 3, Some("Fabrikam"), None, "Customer Meeting"),
            meeting("m4", 2, Some("Contoso"), None, "Customer Meeting"),
        ]
    }

    #[test]
    fn full_report_contains_every_section() {
        let run = sample_run();
        let calc = AllocationCalculator::new(&run);

        let report = full_report(&calc);

        assert!(report.contains("TIME ALLOCATION REPORT"));
        assert!(report.contains("Summary Statistics"));
        assert!(report.contains("Time Allocation by Customer"));
        assert!(report.contains("Time Allocation by Category"));
        assert!(report.contains("Projects by Customer"));
        assert!(report.contains("Total meetings:     4"));
        assert!(report.contains("Total hours:        8.0h"));
    }

    #[test]
    fn customer_table_shares_are_view_relative() {
        let run = sample_run();
        let calc = AllocationCalculator::new(&run);

        let report = full_report(&calc);

        // Contoso holds 4 of 8 hours, Fabrikam 3, Internal 1
        assert!(report.contains("50.0%"));
        assert!(report.contains("37.5%"));
        assert!(report.contains("12.5%"));
    }

    #[test]
    fn project_breakdown_uses_general_for_unassigned_hours() {
        let run = sample_run();
        let calc = AllocationCalculator::new(&run);

        let report = full_report(&calc);

        assert!(report.contains("Phase 2"));
        assert!(report.contains("General"));
        assert!(report.contains("1 meeting\n"));
    }

    #[test]
    fn project_breakdown_omitted_when_no_projects_assigned() {
        let run = vec![
            meeting("m1", 1, Some("Contoso"), None, "Customer Meeting"),
            meeting("m2", 1, None, None, "Team Meeting"),
        ];
        let calc = AllocationCalculator::new(&run);

        let report = full_report(&calc);
        assert!(!report.contains("Projects by Customer"));
    }

    #[test]
    fn empty_run_renders_placeholder_rows() {
        let run = Vec::new();
        let calc = AllocationCalculator::new(&run);

        let report = full_report(&calc);

        assert!(report.contains("Total meetings:     0"));
        assert!(report.contains("(none)"));
        assert!(!report.contains("Projects by Customer"));
    }

    #[test]
    fn insights_reports_unallocated_hours_and_top_customers() {
        let run = sample_run();
        let calc = AllocationCalculator::new(&run);

        let text = insights(&calc, 40.0, 5);

        assert!(text.contains("ADDITIONAL INSIGHTS"));
        assert!(text.contains("Unallocated hours (40h work week): 32.0h"));
        assert!(text.contains("1. Contoso: 50.0%"));
        assert!(text.contains("2. Fabrikam: 37.5%"));
        assert!(text.contains("3. Internal: 12.5%"));
    }
}
