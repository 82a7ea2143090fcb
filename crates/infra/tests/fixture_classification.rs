//! Integration tests for the fixture week
//!
//! Runs the real classification service over the fixture meeting source
//! with the built-in default taxonomy and checks the resulting allocation
//! report end to end.

use chrono::{Duration, TimeZone, Utc};
use meetledger_core::{AllocationCalculator, ClassificationService, MeetingSource};
use meetledger_infra::fixtures::{default_taxonomy, FixtureMeetingSource};

fn classify_fixture_week() -> Vec<meetledger_domain::ClassifiedMeeting> {
    let monday = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
    let source = FixtureMeetingSource::new();
    let records = source.fetch_meetings(monday, monday + Duration::days(7)).unwrap();
    assert_eq!(records.len(), 14, "fixture week should be complete");

    ClassificationService::with_default_scorer()
        .classify_all(records, &default_taxonomy())
        .unwrap()
}

#[test]
fn test_fixture_week_customer_detection() {
    let meetings = classify_fixture_week();

    let customer_of = |id: &str| {
        meetings
            .iter()
            .find(|m| m.record.id == id)
            .and_then(|m| m.classification.customer.clone())
    };

    assert_eq!(customer_of("evt_002").as_deref(), Some("Contoso"));
    assert_eq!(customer_of("evt_003").as_deref(), Some("Fabrikam"));
    assert_eq!(customer_of("evt_005").as_deref(), Some("AdventureWorks"));
    assert_eq!(customer_of("evt_007").as_deref(), Some("Contoso"));
    assert_eq!(customer_of("evt_009").as_deref(), Some("Fabrikam"));
    assert_eq!(customer_of("evt_010").as_deref(), Some("Northwind"));
    assert_eq!(customer_of("evt_012").as_deref(), Some("AdventureWorks"));

    // Internal meetings stay customer-free
    for id in ["evt_001", "evt_004", "evt_006", "evt_008", "evt_011", "evt_013", "evt_014"] {
        assert_eq!(customer_of(id), None, "{id} should have no customer");
    }
}

#[test]
fn test_fixture_week_category_spread() {
    let meetings = classify_fixture_week();

    let category_of = |id: &str| {
        meetings
            .iter()
            .find(|m| m.record.id == id)
            .map(|m| m.classification.category.clone())
            .unwrap()
    };

    assert_eq!(category_of("evt_001"), "Team Meeting");
    assert_eq!(category_of("evt_004"), "1:1");
    assert_eq!(category_of("evt_006"), "Company Event");
    assert_eq!(category_of("evt_008"), "Training");
    assert_eq!(category_of("evt_011"), "Development");
    assert_eq!(category_of("evt_013"), "Company Event");
    assert_eq!(category_of("evt_014"), "Focus Time");

    // Customer evidence wins over a keyword that would also match
    assert_eq!(category_of("evt_012"), "Customer Meeting");

    let customer_meetings =
        meetings.iter().filter(|m| m.classification.category == "Customer Meeting").count();
    assert_eq!(customer_meetings, 7);
}

#[test]
fn test_fixture_week_project_detection() {
    let meetings = classify_fixture_week();

    let project_of = |id: &str| {
        meetings
            .iter()
            .find(|m| m.record.id == id)
            .and_then(|m| m.classification.project.clone())
    };

    assert_eq!(project_of("evt_002").as_deref(), Some("Phase 2"));
    assert_eq!(project_of("evt_003").as_deref(), Some("Cloud Migration"));
    assert_eq!(project_of("evt_005").as_deref(), Some("CRM Implementation"));
    assert_eq!(project_of("evt_009").as_deref(), Some("Cloud Migration"));
    assert_eq!(project_of("evt_001"), None);
}

#[test]
fn test_fixture_week_allocation_report() {
    let meetings = classify_fixture_week();
    let calculator = AllocationCalculator::new(&meetings);

    assert!((calculator.total_meeting_hours() - 17.0).abs() < 1e-9);

    let by_customer = calculator.by_customer();
    let labels: Vec<_> = by_customer.iter().map(|b| b.customer.as_deref().unwrap()).collect();
    assert_eq!(labels, ["Internal", "AdventureWorks", "Contoso", "Fabrikam", "Northwind"]);
    assert!((by_customer[0].total_hours - 7.0).abs() < 1e-9);
    assert!((by_customer[1].total_hours - 3.5).abs() < 1e-9);

    let stats = calculator.summary_stats();
    assert_eq!(stats.total_meetings, 14);
    assert_eq!(stats.customer_count, 4);
    assert_eq!(stats.category_count, 7);
    assert!((stats.avg_meeting_length - 17.0 / 14.0).abs() < 1e-9);

    // A 40 hour week leaves 23 hours unclassified
    assert!((calculator.unallocated_hours(40.0, 5) - 23.0).abs() < 1e-9);
}

#[test]
fn test_fixture_confidences_follow_signal_weights() {
    let meetings = classify_fixture_week();

    let confidence_of = |id: &str| {
        meetings.iter().find(|m| m.record.id == id).map(|m| m.classification.confidence).unwrap()
    };

    // Prefix match: 0.90 * 0.6 + 0.85 * 0.4
    assert!((confidence_of("evt_005") - 0.88).abs() < 1e-6);
    // Fuzzy + domain agreement lands on the same blend
    assert!((confidence_of("evt_002") - 0.88).abs() < 1e-6);
    // Keyword-only categories sit at the keyword weight
    assert!((confidence_of("evt_001") - 0.75).abs() < 1e-6);
    // Nothing in the fixture week should be uncategorized
    assert!(meetings.iter().all(|m| m.classification.category != "Uncategorized"));
}
