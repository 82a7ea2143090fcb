//! Fixture meeting source
//!
//! A deterministic, in-memory `MeetingSource` modeling one consulting week:
//! customer calls, internal syncs, training, and a focus block. Used by the
//! demo command and by integration tests so no calendar backend is needed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use meetledger_core::MeetingSource;
use meetledger_domain::{
    Attendee, CategoryRule, Customer, Importance, MeetingRecord, Project, ProjectKind, Result,
    Taxonomy,
};
use tracing::debug;

/// In-memory meeting source with one fixed week of records
///
/// Records are generated once at construction and cloned out on fetch, so
/// repeated fetches over the same range always return identical data.
#[derive(Debug, Clone)]
pub struct FixtureMeetingSource {
    records: Vec<MeetingRecord>,
}

impl FixtureMeetingSource {
    /// Source anchored at the default fixture week (Monday 2025-03-10, 09:00 UTC)
    pub fn new() -> Self {
        let monday = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).single().unwrap_or_default();
        Self::anchored_at(monday)
    }

    /// Source with the fixture week starting at the given Monday morning
    pub fn anchored_at(monday_morning: DateTime<Utc>) -> Self {
        Self { records: fixture_week(monday_morning) }
    }

    /// All records, ignoring any range
    pub fn records(&self) -> &[MeetingRecord] {
        &self.records
    }

    /// Earliest and latest record start, the range that fetches everything
    pub fn coverage(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let first = self.records.iter().map(|r| r.start).min().unwrap_or_default();
        let last = self.records.iter().map(|r| r.start).max().unwrap_or_default();
        (first, last)
    }
}

impl Default for FixtureMeetingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MeetingSource for FixtureMeetingSource {
    fn fetch_meetings(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MeetingRecord>> {
        let records: Vec<MeetingRecord> = self
            .records
            .iter()
            .filter(|record| record.start >= start && record.start <= end)
            .cloned()
            .collect();
        debug!(total = self.records.len(), matched = records.len(), "fixture fetch");
        Ok(records)
    }
}

/// Built-in taxonomy matching the fixture week
///
/// Serves as the fallback when no taxonomy file is configured, so a fresh
/// checkout classifies the demo data sensibly out of the box.
pub fn default_taxonomy() -> Taxonomy {
    let customers = vec![
        customer("Contoso", &["Contoso Ltd"], &["contoso.com"], "#E17055"),
        customer("Fabrikam", &[], &["fabrikam.com"], "#00B894"),
        customer("AdventureWorks", &["Adventure Works"], &["adventureworks.com"], "#FDCB6E"),
        customer("Northwind", &["Northwind Traders"], &["northwind.com"], "#74B9FF"),
    ];

    let projects = vec![
        project("Phase 2", &[], Some("Contoso"), ProjectKind::Customer, true),
        project("Cloud Migration", &[], Some("Fabrikam"), ProjectKind::Customer, true),
        project("CRM Implementation", &["CRM Impl"], Some("AdventureWorks"), ProjectKind::Customer, true),
        project("Hiring", &[], None, ProjectKind::Internal, true),
        project("Legacy Migration", &[], None, ProjectKind::Internal, false),
    ];

    let categories = vec![
        category("Team Meeting", "Recurring team ceremonies", &["standup", "sprint planning", "sprint review", "retrospective"], "#0984E3", 10),
        category("1:1", "One-on-one conversations", &["1:1", "one-on-one"], "#A29BFE", 9),
        category("Training", "Learning and enablement", &["training", "workshop"], "#6C5CE7", 8),
        category("Company Event", "Company-wide gatherings", &["all hands", "town hall", "social hour"], "#FAB1A0", 6),
        category("Development", "Engineering collaboration", &["code review", "pair programming"], "#55EFC4", 5),
        category("Focus Time", "Blocked individual work", &["focus time", "documentation"], "#81ECEC", 4),
    ];

    Taxonomy::new(customers, projects, categories)
}

fn customer(name: &str, aliases: &[&str], domains: &[&str], color: &str) -> Customer {
    Customer {
        name: name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        domains: domains.iter().map(ToString::to_string).collect(),
        color: color.to_string(),
    }
}

fn project(
    name: &str,
    aliases: &[&str],
    customer: Option<&str>,
    kind: ProjectKind,
    active: bool,
) -> Project {
    Project {
        name: name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        customer: customer.map(ToString::to_string),
        kind,
        active,
    }
}

fn category(name: &str, description: &str, keywords: &[&str], color: &str, priority: i32) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        color: color.to_string(),
        priority,
    }
}

fn meeting(
    id: &str,
    subject: &str,
    body: Option<&str>,
    organizer: &str,
    attendees: Vec<Attendee>,
    start: DateTime<Utc>,
    minutes: i64,
) -> MeetingRecord {
    MeetingRecord {
        id: id.to_string(),
        subject: subject.to_string(),
        body: body.map(ToString::to_string),
        start,
        end: start + Duration::minutes(minutes),
        organizer: organizer.to_string(),
        attendees,
        tags: Vec::new(),
        location: None,
        is_online_meeting: true,
        is_all_day: false,
        is_cancelled: false,
        importance: Importance::Normal,
    }
}

/// One work week of records, Monday through Friday
#[allow(clippy::too_many_lines)]
fn fixture_week(monday: DateTime<Utc>) -> Vec<MeetingRecord> {
    let day = |offset: i64| monday + Duration::days(offset);
    let at = |base: DateTime<Utc>, hours: i64, minutes: i64| {
        base + Duration::hours(hours) + Duration::minutes(minutes)
    };

    let mut standup = meeting(
        "evt_001",
        "Weekly Standup - Product Team",
        None,
        "manager@company.com",
        vec![Attendee::new("dev1@company.com", "Dev One"), Attendee::new("dev2@company.com", "Dev Two")],
        day(0),
        30,
    );
    standup.tags = vec!["Team Meeting".to_string()];

    let mut contoso_review = meeting(
        "evt_002",
        "Contoso Client - Requirements Review",
        Some("Discuss requirements for Phase 2 implementation. Prepare demo."),
        "you@company.com",
        vec![
            Attendee::new("client@contoso.com", "Jane Client"),
            Attendee::new("pm@company.com", "Project Manager"),
        ],
        at(day(0), 2, 0),
        60,
    );
    contoso_review.importance = Importance::High;

    let mut fabrikam_architecture = meeting(
        "evt_003",
        "Azure Architecture Review - Fabrikam",
        Some("Review cloud migration architecture for Fabrikam's infrastructure."),
        "architect@fabrikam.com",
        vec![
            Attendee::new("you@company.com", "You"),
            Attendee::new("engineer@fabrikam.com", "Lead Engineer"),
        ],
        at(day(0), 5, 0),
        90,
    );
    fabrikam_architecture.location = Some("Teams".to_string());

    let mut one_on_one = meeting(
        "evt_004",
        "1:1 with Manager",
        None,
        "manager@company.com",
        vec![Attendee::new("you@company.com", "You")],
        at(day(1), 1, 0),
        30,
    );
    one_on_one.tags = vec!["1:1".to_string()];

    let mut sprint_planning = meeting(
        "evt_005",
        "AdventureWorks - Sprint Planning",
        Some("Plan Sprint 12 for AdventureWorks CRM implementation"),
        "scrum@adventureworks.com",
        vec![
            Attendee::new("you@company.com", "You"),
            Attendee::new("dev@adventureworks.com", "Dev Team"),
            Attendee::new("po@adventureworks.com", "Product Owner"),
        ],
        at(day(1), 3, 0),
        120,
    );
    sprint_planning.importance = Importance::High;

    let all_hands = meeting(
        "evt_006",
        "Internal: All Hands Meeting",
        Some("Quarterly company update and roadmap"),
        "ceo@company.com",
        Vec::new(),
        at(day(1), 6, 0),
        60,
    );

    let deep_dive = meeting(
        "evt_007",
        "Contoso Technical Deep Dive",
        Some("Deep dive into API integration requirements for Contoso project"),
        "you@company.com",
        vec![
            Attendee::new("tech@contoso.com", "Tech Lead"),
            Attendee::new("dev@contoso.com", "Senior Developer"),
        ],
        at(day(2), 2, 0),
        120,
    );

    let mut training = meeting(
        "evt_008",
        "Training: Azure AI Services",
        Some("Learn about new Azure OpenAI features"),
        "training@company.com",
        Vec::new(),
        at(day(2), 5, 0),
        90,
    );
    training.tags = vec!["Training".to_string()];

    let fabrikam_status = meeting(
        "evt_009",
        "Fabrikam Project Status",
        Some("Weekly status update for Fabrikam cloud migration"),
        "pm@fabrikam.com",
        vec![
            Attendee::new("you@company.com", "You"),
            Attendee::new("stakeholder@fabrikam.com", "Stakeholder"),
        ],
        at(day(3), 1, 0),
        60,
    );

    let mut sales_demo = meeting(
        "evt_010",
        "Sales Demo - Northwind Traders",
        Some("Product demonstration for potential new client Northwind Traders"),
        "sales@company.com",
        vec![
            Attendee::new("you@company.com", "You"),
            Attendee::new("decision@northwind.com", "Decision Maker"),
        ],
        at(day(3), 3, 0),
        60,
    );
    sales_demo.importance = Importance::High;

    let mut code_review = meeting(
        "evt_011",
        "Code Review Session",
        Some("Review pull requests and provide mentoring"),
        "you@company.com",
        vec![Attendee::new("junior@company.com", "Junior Dev")],
        at(day(3), 5, 0),
        60,
    );
    code_review.tags = vec!["Development".to_string()];

    let sprint_review = meeting(
        "evt_012",
        "AdventureWorks Sprint Review",
        Some("Demo completed work from Sprint 11"),
        "po@adventureworks.com",
        vec![
            Attendee::new("you@company.com", "You"),
            Attendee::new("team@adventureworks.com", "Scrum Team"),
        ],
        at(day(4), 1, 0),
        90,
    );

    let mut social = meeting(
        "evt_013",
        "Team Social Hour",
        Some("Virtual team social and games"),
        "team@company.com",
        Vec::new(),
        at(day(4), 4, 0),
        60,
    );
    social.tags = vec!["Social".to_string()];

    let mut focus = meeting(
        "evt_014",
        "Focus Time - Documentation",
        Some("Catch up on project documentation"),
        "you@company.com",
        Vec::new(),
        at(day(4), 5, 30),
        90,
    );
    focus.is_online_meeting = false;
    focus.tags = vec!["Focus Time".to_string()];

    vec![
        standup,
        contoso_review,
        fabrikam_architecture,
        one_on_one,
        sprint_planning,
        all_hands,
        deep_dive,
        training,
        fabrikam_status,
        sales_demo,
        code_review,
        sprint_review,
        social,
        focus,
    ]
}
