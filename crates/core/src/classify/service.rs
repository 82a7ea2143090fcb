//! Rule-based classification service

use std::sync::Arc;

use meetledger_domain::constants::{
    CATEGORY_BLEND_WEIGHT, CUSTOMER_BLEND_WEIGHT, UNCATEGORIZED_CATEGORY,
};
use meetledger_domain::utils::text::combined_text;
use meetledger_domain::{
    ClassificationMethod, ClassificationResult, ClassifiedMeeting, MeetingRecord, Result, Taxonomy,
};
use tracing::{debug, info};

use super::category::resolve_category;
use super::customer::{resolve_customer, CustomerSignal};
use super::ports::SimilarityScorer;
use super::project::{resolve_project, ProjectSignal};
use super::scorer::PartialRatioScorer;

/// Deterministic rule-based classifier
///
/// Holds only the similarity scorer, so the service is cheap to clone and
/// share. `classify` is a pure function of the record and the taxonomy;
/// no state accumulates between calls.
#[derive(Clone)]
pub struct ClassificationService {
    scorer: Arc<dyn SimilarityScorer>,
}

impl ClassificationService {
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { scorer }
    }

    /// Service with the default partial-ratio scorer
    pub fn with_default_scorer() -> Self {
        Self::new(Arc::new(PartialRatioScorer::new()))
    }

    /// Classify a single meeting record against the taxonomy
    ///
    /// Runs customer detection, project detection, and category resolution
    /// over the lowercased combined subject/body, then blends the customer
    /// and category weights into the overall confidence. Project evidence
    /// contributes a rationale line but never moves the confidence.
    pub fn classify(&self, record: &MeetingRecord, taxonomy: &Taxonomy) -> ClassificationResult {
        let text = combined_text(&record.subject, record.body.as_deref());
        let attendee_emails = record.attendee_emails();

        let customer =
            resolve_customer(&text, &attendee_emails, &record.tags, taxonomy, self.scorer.as_ref());
        let project = resolve_project(&text, taxonomy, self.scorer.as_ref());
        let category =
            resolve_category(&text, &attendee_emails, customer.is_some(), taxonomy);

        let confidence = match &customer {
            Some(signal) => {
                signal.confidence() * CUSTOMER_BLEND_WEIGHT
                    + category.confidence() * CATEGORY_BLEND_WEIGHT
            }
            None => category.confidence(),
        };

        let mut rationale = Vec::with_capacity(3);
        if let Some(signal) = &customer {
            rationale.push(signal.reason());
        }
        if let Some(signal) = &project {
            rationale.push(signal.reason());
        }
        rationale.push(category.reason());

        ClassificationResult {
            customer: customer.map(CustomerSignal::into_customer),
            project: project.map(ProjectSignal::into_project),
            category: category.into_label(),
            confidence,
            rationale,
            method: ClassificationMethod::Rule,
        }
    }

    /// Classify a whole batch into enriched meetings
    ///
    /// Fails fast on the first invalid record (negative duration) rather
    /// than dropping it silently.
    ///
    /// # Errors
    /// Returns `MeetLedgerError::InvalidRecord` when a record's end precedes
    /// its start.
    pub fn classify_all(
        &self,
        records: Vec<MeetingRecord>,
        taxonomy: &Taxonomy,
    ) -> Result<Vec<ClassifiedMeeting>> {
        let record_count = records.len();
        let mut with_customer = 0_usize;
        let mut uncategorized = 0_usize;

        let mut meetings = Vec::with_capacity(record_count);
        for record in records {
            let classification = self.classify(&record, taxonomy);
            if classification.customer.is_some() {
                with_customer += 1;
            }
            if classification.category == UNCATEGORIZED_CATEGORY {
                uncategorized += 1;
            }
            debug!(
                record_id = %record.id,
                customer = ?classification.customer,
                category = %classification.category,
                confidence = classification.confidence,
                "record classified"
            );
            meetings.push(ClassifiedMeeting::new(record, classification)?);
        }

        info!(
            records = record_count,
            with_customer, uncategorized, "classification batch complete"
        );
        Ok(meetings)
    }
}

impl Default for ClassificationService {
    fn default() -> Self {
        Self::with_default_scorer()
    }
}

impl std::fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use meetledger_domain::{Attendee, CategoryRule, Customer, Importance, Project, ProjectKind};

    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(
            vec![
                Customer {
                    name: "Contoso".to_string(),
                    aliases: vec!["Contoso Ltd".to_string()],
                    domains: vec!["contoso.com".to_string()],
                    color: "#E17055".to_string(),
                },
                Customer {
                    name: "Fabrikam".to_string(),
                    aliases: vec![],
                    domains: vec!["fabrikam.com".to_string()],
                    color: "#00B894".to_string(),
                },
            ],
            vec![Project {
                name: "Phase 2".to_string(),
                aliases: vec![],
                customer: Some("Contoso".to_string()),
                kind: ProjectKind::Customer,
                active: true,
            }],
            vec![
                CategoryRule {
                    name: "Team Meeting".to_string(),
                    description: "Recurring team syncs".to_string(),
                    keywords: vec!["standup".to_string(), "sprint planning".to_string()],
                    color: "#0984E3".to_string(),
                    priority: 10,
                },
                CategoryRule {
                    name: "Training".to_string(),
                    description: String::new(),
                    keywords: vec!["training".to_string()],
                    color: "#6C5CE7".to_string(),
                    priority: 5,
                },
            ],
        )
    }

    fn record(subject: &str, body: Option<&str>, attendees: &[&str]) -> MeetingRecord {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        MeetingRecord {
            id: "rec-1".to_string(),
            subject: subject.to_string(),
            body: body.map(ToString::to_string),
            start,
            end: start + Duration::hours(1),
            organizer: String::new(),
            attendees: attendees.iter().map(|email| Attendee::new(*email, "")).collect(),
            tags: Vec::new(),
            location: None,
            is_online_meeting: false,
            is_all_day: false,
            is_cancelled: false,
            importance: Importance::Normal,
        }
    }

    #[test]
    fn prefix_customer_blends_confidence() {
        // AC: 0.90 customer * 0.6 + 0.85 category * 0.4 = 0.88
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(&record("Contoso - Kickoff", None, &[]), &taxonomy());

        assert_eq!(result.customer.as_deref(), Some("Contoso"));
        assert_eq!(result.category, "Customer Meeting");
        assert!((result.confidence - 0.88).abs() < 1e-6);
        assert_eq!(result.method, ClassificationMethod::Rule);
    }

    #[test]
    fn bracket_customer_blends_to_095() {
        // 0.95 * 0.6 + 0.85 * 0.4 = 0.91
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(&record("[Contoso] Steering", None, &[]), &taxonomy());

        assert_eq!(result.customer.as_deref(), Some("Contoso"));
        assert!((result.confidence - 0.91).abs() < 1e-6);
    }

    #[test]
    fn category_only_confidence_is_unblended() {
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(&record("Daily Standup", None, &[]), &taxonomy());

        assert_eq!(result.customer, None);
        assert_eq!(result.category, "Team Meeting");
        assert!((result.confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn project_contributes_rationale_but_not_confidence() {
        let service = ClassificationService::with_default_scorer();
        let result =
            service.classify(&record("Daily Standup for Phase 2", None, &[]), &taxonomy());

        assert_eq!(result.project.as_deref(), Some("Phase 2"));
        assert!(result.rationale.iter().any(|line| line == "Project 'Phase 2' mentioned"));
        // Same confidence as without the project mention
        assert!((result.confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn internal_meeting_from_attendee_domains() {
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(
            &record("Roadmap Discussion", None, &["a@company.com", "b@company.com"]),
            &taxonomy(),
        );

        assert_eq!(result.customer, None);
        assert_eq!(result.category, "Internal Meeting");
        assert!((result.confidence - 0.60).abs() < 1e-6);
    }

    #[test]
    fn uncategorized_fallback() {
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(&record("Untitled", None, &[]), &taxonomy());

        assert_eq!(result.category, "Uncategorized");
        assert!((result.confidence - 0.30).abs() < 1e-6);
        assert_eq!(result.rationale_trail(), "No category patterns detected");
    }

    #[test]
    fn body_participates_in_matching() {
        let service = ClassificationService::with_default_scorer();
        let result = service.classify(
            &record("Weekly Sync", Some("Agenda: Contoso onboarding next steps"), &[]),
            &taxonomy(),
        );

        assert_eq!(result.customer.as_deref(), Some("Contoso"));
    }

    #[test]
    fn classification_is_deterministic() {
        let service = ClassificationService::with_default_scorer();
        let rec = record("Fabrikam: Architecture Review", None, &["x@fabrikam.com"]);
        let tax = taxonomy();

        let first = service.classify(&rec, &tax);
        let second = service.classify(&rec, &tax);
        assert_eq!(first, second);
    }

    #[test]
    fn classify_all_enriches_and_counts() {
        let service = ClassificationService::with_default_scorer();
        let records = vec![
            record("Contoso - Kickoff", None, &[]),
            record("Daily Standup", None, &[]),
            record("Untitled", None, &[]),
        ];

        let meetings = service.classify_all(records, &taxonomy()).unwrap();
        assert_eq!(meetings.len(), 3);
        assert!((meetings[0].duration_hours - 1.0).abs() < 1e-9);
        assert!(meetings.iter().all(|m| m.prep_hours == 0.0 && m.follow_up_hours == 0.0));
    }

    #[test]
    fn classify_all_rejects_negative_duration() {
        let service = ClassificationService::with_default_scorer();
        let mut rec = record("Backwards", None, &[]);
        rec.end = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();

        let err = service.classify_all(vec![rec], &taxonomy()).unwrap_err();
        assert!(err.to_string().contains("Invalid record"));
    }

    #[test]
    fn injected_scorer_is_used() {
        struct NeverMatches;
        impl SimilarityScorer for NeverMatches {
            fn score(&self, _needle: &str, _haystack: &str) -> u8 {
                0
            }
        }

        let service = ClassificationService::new(Arc::new(NeverMatches));
        // Would fuzzy-match with the default scorer; the stub kills it
        let result = service.classify(&record("dinner with contoso folks", None, &[]), &taxonomy());
        assert_eq!(result.customer, None);
    }
}
