//! Category resolution
//!
//! Category is decided after customer detection: any customer evidence
//! forces the customer-meeting category, otherwise keyword rules apply in
//! priority order, then the all-internal-attendees check, then the
//! uncategorized fallback.

use meetledger_domain::constants::{
    CATEGORY_KEYWORD_CONFIDENCE, CUSTOMER_MEETING_CATEGORY, CUSTOMER_MEETING_CONFIDENCE,
    INTERNAL_DOMAINS, INTERNAL_MEETING_CATEGORY, INTERNAL_MEETING_CONFIDENCE,
    UNCATEGORIZED_CATEGORY, UNCATEGORIZED_CONFIDENCE,
};
use meetledger_domain::utils::text::email_domain;
use meetledger_domain::Taxonomy;

/// How the category was decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySignal {
    /// Customer evidence exists, so the meeting is external-facing
    CustomerMeeting,
    /// A keyword rule matched; carries the keyword as declared (original case)
    Keyword { category: String, keyword: String },
    /// Attendee list is non-empty and every domain is internal
    AllInternal,
    /// Nothing matched
    Uncategorized,
}

impl CategorySignal {
    /// Category label this signal resolves to
    pub fn label(&self) -> &str {
        match self {
            Self::CustomerMeeting => CUSTOMER_MEETING_CATEGORY,
            Self::Keyword { category, .. } => category,
            Self::AllInternal => INTERNAL_MEETING_CATEGORY,
            Self::Uncategorized => UNCATEGORIZED_CATEGORY,
        }
    }

    /// Fixed confidence weight for this kind of evidence
    pub fn confidence(&self) -> f32 {
        match self {
            Self::CustomerMeeting => CUSTOMER_MEETING_CONFIDENCE,
            Self::Keyword { .. } => CATEGORY_KEYWORD_CONFIDENCE,
            Self::AllInternal => INTERNAL_MEETING_CONFIDENCE,
            Self::Uncategorized => UNCATEGORIZED_CONFIDENCE,
        }
    }

    /// Human-readable rationale line for this signal
    pub fn reason(&self) -> String {
        match self {
            Self::CustomerMeeting => "Meeting with external customer".to_string(),
            Self::Keyword { category, keyword } => {
                format!("Keyword '{keyword}' matched for {category}")
            }
            Self::AllInternal => "All attendees from internal domain".to_string(),
            Self::Uncategorized => "No category patterns detected".to_string(),
        }
    }

    /// Consume the signal, yielding the owned category label
    pub fn into_label(self) -> String {
        match self {
            Self::CustomerMeeting => CUSTOMER_MEETING_CATEGORY.to_string(),
            Self::Keyword { category, .. } => category,
            Self::AllInternal => INTERNAL_MEETING_CATEGORY.to_string(),
            Self::Uncategorized => UNCATEGORIZED_CATEGORY.to_string(),
        }
    }
}

/// Decide the category for one record
///
/// Keyword rules run in the taxonomy's priority order; rules without
/// keywords are skipped rather than treated as match-alls. The internal
/// check only fires for a non-empty attendee list, so solo focus blocks
/// stay uncategorized.
pub fn resolve_category(
    text: &str,
    attendee_emails: &[&str],
    has_customer: bool,
    taxonomy: &Taxonomy,
) -> CategorySignal {
    if has_customer {
        return CategorySignal::CustomerMeeting;
    }

    for rule in taxonomy.categories() {
        if rule.keywords.is_empty() {
            continue;
        }
        for keyword in &rule.keywords {
            if text.contains(&keyword.to_lowercase()) {
                return CategorySignal::Keyword {
                    category: rule.name.clone(),
                    keyword: keyword.clone(),
                };
            }
        }
    }

    if !attendee_emails.is_empty() {
        let all_internal = attendee_emails.iter().all(|email| {
            email_domain(email)
                .map_or(false, |domain| INTERNAL_DOMAINS.contains(&domain.as_str()))
        });
        if all_internal {
            return CategorySignal::AllInternal;
        }
    }

    CategorySignal::Uncategorized
}

#[cfg(test)]
mod tests {
    use meetledger_domain::{CategoryRule, Customer, Project, Taxonomy};

    use super::*;

    fn rule(name: &str, keywords: &[&str], priority: i32) -> CategoryRule {
        CategoryRule {
            name: name.to_string(),
            description: String::new(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            color: "#B2BEC3".to_string(),
            priority,
        }
    }

    fn taxonomy(rules: Vec<CategoryRule>) -> Taxonomy {
        Taxonomy::new(Vec::<Customer>::new(), Vec::<Project>::new(), rules)
    }

    #[test]
    fn customer_evidence_forces_customer_meeting() {
        let signal = resolve_category(
            "standup with the team",
            &[],
            true,
            &taxonomy(vec![rule("Team Meeting", &["standup"], 10)]),
        );
        assert_eq!(signal, CategorySignal::CustomerMeeting);
        assert_eq!(signal.label(), "Customer Meeting");
    }

    #[test]
    fn higher_priority_rule_wins() {
        // AC: both keywords appear; the priority 10 rule is checked first
        let signal = resolve_category(
            "training session during the standup",
            &[],
            false,
            &taxonomy(vec![
                rule("Training", &["training"], 5),
                rule("Team Meeting", &["standup"], 10),
            ]),
        );
        assert_eq!(
            signal,
            CategorySignal::Keyword {
                category: "Team Meeting".to_string(),
                keyword: "standup".to_string(),
            }
        );
    }

    #[test]
    fn keyword_keeps_declared_case_in_reason() {
        let signal = resolve_category(
            "quarterly all hands recap",
            &[],
            false,
            &taxonomy(vec![rule("Company Event", &["All Hands"], 0)]),
        );
        match &signal {
            CategorySignal::Keyword { keyword, .. } => assert_eq!(keyword, "All Hands"),
            other => panic!("expected keyword signal, got {other:?}"),
        }
        assert_eq!(signal.reason(), "Keyword 'All Hands' matched for Company Event");
    }

    #[test]
    fn empty_keyword_rules_are_skipped() {
        let signal = resolve_category(
            "misc discussion",
            &[],
            false,
            &taxonomy(vec![rule("Catch All", &[], 100)]),
        );
        assert_eq!(signal, CategorySignal::Uncategorized);
    }

    #[test]
    fn all_internal_attendees() {
        let signal = resolve_category(
            "roadmap discussion",
            &["a@company.com", "b@microsoft.com"],
            false,
            &taxonomy(vec![]),
        );
        assert_eq!(signal, CategorySignal::AllInternal);
        assert_eq!(signal.label(), "Internal Meeting");
    }

    #[test]
    fn one_external_attendee_breaks_internal() {
        let signal = resolve_category(
            "roadmap discussion",
            &["a@company.com", "guest@contoso.com"],
            false,
            &taxonomy(vec![]),
        );
        assert_eq!(signal, CategorySignal::Uncategorized);
    }

    #[test]
    fn empty_attendee_list_is_not_internal() {
        let signal = resolve_category("solo focus block", &[], false, &taxonomy(vec![]));
        assert_eq!(signal, CategorySignal::Uncategorized);
        assert_eq!(signal.reason(), "No category patterns detected");
    }

    #[test]
    fn internal_check_uses_extracted_domain() {
        // A display-name lookalike must not pass as internal
        let signal = resolve_category(
            "sync",
            &["company.com@evil.example"],
            false,
            &taxonomy(vec![]),
        );
        assert_eq!(signal, CategorySignal::Uncategorized);
    }
}
