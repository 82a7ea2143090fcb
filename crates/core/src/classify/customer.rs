//! Customer detection heuristics
//!
//! Five heuristics run in strict priority order and the first hit wins:
//! bracketed token, prefix, fuzzy/domain evidence, then record tags.
//! Each signal carries a fixed confidence weight so identical inputs
//! always classify identically.

use meetledger_domain::constants::{
    BRACKET_CONFIDENCE, CUSTOMER_FUZZY_STRONG_THRESHOLD, CUSTOMER_FUZZY_THRESHOLD,
    DOMAIN_CONFIDENCE, FUZZY_AND_DOMAIN_CONFIDENCE, FUZZY_STRONG_CONFIDENCE,
    FUZZY_WEAK_CONFIDENCE, PREFIX_CONFIDENCE, TAG_CONFIDENCE,
};
use meetledger_domain::utils::text::{email_domain, first_bracket_token};
use meetledger_domain::{Customer, Taxonomy};

use super::ports::SimilarityScorer;

/// How a customer was detected, with the evidence that produced the match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSignal {
    /// A bracketed token in the subject matched a known name or alias
    Bracket { name: String },
    /// The combined text starts with `<name> -` or `<name>:`
    Prefix { name: String },
    /// Fuzzy text evidence and an attendee domain named the same customer
    FuzzyAndDomain { name: String },
    /// An attendee email domain matched the customer's domain list
    Domain { name: String },
    /// Fuzzy text evidence only
    Fuzzy { name: String, score: u8 },
    /// A free-form tag on the record equals a known name or alias
    Tag { name: String },
}

impl CustomerSignal {
    /// Canonical customer name this signal resolved to
    pub fn customer(&self) -> &str {
        match self {
            Self::Bracket { name }
            | Self::Prefix { name }
            | Self::FuzzyAndDomain { name }
            | Self::Domain { name }
            | Self::Fuzzy { name, .. }
            | Self::Tag { name } => name,
        }
    }

    /// Fixed confidence weight for this kind of evidence
    pub fn confidence(&self) -> f32 {
        match self {
            Self::Bracket { .. } => BRACKET_CONFIDENCE,
            Self::Prefix { .. } => PREFIX_CONFIDENCE,
            Self::FuzzyAndDomain { .. } => FUZZY_AND_DOMAIN_CONFIDENCE,
            Self::Domain { .. } => DOMAIN_CONFIDENCE,
            Self::Fuzzy { score, .. } => {
                if *score >= CUSTOMER_FUZZY_STRONG_THRESHOLD {
                    FUZZY_STRONG_CONFIDENCE
                } else {
                    FUZZY_WEAK_CONFIDENCE
                }
            }
            Self::Tag { .. } => TAG_CONFIDENCE,
        }
    }

    /// Human-readable rationale line for this signal
    pub fn reason(&self) -> String {
        match self {
            Self::Bracket { name } => format!("Customer '{name}' in brackets"),
            Self::Prefix { name } => format!("Customer '{name}' as prefix"),
            Self::FuzzyAndDomain { name } => {
                format!("Customer '{name}' matched by name and attendee domain")
            }
            Self::Domain { name } => format!("Customer '{name}' matched by attendee domain"),
            Self::Fuzzy { name, .. } => format!("Customer '{name}' fuzzy matched in text"),
            Self::Tag { name } => format!("Customer '{name}' from record tag"),
        }
    }

    /// Consume the signal, yielding the canonical customer name
    pub fn into_customer(self) -> String {
        match self {
            Self::Bracket { name }
            | Self::Prefix { name }
            | Self::FuzzyAndDomain { name }
            | Self::Domain { name }
            | Self::Fuzzy { name, .. }
            | Self::Tag { name } => name,
        }
    }
}

/// Run the customer heuristics in priority order over one record's evidence
///
/// `text` must already be the lowercased combined subject/body. Declaration
/// order in the taxonomy breaks ties at every step, so results are stable
/// across runs.
pub fn resolve_customer(
    text: &str,
    attendee_emails: &[&str],
    tags: &[String],
    taxonomy: &Taxonomy,
    scorer: &dyn SimilarityScorer,
) -> Option<CustomerSignal> {
    if let Some(signal) = bracket_match(text, taxonomy) {
        return Some(signal);
    }
    if let Some(signal) = prefix_match(text, taxonomy) {
        return Some(signal);
    }

    let fuzzy = best_fuzzy_match(text, taxonomy, scorer);
    let domain = domain_match(attendee_emails, taxonomy);

    match (fuzzy, domain) {
        (Some((fuzzy_customer, _)), Some(domain_customer))
            if fuzzy_customer.name == domain_customer.name =>
        {
            return Some(CustomerSignal::FuzzyAndDomain { name: domain_customer.name.clone() });
        }
        // Attendee domains are authoritative, so a disagreeing fuzzy hit loses
        (_, Some(domain_customer)) => {
            return Some(CustomerSignal::Domain { name: domain_customer.name.clone() });
        }
        (Some((fuzzy_customer, score)), None) => {
            return Some(CustomerSignal::Fuzzy { name: fuzzy_customer.name.clone(), score });
        }
        (None, None) => {}
    }

    tag_match(tags, taxonomy)
}

/// First non-empty bracketed token, trimmed, matched against names and aliases
fn bracket_match(text: &str, taxonomy: &Taxonomy) -> Option<CustomerSignal> {
    let token = first_bracket_token(text)?.trim();
    taxonomy
        .customer_by_name(token)
        .map(|customer| CustomerSignal::Bracket { name: customer.name.clone() })
}

/// Text starting with `<name> -` or `<name>:` for any name or alias
fn prefix_match(text: &str, taxonomy: &Taxonomy) -> Option<CustomerSignal> {
    for customer in taxonomy.customers() {
        for name in customer.names() {
            let name_lower = name.to_lowercase();
            if let Some(rest) = text.strip_prefix(&name_lower) {
                if rest.starts_with(" -") || rest.starts_with(':') {
                    return Some(CustomerSignal::Prefix { name: customer.name.clone() });
                }
            }
        }
    }
    None
}

/// Best fuzzy hit at or above the floor threshold
///
/// Strictly-greater comparison keeps the earliest declared customer on ties.
fn best_fuzzy_match<'a>(
    text: &str,
    taxonomy: &'a Taxonomy,
    scorer: &dyn SimilarityScorer,
) -> Option<(&'a Customer, u8)> {
    let mut best: Option<(&Customer, u8)> = None;
    for customer in taxonomy.customers() {
        for name in customer.names() {
            let score = scorer.score(&name.to_lowercase(), text);
            if score >= CUSTOMER_FUZZY_THRESHOLD && best.map_or(true, |(_, top)| score > top) {
                best = Some((customer, score));
            }
        }
    }
    best
}

/// First attendee whose email domain appears in a customer's domain list
fn domain_match<'a>(attendee_emails: &[&str], taxonomy: &'a Taxonomy) -> Option<&'a Customer> {
    for email in attendee_emails {
        let Some(domain) = email_domain(email) else {
            continue;
        };
        if let Some(customer) =
            taxonomy.customers().iter().find(|customer| customer.domains.contains(&domain))
        {
            return Some(customer);
        }
    }
    None
}

/// First tag equal to a known name or alias (case-insensitive)
fn tag_match(tags: &[String], taxonomy: &Taxonomy) -> Option<CustomerSignal> {
    tags.iter().find_map(|tag| {
        taxonomy
            .customer_by_name(tag)
            .map(|customer| CustomerSignal::Tag { name: customer.name.clone() })
    })
}
