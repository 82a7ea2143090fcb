//! Project detection heuristics

use meetledger_domain::constants::{
    PROJECT_FUZZY_CONFIDENCE, PROJECT_FUZZY_THRESHOLD, PROJECT_MENTION_CONFIDENCE,
};
use meetledger_domain::Taxonomy;

use super::ports::SimilarityScorer;

/// How a project was detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSignal {
    /// A project name or alias appears verbatim in the combined text
    Mentioned { name: String },
    /// A project name or alias fuzzy-matched the combined text
    Fuzzy { name: String },
}

impl ProjectSignal {
    /// Canonical project name this signal resolved to
    pub fn project(&self) -> &str {
        match self {
            Self::Mentioned { name } | Self::Fuzzy { name } => name,
        }
    }

    /// Fixed confidence weight for this kind of evidence
    pub fn confidence(&self) -> f32 {
        match self {
            Self::Mentioned { .. } => PROJECT_MENTION_CONFIDENCE,
            Self::Fuzzy { .. } => PROJECT_FUZZY_CONFIDENCE,
        }
    }

    /// Human-readable rationale line for this signal
    pub fn reason(&self) -> String {
        match self {
            Self::Mentioned { name } => format!("Project '{name}' mentioned"),
            Self::Fuzzy { name } => format!("Project '{name}' fuzzy matched"),
        }
    }

    /// Consume the signal, yielding the canonical project name
    pub fn into_project(self) -> String {
        match self {
            Self::Mentioned { name } | Self::Fuzzy { name } => name,
        }
    }
}

/// Detect a project mention in the combined text
///
/// Only active projects participate. Projects are checked in declaration
/// order and each name is tried verbatim before falling back to the fuzzy
/// scorer, so an exact mention of a later project can still lose to an
/// earlier project's fuzzy hit. This keeps resolution order-stable.
pub fn resolve_project(
    text: &str,
    taxonomy: &Taxonomy,
    scorer: &dyn SimilarityScorer,
) -> Option<ProjectSignal> {
    for project in taxonomy.active_projects() {
        for name in project.names() {
            let name_lower = name.to_lowercase();
            if text.contains(&name_lower) {
                return Some(ProjectSignal::Mentioned { name: project.name.clone() });
            }
            if scorer.score(&name_lower, text) >= PROJECT_FUZZY_THRESHOLD {
                return Some(ProjectSignal::Fuzzy { name: project.name.clone() });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use meetledger_domain::{Customer, Project, ProjectKind, Taxonomy};

    use super::*;
    use crate::classify::scorer::PartialRatioScorer;

    fn project(name: &str, aliases: &[&str], active: bool) -> Project {
        Project {
            name: name.to_string(),
            aliases: aliases.iter().map(ToString::to_string).collect(),
            customer: None,
            kind: ProjectKind::Customer,
            active,
        }
    }

    fn taxonomy(projects: Vec<Project>) -> Taxonomy {
        Taxonomy::new(Vec::<Customer>::new(), projects, vec![])
    }

    fn resolve(text: &str, projects: Vec<Project>) -> Option<ProjectSignal> {
        resolve_project(text, &taxonomy(projects), &PartialRatioScorer::new())
    }

    #[test]
    fn verbatim_mention_wins() {
        let signal = resolve(
            "cloud migration status call",
            vec![project("Cloud Migration", &[], true)],
        );
        assert_eq!(signal, Some(ProjectSignal::Mentioned { name: "Cloud Migration".to_string() }));
    }

    #[test]
    fn alias_mention_resolves_to_canonical_name() {
        let signal = resolve(
            "sprint 12 planning for crm impl",
            vec![project("CRM Implementation", &["CRM Impl"], true)],
        );
        assert_eq!(
            signal,
            Some(ProjectSignal::Mentioned { name: "CRM Implementation".to_string() })
        );
    }

    #[test]
    fn fuzzy_match_below_verbatim() {
        // One dropped letter in the mention ("migratin")
        let signal = resolve(
            "cloud migratin next steps",
            vec![project("Cloud Migration", &[], true)],
        );
        assert_eq!(signal, Some(ProjectSignal::Fuzzy { name: "Cloud Migration".to_string() }));
    }

    #[test]
    fn inactive_projects_never_match() {
        let signal = resolve(
            "legacy migration wrap-up",
            vec![project("Legacy Migration", &[], false)],
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // AC: both projects are mentioned verbatim; the first declared wins
        let signal = resolve(
            "phase 2 and phase 3 roadmap",
            vec![project("Phase 2", &[], true), project("Phase 3", &[], true)],
        );
        assert_eq!(signal, Some(ProjectSignal::Mentioned { name: "Phase 2".to_string() }));
    }

    #[test]
    fn no_projects_yields_none() {
        assert_eq!(resolve("anything at all", vec![]), None);
    }

    #[test]
    fn confidence_weights_per_signal() {
        let mentioned = ProjectSignal::Mentioned { name: "p".to_string() };
        let fuzzy = ProjectSignal::Fuzzy { name: "p".to_string() };
        assert!((mentioned.confidence() - 0.85).abs() < f32::EPSILON);
        assert!((fuzzy.confidence() - 0.70).abs() < f32::EPSILON);
    }
}
