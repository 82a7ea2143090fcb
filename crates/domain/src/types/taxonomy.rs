//! Customer, project, and category taxonomy
//!
//! The taxonomy is loaded once per run and immutable thereafter. Name and
//! alias lookups are case-insensitive; inactive projects are excluded from
//! matching and from selection lists.

use serde::{Deserialize, Serialize};

fn default_color() -> String {
    "#B2BEC3".to_string()
}

const fn default_active() -> bool {
    true
}

/// Customer definition with alias and email-domain hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Canonical customer name (unique, case-insensitive key)
    pub name: String,
    /// Alternate names matched like the canonical name
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Authoritative email domains for attendee matching
    #[serde(default)]
    pub domains: Vec<String>,
    /// Display color (opaque to classification)
    #[serde(default = "default_color")]
    pub color: String,
}

impl Customer {
    /// Canonical name followed by aliases, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Case-insensitive match against the name or any alias
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.names().any(|name| name.eq_ignore_ascii_case(candidate))
    }
}

/// Project kind tag (opaque to matching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Customer,
    #[default]
    Internal,
}

/// Project definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name (unique within the active set)
    pub name: String,
    /// Alternate names matched like the canonical name
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Owning customer name, if the project belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Customer-facing or internal (opaque to matching)
    #[serde(default)]
    pub kind: ProjectKind,
    /// Inactive projects are excluded from matching and selection
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Project {
    /// Canonical name followed by aliases, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Category rule with keyword list and priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category label assigned when the rule fires
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Keywords matched as substrings of the combined text
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Display color (opaque to classification)
    #[serde(default = "default_color")]
    pub color: String,
    /// Higher priority rules are checked first (default 0)
    #[serde(default)]
    pub priority: i32,
}

/// Immutable per-run taxonomy
///
/// Category rules are held sorted by priority descending; the sort is stable
/// so declaration order breaks ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Taxonomy {
    customers: Vec<Customer>,
    projects: Vec<Project>,
    categories: Vec<CategoryRule>,
}

impl Taxonomy {
    /// Build a taxonomy, ordering category rules by priority
    pub fn new(
        customers: Vec<Customer>,
        projects: Vec<Project>,
        mut categories: Vec<CategoryRule>,
    ) -> Self {
        categories.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { customers, projects, categories }
    }

    /// All customers in declaration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Active projects in declaration order
    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.active)
    }

    /// Category rules sorted by priority descending
    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    /// Find a customer by name or alias (case-insensitive)
    pub fn customer_by_name(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.matches_name(name))
    }

    /// Find an active project by name or alias (case-insensitive)
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.active_projects()
            .find(|p| p.names().any(|n| n.eq_ignore_ascii_case(name)))
    }

    /// Number of (customers, projects, categories) entries
    pub fn entry_counts(&self) -> (usize, usize, usize) {
        (self.customers.len(), self.projects.len(), self.categories.len())
    }
}
