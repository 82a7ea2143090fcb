//! Taxonomy loader
//!
//! Loads the classification taxonomy (customers, projects, category rules)
//! from a TOML or JSON file.
//!
//! ## Loading Strategy
//! 1. An explicit path, when given, is authoritative: missing or malformed
//!    files are hard errors
//! 2. Otherwise `MEETLEDGER_TAXONOMY` is consulted and treated the same way
//! 3. Otherwise standard locations are probed
//! 4. When nothing is found, the built-in default taxonomy is used
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./taxonomy.toml` or `./taxonomy.json` (current working directory)
//! 2. `./config/taxonomy.toml` or `./config/taxonomy.json`

use std::path::{Path, PathBuf};

use meetledger_domain::{CategoryRule, Customer, MeetLedgerError, Project, Result, Taxonomy};
use serde::Deserialize;

use crate::fixtures::default_taxonomy;

/// Environment variable naming the taxonomy file
pub const TAXONOMY_ENV_VAR: &str = "MEETLEDGER_TAXONOMY";

/// On-disk shape of a taxonomy file
///
/// All sections are optional so a file can declare only customers, only
/// category rules, and so on. Field-level defaults (colors, the active
/// flag) come from the domain types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub categories: Vec<CategoryRule>,
}

impl TaxonomyFile {
    /// Build the runtime taxonomy, ordering category rules by priority
    pub fn into_taxonomy(self) -> Taxonomy {
        Taxonomy::new(self.customers, self.projects, self.categories)
    }
}

/// Load the taxonomy with automatic fallback strategy
///
/// An explicit `path` wins over everything. Without one, the
/// `MEETLEDGER_TAXONOMY` environment variable is consulted, then the
/// standard locations are probed, and finally the built-in default
/// taxonomy is returned so a fresh checkout works without any setup.
///
/// # Errors
/// Returns `MeetLedgerError::Config` if an explicitly named file (argument
/// or environment variable) is missing, unreadable, or malformed.
pub fn load_taxonomy(path: Option<PathBuf>) -> Result<Taxonomy> {
    if let Some(explicit) = path {
        return load_taxonomy_file(Some(explicit));
    }

    if let Ok(from_env) = std::env::var(TAXONOMY_ENV_VAR) {
        tracing::debug!(path = %from_env, "taxonomy path taken from environment");
        return load_taxonomy_file(Some(PathBuf::from(from_env)));
    }

    match probe_taxonomy_paths() {
        Some(found) => load_taxonomy_file(Some(found)),
        None => {
            tracing::info!("no taxonomy file found, using built-in defaults");
            Ok(default_taxonomy())
        }
    }
}

/// Load the taxonomy from a file
///
/// If `path` is `None`, probes the standard locations and fails when no
/// file exists there. Supports both TOML and JSON formats (detected by
/// file extension).
///
/// # Errors
/// Returns `MeetLedgerError::Config` if:
/// - File not found (when path is specified)
/// - No taxonomy file found (when path is `None`)
/// - File format is invalid
pub fn load_taxonomy_file(path: Option<PathBuf>) -> Result<Taxonomy> {
    let taxonomy_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetLedgerError::Config(format!(
                    "Taxonomy file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_taxonomy_paths().ok_or_else(|| {
            MeetLedgerError::Config(
                "No taxonomy file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %taxonomy_path.display(), "loading taxonomy from file");

    let contents = std::fs::read_to_string(&taxonomy_path).map_err(|e| {
        MeetLedgerError::Config(format!("Failed to read taxonomy file: {e}"))
    })?;

    let file = parse_taxonomy(&contents, &taxonomy_path)?;
    let taxonomy = file.into_taxonomy();
    let (customers, projects, categories) = taxonomy.entry_counts();
    tracing::info!(customers, projects, categories, "taxonomy loaded");
    Ok(taxonomy)
}

/// Parse taxonomy file contents
///
/// Format is detected by file extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `MeetLedgerError::Config` if the format is unsupported or
/// parsing fails.
fn parse_taxonomy(contents: &str, path: &Path) -> Result<TaxonomyFile> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetLedgerError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetLedgerError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(MeetLedgerError::Config(format!("Unsupported taxonomy format: {extension}"))),
    }
}

/// Probe the standard locations for a taxonomy file
///
/// # Returns
/// The first taxonomy file found, or `None` if no file exists.
pub fn probe_taxonomy_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let candidates = [
        cwd.join("taxonomy.toml"),
        cwd.join("taxonomy.json"),
        cwd.join("config/taxonomy.toml"),
        cwd.join("config/taxonomy.json"),
    ];

    candidates.into_iter().find(|path| path.exists())
}
