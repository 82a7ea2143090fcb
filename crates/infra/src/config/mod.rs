//! Taxonomy configuration loading
//!
//! This module provides utilities for loading the classification taxonomy
//! from TOML or JSON files, with environment and working-directory probing.

pub mod loader;

// Re-export commonly used items
pub use loader::{load_taxonomy, load_taxonomy_file, probe_taxonomy_paths, TAXONOMY_ENV_VAR};
