//! Port interfaces for meeting classification

/// Trait for scoring fuzzy text similarity on a 0-100 scale
///
/// Implementations must be deterministic: identical inputs always yield the
/// same score. The classification service relies on this to stay a pure
/// function of the record and the taxonomy.
pub trait SimilarityScorer: Send + Sync {
    /// Score how similar `needle` is to `haystack` (0 = unrelated, 100 = contained verbatim)
    fn score(&self, needle: &str, haystack: &str) -> u8;
}
