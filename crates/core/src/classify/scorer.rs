//! Default fuzzy similarity scorer

use super::ports::SimilarityScorer;

/// Partial-ratio scorer backed by normalized Levenshtein distance
///
/// Slides the shorter input across every equal-length character window of
/// the longer one and keeps the best window similarity, scaled to 0-100.
/// A needle contained verbatim in the haystack therefore scores 100, and
/// small typos degrade the score gradually instead of dropping it to zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialRatioScorer;

impl PartialRatioScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for PartialRatioScorer {
    fn score(&self, needle: &str, haystack: &str) -> u8 {
        if needle.is_empty() && haystack.is_empty() {
            return 100;
        }
        if needle.is_empty() || haystack.is_empty() {
            return 0;
        }

        let a: Vec<char> = needle.chars().collect();
        let b: Vec<char> = haystack.chars().collect();
        let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

        let window = short.len();
        let short_str: String = short.iter().collect();
        let mut best = 0.0_f64;

        for start in 0..=(long.len() - window) {
            let slice: String = long[start..start + window].iter().collect();
            let similarity = strsim::normalized_levenshtein(&short_str, &slice);
            if similarity > best {
                best = similarity;
                if best >= 1.0 {
                    break;
                }
            }
        }

        (best * 100.0).round() as u8
    }
}
