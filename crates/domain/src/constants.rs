//! Classification constants
//!
//! Centralized location for the sentinel labels, confidence weights, and
//! matching thresholds used by the classification pipeline.

// Sentinel labels
pub const CUSTOMER_MEETING_CATEGORY: &str = "Customer Meeting";
pub const INTERNAL_MEETING_CATEGORY: &str = "Internal Meeting";
pub const UNCATEGORIZED_CATEGORY: &str = "Uncategorized";
pub const INTERNAL_CUSTOMER_LABEL: &str = "Internal";
pub const GENERAL_PROJECT_LABEL: &str = "General";
pub const NO_PATTERNS_RATIONALE: &str = "No clear patterns detected";

// Customer detection weights (first matching heuristic wins)
pub const BRACKET_CONFIDENCE: f32 = 0.95;
pub const PREFIX_CONFIDENCE: f32 = 0.90;
pub const FUZZY_AND_DOMAIN_CONFIDENCE: f32 = 0.90;
pub const DOMAIN_CONFIDENCE: f32 = 0.75;
pub const FUZZY_STRONG_CONFIDENCE: f32 = 0.65;
pub const FUZZY_WEAK_CONFIDENCE: f32 = 0.50;
pub const TAG_CONFIDENCE: f32 = 0.70;

// Project detection weights
pub const PROJECT_MENTION_CONFIDENCE: f32 = 0.85;
pub const PROJECT_FUZZY_CONFIDENCE: f32 = 0.70;

// Category detection weights
pub const CUSTOMER_MEETING_CONFIDENCE: f32 = 0.85;
pub const CATEGORY_KEYWORD_CONFIDENCE: f32 = 0.75;
pub const INTERNAL_MEETING_CONFIDENCE: f32 = 0.60;
pub const UNCATEGORIZED_CONFIDENCE: f32 = 0.30;

// Fuzzy similarity thresholds (0-100 scale)
pub const CUSTOMER_FUZZY_THRESHOLD: u8 = 80;
pub const CUSTOMER_FUZZY_STRONG_THRESHOLD: u8 = 90;
pub const PROJECT_FUZZY_THRESHOLD: u8 = 85;

// Overall confidence blend when a customer was detected
pub const CUSTOMER_BLEND_WEIGHT: f32 = 0.6;
pub const CATEGORY_BLEND_WEIGHT: f32 = 0.4;

// Attendee domains treated as internal to the organization
pub const INTERNAL_DOMAINS: &[&str] = &["company.com", "microsoft.com"];

// Work-week normalization basis for unallocated-hours math
pub const WORK_DAYS_PER_WEEK: f64 = 5.0;
