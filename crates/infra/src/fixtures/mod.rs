//! Fixture data for demos, tests, and offline runs

pub mod meetings;

pub use meetings::{default_taxonomy, FixtureMeetingSource};
