//! Meeting classification domain

pub mod category;
pub mod customer;
pub mod ports;
pub mod project;
pub mod scorer;
pub mod service;

pub use category::CategorySignal;
pub use customer::CustomerSignal;
pub use ports::SimilarityScorer;
pub use project::ProjectSignal;
pub use scorer::PartialRatioScorer;
pub use service::ClassificationService;
