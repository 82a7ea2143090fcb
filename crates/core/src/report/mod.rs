//! Time-allocation reporting

pub mod calculator;

pub use calculator::AllocationCalculator;
