//! Background-time reallocation

pub mod session;

pub use session::{
    distribute, unallocated_hours, Adjustment, AllocationSession, Distribution, Selection, Share,
};
