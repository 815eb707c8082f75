//! Persistence module
//!
//! This module owns the single on-disk record of the remaining time.

pub mod record;

// Re-export main types
pub use record::RecordStore;
