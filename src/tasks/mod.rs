//! Background tasks module
//!
//! This module contains background tasks that run alongside the console.

pub mod ticker;

// Re-export main functions
pub use ticker::{countdown_ticker_task, TICK_INTERVAL};
