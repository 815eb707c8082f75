//! State management module
//!
//! This module contains the countdown state machine and the value types it works on.

pub mod controller;
pub mod duration;
pub mod run_state;

// Re-export main types
pub use controller::CountdownController;
pub use duration::{CountdownDuration, Unit};
pub use run_state::{CountdownEvent, RunState, StartOutcome, StopOutcome, TickOutcome};
