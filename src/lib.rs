//! Countdown Timer - an interactive console countdown that survives restarts
//!
//! This library provides the countdown state machine, the persisted record of
//! the remaining time, the one-second ticker and the interactive console.

pub mod config;
pub mod console;
pub mod error;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use console::Session;
pub use state::CountdownController;
pub use storage::RecordStore;
pub use utils::signals::shutdown_signal;
