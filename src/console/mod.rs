//! Terminal I/O module
//!
//! This module contains the interactive command loop and the notices
//! printed when the countdown changes in the background.

pub mod command;
pub mod notices;
pub mod session;

// Re-export main types
pub use command::{parse_adjustment, Command};
pub use notices::countdown_notice_task;
pub use session::Session;
