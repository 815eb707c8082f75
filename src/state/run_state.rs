//! Run state, operation outcomes and change notifications

use super::CountdownDuration;

/// Whether the countdown is ticking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// Result of a start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
    NothingToCountDown,
}

/// Result of a stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped(CountdownDuration),
    NotRunning,
}

/// Result of one scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed, countdown still running
    Ticked(CountdownDuration),
    /// Countdown reached zero and went idle
    Completed,
    /// Tick arrived after the countdown stopped; nothing changed
    NotRunning,
}

/// Notification broadcast to subscribers after each state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownEvent {
    Adjusted(CountdownDuration),
    Started(CountdownDuration),
    Stopped(CountdownDuration),
    Ticked(CountdownDuration),
    Completed,
}
