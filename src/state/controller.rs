//! Countdown controller
//!
//! Owns the remaining time, the selected adjustment unit and the run
//! state. Every mutation happens under one lock together with the write
//! of the persisted record, so a tick and a console command never
//! interleave their saves.

use std::sync::Mutex;

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{
    CountdownDuration, CountdownEvent, RunState, StartOutcome, StopOutcome, TickOutcome, Unit,
};
use crate::{error::CountdownError, storage::RecordStore};

#[derive(Debug)]
struct CountdownState {
    remaining: CountdownDuration,
    unit: Unit,
    run_state: RunState,
}

/// Shared countdown state machine
#[derive(Debug)]
pub struct CountdownController {
    state: Mutex<CountdownState>,
    store: RecordStore,
    /// Remaining time as loaded at startup
    launch_remaining: CountdownDuration,
    /// Recoverable problems not yet shown to the user
    warnings: Mutex<Vec<String>>,
    /// Channel for state change notifications
    event_tx: broadcast::Sender<CountdownEvent>,
    /// Whether the periodic tick is armed
    armed_tx: watch::Sender<bool>,
    /// Keep the receiver alive to prevent channel closure
    _armed_rx: watch::Receiver<bool>,
}

impl CountdownController {
    /// Create an idle controller, loading the remaining time from `store`
    pub fn new(store: RecordStore) -> Self {
        let mut warnings = Vec::new();
        let remaining = Self::load(&store, &mut warnings);
        let (event_tx, _) = broadcast::channel(64);
        let (armed_tx, armed_rx) = watch::channel(false);

        Self {
            state: Mutex::new(CountdownState {
                remaining,
                unit: Unit::default(),
                run_state: RunState::Idle,
            }),
            store,
            launch_remaining: remaining,
            warnings: Mutex::new(warnings),
            event_tx,
            armed_tx,
            _armed_rx: armed_rx,
        }
    }

    /// Read the saved time. A missing record is zero; an unreadable or
    /// malformed one is zero plus a warning.
    fn load(store: &RecordStore, warnings: &mut Vec<String>) -> CountdownDuration {
        match store.load() {
            Ok(Some(remaining)) => remaining,
            Ok(None) => CountdownDuration::ZERO,
            Err(e) => {
                warn!("{}", e);
                warnings.push(format!(
                    "Failed to load saved time. Starting from {}.",
                    CountdownDuration::ZERO
                ));
                CountdownDuration::ZERO
            }
        }
    }

    /// Write the record; callers hold the state lock
    fn persist(&self, remaining: CountdownDuration) {
        if let Err(e) = self.store.save(remaining) {
            warn!("{}", e);
            self.add_warning(format!("Failed to save time: {}", e));
        }
    }

    fn add_warning(&self, warning: String) {
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.push(warning),
            Err(e) => warn!("Failed to queue warning {:?}: {}", warning, e),
        }
    }

    fn arm(&self, armed: bool) {
        let previous = self.armed_tx.send_replace(armed);
        if previous != armed {
            debug!("Tick {}", if armed { "armed" } else { "disarmed" });
        }
    }

    fn notify(&self, event: CountdownEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("No countdown event subscribers");
        }
    }

    /// Choose the unit later adjustments are scaled into
    pub fn select_unit(&self, unit: Unit) -> Result<(), CountdownError> {
        let mut state = self.state.lock()?;
        state.unit = unit;
        drop(state);

        debug!("Selected unit: {}", unit);
        Ok(())
    }

    /// Add `delta` of the selected unit, clamping the result at zero
    pub fn adjust(&self, delta: i64) -> Result<CountdownDuration, CountdownError> {
        let mut state = self.state.lock()?;
        let delta_seconds = state.unit.to_seconds(delta);
        state.remaining = state.remaining.offset(delta_seconds);
        let remaining = state.remaining;
        self.persist(remaining);
        drop(state);

        info!("Adjusted by {}s, remaining {}", delta_seconds, remaining);
        self.notify(CountdownEvent::Adjusted(remaining));
        Ok(remaining)
    }

    /// Save the current time and arm the periodic tick
    pub fn start(&self) -> Result<StartOutcome, CountdownError> {
        let mut state = self.state.lock()?;
        if state.run_state.is_running() {
            debug!("Start ignored, countdown already running");
            return Ok(StartOutcome::AlreadyRunning);
        }
        if state.remaining.is_zero() {
            debug!("Start ignored, nothing to count down");
            return Ok(StartOutcome::NothingToCountDown);
        }

        let remaining = state.remaining;
        self.persist(remaining);
        state.run_state = RunState::Running;
        self.arm(true);
        drop(state);

        info!("Countdown started at {}", remaining);
        self.notify(CountdownEvent::Started(remaining));
        Ok(StartOutcome::Started)
    }

    /// Disarm the periodic tick and save the current time
    pub fn stop(&self) -> Result<StopOutcome, CountdownError> {
        let mut state = self.state.lock()?;
        if !state.run_state.is_running() {
            debug!("Stop ignored, countdown not running");
            return Ok(StopOutcome::NotRunning);
        }

        self.arm(false);
        state.run_state = RunState::Idle;
        let remaining = state.remaining;
        self.persist(remaining);
        drop(state);

        info!("Countdown stopped at {}", remaining);
        self.notify(CountdownEvent::Stopped(remaining));
        Ok(StopOutcome::Stopped(remaining))
    }

    /// Count down one second; goes idle once zero is reached
    pub fn tick(&self) -> Result<TickOutcome, CountdownError> {
        let mut state = self.state.lock()?;
        if !state.run_state.is_running() {
            debug!("Tick after stop ignored");
            return Ok(TickOutcome::NotRunning);
        }

        state.remaining = state.remaining.decrement();
        let remaining = state.remaining;

        if !remaining.is_zero() {
            self.persist(remaining);
            drop(state);

            debug!("Tick, remaining {}", remaining);
            self.notify(CountdownEvent::Ticked(remaining));
            return Ok(TickOutcome::Ticked(remaining));
        }

        self.arm(false);
        state.run_state = RunState::Idle;
        self.persist(remaining);
        drop(state);

        info!("Countdown complete");
        self.notify(CountdownEvent::Completed);
        Ok(TickOutcome::Completed)
    }

    /// Remaining time as `HH:MM:SS`
    pub fn render(&self) -> Result<String, CountdownError> {
        Ok(self.remaining()?.to_string())
    }

    pub fn remaining(&self) -> Result<CountdownDuration, CountdownError> {
        Ok(self.state.lock()?.remaining)
    }

    pub fn run_state(&self) -> Result<RunState, CountdownError> {
        Ok(self.state.lock()?.run_state)
    }

    pub fn unit(&self) -> Result<Unit, CountdownError> {
        Ok(self.state.lock()?.unit)
    }

    pub fn launch_remaining(&self) -> CountdownDuration {
        self.launch_remaining
    }

    /// Drain warnings queued since the last call
    pub fn take_warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(mut warnings) => std::mem::take(&mut *warnings),
            Err(e) => {
                warn!("Failed to read queued warnings: {}", e);
                Vec::new()
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CountdownEvent> {
        self.event_tx.subscribe()
    }

    pub fn subscribe_armed(&self) -> watch::Receiver<bool> {
        self.armed_tx.subscribe()
    }
}
