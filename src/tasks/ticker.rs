//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{CountdownController, TickOutcome};

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that ticks the countdown once per second while armed
pub async fn countdown_ticker_task(controller: Arc<CountdownController>) {
    info!("Starting countdown ticker task");

    let mut armed_rx = controller.subscribe_armed();

    loop {
        // Wait for the countdown to be armed
        if !*armed_rx.borrow_and_update() {
            if armed_rx.changed().await.is_err() {
                break;
            }
            continue;
        }

        debug!("Ticker armed");
        let mut interval = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match controller.tick() {
                        Ok(TickOutcome::Ticked(_)) => {}
                        Ok(TickOutcome::Completed) | Ok(TickOutcome::NotRunning) => break,
                        Err(e) => {
                            error!("Failed to tick countdown: {}", e);
                            break;
                        }
                    }
                }

                changed = armed_rx.changed() => {
                    if changed.is_err() {
                        info!("Countdown ticker task finished");
                        return;
                    }
                    if *armed_rx.borrow_and_update() {
                        // Stopped and restarted between ticks; count a full second again
                        interval.reset();
                    } else {
                        debug!("Ticker disarmed");
                        break;
                    }
                }
            }
        }
    }

    info!("Countdown ticker task finished");
}
