//! Background notices printed while the console waits for input

use std::sync::Arc;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::broadcast::error::RecvError,
};
use tracing::{error, info, warn};

use crate::state::{CountdownController, CountdownEvent};

/// Print the remaining time on every tick, completion, and tick-time warnings
pub async fn countdown_notice_task<W>(controller: Arc<CountdownController>, mut out: W)
where
    W: AsyncWrite + Unpin,
{
    info!("Starting countdown notice task");

    let mut events = controller.subscribe();

    loop {
        let mut lines = Vec::new();

        match events.recv().await {
            Ok(CountdownEvent::Completed) => {
                lines.extend(controller.take_warnings());
                lines.push("Countdown Complete".to_string());
            }
            Ok(CountdownEvent::Ticked(remaining)) => {
                lines.extend(controller.take_warnings());
                lines.push(format!("Remaining Time: {}", remaining));
            }
            Ok(_) => continue,
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notice task skipped {} countdown events", skipped);
                continue;
            }
            Err(RecvError::Closed) => break,
        }

        for line in lines {
            let written = async {
                out.write_all(line.as_bytes()).await?;
                out.write_all(b"\n").await?;
                out.flush().await
            };
            if let Err(e) = written.await {
                error!("Failed to print notice: {}", e);
            }
        }
    }

    info!("Countdown notice task finished");
}
