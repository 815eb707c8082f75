//! Interactive console session

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};

use super::command::{parse_adjustment, Command};
use crate::{
    error::ConsoleError,
    state::{CountdownController, StartOutcome, StopOutcome, Unit},
};

const BANNER: &[&str] = &[
    "Countdown Timer",
    "Press 'h' to select hours, 'm' to select minutes, 's' to select seconds.",
    "Enter a positive or negative number to add or subtract time for the selected unit.",
    "Press 'e' to exit.",
    "Press 'f' to save and start the countdown.",
    "Press 'r' to stop and save the current state of the countdown.",
];

const CHOICE_PROMPT: &str = "Enter your choice: ";
const ADJUSTMENT_PROMPT: &str = "Enter time adjustment (positive or negative integer): ";

/// Line-oriented command loop reading from `R` and writing to `W`
pub struct Session<R, W> {
    controller: Arc<CountdownController>,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(controller: Arc<CountdownController>, input: R, out: W) -> Self {
        Self {
            controller,
            lines: input.lines(),
            out,
        }
    }

    /// Run until the user exits or input ends
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        for line in BANNER {
            self.say(line).await?;
        }
        let launch = self.controller.launch_remaining();
        self.say(&format!("Remaining Time on Launch: {}", launch)).await?;
        self.show_warnings().await?;
        self.show_remaining().await?;

        loop {
            self.prompt(CHOICE_PROMPT).await?;
            let Some(line) = self.lines.next_line().await? else {
                info!("Input closed, leaving console session");
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    debug!("Rejected command {:?}", line);
                    self.say(&e.to_string()).await?;
                    continue;
                }
            };

            if command == Command::Exit {
                self.say("Exiting the application...").await?;
                break;
            }

            self.dispatch(command).await?;
            self.show_warnings().await?;
        }

        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> Result<(), ConsoleError> {
        match command {
            Command::Edit(unit) => self.edit_time(unit).await?,
            Command::Start => {
                let message = match self.controller.start()? {
                    StartOutcome::Started => "Countdown started.",
                    StartOutcome::AlreadyRunning => "Countdown is already running.",
                    StartOutcome::NothingToCountDown => {
                        "Nothing to count down. Add time before starting."
                    }
                };
                self.say(message).await?;
            }
            Command::Stop => match self.controller.stop()? {
                StopOutcome::Stopped(remaining) => {
                    self.say(&format!("Countdown stopped and saved at: {}", remaining))
                        .await?
                }
                StopOutcome::NotRunning => self.say("Countdown is not running.").await?,
            },
            Command::Exit => {}
        }
        Ok(())
    }

    async fn edit_time(&mut self, unit: Unit) -> Result<(), ConsoleError> {
        self.controller.select_unit(unit)?;
        self.prompt(ADJUSTMENT_PROMPT).await?;

        let Some(line) = self.lines.next_line().await? else {
            return Ok(());
        };

        match parse_adjustment(&line) {
            Ok(delta) => {
                self.controller.adjust(delta)?;
                self.show_remaining().await?;
            }
            Err(e) => self.say(&e.to_string()).await?,
        }
        Ok(())
    }

    async fn show_remaining(&mut self) -> Result<(), ConsoleError> {
        let rendered = self.controller.render()?;
        self.say(&format!("Remaining Time: {}", rendered)).await?;
        Ok(())
    }

    async fn show_warnings(&mut self) -> Result<(), ConsoleError> {
        for warning in self.controller.take_warnings() {
            self.say(&warning).await?;
        }
        Ok(())
    }

    async fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    async fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
