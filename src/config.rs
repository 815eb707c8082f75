//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "An interactive console countdown timer that persists its remaining time")]
#[command(version = "1.0.0")]
pub struct Config {
    /// File the remaining time is saved to
    #[arg(short, long, default_value = "countdown.txt")]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Absolute path of the saved record, resolved against the working directory
    pub fn record_path(&self) -> PathBuf {
        if self.file.is_absolute() {
            return self.file.clone();
        }
        match std::env::current_dir() {
            Ok(dir) => dir.join(&self.file),
            Err(_) => self.file.clone(),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["countdown-timer"]).unwrap();
        assert_eq!(config.file, PathBuf::from("countdown.txt"));
        assert!(!config.verbose);
        assert_eq!(config.log_level(), "warn");
        assert!(config.record_path().is_absolute());
        assert!(config.record_path().ends_with("countdown.txt"));
    }

    #[test]
    fn custom_file_and_verbose() {
        let config =
            Config::try_parse_from(["countdown-timer", "--file", "/tmp/timer.txt", "-v"]).unwrap();
        assert_eq!(config.record_path(), PathBuf::from("/tmp/timer.txt"));
        assert_eq!(config.log_level(), "debug");
    }
}
