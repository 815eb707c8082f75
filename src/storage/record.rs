//! Persisted countdown record
//!
//! The record is a single text file holding the remaining time as
//! `HH:MM:SS`. Every save overwrites the whole file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{error::StoreError, state::CountdownDuration};

/// File-backed store for the remaining countdown time
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved duration; `Ok(None)` when no record exists yet
    pub fn load(&self) -> Result<Option<CountdownDuration>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved record at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let duration = text
            .parse::<CountdownDuration>()
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!("Loaded saved time {} from {}", duration, self.path.display());
        Ok(Some(duration))
    }

    /// Overwrite the record with `duration`
    pub fn save(&self, duration: CountdownDuration) -> Result<(), StoreError> {
        fs::write(&self.path, duration.to_string()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {} to {}", duration, self.path.display());
        Ok(())
    }
}
