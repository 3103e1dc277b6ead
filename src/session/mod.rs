//! Navigation session persistence.
//!
//! This module holds the save and load hooks for the single saved destination.
//! The snapshot is written as YAML next to the configuration file.

mod error;

pub use error::SessionError;

use crate::state::SavedNavigation;
use log::*;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "session.yml";

/// Oversees the session file.
///
#[derive(Clone, Debug)]
pub struct Session {
    file_path: PathBuf,
}

impl Session {
    /// Return a session stored in the given directory.
    ///
    pub fn new(dir_path: &Path) -> Self {
        Session {
            file_path: dir_path.join(FILE_NAME),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the saved navigation. Returns None if nothing was saved yet.
    ///
    pub fn load(&self) -> Result<Option<SavedNavigation>, SessionError> {
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadFailed {
                    path: self.file_path.clone(),
                    source: e,
                })
            }
        };
        let saved = serde_yaml::from_str(&contents).map_err(|e| {
            SessionError::DeserializationFailed {
                path: self.file_path.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Some(saved))
    }

    /// Read the saved navigation, falling back to the default when the file
    /// is missing or cannot be used.
    ///
    pub fn load_or_default(&self) -> SavedNavigation {
        match self.load() {
            Ok(Some(saved)) => saved,
            Ok(None) => {
                debug!("No saved session at {}", self.file_path.display());
                SavedNavigation::default()
            }
            Err(e) => {
                warn!("Ignoring saved session: {}", e);
                SavedNavigation::default()
            }
        }
    }

    /// Write the given navigation snapshot to disk.
    ///
    pub fn save(&self, saved: &SavedNavigation) -> Result<(), SessionError> {
        let content = serde_yaml::to_string(saved)
            .map_err(|e| SessionError::SerializationFailed(e.to_string()))?;
        let write_failed = |e: std::io::Error| SessionError::WriteFailed {
            path: self.file_path.clone(),
            source: e,
        };
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_failed)?;
            }
        }
        let mut file = fs::File::create(&self.file_path).map_err(write_failed)?;
        write!(file, "{}", content).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;
        Ok(())
    }
}
