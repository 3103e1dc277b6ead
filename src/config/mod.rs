//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme, session restore behavior and hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ScopeHotkeys};

use crate::error::AppError;
use crate::state::DEFAULT_SNACKBAR_TICKS;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/navsuite";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub restore_session: bool,
    pub show_log: bool,
    pub snackbar_ticks: u32,
    pub hotkeys: ScopeHotkeys,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_restore_session")]
    pub restore_session: bool,
    #[serde(default)]
    pub show_log: bool,
    #[serde(default = "default_snackbar_ticks")]
    pub snackbar_ticks: u32,
    #[serde(default)]
    pub hotkeys: ScopeHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_restore_session() -> bool {
    true
}

fn default_snackbar_ticks() -> u32 {
    DEFAULT_SNACKBAR_TICKS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            restore_session: default_restore_session(),
            show_log: false,
            snackbar_ticks: default_snackbar_ticks(),
            hotkeys: ScopeHotkeys::default(),
            dir_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place and
    /// writes them out so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }
        self.dir_path = Some(dir_path);

        let file_path = self.file_path().ok_or(ConfigError::FilePathNotSet)?;
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.restore_session = data.restore_session;
            self.show_log = data.show_log;
            self.snackbar_ticks = data.snackbar_ticks;
            self.hotkeys = data.hotkeys;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            restore_session: self.restore_session,
            show_log: self.show_log,
            snackbar_ticks: self.snackbar_ticks,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(&file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the directory holding the configuration and session files,
    /// once a load has resolved it.
    ///
    pub fn dir_path(&self) -> Option<&Path> {
        self.dir_path.as_deref()
    }

    fn file_path(&self) -> Option<PathBuf> {
        self.dir_path.as_ref().map(|dir| dir.join(FILE_NAME))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
