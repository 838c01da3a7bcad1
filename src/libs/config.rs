//! Configuration management for the quickadd application.
//!
//! The configuration carries the one piece of durable state this tool
//! needs: the label collection that parsed hashtag names are resolved
//! against. It is stored as human-editable JSON in the platform-specific
//! application data directory and can be populated either by hand or
//! through the interactive setup wizard.
//!
//! ## Storage
//!
//! The file lives at `<app data dir>/config.json`, where the directory is
//! resolved by [`DataStorage`](crate::libs::data_storage::DataStorage):
//!
//! - **Windows**: `%LOCALAPPDATA%\quickadd\config.json`
//! - **macOS**: `~/Library/Application Support/quickadd/config.json`
//! - **Linux**: `~/.local/share/quickadd/config.json`
//!
//! A missing file is not an error; it simply means an empty label
//! collection, and hashtags in captured text are silently dropped until
//! labels are configured.

use crate::libs::data_storage::DataStorage;
use crate::libs::id;
use crate::libs::labels::Label;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Known labels, matched case-insensitively against parsed hashtags.
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default (empty) configuration when no file exists yet,
    /// so first runs work without any setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive label setup wizard.
    ///
    /// Starts from the existing configuration so re-running `init` extends
    /// the collection instead of replacing it. Each new label gets a
    /// generated identifier; names that already exist (case-insensitive)
    /// are skipped.
    ///
    /// # Returns
    ///
    /// The updated configuration, ready for [`Config::save`].
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::LabelSetupIntro, true);

        loop {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLabelName.to_string())
                .allow_empty(true)
                .interact_text()?;
            let name = name.trim().to_string();
            if name.is_empty() {
                break;
            }

            if config.labels.iter().any(|label| label.name.to_lowercase() == name.to_lowercase()) {
                msg_warning!(Message::LabelAlreadyExists(name));
            } else {
                let color: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptLabelColor.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                let color = if color.trim().is_empty() { None } else { Some(color.trim().to_string()) };

                config.labels.push(Label::new(id::generate(), name.clone(), color));
                msg_success!(Message::LabelCreated(name));
            }

            let another = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAddAnotherLabel.to_string())
                .default(true)
                .interact()?;
            if !another {
                break;
            }
        }

        Ok(config)
    }
}
