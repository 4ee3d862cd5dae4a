//! Configuration management for the dash application.
//!
//! The configuration decides where the address book and the task list are
//! stored and whether first-time users get sample data. It is kept as JSON
//! next to the data files:
//!
//! - **Windows**: `%LOCALAPPDATA%\dash\dash\config.json`
//! - **macOS**: `~/Library/Application Support/dash/dash/config.json`
//! - **Linux**: `~/.local/share/dash/dash/config.json`
//!
//! ```rust,no_run
//! use dash::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.load_sample_data = false;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "addressbook.json";
pub const DEFAULT_TASK_LIST_FILE: &str = "tasklist.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// File name of the address book inside the data directory.
    #[serde(default = "default_address_book_file")]
    pub address_book_file: String,

    /// File name of the task list inside the data directory.
    #[serde(default = "default_task_list_file")]
    pub task_list_file: String,

    /// Seed a missing data file with sample persons and tasks.
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,
}

fn default_address_book_file() -> String {
    DEFAULT_ADDRESS_BOOK_FILE.to_string()
}

fn default_task_list_file() -> String {
    DEFAULT_TASK_LIST_FILE.to_string()
}

fn default_load_sample_data() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_file: default_address_book_file(),
            task_list_file: default_task_list_file(),
            load_sample_data: default_load_sample_data(),
        }
    }
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists yet.
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

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;
        msg_print!(Message::ConfigHeader, true);

        let address_book_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAddressBookFile.to_string())
            .default(current.address_book_file)
            .interact_text()?;

        let task_list_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskListFile.to_string())
            .default(current.task_list_file)
            .interact_text()?;

        let load_sample_data = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLoadSampleData.to_string())
            .default(current.load_sample_data)
            .interact()?;

        Ok(Config {
            address_book_file,
            task_list_file,
            load_sample_data,
        })
    }
}
