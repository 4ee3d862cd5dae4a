//! JSON persistence for the address book and the task list.
//!
//! Each list lives in its own file inside the application data directory.
//! Storage is only touched at the edges of a command: once to load before
//! executing, and once to save afterwards if the command changed anything.

pub mod address_book;
pub mod json;
pub mod task_list;

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::StorageError;
use crate::libs::messages::Message;
use crate::libs::model::Model;
use crate::libs::sample_data;
use crate::{msg_info, msg_warning};
use address_book::JsonAddressBookStorage;
use anyhow::Result;
use task_list::JsonTaskListStorage;

pub struct StorageManager {
    address_book: JsonAddressBookStorage,
    task_list: JsonTaskListStorage,
    load_sample_data: bool,
}

impl StorageManager {
    /// Storage laid out according to the saved configuration.
    pub fn new() -> Result<Self> {
        let config = Config::read()?;
        let data_storage = DataStorage::new();
        Ok(StorageManager {
            address_book: JsonAddressBookStorage::new(data_storage.get_path(&config.address_book_file)?),
            task_list: JsonTaskListStorage::new(data_storage.get_path(&config.task_list_file)?),
            load_sample_data: config.load_sample_data,
        })
    }

    pub fn with_storages(address_book: JsonAddressBookStorage, task_list: JsonTaskListStorage, load_sample_data: bool) -> Self {
        StorageManager {
            address_book,
            task_list,
            load_sample_data,
        }
    }

    /// Loads both lists. A missing file is replaced by sample data, or by an
    /// empty list when sample data is disabled. A corrupted file is an error.
    pub fn load(&self) -> Result<Model, StorageError> {
        let address_book = match self.address_book.read()? {
            Some(address_book) => address_book,
            None if self.load_sample_data => {
                msg_info!(Message::SampleDataLoaded(self.address_book.file_path().display().to_string()));
                sample_data::sample_address_book()
            }
            None => {
                msg_warning!(Message::DataFileMissing(self.address_book.file_path().display().to_string()));
                Default::default()
            }
        };

        let task_list = match self.task_list.read()? {
            Some(task_list) => task_list,
            None if self.load_sample_data => {
                msg_info!(Message::SampleDataLoaded(self.task_list.file_path().display().to_string()));
                sample_data::sample_task_list()
            }
            None => {
                msg_warning!(Message::DataFileMissing(self.task_list.file_path().display().to_string()));
                Default::default()
            }
        };

        Ok(Model::new(address_book, task_list))
    }

    pub fn save(&self, model: &Model) -> Result<(), StorageError> {
        self.address_book.save(model.address_book())?;
        self.task_list.save(model.task_list())
    }
}
