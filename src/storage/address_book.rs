use super::json::{read_json_file, save_json_file};
use crate::libs::address_book::AddressBook;
use crate::libs::error::StorageError;
use crate::libs::person::Person;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of the address book: `{"persons": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonSerializableAddressBook {
    #[serde(default)]
    persons: Vec<Person>,
}

impl JsonSerializableAddressBook {
    fn from_model(address_book: &AddressBook) -> Self {
        JsonSerializableAddressBook {
            persons: address_book.persons().to_vec(),
        }
    }

    fn into_model(self, path: &Path) -> Result<AddressBook, StorageError> {
        AddressBook::from_persons(self.persons).map_err(|duplicate| StorageError::DataConversion {
            path: path.to_path_buf(),
            reason: format!("Persons list contains duplicate person(s): {}", duplicate.name),
        })
    }
}

/// Reads and writes the address book as a JSON file.
pub struct JsonAddressBookStorage {
    file_path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(file_path: PathBuf) -> Self {
        JsonAddressBookStorage { file_path }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<AddressBook>, StorageError> {
        let Some(json) = read_json_file::<JsonSerializableAddressBook>(&self.file_path)? else {
            return Ok(None);
        };
        let address_book = json.into_model(&self.file_path)?;
        debug!(path = %self.file_path.display(), persons = address_book.len(), "address book loaded");
        Ok(Some(address_book))
    }

    pub fn save(&self, address_book: &AddressBook) -> Result<(), StorageError> {
        save_json_file(&JsonSerializableAddressBook::from_model(address_book), &self.file_path)?;
        debug!(path = %self.file_path.display(), persons = address_book.len(), "address book saved");
        Ok(())
    }
}
