//! Domain error types.
//!
//! Each layer of the application owns one error enum:
//!
//! - [`FieldError`]: a raw value could not be turned into a domain field
//! - [`FilterError`]: a find descriptor could not be built from user input
//! - [`CommandError`]: a command was rejected while executing against the model
//! - [`StorageError`]: the JSON data files could not be read or written
//!
//! The command-line layer wraps all of them in `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while constructing domain values from raw text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank: '{0}'")]
    InvalidName(String),

    #[error("Phone numbers should only contain digits, and it should be at least 3 digits long: '{0}'")]
    InvalidPhone(String),

    #[error("Emails should be of the format local-part@domain: '{0}'")]
    InvalidEmail(String),

    #[error("Addresses can take any values, and it should not be blank")]
    InvalidAddress,

    #[error("Tag names should be alphanumeric: '{0}'")]
    InvalidTag(String),

    #[error("Task descriptions can take any values, and it should not be blank")]
    InvalidDescription,

    #[error("Dates should be DD/MM/YYYY or YYYY-MM-DD, times HHMM or HH:MM, combined as 'DATE, TIME': '{0}'")]
    InvalidDate(String),
}

/// Errors returned while building a find descriptor.
///
/// These are always raised before the model is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("At least one keyword must be given for the {0} field")]
    EmptyKeywords(&'static str),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Completion status should be one of: complete, incomplete, true, false: '{0}'")]
    InvalidCompletionStatus(String),

    #[error("Date range start {from} is after its end {to}")]
    InvertedRange { from: String, to: String },

    #[error("At least one field to search by must be provided")]
    NoCriteria,
}

/// Errors raised by commands executing against the model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("The {kind} index provided is invalid: {index}")]
    InvalidIndex { kind: &'static str, index: usize },

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("This task already exists in the task list")]
    DuplicateTask,

    #[error("At least one field to edit must be provided")]
    NothingToEdit,

    #[error("This task is already marked as complete")]
    TaskAlreadyComplete,

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Errors raised while loading or saving the data files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Illegal values found in {}: {}", .path.display(), .reason)]
    DataConversion { path: PathBuf, reason: String },
}
