//! Display implementation for dash application messages.
//!
//! All message text is defined here, in one place. Messages that carry a count
//! or a summary interpolate it directly:
//!
//! ```rust
//! use dash::libs::messages::Message;
//!
//! assert_eq!(Message::TasksListed(3).to_string(), "3 tasks listed!");
//! assert_eq!(Message::AddressBookCleared.to_string(), "Address book has been cleared!");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PERSON MESSAGES ===
            Message::PersonAdded(person) => format!("New person added: {}", person),
            Message::PersonEdited(person) => format!("Edited Person: {}", person),
            Message::PersonDeleted(person) => format!("Deleted Person: {}", person),
            Message::PersonsListed(count) => format!("{} persons listed!", count),
            Message::AllPersonsListed => "Listed all persons".to_string(),
            Message::AddressBookCleared => "Address book has been cleared!".to_string(),
            Message::NoPersonsFound => "No persons to show.".to_string(),
            Message::PersonsHeader => "People:".to_string(),
            Message::ConfirmClearAddressBook(count) => {
                format!("Remove all {} persons? Tasks will keep existing but lose their people.", count)
            }

            // === TASK MESSAGES ===
            Message::TaskAdded(task) => format!("New task added: {}", task),
            Message::TaskEdited(task) => format!("Edited Task: {}", task),
            Message::TaskDeleted(task) => format!("Deleted Task: {}", task),
            Message::TaskCompleted(task) => format!("Completed Task: {}", task),
            Message::TasksListed(count) => format!("{} tasks listed!", count),
            Message::AllTasksListed => "Listed all tasks".to_string(),
            Message::TaskListCleared => "Task list has been cleared!".to_string(),
            Message::NoTasksFound => "No tasks to show.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::ConfirmClearTaskList(count) => format!("Remove all {} tasks? This cannot be undone.", count),

            // === STORAGE MESSAGES ===
            Message::DataFileMissing(path) => format!("Data file {} not found, starting fresh", path),
            Message::SampleDataLoaded(path) => format!("Loaded sample data, it will be saved to {}", path),
            Message::DataSaved => "Data saved".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigHeader => "Storage settings".to_string(),
            Message::PromptAddressBookFile => "Address book file name".to_string(),
            Message::PromptTaskListFile => "Task list file name".to_string(),
            Message::PromptLoadSampleData => "Load sample data when no data file exists?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };
        write!(f, "{}", text)
    }
}
