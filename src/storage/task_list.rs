use super::json::{read_json_file, save_json_file};
use crate::libs::error::StorageError;
use crate::libs::task::Task;
use crate::libs::task_list::TaskList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of the task list: `{"tasks": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonSerializableTaskList {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Reads and writes the task list as a JSON file.
pub struct JsonTaskListStorage {
    file_path: PathBuf,
}

impl JsonTaskListStorage {
    pub fn new(file_path: PathBuf) -> Self {
        JsonTaskListStorage { file_path }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<TaskList>, StorageError> {
        let Some(json) = read_json_file::<JsonSerializableTaskList>(&self.file_path)? else {
            return Ok(None);
        };
        let task_list = TaskList::from_tasks(json.tasks).map_err(|duplicate| StorageError::DataConversion {
            path: self.file_path.clone(),
            reason: format!("Task list contains duplicate task(s): {}", duplicate.description),
        })?;
        debug!(path = %self.file_path.display(), tasks = task_list.len(), "task list loaded");
        Ok(Some(task_list))
    }

    pub fn save(&self, task_list: &TaskList) -> Result<(), StorageError> {
        let json = JsonSerializableTaskList {
            tasks: task_list.tasks().to_vec(),
        };
        save_json_file(&json, &self.file_path)?;
        debug!(path = %self.file_path.display(), tasks = task_list.len(), "task list saved");
        Ok(())
    }
}
