use super::task::Task;

/// Tasks in insertion order, unless explicitly sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a task list, rejecting the first duplicate task found.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, Task> {
        let mut task_list = TaskList::new();
        for task in tasks {
            if task_list.contains(&task) {
                return Err(task);
            }
            task_list.add(task);
        }
        Ok(task_list)
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn set(&mut self, target: &Task, edited: Task) -> bool {
        match self.tasks.iter().position(|task| task == target) {
            Some(index) => {
                self.tasks[index] = edited;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, target: &Task) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task != target);
        self.tasks.len() != before
    }

    /// Stable chronological sort; undated tasks keep their relative order at the end.
    pub fn sort(&mut self) {
        self.tasks.sort_by(Task::chronological);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
