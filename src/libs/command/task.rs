use super::{resolve, Command, CommandResult, ListTarget};
use crate::libs::error::CommandError;
use crate::libs::filter::FindTaskDescriptor;
use crate::libs::messages::Message;
use crate::libs::model::Model;
use crate::libs::person::Name;
use crate::libs::predicate::TaskPredicate;
use crate::libs::tag::Tag;
use crate::libs::task::{Task, TaskDate, TaskDescription};
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeSet;

/// Looks up the names of the persons at the given 1-based indices.
fn resolve_people(model: &Model, indices: &[usize]) -> Result<BTreeSet<Name>, CommandError> {
    let persons = model.filtered_person_list();
    indices
        .iter()
        .map(|&index| resolve(&persons, index, "person").map(|person| person.name))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskCommand {
    task: Task,
    person_indices: Vec<usize>,
}

impl AddTaskCommand {
    /// `person_indices` are 1-based positions in the displayed person list.
    pub fn new(task: Task, person_indices: Vec<usize>) -> Self {
        AddTaskCommand { task, person_indices }
    }
}

impl Command for AddTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let people = resolve_people(model, &self.person_indices)?;
        let task = self.task.clone().with_people(people);

        if model.has_task(&task) {
            return Err(CommandError::DuplicateTask);
        }
        model.add_task(task.clone());
        Ok(CommandResult::mutated(Message::TaskAdded(task.to_string()), ListTarget::Tasks))
    }
}

/// Fields to overwrite on an existing task; absent fields are kept.
///
/// `date` is doubly optional: `Some(None)` removes the task's date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub description: Option<TaskDescription>,
    pub date: Option<Option<TaskDate>>,
    pub tags: Option<BTreeSet<Tag>>,
    pub person_indices: Option<Vec<usize>>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some() || self.date.is_some() || self.tags.is_some() || self.person_indices.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskCommand {
    index: usize,
    descriptor: EditTaskDescriptor,
}

impl EditTaskCommand {
    pub fn new(index: usize, descriptor: EditTaskDescriptor) -> Result<Self, CommandError> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit);
        }
        Ok(EditTaskCommand { index, descriptor })
    }
}

impl Command for EditTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(&model.filtered_task_list(), self.index, "task")?;
        let people = match &self.descriptor.person_indices {
            Some(indices) => resolve_people(model, indices)?,
            None => target.people.clone(),
        };

        let edited = Task {
            description: self.descriptor.description.clone().unwrap_or_else(|| target.description.clone()),
            date: self.descriptor.date.unwrap_or(target.date),
            completed: target.completed,
            tags: self.descriptor.tags.clone().unwrap_or_else(|| target.tags.clone()),
            people,
        };

        if edited != target && model.has_task(&edited) {
            return Err(CommandError::DuplicateTask);
        }
        model.set_task(&target, edited.clone());
        model.update_filtered_task_list(TaskPredicate::Always);
        Ok(CommandResult::mutated(Message::TaskEdited(edited.to_string()), ListTarget::Tasks))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTaskCommand {
    index: usize,
}

impl DeleteTaskCommand {
    pub fn new(index: usize) -> Self {
        DeleteTaskCommand { index }
    }
}

impl Command for DeleteTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(&model.filtered_task_list(), self.index, "task")?;
        model.delete_task(&target);
        Ok(CommandResult::mutated(Message::TaskDeleted(target.to_string()), ListTarget::Tasks))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskCommand {
    index: usize,
}

impl CompleteTaskCommand {
    pub fn new(index: usize) -> Self {
        CompleteTaskCommand { index }
    }
}

impl Command for CompleteTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(&model.filtered_task_list(), self.index, "task")?;
        if target.completed {
            return Err(CommandError::TaskAlreadyComplete);
        }

        let completed = target.clone().completed();
        if model.has_task(&completed) {
            return Err(CommandError::DuplicateTask);
        }
        model.set_task(&target, completed.clone());
        Ok(CommandResult::mutated(Message::TaskCompleted(completed.to_string()), ListTarget::Tasks))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksCommand;

impl Command for ListTasksCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_task_list(TaskPredicate::Always);
        Ok(CommandResult::read_only(Message::AllTasksListed, ListTarget::Tasks))
    }
}

/// Shows the tasks matching every criterion of a [`FindTaskDescriptor`].
///
/// The descriptor is compiled once, when the command is built; executing the
/// command only swaps the model's active task filter, so running it twice in a
/// row yields the same view and count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTaskCommand {
    descriptor: FindTaskDescriptor,
    predicate: TaskPredicate,
}

impl FindTaskCommand {
    pub fn new(descriptor: FindTaskDescriptor) -> Self {
        let predicate = descriptor.combine();
        FindTaskCommand { descriptor, predicate }
    }

    pub fn descriptor(&self) -> &FindTaskDescriptor {
        &self.descriptor
    }
}

impl Command for FindTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_task_list(self.predicate.clone());
        Ok(CommandResult::read_only(
            Message::TasksListed(model.filtered_task_list().len()),
            ListTarget::Tasks,
        ))
    }
}

/// Lists tasks dated strictly after now, earliest first.
///
/// The canonical list is sorted first and filtered second: the filtered view
/// keeps canonical order, so sorting afterwards would not reorder it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingTaskCommand {
    now: Option<NaiveDateTime>,
}

impl UpcomingTaskCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins "now" instead of reading the clock at execution time.
    pub fn at(now: NaiveDateTime) -> Self {
        UpcomingTaskCommand { now: Some(now) }
    }
}

impl Command for UpcomingTaskCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let now = self.now.unwrap_or_else(|| Local::now().naive_local());
        model.sort_task_list();
        model.update_filtered_task_list(TaskPredicate::After(now));
        Ok(CommandResult::mutated(
            Message::TasksListed(model.filtered_task_list().len()),
            ListTarget::Tasks,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearTasksCommand;

impl Command for ClearTasksCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear_task_list();
        Ok(CommandResult::mutated(Message::TaskListCleared, ListTarget::Tasks))
    }
}
