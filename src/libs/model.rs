//! In-memory application state and its filtered views.
//!
//! The model owns the canonical [`AddressBook`] and [`TaskList`] together with
//! one active predicate for each. The filtered views are recomputed eagerly
//! after every mutation, so reading a view is always consistent with the
//! latest data. Presentation code that wants to react to changes registers a
//! listener with [`Model::subscribe`]; it is called after each change with a
//! [`ModelEvent`] naming what changed.
//!
//! Tasks refer to persons by name, so renaming or removing a person here also
//! rewrites every task that references them.

use super::address_book::AddressBook;
use super::person::Person;
use super::predicate::{PersonPredicate, TaskPredicate};
use super::task::Task;
use super::task_list::TaskList;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    PersonsChanged,
    TasksChanged,
    PersonFilterChanged,
    TaskFilterChanged,
}

pub type Listener = Box<dyn FnMut(ModelEvent)>;

#[derive(Default)]
pub struct Model {
    address_book: AddressBook,
    task_list: TaskList,
    person_filter: PersonPredicate,
    task_filter: TaskPredicate,
    filtered_persons: Vec<usize>,
    filtered_tasks: Vec<usize>,
    listeners: Vec<Listener>,
}

impl Model {
    pub fn new(address_book: AddressBook, task_list: TaskList) -> Self {
        let mut model = Model {
            address_book,
            task_list,
            ..Default::default()
        };
        model.refresh_persons();
        model.refresh_tasks();
        model
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    // === PERSONS ===

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.contains(person)
    }

    pub fn add_person(&mut self, person: Person) {
        debug!(name = %person.name, "adding person");
        self.address_book.add(person);
        self.persons_changed();
    }

    /// Replaces `target` with `edited`; a rename is carried over to every task
    /// that referenced the old name.
    pub fn set_person(&mut self, target: &Person, edited: Person) {
        let renamed = target.name != edited.name;
        let old_name = target.name.clone();
        let new_name = edited.name.clone();

        if !self.address_book.set(target, edited) {
            return;
        }
        self.persons_changed();

        if renamed {
            debug!(from = %old_name, to = %new_name, "renaming person in task references");
            for task in self.task_list.tasks_mut() {
                if task.remove_person(&old_name) {
                    task.people.insert(new_name.clone());
                }
            }
            self.tasks_changed();
        }
    }

    /// Removes `target` and drops every task reference to them.
    pub fn delete_person(&mut self, target: &Person) {
        if !self.address_book.remove(target) {
            return;
        }
        debug!(name = %target.name, "deleted person");
        self.persons_changed();

        let mut touched = false;
        for task in self.task_list.tasks_mut() {
            touched |= task.remove_person(&target.name);
        }
        if touched {
            self.tasks_changed();
        }
    }

    /// Empties the address book; tasks keep existing but lose their people.
    pub fn clear_address_book(&mut self) {
        self.address_book = AddressBook::new();
        self.persons_changed();

        for task in self.task_list.tasks_mut() {
            task.people.clear();
        }
        self.tasks_changed();
    }

    pub fn person_filter(&self) -> &PersonPredicate {
        &self.person_filter
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        debug!(?predicate, "person filter replaced");
        self.person_filter = predicate;
        self.refresh_persons();
        self.notify(ModelEvent::PersonFilterChanged);
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        let persons = self.address_book.persons();
        self.filtered_persons.iter().map(|&index| &persons[index]).collect()
    }

    // === TASKS ===

    pub fn task_list(&self) -> &TaskList {
        &self.task_list
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.task_list.contains(task)
    }

    pub fn add_task(&mut self, task: Task) {
        debug!(description = %task.description, "adding task");
        self.task_list.add(task);
        self.tasks_changed();
    }

    pub fn set_task(&mut self, target: &Task, edited: Task) {
        if self.task_list.set(target, edited) {
            self.tasks_changed();
        }
    }

    pub fn delete_task(&mut self, target: &Task) {
        if self.task_list.remove(target) {
            self.tasks_changed();
        }
    }

    pub fn clear_task_list(&mut self) {
        self.task_list = TaskList::new();
        self.tasks_changed();
    }

    /// Sorts the canonical list chronologically. The active filter is
    /// re-applied afterwards, so the view keeps the new order.
    pub fn sort_task_list(&mut self) {
        self.task_list.sort();
        self.tasks_changed();
    }

    pub fn task_filter(&self) -> &TaskPredicate {
        &self.task_filter
    }

    pub fn update_filtered_task_list(&mut self, predicate: TaskPredicate) {
        debug!(?predicate, "task filter replaced");
        self.task_filter = predicate;
        self.refresh_tasks();
        self.notify(ModelEvent::TaskFilterChanged);
    }

    pub fn filtered_task_list(&self) -> Vec<&Task> {
        let tasks = self.task_list.tasks();
        self.filtered_tasks.iter().map(|&index| &tasks[index]).collect()
    }

    // === VIEW MAINTENANCE ===

    fn persons_changed(&mut self) {
        self.refresh_persons();
        self.notify(ModelEvent::PersonsChanged);
    }

    fn tasks_changed(&mut self) {
        self.refresh_tasks();
        self.notify(ModelEvent::TasksChanged);
    }

    fn refresh_persons(&mut self) {
        self.filtered_persons = self
            .address_book
            .persons()
            .iter()
            .enumerate()
            .filter(|(_, person)| self.person_filter.test(person))
            .map(|(index, _)| index)
            .collect();
    }

    fn refresh_tasks(&mut self) {
        self.filtered_tasks = self
            .task_list
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, task)| self.task_filter.test(task))
            .map(|(index, _)| index)
            .collect();
    }

    fn notify(&mut self, event: ModelEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
