//! Data shown to first-time users before anything has been saved.

use super::address_book::AddressBook;
use super::person::{Address, Email, Name, Person, Phone};
use super::tag::Tag;
use super::task::{Task, TaskDescription};
use super::task_list::TaskList;
use std::collections::BTreeSet;

const SAMPLE_PERSONS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Blk 30 Geylang Street 29, #06-40", &["friends"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens, #07-18", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74, #11-04", &["neighbours"]),
    ("David Li", "91031282", "lidavid@example.com", "Blk 436 Serangoon Gardens Street 26, #16-43", &["family"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "Blk 47 Tampines Street 20, #17-35", &["classmates"]),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "Blk 45 Aljunied Street 85, #11-31", &["colleagues"]),
];

const SAMPLE_TASKS: &[(&str, &[&str])] = &[
    ("Submit CS2100 Assignment by 23:59", &["homework"]),
    ("ST2334 quiz before Friday", &["homework"]),
    ("Do PR review", &["groupwork"]),
    ("Catch up with ST lectures", &["classmates"]),
];

/// Builds a tag set from names known to be valid.
fn tag_set(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().filter_map(|name| Tag::new(name).ok()).collect()
}

pub fn sample_persons() -> Vec<Person> {
    SAMPLE_PERSONS
        .iter()
        .filter_map(|(name, phone, email, address, tags)| {
            Some(Person::new(
                Name::new(name).ok()?,
                Phone::new(phone).ok()?,
                Email::new(email).ok()?,
                Address::new(address).ok()?,
                tag_set(tags),
            ))
        })
        .collect()
}

pub fn sample_tasks() -> Vec<Task> {
    SAMPLE_TASKS
        .iter()
        .filter_map(|(description, tags)| Some(Task::new(TaskDescription::new(description).ok()?).with_tags(tag_set(tags))))
        .collect()
}

pub fn sample_address_book() -> AddressBook {
    let mut address_book = AddressBook::new();
    for person in sample_persons() {
        address_book.add(person);
    }
    address_book
}

pub fn sample_task_list() -> TaskList {
    let mut task_list = TaskList::new();
    for task in sample_tasks() {
        task_list.add(task);
    }
    task_list
}
