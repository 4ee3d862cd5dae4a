use super::person::{Name, Person};
use super::tag::format_tags;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn persons(persons: &[&Person]) {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "PHONE", "EMAIL", "ADDRESS", "TAGS"]);
        for (index, person) in persons.iter().enumerate() {
            table.add_row(row![
                index + 1,
                person.name,
                person.phone,
                person.email,
                person.address,
                format_tags(&person.tags)
            ]);
        }
        table.printstd();
    }

    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["#", "DESCRIPTION", "DATE", "DONE", "TAGS", "PEOPLE"]);
        for (index, task) in tasks.iter().enumerate() {
            let date = task.date.map(|date| date.to_string()).unwrap_or_default();
            let done = if task.completed { "✔" } else { "" };
            let people = task.people.iter().map(Name::as_str).collect::<Vec<_>>().join(", ");
            table.add_row(row![index + 1, task.description, date, done, format_tags(&task.tags), people]);
        }
        table.printstd();
    }
}
