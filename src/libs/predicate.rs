//! Single-field matchers over tasks and persons.
//!
//! Predicates are plain values: they can be compared, cloned, logged and
//! stored as the model's active filter. Evaluating one never fails; a task
//! without the attribute being tested simply does not match.

use super::error::FilterError;
use super::person::Person;
use super::task::{Task, TaskDate};
use chrono::{NaiveDate, NaiveDateTime};

/// A non-empty list of case-folded search keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Builds keywords for `field`, splitting on whitespace and dropping blanks.
    pub fn new<S: AsRef<str>>(field: &'static str, raw: &[S]) -> Result<Self, FilterError> {
        let keywords: Vec<String> = raw
            .iter()
            .flat_map(|value| value.as_ref().split_whitespace())
            .map(str::to_lowercase)
            .collect();

        if keywords.is_empty() {
            return Err(FilterError::EmptyKeywords(field));
        }
        Ok(Keywords(keywords))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// True if `text` contains any keyword, ignoring case.
    pub fn any_within(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.0.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    /// True if `text` equals any keyword, ignoring case.
    pub fn any_equal(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.0.iter().any(|keyword| *keyword == text)
    }
}

/// Date criterion used by the date slot of a task search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCriterion {
    /// Same calendar day; also the same time when the target has one.
    On(TaskDate),
    /// Calendar day within `from..=to`.
    Between { from: NaiveDate, to: NaiveDate },
}

impl DateCriterion {
    fn matches(&self, date: &TaskDate) -> bool {
        match self {
            DateCriterion::On(target) => {
                date.date() == target.date() && target.time().map_or(true, |time| date.time() == Some(time))
            }
            DateCriterion::Between { from, to } => (*from..=*to).contains(&date.date()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskPredicate {
    /// Matches every task.
    #[default]
    Always,
    DescriptionContains(Keywords),
    HasTag(Keywords),
    InvolvesPerson(Keywords),
    Date(DateCriterion),
    CompletionStatus(bool),
    /// Dated strictly after the given moment.
    After(NaiveDateTime),
    /// Conjunction; an empty list matches every task.
    All(Vec<TaskPredicate>),
}

impl TaskPredicate {
    pub fn test(&self, task: &Task) -> bool {
        match self {
            TaskPredicate::Always => true,
            TaskPredicate::DescriptionContains(keywords) => keywords.any_within(task.description.as_str()),
            TaskPredicate::HasTag(keywords) => task.tags.iter().any(|tag| keywords.any_equal(tag.name())),
            TaskPredicate::InvolvesPerson(keywords) => task.people.iter().any(|name| keywords.any_within(name.as_str())),
            TaskPredicate::Date(criterion) => task.date.as_ref().is_some_and(|date| criterion.matches(date)),
            TaskPredicate::CompletionStatus(completed) => task.completed == *completed,
            TaskPredicate::After(now) => task.date.as_ref().is_some_and(|date| date.moment() > *now),
            TaskPredicate::All(predicates) => predicates.iter().all(|predicate| predicate.test(task)),
        }
    }

    /// Logical AND. `Always` is the identity, and nested conjunctions are flattened.
    pub fn and(self, other: TaskPredicate) -> TaskPredicate {
        match (self, other) {
            (TaskPredicate::Always, other) => other,
            (this, TaskPredicate::Always) => this,
            (TaskPredicate::All(mut left), TaskPredicate::All(right)) => {
                left.extend(right);
                TaskPredicate::All(left)
            }
            (TaskPredicate::All(mut left), other) => {
                left.push(other);
                TaskPredicate::All(left)
            }
            (this, TaskPredicate::All(right)) => {
                let mut all = vec![this];
                all.extend(right);
                TaskPredicate::All(all)
            }
            (this, other) => TaskPredicate::All(vec![this, other]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonPredicate {
    #[default]
    Always,
    NameContains(Keywords),
    PhoneContains(Keywords),
    EmailContains(Keywords),
    AddressContains(Keywords),
    HasTag(Keywords),
    All(Vec<PersonPredicate>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::Always => true,
            PersonPredicate::NameContains(keywords) => keywords.any_within(person.name.as_str()),
            PersonPredicate::PhoneContains(keywords) => keywords.any_within(person.phone.as_str()),
            PersonPredicate::EmailContains(keywords) => keywords.any_within(person.email.as_str()),
            PersonPredicate::AddressContains(keywords) => keywords.any_within(person.address.as_str()),
            PersonPredicate::HasTag(keywords) => person.tags.iter().any(|tag| keywords.any_equal(tag.name())),
            PersonPredicate::All(predicates) => predicates.iter().all(|predicate| predicate.test(person)),
        }
    }

    pub fn and(self, other: PersonPredicate) -> PersonPredicate {
        match (self, other) {
            (PersonPredicate::Always, other) => other,
            (this, PersonPredicate::Always) => this,
            (PersonPredicate::All(mut left), other) => {
                left.push(other);
                PersonPredicate::All(left)
            }
            (this, other) => PersonPredicate::All(vec![this, other]),
        }
    }
}
