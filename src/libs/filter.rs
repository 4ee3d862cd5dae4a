//! Find descriptors: accumulate per-field search criteria and combine them.
//!
//! A descriptor holds at most one compiled predicate per field. Setting a
//! field validates the raw input immediately, so a descriptor that exists is
//! always complete and [`FindTaskDescriptor::combine`] cannot fail.
//!
//! ```rust
//! use dash::libs::filter::FindTaskDescriptor;
//!
//! let mut descriptor = FindTaskDescriptor::new();
//! descriptor.set_description(&["homework"])?;
//! descriptor.set_completion_status("incomplete")?;
//! let predicate = descriptor.combine();
//! # Ok::<(), dash::libs::error::FilterError>(())
//! ```

use super::error::{FieldError, FilterError};
use super::predicate::{DateCriterion, Keywords, PersonPredicate, TaskPredicate};
use super::tag::Tag;
use super::task::TaskDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindTaskDescriptor {
    description: Option<TaskPredicate>,
    tags: Option<TaskPredicate>,
    people: Option<TaskPredicate>,
    date: Option<TaskPredicate>,
    completion_status: Option<TaskPredicate>,
}

impl FindTaskDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_set(&self) -> bool {
        self.slots().any(Option::is_some)
    }

    pub fn set_description<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.description = Some(TaskPredicate::DescriptionContains(Keywords::new("description", keywords)?));
        Ok(())
    }

    pub fn description(&self) -> Option<&TaskPredicate> {
        self.description.as_ref()
    }

    /// Every keyword must itself be a valid tag name.
    pub fn set_tags<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        let keywords = Keywords::new("tag", keywords)?;
        if let Some(invalid) = keywords.as_slice().iter().find(|keyword| !Tag::is_valid(keyword)) {
            return Err(FieldError::InvalidTag(invalid.clone()).into());
        }
        self.tags = Some(TaskPredicate::HasTag(keywords));
        Ok(())
    }

    pub fn tags(&self) -> Option<&TaskPredicate> {
        self.tags.as_ref()
    }

    pub fn set_people<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.people = Some(TaskPredicate::InvolvesPerson(Keywords::new("person", keywords)?));
        Ok(())
    }

    pub fn people(&self) -> Option<&TaskPredicate> {
        self.people.as_ref()
    }

    pub fn set_date(&mut self, raw: &str) -> Result<(), FilterError> {
        let date: TaskDate = raw.parse()?;
        self.date = Some(TaskPredicate::Date(DateCriterion::On(date)));
        Ok(())
    }

    /// Inclusive calendar range. Replaces any single date set before.
    pub fn set_date_range(&mut self, from: &str, to: &str) -> Result<(), FilterError> {
        let from = from.parse::<TaskDate>()?.date();
        let to = to.parse::<TaskDate>()?.date();
        if from > to {
            return Err(FilterError::InvertedRange {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.date = Some(TaskPredicate::Date(DateCriterion::Between { from, to }));
        Ok(())
    }

    pub fn date(&self) -> Option<&TaskPredicate> {
        self.date.as_ref()
    }

    pub fn set_completion_status(&mut self, raw: &str) -> Result<(), FilterError> {
        let completed = parse_completion_status(raw)?;
        self.completion_status = Some(TaskPredicate::CompletionStatus(completed));
        Ok(())
    }

    pub fn completion_status(&self) -> Option<&TaskPredicate> {
        self.completion_status.as_ref()
    }

    /// ANDs every present slot, starting from the always-true predicate.
    ///
    /// Slots are folded in a fixed order (description, tags, people, date,
    /// completion status) so equal descriptors yield equal predicates.
    pub fn combine(&self) -> TaskPredicate {
        self.slots()
            .flatten()
            .cloned()
            .fold(TaskPredicate::Always, TaskPredicate::and)
    }

    fn slots(&self) -> impl Iterator<Item = &Option<TaskPredicate>> {
        [
            &self.description,
            &self.tags,
            &self.people,
            &self.date,
            &self.completion_status,
        ]
        .into_iter()
    }
}

fn parse_completion_status(raw: &str) -> Result<bool, FilterError> {
    match raw.trim().to_lowercase().as_str() {
        "complete" | "completed" | "done" | "true" | "yes" => Ok(true),
        "incomplete" | "undone" | "pending" | "false" | "no" => Ok(false),
        _ => Err(FilterError::InvalidCompletionStatus(raw.to_string())),
    }
}

/// Search criteria over the address book, combined the same way as
/// [`FindTaskDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindPersonDescriptor {
    name: Option<PersonPredicate>,
    phone: Option<PersonPredicate>,
    email: Option<PersonPredicate>,
    address: Option<PersonPredicate>,
    tags: Option<PersonPredicate>,
}

impl FindPersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_set(&self) -> bool {
        self.slots().any(Option::is_some)
    }

    pub fn set_name<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.name = Some(PersonPredicate::NameContains(Keywords::new("name", keywords)?));
        Ok(())
    }

    pub fn set_phone<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.phone = Some(PersonPredicate::PhoneContains(Keywords::new("phone", keywords)?));
        Ok(())
    }

    pub fn set_email<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.email = Some(PersonPredicate::EmailContains(Keywords::new("email", keywords)?));
        Ok(())
    }

    pub fn set_address<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        self.address = Some(PersonPredicate::AddressContains(Keywords::new("address", keywords)?));
        Ok(())
    }

    pub fn set_tags<S: AsRef<str>>(&mut self, keywords: &[S]) -> Result<(), FilterError> {
        let keywords = Keywords::new("tag", keywords)?;
        if let Some(invalid) = keywords.as_slice().iter().find(|keyword| !Tag::is_valid(keyword)) {
            return Err(FieldError::InvalidTag(invalid.clone()).into());
        }
        self.tags = Some(PersonPredicate::HasTag(keywords));
        Ok(())
    }

    pub fn combine(&self) -> PersonPredicate {
        self.slots()
            .flatten()
            .cloned()
            .fold(PersonPredicate::Always, PersonPredicate::and)
    }

    fn slots(&self) -> impl Iterator<Item = &Option<PersonPredicate>> {
        [&self.name, &self.phone, &self.email, &self.address, &self.tags].into_iter()
    }
}
