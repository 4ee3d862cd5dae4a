use super::error::FieldError;
use super::person::Name;
use super::tag::{format_tags, Tag};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const DATE_INPUT_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];
const TIME_INPUT_FORMATS: &[&str] = &["%H%M", "%H:%M"];
const DATE_STORAGE_FORMAT: &str = "%Y-%m-%d";
const TIME_STORAGE_FORMAT: &str = "%H:%M";
const DATE_DISPLAY_FORMAT: &str = "%d %b %Y";
const TIME_DISPLAY_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if value.trim().is_empty() {
            Err(FieldError::InvalidDescription)
        } else {
            Ok(TaskDescription(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskDescription {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskDescription::new(s.trim())
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TaskDescription::new(&value)
    }
}

impl From<TaskDescription> for String {
    fn from(description: TaskDescription) -> Self {
        description.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// When a task is due: always a calendar date, optionally a time of day.
///
/// Accepted input is `DATE`, `TIME` or `DATE, TIME`, where `DATE` is
/// `DD/MM/YYYY` or `YYYY-MM-DD` and `TIME` is `HHMM` or `HH:MM`. A time on
/// its own is taken to be today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl TaskDate {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        TaskDate { date, time }
    }

    /// Parses raw input, resolving a bare time against `today`.
    pub fn parse_with_today(raw: &str, today: NaiveDate) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidDate(raw.to_string());
        let raw = raw.trim();

        if let Some((date, time)) = raw.split_once(',') {
            let date = parse_date(date.trim()).ok_or_else(invalid)?;
            let time = parse_time(time.trim()).ok_or_else(invalid)?;
            return Ok(TaskDate::new(date, Some(time)));
        }

        if let Some(date) = parse_date(raw) {
            return Ok(TaskDate::new(date, None));
        }

        parse_time(raw)
            .map(|time| TaskDate::new(today, Some(time)))
            .ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// The instant this date refers to; a date without a time means midnight.
    pub fn moment(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    fn to_storage_string(self) -> String {
        match self.time {
            Some(time) => format!("{}, {}", self.date.format(DATE_STORAGE_FORMAT), time.format(TIME_STORAGE_FORMAT)),
            None => self.date.format(DATE_STORAGE_FORMAT).to_string(),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_INPUT_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_INPUT_FORMATS.iter().find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

impl FromStr for TaskDate {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskDate::parse_with_today(s, Local::now().date_naive())
    }
}

impl TryFrom<String> for TaskDate {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskDate> for String {
    fn from(date: TaskDate) -> Self {
        date.to_storage_string()
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_DISPLAY_FORMAT))?;
        if let Some(time) = self.time {
            write!(f, ", {}", time.format(TIME_DISPLAY_FORMAT))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: TaskDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<TaskDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub people: BTreeSet<Name>,
}

impl Task {
    pub fn new(description: TaskDescription) -> Self {
        Task {
            description,
            date: None,
            completed: false,
            tags: BTreeSet::new(),
            people: BTreeSet::new(),
        }
    }

    pub fn with_date(mut self, date: Option<TaskDate>) -> Self {
        self.date = date;
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_people(mut self, people: BTreeSet<Name>) -> Self {
        self.people = people;
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn references(&self, name: &Name) -> bool {
        self.people.iter().any(|person| person.is_same_name(name))
    }

    /// Drops every reference to `name`, ignoring case. Returns whether any was dropped.
    pub fn remove_person(&mut self, name: &Name) -> bool {
        let before = self.people.len();
        self.people.retain(|person| !person.is_same_name(name));
        self.people.len() != before
    }

    /// Chronological order: dated tasks by moment, undated tasks last.
    pub fn chronological(a: &Task, b: &Task) -> Ordering {
        match (&a.date, &b.date) {
            (Some(a), Some(b)) => a.moment().cmp(&b.moment()),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if let Some(date) = &self.date {
            write!(f, "; Date: {}", date)?;
        }
        if self.completed {
            write!(f, "; Completed")?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: {}", format_tags(&self.tags))?;
        }
        if !self.people.is_empty() {
            let people: Vec<&str> = self.people.iter().map(Name::as_str).collect();
            write!(f, "; People: {}", people.join(", "))?;
        }
        Ok(())
    }
}
