use super::error::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A label attached to a person or a task.
///
/// Tags are compared exactly when stored, so `Homework` and `homework` are
/// two different tags. Searching by tag is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(name: &str) -> Result<Self, FieldError> {
        if Self::is_valid(name) {
            Ok(Tag(name.to_string()))
        } else {
            Err(FieldError::InvalidTag(name.to_string()))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(char::is_alphanumeric)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s.trim())
    }
}

impl TryFrom<String> for Tag {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Parses every name into a tag, stopping at the first invalid one.
pub fn parse_tags<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<Tag>, FieldError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// Renders a tag set as `[a] [b]` for tables and messages.
pub fn format_tags(tags: &BTreeSet<Tag>) -> String {
    tags.iter().map(Tag::to_string).collect::<Vec<_>>().join(" ")
}
