//! Person records kept in the address book.
//!
//! Every field is a validated newtype; a [`Person`] can only be built from
//! values that already passed validation, so the rest of the application never
//! re-checks them. A person's [`Name`] is its identity: two persons with the
//! same name (ignoring case) are the same person, and tasks refer to persons
//! by name.

use super::error::FieldError;
use super::tag::{format_tags, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let valid = value.chars().next().is_some_and(char::is_alphanumeric)
            && value.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if valid {
            Ok(Name(value.to_string()))
        } else {
            Err(FieldError::InvalidName(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive identity comparison used for duplicate detection.
    pub fn is_same_name(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(Phone(value.to_string()))
        } else {
            Err(FieldError::InvalidPhone(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    const SPECIAL_CHARACTERS: &'static [char] = &['+', '_', '.', '-'];

    pub fn new(value: &str) -> Result<Self, FieldError> {
        if Self::is_valid(value) {
            Ok(Email(value.to_string()))
        } else {
            Err(FieldError::InvalidEmail(value.to_string()))
        }
    }

    fn is_valid(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };

        let local_ok = !local.is_empty()
            && local.chars().all(|c| c.is_alphanumeric() || Self::SPECIAL_CHARACTERS.contains(&c))
            && !local.starts_with(Self::SPECIAL_CHARACTERS)
            && !local.ends_with(Self::SPECIAL_CHARACTERS);

        let labels: Vec<&str> = domain.split('.').collect();
        let domain_ok = labels.iter().all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        }) && labels.last().is_some_and(|last| last.chars().count() >= 2);

        local_ok && domain_ok
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if value.trim().is_empty() {
            Err(FieldError::InvalidAddress)
        } else {
            Ok(Address(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field {
    ($($field:ident),*) => {
        $(
            impl FromStr for $field {
                type Err = FieldError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $field::new(s.trim())
                }
            }

            impl TryFrom<String> for $field {
                type Error = FieldError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    $field::new(&value)
                }
            }

            impl From<$field> for String {
                fn from(field: $field) -> Self {
                    field.0
                }
            }

            impl fmt::Display for $field {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_field!(Name, Phone, Email, Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Person {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Two persons are the same person when their names match, ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.is_same_name(&other.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: {}", format_tags(&self.tags))?;
        }
        Ok(())
    }
}
