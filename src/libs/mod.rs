//! Core library modules for the dash application.
//!
//! ## Features
//!
//! - **Domain Types**: Persons, tasks, tags and their validated fields
//! - **Search**: Single-field predicates and the descriptors combining them
//! - **State**: The model with its auto-refreshing filtered views
//! - **Commands**: Operations executed against the model
//! - **Infrastructure**: Configuration, data directory, messaging, table views
//!
//! ## Usage
//!
//! ```rust
//! use dash::libs::command::{task::FindTaskCommand, Command};
//! use dash::libs::filter::FindTaskDescriptor;
//! use dash::libs::model::Model;
//! use dash::libs::sample_data;
//!
//! let mut model = Model::new(sample_data::sample_address_book(), sample_data::sample_task_list());
//! let mut descriptor = FindTaskDescriptor::new();
//! descriptor.set_tags(&["homework"])?;
//! let result = FindTaskCommand::new(descriptor).execute(&mut model)?;
//! assert_eq!(result.message.to_string(), "2 tasks listed!");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod address_book;
pub mod command;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod messages;
pub mod model;
pub mod person;
pub mod predicate;
pub mod sample_data;
pub mod tag;
pub mod task;
pub mod task_list;
pub mod view;
