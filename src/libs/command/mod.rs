//! Commands that execute against the [`Model`].
//!
//! A command is built from already-validated input, so executing it can only
//! fail on conditions that depend on the model's current state (an index past
//! the end of the displayed list, a duplicate entry). Every command checks
//! those conditions before mutating anything.

pub mod person;
pub mod task;

use super::error::CommandError;
use super::messages::Message;
use super::model::Model;

/// Which list the presentation layer should render after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Persons,
    Tasks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: Message,
    pub target: ListTarget,
    /// Whether the canonical data changed and must be saved.
    pub mutated: bool,
}

impl CommandResult {
    pub fn read_only(message: Message, target: ListTarget) -> Self {
        CommandResult {
            message,
            target,
            mutated: false,
        }
    }

    pub fn mutated(message: Message, target: ListTarget) -> Self {
        CommandResult {
            message,
            target,
            mutated: true,
        }
    }
}

pub trait Command {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// Resolves a 1-based index into the displayed list.
pub(crate) fn resolve<T: Clone>(items: &[&T], index: usize, kind: &'static str) -> Result<T, CommandError> {
    index
        .checked_sub(1)
        .and_then(|zero_based| items.get(zero_based))
        .map(|item| (*item).clone())
        .ok_or(CommandError::InvalidIndex { kind, index })
}
