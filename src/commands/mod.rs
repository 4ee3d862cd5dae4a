pub mod init;
pub mod person;
pub mod task;

use crate::{
    libs::{
        command::{Command, ListTarget},
        messages::Message,
        model::Model,
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_success,
    storage::StorageManager,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure where data is stored")]
    Init(init::InitArgs),
    #[command(about = "Manage the address book", arg_required_else_help = true)]
    Person(person::PersonArgs),
    #[command(about = "Manage the task list", arg_required_else_help = true)]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Person(args) => person::cmd(args),
            Commands::Task(args) => task::cmd(args),
        }
    }
}

/// Loads the model, executes `command`, saves if it changed anything and
/// renders the list it targets.
pub(crate) fn run(command: &dyn Command) -> Result<()> {
    let storage = StorageManager::new()?;
    let model = storage.load()?;
    execute(&storage, model, command)
}

/// Same as [`run`] for callers that needed to inspect the model first.
pub(crate) fn execute(storage: &StorageManager, mut model: Model, command: &dyn Command) -> Result<()> {
    let result = command.execute(&mut model)?;
    msg_debug!(format!("{:?}", result));
    if result.mutated {
        storage.save(&model)?;
        msg_debug!(Message::DataSaved);
    }

    msg_success!(result.message);
    render(&model, result.target);
    Ok(())
}

fn render(model: &Model, target: ListTarget) {
    match target {
        ListTarget::Persons => {
            let persons = model.filtered_person_list();
            if persons.is_empty() {
                msg_info!(Message::NoPersonsFound);
            } else {
                msg_print!(Message::PersonsHeader, true);
                View::persons(&persons);
            }
        }
        ListTarget::Tasks => {
            let tasks = model.filtered_task_list();
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
            } else {
                msg_print!(Message::TasksHeader, true);
                View::tasks(&tasks);
            }
        }
    }
}

/// Asks before a destructive operation unless `assume_yes` is set.
pub(crate) fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
    }
    Ok(confirmed)
}
