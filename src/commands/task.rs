use super::{confirm, execute, run};
use crate::{
    libs::{
        command::task::{
            AddTaskCommand, ClearTasksCommand, CompleteTaskCommand, DeleteTaskCommand, EditTaskCommand,
            EditTaskDescriptor, FindTaskCommand, ListTasksCommand, UpcomingTaskCommand,
        },
        error::FilterError,
        filter::FindTaskDescriptor,
        messages::Message,
        tag::Tag,
        task::{Task, TaskDate, TaskDescription},
    },
    storage::StorageManager,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::BTreeSet;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task, e.g. `task add -d "CS2103T Quiz 9" --date "21/10/2021, 1500" -t quizzes -p 3`
    Add {
        #[arg(short, long)]
        description: TaskDescription,
        /// DATE, TIME or "DATE, TIME"
        #[arg(long)]
        date: Option<TaskDate>,
        /// Tag to attach, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<Tag>,
        /// Index of a person in the person list, repeatable
        #[arg(short, long = "person")]
        people: Vec<usize>,
    },
    /// Edit the task at INDEX of the displayed list
    Edit {
        index: usize,
        #[arg(short, long)]
        description: Option<TaskDescription>,
        #[arg(long, conflicts_with = "clear_date")]
        date: Option<TaskDate>,
        /// Remove the date
        #[arg(long)]
        clear_date: bool,
        /// Replace all tags, repeatable
        #[arg(short, long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<Tag>,
        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
        /// Replace all people by person list indices, repeatable
        #[arg(short, long = "person", conflicts_with = "clear_people")]
        people: Vec<usize>,
        /// Remove all people
        #[arg(long)]
        clear_people: bool,
    },
    /// Delete the task at INDEX of the displayed list
    Delete { index: usize },
    /// Mark the task at INDEX of the displayed list as complete
    Complete { index: usize },
    /// List every task
    List,
    /// Find tasks matching all given criteria, e.g. `task find homework -t groupwork`
    Find(FindTaskArgs),
    /// List tasks dated after now, earliest first
    Upcoming,
    /// Remove every task
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct FindTaskArgs {
    /// Description keywords
    keywords: Vec<String>,
    /// Tag keyword, repeatable
    #[arg(short, long = "tag")]
    tags: Vec<String>,
    /// Person name keyword, repeatable
    #[arg(short, long = "person")]
    people: Vec<String>,
    /// DATE, TIME or "DATE, TIME"
    #[arg(long, conflicts_with_all = ["from", "to"])]
    date: Option<String>,
    /// Start of an inclusive date range
    #[arg(long, requires = "to")]
    from: Option<String>,
    /// End of an inclusive date range
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// complete or incomplete
    #[arg(short, long)]
    status: Option<String>,
}

impl TryFrom<FindTaskArgs> for FindTaskDescriptor {
    type Error = FilterError;

    fn try_from(args: FindTaskArgs) -> Result<Self, Self::Error> {
        let mut descriptor = FindTaskDescriptor::new();
        if !args.keywords.is_empty() {
            descriptor.set_description(&args.keywords)?;
        }
        if !args.tags.is_empty() {
            descriptor.set_tags(&args.tags)?;
        }
        if !args.people.is_empty() {
            descriptor.set_people(&args.people)?;
        }
        if let Some(date) = &args.date {
            descriptor.set_date(date)?;
        }
        if let (Some(from), Some(to)) = (&args.from, &args.to) {
            descriptor.set_date_range(from, to)?;
        }
        if let Some(status) = &args.status {
            descriptor.set_completion_status(status)?;
        }

        if !descriptor.is_any_field_set() {
            return Err(FilterError::NoCriteria);
        }
        Ok(descriptor)
    }
}

/// `clear` wins over values; no values and no `clear` means "keep".
fn replacement<T: Ord>(values: Vec<T>, clear: bool) -> Option<BTreeSet<T>> {
    if clear {
        Some(BTreeSet::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            description,
            date,
            tags,
            people,
        } => {
            let task = Task::new(description).with_date(date).with_tags(tags.into_iter().collect());
            run(&AddTaskCommand::new(task, people))
        }
        TaskCommand::Edit {
            index,
            description,
            date,
            clear_date,
            tags,
            clear_tags,
            people,
            clear_people,
        } => {
            let descriptor = EditTaskDescriptor {
                description,
                date: if clear_date { Some(None) } else { date.map(Some) },
                tags: replacement(tags, clear_tags),
                person_indices: replacement(people, clear_people).map(|indices| indices.into_iter().collect()),
            };
            run(&EditTaskCommand::new(index, descriptor)?)
        }
        TaskCommand::Delete { index } => run(&DeleteTaskCommand::new(index)),
        TaskCommand::Complete { index } => run(&CompleteTaskCommand::new(index)),
        TaskCommand::List => run(&ListTasksCommand),
        TaskCommand::Find(find_args) => run(&FindTaskCommand::new(find_args.try_into()?)),
        TaskCommand::Upcoming => run(&UpcomingTaskCommand::new()),
        TaskCommand::Clear { yes } => {
            let storage = StorageManager::new()?;
            let model = storage.load()?;
            if !confirm(Message::ConfirmClearTaskList(model.task_list().len()), yes)? {
                return Ok(());
            }
            execute(&storage, model, &ClearTasksCommand)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, Parser};

    #[derive(Debug, Parser)]
    struct FindCli {
        #[command(flatten)]
        args: FindTaskArgs,
    }

    fn parse(args: &[&str]) -> Result<FindTaskArgs, clap::Error> {
        FindCli::try_parse_from(std::iter::once("find").chain(args.iter().copied())).map(|cli| cli.args)
    }

    #[test]
    fn test_keywords_after_tag_stay_description() {
        let descriptor = FindTaskDescriptor::try_from(parse(&["-t", "groupwork", "homework"]).unwrap()).unwrap();

        let mut expected = FindTaskDescriptor::new();
        expected.set_description(&["homework"]).unwrap();
        expected.set_tags(&["groupwork"]).unwrap();
        assert_eq!(descriptor, expected);
    }

    #[test]
    fn test_repeated_options_collect_keywords() {
        let args = parse(&["-t", "groupwork", "-t", "classmates", "-p", "alex", "review"]).unwrap();
        let descriptor = FindTaskDescriptor::try_from(args).unwrap();

        let mut expected = FindTaskDescriptor::new();
        expected.set_description(&["review"]).unwrap();
        expected.set_tags(&["groupwork", "classmates"]).unwrap();
        expected.set_people(&["alex"]).unwrap();
        assert_eq!(descriptor, expected);
    }

    #[test]
    fn test_empty_find_is_rejected() {
        let args = parse(&[]).unwrap();
        assert_eq!(FindTaskDescriptor::try_from(args), Err(FilterError::NoCriteria));
    }

    #[test]
    fn test_date_range_needs_both_ends() {
        let error = parse(&["--from", "01/10/2021"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = parse(&["--to", "31/10/2021"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let args = parse(&["--from", "01/10/2021", "--to", "31/10/2021"]).unwrap();
        assert!(FindTaskDescriptor::try_from(args).unwrap().date().is_some());
    }

    #[test]
    fn test_date_conflicts_with_range() {
        let error = parse(&["--date", "21/10/2021", "--from", "01/10/2021", "--to", "31/10/2021"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let args = parse(&["-s", "sometimes"]).unwrap();
        assert_eq!(
            FindTaskDescriptor::try_from(args),
            Err(FilterError::InvalidCompletionStatus("sometimes".to_string()))
        );
    }
}
