use super::{confirm, execute, run};
use crate::{
    libs::{
        command::person::{
            AddPersonCommand, ClearPeopleCommand, DeletePersonCommand, EditPersonCommand, EditPersonDescriptor,
            FindPersonCommand, ListPeopleCommand,
        },
        error::FilterError,
        filter::FindPersonDescriptor,
        messages::Message,
        person::{Address, Email, Name, Person, Phone},
        tag::Tag,
    },
    storage::StorageManager,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::BTreeSet;

#[derive(Debug, Args)]
pub struct PersonArgs {
    #[command(subcommand)]
    command: PersonCommand,
}

#[derive(Debug, Subcommand)]
enum PersonCommand {
    /// Add a person to the address book
    Add {
        #[arg(short, long)]
        name: Name,
        #[arg(short, long)]
        phone: Phone,
        #[arg(short, long)]
        email: Email,
        #[arg(short, long)]
        address: Address,
        /// Tag to attach, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<Tag>,
    },
    /// Edit the person at INDEX of the displayed list
    Edit {
        index: usize,
        #[arg(short, long)]
        name: Option<Name>,
        #[arg(short, long)]
        phone: Option<Phone>,
        #[arg(short, long)]
        email: Option<Email>,
        #[arg(short, long)]
        address: Option<Address>,
        /// Replace all tags, repeatable
        #[arg(short, long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<Tag>,
        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },
    /// Delete the person at INDEX of the displayed list
    Delete { index: usize },
    /// List every person
    List,
    /// Find persons matching all given criteria
    Find(FindPersonArgs),
    /// Remove every person
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct FindPersonArgs {
    /// Name keyword, repeatable; a quoted value may hold several
    #[arg(short, long = "name")]
    names: Vec<String>,
    #[arg(short, long = "phone")]
    phones: Vec<String>,
    #[arg(short, long = "email")]
    emails: Vec<String>,
    #[arg(short, long = "address")]
    addresses: Vec<String>,
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

impl TryFrom<FindPersonArgs> for FindPersonDescriptor {
    type Error = FilterError;

    fn try_from(args: FindPersonArgs) -> Result<Self, Self::Error> {
        let mut descriptor = FindPersonDescriptor::new();
        if !args.names.is_empty() {
            descriptor.set_name(&args.names)?;
        }
        if !args.phones.is_empty() {
            descriptor.set_phone(&args.phones)?;
        }
        if !args.emails.is_empty() {
            descriptor.set_email(&args.emails)?;
        }
        if !args.addresses.is_empty() {
            descriptor.set_address(&args.addresses)?;
        }
        if !args.tags.is_empty() {
            descriptor.set_tags(&args.tags)?;
        }

        if !descriptor.is_any_field_set() {
            return Err(FilterError::NoCriteria);
        }
        Ok(descriptor)
    }
}

pub fn cmd(args: PersonArgs) -> Result<()> {
    match args.command {
        PersonCommand::Add {
            name,
            phone,
            email,
            address,
            tags,
        } => {
            let person = Person::new(name, phone, email, address, tags.into_iter().collect());
            run(&AddPersonCommand::new(person))
        }
        PersonCommand::Edit {
            index,
            name,
            phone,
            email,
            address,
            tags,
            clear_tags,
        } => {
            let tags = match (clear_tags, tags.is_empty()) {
                (true, _) => Some(BTreeSet::new()),
                (false, true) => None,
                (false, false) => Some(tags.into_iter().collect()),
            };
            let descriptor = EditPersonDescriptor {
                name,
                phone,
                email,
                address,
                tags,
            };
            run(&EditPersonCommand::new(index, descriptor)?)
        }
        PersonCommand::Delete { index } => run(&DeletePersonCommand::new(index)),
        PersonCommand::List => run(&ListPeopleCommand),
        PersonCommand::Find(find_args) => run(&FindPersonCommand::new(find_args.try_into()?)),
        PersonCommand::Clear { yes } => {
            let storage = StorageManager::new()?;
            let model = storage.load()?;
            if !confirm(Message::ConfirmClearAddressBook(model.address_book().len()), yes)? {
                return Ok(());
            }
            execute(&storage, model, &ClearPeopleCommand)
        }
    }
}
