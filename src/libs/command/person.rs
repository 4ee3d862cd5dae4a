use super::{resolve, Command, CommandResult, ListTarget};
use crate::libs::error::CommandError;
use crate::libs::filter::FindPersonDescriptor;
use crate::libs::messages::Message;
use crate::libs::model::Model;
use crate::libs::person::{Address, Email, Name, Person, Phone};
use crate::libs::predicate::PersonPredicate;
use crate::libs::tag::Tag;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        AddPersonCommand { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone());
        Ok(CommandResult::mutated(
            Message::PersonAdded(self.person.to_string()),
            ListTarget::Persons,
        ))
    }
}

/// Fields to overwrite on an existing person; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.address.is_some() || self.tags.is_some()
    }

    fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    index: usize,
    descriptor: EditPersonDescriptor,
}

impl EditPersonCommand {
    pub fn new(index: usize, descriptor: EditPersonDescriptor) -> Result<Self, CommandError> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit);
        }
        Ok(EditPersonCommand { index, descriptor })
    }
}

impl Command for EditPersonCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(&model.filtered_person_list(), self.index, "person")?;
        let edited = self.descriptor.apply(&target);

        let collides = model
            .address_book()
            .persons()
            .iter()
            .any(|person| *person != target && person.is_same_person(&edited));
        if collides {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&target, edited.clone());
        model.update_filtered_person_list(PersonPredicate::Always);
        Ok(CommandResult::mutated(
            Message::PersonEdited(edited.to_string()),
            ListTarget::Persons,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    index: usize,
}

impl DeletePersonCommand {
    pub fn new(index: usize) -> Self {
        DeletePersonCommand { index }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(&model.filtered_person_list(), self.index, "person")?;
        model.delete_person(&target);
        Ok(CommandResult::mutated(
            Message::PersonDeleted(target.to_string()),
            ListTarget::Persons,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPeopleCommand;

impl Command for ListPeopleCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonPredicate::Always);
        Ok(CommandResult::read_only(Message::AllPersonsListed, ListTarget::Persons))
    }
}

/// Filters the address book by every criterion in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersonCommand {
    descriptor: FindPersonDescriptor,
    predicate: PersonPredicate,
}

impl FindPersonCommand {
    pub fn new(descriptor: FindPersonDescriptor) -> Self {
        let predicate = descriptor.combine();
        FindPersonCommand { descriptor, predicate }
    }

    pub fn descriptor(&self) -> &FindPersonDescriptor {
        &self.descriptor
    }
}

impl Command for FindPersonCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(self.predicate.clone());
        Ok(CommandResult::read_only(
            Message::PersonsListed(model.filtered_person_list().len()),
            ListTarget::Persons,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearPeopleCommand;

impl Command for ClearPeopleCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear_address_book();
        Ok(CommandResult::mutated(Message::AddressBookCleared, ListTarget::Persons))
    }
}
