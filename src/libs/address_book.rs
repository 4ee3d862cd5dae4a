use super::person::Person;

/// The persons known to the application, in insertion order.
///
/// No two persons share a name (ignoring case); callers check
/// [`AddressBook::contains`] before adding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book, rejecting the first duplicate person found.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, Person> {
        let mut address_book = AddressBook::new();
        for person in persons {
            if address_book.contains(&person) {
                return Err(person);
            }
            address_book.add(person);
        }
        Ok(address_book)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|existing| existing.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Replaces `target` with `edited` in place. Returns false if `target` is absent.
    pub fn set(&mut self, target: &Person, edited: Person) -> bool {
        match self.persons.iter().position(|person| person == target) {
            Some(index) => {
                self.persons[index] = edited;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, target: &Person) -> bool {
        let before = self.persons.len();
        self.persons.retain(|person| person != target);
        self.persons.len() != before
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
