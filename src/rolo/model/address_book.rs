//! The authoritative store of persons and groups.
//!
//! [`AddressBook`] is the only place that holds the real lists, and every mutation goes
//! through one of its methods so the uniqueness invariants hold at all times:
//!
//! - no two persons are the same person (see [`Person::is_same_person`]);
//! - no two groups share a name (see [`Group::is_same_group`]).
//!
//! Each method either applies fully or leaves the book untouched.

use super::group::Group;
use super::person::{Person, PersonId};
use crate::error::{ModelError, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Phone,
    Email,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Phone => "phone",
            SortKey::Email => "email",
        }
    }

    fn key(&self, person: &Person) -> String {
        match self {
            SortKey::Name => person.name().as_str().to_lowercase(),
            SortKey::Phone => person.phone().as_str().to_string(),
            SortKey::Email => person.email().as_str().to_lowercase(),
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "phone" => Ok(SortKey::Phone),
            "email" => Ok(SortKey::Email),
            _ => Err(ValidationError::SortKey),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressBookData")]
pub struct AddressBook {
    persons: Vec<Person>,
    groups: Vec<Group>,
}

/// Unchecked shape of a serialized address book.
#[derive(Deserialize)]
struct AddressBookData {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    groups: Vec<Group>,
}

impl TryFrom<AddressBookData> for AddressBook {
    type Error = ModelError;

    fn try_from(data: AddressBookData) -> Result<Self, Self::Error> {
        let mut book = AddressBook::default();
        for person in data.persons {
            book.add_person(person)?;
        }
        for group in data.groups {
            book.add_group(group)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.groups.is_empty()
    }

    pub fn contains_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn person_by_id(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id() == id)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        let at = self.persons.len();
        self.insert_person(at, person)
    }

    /// Inserts at `position`, clamped to the end of the list.
    pub fn insert_person(&mut self, position: usize, person: Person) -> Result<(), ModelError> {
        if self.contains_person(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        let at = position.min(self.persons.len());
        self.persons.insert(at, person);
        Ok(())
    }

    /// Removes the entry fully equal to `person`, returning where it was.
    pub fn remove_person(&mut self, person: &Person) -> Result<usize, ModelError> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == person)
            .ok_or(ModelError::PersonNotFound)?;
        self.persons.remove(pos);
        Ok(pos)
    }

    /// Removes every target in order, returning each one's position at the moment it was
    /// taken out. Nothing is removed unless all of them are present.
    pub fn remove_persons(&mut self, targets: &[Person]) -> Result<Vec<(usize, Person)>, ModelError> {
        let mut persons = self.persons.clone();
        let mut removed = Vec::with_capacity(targets.len());
        for target in targets {
            let pos = persons
                .iter()
                .position(|p| p == target)
                .ok_or(ModelError::PersonNotFound)?;
            removed.push((pos, persons.remove(pos)));
        }
        self.persons = persons;
        Ok(removed)
    }

    /// Reverses [`AddressBook::remove_persons`]: reinserts the record back to front.
    pub fn insert_persons(&mut self, removed: &[(usize, Person)]) -> Result<(), ModelError> {
        let mut staged = self.clone();
        for (position, person) in removed.iter().rev() {
            staged.insert_person(*position, person.clone())?;
        }
        self.persons = staged.persons;
        Ok(())
    }

    /// Applies every `(target, edited)` swap or none of them.
    pub fn update_persons(&mut self, swaps: &[(Person, Person)]) -> Result<(), ModelError> {
        let mut staged = self.clone();
        for (target, edited) in swaps {
            staged.update_person(target, edited.clone())?;
        }
        self.persons = staged.persons;
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(ModelError::PersonNotFound)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && p.is_same_person(&edited));
        if collides {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons[pos] = edited;
        Ok(())
    }

    /// Stable sort, case-insensitive for text keys.
    pub fn sort_persons(&mut self, key: SortKey) {
        self.persons.sort_by_cached_key(|p| key.key(p));
    }

    /// Puts the persons back in `order`, which must hold exactly the current entries.
    pub fn restore_person_order(&mut self, order: &[Person]) -> Result<(), ModelError> {
        if order.len() != self.persons.len() || !order.iter().all(|p| self.persons.contains(p)) {
            return Err(ModelError::OrderMismatch);
        }
        self.persons = order.to_vec();
        Ok(())
    }

    pub fn contains_group(&self, group: &Group) -> bool {
        self.groups.iter().any(|g| g.is_same_group(group))
    }

    pub fn add_group(&mut self, group: Group) -> Result<(), ModelError> {
        let at = self.groups.len();
        self.insert_group(at, group)
    }

    pub fn insert_group(&mut self, position: usize, group: Group) -> Result<(), ModelError> {
        if self.contains_group(&group) {
            return Err(ModelError::DuplicateGroup);
        }
        let at = position.min(self.groups.len());
        self.groups.insert(at, group);
        Ok(())
    }

    pub fn remove_group(&mut self, group: &Group) -> Result<usize, ModelError> {
        let pos = self
            .groups
            .iter()
            .position(|g| g == group)
            .ok_or(ModelError::GroupNotFound)?;
        self.groups.remove(pos);
        Ok(pos)
    }

    /// Resolves a group's weak member references, skipping persons no longer present.
    pub fn group_members(&self, group: &Group) -> Vec<&Person> {
        group
            .members()
            .iter()
            .filter_map(|id| self.person_by_id(*id))
            .collect()
    }
}
