//! # Domain Model
//!
//! [`Model`] is the single mutable source of truth for a running application. It wraps
//! the authoritative [`AddressBook`] and maintains a derived *displayed* list: the
//! persons passing the current [`PersonFilter`], pinned persons first.
//!
//! ## Displayed vs Authoritative
//!
//! Commands resolve every user-supplied index against [`Model::filtered_person_list`].
//! The displayed list is recomputed after each committed change, never in the middle of
//! one, so a command sees a stable view for its whole execution.
//!
//! ## Change Notification
//!
//! After a mutation commits, the model publishes a [`ModelEvent`] on its [`EventBus`].
//! Failed mutations publish nothing.
//!
//! ## Module Overview
//!
//! - [`person`]: `Person` and its value objects (`Name`, `Phone`, `Email`, ...)
//! - [`tag`]: `Tag` and `UniqueTagList`, including the pinned marker
//! - [`group`]: `Group` and `GroupName`
//! - [`address_book`]: the invariant-enforcing lists

pub mod address_book;
pub mod group;
pub mod person;
pub mod tag;

pub use address_book::{AddressBook, SortKey};
pub use group::{Group, GroupName};
pub use person::{Address, Birthday, Email, Name, Person, PersonId, Phone};
pub use tag::{Tag, UniqueTagList, PIN_TAG_NAME};

use crate::error::ModelError;
use crate::events::{EventBus, ModelEvent};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Matches when any keyword equals (ignoring case) a whole word of the name.
    Keywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::Keywords(keywords) => person
                .name()
                .words()
                .map(str::to_lowercase)
                .any(|word| keywords.iter().any(|k| k.to_lowercase() == word)),
        }
    }
}

#[derive(Debug)]
pub struct Model {
    book: AddressBook,
    filter: PersonFilter,
    displayed: Vec<Person>,
    events: EventBus,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AddressBook::new(), EventBus::default())
    }
}

impl Model {
    pub fn new(book: AddressBook, events: EventBus) -> Self {
        let mut model = Self {
            book,
            filter: PersonFilter::All,
            displayed: Vec::new(),
            events,
        };
        model.refresh_displayed();
        model
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    /// The list the user is looking at. All indexes resolve against this.
    pub fn filtered_person_list(&self) -> &[Person] {
        &self.displayed
    }

    pub fn group_list(&self) -> &[Group] {
        self.book.groups()
    }

    pub fn group_members(&self, group: &Group) -> Vec<&Person> {
        self.book.group_members(group)
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        debug!(?filter, "updating person filter");
        self.filter = filter;
        self.refresh_displayed();
        self.events.publish(ModelEvent::FilterChanged {
            displayed: self.displayed.clone(),
        });
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        debug!(name = %person.name(), "adding person");
        self.book.add_person(person)?;
        self.committed();
        Ok(())
    }

    pub fn insert_person(&mut self, position: usize, person: Person) -> Result<(), ModelError> {
        debug!(name = %person.name(), position, "inserting person");
        self.book.insert_person(position, person)?;
        self.committed();
        Ok(())
    }

    /// Returns the authoritative position the person was removed from.
    pub fn remove_person(&mut self, person: &Person) -> Result<usize, ModelError> {
        debug!(name = %person.name(), "removing person");
        let pos = self.book.remove_person(person)?;
        self.committed();
        Ok(pos)
    }

    /// Removes all targets as one change. See [`AddressBook::remove_persons`].
    pub fn remove_persons(&mut self, targets: &[Person]) -> Result<Vec<(usize, Person)>, ModelError> {
        debug!(count = targets.len(), "removing persons");
        let removed = self.book.remove_persons(targets)?;
        self.committed();
        Ok(removed)
    }

    pub fn insert_persons(&mut self, removed: &[(usize, Person)]) -> Result<(), ModelError> {
        debug!(count = removed.len(), "reinserting persons");
        self.book.insert_persons(removed)?;
        self.committed();
        Ok(())
    }

    pub fn update_persons(&mut self, swaps: &[(Person, Person)]) -> Result<(), ModelError> {
        debug!(count = swaps.len(), "updating persons");
        self.book.update_persons(swaps)?;
        self.committed();
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        debug!(from = %target.name(), to = %edited.name(), "updating person");
        self.book.update_person(target, edited)?;
        self.committed();
        Ok(())
    }

    pub fn sort_persons(&mut self, key: SortKey) {
        debug!(key = key.as_str(), "sorting persons");
        self.book.sort_persons(key);
        self.committed();
    }

    pub fn restore_person_order(&mut self, order: &[Person]) -> Result<(), ModelError> {
        self.book.restore_person_order(order)?;
        self.committed();
        Ok(())
    }

    pub fn add_group(&mut self, group: Group) -> Result<(), ModelError> {
        debug!(group = %group.name(), "adding group");
        self.book.add_group(group)?;
        self.committed();
        Ok(())
    }

    pub fn insert_group(&mut self, position: usize, group: Group) -> Result<(), ModelError> {
        self.book.insert_group(position, group)?;
        self.committed();
        Ok(())
    }

    pub fn remove_group(&mut self, group: &Group) -> Result<usize, ModelError> {
        debug!(group = %group.name(), "removing group");
        let pos = self.book.remove_group(group)?;
        self.committed();
        Ok(pos)
    }

    /// Replaces all data at once.
    pub fn reset_data(&mut self, book: AddressBook) {
        debug!(persons = book.persons().len(), "resetting address book");
        self.book = book;
        self.committed();
    }

    fn refresh_displayed(&mut self) {
        let (pinned, rest): (Vec<&Person>, Vec<&Person>) = self
            .book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .partition(|p| p.is_pinned());
        self.displayed = pinned.into_iter().chain(rest).cloned().collect();
    }

    fn committed(&mut self) {
        self.refresh_displayed();
        self.events.publish(ModelEvent::AddressBookChanged {
            displayed: self.displayed.clone(),
            groups: self.book.groups().to_vec(),
        });
    }
}
