//! Fixtures shared by unit tests.
//!
//! Persons built here derive every field from the name, so `person("Alice")` always
//! equals another `person("Alice")` even though their ids differ.

use crate::events::EventBus;
use crate::model::{
    Address, AddressBook, Email, Model, Name, Person, Phone, Tag, UniqueTagList,
};

pub fn person(name: &str) -> Person {
    person_with_tags(name, &[])
}

pub fn person_with_tags(name: &str, tags: &[&str]) -> Person {
    let handle: String = name
        .split_whitespace()
        .collect::<String>()
        .to_lowercase();
    let tags = tags.iter().map(|t| Tag::new(t).unwrap());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(&format!("9{:07}", handle.len() * 1111)).unwrap(),
        Email::new(&format!("{}@example.com", handle)).unwrap(),
        Address::new(&format!("{} Street", name)).unwrap(),
        None,
        UniqueTagList::from_tags(tags),
    )
}

pub fn pinned(name: &str) -> Person {
    let base = person(name);
    let mut tags = base.tags().clone();
    tags.add_pin_tag().unwrap();
    base.with_tags(tags)
}

pub fn book_with(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for name in names {
        book.add_person(person(name)).unwrap();
    }
    book
}

pub fn model_with(names: &[&str]) -> Model {
    Model::new(book_with(names), EventBus::default())
}
