//! # Persons
//!
//! A [`Person`] is an immutable aggregate of self-validating value objects. Nothing is
//! ever edited in place: pinning, unpinning or editing builds a new `Person` (keeping the
//! same [`PersonId`]) and asks the model to swap it in.
//!
//! ## Two Kinds of Equality
//!
//! - `==` compares every visible field. The model uses it to find the exact entry to
//!   remove or replace.
//! - [`Person::is_same_person`] only compares names (ignoring case and repeated
//!   whitespace). The model uses it to keep the list free of duplicates.
//!
//! The id is in neither. It exists so that groups can reference a person weakly and
//! keep following them across replacements.

use super::tag::UniqueTagList;
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const BIRTHDAY_FORMAT: &str = "%d/%m/%Y";

/// Defines a string-backed value object validated by `$check`.
///
/// Values serialize as plain strings and are re-validated when loaded.
macro_rules! value_object {
    ($(#[$meta:meta])* $name:ident, $error:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: &str) -> Result<Self, ValidationError> {
                let trimmed = raw.trim();
                let check: fn(&str) -> bool = $check;
                if !check(trimmed) {
                    return Err($error);
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $name::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) fn is_alphanumeric_words(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

fn is_phone(s: &str) -> bool {
    s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit())
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn is_address(s: &str) -> bool {
    !s.is_empty()
}

value_object!(
    /// A person's name: letters, digits and spaces.
    Name,
    ValidationError::Name,
    is_alphanumeric_words
);

value_object!(
    /// Digits only, at least three of them.
    Phone,
    ValidationError::Phone,
    is_phone
);

value_object!(Email, ValidationError::Email, is_email);

value_object!(Address, ValidationError::Address, is_address);

impl Name {
    /// Lowercased with runs of whitespace collapsed. Basis of weak equality.
    pub fn normalized(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// A calendar date entered as `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::Birthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

/// Stable identity of a person across replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default)]
    tags: UniqueTagList,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        birthday: Option<Birthday>,
        tags: UniqueTagList,
    ) -> Self {
        Self {
            id: PersonId::new(),
            name,
            phone,
            email,
            address,
            birthday,
            tags,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn tags(&self) -> &UniqueTagList {
        &self.tags
    }

    pub fn is_pinned(&self) -> bool {
        self.tags.is_pinned()
    }

    /// Weak equality used for duplicate detection.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.normalized() == other.name.normalized()
    }

    /// A replacement for this person carrying `tags` instead. Same id.
    pub fn with_tags(&self, tags: UniqueTagList) -> Person {
        Person {
            tags,
            ..self.clone()
        }
    }

    /// A replacement for this person with the given fields. Same id.
    pub fn replaced(
        &self,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        birthday: Option<Birthday>,
        tags: UniqueTagList,
    ) -> Person {
        Person {
            id: self.id,
            name,
            phone,
            email,
            address,
            birthday,
            tags,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.birthday == other.birthday
            && self.tags == other.tags
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, " Birthday: {}", birthday)?;
        }
        if !self.tags.is_empty() {
            write!(f, " Tags: {}", self.tags)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tag::Tag;

    fn alice() -> Person {
        Person::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            Some(Birthday::new("01/02/1990").unwrap()),
            UniqueTagList::from_tags(vec![Tag::new("friends").unwrap()]),
        )
    }

    #[test]
    fn test_name_rules() {
        assert!(Name::new("Peter Jack").is_ok());
        assert!(Name::new("David Roger Jackson Ray Jr 2nd").is_ok());
        assert_eq!(Name::new(""), Err(ValidationError::Name));
        assert_eq!(Name::new("   "), Err(ValidationError::Name));
        assert_eq!(Name::new("peter*"), Err(ValidationError::Name));
        assert_eq!(Name::new("  Peter  ").unwrap().as_str(), "Peter");
    }

    #[test]
    fn test_phone_rules() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("93121534").is_ok());
        assert_eq!(Phone::new("91"), Err(ValidationError::Phone));
        assert_eq!(Phone::new("9011p041"), Err(ValidationError::Phone));
        assert_eq!(Phone::new("9312 1534"), Err(ValidationError::Phone));
    }

    #[test]
    fn test_email_rules() {
        assert!(Email::new("PeterJack_1190@example.com").is_ok());
        assert!(Email::new("a@b").is_ok());
        assert_eq!(Email::new("peterjack.example.com"), Err(ValidationError::Email));
        assert_eq!(Email::new("@example.com"), Err(ValidationError::Email));
        assert_eq!(Email::new("peterjack@"), Err(ValidationError::Email));
        assert_eq!(Email::new("peter@jack@example.com"), Err(ValidationError::Email));
        assert_eq!(Email::new("peter jack@example.com"), Err(ValidationError::Email));
    }

    #[test]
    fn test_address_rules() {
        assert!(Address::new("Blk 456, Den Road, #01-355").is_ok());
        assert_eq!(Address::new(" "), Err(ValidationError::Address));
    }

    #[test]
    fn test_birthday_rules() {
        assert_eq!(Birthday::new("29/02/2020").unwrap().to_string(), "29/02/2020");
        assert_eq!(Birthday::new("29/02/2021"), Err(ValidationError::Birthday));
        assert_eq!(Birthday::new("2020-02-01"), Err(ValidationError::Birthday));
        assert_eq!(Birthday::new("32/01/2020"), Err(ValidationError::Birthday));
    }

    #[test]
    fn test_weak_and_full_equality() {
        let a = alice();
        let renamed_case = a.replaced(
            Name::new("alice   PAULINE").unwrap(),
            Phone::new("999").unwrap(),
            a.email().clone(),
            a.address().clone(),
            None,
            UniqueTagList::new(),
        );
        assert!(a.is_same_person(&renamed_case));
        assert_ne!(a, renamed_case);

        // Full equality ignores the id.
        let twin = Person::new(
            a.name().clone(),
            a.phone().clone(),
            a.email().clone(),
            a.address().clone(),
            a.birthday().cloned(),
            a.tags().clone(),
        );
        assert_ne!(twin.id(), a.id());
        assert_eq!(twin, a);
    }

    #[test]
    fn test_replacement_keeps_id() {
        let a = alice();
        let mut tags = a.tags().clone();
        tags.add_pin_tag().unwrap();
        let pinned = a.with_tags(tags);
        assert_eq!(pinned.id(), a.id());
        assert!(pinned.is_pinned());
        assert!(!a.is_pinned());
    }

    #[test]
    fn test_serde_revalidates() {
        let a = alice();
        let json = serde_json::to_string(&a).unwrap();
        let loaded: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, a);
        assert_eq!(loaded.id(), a.id());

        let bad = json.replace("alice@example.com", "not-an-email");
        assert!(serde_json::from_str::<Person>(&bad).is_err());
    }
}
