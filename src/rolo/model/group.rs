//! Groups: a named, ordered membership list.
//!
//! A group never owns the persons in it. Members are stored as [`PersonId`]s and looked
//! up in the address book when needed, so a deleted person simply stops resolving and
//! an undone delete brings the membership back with it.

use super::person::{is_alphanumeric_words, PersonId};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !is_alphanumeric_words(trimmed) {
            return Err(ValidationError::GroupName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GroupName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupName::new(&value)
    }
}

impl From<GroupName> for String {
    fn from(value: GroupName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: GroupName,
    members: Vec<PersonId>,
}

impl Group {
    /// Repeated ids are kept once, first occurrence wins.
    pub fn new(name: GroupName, members: Vec<PersonId>) -> Self {
        let mut unique = Vec::with_capacity(members.len());
        for id in members {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            name,
            members: unique,
        }
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    pub fn is_same_group(&self, other: &Group) -> bool {
        self.name.normalized() == other.name.normalized()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Member ids may point at deleted persons; only the address book can count them.
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_rules() {
        assert!(GroupName::new("Project Alpha").is_ok());
        assert_eq!(GroupName::new(""), Err(ValidationError::GroupName));
        assert_eq!(GroupName::new("CS2103/T"), Err(ValidationError::GroupName));
    }

    #[test]
    fn test_members_are_deduplicated_in_order() {
        let a = PersonId::new();
        let b = PersonId::new();
        let group = Group::new(GroupName::new("Team").unwrap(), vec![b, a, b]);
        assert_eq!(group.members(), &[b, a]);
    }

    #[test]
    fn test_display_is_the_name() {
        let group = Group::new(GroupName::new("Team").unwrap(), vec![PersonId::new()]);
        assert_eq!(group.to_string(), "Team");
    }

    #[test]
    fn test_same_group_by_name() {
        let one = Group::new(GroupName::new("Book Club").unwrap(), vec![]);
        let two = Group::new(GroupName::new("book  club").unwrap(), vec![PersonId::new()]);
        assert!(one.is_same_group(&two));
        assert_ne!(one, two);
    }
}
