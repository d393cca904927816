//! Tags and the per-person tag set.
//!
//! Tag names are ASCII alphanumeric. Two tags are the same tag when their names match
//! ignoring case; the spelling first entered is the one displayed.
//!
//! One tag value is reserved: [`PIN_TAG_NAME`] marks a pinned person. It only ever enters
//! or leaves a [`UniqueTagList`] through [`UniqueTagList::add_pin_tag`] and
//! [`UniqueTagList::remove_pin_tag`]; generic [`UniqueTagList::remove`] refuses it, and so
//! does the parser.

use crate::error::{TagListError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const PIN_TAG_NAME: &str = "Pinned";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::Tag);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn pinned() -> Self {
        Self {
            name: PIN_TAG_NAME.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_pin_marker(&self) -> bool {
        self.name.eq_ignore_ascii_case(PIN_TAG_NAME)
    }

    fn normalized(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

/// An insertion-ordered set of tags.
///
/// Order only matters for display; lookups and equality ignore it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct UniqueTagList {
    tags: Vec<Tag>,
}

impl UniqueTagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set, silently dropping repeated tags.
    pub fn from_tags<I: IntoIterator<Item = Tag>>(tags: I) -> Self {
        let mut list = Self::new();
        for tag in tags {
            if !list.contains(&tag) {
                list.tags.push(tag);
            }
        }
        list
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn add(&mut self, tag: Tag) -> Result<(), TagListError> {
        if self.contains(&tag) {
            return Err(TagListError::Duplicate(tag.name().to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Removes a user tag. The pinned marker is not a user tag and is never found here.
    pub fn remove(&mut self, tag: &Tag) -> Result<(), TagListError> {
        let pos = self
            .tags
            .iter()
            .position(|t| t == tag && !t.is_pin_marker())
            .ok_or_else(|| TagListError::NotFound(tag.name().to_string()))?;
        self.tags.remove(pos);
        Ok(())
    }

    pub fn is_pinned(&self) -> bool {
        self.tags.iter().any(Tag::is_pin_marker)
    }

    pub fn add_pin_tag(&mut self) -> Result<(), TagListError> {
        if self.is_pinned() {
            return Err(TagListError::AlreadyPinned);
        }
        self.tags.push(Tag::pinned());
        Ok(())
    }

    pub fn remove_pin_tag(&mut self) -> Result<(), TagListError> {
        let before = self.tags.len();
        self.tags.retain(|t| !t.is_pin_marker());
        if self.tags.len() == before {
            return Err(TagListError::NotPinned);
        }
        Ok(())
    }

    /// Every tag except the pinned marker.
    pub fn user_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|t| !t.is_pin_marker())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl PartialEq for UniqueTagList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.tags.iter().all(|t| other.contains(t))
    }
}

impl Eq for UniqueTagList {}

impl From<Vec<Tag>> for UniqueTagList {
    fn from(tags: Vec<Tag>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<UniqueTagList> for Vec<Tag> {
    fn from(list: UniqueTagList) -> Self {
        list.tags
    }
}

impl fmt::Display for UniqueTagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The marker renders last regardless of when it was added.
        for tag in self.user_tags() {
            write!(f, "{}", tag)?;
        }
        if self.is_pinned() {
            write!(f, "{}", Tag::pinned())?;
        }
        Ok(())
    }
}
