//! Value parsing shared by the command parsers.
//!
//! Optional fields come in as `Option<&str>` straight from the tokenizer and go out as
//! `Result<Option<T>>`, which keeps the three cases apart:
//!
//! - prefix absent → `Ok(None)`
//! - prefix present, value invalid → `Err(ValidationError)`
//! - prefix present, value valid → `Ok(Some(value))`

use crate::error::ValidationError;
use crate::index::Index;
use crate::model::{Address, Birthday, Email, GroupName, Name, Phone, SortKey, Tag, PIN_TAG_NAME};
use std::path::PathBuf;

type ParseResult<T> = Result<T, ValidationError>;

pub fn parse_index(one_based: &str) -> ParseResult<Index> {
    one_based.parse()
}

/// Whitespace-separated indexes, e.g. `"1 3 5"`. One bad token fails the whole list.
pub fn parse_indexes(many: &str) -> ParseResult<Vec<Index>> {
    let tokens: Vec<&str> = many.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ValidationError::Index);
    }
    tokens.into_iter().map(parse_index).collect()
}

/// Comma-separated indexes, e.g. `"1, 3,5"`. One bad token fails the whole list.
pub fn parse_comma_indexes(many: &str) -> ParseResult<Vec<Index>> {
    many.split(',').map(parse_index).collect()
}

pub fn parse_name(name: Option<&str>) -> ParseResult<Option<Name>> {
    name.map(Name::new).transpose()
}

pub fn parse_phone(phone: Option<&str>) -> ParseResult<Option<Phone>> {
    phone.map(Phone::new).transpose()
}

pub fn parse_email(email: Option<&str>) -> ParseResult<Option<Email>> {
    email.map(Email::new).transpose()
}

pub fn parse_address(address: Option<&str>) -> ParseResult<Option<Address>> {
    address.map(Address::new).transpose()
}

pub fn parse_birthday(birthday: Option<&str>) -> ParseResult<Option<Birthday>> {
    birthday.map(Birthday::new).transpose()
}

pub fn parse_group_name(name: Option<&str>) -> ParseResult<Option<GroupName>> {
    name.map(GroupName::new).transpose()
}

/// One user-entered tag, trimmed. The pinned marker is refused here; only pin/unpin
/// manage it.
pub fn parse_tag(raw: &str) -> ParseResult<Tag> {
    let tag = Tag::new(raw)?;
    if tag.is_pin_marker() {
        return Err(ValidationError::ReservedTag(PIN_TAG_NAME.to_string()));
    }
    Ok(tag)
}

pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> ParseResult<Vec<Tag>> {
    tags.iter().map(|raw| parse_tag(raw.as_ref())).collect()
}

pub fn parse_sort_key(sort_key: &str) -> ParseResult<SortKey> {
    sort_key.parse()
}

pub fn parse_file_path(path: &str) -> ParseResult<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::FilePath);
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_based(list: &[Index]) -> Vec<usize> {
        list.iter().map(Index::one_based).collect()
    }

    #[test]
    fn test_parse_indexes_whitespace() {
        assert_eq!(one_based(&parse_indexes("1 3 5").unwrap()), [1, 3, 5]);
        assert_eq!(one_based(&parse_indexes("  2\t4 ").unwrap()), [2, 4]);
    }

    #[test]
    fn test_parse_indexes_is_all_or_nothing() {
        assert_eq!(parse_indexes("1 x 5"), Err(ValidationError::Index));
        assert_eq!(parse_indexes("1 0"), Err(ValidationError::Index));
        assert_eq!(parse_indexes("   "), Err(ValidationError::Index));
    }

    #[test]
    fn test_parse_comma_indexes() {
        assert_eq!(one_based(&parse_comma_indexes("1, 3,5").unwrap()), [1, 3, 5]);
        assert_eq!(parse_comma_indexes("1,,3"), Err(ValidationError::Index));
        assert_eq!(parse_comma_indexes("1 2"), Err(ValidationError::Index));
    }

    #[test]
    fn test_optional_fields_keep_three_way_distinction() {
        assert_eq!(parse_phone(None), Ok(None));
        assert_eq!(parse_phone(Some("12")), Err(ValidationError::Phone));
        assert_eq!(
            parse_phone(Some(" 123 ")),
            Ok(Some(Phone::new("123").unwrap()))
        );
    }

    #[test]
    fn test_parse_tags_rejects_pin_marker() {
        assert_eq!(parse_tags(&["friend", "work"]).unwrap().len(), 2);
        assert_eq!(
            parse_tags(&["pinned"]),
            Err(ValidationError::ReservedTag("Pinned".to_string()))
        );
        assert_eq!(parse_tags(&["no way"]), Err(ValidationError::Tag));
    }

    #[test]
    fn test_parse_tag_trims() {
        assert_eq!(parse_tag("  work \t").unwrap().name(), "work");
        assert_eq!(parse_tag("   "), Err(ValidationError::Tag));
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(parse_sort_key(" name "), Ok(SortKey::Name));
        assert_eq!(parse_sort_key("email"), Ok(SortKey::Email));
        assert_eq!(parse_sort_key("address"), Err(ValidationError::SortKey));
    }

    #[test]
    fn test_parse_file_path_trims() {
        assert_eq!(
            parse_file_path("  out/contacts.json \n"),
            Ok(PathBuf::from("out/contacts.json"))
        );
        assert_eq!(parse_file_path("   "), Err(ValidationError::FilePath));
    }
}
