//! # Display Indexes
//!
//! Users refer to persons and groups by their position in the list currently on screen,
//! counting from 1. Internally every lookup is zero-based. [`Index`] holds both views of
//! the same number so that conversions happen exactly once, at the parser boundary.
//!
//! Indexes are always resolved against the *displayed* list (see
//! [`crate::model::Model::filtered_person_list`]), never the authoritative one, so
//! `unpin 2` targets the second row the user is looking at, whatever filter or sort
//! produced that row.

use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Fails for 0, which has no zero-based counterpart.
    pub fn from_one_based(one_based: usize) -> Result<Self, ValidationError> {
        one_based
            .checked_sub(1)
            .map(Self::from_zero_based)
            .ok_or(ValidationError::Index)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    /// Looks the index up in a displayed list.
    pub fn resolve<'a, T>(&self, displayed: &'a [T]) -> Option<&'a T> {
        displayed.get(self.zero_based)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl std::str::FromStr for Index {
    type Err = ValidationError;

    /// Accepts only plain digits: no sign, no whitespace inside, no zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::Index);
        }
        let n: usize = trimmed.parse().map_err(|_| ValidationError::Index)?;
        Index::from_one_based(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_dual_representation() {
        let idx = Index::from_one_based(3).unwrap();
        assert_eq!(idx.zero_based(), 2);
        assert_eq!(idx.one_based(), 3);
        assert_eq!(idx, Index::from_zero_based(2));
        assert_eq!(idx.to_string(), "3");
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(Index::from_one_based(0), Err(ValidationError::Index));
    }

    #[test]
    fn test_parsing() {
        assert_eq!(Index::from_str("1"), Ok(Index::from_zero_based(0)));
        assert_eq!(Index::from_str(" 42 "), Ok(Index::from_zero_based(41)));

        assert!(Index::from_str("").is_err());
        assert!(Index::from_str("0").is_err());
        assert!(Index::from_str("-1").is_err());
        assert!(Index::from_str("+1").is_err());
        assert!(Index::from_str("1a").is_err());
        assert!(Index::from_str("1 2").is_err());
        assert!(Index::from_str("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_resolve_against_displayed_list() {
        let displayed = vec!["a", "b", "c"];
        for n in 1..=displayed.len() {
            let idx = Index::from_one_based(n).unwrap();
            assert_eq!(idx.resolve(&displayed), Some(&displayed[n - 1]));
        }
        assert_eq!(Index::from_one_based(4).unwrap().resolve(&displayed), None);
    }
}
