//! Splits an argument string into prefix-tagged values.
//!
//! Given `" 1 n/Alice Tan t/friend t/work"` and the prefixes `n/` and `t/`, the tokenizer
//! produces:
//!
//! - preamble: `"1"`
//! - `n/` → `["Alice Tan"]`
//! - `t/` → `["friend", "work"]`
//!
//! A prefix only counts when it follows whitespace, so `a/` inside `e/x@a/b` is left
//! alone. Values are trimmed. Single-valued lookups ([`ArgumentMultimap::value`]) return
//! the last occurrence; earlier ones are silently ignored.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_INDEX: Prefix = Prefix::new("i/");

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if the prefix appeared at all.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // Leading space so a prefix at the very start is still "after whitespace".
    let padded = format!(" {}", args);

    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let mut from = 0;
        while let Some(found) = padded[from..].find(prefix.as_str()) {
            let at = from + found;
            let after_space = padded[..at]
                .chars()
                .next_back()
                .map_or(false, char::is_whitespace);
            if after_space {
                positions.push((at, *prefix));
            }
            from = at + prefix.as_str().len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(padded.len(), |(at, _)| *at);
    map.preamble = padded[..preamble_end].trim().to_string();

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(padded.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(padded[start..end].trim().to_string());
    }

    map
}
