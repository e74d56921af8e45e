//! Descriptors (short names) and ordered name lists.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Returns true if `value` is an RFC 4512 descriptor.
///
/// A descriptor starts with a letter, ends with a letter or digit, contains
/// only letters, digits and hyphens, and never has two hyphens in a row.
pub fn is_descriptor(value: &str) -> bool {
    let bytes = value.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if !first.is_ascii_alphabetic() || !last.is_ascii_alphanumeric() {
        return false;
    }

    let mut previous_hyphen = false;
    for &b in bytes {
        match b {
            b'-' if previous_hyphen => return false,
            b'-' => previous_hyphen = true,
            b if b.is_ascii_alphanumeric() => previous_hyphen = false,
            _ => return false,
        }
    }
    true
}

/// Ordered, case-insensitively unique list of descriptors.
///
/// The first name is the one used when a definition is referenced by name
/// during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Create an empty name list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a name unless an equal name (ignoring case) is present.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.0.push(name);
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Sort names case-insensitively.
    pub fn sort(&mut self) {
        self.0.sort_by_key(|n| n.to_ascii_lowercase());
    }

    /// Check that every name is a valid descriptor.
    pub fn validate(&self) -> ValidationResult<()> {
        match self.0.iter().find(|n| !is_descriptor(n)) {
            Some(bad) => Err(ValidationError::InvalidNames { name: bad.clone() }),
            None => Ok(()),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = NameList::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}
