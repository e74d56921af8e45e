//! Ordered `X-` extension store.

use serde::{Deserialize, Serialize};

/// Returns true if `key` is a valid extension label (`X-` followed by
/// letters, hyphens or underscores).
pub fn is_extension_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix("X-").or_else(|| key.strip_prefix("x-")) else {
        return false;
    };
    !rest.is_empty()
        && rest
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || b == b'-' || b == b'_')
}

/// Insertion-ordered multi-valued map of extension labels to values.
///
/// Keys compare case-insensitively and are stored uppercased. Equality is
/// order-sensitive so that stable re-serialization is part of identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions(Vec<(String, Vec<String>)>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values for `key`, keeping the key's original position if it
    /// already exists.
    pub fn set<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let key = key.to_ascii_uppercase();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.0.push((key, values)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.0.cmp(&b.0));
    }

    /// First key that is not a valid extension label.
    pub(crate) fn invalid_key(&self) -> Option<&str> {
        self.keys().find(|k| !is_extension_key(k))
    }
}
