//! Macro table mapping descriptor-like aliases to numeric OIDs.

use crate::error::{SchemaError, SchemaResult};
use crate::value_objects::{is_descriptor, is_numeric_oid};

/// Alias table consulted when an identifier or reference is not a numeric
/// OID.
///
/// Besides exact aliases, `alias:suffix` and `alias.suffix` expand to
/// `oid.suffix`, covering the `nisSchema.1.0` style used by RFC 2307 and the
/// OpenLDAP `objectIdentifier` prefix style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macros {
    entries: Vec<(String, String)>,
}

impl Macros {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite `name`.
    pub fn set(&mut self, name: &str, oid: &str) -> SchemaResult<()> {
        if name.is_empty() || oid.is_empty() {
            return Err(SchemaError::InvalidMacro {
                name: name.to_string(),
                reason: "name and OID must both be non-empty".to_string(),
            });
        }
        if !is_descriptor(name) {
            return Err(SchemaError::InvalidMacro {
                name: name.to_string(),
                reason: "name is not a descriptor".to_string(),
            });
        }
        if !is_numeric_oid(oid) {
            return Err(SchemaError::InvalidMacro {
                name: name.to_string(),
                reason: format!("'{oid}' is not a numeric OID"),
            });
        }

        match self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = oid.to_string(),
            None => self.entries.push((name.to_string(), oid.to_string())),
        }
        Ok(())
    }

    /// OID registered for `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, oid)| oid.as_str())
    }

    /// Alias registered for `oid`.
    pub fn name_for(&self, oid: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, o)| o == oid)
            .map(|(name, _)| name.as_str())
    }

    /// Expand `term` into a numeric OID if it is a registered alias or an
    /// alias with a numeric suffix.
    pub fn resolve(&self, term: &str) -> Option<String> {
        if let Some(oid) = self.get(term) {
            return Some(oid.to_string());
        }

        for separator in [':', '.'] {
            let Some((alias, suffix)) = term.split_once(separator) else {
                continue;
            };
            let Some(oid) = self.get(alias) else {
                continue;
            };
            let expanded = format!("{oid}.{suffix}");
            if is_numeric_oid(&expanded) {
                return Some(expanded);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, o)| (n.as_str(), o.as_str()))
    }
}
