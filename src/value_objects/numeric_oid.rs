//! NumericOid value object for dotted-decimal object identifiers.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Returns true if `value` is a well-formed numeric OID.
///
/// ## Validation Rules
///
/// - At least two arcs separated by single dots
/// - Every arc is decimal digits without a leading zero
/// - The root arc is 0, 1 or 2
/// - Under roots 0 and 1 the second arc is at most 39
pub fn is_numeric_oid(value: &str) -> bool {
    let arcs: Vec<&str> = value.split('.').collect();
    if arcs.len() < 2 {
        return false;
    }

    for arc in &arcs {
        if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if arc.len() > 1 && arc.starts_with('0') {
            return false;
        }
    }

    match arcs[0] {
        "0" | "1" => arcs[1].parse::<u64>().map(|n| n <= 39).unwrap_or(false),
        "2" => true,
        _ => false,
    }
}

/// A validated numeric object identifier such as `2.5.4.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumericOid(String);

impl NumericOid {
    /// Create a new NumericOid with validation.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !is_numeric_oid(&value) {
            return Err(ValidationError::InvalidOid { oid: value });
        }
        Ok(Self(value))
    }

    /// Get the string representation of the OID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the numeric arcs.
    pub fn arcs(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns true if `self` lies strictly beneath `other` in the OID tree.
    pub fn is_descendant_of(&self, other: &NumericOid) -> bool {
        self.0.len() > other.0.len()
            && self.0.starts_with(&other.0)
            && self.0.as_bytes()[other.0.len()] == b'.'
    }

    /// Get the owned string value.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NumericOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NumericOid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumericOid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for NumericOid {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_oids() {
        for oid in ["2.5.4.3", "1.3.6.1.4.1.1466.115.121.1.15", "0.9.2342.19200300.100.1.25", "2.999"] {
            assert!(is_numeric_oid(oid), "{oid} should be valid");
        }
    }

    #[test]
    fn test_invalid_oids() {
        for oid in ["", "2", "3.1", "1.40", "2.5..4", "2.5.4.", ".2.5", "2.05.4", "cn", "2.5.x"] {
            assert!(!is_numeric_oid(oid), "{oid} should be invalid");
        }
    }

    #[test]
    fn test_descendant() {
        let parent = NumericOid::new("1.3.6.1.1.1").unwrap();
        let child = NumericOid::new("1.3.6.1.1.1.1.0").unwrap();
        let sibling = NumericOid::new("1.3.6.1.1.10").unwrap();
        assert!(child.is_descendant_of(&parent));
        assert!(!sibling.is_descendant_of(&parent));
        assert!(!parent.is_descendant_of(&parent));
    }

    #[test]
    fn test_serialization_rejects_invalid() {
        let oid: NumericOid = serde_json::from_str("\"2.5.4.3\"").unwrap();
        assert_eq!(oid.as_str(), "2.5.4.3");
        assert!(serde_json::from_str::<NumericOid>("\"cn\"").is_err());
    }
}
