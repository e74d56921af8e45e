//! Distinguished name governance against DIT structure rule chains.
//!
//! A DN is first tokenized into RDN components, leaf first. The trailing
//! `flat + 1` comma-separated segments are merged into a single root
//! component, modelling deployments whose naming context is not an entry of
//! its own. The leaf component is then checked against a structure rule's
//! name form, and the remaining components against its superior rules, one
//! component per step, so self-referencing chains always terminate.
//!
//! # Example
//!
//! ```rust
//! use ldap_schema::governance::TokenizedDn;
//!
//! let dn = TokenizedDn::parse("ou=People,dc=example,dc=com", 1).unwrap();
//! assert_eq!(dn.len(), 2);
//! assert_eq!(dn.leaf().map(|c| c.to_string()), Some("ou=People".to_string()));
//! assert_eq!(dn.to_string(), "ou=People,dc=example,dc=com");
//! ```

use crate::definition::{
    Definition, DefinitionKind, DitStructureRule, NameForm, ObjectClass, SuperRule,
};
use crate::error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
use crate::schema::Schema;
use log::debug;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// One `attribute=value` assertion of an RDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    attribute: String,
    value: String,
}

impl AttributeValue {
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn parse(pair: &str) -> Option<Self> {
        let (attribute, value) = pair.split_once('=')?;
        let attribute = attribute.trim();
        if attribute.is_empty() {
            return None;
        }
        Some(Self {
            attribute: attribute.to_string(),
            value: value.trim().to_string(),
        })
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.attribute)?;
        for c in self.value.chars() {
            if matches!(c, ',' | '+') {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A component of a tokenized DN: one RDN, or the merged root suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdnComponent {
    segments: Vec<Vec<AttributeValue>>,
}

impl RdnComponent {
    /// Every assertion in the component, across merged segments.
    pub fn pairs(&self) -> impl Iterator<Item = &AttributeValue> {
        self.segments.iter().flatten()
    }

    /// Number of comma-separated segments merged into this component.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for RdnComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            for (j, pair) in segment.iter().enumerate() {
                if j > 0 {
                    f.write_str("+")?;
                }
                write!(f, "{pair}")?;
            }
        }
        Ok(())
    }
}

/// A DN split into RDN components, leaf first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedDn {
    components: Vec<RdnComponent>,
}

impl TokenizedDn {
    /// Tokenize `dn`, merging the trailing `flat + 1` segments into one
    /// root component.
    ///
    /// Fails when `flat` is negative or not smaller than the number of
    /// segments, or when any segment or assertion is malformed.
    pub fn parse(dn: &str, flat: isize) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidDnOrFlatInt {
            dn: dn.to_string(),
            flat,
        };

        let segments = split_unescaped(dn, ',')
            .iter()
            .map(|segment| {
                let segment = segment.trim();
                if segment.is_empty() {
                    return None;
                }
                split_unescaped(segment, '+')
                    .iter()
                    .map(|pair| AttributeValue::parse(pair))
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let flat = usize::try_from(flat).map_err(|_| invalid())?;
        if flat >= segments.len() {
            return Err(invalid());
        }

        let split = segments.len() - flat - 1;
        let mut segments = segments;
        let root = segments.split_off(split);
        let mut components: Vec<RdnComponent> = segments
            .into_iter()
            .map(|segment| RdnComponent {
                segments: vec![segment],
            })
            .collect();
        components.push(RdnComponent { segments: root });
        Ok(Self { components })
    }

    pub fn components(&self) -> &[RdnComponent] {
        &self.components
    }

    pub fn leaf(&self) -> Option<&RdnComponent> {
        self.components.first()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl fmt::Display for TokenizedDn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Split on `delim` unless it is preceded by a backslash. An escaped
/// delimiter is kept without its backslash; other escapes pass through.
fn split_unescaped(input: &str, delim: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) if next == delim => current.push(delim),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            }
        } else if c == delim {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Check `components` against `rule` and, past the leaf, its superiors.
pub(crate) fn govern_components(
    schema: &Schema,
    rule: &DitStructureRule,
    components: &[RdnComponent],
) -> SchemaResult<()> {
    let Some((leaf, rest)) = components.split_first() else {
        return Ok(());
    };
    check_leaf(schema, rule, leaf)?;
    debug!("RDN '{leaf}' honours dITStructureRule {}", rule.identifier());

    if rest.is_empty() || rule.super_rules().is_empty() {
        return Ok(());
    }

    let mut last = SchemaError::from(ValidationError::NamingViolationChildlessSuperior {
        rule: rule.identifier(),
    });
    for superior in rule.super_rules() {
        let superior: Cow<'_, DitStructureRule> = match superior {
            SuperRule::Itself => Cow::Borrowed(rule),
            SuperRule::Rule(id) => match schema.structure_rules().fetch(*id) {
                Some(found) => Cow::Owned(found),
                None => {
                    last = ValidationError::NamingViolationChildlessSuperior {
                        rule: format!("#{}", id.index()),
                    }
                    .into();
                    continue;
                }
            },
        };
        match govern_components(schema, &superior, rest) {
            Ok(()) => return Ok(()),
            Err(err) => {
                debug!(
                    "Superior dITStructureRule {} rejected '{}': {err}",
                    superior.identifier(),
                    rest[0]
                );
                last = err;
            }
        }
    }
    Err(last)
}

/// Check every assertion of the leaf RDN against the rule's name form and
/// the form's structural class.
fn check_leaf(schema: &Schema, rule: &DitStructureRule, leaf: &RdnComponent) -> SchemaResult<()> {
    let label = rule.label();
    let form_id = rule.form().ok_or_else(|| ValidationError::InvalidNameForm {
        definition: label.clone(),
        reason: "no FORM assigned".to_string(),
    })?;
    let form = crate::definition::fetch::<NameForm>(schema, form_id, &label, "FORM")?;
    let class_id = form
        .structural_class()
        .ok_or_else(|| ValidationError::InvalidNameForm {
            definition: label.clone(),
            reason: format!("{} names no object class", form.label()),
        })?;
    let class = crate::definition::fetch::<ObjectClass>(schema, class_id, &form.label(), "OC")?;

    let mut allowed = class.all_must_in(schema);
    allowed.extend(class.all_may_in(schema));

    let mut required = HashSet::new();
    for pair in leaf.pairs() {
        let Some(at) = schema.attribute_types().contains(pair.attribute()) else {
            return Err(SchemaError::not_found(
                DefinitionKind::AttributeType,
                pair.attribute(),
            ));
        };
        if !allowed.contains(&at) {
            return Err(ValidationError::NamingViolationBadClassAttr {
                attribute: pair.attribute().to_string(),
                class: class.label(),
            }
            .into());
        }
        if form.must().contains(at) {
            required.insert(at);
        } else if !form.may().contains(at) {
            return Err(ValidationError::NamingViolationUnsanctioned {
                attribute: pair.attribute().to_string(),
            }
            .into());
        }
    }

    if required.is_empty() {
        return Err(ValidationError::NamingViolationMissingMust {
            rdn: leaf.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unescaped() {
        assert_eq!(split_unescaped("a,b", ','), vec!["a", "b"]);
        assert_eq!(split_unescaped("a\\,b,c", ','), vec!["a,b", "c"]);
        assert_eq!(split_unescaped("a\\+b", ','), vec!["a\\+b"]);
        assert_eq!(split_unescaped("a\\+b+c", '+'), vec!["a+b", "c"]);
        assert_eq!(split_unescaped("", ','), vec![""]);
    }

    #[test]
    fn test_flat_merges_trailing_segments() {
        let dn = TokenizedDn::parse("ou=People,dc=example,dc=com", 1).unwrap();
        assert_eq!(dn.len(), 2);
        assert_eq!(dn.components()[1].segment_count(), 2);

        let dn = TokenizedDn::parse("ou=People,dc=example,dc=com", 0).unwrap();
        assert_eq!(dn.len(), 3);

        let dn = TokenizedDn::parse("ou=People,dc=example,dc=com", 2).unwrap();
        assert_eq!(dn.len(), 1);
        assert_eq!(dn.leaf().unwrap().pairs().count(), 3);
    }

    #[test]
    fn test_bogus_depth() {
        for flat in [-1, 2, 5] {
            assert!(matches!(
                TokenizedDn::parse("dc=example,dc=com", flat),
                Err(ValidationError::InvalidDnOrFlatInt { .. })
            ));
        }
        assert!(TokenizedDn::parse("o=example", 1).is_err());
    }

    #[test]
    fn test_malformed_dn() {
        assert!(TokenizedDn::parse("", 0).is_err());
        assert!(TokenizedDn::parse("ou=People,,dc=com", 0).is_err());
        assert!(TokenizedDn::parse("=People,dc=com", 0).is_err());
        assert!(TokenizedDn::parse("People,dc=com", 0).is_err());
    }

    #[test]
    fn test_multi_valued_rdn() {
        let dn = TokenizedDn::parse("ou=People+cn=Employees,dc=example,dc=com", 1).unwrap();
        let attributes: Vec<&str> = dn.leaf().unwrap().pairs().map(|p| p.attribute()).collect();
        assert_eq!(attributes, vec!["ou", "cn"]);
    }

    #[test]
    fn test_escaped_values_render_escaped() {
        let dn = TokenizedDn::parse("cn=Smith\\, John,dc=example,dc=com", 1).unwrap();
        let leaf = dn.leaf().unwrap();
        assert_eq!(leaf.pairs().next().unwrap().value(), "Smith, John");
        assert_eq!(leaf.to_string(), "cn=Smith\\, John");
        assert_eq!(TokenizedDn::parse(&dn.to_string(), 1).unwrap(), dn);
    }
}
