//! Attribute type definitions (RFC 4512 section 4.1.2).

use super::{
    AttributeTypeId, Attachments, DefId, Definition, DefinitionKind, LdapSyntax, LdapSyntaxId,
    MatchingRule, MatchingRuleId, any_methods, display_name, fetch, header_methods,
    identifier_of, impl_header, resolve, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap, bool_str};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The USAGE clause of an attribute type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Usage {
    #[default]
    UserApplications,
    DirectoryOperation,
    DistributedOperation,
    DsaOperation,
}

impl Usage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::UserApplications => "userApplications",
            Usage::DirectoryOperation => "directoryOperation",
            Usage::DistributedOperation => "distributedOperation",
            Usage::DsaOperation => "dSAOperation",
        }
    }

    /// Every usage other than `userApplications` is operational.
    pub fn is_operational(&self) -> bool {
        *self != Usage::UserApplications
    }
}

impl FromStr for Usage {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Usage::UserApplications,
            Usage::DirectoryOperation,
            Usage::DistributedOperation,
            Usage::DsaOperation,
        ]
        .into_iter()
        .find(|u| u.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| SchemaError::invalid_value("USAGE", format!("unknown usage '{s}'")))
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute type.
///
/// SUP, EQUALITY, ORDERING, SUBSTR and SYNTAX are handles into the owning
/// schema. Syntax and matching rules that are not set locally are inherited
/// along the SUP chain; see [`AttributeType::effective_syntax_in`].
#[derive(Debug, Clone, Default)]
pub struct AttributeType {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    super_type: Option<AttributeTypeId>,
    equality: Option<MatchingRuleId>,
    ordering: Option<MatchingRuleId>,
    substring: Option<MatchingRuleId>,
    syntax: Option<LdapSyntaxId>,
    max_length: Option<u32>,
    single_value: bool,
    collective: bool,
    no_user_modification: bool,
    usage: Usage,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl_header!(AttributeType);

impl AttributeType {
    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    pub fn set_numeric_oid(&mut self, oid: impl Into<String>) -> &mut Self {
        self.oid = oid.into();
        self
    }

    pub fn super_type(&self) -> Option<AttributeTypeId> {
        self.super_type
    }

    pub fn set_super_type(&mut self, sup: AttributeTypeId) -> &mut Self {
        self.super_type = Some(sup);
        self
    }

    pub fn equality(&self) -> Option<MatchingRuleId> {
        self.equality
    }

    pub fn set_equality(&mut self, rule: MatchingRuleId) -> &mut Self {
        self.equality = Some(rule);
        self
    }

    pub fn ordering(&self) -> Option<MatchingRuleId> {
        self.ordering
    }

    pub fn set_ordering(&mut self, rule: MatchingRuleId) -> &mut Self {
        self.ordering = Some(rule);
        self
    }

    pub fn substring(&self) -> Option<MatchingRuleId> {
        self.substring
    }

    pub fn set_substring(&mut self, rule: MatchingRuleId) -> &mut Self {
        self.substring = Some(rule);
        self
    }

    /// The locally assigned syntax, ignoring inheritance.
    pub fn syntax(&self) -> Option<LdapSyntaxId> {
        self.syntax
    }

    pub fn set_syntax(&mut self, syntax: LdapSyntaxId) -> &mut Self {
        self.syntax = Some(syntax);
        self
    }

    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    pub fn set_max_length(&mut self, mub: u32) -> &mut Self {
        self.max_length = Some(mub);
        self
    }

    pub fn is_single_value(&self) -> bool {
        self.single_value
    }

    pub fn set_single_value(&mut self, enabled: bool) -> &mut Self {
        self.single_value = enabled;
        self
    }

    pub fn is_collective(&self) -> bool {
        self.collective
    }

    pub fn set_collective(&mut self, enabled: bool) -> &mut Self {
        self.collective = enabled;
        self
    }

    pub fn is_no_user_modification(&self) -> bool {
        self.no_user_modification
    }

    pub fn set_no_user_modification(&mut self, enabled: bool) -> &mut Self {
        self.no_user_modification = enabled;
        self
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn set_usage(&mut self, usage: Usage) -> &mut Self {
        self.usage = usage;
        self
    }

    /// Syntax assigned here or on the nearest supertype.
    pub fn effective_syntax_in(&self, schema: &Schema) -> ValidationResult<Option<LdapSyntaxId>> {
        self.inherited_in(schema, |at| at.syntax)
    }

    pub fn effective_syntax(&self) -> SchemaResult<Option<LdapSyntaxId>> {
        Ok(self.effective_syntax_in(&self.schema()?)?)
    }

    pub fn effective_equality_in(&self, schema: &Schema) -> ValidationResult<Option<MatchingRuleId>> {
        self.inherited_in(schema, |at| at.equality)
    }

    pub fn effective_ordering_in(&self, schema: &Schema) -> ValidationResult<Option<MatchingRuleId>> {
        self.inherited_in(schema, |at| at.ordering)
    }

    pub fn effective_substring_in(
        &self,
        schema: &Schema,
    ) -> ValidationResult<Option<MatchingRuleId>> {
        self.inherited_in(schema, |at| at.substring)
    }

    /// Human readability of the effective syntax. False when no syntax is
    /// reachable.
    pub fn is_human_readable_in(&self, schema: &Schema) -> SchemaResult<bool> {
        let Some(id) = self.effective_syntax_in(schema)? else {
            return Ok(false);
        };
        Ok(schema
            .ldap_syntaxes()
            .with(id, LdapSyntax::is_human_readable)
            .unwrap_or(false))
    }

    /// True if `other` appears anywhere on this type's SUP chain.
    pub fn is_subtype_of_in(&self, schema: &Schema, other: AttributeTypeId) -> ValidationResult<bool> {
        Ok(self
            .inherited_in(schema, |at| {
                at.super_type.filter(|sup| *sup == other)
            })?
            .is_some())
    }

    /// Walk this type and its supertypes until `pick` yields a value.
    fn inherited_in<R>(
        &self,
        schema: &Schema,
        pick: impl Fn(&AttributeType) -> Option<R>,
    ) -> ValidationResult<Option<R>> {
        if let Some(found) = pick(self) {
            return Ok(Some(found));
        }

        let types = schema.attribute_types();
        let mut visited: HashSet<AttributeTypeId> = HashSet::new();
        let mut next = self.super_type;
        while let Some(id) = next {
            if !visited.insert(id) {
                return Err(ValidationError::CyclicReference {
                    definition: self.label(),
                    clause: "SUP".to_string(),
                });
            }
            let (found, sup) = types
                .with(id, |at| (pick(at), at.super_type))
                .ok_or_else(|| ValidationError::DanglingReference {
                    definition: self.label(),
                    clause: "SUP".to_string(),
                })?;
            if found.is_some() {
                return Ok(found);
            }
            next = sup;
        }
        Ok(None)
    }

    fn check_matching_rules(&self, schema: &Schema) -> ValidationResult<()> {
        let clauses = [
            ("EQUALITY", self.equality),
            ("ORDERING", self.ordering),
            ("SUBSTR", self.substring),
        ];
        for (clause, id) in clauses {
            let Some(id) = id else { continue };
            let rule = fetch::<MatchingRule>(schema, id, &self.label(), clause)?;
            let name = rule
                .names()
                .first()
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            let fits = match clause {
                "EQUALITY" => !name.contains("ordering") && !name.contains("substring"),
                "ORDERING" => name.contains("ordering"),
                _ => name.contains("substring"),
            };
            if !fits {
                return Err(ValidationError::InvalidMatchingRule {
                    definition: self.label(),
                    clause: clause.to_string(),
                    rule: rule.label(),
                });
            }
        }
        Ok(())
    }

    fn check_usage(&self) -> ValidationResult<()> {
        let conflict = if self.collective && self.usage.is_operational() {
            Some("COLLECTIVE")
        } else if self.no_user_modification && !self.usage.is_operational() {
            Some("NO-USER-MODIFICATION")
        } else {
            None
        };
        match conflict {
            Some(first) => Err(ValidationError::ConflictingClauses {
                definition: self.label(),
                attribute: self.label(),
                first: first.to_string(),
                second: "USAGE".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn syntax_word(&self, schema: &Schema) -> SchemaResult<Option<String>> {
        let Some(id) = self.syntax else {
            return Ok(None);
        };
        let oid = identifier_of(schema, id)?;
        Ok(Some(match self.max_length {
            Some(mub) => format!("{oid}{{{mub}}}"),
            None => oid,
        }))
    }

    fn rule_names(&self, schema: &Schema) -> SchemaResult<[(&'static str, Option<String>); 3]> {
        let name = |id: Option<MatchingRuleId>| id.map(|id| display_name(schema, id)).transpose();
        Ok([
            ("EQUALITY", name(self.equality)?),
            ("ORDERING", name(self.ordering)?),
            ("SUBSTR", name(self.substring)?),
        ])
    }
}

impl PartialEq for AttributeType {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.super_type == other.super_type
            && self.equality == other.equality
            && self.ordering == other.ordering
            && self.substring == other.substring
            && self.syntax == other.syntax
            && self.max_length == other.max_length
            && self.single_value == other.single_value
            && self.collective == other.collective
            && self.no_user_modification == other.no_user_modification
            && self.usage == other.usage
            && self.extensions == other.extensions
    }
}

impl Definition for AttributeType {
    const KIND: DefinitionKind = DefinitionKind::AttributeType;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty()
            && self.names.is_empty()
            && self.super_type.is_none()
            && self.syntax.is_none()
    }

    fn validate_in(&self, schema: &Schema) -> SchemaResult<()> {
        if self.is_zero() {
            return Err(ValidationError::IsZero { kind: Self::KIND }.into());
        }
        validate_header(
            Self::KIND,
            &self.oid,
            &self.names,
            self.desc.as_deref(),
            &self.extensions,
        )?;

        let Some(syntax_id) = self.effective_syntax_in(schema)? else {
            return Err(ValidationError::InvalidSyntax {
                definition: self.label(),
                reason: "no syntax assigned or inherited".to_string(),
            }
            .into());
        };
        let syntax = fetch::<LdapSyntax>(schema, syntax_id, &self.label(), "SYNTAX")?;
        if self.max_length.is_some_and(|m| m > 0) && !syntax.is_human_readable() {
            return Err(ValidationError::InvalidSyntax {
                definition: self.label(),
                reason: format!(
                    "length bound on non-human-readable syntax {}",
                    syntax.numeric_oid()
                ),
            }
            .into());
        }

        self.check_matching_rules(schema)?;
        self.check_usage()?;
        Ok(())
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.attribute_types()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        self.oid = marshal::resolve_numeric_oid(schema, token)?;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "SUP" => {
                let term = marshal::single_value(clause)?;
                self.super_type = Some(resolve::<AttributeType>(schema, term)?);
            }
            "EQUALITY" => {
                let term = marshal::single_value(clause)?;
                self.equality = Some(resolve::<MatchingRule>(schema, term)?);
            }
            "ORDERING" => {
                let term = marshal::single_value(clause)?;
                self.ordering = Some(resolve::<MatchingRule>(schema, term)?);
            }
            "SUBSTR" | "SUBSTRINGS" => {
                let term = marshal::single_value(clause)?;
                self.substring = Some(resolve::<MatchingRule>(schema, term)?);
            }
            "SYNTAX" => {
                let (oid, mub) = split_noidlen(marshal::single_value(clause)?)?;
                self.syntax = Some(resolve::<LdapSyntax>(schema, oid)?);
                self.max_length = mub;
            }
            "SINGLE-VALUE" => self.single_value = true,
            "COLLECTIVE" => self.collective = true,
            "NO-USER-MODIFICATION" => self.no_user_modification = true,
            "USAGE" => self.usage = marshal::single_value(clause)?.parse()?,
            label => return Err(marshal::invalid_label::<Self>(label)),
        }
        Ok(())
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let sup = self
            .super_type
            .map(|id| display_name(schema, id))
            .transpose()?;
        let rules = self.rule_names(schema)?;
        let syntax = self.syntax_word(schema)?;

        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .word("SUP", sup.as_deref());
        for (label, name) in &rules {
            out.word(label, name.as_deref());
        }
        out.word("SYNTAX", syntax.as_deref())
            .flag("SINGLE-VALUE", self.single_value)
            .flag("COLLECTIVE", self.collective)
            .flag("NO-USER-MODIFICATION", self.no_user_modification);
        if self.usage.is_operational() {
            out.word("USAGE", Some(self.usage.as_str()));
        }
        out.extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if let Some(id) = self.super_type {
            map.insert("SUP".to_string(), vec![display_name(schema, id)?]);
        }
        for (label, name) in self.rule_names(schema)? {
            if let Some(name) = name {
                map.insert(label.to_string(), vec![name]);
            }
        }
        if let Some(id) = self.syntax {
            map.insert("SYNTAX".to_string(), vec![identifier_of(schema, id)?]);
        }
        if let Some(mub) = self.max_length {
            map.insert("MUB".to_string(), vec![mub.to_string()]);
        }
        map.insert("SINGLE-VALUE".to_string(), vec![bool_str(self.single_value)]);
        map.insert("COLLECTIVE".to_string(), vec![bool_str(self.collective)]);
        map.insert(
            "NO-USER-MODIFICATION".to_string(),
            vec![bool_str(self.no_user_modification)],
        );
        map.insert("USAGE".to_string(), vec![self.usage.to_string()]);
        Ok(())
    }

    fn after_push(schema: &Schema, id: DefId<Self>) -> SchemaResult<()> {
        schema.register_matching_rule_uses(id)
    }

    any_methods!(AttributeType);
}

/// Split `1.2.3{64}` into the OID and its length bound.
fn split_noidlen(value: &str) -> SchemaResult<(&str, Option<u32>)> {
    let Some((oid, rest)) = value.split_once('{') else {
        return Ok((value, None));
    };
    let mub = rest
        .strip_suffix('}')
        .and_then(|n| n.parse::<u32>().ok())
        .ok_or_else(|| SchemaError::invalid_value("SYNTAX", format!("bad length bound in '{value}'")))?;
    Ok((oid, Some(mub)))
}
