//! Matching rule use definitions (RFC 4512 section 4.1.4).
//!
//! The schema maintains these as a view over the EQUALITY, ORDERING and
//! SUBSTR references of its attribute types. They can still be parsed from
//! text, which is how a subschema subentry would be read back.

use super::{
    AttributeType, AttributeTypeId, Attachments, Definition, DefinitionKind, MatchingRule,
    MatchingRuleId, References, Role, any_methods, check_references, display_names,
    header_methods, impl_header, resolve, resolve_into, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};

#[derive(Debug, Clone)]
pub struct MatchingRuleUse {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    rule: Option<MatchingRuleId>,
    applies: References<AttributeType>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl Default for MatchingRuleUse {
    fn default() -> Self {
        Self {
            oid: String::new(),
            names: NameList::new(),
            desc: None,
            obsolete: false,
            rule: None,
            applies: References::new(Role::Applicable),
            extensions: Extensions::new(),
            attachments: Attachments::default(),
        }
    }
}

impl_header!(MatchingRuleUse);

impl MatchingRuleUse {
    /// A use seeded from `rule`'s identity, with an empty APPLIES list.
    pub(crate) fn for_rule(schema: &Schema, id: MatchingRuleId, rule: &MatchingRule) -> Self {
        let mut mru = Self::new_in(schema);
        mru.oid = rule.oid().to_string();
        mru.rule = Some(id);
        for name in rule.names().iter() {
            mru.names.push(name);
        }
        mru.desc = rule.description().map(str::to_string);
        mru.obsolete = rule.is_obsolete();
        mru.extensions = rule.extensions().clone();
        mru
    }

    pub(crate) fn push_applies(&mut self, at: AttributeTypeId) {
        self.applies.push(at);
    }

    pub(crate) fn reset_applies(&mut self, ats: Vec<AttributeTypeId>) {
        self.applies = References::new(Role::Applicable);
        for at in ats {
            self.applies.push(at);
        }
    }

    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    /// The matching rule this use describes.
    pub fn matching_rule(&self) -> Option<MatchingRuleId> {
        self.rule
    }

    pub fn applies(&self) -> &References<AttributeType> {
        &self.applies
    }
}

impl PartialEq for MatchingRuleUse {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.applies == other.applies
            && self.extensions == other.extensions
    }
}

impl Definition for MatchingRuleUse {
    const KIND: DefinitionKind = DefinitionKind::MatchingRuleUse;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.names.is_empty() && self.applies.is_empty()
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
        if self.applies.is_empty() {
            return Err(ValidationError::MissingRequiredClause {
                definition: self.label(),
                clause: "APPLIES".to_string(),
            }
            .into());
        }
        check_references(schema, &self.applies, &self.label())?;
        Ok(())
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.matching_rule_uses()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        let oid = marshal::resolve_numeric_oid(schema, token)?;
        self.rule = Some(resolve::<MatchingRule>(schema, &oid)?);
        self.oid = oid;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "APPLIES" => resolve_into(schema, &mut self.applies, &clause.values),
            label => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let applies = display_names(schema, &self.applies)?;
        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .oids(self.applies.role().label(), &applies)
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if !self.applies.is_empty() {
            map.insert(
                self.applies.role().label().to_string(),
                display_names(schema, &self.applies)?,
            );
        }
        Ok(())
    }

    any_methods!(MatchingRuleUse);
}
