//! LDAP syntax definitions (RFC 4512 section 4.1.5).

use super::{Attachments, Definition, DefinitionKind, any_methods, validate_header};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};

const NOT_HUMAN_READABLE: &str = "X-NOT-HUMAN-READABLE";

static NO_NAMES: NameList = NameList::new();

/// An LDAP syntax: a numeric OID, a description and extensions.
///
/// Syntaxes carry no names and cannot be obsoleted. Human readability is
/// not stored; it is read from the `X-NOT-HUMAN-READABLE` extension.
#[derive(Debug, Clone, Default)]
pub struct LdapSyntax {
    oid: String,
    desc: Option<String>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl LdapSyntax {
    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    pub fn set_numeric_oid(&mut self, oid: impl Into<String>) -> &mut Self {
        self.oid = oid.into();
        self
    }

    pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
        let desc: String = desc.into();
        let trimmed = desc
            .strip_prefix('\'')
            .and_then(|d| d.strip_suffix('\''))
            .unwrap_or(&desc);
        self.desc = Some(trimmed.to_string());
        self
    }

    pub fn set_extension<I, S>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.set(key, values);
        self
    }

    /// False only when `X-NOT-HUMAN-READABLE` is `TRUE`.
    pub fn is_human_readable(&self) -> bool {
        !self
            .extensions
            .get(NOT_HUMAN_READABLE)
            .and_then(|v| v.first())
            .is_some_and(|v| v.eq_ignore_ascii_case("TRUE"))
    }

    pub fn set_human_readable(&mut self, readable: bool) -> &mut Self {
        let flag = if readable { "FALSE" } else { "TRUE" };
        self.extensions.set(NOT_HUMAN_READABLE, [flag]);
        self
    }
}

impl PartialEq for LdapSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid && self.extensions == other.extensions
    }
}

impl Definition for LdapSyntax {
    const KIND: DefinitionKind = DefinitionKind::LdapSyntax;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn names(&self) -> &NameList {
        &NO_NAMES
    }

    fn description(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    fn is_obsolete(&self) -> bool {
        false
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.desc.is_none() && self.extensions.is_empty()
    }

    fn validate_in(&self, _schema: &Schema) -> SchemaResult<()> {
        if self.is_zero() {
            return Err(ValidationError::IsZero { kind: Self::KIND }.into());
        }
        validate_header(
            Self::KIND,
            &self.oid,
            &NO_NAMES,
            self.desc.as_deref(),
            &self.extensions,
        )?;
        Ok(())
    }

    fn attachments(&self) -> &Attachments<Self> {
        &self.attachments
    }

    fn attachments_mut(&mut self) -> &mut Attachments<Self> {
        &mut self.attachments
    }

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.ldap_syntaxes()
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn names_mut(&mut self) -> Option<&mut NameList> {
        None
    }

    fn description_mut(&mut self) -> &mut Option<String> {
        &mut self.desc
    }

    fn mark_obsolete(&mut self) -> bool {
        false
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        self.oid = marshal::resolve_numeric_oid(schema, token)?;
        Ok(())
    }

    fn apply_clause(&mut self, _schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        Err(marshal::invalid_label::<Self>(&clause.label))
    }

    fn write_clauses(&self, _schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        out.description(self.desc.as_deref())
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, _schema: &Schema, _map: &mut DefinitionMap) -> SchemaResult<()> {
        Ok(())
    }

    any_methods!(LdapSyntax);
}
