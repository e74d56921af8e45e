//! Matching rule definitions (RFC 4512 section 4.1.3).

use super::{
    Attachments, Definition, DefinitionKind, LdapSyntax, LdapSyntaxId, any_methods, fetch,
    header_methods, identifier_of, impl_header, resolve, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};

/// A matching rule and the syntax of its assertion value.
#[derive(Debug, Clone, Default)]
pub struct MatchingRule {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    syntax: Option<LdapSyntaxId>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl_header!(MatchingRule);

impl MatchingRule {
    pub fn oid(&self) -> &str {
        &self.oid
    }

    pub fn set_numeric_oid(&mut self, oid: impl Into<String>) -> &mut Self {
        self.oid = oid.into();
        self
    }

    pub fn syntax(&self) -> Option<LdapSyntaxId> {
        self.syntax
    }

    pub fn set_syntax(&mut self, syntax: LdapSyntaxId) -> &mut Self {
        self.syntax = Some(syntax);
        self
    }
}

impl PartialEq for MatchingRule {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.syntax == other.syntax
            && self.extensions == other.extensions
    }
}

impl Definition for MatchingRule {
    const KIND: DefinitionKind = DefinitionKind::MatchingRule;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.names.is_empty() && self.syntax.is_none()
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

        let Some(syntax) = self.syntax else {
            return Err(ValidationError::MissingRequiredClause {
                definition: self.label(),
                clause: "SYNTAX".to_string(),
            }
            .into());
        };
        fetch::<LdapSyntax>(schema, syntax, &self.label(), "SYNTAX")?;
        Ok(())
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.matching_rules()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        self.oid = marshal::resolve_numeric_oid(schema, token)?;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "SYNTAX" => {
                let oid = marshal::single_value(clause)?;
                self.syntax = Some(resolve::<LdapSyntax>(schema, oid)?);
                Ok(())
            }
            label => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let syntax = self
            .syntax
            .map(|id| identifier_of(schema, id))
            .transpose()?;
        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .word("SYNTAX", syntax.as_deref())
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if let Some(id) = self.syntax {
            map.insert("SYNTAX".to_string(), vec![identifier_of(schema, id)?]);
        }
        Ok(())
    }

    any_methods!(MatchingRule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_matching_rule_requires_syntax() {
        let schema = Schema::basic().expect("Failed to create schema");
        let mut rule = schema.new_matching_rule();
        rule.set_numeric_oid("1.3.6.1.4.1.56521.999.10")
            .set_name(["fakeMatch"]);

        let err = rule.validate().unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::MissingRequiredClause { clause, .. }) if clause == "SYNTAX"
        ));

        let syntax = schema
            .ldap_syntaxes()
            .contains("1.3.6.1.4.1.1466.115.121.1.15")
            .unwrap();
        rule.set_syntax(syntax);
        assert!(rule.compliant());
    }

    #[test]
    fn test_matching_rule_unknown_syntax_fails_marshal() {
        let schema = Schema::basic().expect("Failed to create schema");
        let result = schema.marshal_as::<MatchingRule>(
            "( 1.3.6.1.4.1.56521.999.10 NAME 'fakeMatch' SYNTAX 1.3.6.1.4.1.56521.999.404 )",
        );
        assert!(matches!(result, Err(SchemaError::NotFound { .. })));
    }

    #[test]
    fn test_matching_rule_map() {
        let schema = Schema::basic().expect("Failed to create schema");
        let rule = schema.matching_rules().get("caseIgnoreMatch").unwrap();
        let map = rule.map().unwrap();
        assert_eq!(map["NUMERICOID"], vec!["2.5.13.2"]);
        assert_eq!(map["SYNTAX"], vec!["1.3.6.1.4.1.1466.115.121.1.15"]);
        assert_eq!(map["OBSOLETE"], vec!["FALSE"]);
        assert_eq!(map["X-ORIGIN"], vec!["RFC4517"]);
        assert_eq!(map["TYPE"], vec!["matchingRule"]);
    }
}
