//! DIT structure rule definitions (RFC 4512 section 4.1.7.1).
//!
//! Structure rules are keyed by an unsigned rule ID instead of an OID. Each
//! rule names a [`NameForm`] and may list superior rules, possibly including
//! itself, forming the chain that [`DitStructureRule::govern_in`] walks.

use super::{
    Attachments, DefId, Definition, DefinitionKind, DitStructureRuleId, NameForm, NameFormId,
    ObjectClassId, any_methods, display_name, fetch, header_methods, identifier_of, impl_header,
    resolve,
};
use crate::collection::Collection;
use crate::error::{SchemaError, SchemaResult, ValidationError};
use crate::governance::{self, TokenizedDn};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList, validate_description};
use log::{debug, warn};

/// An entry in a structure rule's SUP list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuperRule {
    Rule(DitStructureRuleId),
    /// The rule lists itself as a superior.
    Itself,
}

#[derive(Debug, Clone, Default)]
pub struct DitStructureRule {
    rule_id: Option<u32>,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    form: Option<NameFormId>,
    super_rules: Vec<SuperRule>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl_header!(DitStructureRule);

impl DitStructureRule {
    pub fn rule_id(&self) -> Option<u32> {
        self.rule_id
    }

    pub fn set_rule_id(&mut self, id: u32) -> &mut Self {
        self.rule_id = Some(id);
        self
    }

    pub fn form(&self) -> Option<NameFormId> {
        self.form
    }

    pub fn set_form(&mut self, form: NameFormId) -> &mut Self {
        self.form = Some(form);
        self
    }

    pub fn super_rules(&self) -> &[SuperRule] {
        &self.super_rules
    }

    /// Add a superior rule by `"self"`, rule ID or name.
    ///
    /// A term equal to this rule's own ID also means itself.
    pub fn set_super_rule(&mut self, schema: &Schema, term: &str) -> SchemaResult<&mut Self> {
        let superior = self.resolve_superior(schema, term)?;
        if !self.super_rules.contains(&superior) {
            self.super_rules.push(superior);
        }
        Ok(self)
    }

    fn resolve_superior(&self, schema: &Schema, term: &str) -> SchemaResult<SuperRule> {
        let own = self.rule_id.map(|id| id.to_string());
        if term.eq_ignore_ascii_case("self") || own.as_deref() == Some(term) {
            return Ok(SuperRule::Itself);
        }
        Ok(SuperRule::Rule(resolve::<DitStructureRule>(schema, term)?))
    }

    /// Stored rules that list this rule as a superior.
    pub fn sub_rules_in(&self, schema: &Schema) -> Vec<DitStructureRuleId> {
        let rules = schema.structure_rules();
        let Some(own) = rules.contains(&self.identifier()) else {
            return Vec::new();
        };
        rules
            .ids()
            .into_iter()
            .filter(|id| {
                rules
                    .with(*id, |rule| {
                        rule.super_rules.iter().any(|sup| match sup {
                            SuperRule::Rule(sup) => *sup == own,
                            SuperRule::Itself => *id == own,
                        })
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn sub_rules(&self) -> SchemaResult<Vec<DitStructureRuleId>> {
        Ok(self.sub_rules_in(&self.schema()?))
    }

    /// The structural class named by this rule's name form.
    pub fn named_object_class_in(&self, schema: &Schema) -> SchemaResult<ObjectClassId> {
        let form = self.name_form_in(schema)?;
        form.structural_class().ok_or_else(|| {
            ValidationError::InvalidNameForm {
                definition: self.label(),
                reason: format!("{} names no object class", form.label()),
            }
            .into()
        })
    }

    pub fn named_object_class(&self) -> SchemaResult<ObjectClassId> {
        self.named_object_class_in(&self.schema()?)
    }

    fn name_form_in(&self, schema: &Schema) -> SchemaResult<NameForm> {
        let form = self.form.ok_or_else(|| ValidationError::InvalidNameForm {
            definition: self.label(),
            reason: "no FORM assigned".to_string(),
        })?;
        Ok(fetch::<NameForm>(schema, form, &self.label(), "FORM")?)
    }

    /// Check `dn` against this rule and its superior chain.
    ///
    /// `flat` is the number of trailing segments, beyond the last, that make
    /// up the root suffix component.
    pub fn govern_in(&self, schema: &Schema, dn: &str, flat: isize) -> SchemaResult<()> {
        let tokens = TokenizedDn::parse(dn, flat)?;
        debug!(
            "Governing '{dn}' ({} components) with dITStructureRule {}",
            tokens.len(),
            self.identifier()
        );
        governance::govern_components(schema, self, tokens.components())
    }

    pub fn govern(&self, dn: &str, flat: isize) -> SchemaResult<()> {
        self.govern_in(&self.schema()?, dn, flat)
    }

    fn super_rule_ids(&self, schema: &Schema) -> SchemaResult<Vec<String>> {
        self.super_rules
            .iter()
            .map(|sup| match sup {
                SuperRule::Itself => Ok(self.identifier()),
                SuperRule::Rule(id) => identifier_of(schema, *id),
            })
            .collect()
    }

    /// True if no NameForm MUST attribute is prohibited by the content rule
    /// of the form's structural class.
    fn content_rule_allows_form(&self, schema: &Schema) -> SchemaResult<bool> {
        let form = self.name_form_in(schema)?;
        let Some(class) = form.structural_class() else {
            return Ok(false);
        };
        let class_oid = identifier_of(schema, class)?;
        let Some(rule) = schema.content_rules().get(&class_oid) else {
            return Ok(true);
        };
        Ok(!form.must().iter().any(|at| rule.prohibits(at)))
    }
}

impl PartialEq for DitStructureRule {
    fn eq(&self, other: &Self) -> bool {
        self.rule_id == other.rule_id
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.form == other.form
            && self.super_rules == other.super_rules
            && self.extensions == other.extensions
    }
}

impl Definition for DitStructureRule {
    const KIND: DefinitionKind = DefinitionKind::DitStructureRule;

    fn identifier(&self) -> String {
        self.rule_id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn is_zero(&self) -> bool {
        self.rule_id.is_none() && self.names.is_empty() && self.form.is_none()
    }

    fn validate_in(&self, schema: &Schema) -> SchemaResult<()> {
        if self.is_zero() {
            return Err(ValidationError::IsZero { kind: Self::KIND }.into());
        }
        if self.rule_id.is_none() {
            return Err(ValidationError::InvalidRuleId {
                value: String::new(),
            }
            .into());
        }
        self.names.validate()?;
        if let Some(desc) = &self.desc {
            validate_description(desc)?;
        }
        if let Some(key) = self.extensions.invalid_key() {
            return Err(ValidationError::InvalidNames {
                name: key.to_string(),
            }
            .into());
        }

        self.name_form_in(schema)?;
        for sup in &self.super_rules {
            if let SuperRule::Rule(id) = sup {
                fetch::<DitStructureRule>(schema, *id, &self.label(), "SUP")?;
            }
        }
        Ok(())
    }

    /// Also requires a compliant name form whose MUST attributes are not
    /// prohibited by the matching content rule.
    fn compliant_in(&self, schema: &Schema) -> bool {
        if self.validate_in(schema).is_err() {
            return false;
        }
        let form_ok = self
            .name_form_in(schema)
            .map(|form| form.compliant_in(schema))
            .unwrap_or(false);
        form_ok && self.content_rule_allows_form(schema).unwrap_or(false)
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.structure_rules()
    }

    fn assign_identifier(&mut self, _schema: &Schema, token: &str) -> SchemaResult<()> {
        let id = token.parse::<u32>().map_err(|_| ValidationError::InvalidRuleId {
            value: token.to_string(),
        })?;
        self.rule_id = Some(id);
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "FORM" => {
                let term = marshal::single_value(clause)?;
                self.form = Some(resolve::<NameForm>(schema, term)?);
                Ok(())
            }
            "SUP" => {
                for term in &clause.values {
                    self.set_super_rule(schema, term)?;
                }
                Ok(())
            }
            label => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let form = self.form.map(|id| display_name(schema, id)).transpose()?;
        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .word("FORM", form.as_deref())
            .rule_ids("SUP", &self.super_rule_ids(schema)?)
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if let Some(id) = self.form {
            map.insert("FORM".to_string(), vec![display_name(schema, id)?]);
        }
        if !self.super_rules.is_empty() {
            map.insert("SUP".to_string(), self.super_rule_ids(schema)?);
        }
        if let Ok(class) = self.named_object_class_in(schema) {
            map.insert("NOC".to_string(), vec![display_name(schema, class)?]);
        }
        Ok(())
    }

    /// Renumber under the reindex option, otherwise reject.
    fn on_collision(&mut self, schema: &Schema, existing: &Self) -> SchemaResult<()> {
        let id = self.rule_id.unwrap_or_default();
        if !schema.options().allow_reindexed_structure_rules {
            return Err(SchemaError::NotUnique {
                kind: Self::KIND,
                id: self.identifier(),
            });
        }

        let same_names = self.names.len() == existing.names.len()
            && self.names.iter().all(|name| existing.names.contains(name));
        if same_names {
            return Err(SchemaError::ReindexConflict { id });
        }

        let max = schema
            .structure_rules()
            .max_by_key(|rule| rule.rule_id.unwrap_or_default())
            .unwrap_or(id);
        let next = max
            .checked_add(1)
            .ok_or(SchemaError::ReindexOverflow { id })?;
        warn!("Reindexing dITStructureRule {id} as {next}");
        self.rule_id = Some(next);
        self.extensions.set("X-WARNING", ["REINDEXED"]);
        Ok(())
    }

    fn after_push(schema: &Schema, id: DefId<Self>) -> SchemaResult<()> {
        debug!(
            "dITStructureRule {} admitted",
            schema
                .structure_rules()
                .with(id, |rule| rule.identifier())
                .unwrap_or_default()
        );
        Ok(())
    }

    any_methods!(DitStructureRule);
}
