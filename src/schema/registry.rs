//! The schema container: eight definition arenas, a macro table and options.
//!
//! [`Schema`] is a cheap-to-clone handle around shared state. Definitions
//! created through it hold a weak back-reference, so they can resolve their
//! cross-references later without keeping the schema alive.

use super::embedded::Bootstrap;
use super::macros::Macros;
use super::options::{SchemaBuilder, SchemaOptions};
use crate::collection::Collection;
use crate::definition::{
    AnyDefinition, AttributeType, AttributeTypeId, DefId, Definition, DefinitionKind,
    DitContentRule, DitStructureRule, LdapSyntax, MatchingRule, MatchingRuleId, MatchingRuleUse,
    NameForm, ObjectClass,
};
use crate::error::{SchemaError, SchemaResult};
use crate::marshal::{self, DefinitionMap};
use log::{debug, trace, warn};
use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt;
use std::sync::{Arc, Weak};

pub(crate) struct SchemaInner {
    options: RwLock<SchemaOptions>,
    macros: Arc<RwLock<Macros>>,
    ldap_syntaxes: Collection<LdapSyntax>,
    matching_rules: Collection<MatchingRule>,
    attribute_types: Collection<AttributeType>,
    matching_rule_uses: Collection<MatchingRuleUse>,
    object_classes: Collection<ObjectClass>,
    content_rules: Collection<DitContentRule>,
    name_forms: Collection<NameForm>,
    structure_rules: Collection<DitStructureRule>,
}

/// Shared, thread-safe LDAP schema.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::{Definition, Schema};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let schema = Schema::new()?;
///     let id = schema.parse_attribute_type(
///         "( 1.3.6.1.4.1.56521.999.1 NAME 'exampleName' SUP name )",
///     )?;
///
///     let at = schema.attribute_types().fetch(id).expect("just pushed");
///     assert_eq!(
///         at.unmarshal()?,
///         "( 1.3.6.1.4.1.56521.999.1 NAME 'exampleName' SUP name )"
///     );
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

/// Weak back-reference from a definition to its schema.
#[derive(Clone, Default)]
pub struct SchemaRef(Weak<SchemaInner>);

impl SchemaRef {
    pub(crate) fn upgrade(&self) -> Option<Schema> {
        self.0.upgrade().map(|inner| Schema { inner })
    }

    /// True while the referenced schema is alive.
    pub fn is_live(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaRef(live: {})", self.is_live())
    }
}

impl Schema {
    /// Create a schema loaded with every bundled definition.
    pub fn new() -> SchemaResult<Self> {
        SchemaBuilder::new().build()
    }

    /// Create a schema holding only the bundled syntaxes and matching rules.
    pub fn basic() -> SchemaResult<Self> {
        SchemaBuilder::new().with_bootstrap(Bootstrap::Basic).build()
    }

    /// Create a schema with no definitions.
    pub fn empty() -> Self {
        Self::with_options(SchemaOptions::default())
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub(crate) fn with_options(options: SchemaOptions) -> Self {
        let macros = Arc::new(RwLock::new(Macros::new()));
        let inner = SchemaInner {
            options: RwLock::new(options),
            ldap_syntaxes: Collection::new(Arc::clone(&macros)),
            matching_rules: Collection::new(Arc::clone(&macros)),
            attribute_types: Collection::new(Arc::clone(&macros)),
            matching_rule_uses: Collection::new(Arc::clone(&macros)),
            object_classes: Collection::new(Arc::clone(&macros)),
            content_rules: Collection::new(Arc::clone(&macros)),
            name_forms: Collection::new(Arc::clone(&macros)),
            structure_rules: Collection::new(Arc::clone(&macros)),
            macros,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    pub(crate) fn downgrade(&self) -> SchemaRef {
        SchemaRef(Arc::downgrade(&self.inner))
    }

    /// True if both handles point at the same schema.
    pub fn ptr_eq(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn options(&self) -> SchemaOptions {
        self.inner.options.read().clone()
    }

    /// Replace the options; affects subsequent operations only.
    pub fn set_options(&self, options: SchemaOptions) {
        *self.inner.options.write() = options;
    }

    /// Register a macro alias for a numeric OID.
    pub fn set_macro(&self, name: impl Into<String>, oid: impl Into<String>) -> SchemaResult<()> {
        let (name, oid) = (name.into(), oid.into());
        self.inner.macros.write().set(&name, &oid)?;
        debug!("Registered macro {name} -> {oid}");
        Ok(())
    }

    /// OID registered for `name`, ignoring case.
    pub fn get_macro(&self, name: &str) -> Option<String> {
        self.inner.macros.read().get(name).map(str::to_string)
    }

    /// Alias registered for `oid`.
    pub fn get_macro_name(&self, oid: &str) -> Option<String> {
        self.inner.macros.read().name_for(oid).map(str::to_string)
    }

    pub(crate) fn macros(&self) -> RwLockReadGuard<'_, Macros> {
        self.inner.macros.read()
    }

    pub fn ldap_syntaxes(&self) -> &Collection<LdapSyntax> {
        &self.inner.ldap_syntaxes
    }

    pub fn matching_rules(&self) -> &Collection<MatchingRule> {
        &self.inner.matching_rules
    }

    pub fn attribute_types(&self) -> &Collection<AttributeType> {
        &self.inner.attribute_types
    }

    pub fn matching_rule_uses(&self) -> &Collection<MatchingRuleUse> {
        &self.inner.matching_rule_uses
    }

    pub fn object_classes(&self) -> &Collection<ObjectClass> {
        &self.inner.object_classes
    }

    pub fn content_rules(&self) -> &Collection<DitContentRule> {
        &self.inner.content_rules
    }

    pub fn name_forms(&self) -> &Collection<NameForm> {
        &self.inner.name_forms
    }

    pub fn structure_rules(&self) -> &Collection<DitStructureRule> {
        &self.inner.structure_rules
    }

    /// Blank definition of kind `T` bound to this schema.
    pub fn new_definition<T: Definition>(&self) -> T {
        T::new_in(self)
    }

    pub fn new_ldap_syntax(&self) -> LdapSyntax {
        self.new_definition()
    }

    pub fn new_matching_rule(&self) -> MatchingRule {
        self.new_definition()
    }

    pub fn new_attribute_type(&self) -> AttributeType {
        self.new_definition()
    }

    pub fn new_object_class(&self) -> ObjectClass {
        self.new_definition()
    }

    pub fn new_content_rule(&self) -> DitContentRule {
        self.new_definition()
    }

    pub fn new_name_form(&self) -> NameForm {
        self.new_definition()
    }

    pub fn new_structure_rule(&self) -> DitStructureRule {
        self.new_definition()
    }

    /// Admit `def` into its collection.
    ///
    /// The definition must be compliant. A colliding identifier is rejected
    /// with `NotUnique`, except for structure rules under the reindex option.
    pub fn push<T: Definition>(&self, mut def: T) -> SchemaResult<DefId<T>> {
        def.attachments_mut().schema = self.downgrade();
        if !def.compliant_in(self) {
            return Err(SchemaError::NonCompliant {
                kind: T::KIND,
                id: def.identifier(),
            });
        }

        let collection = T::collection(self);
        if let Some(existing) = collection.get(&def.identifier()) {
            def.on_collision(self, &existing)?;
        }

        let id = collection.set(def)?;
        T::after_push(self, id)?;
        trace!("Pushed {} at position {}", T::KIND, id.index());
        Ok(id)
    }

    /// Admit a definition of any kind, returning its position.
    pub fn push_any(&self, def: AnyDefinition) -> SchemaResult<usize> {
        let position = match def {
            AnyDefinition::LdapSyntax(d) => self.push(d)?.index(),
            AnyDefinition::MatchingRule(d) => self.push(d)?.index(),
            AnyDefinition::AttributeType(d) => self.push(d)?.index(),
            AnyDefinition::MatchingRuleUse(d) => self.push(d)?.index(),
            AnyDefinition::ObjectClass(d) => self.push(d)?.index(),
            AnyDefinition::DitContentRule(d) => self.push(d)?.index(),
            AnyDefinition::NameForm(d) => self.push(d)?.index(),
            AnyDefinition::DitStructureRule(d) => self.push(d)?.index(),
        };
        Ok(position)
    }

    /// Overwrite the stored definition that has the same identifier as `def`.
    ///
    /// Requires the `allow_override` option. The arena slot keeps its
    /// position, so existing handles now observe the new content.
    pub fn replace<T: Definition>(&self, mut def: T) -> SchemaResult<DefId<T>> {
        let identifier = def.identifier();
        if !self.options().allow_override {
            warn!("Refusing to replace {} {identifier}: override disabled", T::KIND);
            return Err(SchemaError::OverrideDisabled {
                kind: T::KIND,
                id: identifier,
            });
        }

        let collection = T::collection(self);
        let id = collection
            .contains(&identifier)
            .ok_or_else(|| SchemaError::not_found(T::KIND, &identifier))?;

        def.attachments_mut().schema = self.downgrade();
        if !def.compliant_in(self) {
            return Err(SchemaError::NonCompliant {
                kind: T::KIND,
                id: identifier,
            });
        }

        collection.replace(id, def)?;
        if matches!(
            T::KIND,
            DefinitionKind::AttributeType | DefinitionKind::MatchingRule
        ) {
            self.refresh_matching_rule_uses()?;
        }
        debug!("Replaced {} {identifier}", T::KIND);
        Ok(id)
    }

    /// Marshal `raw` into a validated definition of kind `T` without storing it.
    pub fn marshal_as<T: Definition>(&self, raw: &str) -> SchemaResult<T> {
        marshal::marshal_text(self, raw)
    }

    /// Marshal `raw` into a validated definition of `kind` without storing it.
    pub fn marshal(&self, kind: DefinitionKind, raw: &str) -> SchemaResult<AnyDefinition> {
        let def = match kind {
            DefinitionKind::LdapSyntax => self.marshal_as::<LdapSyntax>(raw)?.into(),
            DefinitionKind::MatchingRule => self.marshal_as::<MatchingRule>(raw)?.into(),
            DefinitionKind::AttributeType => self.marshal_as::<AttributeType>(raw)?.into(),
            DefinitionKind::MatchingRuleUse => self.marshal_as::<MatchingRuleUse>(raw)?.into(),
            DefinitionKind::ObjectClass => self.marshal_as::<ObjectClass>(raw)?.into(),
            DefinitionKind::DitContentRule => self.marshal_as::<DitContentRule>(raw)?.into(),
            DefinitionKind::NameForm => self.marshal_as::<NameForm>(raw)?.into(),
            DefinitionKind::DitStructureRule => self.marshal_as::<DitStructureRule>(raw)?.into(),
        };
        Ok(def)
    }

    /// Marshal a map projection into a validated definition of `kind`.
    pub fn marshal_map(&self, kind: DefinitionKind, map: &DefinitionMap) -> SchemaResult<AnyDefinition> {
        let def = match kind {
            DefinitionKind::LdapSyntax => marshal::marshal_map::<LdapSyntax>(self, map)?.into(),
            DefinitionKind::MatchingRule => marshal::marshal_map::<MatchingRule>(self, map)?.into(),
            DefinitionKind::AttributeType => {
                marshal::marshal_map::<AttributeType>(self, map)?.into()
            }
            DefinitionKind::MatchingRuleUse => {
                marshal::marshal_map::<MatchingRuleUse>(self, map)?.into()
            }
            DefinitionKind::ObjectClass => marshal::marshal_map::<ObjectClass>(self, map)?.into(),
            DefinitionKind::DitContentRule => {
                marshal::marshal_map::<DitContentRule>(self, map)?.into()
            }
            DefinitionKind::NameForm => marshal::marshal_map::<NameForm>(self, map)?.into(),
            DefinitionKind::DitStructureRule => {
                marshal::marshal_map::<DitStructureRule>(self, map)?.into()
            }
        };
        Ok(def)
    }

    /// Marshal and push in one step.
    pub fn parse<T: Definition>(&self, raw: &str) -> SchemaResult<DefId<T>> {
        let def = self.marshal_as::<T>(raw)?;
        self.push(def)
    }

    /// Marshal and push a definition of `kind`, returning its position.
    pub fn parse_any(&self, kind: DefinitionKind, raw: &str) -> SchemaResult<usize> {
        let def = self.marshal(kind, raw)?;
        self.push_any(def)
    }

    pub fn parse_ldap_syntax(&self, raw: &str) -> SchemaResult<DefId<LdapSyntax>> {
        self.parse(raw)
    }

    pub fn parse_matching_rule(&self, raw: &str) -> SchemaResult<DefId<MatchingRule>> {
        self.parse(raw)
    }

    pub fn parse_attribute_type(&self, raw: &str) -> SchemaResult<AttributeTypeId> {
        self.parse(raw)
    }

    pub fn parse_object_class(&self, raw: &str) -> SchemaResult<DefId<ObjectClass>> {
        self.parse(raw)
    }

    pub fn parse_content_rule(&self, raw: &str) -> SchemaResult<DefId<DitContentRule>> {
        self.parse(raw)
    }

    pub fn parse_name_form(&self, raw: &str) -> SchemaResult<DefId<NameForm>> {
        self.parse(raw)
    }

    pub fn parse_structure_rule(&self, raw: &str) -> SchemaResult<DefId<DitStructureRule>> {
        self.parse(raw)
    }

    /// Validate and render any definition.
    pub fn unmarshal(&self, def: &AnyDefinition) -> SchemaResult<String> {
        def.render_in(self)
    }

    /// JSON array of the map projections of every definition of `kind`.
    pub fn to_json(&self, kind: DefinitionKind) -> SchemaResult<String> {
        let maps = match kind {
            DefinitionKind::LdapSyntax => self.ldap_syntaxes().maps()?,
            DefinitionKind::MatchingRule => self.matching_rules().maps()?,
            DefinitionKind::AttributeType => self.attribute_types().maps()?,
            // Uses emptied by a replace keep their slot but have nothing to render.
            DefinitionKind::MatchingRuleUse => self
                .matching_rule_uses()
                .snapshot()
                .iter()
                .filter(|mru| !mru.applies().is_empty())
                .map(|mru| mru.map())
                .collect::<SchemaResult<Vec<_>>>()?,
            DefinitionKind::ObjectClass => self.object_classes().maps()?,
            DefinitionKind::DitContentRule => self.content_rules().maps()?,
            DefinitionKind::NameForm => self.name_forms().maps()?,
            DefinitionKind::DitStructureRule => self.structure_rules().maps()?,
        };
        Ok(serde_json::to_string_pretty(&maps)?)
    }

    /// Check `dn` against the structure rule identified by `rule`.
    pub fn govern(&self, rule: &str, dn: &str, flat: isize) -> SchemaResult<()> {
        let rule = self
            .structure_rules()
            .get(rule)
            .ok_or_else(|| SchemaError::not_found(DefinitionKind::DitStructureRule, rule))?;
        rule.govern_in(self, dn, flat)
    }

    /// Record `at_id` in the matching rule uses of each rule it references,
    /// creating the uses as needed.
    pub(crate) fn register_matching_rule_uses(&self, at_id: AttributeTypeId) -> SchemaResult<()> {
        let Some(at) = self.attribute_types().fetch(at_id) else {
            return Err(SchemaError::not_found(
                DefinitionKind::AttributeType,
                format!("#{}", at_id.index()),
            ));
        };

        let rules = [at.equality(), at.substring(), at.ordering()];
        for rule_id in rules.into_iter().flatten() {
            let rule = self.matching_rules().fetch(rule_id).ok_or_else(|| {
                SchemaError::not_found(DefinitionKind::MatchingRule, format!("#{}", rule_id.index()))
            })?;

            let uses = self.matching_rule_uses();
            let use_id = uses.get_or_insert(MatchingRuleUse::for_rule(self, rule_id, &rule));
            uses.update(use_id, |mru| mru.push_applies(at_id));
            trace!("{} applies to {}", rule.label(), at.label());
        }
        Ok(())
    }

    /// Rebuild the APPLIES list of every matching rule use from the current
    /// attribute types.
    ///
    /// Existing uses keep their slots; a use no attribute type references any
    /// longer is left with an empty APPLIES list.
    pub fn refresh_matching_rule_uses(&self) -> SchemaResult<()> {
        let types = self.attribute_types();
        let mut applies: Vec<(MatchingRuleId, Vec<AttributeTypeId>)> = Vec::new();
        for at_id in types.ids() {
            let Some(rules) = types.with(at_id, |at| [at.equality(), at.substring(), at.ordering()])
            else {
                continue;
            };
            for rule_id in rules.into_iter().flatten() {
                match applies.iter_mut().find(|(id, _)| *id == rule_id) {
                    Some((_, ats)) => ats.push(at_id),
                    None => applies.push((rule_id, vec![at_id])),
                }
            }
        }

        let uses = self.matching_rule_uses();
        for use_id in uses.ids() {
            let rule = uses.with(use_id, MatchingRuleUse::matching_rule).flatten();
            let ats = rule
                .and_then(|r| applies.iter().position(|(id, _)| *id == r))
                .map(|i| applies.remove(i).1)
                .unwrap_or_default();
            uses.update(use_id, |mru| mru.reset_applies(ats));
        }

        for (rule_id, ats) in applies {
            let rule = self.matching_rules().fetch(rule_id).ok_or_else(|| {
                SchemaError::not_found(DefinitionKind::MatchingRule, format!("#{}", rule_id.index()))
            })?;
            let use_id = uses.get_or_insert(MatchingRuleUse::for_rule(self, rule_id, &rule));
            uses.update(use_id, |mru| mru.reset_applies(ats));
        }
        debug!("Rebuilt {} matching rule uses", uses.len());
        Ok(())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.ldap_syntaxes() == other.ldap_syntaxes()
                && self.matching_rules() == other.matching_rules()
                && self.attribute_types() == other.attribute_types()
                && self.matching_rule_uses() == other.matching_rule_uses()
                && self.object_classes() == other.object_classes()
                && self.content_rules() == other.content_rules()
                && self.name_forms() == other.name_forms()
                && self.structure_rules() == other.structure_rules())
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("ldap_syntaxes", &self.ldap_syntaxes().len())
            .field("matching_rules", &self.matching_rules().len())
            .field("attribute_types", &self.attribute_types().len())
            .field("matching_rule_uses", &self.matching_rule_uses().len())
            .field("object_classes", &self.object_classes().len())
            .field("content_rules", &self.content_rules().len())
            .field("name_forms", &self.name_forms().len())
            .field("structure_rules", &self.structure_rules().len())
            .field("macros", &self.macros().len())
            .finish()
    }
}
