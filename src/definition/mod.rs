//! Definition types for the eight RFC 4512 schema element kinds.
//!
//! Every definition lives in an arena owned by a [`Schema`](crate::Schema)
//! and refers to other definitions through typed [`DefId`] handles rather
//! than pointers. A definition also carries an [`Attachments`] record: a
//! weak back-reference to its schema, an opaque user data slot and an
//! optional custom renderer.
//!
//! The [`Definition`] trait is the per-kind contract used by collections,
//! the marshal engine and the validator. [`AnyDefinition`] is the closed sum
//! type used wherever the kind is only known at runtime.

mod attribute_type;
mod content_rule;
mod ldap_syntax;
mod matching_rule;
mod matching_rule_use;
mod name_form;
mod object_class;
mod references;
mod structure_rule;

pub use attribute_type::{AttributeType, Usage};
pub use content_rule::DitContentRule;
pub use ldap_syntax::LdapSyntax;
pub use matching_rule::MatchingRule;
pub use matching_rule_use::MatchingRuleUse;
pub use name_form::NameForm;
pub use object_class::{ObjectClass, ObjectClassKind};
pub use references::{References, Role};
pub use structure_rule::{DitStructureRule, SuperRule};

use crate::collection::Collection;
use crate::error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
use crate::marshal::{Clause, ClauseWriter, DefinitionMap};
use crate::schema::{Schema, SchemaRef};
use crate::value_objects::{Extensions, NameList, is_numeric_oid, validate_description};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

/// The eight kinds of schema definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefinitionKind {
    #[serde(rename = "ldapSyntax")]
    LdapSyntax,
    #[serde(rename = "matchingRule")]
    MatchingRule,
    #[serde(rename = "attributeType")]
    AttributeType,
    #[serde(rename = "matchingRuleUse")]
    MatchingRuleUse,
    #[serde(rename = "objectClass")]
    ObjectClass,
    #[serde(rename = "dITContentRule")]
    DitContentRule,
    #[serde(rename = "nameForm")]
    NameForm,
    #[serde(rename = "dITStructureRule")]
    DitStructureRule,
}

impl DefinitionKind {
    /// All kinds in dependency order.
    pub const ALL: [DefinitionKind; 8] = [
        DefinitionKind::LdapSyntax,
        DefinitionKind::MatchingRule,
        DefinitionKind::AttributeType,
        DefinitionKind::MatchingRuleUse,
        DefinitionKind::ObjectClass,
        DefinitionKind::DitContentRule,
        DefinitionKind::NameForm,
        DefinitionKind::DitStructureRule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::LdapSyntax => "ldapSyntax",
            DefinitionKind::MatchingRule => "matchingRule",
            DefinitionKind::AttributeType => "attributeType",
            DefinitionKind::MatchingRuleUse => "matchingRuleUse",
            DefinitionKind::ObjectClass => "objectClass",
            DefinitionKind::DitContentRule => "dITContentRule",
            DefinitionKind::NameForm => "nameForm",
            DefinitionKind::DitStructureRule => "dITStructureRule",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable handle to a definition inside its schema's arena.
///
/// Handles are only meaningful for the schema that issued them.
pub struct DefId<T> {
    index: usize,
    _kind: PhantomData<fn() -> T>,
}

impl<T> DefId<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _kind: PhantomData,
        }
    }

    /// Position of the definition within its collection.
    pub fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for DefId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DefId<T> {}

impl<T> PartialEq for DefId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for DefId<T> {}

impl<T> Hash for DefId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for DefId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefId").field(&self.index).finish()
    }
}

pub type LdapSyntaxId = DefId<LdapSyntax>;
pub type MatchingRuleId = DefId<MatchingRule>;
pub type AttributeTypeId = DefId<AttributeType>;
pub type MatchingRuleUseId = DefId<MatchingRuleUse>;
pub type ObjectClassId = DefId<ObjectClass>;
pub type DitContentRuleId = DefId<DitContentRule>;
pub type NameFormId = DefId<NameForm>;
pub type DitStructureRuleId = DefId<DitStructureRule>;

/// Custom render function assigned to a single definition.
pub type Stringer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Non-schema state carried by every definition.
pub struct Attachments<T> {
    pub(crate) schema: SchemaRef,
    data: Option<Arc<dyn Any + Send + Sync>>,
    stringer: Option<Stringer<T>>,
}

impl<T> Attachments<T> {
    pub(crate) fn stringer(&self) -> Option<&Stringer<T>> {
        self.stringer.as_ref()
    }
}

impl<T> Default for Attachments<T> {
    fn default() -> Self {
        Self {
            schema: SchemaRef::default(),
            data: None,
            stringer: None,
        }
    }
}

impl<T> Clone for Attachments<T> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            data: self.data.clone(),
            stringer: self.stringer.clone(),
        }
    }
}

impl<T> fmt::Debug for Attachments<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachments")
            .field("schema", &self.schema.is_live())
            .field("data", &self.data.is_some())
            .field("stringer", &self.stringer.is_some())
            .finish()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Behaviour shared by all eight definition kinds.
///
/// The `*_in` methods take the owning schema explicitly; the unsuffixed
/// variants resolve it through the definition's back-reference and fail
/// with [`SchemaError::NilSchemaRef`] when it is gone.
pub trait Definition:
    sealed::Sealed + Clone + Default + fmt::Debug + PartialEq + Send + Sync + 'static
{
    const KIND: DefinitionKind;

    /// Numeric OID, or the decimal rule ID for structure rules.
    fn identifier(&self) -> String;

    fn names(&self) -> &NameList;

    fn description(&self) -> Option<&str>;

    fn is_obsolete(&self) -> bool;

    fn extensions(&self) -> &Extensions;

    /// True when nothing identifying has been assigned yet.
    fn is_zero(&self) -> bool;

    /// Hard validation against the owning schema.
    fn validate_in(&self, schema: &Schema) -> SchemaResult<()>;

    /// Soft validation used to gate collection admission.
    fn compliant_in(&self, schema: &Schema) -> bool {
        self.validate_in(schema).is_ok()
    }

    #[doc(hidden)]
    fn attachments(&self) -> &Attachments<Self>;

    #[doc(hidden)]
    fn attachments_mut(&mut self) -> &mut Attachments<Self>;

    #[doc(hidden)]
    fn collection(schema: &Schema) -> &Collection<Self>;

    #[doc(hidden)]
    fn extensions_mut(&mut self) -> &mut Extensions;

    #[doc(hidden)]
    fn names_mut(&mut self) -> Option<&mut NameList>;

    #[doc(hidden)]
    fn description_mut(&mut self) -> &mut Option<String>;

    #[doc(hidden)]
    fn mark_obsolete(&mut self) -> bool;

    /// Populate the identifier from the leading token of a raw definition.
    #[doc(hidden)]
    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()>;

    /// Apply one kind-specific clause during marshal.
    #[doc(hidden)]
    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()>;

    /// Write the clauses that follow the identifier in canonical order.
    #[doc(hidden)]
    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()>;

    /// Add the kind-specific keys of the map projection.
    #[doc(hidden)]
    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()>;

    /// Called when a push collides with an existing identifier.
    #[doc(hidden)]
    fn on_collision(&mut self, _schema: &Schema, _existing: &Self) -> SchemaResult<()> {
        Err(SchemaError::NotUnique {
            kind: Self::KIND,
            id: self.identifier(),
        })
    }

    /// Called after the definition has been admitted.
    #[doc(hidden)]
    fn after_push(_schema: &Schema, _id: DefId<Self>) -> SchemaResult<()> {
        Ok(())
    }

    #[doc(hidden)]
    fn into_any(self) -> AnyDefinition;

    #[doc(hidden)]
    fn from_any(def: AnyDefinition) -> Option<Self>;

    /// Create a blank definition bound to `schema`.
    fn new_in(schema: &Schema) -> Self {
        let mut def = Self::default();
        def.attachments_mut().schema = schema.downgrade();
        def
    }

    /// First name if any, otherwise the identifier.
    fn label(&self) -> String {
        match self.names().first() {
            Some(name) => name.to_string(),
            None => self.identifier(),
        }
    }

    /// Exact identifier match or case-insensitive name match.
    fn matches(&self, term: &str) -> bool {
        self.identifier() == term || self.names().contains(term)
    }

    /// The owning schema, if it is still alive.
    fn schema(&self) -> SchemaResult<Schema> {
        self.attachments()
            .schema
            .upgrade()
            .ok_or(SchemaError::NilSchemaRef)
    }

    fn validate(&self) -> SchemaResult<()> {
        self.validate_in(&self.schema()?)
    }

    fn compliant(&self) -> bool {
        self.schema().map(|s| self.compliant_in(&s)).unwrap_or(false)
    }

    /// Render through the custom stringer or the canonical renderer.
    fn unmarshal(&self) -> SchemaResult<String> {
        crate::marshal::render(self, &self.schema()?)
    }

    /// Denormalized string-list projection.
    fn map(&self) -> SchemaResult<DefinitionMap> {
        crate::marshal::project(self, &self.schema()?)
    }

    /// Attach an opaque user value.
    fn set_data<V: Any + Send + Sync>(&mut self, value: V) -> &mut Self {
        self.attachments_mut().data = Some(Arc::new(value));
        self
    }

    fn data(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.attachments().data.as_deref()
    }

    /// Replace canonical rendering with `f`.
    fn set_stringer<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Self) -> String + Send + Sync + 'static,
    {
        self.attachments_mut().stringer = Some(Arc::new(f));
        self
    }

    fn clear_stringer(&mut self) -> &mut Self {
        self.attachments_mut().stringer = None;
        self
    }
}

/// Checks shared by every OID-identified definition.
pub(crate) fn validate_header(
    kind: DefinitionKind,
    oid: &str,
    names: &NameList,
    desc: Option<&str>,
    extensions: &Extensions,
) -> ValidationResult<()> {
    if oid.is_empty() {
        return Err(ValidationError::MissingNumericOid { kind });
    }
    if !is_numeric_oid(oid) {
        return Err(ValidationError::InvalidOid {
            oid: oid.to_string(),
        });
    }
    names.validate()?;
    if let Some(desc) = desc {
        validate_description(desc)?;
    }
    if let Some(key) = extensions.invalid_key() {
        return Err(ValidationError::InvalidNames {
            name: key.to_string(),
        });
    }
    Ok(())
}

/// Resolve `term` to a handle in `T`'s collection.
pub(crate) fn resolve<T: Definition>(schema: &Schema, term: &str) -> SchemaResult<DefId<T>> {
    T::collection(schema)
        .contains(term)
        .ok_or_else(|| SchemaError::not_found(T::KIND, term))
}

/// Fetch a handle or report it as dangling.
pub(crate) fn fetch<T: Definition>(
    schema: &Schema,
    id: DefId<T>,
    owner: &str,
    clause: &str,
) -> ValidationResult<T> {
    T::collection(schema)
        .fetch(id)
        .ok_or_else(|| ValidationError::DanglingReference {
            definition: owner.to_string(),
            clause: clause.to_string(),
        })
}

/// Display name of a referenced definition: first name, else identifier.
pub(crate) fn display_name<T: Definition>(schema: &Schema, id: DefId<T>) -> SchemaResult<String> {
    T::collection(schema)
        .with(id, |d| d.label())
        .ok_or_else(|| SchemaError::not_found(T::KIND, format!("#{}", id.index())))
}

/// Identifier of a referenced definition.
pub(crate) fn identifier_of<T: Definition>(schema: &Schema, id: DefId<T>) -> SchemaResult<String> {
    T::collection(schema)
        .with(id, |d| d.identifier())
        .ok_or_else(|| SchemaError::not_found(T::KIND, format!("#{}", id.index())))
}

/// Display names of every handle in `refs`, in order.
pub(crate) fn display_names<T: Definition>(
    schema: &Schema,
    refs: &References<T>,
) -> SchemaResult<Vec<String>> {
    refs.iter().map(|id| display_name(schema, id)).collect()
}

/// Resolve every value of a reference clause into `refs`.
pub(crate) fn resolve_into<T: Definition>(
    schema: &Schema,
    refs: &mut References<T>,
    values: &[String],
) -> SchemaResult<()> {
    for term in values {
        refs.push(resolve::<T>(schema, term)?);
    }
    Ok(())
}

/// Check that every handle in `refs` still resolves.
pub(crate) fn check_references<T: Definition>(
    schema: &Schema,
    refs: &References<T>,
    owner: &str,
) -> ValidationResult<()> {
    let collection = T::collection(schema);
    match refs.iter().find(|id| collection.with(*id, |_| ()).is_none()) {
        Some(_) => Err(ValidationError::DanglingReference {
            definition: owner.to_string(),
            clause: refs.role().label().to_string(),
        }),
        None => Ok(()),
    }
}

/// Implements the header accessors and fluent setters shared by kinds that
/// carry NAME, DESC and OBSOLETE.
macro_rules! impl_header {
    ($ty:ty) => {
        impl $ty {
            /// Append names; duplicates (ignoring case) are skipped.
            pub fn set_name<I, S>(&mut self, names: I) -> &mut Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                for name in names {
                    self.names.push(name);
                }
                self
            }

            /// Set the description, stripping one layer of surrounding quotes.
            pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
                let desc: String = desc.into();
                let trimmed = desc
                    .strip_prefix('\'')
                    .and_then(|d| d.strip_suffix('\''))
                    .unwrap_or(&desc);
                self.desc = Some(trimmed.to_string());
                self
            }

            /// Mark the definition obsolete. There is no way back.
            pub fn set_obsolete(&mut self) -> &mut Self {
                self.obsolete = true;
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
        }
    };
}

pub(crate) use impl_header;

/// Implements the boilerplate `Definition` methods for a kind with the
/// standard header fields.
macro_rules! header_methods {
    () => {
        fn names(&self) -> &crate::value_objects::NameList {
            &self.names
        }

        fn description(&self) -> Option<&str> {
            self.desc.as_deref()
        }

        fn is_obsolete(&self) -> bool {
            self.obsolete
        }

        fn extensions(&self) -> &crate::value_objects::Extensions {
            &self.extensions
        }

        fn attachments(&self) -> &crate::definition::Attachments<Self> {
            &self.attachments
        }

        fn attachments_mut(&mut self) -> &mut crate::definition::Attachments<Self> {
            &mut self.attachments
        }

        fn extensions_mut(&mut self) -> &mut crate::value_objects::Extensions {
            &mut self.extensions
        }

        fn names_mut(&mut self) -> Option<&mut crate::value_objects::NameList> {
            Some(&mut self.names)
        }

        fn description_mut(&mut self) -> &mut Option<String> {
            &mut self.desc
        }

        fn mark_obsolete(&mut self) -> bool {
            self.obsolete = true;
            true
        }
    };
}

pub(crate) use header_methods;

/// Closed sum over the eight definition kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDefinition {
    LdapSyntax(LdapSyntax),
    MatchingRule(MatchingRule),
    AttributeType(AttributeType),
    MatchingRuleUse(MatchingRuleUse),
    ObjectClass(ObjectClass),
    DitContentRule(DitContentRule),
    NameForm(NameForm),
    DitStructureRule(DitStructureRule),
}

macro_rules! dispatch {
    ($value:expr, $def:ident => $body:expr) => {
        match $value {
            AnyDefinition::LdapSyntax($def) => $body,
            AnyDefinition::MatchingRule($def) => $body,
            AnyDefinition::AttributeType($def) => $body,
            AnyDefinition::MatchingRuleUse($def) => $body,
            AnyDefinition::ObjectClass($def) => $body,
            AnyDefinition::DitContentRule($def) => $body,
            AnyDefinition::NameForm($def) => $body,
            AnyDefinition::DitStructureRule($def) => $body,
        }
    };
}

impl AnyDefinition {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            AnyDefinition::LdapSyntax(_) => DefinitionKind::LdapSyntax,
            AnyDefinition::MatchingRule(_) => DefinitionKind::MatchingRule,
            AnyDefinition::AttributeType(_) => DefinitionKind::AttributeType,
            AnyDefinition::MatchingRuleUse(_) => DefinitionKind::MatchingRuleUse,
            AnyDefinition::ObjectClass(_) => DefinitionKind::ObjectClass,
            AnyDefinition::DitContentRule(_) => DefinitionKind::DitContentRule,
            AnyDefinition::NameForm(_) => DefinitionKind::NameForm,
            AnyDefinition::DitStructureRule(_) => DefinitionKind::DitStructureRule,
        }
    }

    pub fn identifier(&self) -> String {
        dispatch!(self, d => d.identifier())
    }

    pub fn names(&self) -> &NameList {
        dispatch!(self, d => d.names())
    }

    pub fn validate_in(&self, schema: &Schema) -> SchemaResult<()> {
        dispatch!(self, d => d.validate_in(schema))
    }

    pub fn compliant_in(&self, schema: &Schema) -> bool {
        dispatch!(self, d => d.compliant_in(schema))
    }

    pub fn render_in(&self, schema: &Schema) -> SchemaResult<String> {
        dispatch!(self, d => crate::marshal::render(d, schema))
    }

    pub fn map_in(&self, schema: &Schema) -> SchemaResult<DefinitionMap> {
        dispatch!(self, d => crate::marshal::project(d, schema))
    }

    /// Convert into the concrete kind `T`, if it matches.
    pub fn downcast<T: Definition>(self) -> Option<T> {
        T::from_any(self)
    }
}

/// Implements the sealing, `From` and the any-conversions for a kind.
macro_rules! impl_any {
    ($($variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $variant {}

            impl From<$variant> for AnyDefinition {
                fn from(def: $variant) -> Self {
                    AnyDefinition::$variant(def)
                }
            }

            impl fmt::Display for $variant {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.unmarshal() {
                        Ok(text) => f.write_str(&text),
                        Err(_) => Ok(()),
                    }
                }
            }
        )*
    };
}

impl_any!(
    LdapSyntax,
    MatchingRule,
    AttributeType,
    MatchingRuleUse,
    ObjectClass,
    DitContentRule,
    NameForm,
    DitStructureRule,
);

/// Implements `into_any`/`from_any` inside a `Definition` impl.
macro_rules! any_methods {
    ($variant:ident) => {
        fn into_any(self) -> crate::definition::AnyDefinition {
            crate::definition::AnyDefinition::$variant(self)
        }

        fn from_any(def: crate::definition::AnyDefinition) -> Option<Self> {
            match def {
                crate::definition::AnyDefinition::$variant(d) => Some(d),
                _ => None,
            }
        }
    };
}

pub(crate) use any_methods;
