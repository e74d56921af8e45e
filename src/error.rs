//! Error types for LDAP schema operations.
//!
//! Every fallible operation in this crate returns [`SchemaError`]. Semantic
//! problems with a definition (bad clauses, broken references, naming
//! violations found during governance) are reported as [`ValidationError`] and
//! wrapped by `SchemaError::Validation`.

use crate::definition::DefinitionKind;

/// Main error type for schema operations.
///
/// Covers reference resolution, the text codec, collection admission and
/// configuration-dependent refusals. Semantic failures are carried inside
/// the `Validation` variant.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Semantic validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The definition is not attached to a live schema
    #[error("Receiver instance lacks a Schema reference")]
    NilSchemaRef,

    /// A referenced definition could not be found
    #[error("{kind} not found: {term}")]
    NotFound { kind: DefinitionKind, term: String },

    /// An identifier was neither a numeric OID nor a known macro alias
    #[error("unresolvable alias '{alias}'")]
    UnresolvableAlias { alias: String },

    /// Macro registration failed
    #[error("Invalid macro '{name}': {reason}")]
    InvalidMacro { name: String, reason: String },

    /// The raw definition text could not be tokenized or populated
    #[error("Invalid marshal: {reason}")]
    InvalidMarshal { reason: String },

    /// A clause label is not allowed for this kind of definition
    #[error("Invalid label '{label}' for {kind}")]
    InvalidLabel { kind: DefinitionKind, label: String },

    /// A clause value was malformed
    #[error("Invalid value for '{label}': {reason}")]
    InvalidValue { label: String, reason: String },

    /// Rendering failed or produced nothing
    #[error("Invalid unmarshal: {reason}")]
    InvalidUnmarshal { reason: String },

    /// The identifier is already present in the collection
    #[error("Definition is already defined: {kind}, {id}")]
    NotUnique { kind: DefinitionKind, id: String },

    /// The definition failed the compliance gate of a push
    #[error("Definition failed compliance checks: {kind}, {id}")]
    NonCompliant { kind: DefinitionKind, id: String },

    /// Replace was attempted without the override option
    #[error("Override not permitted for {kind} {id}")]
    OverrideDisabled { kind: DefinitionKind, id: String },

    /// Reindexing was refused because the colliding rules share names
    #[error("name/id conflict; cannot reindex dITStructureRule {id}")]
    ReindexConflict { id: u32 },

    /// No rule ID is left to reindex into
    #[error("rule ID space exhausted while reindexing dITStructureRule {id}")]
    ReindexOverflow { id: u32 },
}

impl SchemaError {
    /// Create a not-found error for the given kind and search term.
    pub fn not_found(kind: DefinitionKind, term: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            term: term.into(),
        }
    }

    /// Create an invalid marshal error.
    pub fn invalid_marshal(reason: impl Into<String>) -> Self {
        Self::InvalidMarshal {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error for a clause label.
    pub fn invalid_value(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Returns the wrapped validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Semantic validation errors for schema definitions.
///
/// These are raised by `validate()` on individual definitions and by DIT
/// structure rule governance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The definition carries no identifying content
    #[error("{kind} is zero")]
    IsZero { kind: DefinitionKind },

    /// A numeric OID is required but was not set
    #[error("Missing numeric OID for {kind}")]
    MissingNumericOid { kind: DefinitionKind },

    /// The numeric OID is malformed
    #[error("Numeric OID is invalid: '{oid}'")]
    InvalidOid { oid: String },

    /// The rule ID is missing or malformed
    #[error("Invalid integer identifier for structure rule: '{value}'")]
    InvalidRuleId { value: String },

    /// A name is not a valid RFC 4512 descriptor
    #[error("Invalid name '{name}'")]
    InvalidNames { name: String },

    /// The description cannot be represented as a qdstring
    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    /// No syntax is reachable, or the syntax conflicts with other clauses
    #[error("Invalid syntax for {definition}: {reason}")]
    InvalidSyntax { definition: String, reason: String },

    /// A matching rule is used in a clause of the wrong category
    #[error("Invalid matching rule for {definition}: {clause} references '{rule}'")]
    InvalidMatchingRule {
        definition: String,
        clause: String,
        rule: String,
    },

    /// An object class has no kind
    #[error("Invalid object class kind for {definition}")]
    InvalidObjectClassKind { definition: String },

    /// A class that must be STRUCTURAL is not
    #[error("Incompatible structural class '{class}' for {definition}")]
    IncompatStructuralClass { definition: String, class: String },

    /// A superior class whose kind the subclass cannot inherit from
    #[error("{definition} cannot inherit from {kind} class '{class}'")]
    IncompatSuperClassKind {
        definition: String,
        class: String,
        kind: String,
    },

    /// A class listed as AUX is not AUXILIARY
    #[error("Class '{class}' is not auxiliary in {definition}")]
    InvalidAuxiliaryClass { definition: String, class: String },

    /// The name form of a structure rule is missing or unusable
    #[error("Invalid name form for {definition}: {reason}")]
    InvalidNameForm { definition: String, reason: String },

    /// A mandatory clause is absent
    #[error("{definition} is missing required clause {clause}")]
    MissingRequiredClause { definition: String, clause: String },

    /// A handle does not resolve in the owning schema
    #[error("{definition} has a dangling {clause} reference")]
    DanglingReference { definition: String, clause: String },

    /// A SUP chain loops back on itself
    #[error("{definition} has a cyclic {clause} chain")]
    CyclicReference { definition: String, clause: String },

    /// The same attribute appears in clauses that exclude one another
    #[error("{definition} lists '{attribute}' in both {first} and {second}")]
    ConflictingClauses {
        definition: String,
        attribute: String,
        first: String,
        second: String,
    },

    /// No RDN attribute matched the name form MUST clause
    #[error("Naming violation; required attribute type not used in RDN '{rdn}'")]
    NamingViolationMissingMust { rdn: String },

    /// An RDN attribute is in neither MUST nor MAY of the name form
    #[error("Naming violation; unsanctioned attribute type '{attribute}' used")]
    NamingViolationUnsanctioned { attribute: String },

    /// An RDN attribute is not allowed by the named object class
    #[error("Naming violation; attribute type '{attribute}' not allowed by class '{class}'")]
    NamingViolationBadClassAttr { attribute: String, class: String },

    /// A superior rule named in the chain does not exist
    #[error("Naming violation; superior structure rule {rule} not found")]
    NamingViolationChildlessSuperior { rule: String },

    /// The DN could not be tokenized with the given flattening depth
    #[error("Invalid DN or flattened integer: '{dn}' (flat {flat})")]
    InvalidDnOrFlatInt { dn: String, flat: isize },
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
