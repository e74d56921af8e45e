//! LDAP schema library for Rust.
//!
//! Provides an in-memory model of the eight RFC 4512 schema definition kinds,
//! a codec between that model and the RFC 4512 textual form, validation of
//! every definition against the schema it lives in, and governance of
//! distinguished names by DIT structure rule chains.
//!
//! # Core Components
//!
//! - [`Schema`] - Shared container of the eight definition collections
//! - [`Collection`] - Thread-safe, insertion-ordered arena for one kind
//! - [`Definition`] - Behaviour shared by every definition kind
//! - [`governance`] - DN tokenizing and structure rule enforcement
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::{Definition, Schema};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = Schema::new()?;
//!
//!     let cn = schema.attribute_types().get("commonName").expect("bundled");
//!     assert_eq!(cn.numeric_oid(), "2.5.4.3");
//!
//!     schema.parse_structure_rule("( 13 NAME 'domainStructureRule' FORM domainNameForm )")?;
//!     schema.govern("domainStructureRule", "dc=example,dc=com", 1)?;
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod definition;
pub mod error;
pub mod governance;
pub mod marshal;
pub mod schema;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use collection::Collection;
pub use definition::{
    AnyDefinition, AttributeType, AttributeTypeId, DefId, Definition, DefinitionKind,
    DitContentRule, DitContentRuleId, DitStructureRule, DitStructureRuleId, LdapSyntax,
    LdapSyntaxId, MatchingRule, MatchingRuleId, MatchingRuleUse, MatchingRuleUseId, NameForm,
    NameFormId, ObjectClass, ObjectClassId, ObjectClassKind, References, Role, SuperRule, Usage,
};
pub use error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
pub use governance::TokenizedDn;
pub use marshal::DefinitionMap;
pub use schema::{Bootstrap, Macros, Schema, SchemaBuilder, SchemaOptions, SchemaRef};
