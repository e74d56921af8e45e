//! Schema configuration and the builder used to assemble a [`Schema`].
//!
//! Options are plain flags that change how later operations behave; they
//! never rewrite definitions that are already stored.

use super::Schema;
use super::embedded::Bootstrap;
use crate::error::SchemaResult;
use serde::{Deserialize, Serialize};

/// Behavioural flags for a [`Schema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaOptions {
    /// Render each clause on its own indented line.
    pub hanging_indents: bool,

    /// Sort extension labels while marshalling.
    pub sort_extensions: bool,

    /// Sort multi-valued reference clauses (SUP, MUST, MAY, NOT, AUX,
    /// APPLIES) while marshalling.
    pub sort_lists: bool,

    /// Permit `Schema::replace` to overwrite an existing definition.
    pub allow_override: bool,

    /// Renumber a colliding DIT structure rule on push instead of
    /// rejecting it.
    pub allow_reindexed_structure_rules: bool,
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON document; absent keys default to false.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_hanging_indents(mut self, enabled: bool) -> Self {
        self.hanging_indents = enabled;
        self
    }

    pub fn with_sort_extensions(mut self, enabled: bool) -> Self {
        self.sort_extensions = enabled;
        self
    }

    pub fn with_sort_lists(mut self, enabled: bool) -> Self {
        self.sort_lists = enabled;
        self
    }

    pub fn with_allow_override(mut self, enabled: bool) -> Self {
        self.allow_override = enabled;
        self
    }

    pub fn with_allow_reindexed_structure_rules(mut self, enabled: bool) -> Self {
        self.allow_reindexed_structure_rules = enabled;
        self
    }
}

/// Builder for configuring and creating [`Schema`] instances.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::{Bootstrap, SchemaBuilder, SchemaOptions};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let schema = SchemaBuilder::new()
///         .with_bootstrap(Bootstrap::Basic)
///         .with_options(SchemaOptions::new().with_allow_override(true))
///         .with_macro("nisSchema", "1.3.6.1.1.1")
///         .build()?;
///
///     assert!(schema.attribute_types().is_empty());
///     assert!(!schema.matching_rules().is_empty());
///     assert_eq!(schema.get_macro("NISSCHEMA").as_deref(), Some("1.3.6.1.1.1"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    options: SchemaOptions,
    bootstrap: Bootstrap,
    macros: Vec<(String, String)>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Start with default options and the full bootstrap set.
    pub fn new() -> Self {
        Self {
            options: SchemaOptions::default(),
            bootstrap: Bootstrap::Full,
            macros: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_bootstrap(mut self, bootstrap: Bootstrap) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Register a macro before any definition is loaded.
    pub fn with_macro(mut self, name: impl Into<String>, oid: impl Into<String>) -> Self {
        self.macros.push((name.into(), oid.into()));
        self
    }

    /// Build the schema, registering macros and then loading bootstrap data.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if a macro is invalid or a bundled definition
    /// fails to marshal.
    pub fn build(self) -> SchemaResult<Schema> {
        let schema = Schema::with_options(self.options);
        for (name, oid) in self.macros {
            schema.set_macro(name, oid)?;
        }
        self.bootstrap.load(&schema)?;
        Ok(schema)
    }
}
