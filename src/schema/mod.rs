//! Schema container, configuration and bundled RFC definitions.
//!
//! This module provides:
//! - [`Schema`]: the shared container of the eight definition collections
//! - [`SchemaOptions`] / [`SchemaBuilder`]: configuration and assembly
//! - [`Macros`]: the alias table used to resolve symbolic OIDs
//! - [`Bootstrap`]: the bundled RFC definition sets

pub mod embedded;
pub mod macros;
pub mod options;
pub mod registry;

#[cfg(test)]
mod tests;

pub use embedded::Bootstrap;
pub use macros::Macros;
pub use options::{SchemaBuilder, SchemaOptions};
pub use registry::{Schema, SchemaRef};
