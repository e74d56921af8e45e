//! Value objects for RFC 4512 primitives.
//!
//! These types wrap the lexical building blocks shared by all eight
//! definition kinds: numeric OIDs, descriptors (names), quoted description
//! strings and the ordered `X-` extension store. Each enforces its own
//! validity rules so that definitions can delegate to them.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use ldap_schema::value_objects::{NumericOid, is_descriptor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let oid = NumericOid::new("2.5.4.3")?;
//!     assert_eq!(oid.arcs().count(), 4);
//!     assert!(is_descriptor("commonName"));
//!     Ok(())
//! }
//! ```
mod descriptor;
mod extensions;
mod numeric_oid;
mod qdstring;

pub use descriptor::{NameList, is_descriptor};
pub use extensions::{Extensions, is_extension_key};
pub use numeric_oid::{NumericOid, is_numeric_oid};
pub use qdstring::{escape_qdstring, unescape_qdstring, validate_description};
