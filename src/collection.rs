//! Thread-safe arenas holding one kind of definition.
//!
//! A [`Collection`] is an insertion-ordered `Vec` behind a
//! `parking_lot::RwLock`. Positions never move, so the [`DefId`] returned by
//! [`Collection::set`] stays valid for the life of the schema, and
//! [`Collection::replace`] overwrites a slot in place so that every holder of
//! the handle observes the new content.
//!
//! Every method takes the lock only for the duration of the slice access.
//! Lookups resolve macros first and release the macro lock before locking
//! the arena, and no method calls back into another collection while a
//! guard is held.
//!
//! # Example
//!
//! ```rust
//! use ldap_schema::Schema;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = Schema::new()?;
//!     let rules = schema.matching_rules();
//!
//!     let lower = rules.get("caseignorematch").expect("bundled rule");
//!     let upper = rules.get("CASEIGNOREMATCH").expect("bundled rule");
//!     assert_eq!(lower, upper);
//!     assert_eq!(rules.contains("2.5.13.2"), rules.contains("caseIgnoreMatch"));
//!     Ok(())
//! }
//! ```

use crate::definition::{DefId, Definition};
use crate::error::{SchemaError, SchemaResult};
use crate::marshal::{self, DefinitionMap};
use crate::schema::Macros;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered, uniquely-keyed store for one definition kind.
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
    macros: Arc<RwLock<Macros>>,
}

impl<T: Definition> Collection<T> {
    pub(crate) fn new(macros: Arc<RwLock<Macros>>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            macros,
        }
    }

    /// Find a definition by numeric OID, rule ID or name.
    ///
    /// A macro alias is expanded first. Names compare ignoring case.
    pub fn contains(&self, term: &str) -> Option<DefId<T>> {
        let resolved = self.macros.read().resolve(term);
        let term = resolved.as_deref().unwrap_or(term);

        self.items
            .read()
            .iter()
            .position(|d| d.matches(term))
            .map(DefId::new)
    }

    /// Clone of the definition matching `term`.
    pub fn get(&self, term: &str) -> Option<T> {
        let id = self.contains(term)?;
        self.fetch(id)
    }

    /// Clone of the definition behind `id`.
    pub fn fetch(&self, id: DefId<T>) -> Option<T> {
        self.items.read().get(id.index()).cloned()
    }

    /// Run `f` against the definition behind `id` without cloning it.
    ///
    /// `f` runs under the read lock and must not touch this collection.
    pub fn with<R>(&self, id: DefId<T>, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.items.read().get(id.index()).map(f)
    }

    /// Positional access; negative positions count from the end.
    pub fn index(&self, position: isize) -> Option<T> {
        let items = self.items.read();
        let len = items.len() as isize;
        let position = if position < 0 { len + position } else { position };
        if position < 0 || position >= len {
            return None;
        }
        items.get(position as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Append `def`, rejecting a duplicate identifier.
    pub fn set(&self, def: T) -> SchemaResult<DefId<T>> {
        let identifier = def.identifier();
        let mut items = self.items.write();
        if items.iter().any(|d| d.identifier() == identifier) {
            return Err(SchemaError::NotUnique {
                kind: T::KIND,
                id: identifier,
            });
        }
        items.push(def);
        Ok(DefId::new(items.len() - 1))
    }

    /// Overwrite the slot behind `id`.
    pub(crate) fn replace(&self, id: DefId<T>, def: T) -> SchemaResult<()> {
        let mut items = self.items.write();
        match items.get_mut(id.index()) {
            Some(slot) => {
                *slot = def;
                Ok(())
            }
            None => Err(SchemaError::not_found(T::KIND, format!("#{}", id.index()))),
        }
    }

    /// Mutate the slot behind `id` in place.
    pub(crate) fn update<R>(&self, id: DefId<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.items.write().get_mut(id.index()).map(f)
    }

    /// Handle of the definition sharing `def`'s identifier, appending `def`
    /// when there is none. The lookup and the append share one write guard.
    pub(crate) fn get_or_insert(&self, def: T) -> DefId<T> {
        let identifier = def.identifier();
        let mut items = self.items.write();
        if let Some(index) = items.iter().position(|d| d.identifier() == identifier) {
            return DefId::new(index);
        }
        items.push(def);
        DefId::new(items.len() - 1)
    }

    /// Clones of every definition, in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn ids(&self) -> Vec<DefId<T>> {
        (0..self.len()).map(DefId::new).collect()
    }

    /// Largest value of `key` over all definitions.
    pub(crate) fn max_by_key<K: Ord>(&self, key: impl Fn(&T) -> K) -> Option<K> {
        self.items.read().iter().map(key).max()
    }

    /// Definitions whose `X-ORIGIN` extension contains `origin` (ignoring case).
    pub fn x_origin(&self, origin: &str) -> Vec<T> {
        self.items
            .read()
            .iter()
            .filter(|d| {
                d.extensions()
                    .get("X-ORIGIN")
                    .is_some_and(|v| v.iter().any(|o| o.eq_ignore_ascii_case(origin)))
            })
            .cloned()
            .collect()
    }

    /// Identifier to names, in insertion order.
    pub fn inventory(&self) -> Vec<(String, Vec<String>)> {
        self.items
            .read()
            .iter()
            .map(|d| (d.identifier(), d.names().as_slice().to_vec()))
            .collect()
    }

    /// Map projection of every definition.
    pub fn maps(&self) -> SchemaResult<Vec<DefinitionMap>> {
        let snapshot = self.snapshot();
        let mut maps = Vec::with_capacity(snapshot.len());
        for def in &snapshot {
            let schema = def.schema()?;
            maps.push(marshal::project(def, &schema)?);
        }
        Ok(maps)
    }
}

impl<T: Definition> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.snapshot() == other.snapshot()
    }
}

impl<T: Definition> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .finish()
    }
}
