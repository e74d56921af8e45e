//! Role-tagged reference lists.

use super::DefId;
use std::fmt;

/// What a list of references means to the definition that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Required,
    Permitted,
    Prohibited,
    Applicable,
    Superior,
    Auxiliary,
}

impl Role {
    /// Clause label used when rendering the list.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Required => "MUST",
            Role::Permitted => "MAY",
            Role::Prohibited => "NOT",
            Role::Applicable => "APPLIES",
            Role::Superior => "SUP",
            Role::Auxiliary => "AUX",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of handles tagged with a [`Role`].
pub struct References<T> {
    role: Role,
    items: Vec<DefId<T>>,
}

impl<T> References<T> {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            items: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Append `id` unless already present.
    pub fn push(&mut self, id: DefId<T>) {
        if !self.items.contains(&id) {
            self.items.push(id);
        }
    }

    pub fn contains(&self, id: DefId<T>) -> bool {
        self.items.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DefId<T>> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[DefId<T>] {
        &self.items
    }
}

impl<T> Clone for References<T> {
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            items: self.items.clone(),
        }
    }
}

impl<T> PartialEq for References<T> {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.items == other.items
    }
}

impl<T> fmt::Debug for References<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.role)?;
        f.debug_list()
            .entries(self.items.iter().map(|id| id.index()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::AttributeType;

    #[test]
    fn test_push_dedupes_and_keeps_order() {
        let mut refs: References<AttributeType> = References::new(Role::Required);
        refs.push(DefId::new(3));
        refs.push(DefId::new(1));
        refs.push(DefId::new(3));
        assert_eq!(refs.len(), 2);
        assert_eq!(refs.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(refs.role().label(), "MUST");
    }
}
