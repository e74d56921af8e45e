//! Object class definitions (RFC 4512 section 4.1.1).

use super::{
    AttributeType, AttributeTypeId, Attachments, Definition, DefinitionKind, ObjectClassId,
    References, Role, any_methods, check_references, display_names, header_methods, impl_header,
    resolve_into, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError, ValidationResult};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};
use std::collections::HashSet;
use std::fmt;

/// The kind of an object class. There is no default: a class without a
/// kind fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClassKind {
    Abstract,
    Structural,
    Auxiliary,
}

impl ObjectClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectClassKind::Abstract => "ABSTRACT",
            ObjectClassKind::Structural => "STRUCTURAL",
            ObjectClassKind::Auxiliary => "AUXILIARY",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "ABSTRACT" => Some(ObjectClassKind::Abstract),
            "STRUCTURAL" => Some(ObjectClassKind::Structural),
            "AUXILIARY" => Some(ObjectClassKind::Auxiliary),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object class with its superclasses and attribute lists.
#[derive(Debug, Clone)]
pub struct ObjectClass {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    kind: Option<ObjectClassKind>,
    super_classes: References<ObjectClass>,
    must: References<AttributeType>,
    may: References<AttributeType>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl Default for ObjectClass {
    fn default() -> Self {
        Self {
            oid: String::new(),
            names: NameList::new(),
            desc: None,
            obsolete: false,
            kind: None,
            super_classes: References::new(Role::Superior),
            must: References::new(Role::Required),
            may: References::new(Role::Permitted),
            extensions: Extensions::new(),
            attachments: Attachments::default(),
        }
    }
}

impl_header!(ObjectClass);

impl ObjectClass {
    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    pub fn set_numeric_oid(&mut self, oid: impl Into<String>) -> &mut Self {
        self.oid = oid.into();
        self
    }

    pub fn kind(&self) -> Option<ObjectClassKind> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ObjectClassKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_structural(&self) -> bool {
        self.kind == Some(ObjectClassKind::Structural)
    }

    pub fn is_auxiliary(&self) -> bool {
        self.kind == Some(ObjectClassKind::Auxiliary)
    }

    pub fn super_classes(&self) -> &References<ObjectClass> {
        &self.super_classes
    }

    pub fn must(&self) -> &References<AttributeType> {
        &self.must
    }

    pub fn may(&self) -> &References<AttributeType> {
        &self.may
    }

    pub fn push_super_class(&mut self, id: ObjectClassId) -> &mut Self {
        self.super_classes.push(id);
        self
    }

    pub fn push_must(&mut self, id: AttributeTypeId) -> &mut Self {
        self.must.push(id);
        self
    }

    pub fn push_may(&mut self, id: AttributeTypeId) -> &mut Self {
        self.may.push(id);
        self
    }

    /// Every superclass reachable from this class, nearest first. Each
    /// class appears once even under diamond inheritance or a cycle.
    pub fn ancestors_in(&self, schema: &Schema) -> Vec<ObjectClassId> {
        let classes = schema.object_classes();
        let mut seen: HashSet<ObjectClassId> = HashSet::new();
        let mut order = Vec::new();
        let mut queue: Vec<ObjectClassId> = self.super_classes.iter().collect();
        let mut cursor = 0;

        while let Some(&id) = queue.get(cursor) {
            cursor += 1;
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            if let Some(parents) = classes.with(id, |oc| oc.super_classes.as_slice().to_vec()) {
                queue.extend(parents);
            }
        }
        order
    }

    /// MUST attributes of this class and all of its superclasses.
    pub fn all_must_in(&self, schema: &Schema) -> Vec<AttributeTypeId> {
        self.gather_in(schema, |oc| &oc.must)
    }

    /// MAY attributes of this class and all of its superclasses.
    pub fn all_may_in(&self, schema: &Schema) -> Vec<AttributeTypeId> {
        self.gather_in(schema, |oc| &oc.may)
    }

    pub fn all_must(&self) -> SchemaResult<Vec<AttributeTypeId>> {
        Ok(self.all_must_in(&self.schema()?))
    }

    pub fn all_may(&self) -> SchemaResult<Vec<AttributeTypeId>> {
        Ok(self.all_may_in(&self.schema()?))
    }

    /// True if `at` is in the own or inherited MUST or MAY lists.
    pub fn permits_in(&self, schema: &Schema, at: AttributeTypeId) -> bool {
        self.all_must_in(schema).contains(&at) || self.all_may_in(schema).contains(&at)
    }

    pub fn is_subclass_of_in(&self, schema: &Schema, other: ObjectClassId) -> bool {
        self.ancestors_in(schema).contains(&other)
    }

    /// True if this class appears among `child`'s ancestors.
    pub fn is_superclass_of_in(&self, schema: &Schema, child: &ObjectClass) -> bool {
        match schema.object_classes().contains(&self.oid) {
            Some(id) => child.is_subclass_of_in(schema, id),
            None => false,
        }
    }

    fn gather_in(
        &self,
        schema: &Schema,
        pick: impl Fn(&ObjectClass) -> &References<AttributeType>,
    ) -> Vec<AttributeTypeId> {
        let mut out: Vec<AttributeTypeId> = pick(self).iter().collect();
        let classes = schema.object_classes();
        for id in self.ancestors_in(schema) {
            if let Some(inherited) = classes.with(id, |oc| pick(oc).as_slice().to_vec()) {
                for at in inherited {
                    if !out.contains(&at) {
                        out.push(at);
                    }
                }
            }
        }
        out
    }

    /// Abstract classes inherit only from abstract ones; structural and
    /// auxiliary classes never inherit from each other.
    fn check_superclass_kinds(&self, schema: &Schema) -> ValidationResult<()> {
        let Some(kind) = self.kind else {
            return Ok(());
        };
        for id in self.super_classes.iter() {
            let Some((parent, label)) = schema
                .object_classes()
                .with(id, |oc| (oc.kind, oc.label()))
            else {
                continue;
            };
            let fits = match (kind, parent) {
                (_, None) => true,
                (_, Some(ObjectClassKind::Abstract)) => true,
                (ObjectClassKind::Abstract, Some(_)) => false,
                (ObjectClassKind::Structural, Some(p)) => p == ObjectClassKind::Structural,
                (ObjectClassKind::Auxiliary, Some(p)) => p == ObjectClassKind::Auxiliary,
            };
            if !fits {
                return Err(ValidationError::IncompatSuperClassKind {
                    definition: self.label(),
                    class: label,
                    kind: parent.map(|p| p.as_str()).unwrap_or_default().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fails if a SUP path leads back onto itself.
    fn check_superclass_cycle(&self, schema: &Schema) -> ValidationResult<()> {
        fn visit(
            schema: &Schema,
            id: ObjectClassId,
            path: &mut Vec<ObjectClassId>,
            done: &mut HashSet<ObjectClassId>,
        ) -> bool {
            if path.contains(&id) {
                return false;
            }
            if done.contains(&id) {
                return true;
            }
            path.push(id);
            let parents = schema
                .object_classes()
                .with(id, |oc| oc.super_classes.as_slice().to_vec())
                .unwrap_or_default();
            let acyclic = parents.into_iter().all(|p| visit(schema, p, path, done));
            path.pop();
            done.insert(id);
            acyclic
        }

        let mut done = HashSet::new();
        let mut path = Vec::new();
        let acyclic = self
            .super_classes
            .iter()
            .all(|id| visit(schema, id, &mut path, &mut done));
        if acyclic {
            Ok(())
        } else {
            Err(ValidationError::CyclicReference {
                definition: self.label(),
                clause: "SUP".to_string(),
            })
        }
    }
}

impl PartialEq for ObjectClass {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.kind == other.kind
            && self.super_classes == other.super_classes
            && self.must == other.must
            && self.may == other.may
            && self.extensions == other.extensions
    }
}

impl Definition for ObjectClass {
    const KIND: DefinitionKind = DefinitionKind::ObjectClass;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.names.is_empty() && self.kind.is_none()
    }

    fn validate_in(&self, schema: &Schema) -> SchemaResult<()> {
        if self.is_zero() {
            return Err(ValidationError::IsZero { kind: Self::KIND }.into());
        }
        validate_header(
            Self::KIND,
            &self.oid,
            &self.names,
            self.desc.as_deref(),
            &self.extensions,
        )?;
        if self.kind.is_none() {
            return Err(ValidationError::InvalidObjectClassKind {
                definition: self.label(),
            }
            .into());
        }

        let label = self.label();
        check_references(schema, &self.super_classes, &label)?;
        check_references(schema, &self.must, &label)?;
        check_references(schema, &self.may, &label)?;
        self.check_superclass_cycle(schema)?;
        self.check_superclass_kinds(schema)?;
        Ok(())
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.object_classes()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        self.oid = marshal::resolve_numeric_oid(schema, token)?;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        let label = clause.label.as_str();
        if let Some(kind) = ObjectClassKind::from_label(label) {
            self.kind = Some(kind);
            return Ok(());
        }
        match label {
            "SUP" => resolve_into(schema, &mut self.super_classes, &clause.values),
            "MUST" => resolve_into(schema, &mut self.must, &clause.values),
            "MAY" => resolve_into(schema, &mut self.may, &clause.values),
            _ => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let sup = display_names(schema, &self.super_classes)?;
        let must = display_names(schema, &self.must)?;
        let may = display_names(schema, &self.may)?;

        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .oids("SUP", &sup);
        if let Some(kind) = self.kind {
            out.flag(kind.as_str(), true);
        }
        out.oids("MUST", &must)
            .oids("MAY", &may)
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        for refs in [&self.must, &self.may] {
            if !refs.is_empty() {
                map.insert(refs.role().label().to_string(), display_names(schema, refs)?);
            }
        }
        if !self.super_classes.is_empty() {
            map.insert("SUP".to_string(), display_names(schema, &self.super_classes)?);
        }
        if let Some(kind) = self.kind {
            map.insert("KIND".to_string(), vec![kind.to_string()]);
        }
        Ok(())
    }

    any_methods!(ObjectClass);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new().expect("Failed to create schema")
    }

    #[test]
    fn test_object_class_without_kind_is_not_compliant() {
        let schema = schema();
        let mut oc = schema.new_object_class();
        oc.set_numeric_oid("1.3.6.1.4.1.56521.999.40")
            .set_name(["kindless"]);
        assert!(!oc.compliant());
        assert!(matches!(
            oc.validate().unwrap_err().as_validation(),
            Some(ValidationError::InvalidObjectClassKind { .. })
        ));

        oc.set_kind(ObjectClassKind::Auxiliary);
        assert!(oc.compliant());
    }

    #[test]
    fn test_inherited_attributes() {
        let schema = schema();
        let org_person = schema.object_classes().get("organizationalPerson").unwrap();
        let types = schema.attribute_types();

        let must = org_person.all_must().unwrap();
        for name in ["sn", "cn", "objectClass"] {
            assert!(must.contains(&types.contains(name).unwrap()), "missing {name}");
        }
        let may = org_person.all_may().unwrap();
        assert!(may.contains(&types.contains("title").unwrap()));
        assert!(may.contains(&types.contains("userPassword").unwrap()));

        assert!(org_person.permits_in(&schema, types.contains("ou").unwrap()));
        assert!(!org_person.permits_in(&schema, types.contains("dc").unwrap()));

        let person = schema.object_classes().get("person").unwrap();
        assert!(person.is_superclass_of_in(&schema, &org_person));
        assert!(!org_person.is_superclass_of_in(&schema, &person));
    }

    #[test]
    fn test_object_class_round_trip() {
        let schema = schema();
        let raw = "( 1.3.6.1.4.1.56521.999.41 NAME 'exampleClass' DESC 'It\\27s an example' \
                   SUP ( top $ dcObject ) AUXILIARY MUST ( cn $ o ) MAY description \
                   X-ORIGIN 'NOWHERE' )";
        let id = schema.parse_object_class(raw).unwrap();
        let oc = schema.object_classes().fetch(id).unwrap();
        assert_eq!(oc.description(), Some("It's an example"));
        assert_eq!(oc.unmarshal().unwrap(), raw);
    }

    #[test]
    fn test_superclass_cycle_is_detected() {
        let schema = schema();
        let a = schema
            .parse_object_class("( 1.3.6.1.4.1.56521.999.42 NAME 'loopA' SUP top AUXILIARY )")
            .unwrap();
        let b = schema
            .parse_object_class("( 1.3.6.1.4.1.56521.999.43 NAME 'loopB' SUP loopA AUXILIARY )")
            .unwrap();
        schema.object_classes().update(a, |oc| {
            oc.push_super_class(b);
        });

        let loop_b = schema.object_classes().fetch(b).unwrap();
        assert!(matches!(
            loop_b.validate().unwrap_err().as_validation(),
            Some(ValidationError::CyclicReference { .. })
        ));
        // Traversal still terminates.
        assert!(loop_b.all_must().unwrap().contains(
            &schema.attribute_types().contains("objectClass").unwrap()
        ));
    }

    #[test]
    fn test_superclass_kinds_must_be_compatible() {
        let schema = schema();
        let cases = [
            ("( 1.3.6.1.4.1.56521.999.44 NAME 'auxPerson' SUP person AUXILIARY )", false),
            ("( 1.3.6.1.4.1.56521.999.45 NAME 'structuralDc' SUP dcObject STRUCTURAL )", false),
            ("( 1.3.6.1.4.1.56521.999.46 NAME 'abstractPerson' SUP person ABSTRACT )", false),
            ("( 1.3.6.1.4.1.56521.999.47 NAME 'staffPerson' SUP person STRUCTURAL )", true),
            ("( 1.3.6.1.4.1.56521.999.48 NAME 'extraDc' SUP dcObject AUXILIARY )", true),
            ("( 1.3.6.1.4.1.56521.999.49 NAME 'baseThing' SUP top ABSTRACT )", true),
        ];
        for (raw, compatible) in cases {
            let result = schema.marshal_as::<ObjectClass>(raw);
            if compatible {
                assert!(result.is_ok(), "{raw}: {result:?}");
            } else {
                assert!(
                    matches!(
                        result.as_ref().unwrap_err().as_validation(),
                        Some(ValidationError::IncompatSuperClassKind { .. })
                    ),
                    "{raw}: {result:?}"
                );
            }
        }
    }

    #[test]
    fn test_kind_in_map() {
        let schema = schema();
        let top = schema.object_classes().get("top").unwrap();
        let map = top.map().unwrap();
        assert_eq!(map["KIND"], vec!["ABSTRACT"]);
        assert_eq!(map["MUST"], vec!["objectClass"]);
        assert!(!map.contains_key("SUP"));
    }
}
