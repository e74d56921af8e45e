//! DIT content rule definitions (RFC 4512 section 4.1.6).
//!
//! A content rule has no OID namespace of its own: its identifier is the OID
//! of the structural object class it governs.

use super::{
    AttributeType, AttributeTypeId, Attachments, Definition, DefinitionKind, ObjectClass,
    ObjectClassId, References, Role, any_methods, check_references, display_name, display_names,
    fetch, header_methods, impl_header, resolve, resolve_into, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError, ValidationResult};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};

#[derive(Debug, Clone)]
pub struct DitContentRule {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    structural: Option<ObjectClassId>,
    aux: References<ObjectClass>,
    must: References<AttributeType>,
    may: References<AttributeType>,
    not: References<AttributeType>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl Default for DitContentRule {
    fn default() -> Self {
        Self {
            oid: String::new(),
            names: NameList::new(),
            desc: None,
            obsolete: false,
            structural: None,
            aux: References::new(Role::Auxiliary),
            must: References::new(Role::Required),
            may: References::new(Role::Permitted),
            not: References::new(Role::Prohibited),
            extensions: Extensions::new(),
            attachments: Attachments::default(),
        }
    }
}

impl_header!(DitContentRule);

impl DitContentRule {
    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    /// Bind the rule to a structural class, adopting that class's OID.
    pub fn set_structural_class(&mut self, schema: &Schema, class: ObjectClassId) -> SchemaResult<&mut Self> {
        let oid = super::identifier_of(schema, class)?;
        self.structural = Some(class);
        self.oid = oid;
        Ok(self)
    }

    pub fn structural_class(&self) -> Option<ObjectClassId> {
        self.structural
    }

    pub fn aux(&self) -> &References<ObjectClass> {
        &self.aux
    }

    pub fn must(&self) -> &References<AttributeType> {
        &self.must
    }

    pub fn may(&self) -> &References<AttributeType> {
        &self.may
    }

    pub fn not(&self) -> &References<AttributeType> {
        &self.not
    }

    pub fn push_aux(&mut self, id: ObjectClassId) -> &mut Self {
        self.aux.push(id);
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

    pub fn push_not(&mut self, id: AttributeTypeId) -> &mut Self {
        self.not.push(id);
        self
    }

    /// True if `class` is listed in AUX and is an auxiliary class.
    pub fn belongs_in(&self, schema: &Schema, class: ObjectClassId) -> bool {
        self.aux.contains(class)
            && schema
                .object_classes()
                .with(class, ObjectClass::is_auxiliary)
                .unwrap_or(false)
    }

    pub fn belongs(&self, class: ObjectClassId) -> SchemaResult<bool> {
        Ok(self.belongs_in(&self.schema()?, class))
    }

    pub fn requires(&self, at: AttributeTypeId) -> bool {
        self.must.contains(at)
    }

    pub fn permits(&self, at: AttributeTypeId) -> bool {
        self.may.contains(at)
    }

    pub fn prohibits(&self, at: AttributeTypeId) -> bool {
        self.not.contains(at)
    }

    fn check_classes(&self, schema: &Schema) -> ValidationResult<()> {
        let label = self.label();
        let Some(structural) = self.structural else {
            return Err(ValidationError::IncompatStructuralClass {
                definition: label,
                class: self.oid.clone(),
            });
        };
        let class = fetch::<ObjectClass>(schema, structural, &label, "OID")?;
        if !class.is_structural() || class.numeric_oid() != self.oid {
            return Err(ValidationError::IncompatStructuralClass {
                definition: label,
                class: class.label(),
            });
        }

        for id in self.aux.iter() {
            let aux = fetch::<ObjectClass>(schema, id, &label, "AUX")?;
            if !aux.is_auxiliary() {
                return Err(ValidationError::InvalidAuxiliaryClass {
                    definition: label,
                    class: aux.label(),
                });
            }
        }
        Ok(())
    }

    fn check_attributes(&self, schema: &Schema) -> SchemaResult<()> {
        let label = self.label();
        check_references(schema, &self.must, &label)?;
        check_references(schema, &self.may, &label)?;
        check_references(schema, &self.not, &label)?;

        if let Some(clash) = self.must.iter().find(|at| self.not.contains(*at)) {
            return Err(ValidationError::ConflictingClauses {
                definition: label,
                attribute: display_name(schema, clash)?,
                first: "MUST".to_string(),
                second: "NOT".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl PartialEq for DitContentRule {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.structural == other.structural
            && self.aux == other.aux
            && self.must == other.must
            && self.may == other.may
            && self.not == other.not
            && self.extensions == other.extensions
    }
}

impl Definition for DitContentRule {
    const KIND: DefinitionKind = DefinitionKind::DitContentRule;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.names.is_empty() && self.structural.is_none()
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
        self.check_classes(schema)?;
        self.check_attributes(schema)
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.content_rules()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        let oid = marshal::resolve_numeric_oid(schema, token)?;
        self.structural = Some(resolve::<ObjectClass>(schema, &oid)?);
        self.oid = oid;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "AUX" => resolve_into(schema, &mut self.aux, &clause.values),
            "MUST" => resolve_into(schema, &mut self.must, &clause.values),
            "MAY" => resolve_into(schema, &mut self.may, &clause.values),
            "NOT" => resolve_into(schema, &mut self.not, &clause.values),
            label => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let aux = display_names(schema, &self.aux)?;
        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .oids("AUX", &aux);
        for refs in [&self.must, &self.may, &self.not] {
            out.oids(refs.role().label(), &display_names(schema, refs)?);
        }
        out.extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if !self.aux.is_empty() {
            map.insert("AUX".to_string(), display_names(schema, &self.aux)?);
        }
        for refs in [&self.must, &self.may, &self.not] {
            if !refs.is_empty() {
                map.insert(refs.role().label().to_string(), display_names(schema, refs)?);
            }
        }
        Ok(())
    }

    any_methods!(DitContentRule);
}
