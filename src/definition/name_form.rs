//! Name form definitions (RFC 4512 section 4.1.7.2).

use super::{
    AttributeType, AttributeTypeId, Attachments, Definition, DefinitionKind, ObjectClass,
    ObjectClassId, References, Role, any_methods, check_references, display_name, display_names,
    fetch, header_methods, impl_header, resolve, resolve_into, validate_header,
};
use crate::collection::Collection;
use crate::error::{SchemaResult, ValidationError};
use crate::marshal::{self, Clause, ClauseWriter, DefinitionMap};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList};

/// The RDN attributes allowed for entries of one structural class.
#[derive(Debug, Clone)]
pub struct NameForm {
    oid: String,
    names: NameList,
    desc: Option<String>,
    obsolete: bool,
    oc: Option<ObjectClassId>,
    must: References<AttributeType>,
    may: References<AttributeType>,
    extensions: Extensions,
    attachments: Attachments<Self>,
}

impl Default for NameForm {
    fn default() -> Self {
        Self {
            oid: String::new(),
            names: NameList::new(),
            desc: None,
            obsolete: false,
            oc: None,
            must: References::new(Role::Required),
            may: References::new(Role::Permitted),
            extensions: Extensions::new(),
            attachments: Attachments::default(),
        }
    }
}

impl_header!(NameForm);

impl NameForm {
    pub fn numeric_oid(&self) -> &str {
        &self.oid
    }

    pub fn set_numeric_oid(&mut self, oid: impl Into<String>) -> &mut Self {
        self.oid = oid.into();
        self
    }

    /// The structural class this form names.
    pub fn structural_class(&self) -> Option<ObjectClassId> {
        self.oc
    }

    pub fn set_structural_class(&mut self, oc: ObjectClassId) -> &mut Self {
        self.oc = Some(oc);
        self
    }

    pub fn must(&self) -> &References<AttributeType> {
        &self.must
    }

    pub fn may(&self) -> &References<AttributeType> {
        &self.may
    }

    pub fn push_must(&mut self, id: AttributeTypeId) -> &mut Self {
        self.must.push(id);
        self
    }

    pub fn push_may(&mut self, id: AttributeTypeId) -> &mut Self {
        self.may.push(id);
        self
    }
}

impl PartialEq for NameForm {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.names == other.names
            && self.obsolete == other.obsolete
            && self.oc == other.oc
            && self.must == other.must
            && self.may == other.may
            && self.extensions == other.extensions
    }
}

impl Definition for NameForm {
    const KIND: DefinitionKind = DefinitionKind::NameForm;

    fn identifier(&self) -> String {
        self.oid.clone()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_empty() && self.names.is_empty() && self.oc.is_none()
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

        let label = self.label();
        let Some(oc) = self.oc else {
            return Err(ValidationError::MissingRequiredClause {
                definition: label,
                clause: "OC".to_string(),
            }
            .into());
        };
        let class = fetch::<ObjectClass>(schema, oc, &label, "OC")?;
        if !class.is_structural() {
            return Err(ValidationError::IncompatStructuralClass {
                definition: label,
                class: class.label(),
            }
            .into());
        }

        if self.must.is_empty() {
            return Err(ValidationError::MissingRequiredClause {
                definition: label,
                clause: "MUST".to_string(),
            }
            .into());
        }
        check_references(schema, &self.must, &label)?;
        check_references(schema, &self.may, &label)?;
        if let Some(clash) = self.must.iter().find(|at| self.may.contains(*at)) {
            return Err(ValidationError::ConflictingClauses {
                definition: label,
                attribute: display_name(schema, clash)?,
                first: "MUST".to_string(),
                second: "MAY".to_string(),
            }
            .into());
        }
        Ok(())
    }

    header_methods!();

    fn collection(schema: &Schema) -> &Collection<Self> {
        schema.name_forms()
    }

    fn assign_identifier(&mut self, schema: &Schema, token: &str) -> SchemaResult<()> {
        self.oid = marshal::resolve_numeric_oid(schema, token)?;
        Ok(())
    }

    fn apply_clause(&mut self, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
        match clause.label.as_str() {
            "OC" => {
                let term = marshal::single_value(clause)?;
                self.oc = Some(resolve::<ObjectClass>(schema, term)?);
                Ok(())
            }
            "MUST" => resolve_into(schema, &mut self.must, &clause.values),
            "MAY" => resolve_into(schema, &mut self.may, &clause.values),
            label => Err(marshal::invalid_label::<Self>(label)),
        }
    }

    fn write_clauses(&self, schema: &Schema, out: &mut ClauseWriter) -> SchemaResult<()> {
        let oc = self.oc.map(|id| display_name(schema, id)).transpose()?;
        out.names(&self.names)
            .description(self.desc.as_deref())
            .flag("OBSOLETE", self.obsolete)
            .word("OC", oc.as_deref())
            .oids("MUST", &display_names(schema, &self.must)?)
            .oids("MAY", &display_names(schema, &self.may)?)
            .extensions(&self.extensions);
        Ok(())
    }

    fn map_clauses(&self, schema: &Schema, map: &mut DefinitionMap) -> SchemaResult<()> {
        if let Some(id) = self.oc {
            map.insert("OC".to_string(), vec![display_name(schema, id)?]);
        }
        for refs in [&self.must, &self.may] {
            if !refs.is_empty() {
                map.insert(refs.role().label().to_string(), display_names(schema, refs)?);
            }
        }
        Ok(())
    }

    any_methods!(NameForm);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new().expect("Failed to create schema")
    }

    #[test]
    fn test_bundled_name_form_round_trip() {
        let schema = schema();
        let form = schema.name_forms().get("domainNameForm").unwrap();
        assert_eq!(
            form.unmarshal().unwrap(),
            "( 1.3.6.1.1.2.1 NAME 'domainNameForm' OC domain MUST dc X-ORIGIN 'RFC2377' )"
        );
        assert_eq!(schema.name_forms().x_origin("rfc2377").len(), 5);
    }

    #[test]
    fn test_name_form_requires_must() {
        let schema = schema();
        let result = schema.marshal_as::<NameForm>(
            "( 1.3.6.1.4.1.56521.999.60 NAME 'emptyForm' OC organization MAY o )",
        );
        assert!(matches!(
            result.unwrap_err().as_validation(),
            Some(ValidationError::MissingRequiredClause { clause, .. }) if clause == "MUST"
        ));
    }

    #[test]
    fn test_name_form_requires_structural_class() {
        let schema = schema();
        let result = schema.marshal_as::<NameForm>(
            "( 1.3.6.1.4.1.56521.999.61 NAME 'auxForm' OC dcObject MUST dc )",
        );
        assert!(matches!(
            result.unwrap_err().as_validation(),
            Some(ValidationError::IncompatStructuralClass { .. })
        ));
    }

    #[test]
    fn test_name_form_map() {
        let schema = schema();
        let form = schema.name_forms().get("uidOrganizationalPersonNameForm").unwrap();
        let map = form.map().unwrap();
        assert_eq!(map["OC"], vec!["organizationalPerson"]);
        assert_eq!(map["MUST"], vec!["uid"]);
        assert!(!map.contains_key("MAY"));
    }
}
