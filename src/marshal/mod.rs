//! Marshal/unmarshal engine.
//!
//! Raw RFC 4512 text is sanitized, tokenized by the [`parser`] and then fed
//! clause by clause into a blank definition of the requested kind. Clauses
//! that name other definitions are resolved against the owning schema while
//! populating, so an unknown reference fails the marshal immediately. The
//! populated definition is validated before it is handed back.
//!
//! The same population path serves [`DefinitionMap`] input, which is the
//! projection produced by `Definition::map`.

pub mod parser;
mod render;

pub use parser::{Clause, RawDefinition, parse_definition, sanitize};
pub use render::ClauseWriter;

pub(crate) use render::{bool_str, canonical, project, render};

use crate::definition::{Definition, DefinitionKind};
use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;
use crate::value_objects::{is_extension_key, is_numeric_oid};
use log::debug;
use std::collections::BTreeMap;

/// Spreadsheet-friendly projection of a definition.
pub type DefinitionMap = BTreeMap<String, Vec<String>>;

/// Labels whose values may be reordered under the `sort_lists` option.
const SORTABLE_LABELS: &[&str] = &["SUP", "MUST", "MAY", "NOT", "AUX", "APPLIES"];

/// Map keys that are informational only and skipped when marshalling a map.
const PROJECTION_ONLY_KEYS: &[&str] = &["TYPE", "RAW", "NUMERICOID", "RULEID", "MUB", "NOC"];

/// Marshal raw text into a validated definition of kind `T`.
pub(crate) fn marshal_text<T: Definition>(schema: &Schema, raw: &str) -> SchemaResult<T> {
    if raw.trim().is_empty() {
        return Err(SchemaError::invalid_marshal("definition has no length"));
    }
    let sanitized = sanitize(raw);
    let parsed = parse_definition(&sanitized).map_err(SchemaError::invalid_marshal)?;
    debug!(
        "Marshalling {} '{}' with {} clauses",
        T::KIND,
        parsed.identifier,
        parsed.clauses.len()
    );
    populate(schema, &parsed)
}

/// Marshal a map projection into a validated definition of kind `T`.
pub(crate) fn marshal_map<T: Definition>(schema: &Schema, map: &DefinitionMap) -> SchemaResult<T> {
    let id_key = match T::KIND {
        DefinitionKind::DitStructureRule => "RULEID",
        _ => "NUMERICOID",
    };
    let identifier = map
        .get(id_key)
        .and_then(|v| v.first())
        .ok_or_else(|| SchemaError::invalid_marshal(format!("map lacks {id_key}")))?
        .clone();

    let mut clauses = Vec::new();
    for (key, values) in map {
        let upper = key.to_ascii_uppercase();
        if PROJECTION_ONLY_KEYS.contains(&upper.as_str()) {
            continue;
        }
        if parser::is_flag_label(&upper) {
            if values.iter().any(|v| v.eq_ignore_ascii_case("TRUE")) {
                clauses.push(Clause::new(&upper, Vec::<String>::new()));
            }
            continue;
        }
        if upper == "KIND" {
            if let Some(kind) = values.first() {
                clauses.push(Clause::new(kind, Vec::<String>::new()));
            }
            continue;
        }
        if upper == "SYNTAX" {
            let mub = map.get("MUB").and_then(|v| v.first());
            let syntax = match (values.first(), mub) {
                (Some(oid), Some(mub)) => format!("{oid}{{{mub}}}"),
                (Some(oid), None) => oid.clone(),
                (None, _) => continue,
            };
            clauses.push(Clause::new(&upper, [syntax]));
            continue;
        }
        clauses.push(Clause::new(&upper, values.iter().cloned()));
    }

    populate(schema, &RawDefinition { identifier, clauses })
}

/// Assign identifier and clauses to a blank definition, then validate.
///
/// Partially populated definitions are dropped on error.
pub(crate) fn populate<T: Definition>(schema: &Schema, raw: &RawDefinition) -> SchemaResult<T> {
    let options = schema.options();
    let mut def = T::new_in(schema);
    def.assign_identifier(schema, &raw.identifier)?;

    for clause in &raw.clauses {
        let mut clause = clause.clone();
        if options.sort_lists && SORTABLE_LABELS.contains(&clause.label.as_str()) {
            clause.values.sort_by_key(|v| v.to_ascii_lowercase());
        }
        apply_common(&mut def, schema, &clause)?;
    }

    if options.sort_extensions {
        def.extensions_mut().sort();
    }
    def.validate_in(schema)?;
    Ok(def)
}

fn apply_common<T: Definition>(def: &mut T, schema: &Schema, clause: &Clause) -> SchemaResult<()> {
    let label = clause.label.as_str();
    if label.starts_with("X-") {
        if !is_extension_key(label) {
            return Err(invalid_label::<T>(label));
        }
        def.extensions_mut().set(label, clause.values.iter().cloned());
        return Ok(());
    }

    match label {
        "NAME" => match def.names_mut() {
            Some(names) => {
                for name in &clause.values {
                    names.push(name.clone());
                }
                Ok(())
            }
            None => Err(invalid_label::<T>(label)),
        },
        "DESC" => {
            let desc = single_value(clause)?;
            *def.description_mut() = Some(desc.to_string());
            Ok(())
        }
        "OBSOLETE" => {
            if def.mark_obsolete() {
                Ok(())
            } else {
                Err(invalid_label::<T>(label))
            }
        }
        _ => def.apply_clause(schema, clause),
    }
}

pub(crate) fn invalid_label<T: Definition>(label: &str) -> SchemaError {
    SchemaError::InvalidLabel {
        kind: T::KIND,
        label: label.to_string(),
    }
}

/// The only value of a single-valued clause.
pub(crate) fn single_value(clause: &Clause) -> SchemaResult<&str> {
    match clause.values.as_slice() {
        [value] => Ok(value.as_str()),
        values => Err(SchemaError::invalid_value(
            &clause.label,
            format!("expected one value, found {}", values.len()),
        )),
    }
}

/// Resolve an identifier token to a numeric OID, expanding macros.
pub(crate) fn resolve_numeric_oid(schema: &Schema, token: &str) -> SchemaResult<String> {
    if is_numeric_oid(token) {
        return Ok(token.to_string());
    }
    let macros = schema.macros();
    if macros.is_empty() {
        return Err(SchemaError::UnresolvableAlias {
            alias: format!("{token} (nil manifest)"),
        });
    }
    macros
        .resolve(token)
        .ok_or_else(|| SchemaError::UnresolvableAlias {
            alias: token.to_string(),
        })
}
