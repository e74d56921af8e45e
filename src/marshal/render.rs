//! Canonical rendering and the map projection.

use super::DefinitionMap;
use crate::definition::Definition;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;
use crate::value_objects::{Extensions, NameList, escape_qdstring};

/// Accumulates clauses after the leading identifier.
///
/// Single values render bare (`SUP top`), multiple values render as a
/// parenthesised list whose separator depends on the value form.
#[derive(Debug)]
pub struct ClauseWriter {
    out: String,
    hanging: bool,
}

impl ClauseWriter {
    pub(crate) fn new(identifier: &str, hanging: bool) -> Self {
        Self {
            out: format!("( {identifier}"),
            hanging,
        }
    }

    fn open_clause(&mut self) {
        if self.hanging {
            self.out.push_str("\n    ");
        } else {
            self.out.push(' ');
        }
    }

    /// A label with no value.
    pub fn flag(&mut self, label: &str, present: bool) -> &mut Self {
        if present {
            self.open_clause();
            self.out.push_str(label);
        }
        self
    }

    /// A single bare word such as an OID, descriptor or `noidlen`.
    pub fn word(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.open_clause();
            self.out.push_str(label);
            self.out.push(' ');
            self.out.push_str(value);
        }
        self
    }

    /// An `oids` clause: `SUP top` or `MUST ( sn $ cn )`.
    pub fn oids(&mut self, label: &str, values: &[String]) -> &mut Self {
        self.list(label, values, " $ ", false)
    }

    /// A rule ID list: `SUP 1` or `SUP ( 1 2 )`.
    pub fn rule_ids(&mut self, label: &str, values: &[String]) -> &mut Self {
        self.list(label, values, " ", false)
    }

    /// A `qdescrs`/`qdstrings` clause: `NAME 'cn'` or `NAME ( 'cn' 'commonName' )`.
    pub fn quoted(&mut self, label: &str, values: &[String]) -> &mut Self {
        self.list(label, values, " ", true)
    }

    pub fn names(&mut self, names: &NameList) -> &mut Self {
        self.quoted("NAME", names.as_slice())
    }

    pub fn description(&mut self, desc: Option<&str>) -> &mut Self {
        if let Some(desc) = desc {
            self.quoted("DESC", &[desc.to_string()]);
        }
        self
    }

    pub fn extensions(&mut self, extensions: &Extensions) -> &mut Self {
        for (key, values) in extensions.iter() {
            self.quoted(key, values);
        }
        self
    }

    fn list(&mut self, label: &str, values: &[String], sep: &str, quote: bool) -> &mut Self {
        let render = |v: &String| {
            if quote {
                format!("'{}'", escape_qdstring(v))
            } else {
                v.clone()
            }
        };
        match values {
            [] => {}
            [single] => {
                self.open_clause();
                self.out.push_str(label);
                self.out.push(' ');
                self.out.push_str(&render(single));
            }
            many => {
                self.open_clause();
                self.out.push_str(label);
                self.out.push_str(" ( ");
                let items: Vec<String> = many.iter().map(render).collect();
                self.out.push_str(&items.join(sep));
                self.out.push_str(" )");
            }
        }
        self
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push_str(" )");
        self.out
    }
}

/// Validate and render `def`, honouring its custom stringer.
pub(crate) fn render<T: Definition>(def: &T, schema: &Schema) -> SchemaResult<String> {
    def.validate_in(schema)?;

    let text = match def.attachments().stringer() {
        Some(stringer) => stringer(def),
        None => canonical(def, schema, schema.options().hanging_indents)?,
    };

    if text.is_empty() {
        return Err(SchemaError::InvalidUnmarshal {
            reason: format!("{} {} rendered to nothing", T::KIND, def.identifier()),
        });
    }
    Ok(text)
}

/// The canonical RFC 4512 form, ignoring any custom stringer.
pub(crate) fn canonical<T: Definition>(
    def: &T,
    schema: &Schema,
    hanging: bool,
) -> SchemaResult<String> {
    let mut out = ClauseWriter::new(&def.identifier(), hanging);
    def.write_clauses(schema, &mut out)?;
    Ok(out.finish())
}

/// Build the denormalized map projection of `def`.
pub(crate) fn project<T: Definition>(def: &T, schema: &Schema) -> SchemaResult<DefinitionMap> {
    let raw = render(def, schema)?;
    let mut map = DefinitionMap::new();

    map.insert("TYPE".to_string(), vec![T::KIND.to_string()]);
    map.insert("RAW".to_string(), vec![raw]);
    let id_key = match T::KIND {
        crate::definition::DefinitionKind::DitStructureRule => "RULEID",
        _ => "NUMERICOID",
    };
    map.insert(id_key.to_string(), vec![def.identifier()]);
    if !def.names().is_empty() {
        map.insert("NAME".to_string(), def.names().as_slice().to_vec());
    }
    if let Some(desc) = def.description() {
        map.insert("DESC".to_string(), vec![desc.to_string()]);
    }
    map.insert("OBSOLETE".to_string(), vec![bool_str(def.is_obsolete())]);

    def.map_clauses(schema, &mut map)?;

    for (key, values) in def.extensions().iter() {
        map.insert(key.to_string(), values.to_vec());
    }
    Ok(map)
}

pub(crate) fn bool_str(value: bool) -> String {
    if value { "TRUE" } else { "FALSE" }.to_string()
}
