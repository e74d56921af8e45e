//! Tests for the schema container, its options and the bundled definitions.

use super::{Bootstrap, Schema, SchemaBuilder, SchemaOptions};
use crate::definition::{
    AnyDefinition, AttributeType, Definition, DefinitionKind, DitStructureRule, ObjectClass,
};
use crate::error::SchemaError;

#[test]
fn test_schema_creation() {
    let schema = Schema::new().expect("Failed to create schema");
    assert_eq!(schema.ldap_syntaxes().len(), 31);
    assert_eq!(schema.matching_rules().len(), 28);
    assert_eq!(schema.name_forms().len(), 16);
    assert_eq!(schema.structure_rules().len(), 10);
    assert!(schema.attribute_types().contains("cn").is_some());
    assert!(schema.object_classes().contains("domain").is_some());
    assert!(!schema.matching_rule_uses().is_empty());
    assert!(schema.content_rules().is_empty());
}

#[test]
fn test_bundled_subentry_and_uddi_sets() {
    let schema = Schema::new().expect("Failed to create schema");
    assert_eq!(schema.attribute_types().x_origin("RFC4403").len(), 46);
    assert_eq!(schema.object_classes().x_origin("RFC4403").len(), 10);
    assert_eq!(schema.name_forms().x_origin("RFC4403").len(), 10);
    assert_eq!(schema.structure_rules().x_origin("RFC4403").len(), 10);
    assert_eq!(schema.name_forms().x_origin("X.501").len(), 1);
    assert_eq!(schema.object_classes().x_origin("RFC3671").len(), 1);

    let subentry_form = schema.name_forms().get("subentryNameForm").unwrap();
    assert_eq!(
        subentry_form.structural_class(),
        schema.object_classes().contains("subentry")
    );

    let address = schema
        .structure_rules()
        .get("uddiAddressStructureRule")
        .unwrap();
    assert_eq!(address.rule_id(), Some(3));
    assert_eq!(
        address.unmarshal().unwrap(),
        "( 3 NAME 'uddiAddressStructureRule' FORM uddiAddressNameForm SUP 2 X-ORIGIN 'RFC4403' )"
    );
    let entity = schema.structure_rules().get("1").unwrap();
    let mut subs = entity.sub_rules().unwrap();
    subs.sort_by_key(|id| id.index());
    assert_eq!(
        subs,
        vec![
            schema.structure_rules().contains("2").unwrap(),
            schema.structure_rules().contains("4").unwrap(),
        ]
    );

    // Bundled rules occupy 1 through 10, so a reindexed collision lands on 11.
    schema.set_options(SchemaOptions::new().with_allow_reindexed_structure_rules(true));
    let id = schema
        .parse_structure_rule("( 7 NAME 'localTModelRule' FORM uddiTModelNameForm )")
        .unwrap();
    assert_eq!(schema.structure_rules().fetch(id).unwrap().rule_id(), Some(11));
}

#[test]
fn test_bootstrap_levels() {
    let basic = Schema::basic().expect("Failed to create schema");
    assert_eq!(basic.ldap_syntaxes().len(), 30);
    assert!(basic.attribute_types().is_empty());
    assert!(basic.structure_rules().is_empty());

    let empty = SchemaBuilder::new()
        .with_bootstrap(Bootstrap::Empty)
        .build()
        .expect("Failed to create schema");
    assert!(empty.ldap_syntaxes().is_empty());
    assert_eq!(Schema::empty().matching_rules().len(), 0);
}

#[test]
fn test_lookup_ignores_name_case() {
    let schema = Schema::new().expect("Failed to create schema");
    let types = schema.attribute_types();
    assert_eq!(types.contains("COMMONNAME"), types.contains("cn"));
    assert_eq!(types.contains("2.5.4.3"), types.contains("cn"));
    assert!(types.get("commonname").is_some());
    assert!(types.get("nonexistentAttribute").is_none());
}

#[test]
fn test_positional_access() {
    let schema = Schema::new().expect("Failed to create schema");
    let forms = schema.name_forms();
    assert_eq!(forms.index(0).unwrap().label(), "domainNameForm");
    assert_eq!(forms.index(4).unwrap().label(), "uidOrganizationalPersonNameForm");
    assert_eq!(forms.index(-1).unwrap().label(), "uddiv3EntityObituaryNameForm");
    assert!(forms.index(16).is_none());
    assert!(forms.index(-17).is_none());
}

#[test]
fn test_duplicate_identifier_rejected() {
    let schema = Schema::new().expect("Failed to create schema");
    let before = schema.attribute_types().len();
    let result = schema.parse_attribute_type("( 2.5.4.3 NAME 'duplicateName' SUP name )");
    assert!(matches!(result, Err(SchemaError::NotUnique { .. })));
    assert_eq!(schema.attribute_types().len(), before);
}

#[test]
fn test_non_compliant_push_rejected() {
    let schema = Schema::new().expect("Failed to create schema");
    let mut at = schema.new_attribute_type();
    at.set_numeric_oid("1.3.6.1.4.1.56521.999.80")
        .set_name(["syntaxless"]);

    let result = schema.push(at);
    assert!(matches!(result, Err(SchemaError::NonCompliant { .. })));
    assert!(schema.attribute_types().get("syntaxless").is_none());
}

#[test]
fn test_obsolete_is_preserved() {
    let schema = Schema::new().expect("Failed to create schema");
    let id = schema
        .parse_object_class(
            "( 1.3.6.1.4.1.56521.999.81 NAME 'retiredClass' OBSOLETE SUP top AUXILIARY MAY description )",
        )
        .unwrap();
    let class = schema.object_classes().fetch(id).unwrap();
    assert!(class.is_obsolete());
    assert_eq!(
        class.unmarshal().unwrap(),
        "( 1.3.6.1.4.1.56521.999.81 NAME 'retiredClass' OBSOLETE SUP top AUXILIARY MAY description )"
    );
}

#[test]
fn test_replace_requires_override() {
    let schema = Schema::new().expect("Failed to create schema");
    let replacement = schema
        .marshal_as::<AttributeType>(
            "( 2.5.4.13 NAME 'description' EQUALITY caseExactMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        )
        .unwrap();

    let result = schema.replace(replacement.clone());
    assert!(matches!(result, Err(SchemaError::OverrideDisabled { .. })));

    schema.set_options(SchemaOptions::new().with_allow_override(true));
    let id = schema.replace(replacement).unwrap();
    assert_eq!(schema.attribute_types().contains("description"), Some(id));

    let exact = schema.matching_rule_uses().get("caseExactMatch").unwrap();
    assert!(exact.applies().contains(id));
    let ignore = schema.matching_rule_uses().get("caseIgnoreMatch").unwrap();
    assert!(!ignore.applies().contains(id));
}

#[test]
fn test_replace_keeps_matching_rule_use_handles() {
    let schema = SchemaBuilder::new()
        .with_options(SchemaOptions::new().with_allow_override(true))
        .build()
        .expect("Failed to create schema");
    let uses = schema.matching_rule_uses();
    let before = uses.len();
    let first_id = uses.ids()[0];
    let first_oid = uses.fetch(first_id).unwrap().numeric_oid().to_string();
    let unique_id = uses.contains("uniqueMemberMatch").unwrap();

    let object_class = schema
        .marshal_as::<AttributeType>(
            "( 2.5.4.0 NAME 'objectClass' SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )",
        )
        .unwrap();
    schema.replace(object_class).unwrap();
    let unique_member = schema
        .marshal_as::<AttributeType>(
            "( 2.5.4.50 NAME 'uniqueMember' SYNTAX 1.3.6.1.4.1.1466.115.121.1.34 )",
        )
        .unwrap();
    schema.replace(unique_member).unwrap();

    assert_eq!(uses.len(), before);
    assert_eq!(uses.fetch(first_id).unwrap().numeric_oid(), first_oid);
    assert_eq!(uses.contains("uniqueMemberMatch"), Some(unique_id));
    assert!(uses.fetch(unique_id).unwrap().applies().is_empty());

    let json = schema.to_json(DefinitionKind::MatchingRuleUse).unwrap();
    assert!(!json.contains("uniqueMemberMatch"));
    assert!(json.contains("caseIgnoreMatch"));
}

#[test]
fn test_replace_unknown_definition() {
    let schema = SchemaBuilder::new()
        .with_options(SchemaOptions::new().with_allow_override(true))
        .build()
        .expect("Failed to create schema");
    let at = schema
        .marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.82 NAME 'notStored' SUP name )")
        .unwrap();
    assert!(matches!(
        schema.replace(at),
        Err(SchemaError::NotFound { .. })
    ));
}

#[test]
fn test_macro_identifiers() {
    let schema = SchemaBuilder::new()
        .with_macro("nisSchema", "1.3.6.1.1.1")
        .build()
        .expect("Failed to create schema");

    let id = schema
        .parse_attribute_type(
            "( nisSchema.1.0 NAME 'uidNumber' EQUALITY integerMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 SINGLE-VALUE )",
        )
        .unwrap();
    let at = schema.attribute_types().fetch(id).unwrap();
    assert_eq!(at.numeric_oid(), "1.3.6.1.1.1.1.0");
    assert_eq!(schema.attribute_types().contains("nisSchema:1.0"), Some(id));
    assert_eq!(schema.get_macro_name("1.3.6.1.1.1").as_deref(), Some("nisSchema"));
}

#[test]
fn test_unresolvable_alias() {
    let schema = Schema::new().expect("Failed to create schema");
    let result = schema.parse_attribute_type("( unknownAlias.1 NAME 'lost' SUP name )");
    assert!(matches!(result, Err(SchemaError::UnresolvableAlias { .. })));
}

#[test]
fn test_matching_rule_uses_follow_attribute_types() {
    let schema = Schema::new().expect("Failed to create schema");
    let id = schema
        .parse_attribute_type(
            "( 1.3.6.1.4.1.56521.999.83 NAME 'employeeCode' EQUALITY caseExactMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        )
        .unwrap();
    let mru = schema.matching_rule_uses().get("2.5.13.5").unwrap();
    assert!(mru.applies().contains(id));
    assert_eq!(mru.matching_rule(), schema.matching_rules().contains("caseExactMatch"));

    let count = schema.matching_rule_uses().len();
    schema.refresh_matching_rule_uses().unwrap();
    assert_eq!(schema.matching_rule_uses().len(), count);
}

#[test]
fn test_map_round_trip() {
    let schema = Schema::new().expect("Failed to create schema");
    let person = schema.object_classes().get("person").unwrap();
    let map = person.map().unwrap();
    assert_eq!(map["TYPE"], vec!["objectClass"]);
    assert_eq!(map["NUMERICOID"], vec!["2.5.6.6"]);
    assert_eq!(map["KIND"], vec!["STRUCTURAL"]);
    assert_eq!(map["OBSOLETE"], vec!["FALSE"]);

    let rebuilt = schema
        .marshal_map(DefinitionKind::ObjectClass, &map)
        .unwrap()
        .downcast::<ObjectClass>()
        .unwrap();
    assert_eq!(rebuilt, person);
    assert_eq!(rebuilt.unmarshal().unwrap(), person.unmarshal().unwrap());
}

#[test]
fn test_attribute_type_map_round_trip() {
    let schema = Schema::new().expect("Failed to create schema");
    let mail = schema.attribute_types().get("mail").unwrap();
    let map = mail.map().unwrap();
    assert_eq!(map["MUB"], vec!["256"]);
    assert_eq!(map["USAGE"], vec!["userApplications"]);

    let rebuilt = schema
        .marshal_map(DefinitionKind::AttributeType, &map)
        .unwrap()
        .downcast::<AttributeType>()
        .unwrap();
    assert_eq!(rebuilt, mail);
}

#[test]
fn test_to_json() {
    let schema = Schema::new().expect("Failed to create schema");
    let json = schema.to_json(DefinitionKind::NameForm).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let forms = value.as_array().unwrap();
    assert_eq!(forms.len(), 5);
    assert_eq!(forms[0]["NAME"][0], "domainNameForm");
    assert_eq!(forms[0]["TYPE"][0], "nameForm");
}

#[test]
fn test_hanging_indents() {
    let schema = SchemaBuilder::new()
        .with_options(SchemaOptions::new().with_hanging_indents(true))
        .build()
        .expect("Failed to create schema");
    let form = schema.name_forms().get("domainNameForm").unwrap();
    assert_eq!(
        form.unmarshal().unwrap(),
        "( 1.3.6.1.1.2.1\n    NAME 'domainNameForm'\n    OC domain\n    MUST dc\n    X-ORIGIN 'RFC2377' )"
    );

    let reparsed = schema.marshal_as::<crate::definition::NameForm>(&form.unmarshal().unwrap());
    assert_eq!(reparsed.unwrap(), form);
}

#[test]
fn test_sort_options() {
    let schema = Schema::new().expect("Failed to create schema");
    schema.set_options(
        SchemaOptions::new()
            .with_sort_lists(true)
            .with_sort_extensions(true),
    );
    let class = schema
        .marshal_as::<ObjectClass>(
            "( 1.3.6.1.4.1.56521.999.84 NAME 'sortedClass' SUP top STRUCTURAL MAY ( title $ description $ cn ) X-ORIGIN 'example' X-ALPHA 'first' )",
        )
        .unwrap();
    assert_eq!(
        class.unmarshal().unwrap(),
        "( 1.3.6.1.4.1.56521.999.84 NAME 'sortedClass' SUP top STRUCTURAL MAY ( cn $ description $ title ) X-ALPHA 'first' X-ORIGIN 'example' )"
    );
}

#[test]
fn test_custom_stringer() {
    let schema = Schema::new().expect("Failed to create schema");
    let mut cn = schema.attribute_types().get("cn").unwrap();
    cn.set_stringer(|at| format!("{} ({})", at.label(), at.numeric_oid()));
    assert_eq!(cn.unmarshal().unwrap(), "cn (2.5.4.3)");
    assert_eq!(cn.to_string(), "cn (2.5.4.3)");

    cn.set_stringer(|_| String::new());
    assert!(matches!(
        cn.unmarshal(),
        Err(SchemaError::InvalidUnmarshal { .. })
    ));

    cn.clear_stringer();
    assert!(cn.unmarshal().unwrap().starts_with("( 2.5.4.3 NAME ( 'cn' 'commonName' )"));
}

#[test]
fn test_user_data() {
    let schema = Schema::new().expect("Failed to create schema");
    let mut cn = schema.attribute_types().get("cn").unwrap();
    assert!(cn.data().is_none());
    cn.set_data(42_u32);
    assert_eq!(cn.data().and_then(|d| d.downcast_ref::<u32>()), Some(&42));
}

#[test]
fn test_dropped_schema_leaves_definitions_detached() {
    let cn = {
        let schema = Schema::new().expect("Failed to create schema");
        schema.attribute_types().get("cn").unwrap()
    };
    assert!(matches!(cn.unmarshal(), Err(SchemaError::NilSchemaRef)));
    assert!(matches!(cn.validate(), Err(SchemaError::NilSchemaRef)));
    assert!(!cn.compliant());
}

#[test]
fn test_push_and_parse_any() {
    let schema = Schema::new().expect("Failed to create schema");
    let position = schema
        .parse_any(
            DefinitionKind::ObjectClass,
            "( 1.3.6.1.4.1.56521.999.85 NAME 'anyClass' SUP top AUXILIARY MAY cn )",
        )
        .unwrap();
    assert_eq!(position, schema.object_classes().len() - 1);

    let def = schema
        .marshal(
            DefinitionKind::DitStructureRule,
            "( 30 NAME 'anyRule' FORM domainNameForm )",
        )
        .unwrap();
    assert_eq!(def.kind(), DefinitionKind::DitStructureRule);
    assert!(matches!(def, AnyDefinition::DitStructureRule(_)));
    assert_eq!(schema.push_any(def).unwrap(), 0);
    assert_eq!(
        schema.unmarshal(&schema.structure_rules().index(0).unwrap().into()).unwrap(),
        "( 30 NAME 'anyRule' FORM domainNameForm )"
    );
}

#[test]
fn test_wrong_kind_downcast() {
    let schema = Schema::new().expect("Failed to create schema");
    let def = schema
        .marshal(DefinitionKind::NameForm, "( 1.3.6.1.4.1.56521.999.86 NAME 'oddForm' OC device MUST cn )")
        .unwrap();
    assert!(def.downcast::<DitStructureRule>().is_none());
}

#[test]
fn test_content_rule_prohibition_blocks_structure_rule() {
    let schema = Schema::new().expect("Failed to create schema");
    schema
        .parse_content_rule("( 2.5.6.5 NAME 'ouContentRule' AUX dcObject NOT dc )")
        .unwrap();

    let rule = schema
        .marshal_as::<DitStructureRule>("( 20 NAME 'dcOuRule' FORM dcOrganizationalUnitNameForm )")
        .unwrap();
    assert!(rule.validate_in(&schema).is_ok());
    assert!(!rule.compliant_in(&schema));
    assert!(matches!(
        schema.push(rule),
        Err(SchemaError::NonCompliant { .. })
    ));

    let rule = schema
        .marshal_as::<DitStructureRule>("( 21 NAME 'domainRule' FORM domainNameForm )")
        .unwrap();
    assert!(rule.compliant_in(&schema));
}

#[test]
fn test_govern_unknown_rule() {
    let schema = Schema::new().expect("Failed to create schema");
    assert!(matches!(
        schema.govern("99", "dc=example,dc=com", 1),
        Err(SchemaError::NotFound { .. })
    ));
}

#[test]
fn test_independent_schemas_compare_equal() {
    let a = Schema::new().expect("Failed to create schema");
    let b = Schema::new().expect("Failed to create schema");
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));

    b.parse_structure_rule("( 13 NAME 'domainStructureRule' FORM domainNameForm )")
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_definition_kind_serialization() {
    let json = serde_json::to_string(&DefinitionKind::DitStructureRule).unwrap();
    assert_eq!(json, "\"dITStructureRule\"");
    let kind: DefinitionKind = serde_json::from_str("\"nameForm\"").unwrap();
    assert_eq!(kind, DefinitionKind::NameForm);
    assert_eq!(DefinitionKind::ALL.len(), 8);
}
