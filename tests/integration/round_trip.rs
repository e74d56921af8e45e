//! Marshal and render round trips across all eight definition kinds.

use crate::assert_validation_error;
use crate::common;
use ldap_schema::{
    AttributeType, Definition, DefinitionKind, LdapSyntax, MatchingRule, MatchingRuleUse,
    SchemaError, SchemaOptions, Usage, ValidationError,
};

#[test]
fn test_round_trip_each_kind() {
    let schema = common::schema();
    common::load_governance(&schema);

    let cases = [
        (
            DefinitionKind::LdapSyntax,
            "( 1.3.6.1.4.1.56521.999.2 DESC 'Employee Badge' X-NOT-HUMAN-READABLE 'TRUE' )",
        ),
        (
            DefinitionKind::MatchingRule,
            "( 1.3.6.1.4.1.56521.999.3 NAME 'badgeMatch' DESC 'Badge equality' SYNTAX 1.3.6.1.4.1.1466.115.121.1.40 )",
        ),
        (
            DefinitionKind::AttributeType,
            "( 1.3.6.1.4.1.56521.999.4 NAME ( 'badgeNumber' 'badge' ) DESC 'Employee badge number' EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32} SINGLE-VALUE X-ORIGIN 'Example Corp' )",
        ),
        (
            DefinitionKind::ObjectClass,
            "( 1.3.6.1.4.1.56521.999.5 NAME 'badgeHolder' SUP top AUXILIARY MUST badgeNumber MAY ( description $ seeAlso ) )",
        ),
        (
            DefinitionKind::DitContentRule,
            "( 2.5.6.7 NAME 'orgPersonContentRule' AUX badgeHolder MUST badgeNumber NOT userPassword )",
        ),
        (
            DefinitionKind::NameForm,
            "( 1.3.6.1.4.1.56521.999.6 NAME 'badgeNameForm' OC organizationalPerson MUST badgeNumber MAY cn )",
        ),
        (
            DefinitionKind::DitStructureRule,
            "( 20 NAME 'badgeRule' DESC 'Badge holders under units' FORM badgeNameForm SUP 14 )",
        ),
    ];

    for (kind, raw) in cases {
        let position = schema
            .parse_any(kind, raw)
            .unwrap_or_else(|e| panic!("{kind} failed to parse: {e}"));
        let rendered = match kind {
            DefinitionKind::LdapSyntax => schema.ldap_syntaxes().index(position as isize).unwrap().unmarshal(),
            DefinitionKind::MatchingRule => {
                schema.matching_rules().index(position as isize).unwrap().unmarshal()
            }
            DefinitionKind::AttributeType => {
                schema.attribute_types().index(position as isize).unwrap().unmarshal()
            }
            DefinitionKind::ObjectClass => {
                schema.object_classes().index(position as isize).unwrap().unmarshal()
            }
            DefinitionKind::DitContentRule => {
                schema.content_rules().index(position as isize).unwrap().unmarshal()
            }
            DefinitionKind::NameForm => schema.name_forms().index(position as isize).unwrap().unmarshal(),
            DefinitionKind::DitStructureRule => {
                schema.structure_rules().index(position as isize).unwrap().unmarshal()
            }
            DefinitionKind::MatchingRuleUse => unreachable!(),
        };
        assert_eq!(rendered.unwrap(), raw, "{kind} did not round trip");
    }

    assert!(schema
        .govern("20", "badgeNumber=1234,ou=Sales,dc=example,dc=com", 1)
        .is_err());
}

#[test]
fn test_matching_rule_use_text() {
    let schema = common::schema();
    let mru = schema
        .marshal_as::<MatchingRuleUse>(
            "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn $ description ) )",
        )
        .unwrap();
    assert_eq!(mru.applies().len(), 3);
    assert_eq!(
        mru.unmarshal().unwrap(),
        "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn $ description ) )"
    );

    let bundled = schema.matching_rule_uses().get("caseIgnoreMatch").unwrap();
    assert!(bundled.applies().len() > 3);
}

#[test]
fn test_messy_whitespace_is_normalized() {
    let schema = common::schema();
    let at = schema
        .marshal_as::<AttributeType>(
            "(  1.3.6.1.4.1.56521.999.7\n\tNAME\t'spacedOut'\n   SUP name\n  USAGE   userApplications )",
        )
        .unwrap();
    assert_eq!(
        at.unmarshal().unwrap(),
        "( 1.3.6.1.4.1.56521.999.7 NAME 'spacedOut' SUP name )"
    );
    assert_eq!(at.usage(), Usage::UserApplications);
}

#[test]
fn test_quoted_description_escapes() {
    let schema = common::schema();
    let mr = schema
        .marshal_as::<MatchingRule>(
            r"( 1.3.6.1.4.1.56521.999.8 NAME 'quotedMatch' DESC 'It\27s a back\5Cslash' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        )
        .unwrap();
    assert_eq!(mr.description(), Some(r"It's a back\slash"));
    assert_eq!(
        mr.unmarshal().unwrap(),
        r"( 1.3.6.1.4.1.56521.999.8 NAME 'quotedMatch' DESC 'It\27s a back\5Cslash' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )"
    );
}

#[test]
fn test_marshal_failures() {
    let schema = common::schema();

    assert!(matches!(
        schema.marshal_as::<AttributeType>("   "),
        Err(SchemaError::InvalidMarshal { .. })
    ));
    assert!(matches!(
        schema.marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.9 NAME 'unclosed'"),
        Err(SchemaError::InvalidMarshal { .. })
    ));
    assert!(matches!(
        schema.marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.9 NAME 'x' BOGUS foo SUP name )"),
        Err(SchemaError::InvalidLabel { .. })
    ));
    assert!(matches!(
        schema.marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.9 NAME 'x' SUP noSuchType )"),
        Err(SchemaError::NotFound { .. })
    ));
    assert!(matches!(
        schema.marshal_as::<LdapSyntax>("( 1.3.6.1.4.1.56521.999.9 NAME 'named' DESC 'x' )"),
        Err(SchemaError::InvalidLabel { .. })
    ));
    assert_validation_error!(
        schema.marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.9 NAME 'bad_name' SUP name )"),
        ValidationError::InvalidNames { .. }
    );
    assert_validation_error!(
        schema.marshal_as::<AttributeType>("( 1.3.6.1.4.1.56521.999.9 NAME 'noSyntax' )"),
        ValidationError::InvalidSyntax { .. }
    );
}

#[test]
fn test_usage_is_rendered_only_when_operational() {
    let schema = common::schema();
    let ts = schema.attribute_types().get("createTimestamp").unwrap();
    assert!(ts.usage().is_operational());
    assert!(ts.unmarshal().unwrap().contains("USAGE directoryOperation"));
}

#[test]
fn test_options_from_json_drive_rendering() {
    let options = SchemaOptions::from_json(r#"{"hangingIndents": true}"#).unwrap();
    let schema = common::schema_with(options);
    let top = schema.object_classes().get("top").unwrap();
    assert_eq!(
        top.unmarshal().unwrap(),
        "( 2.5.6.0\n    NAME 'top'\n    ABSTRACT\n    MUST objectClass\n    X-ORIGIN 'RFC4512' )"
    );
}
