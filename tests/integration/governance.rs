//! DN governance by DIT structure rule chains.

use crate::common::{self, OU_NAME_FORM};
use crate::{assert_error_message_contains, assert_validation_error};
use ldap_schema::{
    Definition, DefinitionKind, DitStructureRule, Schema, SchemaError, SuperRule, TokenizedDn,
    ValidationError,
};

struct GovernanceCase {
    dn: &'static str,
    flat: isize,
    rule: &'static str,
    pass: bool,
}

const CASES: &[GovernanceCase] = &[
    GovernanceCase {
        dn: "dc=example,dc=com",
        flat: 1,
        rule: "13",
        pass: true,
    },
    GovernanceCase {
        dn: "o=example",
        flat: 1,
        rule: "13",
        pass: false,
    },
    GovernanceCase {
        dn: "ou=People,dc=example,dc=com",
        flat: 1,
        rule: "14",
        pass: true,
    },
    GovernanceCase {
        dn: "ou=People,dc=example,dc=com",
        flat: -1,
        rule: "13",
        pass: false,
    },
    GovernanceCase {
        dn: "ou=Employees,ou=People,dc=example,dc=com",
        flat: 1,
        rule: "14",
        pass: true,
    },
    GovernanceCase {
        dn: "x=People,dc=example,dc=com",
        flat: 1,
        rule: "14",
        pass: false,
    },
    GovernanceCase {
        dn: "ou=People+ou=Employees,dc=example,dc=com",
        flat: 1,
        rule: "14",
        pass: true,
    },
    GovernanceCase {
        dn: "ou=People+cn=Employees,dc=example,dc=com",
        flat: 1,
        rule: "14",
        pass: false,
    },
    GovernanceCase {
        dn: "ou=Employees,ou=People,dc=example,dc=com",
        flat: 1,
        rule: "13",
        pass: false,
    },
];

#[test]
fn test_governance_table() {
    let schema = common::governed_schema();
    for (i, case) in CASES.iter().enumerate() {
        let result = schema.govern(case.rule, case.dn, case.flat);
        assert_eq!(
            result.is_ok(),
            case.pass,
            "case {i}: govern('{}', {}, rule {}) returned {result:?}",
            case.dn,
            case.flat,
            case.rule
        );
    }
}

#[test]
fn test_governance_through_definition() {
    let schema = common::governed_schema();
    let rule = schema.structure_rules().get("ouStructureRule").unwrap();
    assert!(rule.govern("ou=People,dc=example,dc=com", 1).is_ok());
    assert_eq!(
        rule.super_rules(),
        &[
            SuperRule::Rule(schema.structure_rules().contains("13").unwrap()),
            SuperRule::Itself,
        ]
    );
    assert_eq!(
        rule.unmarshal().unwrap(),
        "( 14 NAME 'ouStructureRule' FORM ouNameForm SUP ( 13 14 ) )"
    );
}

#[test]
fn test_governance_errors() {
    let schema = common::governed_schema();

    assert!(matches!(
        schema.govern("14", "x=People,dc=example,dc=com", 1),
        Err(SchemaError::NotFound {
            kind: DefinitionKind::AttributeType,
            ..
        })
    ));
    assert!(matches!(
        schema.govern("13", "bogusAttr=x,dc=example,dc=com", 0),
        Err(SchemaError::NotFound { ref term, .. }) if term == "bogusAttr"
    ));
    assert_validation_error!(
        schema.govern("14", "description=People,dc=example,dc=com", 1),
        ValidationError::NamingViolationUnsanctioned { .. }
    );
    assert_validation_error!(
        schema.govern("14", "ou=People+cn=Employees,dc=example,dc=com", 1),
        ValidationError::NamingViolationBadClassAttr { .. }
    );
    assert_validation_error!(
        schema.govern("13", "o=example", 1),
        ValidationError::InvalidDnOrFlatInt { .. }
    );
    assert_validation_error!(
        schema.govern("13", "o=example,dc=com", 0),
        ValidationError::NamingViolationUnsanctioned { .. }
    );
    assert_error_message_contains!(schema.govern("13", "dc=example", 3), "flat 3");
}

#[test]
fn test_missing_must_in_rdn() {
    let schema = common::governed_schema();
    schema
        .parse_name_form(
            "( 1.3.6.1.4.1.56521.999.55.11.34 NAME 'ouDescNameForm' OC organizationalUnit MUST ou MAY description )",
        )
        .unwrap();
    schema
        .parse_structure_rule("( 15 NAME 'ouDescRule' FORM ouDescNameForm SUP 13 )")
        .unwrap();

    assert!(schema.govern("15", "ou=Sales+description=West,dc=example,dc=com", 1).is_ok());
    assert_validation_error!(
        schema.govern("15", "description=West,dc=example,dc=com", 1),
        ValidationError::NamingViolationMissingMust { .. }
    );
}

#[test]
fn test_self_reference_terminates() {
    let schema = common::governed_schema();
    let deep = "ou=a,ou=b,ou=c,ou=d,ou=e,ou=f,ou=g,dc=example,dc=com";
    assert!(schema.govern("14", deep, 1).is_ok());

    let bad_root = "ou=a,ou=b,ou=c,o=example";
    assert!(schema.govern("14", bad_root, 0).is_err());
}

#[test]
fn test_missing_superior_is_reported() {
    let schema = common::governed_schema();
    schema
        .parse_structure_rule("( 15 NAME 'leafRule' FORM ouNameForm SUP 14 )")
        .unwrap();
    let leaf_rule: DitStructureRule = schema.structure_rules().get("leafRule").unwrap();

    // Same bundled data and name form, but only the domain rule.
    let sparse = common::schema();
    sparse.parse_name_form(OU_NAME_FORM).unwrap();
    sparse.parse_structure_rule(common::DOMAIN_RULE).unwrap();

    assert_validation_error!(
        leaf_rule.govern_in(&sparse, "ou=People,dc=example,dc=com", 1),
        ValidationError::NamingViolationChildlessSuperior { .. }
    );
    assert!(leaf_rule.govern("ou=People,ou=Staff,dc=example,dc=com", 1).is_ok());
}

#[test]
fn test_rule_without_superiors_checks_leaf_only() {
    let schema: Schema = common::governed_schema();
    assert!(schema.govern("13", "dc=www,dc=example,dc=com", 0).is_ok());
    assert!(schema.govern("13", "dc=www,ou=Sales,dc=com", 0).is_ok());
}

#[test]
fn test_tokenized_dn_shape() {
    let dn = TokenizedDn::parse("ou=Employees,ou=People,dc=example,dc=com", 1).unwrap();
    let rendered: Vec<String> = dn.components().iter().map(|c| c.to_string()).collect();
    assert_eq!(rendered, vec!["ou=Employees", "ou=People", "dc=example,dc=com"]);
    assert_eq!(dn.leaf().unwrap().pairs().next().unwrap().value(), "Employees");
}

#[test]
fn test_named_object_class_of_rule() {
    let schema = common::governed_schema();
    let rule = schema.structure_rules().get("ouStructureRule").unwrap();
    let class = rule.named_object_class().unwrap();
    assert_eq!(schema.object_classes().contains("organizationalUnit"), Some(class));
    assert_eq!(
        rule.sub_rules().unwrap(),
        vec![schema.structure_rules().contains("14").unwrap()]
    );
}

#[test]
fn test_bundled_uddi_chain() {
    let schema = Schema::new().expect("Failed to create schema");
    let address = "uddiUUID=addr,uddiUUID=contact,uddiBusinessKey=biz,dc=example,dc=com";
    assert!(schema.govern("3", address, 1).is_ok());
    assert!(schema.govern("uddiAddressStructureRule", address, 1).is_ok());

    assert_validation_error!(
        schema.govern("3", "uddiUUID=addr,uddiBusinessKey=biz,dc=example,dc=com", 1),
        ValidationError::NamingViolationBadClassAttr { .. }
    );
    assert!(schema.govern("7", "uddiTModelKey=tm,dc=example,dc=com", 1).is_ok());
}
