//! Common test utilities: schema fixtures and assertion macros.

use ldap_schema::{Schema, SchemaOptions};

/// Name form used by the organizational unit structure rule.
pub const OU_NAME_FORM: &str =
    "( 1.3.6.1.4.1.56521.999.55.11.33 NAME 'ouNameForm' OC organizationalUnit MUST ou )";

/// Root rule for `dc=` naming contexts.
pub const DOMAIN_RULE: &str = "( 13 NAME 'domainStructureRule' FORM domainNameForm )";

/// Organizational units beneath a domain or beneath one another.
pub const OU_RULE: &str = "( 14 NAME 'ouStructureRule' FORM ouNameForm SUP ( 13 14 ) )";

/// Route crate logging to the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fully bootstrapped schema.
pub fn schema() -> Schema {
    init_logging();
    Schema::new().expect("Failed to create schema")
}

/// A bootstrapped schema with the organizational unit name form and the
/// domain/ou structure rules loaded.
pub fn governed_schema() -> Schema {
    let schema = schema();
    load_governance(&schema);
    schema
}

pub fn load_governance(schema: &Schema) {
    schema
        .parse_name_form(OU_NAME_FORM)
        .expect("Failed to load ouNameForm");
    schema
        .parse_structure_rule(DOMAIN_RULE)
        .expect("Failed to load domain rule");
    schema
        .parse_structure_rule(OU_RULE)
        .expect("Failed to load ou rule");
}

/// A bootstrapped schema with the given options.
pub fn schema_with(options: SchemaOptions) -> Schema {
    init_logging();
    Schema::builder()
        .with_options(options)
        .build()
        .expect("Failed to create schema")
}

/// Assert that a result failed with a specific `ValidationError` variant.
#[macro_export]
macro_rules! assert_validation_error {
    ($result:expr, $variant:pat) => {
        match $result {
            Err(err) => match err.as_validation() {
                Some($variant) => {}
                _ => panic!("Expected validation error {}, got {:?}", stringify!($variant), err),
            },
            Ok(_) => panic!(
                "Expected validation error {}, but the call succeeded",
                stringify!($variant)
            ),
        }
    };
}

/// Assert that an error's message contains a substring.
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err,
                $substring
            ),
            Ok(_) => panic!("Expected error containing '{}', but the call succeeded", $substring),
        }
    };
}
