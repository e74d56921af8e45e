//! A schema shared between threads.

use crate::common;
use ldap_schema::{Definition, Schema};
use std::thread;

const WRITERS: usize = 4;
const PER_WRITER: usize = 25;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_schema_is_send_and_sync() {
    assert_send_sync::<Schema>();
    assert_send_sync::<ldap_schema::AttributeType>();
    assert_send_sync::<ldap_schema::Collection<ldap_schema::DitStructureRule>>();
}

#[test]
fn test_concurrent_pushes_and_reads() {
    let schema = common::governed_schema();
    let before = schema.attribute_types().len();

    let writers: Vec<_> = (0..WRITERS)
        .map(|t| {
            let schema = schema.clone();
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    let raw = format!(
                        "( 1.3.6.1.4.1.56521.999.100.{t}.{i} NAME 'thread{t}Attr{i}' SUP name )"
                    );
                    schema
                        .parse_attribute_type(&raw)
                        .expect("Failed to push attribute type");
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..WRITERS)
        .map(|_| {
            let schema = schema.clone();
            thread::spawn(move || {
                for _ in 0..PER_WRITER {
                    let cn = schema.attribute_types().get("cn").expect("bundled cn");
                    assert_eq!(cn.numeric_oid(), "2.5.4.3");
                    schema
                        .govern("14", "ou=People,dc=example,dc=com", 1)
                        .expect("governance should pass");
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread panicked");
    }

    assert_eq!(schema.attribute_types().len(), before + WRITERS * PER_WRITER);
    for t in 0..WRITERS {
        let name = format!("thread{t}Attr{}", PER_WRITER - 1);
        let at = schema.attribute_types().get(&name).expect("pushed by writer");
        assert!(at.validate().is_ok());
    }
}

#[test]
fn test_racing_duplicates_admit_one() {
    let schema = common::schema();
    let before = schema.attribute_types().len();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let schema = schema.clone();
            thread::spawn(move || {
                schema
                    .parse_attribute_type("( 1.3.6.1.4.1.56521.999.101 NAME 'contested' SUP name )")
                    .is_ok()
            })
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .filter(|ok| *ok)
        .count();
    assert_eq!(admitted, 1);
    assert_eq!(schema.attribute_types().len(), before + 1);
}

#[test]
fn test_concurrent_pushes_share_new_matching_rule_use() {
    let schema = common::schema();
    schema
        .parse_matching_rule(
            "( 1.3.6.1.4.1.56521.999.102 NAME 'sharedBadgeMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        )
        .expect("Failed to push matching rule");
    assert!(schema.matching_rule_uses().get("sharedBadgeMatch").is_none());

    let barrier = std::sync::Arc::new(std::sync::Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|t| {
            let schema = schema.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                schema
                    .parse_attribute_type(&format!(
                        "( 1.3.6.1.4.1.56521.999.103.{t} NAME 'sharedBadge{t}' EQUALITY sharedBadgeMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )"
                    ))
                    .expect("Failed to push attribute type");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let shared = schema
        .matching_rule_uses()
        .get("sharedBadgeMatch")
        .expect("use created by the first push");
    assert_eq!(shared.applies().len(), WRITERS);
    let created = schema
        .matching_rule_uses()
        .snapshot()
        .into_iter()
        .filter(|mru| mru.numeric_oid() == "1.3.6.1.4.1.56521.999.102")
        .count();
    assert_eq!(created, 1);
}
