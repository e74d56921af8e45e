use ldap_schema::TokenizedDn;
use ldap_schema::value_objects::{
    NumericOid, escape_qdstring, is_descriptor, is_numeric_oid, unescape_qdstring,
};
use proptest::prelude::*;

fn arb_pair() -> impl Strategy<Value = (String, String)> {
    (
        "[a-z][a-zA-Z0-9]{0,7}",
        "[A-Za-z0-9]([A-Za-z0-9 ,+]{0,10}[A-Za-z0-9])?",
    )
}

fn arb_segments() -> impl Strategy<Value = Vec<Vec<(String, String)>>> {
    prop::collection::vec(prop::collection::vec(arb_pair(), 1..3), 1..6)
}

fn escape_value(value: &str) -> String {
    value.replace(',', "\\,").replace('+', "\\+")
}

fn render(segments: &[Vec<(String, String)>]) -> String {
    segments
        .iter()
        .map(|segment| {
            segment
                .iter()
                .map(|(attr, value)| format!("{attr}={}", escape_value(value)))
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    /// Tokenizing keeps every assertion and renders back to the input.
    #[test]
    fn prop_dn_render_round_trip(segments in arb_segments(), flat_seed in any::<usize>()) {
        let flat = flat_seed % segments.len();
        let dn = render(&segments);

        let tokens = TokenizedDn::parse(&dn, flat as isize).unwrap();
        prop_assert_eq!(tokens.len(), segments.len() - flat);
        prop_assert_eq!(tokens.to_string(), dn);

        let values: Vec<&str> = tokens
            .components()
            .iter()
            .flat_map(|c| c.pairs())
            .map(|p| p.value())
            .collect();
        let expected: Vec<&str> = segments.iter().flatten().map(|(_, v)| v.as_str()).collect();
        prop_assert_eq!(values, expected);
    }

    /// Any depth at or beyond the segment count is rejected.
    #[test]
    fn prop_excess_flat_rejected(segments in arb_segments(), extra in 0usize..4) {
        let dn = render(&segments);
        let flat = (segments.len() + extra) as isize;
        prop_assert!(TokenizedDn::parse(&dn, flat).is_err());
    }

    #[test]
    fn prop_well_formed_oids_accepted(
        root in 0u8..3,
        second in 0u32..40,
        rest in prop::collection::vec(0u32..100_000, 0..6),
    ) {
        let mut oid = format!("{root}.{second}");
        for arc in rest {
            oid.push_str(&format!(".{arc}"));
        }
        prop_assert!(is_numeric_oid(&oid));
        let parsed = NumericOid::new(oid.clone()).unwrap();
        prop_assert_eq!(parsed.as_str(), oid.as_str());
    }

    #[test]
    fn prop_leading_zero_arcs_rejected(arc in 0u32..1000) {
        let oid = format!("2.5.0{arc}");
        prop_assert!(!is_numeric_oid(&oid));
    }

    #[test]
    fn prop_descriptors_accepted(name in "[a-zA-Z]([a-zA-Z0-9]|-[a-zA-Z0-9]){0,15}") {
        prop_assert!(is_descriptor(&name));
    }

    #[test]
    fn prop_non_letter_start_rejected(name in "[0-9_-][a-zA-Z0-9]{0,8}") {
        prop_assert!(!is_descriptor(&name));
    }

    #[test]
    fn prop_qdstring_escape_reverses(value in "[ -~]{0,24}") {
        let escaped = escape_qdstring(&value);
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape_qdstring(&escaped), value);
    }
}
