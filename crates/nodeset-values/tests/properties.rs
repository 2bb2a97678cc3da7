//! Property tests for literal parsing and identifier canonical forms.

use nodeset_values::{
    parse_value, BuiltinTypeTag, Diagnostics, Guid, Identifier, Payload, Surface,
};
use proptest::prelude::*;

fn inline(tag: BuiltinTypeTag, text: &str) -> Payload {
    let mut diags = Diagnostics::new();
    let value = parse_value(tag, Some(Surface::Inline(text)), &mut diags).unwrap();
    assert!(diags.is_empty());
    value.payload().clone()
}

fn guid_groups() -> impl Strategy<Value = [u64; 5]> {
    (
        0u64..=0xFFFF_FFFF,
        0u64..=0xFFFF,
        0u64..=0xFFFF,
        0u64..=0xFFFF,
        0u64..=0xFFFF_FFFF_FFFF,
    )
        .prop_map(|(a, b, c, d, e)| [a, b, c, d, e])
}

proptest! {
    #[test]
    fn int32_literals_parse_exactly(n in any::<i32>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::Int32, &n.to_string()), Payload::Int32(n));
    }

    #[test]
    fn sbyte_literals_parse_exactly(n in any::<i8>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::SByte, &n.to_string()), Payload::SByte(n));
    }

    #[test]
    fn byte_literals_parse_exactly(n in any::<u8>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::Byte, &n.to_string()), Payload::Byte(n));
    }

    #[test]
    fn int16_literals_parse_exactly(n in any::<i16>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::Int16, &n.to_string()), Payload::Int16(n));
    }

    #[test]
    fn uint16_literals_parse_exactly(n in any::<u16>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::UInt16, &n.to_string()), Payload::UInt16(n));
    }

    #[test]
    fn uint32_literals_parse_exactly(n in any::<u32>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::UInt32, &n.to_string()), Payload::UInt32(n));
        prop_assert_eq!(inline(BuiltinTypeTag::StatusCode, &n.to_string()), Payload::UInt32(n));
    }

    #[test]
    fn int64_literals_parse_exactly(n in any::<i64>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::Int64, &n.to_string()), Payload::Int64(n));
    }

    #[test]
    fn floats_round_trip_through_display(x in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(inline(BuiltinTypeTag::Float, &x.to_string()), Payload::Float(x));
    }

    #[test]
    fn uint64_literals_parse_exactly(n in any::<u64>()) {
        prop_assert_eq!(inline(BuiltinTypeTag::UInt64, &format!(" {n}\n")), Payload::UInt64(n));
    }

    #[test]
    fn out_of_range_bytes_are_fatal(n in 256u32..100_000) {
        let mut diags = Diagnostics::new();
        let text = n.to_string();
        prop_assert!(parse_value(BuiltinTypeTag::Byte, Some(Surface::Inline(&text)), &mut diags).is_err());
    }

    #[test]
    fn doubles_round_trip_through_display(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        prop_assert_eq!(inline(BuiltinTypeTag::Double, &x.to_string()), Payload::Double(x));
    }

    #[test]
    fn booleans_are_true_unless_false_appears(s in "[a-zA-Z0-9 ]{0,12}") {
        let expected = !s.to_lowercase().contains("false");
        prop_assert_eq!(inline(BuiltinTypeTag::Boolean, &s), Payload::Boolean(expected));
    }

    #[test]
    fn numeric_identifiers_round_trip(ns in any::<u16>(), i in any::<u32>()) {
        let id = Identifier::numeric(ns, i);
        let text = id.canonical_string();
        prop_assert_eq!(&text, &format!("ns={ns};i={i}"));
        prop_assert_eq!(Identifier::parse(Some(text.as_str())).unwrap(), id);
    }

    #[test]
    fn string_identifiers_round_trip(ns in any::<u16>(), s in "[A-Za-z0-9._/-]{1,24}") {
        let id = Identifier::string(ns, s.clone());
        let parsed: Identifier = id.canonical_string().parse().unwrap();
        prop_assert_eq!(parsed.as_string(), Some(s.as_str()));
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn guid_identifiers_round_trip(ns in any::<u16>(), groups in guid_groups()) {
        let id = Identifier::guid(ns, groups);
        let parsed = Identifier::parse(Some(id.canonical_string().as_str())).unwrap();
        prop_assert_eq!(parsed.to_guid(), Some(Guid(groups)));
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn guid_text_round_trips(groups in guid_groups()) {
        let guid = Guid(groups);
        prop_assert_eq!(Guid::parse(&guid.to_string()).unwrap(), guid);
        prop_assert_eq!(inline(BuiltinTypeTag::Guid, &format!("{{{guid}}}")), Payload::Guid(guid));
        if let Some(uuid) = guid.to_uuid() {
            prop_assert_eq!(Guid::from_uuid(uuid), guid);
        }
    }

    #[test]
    fn numeric_form_wins_over_string(ns in any::<u16>(), i in any::<u32>(), s in "[a-z]{1,8}") {
        let id = Identifier::string(ns, s).with_numeric(i);
        prop_assert_eq!(id, Identifier::numeric(ns, i));
    }
}
