use crate::{ALL_TYPE_TAGS, TypeTag, TypeTagClass, composite_tags, primitive_tags};
use std::collections::BTreeSet;

#[test]
fn registry_codes_match_discriminants() {
    for tag in ALL_TYPE_TAGS {
        assert_eq!(tag.code(), tag as u8, "wire code drifted for {tag:?}");
        assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
    }
}

#[test]
fn registry_codes_and_names_are_unique() {
    let codes: BTreeSet<u8> = ALL_TYPE_TAGS.iter().map(|tag| tag.code()).collect();
    let names: BTreeSet<&str> = ALL_TYPE_TAGS.iter().map(|tag| tag.name()).collect();

    assert_eq!(codes.len(), ALL_TYPE_TAGS.len());
    assert_eq!(names.len(), ALL_TYPE_TAGS.len());
}

#[test]
fn from_code_rejects_unknown_ids() {
    assert_eq!(TypeTag::from_code(37), None);
    assert_eq!(TypeTag::from_code(u8::MAX), None);
}

#[test]
fn from_name_is_case_insensitive() {
    assert_eq!(TypeTag::from_name("timestamptz"), Some(TypeTag::TimestampTz));
    assert_eq!(TypeTag::from_name("VARCHAR"), Some(TypeTag::Varchar));
    assert_eq!(TypeTag::from_name("Decimal"), Some(TypeTag::Decimal));
    assert_eq!(TypeTag::from_name("TEXT"), None);
}

#[test]
fn composite_tags_are_exactly_the_parameterized_kinds() {
    let composite: BTreeSet<TypeTag> = composite_tags().collect();

    assert_eq!(
        composite,
        BTreeSet::from([
            TypeTag::Decimal,
            TypeTag::Enum,
            TypeTag::List,
            TypeTag::Struct,
            TypeTag::Map,
            TypeTag::Array,
        ])
    );
}

#[test]
fn primitive_tags_exclude_composite_and_unsupported() {
    for tag in primitive_tags() {
        assert_eq!(tag.class(), TypeTagClass::Primitive);
        assert!(tag.is_supported());
        assert!(!tag.is_composite());
    }

    assert_eq!(primitive_tags().count(), 23);
    assert!(!TypeTag::Union.is_supported());
    assert!(!TypeTag::Invalid.is_supported());
    assert!(!TypeTag::UHugeInt.is_primitive());
}

#[test]
fn display_uses_canonical_name() {
    assert_eq!(TypeTag::TimestampTz.to_string(), "TIMESTAMPTZ");
    assert_eq!(TypeTag::TimeTz.to_string(), "TIMETZ");
    assert_eq!(TypeTag::UTinyInt.to_string(), "UTINYINT");
}

#[test]
fn fractional_digits_follow_timestamp_precision() {
    assert_eq!(TypeTag::TimestampS.fractional_digits(), Some(0));
    assert_eq!(TypeTag::TimestampMs.fractional_digits(), Some(3));
    assert_eq!(TypeTag::Timestamp.fractional_digits(), Some(6));
    assert_eq!(TypeTag::TimestampNs.fractional_digits(), Some(9));
    assert_eq!(TypeTag::Date.fractional_digits(), None);
}
