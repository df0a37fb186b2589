use crate::type_info::TypeInfo;
use ducktype_primitives::primitive_tags;
use proptest::prelude::*;

///
/// Greeting
///
/// Descriptor set shared by tests: a DECIMAL(3,2), a two-member enum and
/// the lists/structs/map nested on top of them.
///

pub(crate) struct Greeting {
    pub(crate) decimal: TypeInfo,
    pub(crate) greeting: TypeInfo,
    pub(crate) list: TypeInfo,
    pub(crate) nested_list: TypeInfo,
    pub(crate) record: TypeInfo,
    pub(crate) nested_record: TypeInfo,
    pub(crate) map: TypeInfo,
}

pub(crate) fn greeting() -> Greeting {
    let names = ["hello", "world"];

    let decimal = TypeInfo::decimal(3, 2).expect("DECIMAL(3,2) is valid");
    let greeting = TypeInfo::enumeration(&names).expect("greeting enum is valid");
    let list = TypeInfo::list(&decimal);
    let nested_list = TypeInfo::list(&list);
    let record = TypeInfo::structure(&[greeting.clone(), nested_list.clone()], &names)
        .expect("record struct is valid");
    let nested_record = TypeInfo::structure(&[record.clone(), list.clone()], &names)
        .expect("nested struct is valid");
    let map = TypeInfo::map(&decimal, &nested_record);

    Greeting {
        decimal,
        greeting,
        list,
        nested_list,
        record,
        nested_record,
        map,
    }
}

pub(crate) fn arb_leaf_type_info() -> impl Strategy<Value = TypeInfo> {
    let primitives: Vec<_> = primitive_tags().collect();

    prop_oneof![
        prop::sample::select(primitives)
            .prop_map(|tag| TypeInfo::primitive(tag).expect("registry primitive")),
        (1u8..=38)
            .prop_flat_map(|width| (Just(width), 0..=width))
            .prop_map(|(width, scale)| TypeInfo::decimal(width, scale).expect("bounded decimal")),
        prop::collection::btree_set("[a-z]{1,6}", 1..5).prop_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            TypeInfo::enumeration(&names).expect("unique enum members")
        }),
    ]
}

pub(crate) fn arb_type_info() -> impl Strategy<Value = TypeInfo> {
    arb_leaf_type_info().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|child| TypeInfo::list(&child)),
            (inner.clone(), 1u32..8)
                .prop_map(|(child, size)| TypeInfo::array(&child, size).expect("bounded size")),
            (inner.clone(), inner.clone()).prop_map(|(key, value)| TypeInfo::map(&key, &value)),
            prop::collection::vec(inner, 1..4).prop_map(|children| {
                let names: Vec<String> = (0..children.len()).map(|i| format!("f{i}")).collect();
                TypeInfo::structure(&children, &names).expect("matching arity")
            }),
        ]
    })
}
