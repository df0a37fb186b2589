use crate::{
    test_support::greeting,
    type_info::TypeInfo,
    value::{Interval, RenderError, RenderErrorKind, Renderer, Value, render},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ducktype_config::RenderConfig;
use ducktype_primitives::TypeTag;
use rust_decimal::Decimal;

fn primitive(tag: TypeTag) -> TypeInfo {
    TypeInfo::primitive(tag).expect("registry primitive")
}

fn sample_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1992, 9, 20)
        .and_then(|date| date.and_hms_nano_opt(11, 30, 0, 123_456_789))
        .expect("valid timestamp")
}

fn render_ok(value: &Value, info: &TypeInfo) -> String {
    render(value, info).unwrap_or_else(|err| panic!("render {info} failed: {err}"))
}

// ---- primitives --------------------------------------------------------

#[test]
fn primitives_render_like_the_engine_cast() {
    let ts = sample_timestamp();
    let cases = [
        (TypeTag::Boolean, Value::Bool(true), "true"),
        (TypeTag::TinyInt, Value::Int(42), "42"),
        (TypeTag::SmallInt, Value::Int(42), "42"),
        (TypeTag::Integer, Value::Int(42), "42"),
        (TypeTag::BigInt, Value::Int(42), "42"),
        (TypeTag::UTinyInt, Value::UInt(43), "43"),
        (TypeTag::USmallInt, Value::UInt(43), "43"),
        (TypeTag::UInteger, Value::UInt(43), "43"),
        (TypeTag::UBigInt, Value::UInt(43), "43"),
        (TypeTag::Float, Value::Float(1.7), "1.7"),
        (TypeTag::Double, Value::Double(1.7), "1.7"),
        (TypeTag::Timestamp, Value::Timestamp(ts), "1992-09-20 11:30:00.123456"),
        (TypeTag::Date, Value::Date(ts.date()), "1992-09-20"),
        (TypeTag::Time, Value::Time(ts.time()), "11:30:00.123456"),
        (TypeTag::Interval, Interval::from_years(1).into(), "1 year"),
        (TypeTag::HugeInt, Value::HugeInt(44), "44"),
        (TypeTag::Varchar, Value::text("hello world"), "hello world"),
        (TypeTag::Blob, Value::Blob(vec![0xAA]), "\\xAA"),
        (TypeTag::TimestampS, Value::Timestamp(ts), "1992-09-20 11:30:00"),
        (TypeTag::TimestampMs, Value::Timestamp(ts), "1992-09-20 11:30:00.123"),
        (TypeTag::TimestampNs, Value::Timestamp(ts), "1992-09-20 11:30:00.123456789"),
        (
            TypeTag::Uuid,
            Value::Uuid(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef),
            "01234567-89ab-cdef-0123-456789abcdef",
        ),
        (TypeTag::TimestampTz, Value::Timestamp(ts), "1992-09-20 11:30:00.123456+00"),
    ];

    assert_eq!(cases.len(), 23);
    for (tag, value, expected) in cases {
        assert_eq!(render_ok(&value, &primitive(tag)), expected, "{tag}");
    }
}

#[test]
fn integer_ranges_follow_the_declared_width() {
    assert_eq!(render_ok(&Value::Int(-128), &primitive(TypeTag::TinyInt)), "-128");

    let err = render(&Value::Int(128), &primitive(TypeTag::TinyInt)).expect_err("overflow");
    assert_eq!(
        err,
        RenderError::ValueOutOfRange {
            tag: TypeTag::TinyInt,
            value: "128".to_string(),
        }
    );

    let err = render(&Value::UInt(70_000), &primitive(TypeTag::USmallInt)).expect_err("overflow");
    assert_eq!(err.kind(), RenderErrorKind::ValueOutOfRange);

    assert_eq!(render_ok(&Value::Int(-5), &primitive(TypeTag::HugeInt)), "-5");
}

#[test]
fn floats_spell_special_values() {
    let double = primitive(TypeTag::Double);

    assert_eq!(render_ok(&Value::Double(f64::NAN), &double), "nan");
    assert_eq!(render_ok(&Value::Double(f64::INFINITY), &double), "inf");
    assert_eq!(render_ok(&Value::Double(f64::NEG_INFINITY), &double), "-inf");
    assert_eq!(render_ok(&Value::Double(2.0), &double), "2");
}

#[test]
fn floats_switch_to_exponent_notation_at_the_extremes() {
    let double = primitive(TypeTag::Double);
    let float = primitive(TypeTag::Float);

    assert_eq!(render_ok(&Value::Double(1e20), &double), "1e+20");
    assert_eq!(render_ok(&Value::Double(-2.5e16), &double), "-2.5e+16");
    assert_eq!(render_ok(&Value::Double(1.5e-7), &double), "1.5e-07");
    assert_eq!(render_ok(&Value::Double(1e-300), &double), "1e-300");
    assert_eq!(render_ok(&Value::Float(1e20), &float), "1e+20");

    assert_eq!(render_ok(&Value::Double(0.0001), &double), "0.0001");
    assert_eq!(render_ok(&Value::Double(123_456.5), &double), "123456.5");
    assert_eq!(render_ok(&Value::Double(1e15), &double), "1000000000000000");
    assert_eq!(render_ok(&Value::Double(0.0), &double), "0");
}

#[test]
fn temporal_fractions_are_trimmed() {
    let time = NaiveTime::from_hms_milli_opt(8, 0, 0, 500).expect("valid time");
    let whole = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");

    assert_eq!(render_ok(&Value::Time(time), &primitive(TypeTag::Time)), "08:00:00.5");
    assert_eq!(render_ok(&Value::Time(whole), &primitive(TypeTag::Time)), "08:00:00");
}

#[test]
fn intervals_combine_calendar_and_clock_parts() {
    let interval = Interval::new(14, 3, 4 * 3_600_000_000 + 5 * 60_000_000 + 6_500_000);

    assert_eq!(interval.to_string(), "1 year 2 months 3 days 04:05:06.5");
    assert_eq!(Interval::ZERO.to_string(), "00:00:00");
    assert_eq!(Interval::from_days(-1).to_string(), "-1 day");
    assert_eq!(Interval::from_micros(-1_000_000).to_string(), "-00:00:01");
}

#[test]
fn blobs_escape_non_printable_and_quote_bytes() {
    let blob = primitive(TypeTag::Blob);

    assert_eq!(render_ok(&Value::Blob(b"ab\x00'".to_vec()), &blob), "ab\\x00\\x27");
}

#[test]
fn timestamptz_shifts_by_configured_offset() {
    let ts = sample_timestamp();
    let info = primitive(TypeTag::TimestampTz);

    let plus = Renderer::new(RenderConfig::default().with_utc_offset_minutes(90));
    let minus = Renderer::new(RenderConfig::default().with_utc_offset_minutes(-300));

    assert_eq!(
        plus.render(&Value::Timestamp(ts), &info).expect("render"),
        "1992-09-20 13:00:00.123456+01:30"
    );
    assert_eq!(
        minus.render(&Value::Timestamp(ts), &info).expect("render"),
        "1992-09-20 06:30:00.123456-05"
    );
}

// ---- decimal -----------------------------------------------------------

#[test]
fn decimals_pad_and_round_to_scale() {
    let info = TypeInfo::decimal(3, 2).expect("DECIMAL(3,2)");

    assert_eq!(render_ok(&Value::Int(4), &info), "4.00");
    assert_eq!(render_ok(&Value::decimal(45, 1), &info), "4.50");
    assert_eq!(render_ok(&Value::decimal(-1235, 3), &info), "-1.24");
    assert_eq!(render_ok(&Value::decimal(1234, 3), &info), "1.23");

    let whole = TypeInfo::decimal(5, 0).expect("DECIMAL(5,0)");
    assert_eq!(render_ok(&Value::Decimal(Decimal::new(125, 1)), &whole), "13");
}

#[test]
fn decimals_reject_integral_overflow() {
    let info = TypeInfo::decimal(3, 2).expect("DECIMAL(3,2)");

    let err = render(&Value::Int(10), &info).expect_err("10 does not fit DECIMAL(3,2)");
    assert_eq!(err.kind(), RenderErrorKind::DecimalOverflow);

    let err = render(&Value::decimal(9995, 3), &info).expect_err("rounds up to 10.00");
    assert_eq!(
        err,
        RenderError::DecimalOverflow {
            value: "9.995".to_string(),
            width: 3,
            scale: 2,
        }
    );
}

// ---- composites --------------------------------------------------------

fn greeting_record_value() -> Value {
    Value::structure([
        ("hello", Value::enum_member("hello")),
        (
            "world",
            Value::list([Value::list([Value::Int(4)])]),
        ),
    ])
}

fn nested_record_value() -> Value {
    Value::structure([
        ("hello", greeting_record_value()),
        ("world", Value::list([Value::Int(4)])),
    ])
}

#[test]
fn composites_render_like_the_engine_cast() {
    let fixture = greeting();

    assert_eq!(render_ok(&Value::Int(4), &fixture.decimal), "4.00");
    assert_eq!(render_ok(&Value::enum_member("hello"), &fixture.greeting), "hello");
    assert_eq!(render_ok(&Value::list([Value::Int(4)]), &fixture.list), "[4.00]");
    assert_eq!(
        render_ok(&Value::list([Value::list([Value::Int(4)])]), &fixture.nested_list),
        "[[4.00]]"
    );
    assert_eq!(
        render_ok(&greeting_record_value(), &fixture.record),
        "{'hello': hello, 'world': [[4.00]]}"
    );
    assert_eq!(
        render_ok(&nested_record_value(), &fixture.nested_record),
        "{'hello': {'hello': hello, 'world': [[4.00]]}, 'world': [4.00]}"
    );
    assert_eq!(
        render_ok(&Value::map([(Value::Int(4), nested_record_value())]), &fixture.map),
        "{4.00={'hello': {'hello': hello, 'world': [[4.00]]}, 'world': [4.00]}}"
    );
}

#[test]
fn null_renders_under_any_descriptor() {
    let fixture = greeting();

    for info in [&fixture.decimal, &fixture.greeting, &fixture.list, &fixture.map] {
        assert_eq!(render_ok(&Value::Null, info), "NULL");
    }
    assert_eq!(
        render_ok(&Value::list([Value::Null, Value::Int(1)]), &fixture.list),
        "[NULL, 1.00]"
    );
    assert_eq!(render_ok(&Value::from(None::<i64>), &fixture.decimal), "NULL");
}

#[test]
fn empty_containers_render_as_brackets() {
    let fixture = greeting();

    assert_eq!(render_ok(&Value::List(Vec::new()), &fixture.list), "[]");
    assert_eq!(render_ok(&Value::Map(Vec::new()), &fixture.map), "{}");
}

#[test]
fn arrays_require_exact_length() {
    let int = primitive(TypeTag::Integer);
    let array = TypeInfo::array(&int, 2).expect("INTEGER[2]");

    assert_eq!(
        render_ok(&Value::list([Value::Int(1), Value::Int(2)]), &array),
        "[1, 2]"
    );
    assert_eq!(
        render(&Value::list([Value::Int(1)]), &array).expect_err("short array"),
        RenderError::ArrayLengthMismatch {
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn struct_fields_must_match_declared_names() {
    let fixture = greeting();
    let swapped = Value::structure([
        ("world", Value::List(Vec::new())),
        ("hello", Value::enum_member("hello")),
    ]);
    let short = Value::structure([("hello", Value::enum_member("hello"))]);

    let err = render(&swapped, &fixture.record).expect_err("field order matters");
    assert_eq!(
        err,
        RenderError::StructFieldMismatch {
            index: 0,
            expected: "hello".to_string(),
            found: "world".to_string(),
        }
    );

    let err = render(&short, &fixture.record).expect_err("missing field");
    assert_eq!(err.kind(), RenderErrorKind::StructFieldMismatch);
}

#[test]
fn struct_field_names_are_quoted() {
    let int = primitive(TypeTag::Integer);
    let info = TypeInfo::structure(&[int], &["it's"]).expect("struct");

    assert_eq!(
        render_ok(&Value::structure([("it's", Value::Int(1))]), &info),
        "{'it''s': 1}"
    );
}

#[test]
fn enum_values_must_be_members() {
    let fixture = greeting();

    let err = render(&Value::enum_member("moon"), &fixture.greeting).expect_err("not a member");
    assert_eq!(
        err,
        RenderError::UnknownEnumMember {
            member: "moon".to_string(),
            expected: "ENUM('hello', 'world')".to_string(),
        }
    );

    let err = render(&Value::text("hello"), &fixture.greeting).expect_err("text is not enum");
    assert_eq!(err.kind(), RenderErrorKind::TypeMismatch);
}

#[test]
fn map_keys_cannot_be_null() {
    let fixture = greeting();
    let value = Value::map([(Value::Null, nested_record_value())]);

    assert_eq!(
        render(&value, &fixture.map).expect_err("null key"),
        RenderError::NullMapKey { index: 0 }
    );
}

#[test]
fn mismatched_values_report_both_sides() {
    let err = render(&Value::text("42"), &primitive(TypeTag::Integer)).expect_err("mismatch");

    assert_eq!(
        err,
        RenderError::TypeMismatch {
            expected: "INTEGER".to_string(),
            found: "Text",
        }
    );
    assert_eq!(err.to_string(), "cannot render Text value as INTEGER");
}

// ---- limits ------------------------------------------------------------

#[test]
fn depth_limit_bounds_nested_values() {
    let fixture = greeting();
    let value = Value::list([Value::list([Value::Int(4)])]);
    let shallow = Renderer::new(RenderConfig::default().with_max_depth(2));
    let deep_enough = Renderer::new(RenderConfig::default().with_max_depth(3));

    assert_eq!(
        shallow.render(&value, &fixture.nested_list).expect_err("too deep"),
        RenderError::DepthLimitExceeded { max_depth: 2 }
    );
    assert_eq!(
        deep_enough.render(&value, &fixture.nested_list).expect("fits"),
        "[[4.00]]"
    );
}

#[test]
fn conforms_to_ignores_depth_limit() {
    let fixture = greeting();
    let mut info = fixture.decimal;
    let mut value = Value::Int(4);
    for _ in 0..100 {
        info = TypeInfo::list(&info);
        value = Value::list([value]);
    }

    assert!(value.conforms_to(&info));
    assert!(render(&value, &info).is_err());
    assert!(!Value::text("x").conforms_to(&info));
}
