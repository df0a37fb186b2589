#[macro_export]
macro_rules! type_tag_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Invalid, 0, "INVALID", Unsupported),
            (Boolean, 1, "BOOLEAN", Primitive),
            (TinyInt, 2, "TINYINT", Primitive),
            (SmallInt, 3, "SMALLINT", Primitive),
            (Integer, 4, "INTEGER", Primitive),
            (BigInt, 5, "BIGINT", Primitive),
            (UTinyInt, 6, "UTINYINT", Primitive),
            (USmallInt, 7, "USMALLINT", Primitive),
            (UInteger, 8, "UINTEGER", Primitive),
            (UBigInt, 9, "UBIGINT", Primitive),
            (Float, 10, "FLOAT", Primitive),
            (Double, 11, "DOUBLE", Primitive),
            (Timestamp, 12, "TIMESTAMP", Primitive),
            (Date, 13, "DATE", Primitive),
            (Time, 14, "TIME", Primitive),
            (Interval, 15, "INTERVAL", Primitive),
            (HugeInt, 16, "HUGEINT", Primitive),
            (Varchar, 17, "VARCHAR", Primitive),
            (Blob, 18, "BLOB", Primitive),
            (Decimal, 19, "DECIMAL", Composite),
            (TimestampS, 20, "TIMESTAMP_S", Primitive),
            (TimestampMs, 21, "TIMESTAMP_MS", Primitive),
            (TimestampNs, 22, "TIMESTAMP_NS", Primitive),
            (Enum, 23, "ENUM", Composite),
            (List, 24, "LIST", Composite),
            (Struct, 25, "STRUCT", Composite),
            (Map, 26, "MAP", Composite),
            (Uuid, 27, "UUID", Primitive),
            (Union, 28, "UNION", Unsupported),
            (Bit, 29, "BIT", Unsupported),
            (TimeTz, 30, "TIMETZ", Unsupported),
            (TimestampTz, 31, "TIMESTAMPTZ", Primitive),
            (UHugeInt, 32, "UHUGEINT", Unsupported),
            (Array, 33, "ARRAY", Composite),
            (Any, 34, "ANY", Unsupported),
            (VarInt, 35, "VARINT", Unsupported),
            (SqlNull, 36, "SQLNULL", Unsupported),
        }
    };
}

#[macro_export]
macro_rules! type_tag_registry {
    ($macro:ident) => {
        $crate::type_tag_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::type_tag_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $tag:expr; @entries $( ($variant:ident, $code:literal, $name:literal, $class:ident) ),* $(,)? ) => {
        match $tag {
            $(
                $crate::TypeTag::$variant => $crate::TypeTagMetadata {
                    code: $code,
                    name: $name,
                    class: $crate::TypeTagClass::$class,
                },
            )*
        }
    };
}

macro_rules! from_code_from_registry {
    ( @args $code:expr; @entries $( ($variant:ident, $tag_code:literal, $name:literal, $class:ident) ),* $(,)? ) => {
        match $code {
            $( $tag_code => Some($crate::TypeTag::$variant), )*
            _ => None,
        }
    };
}

macro_rules! all_tags_from_registry {
    ( @entries $( ($variant:ident, $code:literal, $name:literal, $class:ident) ),* $(,)? ) => {
        [ $( $crate::TypeTag::$variant ),* ]
    };
}
