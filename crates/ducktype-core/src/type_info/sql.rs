use crate::type_info::{TypeDetails, TypeInfo};
use std::fmt::{self, Write};

///
/// Piece
///
/// Pending output of the SQL spelling walk.
///

enum Piece<'a> {
    Type(&'a TypeInfo),
    Text(&'static str),
    Size(u32),
    Field(&'a str),
}

// Writes the engine's SQL spelling of the type, e.g. `DECIMAL(3,2)[]`.
impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Type(self)];

        while let Some(piece) = pending.pop() {
            let info = match piece {
                Piece::Type(info) => info,
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Size(size) => {
                    write!(f, "[{size}]")?;
                    continue;
                }
                Piece::Field(name) => {
                    write_identifier(f, name)?;
                    f.write_char(' ')?;
                    continue;
                }
            };

            // suffixes and closers are pushed before the children they follow
            match info.details() {
                TypeDetails::Primitive(tag) => write!(f, "{tag}")?,
                TypeDetails::Decimal(decimal) => {
                    write!(f, "DECIMAL({},{})", decimal.width(), decimal.scale())?;
                }
                TypeDetails::Enum(members) => {
                    f.write_str("ENUM(")?;
                    for (i, name) in members.names().iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write_string_literal(f, name)?;
                    }
                    f.write_char(')')?;
                }
                TypeDetails::List(list) => {
                    pending.push(Piece::Text("[]"));
                    pending.push(Piece::Type(list.child()));
                }
                TypeDetails::Array(array) => {
                    pending.push(Piece::Size(array.size()));
                    pending.push(Piece::Type(array.child()));
                }
                TypeDetails::Struct(record) => {
                    f.write_str("STRUCT(")?;
                    pending.push(Piece::Text(")"));
                    for (i, field) in record.fields().iter().enumerate().rev() {
                        pending.push(Piece::Type(field.info()));
                        pending.push(Piece::Field(field.name()));
                        if i > 0 {
                            pending.push(Piece::Text(", "));
                        }
                    }
                }
                TypeDetails::Map(map) => {
                    f.write_str("MAP(")?;
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Type(map.value()),
                        Piece::Text(", "),
                        Piece::Type(map.key()),
                    ]);
                }
            }
        }

        Ok(())
    }
}

/// Return whether `name` can be written without quotes.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn write_identifier(f: &mut impl Write, name: &str) -> fmt::Result {
    if is_plain_identifier(name) {
        return f.write_str(name);
    }

    f.write_char('"')?;
    for c in name.chars() {
        if c == '"' {
            f.write_char('"')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

/// Write a single-quoted SQL string literal.
fn write_string_literal(f: &mut impl Write, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in value.chars() {
        if c == '\'' {
            f.write_char('\'')?;
        }
        f.write_char(c)?;
    }
    f.write_char('\'')
}
