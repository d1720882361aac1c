use super::{Comma, Formatter, ToSql};

use gridlink_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Value::Bool(value) => fmt!(f, if *value { "true" } else { "false" }),
            Value::I32(value) => fmt!(f, value.to_string()),
            Value::I64(value) => fmt!(f, value.to_string()),
            // Debug formatting keeps the decimal point on round values
            Value::F32(value) => fmt!(f, format!("{value:?}")),
            Value::F64(value) => fmt!(f, format!("{value:?}")),
            Value::String(value) => fmt!(f, quoted(value)),
            Value::Timestamp(millis) => fmt!(f, millis.to_string()),
            Value::Decimal(bytes) => match decimal_to_i128(bytes) {
                Some(value) => fmt!(f, value.to_string()),
                None => f.problems.push(format!(
                    "decimal literal of {} bytes cannot appear in a filter query",
                    bytes.len()
                )),
            },
            Value::Bytes(_) => f
                .problems
                .push("binary literal cannot appear in a filter query".to_string()),
            Value::List(values) => {
                let values = Comma(values);
                fmt!(f, "(" values ")");
            }
            Value::Null => f
                .problems
                .push("null literal cannot appear in a comparison; use IS NULL".to_string()),
        }
    }
}

/// Single-quote a string, doubling embedded quotes.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Big-endian two's-complement bytes as a plain integer, when they fit.
fn decimal_to_i128(bytes: &[u8]) -> Option<i128> {
    if bytes.is_empty() || bytes.len() > 16 {
        return None;
    }

    let negative = bytes[0] & 0x80 != 0;
    let mut buf = if negative { [0xffu8; 16] } else { [0u8; 16] };
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    Some(i128::from_be_bytes(buf))
}
