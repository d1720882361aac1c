use super::{
    reader::{decode_zigzag64, Reader},
    writer::{encode_zigzag64, Writer},
};

use gridlink_core::{schema::ProtoType, stmt, stmt::Value, Error, Result};

/// Read one scalar off the wire and coerce it to the declared runtime type.
pub(super) fn read(
    reader: &mut Reader<'_>,
    proto_ty: ProtoType,
    runtime_ty: &stmt::Type,
) -> Result<Value> {
    let raw = match proto_ty {
        ProtoType::Double => Value::F64(f64::from_bits(reader.read_fixed64()?)),
        ProtoType::Float => Value::F32(f32::from_bits(reader.read_fixed32()?)),
        ProtoType::Bool => Value::Bool(reader.read_varint()? != 0),
        ProtoType::String => {
            let bytes = reader.read_len_delimited()?;
            let s = std::str::from_utf8(bytes)
                .map_err(|_| Error::decode("string field is not valid UTF-8"))?;
            Value::String(s.to_string())
        }
        ProtoType::Bytes => Value::Bytes(reader.read_len_delimited()?.to_vec()),
        ProtoType::Int32 | ProtoType::Int64 => Value::I64(reader.read_varint()? as i64),
        ProtoType::UInt32 | ProtoType::UInt64 => {
            let value = reader.read_varint()?;
            if value > i64::MAX as u64 {
                return Err(Error::decode("unsigned value overflows i64"));
            }
            Value::I64(value as i64)
        }
        ProtoType::SInt32 | ProtoType::SInt64 => {
            Value::I64(decode_zigzag64(reader.read_varint()?))
        }
        ProtoType::Fixed32 => Value::I64(i64::from(reader.read_fixed32()?)),
        ProtoType::SFixed32 => Value::I64(i64::from(reader.read_fixed32()? as i32)),
        ProtoType::Fixed64 | ProtoType::SFixed64 => Value::I64(reader.read_fixed64()? as i64),
    };

    coerce(raw, runtime_ty)
}

/// Coerce a freshly-read wire value to the leaf's runtime type.
fn coerce(raw: Value, runtime_ty: &stmt::Type) -> Result<Value> {
    use stmt::Type;

    Ok(match (raw, runtime_ty) {
        (Value::Bool(v), Type::Bool) => Value::Bool(v),
        (Value::F32(v), Type::F32) => Value::F32(v),
        (Value::F64(v), Type::F64) => Value::F64(v),
        (Value::String(v), Type::String) => Value::String(v),
        (Value::I64(v), Type::I64) => Value::I64(v),
        (Value::I64(v), Type::I32) => {
            let v = i32::try_from(v)
                .map_err(|_| Error::decode(format!("value {v} does not fit in i32")))?;
            Value::I32(v)
        }
        (Value::I64(v), Type::Timestamp) => Value::Timestamp(v),
        (Value::Bytes(v), Type::Bytes) => Value::Bytes(v),
        (Value::Bytes(v), Type::String) => {
            // Large character objects travel as byte streams.
            let s = String::from_utf8(v)
                .map_err(|_| Error::decode("character object is not valid UTF-8"))?;
            Value::String(s)
        }
        (Value::Bytes(v), Type::Timestamp) => {
            let bytes: [u8; 8] = v.as_slice().try_into().map_err(|_| {
                Error::decode(format!("timestamp field holds {} bytes, expected 8", v.len()))
            })?;
            Value::Timestamp(i64::from_be_bytes(bytes))
        }
        (Value::Bytes(v), Type::Decimal) => Value::Decimal(v),
        (raw, runtime_ty) => {
            return Err(Error::schema(format!(
                "no mapping from wire value {raw:?} to runtime type {runtime_ty:?}"
            )));
        }
    })
}

/// Write one runtime value with the leaf's declared wire encoding.
pub(super) fn write(
    writer: &mut Writer,
    field_number: u32,
    proto_ty: ProtoType,
    value: &Value,
) -> Result<()> {
    match proto_ty {
        ProtoType::Double => writer.write_fixed64(field_number, expect_f64(value)?.to_bits()),
        ProtoType::Float => writer.write_fixed32(field_number, expect_f32(value)?.to_bits()),
        ProtoType::Bool => match value {
            Value::Bool(v) => writer.write_varint_field(field_number, u64::from(*v)),
            _ => return Err(type_mismatch(proto_ty, value)),
        },
        ProtoType::String => match value {
            Value::String(v) => writer.write_len_delimited(field_number, v.as_bytes()),
            _ => return Err(type_mismatch(proto_ty, value)),
        },
        ProtoType::Bytes => match value {
            Value::Bytes(v) => writer.write_len_delimited(field_number, v),
            Value::Decimal(v) => writer.write_len_delimited(field_number, v),
            Value::Timestamp(millis) => {
                writer.write_len_delimited(field_number, &millis.to_be_bytes())
            }
            Value::String(v) => writer.write_len_delimited(field_number, v.as_bytes()),
            _ => return Err(type_mismatch(proto_ty, value)),
        },
        ProtoType::Int32 | ProtoType::Int64 => {
            writer.write_varint_field(field_number, expect_i64(value)? as u64)
        }
        ProtoType::UInt32 | ProtoType::UInt64 => {
            let v = expect_i64(value)?;
            if v < 0 {
                return Err(Error::schema(format!(
                    "negative value {v} for unsigned wire field {field_number}"
                )));
            }
            writer.write_varint_field(field_number, v as u64)
        }
        ProtoType::SInt32 | ProtoType::SInt64 => {
            writer.write_varint_field(field_number, encode_zigzag64(expect_i64(value)?))
        }
        ProtoType::Fixed32 | ProtoType::SFixed32 => {
            let v = expect_i64(value)?;
            let v = i32::try_from(v)
                .map_err(|_| Error::schema(format!("value {v} does not fit in 32 bits")))?;
            writer.write_fixed32(field_number, v as u32)
        }
        ProtoType::Fixed64 | ProtoType::SFixed64 => match value {
            Value::Timestamp(millis) => writer.write_fixed64(field_number, *millis as u64),
            _ => writer.write_fixed64(field_number, expect_i64(value)? as u64),
        },
    }

    Ok(())
}

fn expect_i64(value: &Value) -> Result<i64> {
    match value {
        Value::I32(v) => Ok(i64::from(*v)),
        Value::I64(v) => Ok(*v),
        _ => Err(Error::schema(format!(
            "expected an integer value, found {value:?}"
        ))),
    }
}

fn expect_f32(value: &Value) -> Result<f32> {
    match value {
        Value::F32(v) => Ok(*v),
        _ => Err(Error::schema(format!(
            "expected a 32-bit float value, found {value:?}"
        ))),
    }
}

fn expect_f64(value: &Value) -> Result<f64> {
    match value {
        Value::F64(v) => Ok(*v),
        _ => Err(Error::schema(format!(
            "expected a 64-bit float value, found {value:?}"
        ))),
    }
}

fn type_mismatch(proto_ty: ProtoType, value: &Value) -> Error {
    Error::schema(format!(
        "no mapping from runtime value {value:?} to wire type {proto_ty:?}"
    ))
}
