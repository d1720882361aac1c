mod reader;
use reader::Reader;

mod scalar;

mod writer;
use writer::Writer;

use crate::{Document, FieldKind, WireMap};

use gridlink_core::{
    schema::{Schema, Table},
    Error, Result,
};

/// Encodes and decodes one table's documents to and from the tag-prefixed
/// wire format.
///
/// A codec is derived once per top-level table and is read-only afterwards;
/// executions receive it as an explicit parameter rather than through any
/// process- or thread-global binding.
#[derive(Debug, Clone)]
pub struct TableCodec {
    message_name: String,
    wire_map: WireMap,
}

impl TableCodec {
    pub fn new(schema: &Schema, table: &Table) -> Result<Self> {
        Ok(Self {
            message_name: table.message_name().to_string(),
            wire_map: WireMap::build(schema, table)?,
        })
    }

    pub fn message_name(&self) -> &str {
        &self.message_name
    }

    pub fn wire_map(&self) -> &WireMap {
        &self.wire_map
    }

    /// Decode a wire buffer into a document.
    ///
    /// Unknown tags are a hard error; the format is closed-schema, not
    /// forward-compatible.
    pub fn decode(&self, bytes: &[u8]) -> Result<Document> {
        decode_message(bytes, &self.wire_map, &self.message_name)
    }

    /// Encode a document back into wire bytes.
    ///
    /// Fields are written in wire-map tag order, not document insertion
    /// order, so output is deterministic for a given document.
    pub fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        let mut writer = Writer::new();
        encode_message(&mut writer, document, &self.wire_map)?;
        Ok(writer.into_bytes())
    }
}

fn decode_message(bytes: &[u8], wire_map: &WireMap, name: &str) -> Result<Document> {
    let mut document = Document::new(name);
    let mut reader = Reader::new(bytes);

    while let Some(tag) = reader.read_tag()? {
        let field = wire_map.field(tag).ok_or_else(|| {
            Error::decode(format!(
                "unexpected tag {tag} while decoding message `{name}`"
            ))
        })?;

        match &field.kind {
            FieldKind::Group(nested) => {
                let sub = reader.read_len_delimited()?;
                let child = decode_message(sub, nested, &field.attribute)?;
                document.add_child(field.attribute.clone(), child);
            }
            FieldKind::Leaf {
                proto_ty,
                runtime_ty,
                repeated,
            } => {
                let value = scalar::read(&mut reader, *proto_ty, runtime_ty)?;
                if *repeated {
                    document.push(&field.attribute, value);
                } else {
                    document.set(field.attribute.clone(), value);
                }
            }
        }
    }

    Ok(document)
}

fn encode_message(writer: &mut Writer, document: &Document, wire_map: &WireMap) -> Result<()> {
    use gridlink_core::stmt::Value;

    for field in wire_map.fields() {
        match &field.kind {
            FieldKind::Group(nested) => {
                for child in document.child_docs(&field.attribute) {
                    let mut sub = Writer::new();
                    encode_message(&mut sub, child, nested)?;
                    writer.write_len_delimited(field.write_tag, &sub.into_bytes());
                }
            }
            FieldKind::Leaf {
                proto_ty,
                repeated,
                ..
            } => match document.property(&field.attribute) {
                Value::Null => {}
                Value::List(items) if *repeated => {
                    for item in items {
                        scalar::write(writer, field.write_tag, *proto_ty, item)?;
                    }
                }
                Value::List(_) => {
                    return Err(Error::schema(format!(
                        "attribute `{}` holds a list but the field is not repeated",
                        field.attribute
                    )));
                }
                value if *repeated => {
                    // A single element of an array attribute.
                    scalar::write(writer, field.write_tag, *proto_ty, value)?;
                }
                value => scalar::write(writer, field.write_tag, *proto_ty, value)?,
            },
        }
    }

    Ok(())
}
