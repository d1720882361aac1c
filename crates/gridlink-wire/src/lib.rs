mod codec;
pub use codec::TableCodec;

mod document;
pub use document::Document;

mod wire_map;
pub use wire_map::{attribute_path, group_attribute, FieldKind, WireField, WireMap};
