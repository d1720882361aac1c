/// The declared wire type of a leaf field.
///
/// Every leaf column carries exactly one of these, fixed by the schema; the
/// codec never infers an encoding from the data it sees. The variants mirror
/// the scalar types of the store's tag-prefixed wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoType {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    String,
    Bytes,
}

/// Varint-encoded value.
pub const WIRETYPE_VARINT: u32 = 0;

/// Eight bytes, little endian.
pub const WIRETYPE_FIXED64: u32 = 1;

/// Varint length followed by that many bytes.
pub const WIRETYPE_LENGTH_DELIMITED: u32 = 2;

/// Four bytes, little endian.
pub const WIRETYPE_FIXED32: u32 = 5;

impl ProtoType {
    /// The low three bits of the tag for values of this type.
    pub fn wire_type(self) -> u32 {
        match self {
            Self::Int32
            | Self::Int64
            | Self::UInt32
            | Self::UInt64
            | Self::SInt32
            | Self::SInt64
            | Self::Bool => WIRETYPE_VARINT,
            Self::Double | Self::Fixed64 | Self::SFixed64 => WIRETYPE_FIXED64,
            Self::String | Self::Bytes => WIRETYPE_LENGTH_DELIMITED,
            Self::Float | Self::Fixed32 | Self::SFixed32 => WIRETYPE_FIXED32,
        }
    }

    /// The full read tag for a field number of this type.
    pub fn make_tag(self, field_number: u32) -> u32 {
        field_number << 3 | self.wire_type()
    }
}

/// Read tag for a nested message field.
pub fn nested_tag(field_number: u32) -> u32 {
    field_number << 3 | WIRETYPE_LENGTH_DELIMITED
}
