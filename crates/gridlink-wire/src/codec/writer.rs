use gridlink_core::schema::{
    WIRETYPE_FIXED32, WIRETYPE_FIXED64, WIRETYPE_LENGTH_DELIMITED, WIRETYPE_VARINT,
};

use bytes::BufMut;

/// Append-only wire buffer.
pub(super) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(super) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub(super) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub(super) fn write_varint_field(&mut self, field_number: u32, value: u64) {
        self.write_key(field_number, WIRETYPE_VARINT);
        self.write_varint(value);
    }

    pub(super) fn write_fixed32(&mut self, field_number: u32, value: u32) {
        self.write_key(field_number, WIRETYPE_FIXED32);
        self.buf.put_u32_le(value);
    }

    pub(super) fn write_fixed64(&mut self, field_number: u32, value: u64) {
        self.write_key(field_number, WIRETYPE_FIXED64);
        self.buf.put_u64_le(value);
    }

    pub(super) fn write_len_delimited(&mut self, field_number: u32, bytes: &[u8]) {
        self.write_key(field_number, WIRETYPE_LENGTH_DELIMITED);
        self.write_varint(bytes.len() as u64);
        self.buf.put_slice(bytes);
    }

    fn write_key(&mut self, field_number: u32, wire_type: u32) {
        self.write_varint(u64::from(field_number << 3 | wire_type));
    }

    fn write_varint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.buf.put_u8((value as u8 & 0x7f) | 0x80);
            value >>= 7;
        }
        self.buf.put_u8(value as u8);
    }
}

/// Zig-zag encode a signed value.
pub(super) fn encode_zigzag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}
