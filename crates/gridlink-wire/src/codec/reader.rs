use gridlink_core::{Error, Result};

use bytes::Buf;

/// Cursor over a wire buffer.
///
/// All reads bound-check against the remaining slice; running out of bytes
/// mid-value is a framing error, while a clean end of buffer terminates the
/// tag loop normally.
pub(super) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub(super) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Read the next field tag, or `None` at end of buffer.
    pub(super) fn read_tag(&mut self) -> Result<Option<u32>> {
        if !self.buf.has_remaining() {
            return Ok(None);
        }

        let tag = self.read_varint()?;
        if tag == 0 || tag > u32::MAX as u64 {
            return Err(Error::decode(format!("invalid field tag {tag}")));
        }
        Ok(Some(tag as u32))
    }

    pub(super) fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        let mut shift = 0u32;

        loop {
            if !self.buf.has_remaining() {
                return Err(Error::decode("truncated varint"));
            }
            let byte = self.buf.get_u8();
            if shift == 63 && byte > 1 {
                return Err(Error::decode("varint overflows 64 bits"));
            }
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift >= 64 {
                return Err(Error::decode("varint overflows 64 bits"));
            }
        }
    }

    pub(super) fn read_fixed32(&mut self) -> Result<u32> {
        if self.buf.remaining() < 4 {
            return Err(Error::decode("truncated fixed32 value"));
        }
        Ok(self.buf.get_u32_le())
    }

    pub(super) fn read_fixed64(&mut self) -> Result<u64> {
        if self.buf.remaining() < 8 {
            return Err(Error::decode("truncated fixed64 value"));
        }
        Ok(self.buf.get_u64_le())
    }

    /// Read a length-prefixed byte slice.
    pub(super) fn read_len_delimited(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint()?;
        let len = usize::try_from(len)
            .map_err(|_| Error::decode(format!("length prefix {len} out of range")))?;

        if self.buf.len() < len {
            return Err(Error::decode(format!(
                "length prefix {len} overruns buffer ({} bytes remain)",
                self.buf.len()
            )));
        }

        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }
}

/// Undo zig-zag encoding of a signed value.
pub(super) fn decode_zigzag64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
