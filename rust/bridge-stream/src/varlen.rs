//! Length-prefixed byte blobs and UTF-8 strings.
//!
//! Both are laid out as a 32-bit little-endian byte count followed by the raw
//! payload, with no padding and no terminator.

use tracing::debug;

use crate::error::{Result, StreamError};
use crate::primitive::INT_SIZE;
use crate::stream::Stream;

/// Width of every length and element-count prefix.
pub const LEN_PREFIX_SIZE: usize = INT_SIZE;
/// Largest length or count a prefix can carry.
pub const MAX_LEN: usize = i32::MAX as usize;

impl Stream {
    /// Append a length or count prefix. Nothing is written when `len` does not
    /// fit in an `i32`.
    pub(crate) fn write_len(&mut self, len: usize) -> Result<()> {
        let prefix = i32::try_from(len).map_err(|_| {
            debug!(len, "length exceeds 32-bit prefix");
            StreamError::LengthOverflow(len)
        })?;
        self.write_int(prefix);
        Ok(())
    }

    /// Consume a length or count prefix. A negative prefix is rejected and
    /// left unread.
    pub(crate) fn read_len(&mut self) -> Result<usize> {
        let start = self.position();
        let raw = self.read_int()?;
        usize::try_from(raw).map_err(|_| {
            self.rewind(start);
            debug!(len = raw, "negative length prefix");
            StreamError::NegativeLength(raw)
        })
    }

    /// Consume a prefixed payload as a borrowed slice. On failure the cursor
    /// is back where it started.
    fn take_prefixed(&mut self) -> Result<&[u8]> {
        let start = self.position();
        let len = self.read_len()?;
        let remaining = self.remaining();
        if len > remaining {
            self.rewind(start);
            debug!(needed = len, remaining, "prefixed payload truncated");
            return Err(StreamError::Truncated { needed: len, remaining });
        }
        self.take_raw(len)
    }

    /// Append `data` as a length-prefixed blob.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.write_len(data.len())?;
        self.push_raw(data);
        Ok(())
    }

    /// Consume a length-prefixed blob.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.take_prefixed().map(<[u8]>::to_vec)
    }

    /// Consume a length-prefixed blob without decoding it and return its
    /// payload length. Lets a reader step over values it does not understand.
    pub fn skip_bytes(&mut self) -> Result<usize> {
        self.take_prefixed().map(<[u8]>::len)
    }

    /// Append `value` as its UTF-8 byte length followed by the bytes.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Consume a length-prefixed UTF-8 string.
    ///
    /// Malformed UTF-8 fails with [`StreamError::InvalidUtf8`] after the
    /// declared payload has been consumed, so the next read starts at the
    /// following value.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.take_prefixed()?;
        std::str::from_utf8(bytes).map(str::to_owned).map_err(|source| {
            debug!(len = bytes.len(), %source, "string payload is not valid UTF-8");
            StreamError::InvalidUtf8 { len: bytes.len(), source }
        })
    }
}
