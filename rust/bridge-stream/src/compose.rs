//! Nested streams and self-serializing composite values.
//!
//! A nested stream is written exactly like a byte blob: its unread byte count
//! followed by those bytes. Composites are always written through a fresh
//! nested stream, so every composite is self-delimited on the wire and a
//! reader that does not know its layout can still step over it with
//! [`Stream::skip_bytes`].

use std::any::type_name;

use tracing::{debug, trace};

use crate::error::Result;
use crate::stream::Stream;

/// A value that knows how to write itself into, and populate itself from, a
/// [`Stream`].
///
/// Implementations only ever touch the stream through its read/write
/// operations. The stream handed to [`read_from`](Self::read_from) holds this
/// value's bytes and nothing else; unread trailing bytes are ignored, which
/// lets an older reader accept a value written by a newer writer that appended
/// fields.
pub trait StreamSerializer {
    fn write_to(&self, stream: &mut Stream) -> Result<()>;

    fn read_from(&mut self, stream: &mut Stream) -> Result<()>;
}

impl Stream {
    /// Append the unread content of `sub` as a length-prefixed blob.
    pub fn write_stream(&mut self, sub: &Stream) -> Result<()> {
        self.write_bytes(sub.encode()).map_err(|e| {
            debug!(len = sub.remaining(), %e, "could not write sub-stream");
            e
        })
    }

    /// Consume a length-prefixed blob as a new, independent stream positioned
    /// at its first byte.
    pub fn read_stream(&mut self) -> Result<Stream> {
        let bytes = self.read_bytes().map_err(|e| {
            debug!(%e, "could not read sub-stream");
            e
        })?;
        trace!(len = bytes.len(), "extracted sub-stream");
        Ok(Stream::from_bytes(bytes))
    }

    /// Serialize `value` into its own fresh stream and nest that stream here.
    ///
    /// If `value` fails half way, nothing is appended to `self`.
    pub fn write<T: StreamSerializer + ?Sized>(&mut self, value: &T) -> Result<()> {
        let mut sub = Stream::new();
        value.write_to(&mut sub).map_err(|e| {
            debug!(ty = type_name::<T>(), %e, "composite failed to serialize");
            e
        })?;
        trace!(ty = type_name::<T>(), len = sub.remaining(), "writing composite");
        self.write_stream(&sub)
    }

    /// Extract the next nested stream and let `value` populate itself from it.
    ///
    /// Once the nested stream has been extracted, `self` stays past it even if
    /// `value` rejects the content.
    pub fn read<T: StreamSerializer + ?Sized>(&mut self, value: &mut T) -> Result<()> {
        let mut sub = self.read_stream()?;
        value.read_from(&mut sub).map_err(|e| {
            debug!(ty = type_name::<T>(), %e, "composite failed to populate");
            e
        })
    }

    /// [`read`](Self::read) into a default-constructed value.
    pub fn read_new<T: StreamSerializer + Default>(&mut self) -> Result<T> {
        let mut value = T::default();
        self.read(&mut value)?;
        Ok(value)
    }
}
