//! The growable buffer and read cursor every codec layer is built on.

use std::fmt;

use tracing::debug;

use crate::error::{Result, StreamError};

const DEFAULT_CAPACITY: usize = 32;

/// Owned byte buffer with an append-only write end and a consuming read end.
///
/// Writes always append after the last written byte; reads consume from the
/// oldest unread byte forward. Writing and then reading on the same instance
/// therefore behaves like a FIFO, and a stream can equally be filled,
/// [`encode`](Self::encode)d, and re-wrapped with [`Stream::from_bytes`] on the
/// receiving side.
///
/// A `Stream` has a single owner. Share it across threads only behind external
/// synchronization.
#[derive(Clone, Default)]
pub struct Stream {
    buf: Vec<u8>,
    off: usize,
}

impl Stream {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty stream whose buffer can hold `capacity` bytes before
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity), off: 0 }
    }

    /// Wrap already encoded bytes for reading, cursor at the first byte.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { buf: bytes.into(), off: 0 }
    }

    /// Append raw bytes verbatim.
    pub fn push_raw(&mut self, bytes: &[u8]) {
        self.reclaim();
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single raw byte.
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.reclaim();
        self.buf.push(byte);
    }

    /// Consume exactly `len` raw bytes.
    ///
    /// On failure the cursor does not move.
    pub fn take_raw(&mut self, len: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if len > remaining {
            debug!(needed = len, remaining, "raw read past end of stream");
            return Err(StreamError::Truncated { needed: len, remaining });
        }
        let start = self.off;
        self.off += len;
        Ok(&self.buf[start..self.off])
    }

    /// Consume exactly `N` raw bytes into a fixed-size array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take_raw(N)?);
        Ok(out)
    }

    /// Unread bytes, without consuming them.
    #[inline]
    #[must_use]
    pub fn encode(&self) -> &[u8] {
        &self.buf[self.off..]
    }

    /// Unread bytes as an owned vector.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.off > 0 {
            self.buf.drain(..self.off);
        }
        self.buf
    }

    /// Drop all content and reset both ends, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.off = 0;
    }

    /// `true` when no unread bytes are held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// `true` while unread bytes remain; check it between reads to detect
    /// the end of the stream.
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining() != 0
    }

    /// Number of unread bytes.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.off
    }

    /// Read cursor offset into the current buffer.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.off
    }

    /// Move the read cursor back to a position recorded earlier in the same
    /// read call.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.off);
        self.off = pos;
    }

    /// Current end of the written region, for undoing a multi-part write
    /// that fails half way.
    pub(crate) fn write_mark(&mut self) -> usize {
        self.reclaim();
        self.buf.len()
    }

    pub(crate) fn truncate_to(&mut self, mark: usize) {
        debug_assert!(mark >= self.off);
        self.buf.truncate(mark);
    }

    // Once everything written has been read, the consumed prefix is dead
    // weight; drop it before the next append.
    #[inline]
    fn reclaim(&mut self) {
        if self.off != 0 && self.off == self.buf.len() {
            self.buf.clear();
            self.off = 0;
        }
    }
}

impl From<Vec<u8>> for Stream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Stream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

impl Eq for Stream {}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("position", &self.off)
            .field("unread", &self.encode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stream_is_empty() {
        let s = Stream::new();
        assert!(s.is_empty());
        assert!(!s.has_more());
        assert_eq!(s.encode(), &[] as &[u8]);
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn take_raw_consumes_in_write_order() {
        let mut s = Stream::new();
        s.push_raw(&[1, 2, 3]);
        s.push_byte(4);
        assert_eq!(s.take_raw(2).unwrap(), &[1, 2]);
        assert_eq!(s.encode(), &[3, 4]);
        assert_eq!(s.take_array::<2>().unwrap(), [3, 4]);
        assert!(!s.has_more());
    }

    #[test]
    fn truncated_take_leaves_cursor_in_place() {
        let mut s = Stream::from_bytes(vec![9, 9, 9]);
        s.take_raw(1).unwrap();
        let err = s.take_raw(3).unwrap_err();
        assert_eq!(err, StreamError::Truncated { needed: 3, remaining: 2 });
        assert_eq!(s.position(), 1);
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = Stream::new();
        s.push_raw(b"abcdef");
        s.take_raw(2).unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.position(), 0);
        assert!(s.encode().is_empty());
        s.push_byte(7);
        assert_eq!(s.encode(), &[7]);
    }

    #[test]
    fn fully_consumed_prefix_is_reclaimed_on_write() {
        let mut s = Stream::new();
        s.push_raw(&[1, 2]);
        s.take_raw(2).unwrap();
        assert_eq!(s.position(), 2);
        s.push_byte(3);
        assert_eq!(s.position(), 0);
        assert_eq!(s.encode(), &[3]);
    }

    #[test]
    fn into_bytes_returns_unread_region() {
        let mut s = Stream::from(&b"xyz"[..]);
        s.take_raw(1).unwrap();
        assert_eq!(s.into_bytes(), b"yz".to_vec());
    }

    #[test]
    fn equality_ignores_consumed_prefix() {
        let mut a = Stream::from_bytes(vec![0, 1, 2]);
        a.take_raw(1).unwrap();
        let b = Stream::from_bytes(vec![1, 2]);
        assert_eq!(a, b);
    }
}
