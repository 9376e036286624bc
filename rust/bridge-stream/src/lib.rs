//! # Bridge Stream
//!
//! A small binary codec: one growable byte buffer with paired write/read
//! operations for scalars, homogeneous arrays, strings, raw blobs and nested
//! sub-streams, plus the [`StreamSerializer`] trait that lets any composite
//! type serialize itself through the same buffer.
//!
//! ## Wire format
//! All integers are 32-bit signed little-endian.
//!
//! | value                     | encoding                                   |
//! |---------------------------|--------------------------------------------|
//! | `i32`                     | 4 bytes                                    |
//! | `f32`                     | 4 bytes, IEEE-754 bits                     |
//! | `bool`                    | 1 byte, `0` false, nonzero true            |
//! | bytes / string            | 4-byte byte length + raw (UTF-8) bytes     |
//! | array of K                | 4-byte element count + K-encoded elements  |
//! | nested stream / composite | 4-byte byte length + the sub-stream bytes  |
//!
//! There is no schema, tag or version on the wire: reader and writer agree
//! on field order. Because composites are always length-prefixed, a reader
//! can step over one it does not understand.
//!
//! ## Crate layout
//! - `stream`: the [`Stream`] buffer, its cursor and raw byte access
//! - `primitive`: `i32`, `f32` and `bool`
//! - `varlen`: byte blobs and strings
//! - `collection`: arrays of the scalar kinds and of strings
//! - `compose`: nested streams and the [`StreamSerializer`] contract
//! - `error`: [`StreamError`]
//!
//! ## Quick start
//!
//! ```
//! use bridge_stream::Stream;
//!
//! let mut stream = Stream::new();
//! stream.write_int(1231);
//! stream.write_string("1231").unwrap();
//! stream.write_int_array(&[123, 456]).unwrap();
//!
//! // Ship the bytes, then wrap them on the other side.
//! let mut received = Stream::from_bytes(stream.encode().to_vec());
//! assert_eq!(received.read_int().unwrap(), 1231);
//! assert_eq!(received.read_string().unwrap(), "1231");
//! assert_eq!(received.read_int_array().unwrap(), vec![123, 456]);
//! assert!(!received.has_more());
//! ```
//!
//! ## Composite values
//!
//! ```
//! use bridge_stream::{Result, Stream, StreamSerializer};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Player {
//!     id: i32,
//!     name: String,
//! }
//!
//! impl StreamSerializer for Player {
//!     fn write_to(&self, stream: &mut Stream) -> Result<()> {
//!         stream.write_int(self.id);
//!         stream.write_string(&self.name)
//!     }
//!
//!     fn read_from(&mut self, stream: &mut Stream) -> Result<()> {
//!         self.id = stream.read_int()?;
//!         self.name = stream.read_string()?;
//!         Ok(())
//!     }
//! }
//!
//! let player = Player { id: 7, name: "rufus".into() };
//! let mut stream = Stream::new();
//! stream.write(&player).unwrap();
//! let back: Player = stream.read_new().unwrap();
//! assert_eq!(back, player);
//! ```

pub mod collection;
pub mod compose;
pub mod error;
pub mod primitive;
pub mod stream;
pub mod varlen;

pub use compose::StreamSerializer;
pub use error::{Result, StreamError};
pub use primitive::{BOOL_SIZE, FLOAT_SIZE, INT_SIZE};
pub use stream::Stream;
pub use varlen::{LEN_PREFIX_SIZE, MAX_LEN};
