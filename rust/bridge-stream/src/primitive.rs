//! Fixed-width little-endian scalars.
//!
//! | kind    | width | encoding                          |
//! |---------|-------|-----------------------------------|
//! | `i32`   | 4     | two's complement, little-endian   |
//! | `f32`   | 4     | IEEE-754 bits, little-endian      |
//! | `bool`  | 1     | `0` = false, anything else = true |

use tracing::debug;

use crate::error::Result;
use crate::stream::Stream;

pub const INT_SIZE: usize = 4;
pub const FLOAT_SIZE: usize = 4;
pub const BOOL_SIZE: usize = 1;

impl Stream {
    /// Append a 32-bit signed integer.
    #[inline]
    pub fn write_int(&mut self, value: i32) {
        self.push_raw(&value.to_le_bytes());
    }

    /// Consume a 32-bit signed integer.
    pub fn read_int(&mut self) -> Result<i32> {
        let bytes = self.take_array::<INT_SIZE>().map_err(|e| {
            debug!(kind = "int", %e, "could not read integer");
            e
        })?;
        Ok(i32::from_le_bytes(bytes))
    }

    /// Append a single-precision float. The bit pattern is written as-is,
    /// NaN payloads included.
    #[inline]
    pub fn write_float(&mut self, value: f32) {
        self.push_raw(&value.to_bits().to_le_bytes());
    }

    /// Consume a single-precision float.
    pub fn read_float(&mut self) -> Result<f32> {
        let bytes = self.take_array::<FLOAT_SIZE>().map_err(|e| {
            debug!(kind = "float", %e, "could not read float");
            e
        })?;
        Ok(f32::from_bits(u32::from_le_bytes(bytes)))
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.push_byte(u8::from(value));
    }

    /// Consume one byte; any nonzero value decodes as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        let [byte] = self.take_array::<BOOL_SIZE>().map_err(|e| {
            debug!(kind = "bool", %e, "could not read boolean");
            e
        })?;
        Ok(byte != 0)
    }
}
