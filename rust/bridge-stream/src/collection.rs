//! Homogeneous arrays: a 32-bit element count followed by each element in
//! its scalar encoding, in order.

use tracing::debug;

use crate::error::Result;
use crate::primitive::{BOOL_SIZE, FLOAT_SIZE, INT_SIZE};
use crate::stream::Stream;
use crate::varlen::LEN_PREFIX_SIZE;

impl Stream {
    fn write_seq<T>(
        &mut self,
        kind: &'static str,
        values: &[T],
        mut write: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        let mark = self.write_mark();
        let res = self
            .write_len(values.len())
            .and_then(|()| values.iter().try_for_each(|v| write(self, v)));
        if let Err(e) = &res {
            self.truncate_to(mark);
            debug!(kind, count = values.len(), %e, "could not write array");
        }
        res
    }

    // `min_size` bounds the up-front allocation so a corrupt count cannot
    // reserve more elements than the remaining bytes could possibly hold.
    fn read_seq<T>(
        &mut self,
        kind: &'static str,
        min_size: usize,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let start = self.position();
        let count = self.read_len().map_err(|e| {
            debug!(kind, %e, "could not read array length");
            e
        })?;
        let mut out = Vec::with_capacity(count.min(self.remaining() / min_size));
        for index in 0..count {
            match read(self) {
                Ok(v) => out.push(v),
                Err(e) => {
                    self.rewind(start);
                    debug!(kind, index, count, %e, "could not read array element");
                    return Err(e);
                }
            }
        }
        Ok(out)
    }

    pub fn write_int_array(&mut self, values: &[i32]) -> Result<()> {
        self.write_seq("int", values, |s, v| {
            s.write_int(*v);
            Ok(())
        })
    }

    pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
        self.read_seq("int", INT_SIZE, Self::read_int)
    }

    pub fn write_float_array(&mut self, values: &[f32]) -> Result<()> {
        self.write_seq("float", values, |s, v| {
            s.write_float(*v);
            Ok(())
        })
    }

    pub fn read_float_array(&mut self) -> Result<Vec<f32>> {
        self.read_seq("float", FLOAT_SIZE, Self::read_float)
    }

    pub fn write_bool_array(&mut self, values: &[bool]) -> Result<()> {
        self.write_seq("bool", values, |s, v| {
            s.write_bool(*v);
            Ok(())
        })
    }

    pub fn read_bool_array(&mut self) -> Result<Vec<bool>> {
        self.read_seq("bool", BOOL_SIZE, Self::read_bool)
    }

    /// Append an array of strings; accepts `&[String]` as well as `&[&str]`.
    pub fn write_string_array<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        self.write_seq("string", values, |s, v| s.write_string(v.as_ref()))
    }

    /// Consume an array of strings. Any malformed element fails the whole
    /// array and leaves the cursor at the array's count prefix.
    pub fn read_string_array(&mut self) -> Result<Vec<String>> {
        self.read_seq("string", LEN_PREFIX_SIZE, Self::read_string)
    }
}
