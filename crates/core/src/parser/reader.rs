//! Fixed-size record reads.

use std::io::{ErrorKind, Read};

use crate::error::{RemtError, Result};

/// Reader of fixed-size records tracking its byte offset.
///
/// A record is either read completely or not at all; a short read is a
/// [`RemtError::Truncated`] error.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read exactly `N` bytes of the named record.
    pub fn read_record<const N: usize>(&mut self, record: &'static str) -> Result<[u8; N]> {
        let (buf, filled) = self.read_partial::<N>()?;
        if filled < N {
            return Err(RemtError::Truncated {
                record,
                offset: self.offset,
                needed: N,
                available: filled,
            });
        }
        Ok(buf)
    }

    /// Read up to `N` bytes, stopping early only at end of input.
    ///
    /// Returns the buffer and the number of bytes filled. The offset advances
    /// only when the record is complete.
    pub fn read_partial<const N: usize>(&mut self) -> Result<([u8; N], usize)> {
        let mut buf = [0u8; N];
        let mut filled = 0;
        while filled < N {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        if filled == N {
            self.offset += N as u64;
            tracing::trace!(offset = self.offset, size = N, "record");
        }
        Ok((buf, filled))
    }
}
