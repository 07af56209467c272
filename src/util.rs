//! Shared helpers for codec implementations.

use crate::Error;
use bytes::Buf;

/// Ensures the buffer has at least `len` bytes remaining.
#[inline]
pub fn at_least(buf: &impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::TruncatedInput);
    }
    Ok(())
}
