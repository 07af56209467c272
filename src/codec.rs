//! Core codec traits.

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can report their exact serialized length.
pub trait Size {
    /// The number of bytes [`Serialize::serialize`] will write for this value.
    ///
    /// This method MUST return the exact number of bytes written, prefix
    /// included for length-prefixed containers. A disagreement between this
    /// value and the bytes actually written is a programming defect, not a
    /// data error.
    fn serialized_len(&self) -> usize;
}

/// Trait for types that can be serialized into a buffer.
pub trait Serialize: Size {
    /// Serializes this value into `buf`, returning the number of bytes
    /// written.
    ///
    /// On error the buffer contents are unspecified and must be discarded by
    /// the caller.
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error>;

    /// Serializes this value into a freshly allocated buffer.
    ///
    /// Allocates exactly [`Size::serialized_len`] bytes up front. Panics in
    /// debug builds if the `serialize` implementation writes a different
    /// number of bytes than `serialized_len()` promised.
    ///
    /// (Provided method).
    fn serialize_detached(&self) -> Result<BytesMut, Error> {
        let len = self.serialized_len();
        let mut buf = BytesMut::with_capacity(len);
        let written = self.serialize(&mut buf)?;
        debug_assert_eq!(written, len, "serialize() did not write expected bytes");
        Ok(buf)
    }
}

/// Trait for types that can be deserialized from a buffer.
///
/// Implementations consume exactly the bytes their encoding declares and
/// never return a partially initialized value: on error, nothing observable
/// was produced. Bytes beyond the encoding are left untouched in `buf` so a
/// caller can decode consecutive values from one source.
pub trait Deserialize: Sized {
    /// Reads a value from `buf`, consuming the necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g. a truncated source or a
    /// length prefix that exceeds the prefix width's capacity).
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use bytes::Bytes;

    #[test]
    fn test_insufficient_buffer() {
        let mut reader = Bytes::from_static(&[0x01, 0x02]);
        assert!(matches!(
            u32::deserialize(&mut reader),
            Err(Error::TruncatedInput)
        ));
    }

    #[test]
    fn test_detached_matches_len() {
        let value = 42u32;
        let encoded = value.serialize_detached().unwrap();
        assert_eq!(encoded.len(), value.serialized_len());
        let decoded = u32::deserialize(&mut encoded.freeze()).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn test_consecutive_values() {
        let mut buf = BytesMut::new();
        1u16.serialize(&mut buf).unwrap();
        2u16.serialize(&mut buf).unwrap();
        let mut reader = buf.freeze();
        assert_eq!(u16::deserialize(&mut reader).unwrap(), 1);
        assert_eq!(u16::deserialize(&mut reader).unwrap(), 2);
        assert!(matches!(
            u16::deserialize(&mut reader),
            Err(Error::TruncatedInput)
        ));
    }
}
