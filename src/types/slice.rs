//! Borrowed length-prefixed views.
//!
//! [`VarSlice`] and [`VarByteSlice`] serialize directly from caller-owned
//! storage, avoiding the copy into an owned container on write-only paths.
//! They deliberately implement [`Serialize`] but not `Deserialize`: a decoded
//! value has no caller-supplied storage to borrow from, so decoding always
//! produces the owned [`VarVec`](crate::VarVec) / [`VarBytes`](crate::VarBytes)
//! counterparts.

use crate::{
    prefix::{LenU16, LenU32, LenU8, Prefix},
    types::vec::{payload_len, write_elements},
    Error, Serialize, Size,
};
use bytes::BufMut;
use std::marker::PhantomData;

/// A borrowed slice of `T` serialized with a length prefix of width `P`.
///
/// The borrow must outlive the serialize call; nothing is copied until the
/// elements are written to the sink.
pub struct VarSlice<'a, P: Prefix, T> {
    slice: &'a [T],
    _prefix: PhantomData<P>,
}

/// A [`VarSlice`] with a 1-byte length prefix.
pub type VarSliceU8<'a, T> = VarSlice<'a, LenU8, T>;
/// A [`VarSlice`] with a 2-byte length prefix.
pub type VarSliceU16<'a, T> = VarSlice<'a, LenU16, T>;
/// A [`VarSlice`] with a 4-byte length prefix.
pub type VarSliceU32<'a, T> = VarSlice<'a, LenU32, T>;

impl<'a, P: Prefix, T> VarSlice<'a, P, T> {
    /// Creates a view over `slice`.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            _prefix: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns true if the slice holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns the underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, P: Prefix, T> From<&'a [T]> for VarSlice<'a, P, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<P: Prefix, T: Size> Size for VarSlice<'_, P, T> {
    #[inline]
    fn serialized_len(&self) -> usize {
        P::WIDTH + payload_len(self.slice)
    }
}

impl<P: Prefix, T: Serialize> Serialize for VarSlice<'_, P, T> {
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        write_elements::<P, T>(self.slice, buf)
    }
}

/// A borrowed byte slice serialized with a length prefix of width `P`.
///
/// The byte analogue of [`VarSlice`]: O(1) size and one bulk copy on write.
pub struct VarByteSlice<'a, P: Prefix> {
    slice: &'a [u8],
    _prefix: PhantomData<P>,
}

/// A [`VarByteSlice`] with a 1-byte length prefix.
pub type VarByteSliceU8<'a> = VarByteSlice<'a, LenU8>;
/// A [`VarByteSlice`] with a 2-byte length prefix.
pub type VarByteSliceU16<'a> = VarByteSlice<'a, LenU16>;
/// A [`VarByteSlice`] with a 4-byte length prefix.
pub type VarByteSliceU32<'a> = VarByteSlice<'a, LenU32>;

impl<'a, P: Prefix> VarByteSlice<'a, P> {
    /// Creates a view over `slice`.
    #[inline]
    pub fn new(slice: &'a [u8]) -> Self {
        Self {
            slice,
            _prefix: PhantomData,
        }
    }

    /// Returns the payload byte length (excluding the prefix).
    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns true if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns the underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.slice
    }
}

impl<'a, P: Prefix> From<&'a [u8]> for VarByteSlice<'a, P> {
    fn from(slice: &'a [u8]) -> Self {
        Self::new(slice)
    }
}

impl<P: Prefix> Size for VarByteSlice<'_, P> {
    #[inline]
    fn serialized_len(&self) -> usize {
        P::WIDTH + self.slice.len()
    }
}

impl<P: Prefix> Serialize for VarByteSlice<'_, P> {
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        let written = P::write_len(self.slice.len(), buf)?;
        buf.put_slice(self.slice);
        Ok(written + self.slice.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deserialize, VarBytesU16, VarVecU16};
    use bytes::BytesMut;

    #[test]
    fn test_slice_matches_owned_encoding() {
        let elements = vec![1u16, 2, 3];
        let slice = VarSliceU16::new(&elements);
        let owned = VarVecU16::new(elements.clone());
        assert_eq!(slice.serialized_len(), owned.serialized_len());
        assert_eq!(
            slice.serialize_detached().unwrap(),
            owned.serialize_detached().unwrap()
        );
    }

    #[test]
    fn test_slice_decodes_as_owned() {
        let elements = vec![10u16, 20, 30];
        let encoded = VarSliceU16::new(&elements).serialize_detached().unwrap();
        let decoded = VarVecU16::<u16>::deserialize(&mut encoded.freeze()).unwrap();
        assert_eq!(decoded.as_slice(), elements.as_slice());
    }

    #[test]
    fn test_byte_slice_matches_owned_encoding() {
        let payload = [0x41u8, 0x42, 0x43];
        let slice = VarByteSliceU16::new(&payload);
        let owned = VarBytesU16::from(&payload[..]);
        assert_eq!(
            slice.serialize_detached().unwrap(),
            owned.serialize_detached().unwrap()
        );
        let decoded =
            VarBytesU16::deserialize(&mut slice.serialize_detached().unwrap().freeze()).unwrap();
        assert_eq!(decoded.as_slice(), &payload);
    }

    #[test]
    fn test_capacity_ceiling() {
        let payload = vec![0u8; 256];
        let mut buf = BytesMut::new();
        assert_eq!(
            VarByteSliceU8::new(&payload).serialize(&mut buf),
            Err(Error::InvalidLength(256, 255))
        );
        assert_eq!(
            VarSliceU8::new(&payload).serialize(&mut buf),
            Err(Error::InvalidLength(256, 255))
        );
    }

    #[test]
    fn test_empty() {
        let slice = VarByteSliceU8::new(&[]);
        assert_eq!(&slice.serialize_detached().unwrap()[..], &[0x00]);
    }
}
