//! Owned length-prefixed byte buffers.
//!
//! [`VarBytes`] carries the same wire contract as `VarVec<P, u8>` but skips
//! per-element dispatch: size is the byte count plus the prefix width, encode
//! is one bulk copy, and decode reads the declared payload as a single block.

use crate::{
    prefix::{LenU16, LenU32, LenU8, Prefix},
    util::at_least,
    Deserialize, Error, Serialize, Size,
};
use bytes::{Buf, BufMut, Bytes};
use std::marker::PhantomData;

/// An owned byte buffer encoded with a length prefix of width `P`.
pub struct VarBytes<P: Prefix> {
    bytes: Bytes,
    _prefix: PhantomData<P>,
}

/// A [`VarBytes`] with a 1-byte length prefix.
pub type VarBytesU8 = VarBytes<LenU8>;
/// A [`VarBytes`] with a 2-byte length prefix.
pub type VarBytesU16 = VarBytes<LenU16>;
/// A [`VarBytes`] with a 4-byte length prefix.
pub type VarBytesU32 = VarBytes<LenU32>;

impl<P: Prefix> VarBytes<P> {
    /// Creates a new buffer from `bytes`.
    #[inline]
    pub fn new(bytes: Bytes) -> Self {
        Self {
            bytes,
            _prefix: PhantomData,
        }
    }

    /// Returns the payload byte length (excluding the prefix).
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the payload as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the container, returning the inner [`Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl<P: Prefix> Clone for VarBytes<P> {
    fn clone(&self) -> Self {
        Self::new(self.bytes.clone())
    }
}

impl<P: Prefix> std::fmt::Debug for VarBytes<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.bytes, f)
    }
}

impl<P: Prefix> PartialEq for VarBytes<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: Prefix> Eq for VarBytes<P> {}

impl<P: Prefix> std::hash::Hash for VarBytes<P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.bytes, state)
    }
}

impl<P: Prefix> Default for VarBytes<P> {
    fn default() -> Self {
        Self::new(Bytes::new())
    }
}

impl<P: Prefix> AsRef<[u8]> for VarBytes<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: Prefix> From<Bytes> for VarBytes<P> {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl<P: Prefix> From<Vec<u8>> for VarBytes<P> {
    fn from(vec: Vec<u8>) -> Self {
        Self::new(Bytes::from(vec))
    }
}

impl<P: Prefix> From<&[u8]> for VarBytes<P> {
    fn from(slice: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(slice))
    }
}

impl<P: Prefix> From<VarBytes<P>> for Bytes {
    fn from(bytes: VarBytes<P>) -> Self {
        bytes.bytes
    }
}

impl<P: Prefix> Size for VarBytes<P> {
    #[inline]
    fn serialized_len(&self) -> usize {
        P::WIDTH + self.bytes.len()
    }
}

impl<P: Prefix> Serialize for VarBytes<P> {
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        let written = P::write_len(self.bytes.len(), buf)?;
        buf.put_slice(&self.bytes);
        Ok(written + self.bytes.len())
    }
}

impl<P: Prefix> Deserialize for VarBytes<P> {
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = P::read_len(buf)?;
        at_least(buf, len)?;
        Ok(Self::new(buf.copy_to_bytes(len)))
    }
}
