//! Length-prefixed vectors for secret payloads.
//!
//! [`SecretVec`] carries the exact wire contract of [`VarVec`](crate::VarVec)
//! plus a destruction-time obligation: its backing storage is zeroized before
//! release, on every exit path. This includes a deserialize that fails partway
//! through, where elements constructed before the error are zeroized before
//! the error propagates. The volatile-write guarantee comes from the
//! [`zeroize`] crate, so the overwrites cannot be elided as dead stores.

use crate::{
    prefix::{LenU16, LenU32, LenU8, Prefix},
    types::vec::{payload_len, read_elements, write_elements},
    Deserialize, Error, Serialize, Size,
};
use bytes::{Buf, BufMut};
use std::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// An owned vector of secret `T` encoded with a length prefix of width `P`.
///
/// Identical to `VarVec<P, T>` on the wire; differs only in lifetime
/// handling. `Debug` never prints the contents.
pub struct SecretVec<P: Prefix, T: Zeroize> {
    vec: Vec<T>,
    _prefix: PhantomData<P>,
}

/// A [`SecretVec`] with a 1-byte length prefix.
pub type SecretVecU8<T> = SecretVec<LenU8, T>;
/// A [`SecretVec`] with a 2-byte length prefix.
pub type SecretVecU16<T> = SecretVec<LenU16, T>;
/// A [`SecretVec`] with a 4-byte length prefix.
pub type SecretVecU32<T> = SecretVec<LenU32, T>;

/// A secret byte buffer with a 1-byte length prefix.
pub type SecretBytesU8 = SecretVec<LenU8, u8>;
/// A secret byte buffer with a 2-byte length prefix.
pub type SecretBytesU16 = SecretVec<LenU16, u8>;
/// A secret byte buffer with a 4-byte length prefix.
pub type SecretBytesU32 = SecretVec<LenU32, u8>;

impl<P: Prefix, T: Zeroize> SecretVec<P, T> {
    /// Creates a new secret vector, taking ownership of `vec`.
    #[inline]
    pub fn new(vec: Vec<T>) -> Self {
        Self {
            vec,
            _prefix: PhantomData,
        }
    }

    /// Returns the number of elements (not the encoded byte length).
    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns a slice of the secret elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Consumes the container, returning the inner vector.
    ///
    /// The returned vector is no longer covered by the zeroize-on-drop
    /// guarantee; the caller takes over that obligation.
    #[inline]
    pub fn into_vec(mut self) -> Vec<T> {
        std::mem::take(&mut self.vec)
    }
}

impl<P: Prefix, T: Zeroize> Zeroize for SecretVec<P, T> {
    fn zeroize(&mut self) {
        self.vec.zeroize();
    }
}

impl<P: Prefix, T: Zeroize> Drop for SecretVec<P, T> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Prefix, T: Zeroize> ZeroizeOnDrop for SecretVec<P, T> {}

impl<P: Prefix, T: Zeroize + Clone> Clone for SecretVec<P, T> {
    fn clone(&self) -> Self {
        Self::new(self.vec.clone())
    }
}

impl<P: Prefix, T: Zeroize> std::fmt::Debug for SecretVec<P, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretVec<{} elements>", self.vec.len())
    }
}

impl<P: Prefix, T: Zeroize + PartialEq> PartialEq for SecretVec<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<P: Prefix, T: Zeroize + Eq> Eq for SecretVec<P, T> {}

impl<P: Prefix, T: Zeroize> Default for SecretVec<P, T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Prefix, T: Zeroize> From<Vec<T>> for SecretVec<P, T> {
    fn from(vec: Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<P: Prefix, T: Zeroize + Size> Size for SecretVec<P, T> {
    #[inline]
    fn serialized_len(&self) -> usize {
        P::WIDTH + payload_len(&self.vec)
    }
}

impl<P: Prefix, T: Zeroize + Serialize> Serialize for SecretVec<P, T> {
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        write_elements::<P, T>(&self.vec, buf)
    }
}

impl<P: Prefix, T: Zeroize + Deserialize> Deserialize for SecretVec<P, T> {
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
        // Elements decoded before a failure must not linger: accumulate into
        // a guard that zeroizes on any early exit.
        let mut vec = Zeroizing::new(Vec::new());
        read_elements::<P, T>(buf, &mut vec)?;
        Ok(Self::new(std::mem::take(&mut *vec)))
    }
}
