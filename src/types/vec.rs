//! Owned length-prefixed vectors.
//!
//! [`VarVec`] is the canonical container of the wire format: an ordered
//! sequence of uniformly typed elements, encoded as a length prefix counting
//! payload bytes followed by the concatenated element encodings. The element
//! type is opaque to the container; it only goes through the element's own
//! [`Size`]/[`Serialize`]/[`Deserialize`] contract, recursively down to the
//! primitives.

use crate::{
    prefix::{LenU16, LenU32, LenU8, Prefix},
    util::at_least,
    Deserialize, Error, Serialize, Size,
};
use bytes::{Buf, BufMut};
use std::{borrow::Borrow, marker::PhantomData};

/// An owned vector of `T` encoded with a length prefix of width `P`.
///
/// The prefix counts payload bytes, not elements. Payloads larger than
/// `P::MAX` bytes are rejected at both encode and decode time.
pub struct VarVec<P: Prefix, T> {
    vec: Vec<T>,
    _prefix: PhantomData<P>,
}

/// A [`VarVec`] with a 1-byte length prefix.
pub type VarVecU8<T> = VarVec<LenU8, T>;
/// A [`VarVec`] with a 2-byte length prefix.
pub type VarVecU16<T> = VarVec<LenU16, T>;
/// A [`VarVec`] with a 4-byte length prefix.
pub type VarVecU32<T> = VarVec<LenU32, T>;

impl<P: Prefix, T> VarVec<P, T> {
    /// Creates a new vector from `vec`.
    #[inline]
    pub fn new(vec: Vec<T>) -> Self {
        Self {
            vec,
            _prefix: PhantomData,
        }
    }

    /// Creates a new vector by cloning `slice`.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(slice.to_vec())
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

    /// Returns a slice of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Consumes the container, returning the inner vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }

    /// Appends an element.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.vec.push(value);
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Returns a reference to the element at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.vec.get(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
}

impl<P: Prefix, T: Clone> Clone for VarVec<P, T> {
    fn clone(&self) -> Self {
        Self::new(self.vec.clone())
    }
}

impl<P: Prefix, T: std::fmt::Debug> std::fmt::Debug for VarVec<P, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.vec.iter()).finish()
    }
}

impl<P: Prefix, T: PartialEq> PartialEq for VarVec<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<P: Prefix, T: Eq> Eq for VarVec<P, T> {}

impl<P: Prefix, T: std::hash::Hash> std::hash::Hash for VarVec<P, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.vec, state)
    }
}

impl<P: Prefix, T> Default for VarVec<P, T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Prefix, T> std::ops::Index<usize> for VarVec<P, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<P: Prefix, T> Borrow<[T]> for VarVec<P, T> {
    fn borrow(&self) -> &[T] {
        &self.vec
    }
}

impl<P: Prefix, T> FromIterator<T> for VarVec<P, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(Vec::from_iter(iter))
    }
}

impl<P: Prefix, T> From<Vec<T>> for VarVec<P, T> {
    fn from(vec: Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<P: Prefix, T: Clone> From<&[T]> for VarVec<P, T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<P: Prefix, T> From<VarVec<P, T>> for Vec<T> {
    fn from(vec: VarVec<P, T>) -> Self {
        vec.vec
    }
}

/// Returns the payload byte length of `elements`: the sum of each element's
/// serialized length, excluding the prefix.
#[inline]
pub(crate) fn payload_len<T: Size>(elements: &[T]) -> usize {
    elements.iter().map(Size::serialized_len).sum()
}

/// Writes the length prefix for `elements` followed by each element in order.
///
/// Shared by the owned, borrowed, and secret vector variants.
pub(crate) fn write_elements<P: Prefix, T: Serialize>(
    elements: &[T],
    buf: &mut impl BufMut,
) -> Result<usize, Error> {
    let payload = payload_len(elements);
    let mut written = P::write_len(payload, buf)?;
    for element in elements {
        written += element.serialize(buf)?;
    }
    debug_assert_eq!(written, P::WIDTH + payload, "element sizes disagree with bytes written");
    Ok(written)
}

/// Reads a length prefix of width `P` and decodes elements into `out` until
/// the declared payload is consumed exactly.
///
/// The source must hold the full declared payload up front; decoding never
/// reads past it. On error, elements already decoded remain in `out` for the
/// caller to dispose of (the secret variant zeroizes them).
pub(crate) fn read_elements<P: Prefix, T: Deserialize>(
    buf: &mut impl Buf,
    out: &mut Vec<T>,
) -> Result<(), Error> {
    let len = P::read_len(buf)?;
    at_least(buf, len)?;
    let mut window = Buf::take(buf, len);
    while window.has_remaining() {
        match T::deserialize(&mut window) {
            Ok(element) => out.push(element),
            // The source held the full declared payload, so exhausting the
            // window mid-element means the declared length splits an element.
            Err(Error::TruncatedInput) => return Err(Error::EncodingMismatch("element boundary")),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

impl<P: Prefix, T: Size> Size for VarVec<P, T> {
    #[inline]
    fn serialized_len(&self) -> usize {
        P::WIDTH + payload_len(&self.vec)
    }
}

impl<P: Prefix, T: Serialize> Serialize for VarVec<P, T> {
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        write_elements::<P, T>(&self.vec, buf)
    }
}

impl<P: Prefix, T: Deserialize> Deserialize for VarVec<P, T> {
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
        let mut vec = Vec::new();
        read_elements::<P, T>(buf, &mut vec)?;
        Ok(Self::new(vec))
    }
}
