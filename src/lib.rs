//! Length-prefixed vector serialization for TLS-style wire formats.
//!
//! # Overview
//!
//! This crate implements the "variable vector" encoding used by wire-format
//! presentation languages: a payload preceded by a fixed-width big-endian
//! length field of 1, 2, or 4 bytes. It is designed to efficiently and safely:
//! - Serialize a sequence of typed elements into a prefixed byte stream
//! - Deserialize untrusted input, rejecting any declared length inconsistent
//!   with the available bytes or the prefix width's capacity ceiling
//!
//! The codec is stateless: every operation is a pure function over a
//! caller-supplied [`bytes::Buf`] source or [`bytes::BufMut`] sink. It never
//! interprets payload semantics, performs crypto, or touches the network.
//!
//! # Containers
//!
//! - [`VarVec`]: owned vector of uniformly typed elements
//! - [`VarBytes`]: owned raw byte payload (bulk-copy fast path)
//! - [`VarSlice`] / [`VarByteSlice`]: zero-copy borrowed views, serialize-only
//! - [`SecretVec`]: owned vector whose backing storage is zeroized on drop,
//!   for key material and other sensitive payloads
//!
//! Each comes in three prefix widths, e.g. [`VarVecU8`], [`VarVecU16`], and
//! [`VarVecU32`] for payload ceilings of 255, 65 535, and 4 294 967 295
//! bytes. The prefix always counts payload bytes, never elements.
//!
//! # Example
//!
//! ```
//! use varvec::{Deserialize, Serialize, VarVecU16};
//!
//! let vec = VarVecU16::new(vec![1u16, 2, 3]);
//! let encoded = vec.serialize_detached().unwrap();
//! assert_eq!(&encoded[..], &[0x00, 0x06, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);
//!
//! let decoded = VarVecU16::<u16>::deserialize(&mut encoded.freeze()).unwrap();
//! assert_eq!(decoded, vec);
//! ```
//!
//! User-defined element types participate by implementing the [`Size`],
//! [`Serialize`], and [`Deserialize`] traits; containers delegate to them
//! recursively:
//!
//! ```
//! use bytes::{Buf, BufMut};
//! use varvec::{Deserialize, Error, Serialize, Size, VarVecU8};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!     x: u16,
//!     y: u16,
//! }
//!
//! impl Size for Point {
//!     fn serialized_len(&self) -> usize {
//!         self.x.serialized_len() + self.y.serialized_len()
//!     }
//! }
//!
//! impl Serialize for Point {
//!     fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
//!         Ok(self.x.serialize(buf)? + self.y.serialize(buf)?)
//!     }
//! }
//!
//! impl Deserialize for Point {
//!     fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
//!         let x = u16::deserialize(buf)?;
//!         let y = u16::deserialize(buf)?;
//!         Ok(Self { x, y })
//!     }
//! }
//!
//! let path = VarVecU8::new(vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
//! let encoded = path.serialize_detached().unwrap();
//! let decoded = VarVecU8::<Point>::deserialize(&mut encoded.freeze()).unwrap();
//! assert_eq!(decoded, path);
//! ```

pub mod codec;
pub mod error;
pub mod prefix;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use codec::{Deserialize, Serialize, Size};
pub use error::Error;
pub use prefix::{LenU16, LenU32, LenU8, Prefix, Width};
pub use types::{
    bytes::{VarBytes, VarBytesU16, VarBytesU32, VarBytesU8},
    secret::{
        SecretBytesU16, SecretBytesU32, SecretBytesU8, SecretVec, SecretVecU16, SecretVecU32,
        SecretVecU8,
    },
    slice::{
        VarByteSlice, VarByteSliceU16, VarByteSliceU32, VarByteSliceU8, VarSlice, VarSliceU16,
        VarSliceU32, VarSliceU8,
    },
    vec::{VarVec, VarVecU16, VarVecU32, VarVecU8},
};
