//! Codec implementations for the container family and primitives.

pub mod bytes;
pub mod primitives;
pub mod secret;
pub mod slice;
pub mod vec;
