//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A computed or declared payload length exceeds the capacity of the
    /// active prefix width, at either encode or decode time.
    #[error("invalid length: {0} exceeds maximum {1}")]
    InvalidLength(usize, usize), // found, max
    /// The source yielded fewer bytes than a fixed-width primitive, a length
    /// prefix, or a declared payload required.
    #[error("truncated input")]
    TruncatedInput,
    /// A declared payload length does not land exactly on an element
    /// boundary, or a fixed discriminant holds an undefined value.
    #[error("encoding mismatch in {0}")]
    EncodingMismatch(&'static str), // context
    /// A request for an encoding shape the codec does not define.
    #[error("unsupported prefix width: {0} bytes")]
    Unsupported(usize),
}
