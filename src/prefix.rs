//! Length-prefix encoding and decoding
//!
//! Every variable-length container in this crate is encoded as a fixed-width
//! big-endian length field followed by the payload it describes. Three prefix
//! widths exist on the wire: 1, 2, and 4 bytes, giving payload capacity
//! ceilings of 255, 65 535, and 4 294 967 295 bytes respectively. The length
//! field always counts payload *bytes*, never elements.
//!
//! The width is usually known at compile time and selected via the marker
//! types [`LenU8`], [`LenU16`], and [`LenU32`]. Callers that learn the width
//! at run time (e.g. from a schema) can go through [`Width`] instead, which
//! rejects widths outside the supported set.

use crate::{util::at_least, Error};
use bytes::{Buf, BufMut};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width length prefix, selected at compile time.
///
/// This trait is sealed: the wire format defines exactly three widths.
pub trait Prefix: sealed::Sealed + 'static {
    /// Number of bytes used to encode the length field.
    const WIDTH: usize;

    /// Largest payload byte length this width can represent.
    const MAX: usize;

    /// Encodes `len` as a big-endian length field, returning the number of
    /// bytes written (always [`Self::WIDTH`]).
    ///
    /// Fails with [`Error::InvalidLength`] if `len` exceeds [`Self::MAX`].
    fn write_len(len: usize, buf: &mut impl BufMut) -> Result<usize, Error>;

    /// Decodes a big-endian length field, returning the declared payload
    /// byte length.
    ///
    /// Fails with [`Error::TruncatedInput`] if fewer than [`Self::WIDTH`]
    /// bytes remain.
    fn read_len(buf: &mut impl Buf) -> Result<usize, Error>;
}

macro_rules! impl_prefix {
    ($name:ident, $int:ty, $read_method:ident, $write_method:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Prefix for $name {
            const WIDTH: usize = std::mem::size_of::<$int>();
            const MAX: usize = <$int>::MAX as usize;

            #[inline]
            fn write_len(len: usize, buf: &mut impl BufMut) -> Result<usize, Error> {
                let len = <$int>::try_from(len).map_err(|_| Error::InvalidLength(len, Self::MAX))?;
                buf.$write_method(len);
                Ok(Self::WIDTH)
            }

            #[inline]
            fn read_len(buf: &mut impl Buf) -> Result<usize, Error> {
                at_least(buf, Self::WIDTH)?;
                Ok(buf.$read_method() as usize)
            }
        }
    };
}

impl_prefix!(LenU8, u8, get_u8, put_u8, "1-byte length prefix (payload <= 255 bytes).");
impl_prefix!(LenU16, u16, get_u16, put_u16, "2-byte length prefix (payload <= 65 535 bytes).");
impl_prefix!(LenU32, u32, get_u32, put_u32, "4-byte length prefix (payload <= 4 294 967 295 bytes).");

/// A length-prefix width selected at run time.
///
/// Mirrors the [`Prefix`] markers for callers that receive the width as data
/// rather than as a type parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// 1-byte prefix.
    U8,
    /// 2-byte prefix.
    U16,
    /// 4-byte prefix.
    U32,
}

impl Width {
    /// Number of bytes used to encode the length field.
    pub const fn bytes(self) -> usize {
        match self {
            Width::U8 => LenU8::WIDTH,
            Width::U16 => LenU16::WIDTH,
            Width::U32 => LenU32::WIDTH,
        }
    }

    /// Largest payload byte length this width can represent.
    pub const fn max(self) -> usize {
        match self {
            Width::U8 => LenU8::MAX,
            Width::U16 => LenU16::MAX,
            Width::U32 => LenU32::MAX,
        }
    }

    /// Encodes `len` as a big-endian length field of this width.
    pub fn write_len(self, len: usize, buf: &mut impl BufMut) -> Result<usize, Error> {
        match self {
            Width::U8 => LenU8::write_len(len, buf),
            Width::U16 => LenU16::write_len(len, buf),
            Width::U32 => LenU32::write_len(len, buf),
        }
    }

    /// Decodes a big-endian length field of this width.
    pub fn read_len(self, buf: &mut impl Buf) -> Result<usize, Error> {
        match self {
            Width::U8 => LenU8::read_len(buf),
            Width::U16 => LenU16::read_len(buf),
            Width::U32 => LenU32::read_len(buf),
        }
    }
}

impl TryFrom<usize> for Width {
    type Error = Error;

    /// Fails with [`Error::Unsupported`] for any width outside {1, 2, 4}.
    fn try_from(width: usize) -> Result<Self, Error> {
        match width {
            1 => Ok(Width::U8),
            2 => Ok(Width::U16),
            4 => Ok(Width::U32),
            w => Err(Error::Unsupported(w)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Bytes, BytesMut};
    use paste::paste;

    macro_rules! impl_prefix_test {
        ($name:ident, $width:expr, $max:expr) => {
            paste! {
                #[test]
                fn [<test_ $name:lower _round_trip>]() {
                    for len in [0usize, 1, 42, $max] {
                        let mut buf = BytesMut::new();
                        assert_eq!($name::write_len(len, &mut buf).unwrap(), $width);
                        assert_eq!(buf.len(), $width);
                        let decoded = $name::read_len(&mut buf.freeze()).unwrap();
                        assert_eq!(decoded, len);
                    }
                }

                #[test]
                fn [<test_ $name:lower _over_capacity>]() {
                    let mut buf = BytesMut::new();
                    assert_eq!(
                        $name::write_len($max + 1, &mut buf),
                        Err(Error::InvalidLength($max + 1, $max))
                    );
                }

                #[test]
                fn [<test_ $name:lower _truncated>]() {
                    let mut short = Bytes::from_static(&[0u8; $width - 1]);
                    assert_eq!($name::read_len(&mut short), Err(Error::TruncatedInput));
                }
            }
        };
    }
    impl_prefix_test!(LenU8, 1, 255);
    impl_prefix_test!(LenU16, 2, 65_535);
    impl_prefix_test!(LenU32, 4, u32::MAX as usize);

    #[test]
    fn test_big_endian_layout() {
        let mut buf = BytesMut::new();
        LenU16::write_len(0x0102, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02]);

        let mut buf = BytesMut::new();
        LenU32::write_len(0x01020304, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_width_try_from() {
        assert_eq!(Width::try_from(1), Ok(Width::U8));
        assert_eq!(Width::try_from(2), Ok(Width::U16));
        assert_eq!(Width::try_from(4), Ok(Width::U32));
        assert_eq!(Width::try_from(3), Err(Error::Unsupported(3)));
        assert_eq!(Width::try_from(8), Err(Error::Unsupported(8)));
    }

    #[test]
    fn test_width_round_trip() {
        for width in [Width::U8, Width::U16, Width::U32] {
            let mut buf = BytesMut::new();
            assert_eq!(width.write_len(200, &mut buf).unwrap(), width.bytes());
            assert_eq!(width.read_len(&mut buf.freeze()).unwrap(), 200);
        }
    }

    #[test]
    fn test_width_capacity() {
        let mut buf = BytesMut::new();
        assert_eq!(
            Width::U8.write_len(256, &mut buf),
            Err(Error::InvalidLength(256, 255))
        );
        assert_eq!(Width::U16.max(), 65_535);
    }
}
