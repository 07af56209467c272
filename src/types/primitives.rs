//! Codec implementations for fixed-width primitives.
//!
//! These are the leaves every container delegates to: unsigned integers of
//! 1, 2, 4, and 8 bytes, raw byte arrays, and `Option<T>`. All integers are
//! written big-endian, matching the wire format's network byte order. None of
//! these carry a length prefix; any bit pattern is a valid fixed-width
//! integer, so decoding can only fail on a short source.

use crate::{util::at_least, Deserialize, Error, Serialize, Size};
use bytes::{Buf, BufMut};

// Unsigned integer implementations
macro_rules! impl_unsigned {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Size for $type {
            #[inline]
            fn serialized_len(&self) -> usize {
                std::mem::size_of::<$type>()
            }
        }

        impl Serialize for $type {
            #[inline]
            fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
                buf.$write_method(*self);
                Ok(std::mem::size_of::<$type>())
            }
        }

        impl Deserialize for $type {
            #[inline]
            fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }
    };
}

impl_unsigned!(u8, get_u8, put_u8);
impl_unsigned!(u16, get_u16, put_u16);
impl_unsigned!(u32, get_u32, put_u32);
impl_unsigned!(u64, get_u64, put_u64);

// Constant-size array implementation
impl<const N: usize> Size for [u8; N] {
    #[inline]
    fn serialized_len(&self) -> usize {
        N
    }
}

impl<const N: usize> Serialize for [u8; N] {
    #[inline]
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        buf.put_slice(&self[..]);
        Ok(N)
    }
}

impl<const N: usize> Deserialize for [u8; N] {
    #[inline]
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0; N];
        buf.copy_to_slice(&mut dst);
        Ok(dst)
    }
}

// Option implementation: one presence octet, then the value if present.
impl<T: Size> Size for Option<T> {
    #[inline]
    fn serialized_len(&self) -> usize {
        match self {
            Some(inner) => 1 + inner.serialized_len(),
            None => 1,
        }
    }
}

impl<T: Serialize> Serialize for Option<T> {
    #[inline]
    fn serialize(&self, buf: &mut impl BufMut) -> Result<usize, Error> {
        match self {
            Some(inner) => {
                buf.put_u8(1);
                Ok(1 + inner.serialize(buf)?)
            }
            None => {
                buf.put_u8(0);
                Ok(1)
            }
        }
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    #[inline]
    fn deserialize(buf: &mut impl Buf) -> Result<Self, Error> {
        match u8::deserialize(buf)? {
            0 => Ok(None),
            1 => Ok(Some(T::deserialize(buf)?)),
            _ => Err(Error::EncodingMismatch("Option discriminant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 4] = [0, 1, 42, <$type>::MAX];
                    for value in values.iter() {
                        assert_eq!(value.serialized_len(), expected_len);
                        let encoded = value.serialize_detached().unwrap();
                        assert_eq!(encoded.len(), expected_len);
                        let decoded = <$type>::deserialize(&mut encoded.freeze()).unwrap();
                        assert_eq!(*value, decoded);
                    }
                }

                #[test]
                fn [<test_ $type _truncated>]() {
                    let encoded = <$type>::MAX.serialize_detached().unwrap();
                    let mut short = encoded.freeze().slice(..std::mem::size_of::<$type>() - 1);
                    assert_eq!(
                        <$type>::deserialize(&mut short),
                        Err(Error::TruncatedInput)
                    );
                }
            }
        };
    }
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);

    #[test]
    fn test_u8() {
        for value in [0u8, 1, 42, u8::MAX] {
            assert_eq!(value.serialized_len(), 1);
            let encoded = value.serialize_detached().unwrap();
            assert_eq!(u8::deserialize(&mut encoded.freeze()).unwrap(), value);
        }
        assert_eq!(u8::deserialize(&mut Bytes::new()), Err(Error::TruncatedInput));
    }

    #[test]
    fn test_endianness() {
        assert_eq!(&0x0102u16.serialize_detached().unwrap()[..], &[0x01, 0x02]);
        assert_eq!(
            &0x01020304u32.serialize_detached().unwrap()[..],
            &[0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            &0x0102030405060708u64.serialize_detached().unwrap()[..],
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn test_array() {
        let values = [1u8, 2, 3];
        let encoded = values.serialize_detached().unwrap();
        assert_eq!(&encoded[..], &[1, 2, 3]);
        let decoded = <[u8; 3]>::deserialize(&mut encoded.freeze()).unwrap();
        assert_eq!(values, decoded);

        let mut short = Bytes::from_static(&[1, 2]);
        assert_eq!(<[u8; 3]>::deserialize(&mut short), Err(Error::TruncatedInput));
    }

    #[test]
    fn test_option() {
        for value in [Some(42u32), None] {
            let encoded = value.serialize_detached().unwrap();
            assert_eq!(encoded.len(), value.serialized_len());
            let decoded = Option::<u32>::deserialize(&mut encoded.freeze()).unwrap();
            assert_eq!(value, decoded);
        }

        assert_eq!(Some(42u32).serialized_len(), 1 + 4);
        assert_eq!(None::<u32>.serialized_len(), 1);
    }

    #[test]
    fn test_option_bad_discriminant() {
        let mut bad = Bytes::from_static(&[2, 0, 0, 0, 42]);
        assert_eq!(
            Option::<u32>::deserialize(&mut bad),
            Err(Error::EncodingMismatch("Option discriminant"))
        );
    }
}
