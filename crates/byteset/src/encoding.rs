//! Order-Preserving Key Encoding and Value Serialization
//!
//! Helpers for callers whose keys start life as scalars. Every encoding is
//! chosen so that byte-lexicographic order over the produced bytes matches
//! the natural order of the source values:
//! - unsigned integers: fixed-width big-endian
//! - signed integers: fixed-width big-endian with the sign bit flipped
//! - floats: the IEEE-754 total-order bit transform
//! - byte strings and text: identity
//!
//! Order is only preserved within a single encoded type. Keys of differing
//! encoded width or signedness must not be mixed in one tree when
//! cross-type ordering matters.

use serde::Serialize;

use crate::error::ByteSetError;

/// Conversion into order-preserving key bytes.
///
/// Implementations guarantee that `a < b` implies
/// `a.key_bytes() < b.key_bytes()` under byte-lexicographic comparison,
/// within the implementing type.
pub trait KeyEncode {
    fn key_bytes(&self) -> Vec<u8>;
}

impl KeyEncode for [u8] {
    fn key_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl KeyEncode for Vec<u8> {
    fn key_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl KeyEncode for str {
    fn key_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl KeyEncode for String {
    fn key_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl KeyEncode for bool {
    fn key_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }
}

macro_rules! unsigned_key_encode {
    ($($t:ty),*) => {
        $(
            impl KeyEncode for $t {
                fn key_bytes(&self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
            }
        )*
    };
}

unsigned_key_encode!(u8, u16, u32, u64);

impl KeyEncode for usize {
    fn key_bytes(&self) -> Vec<u8> {
        (*self as u64).to_be_bytes().to_vec()
    }
}

macro_rules! signed_key_encode {
    ($($t:ty => $u:ty),*) => {
        $(
            impl KeyEncode for $t {
                fn key_bytes(&self) -> Vec<u8> {
                    // Flipping the sign bit biases the value range so that
                    // negatives sort below positives.
                    let sign = (1 as $u) << (<$u>::BITS - 1);
                    ((*self as $u) ^ sign).to_be_bytes().to_vec()
                }
            }
        )*
    };
}

signed_key_encode!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

impl KeyEncode for isize {
    fn key_bytes(&self) -> Vec<u8> {
        (*self as i64).key_bytes()
    }
}

impl KeyEncode for f32 {
    fn key_bytes(&self) -> Vec<u8> {
        let bits = self.to_bits();
        let ordered = if bits >> 31 == 1 { !bits } else { bits ^ (1 << 31) };
        ordered.to_be_bytes().to_vec()
    }
}

impl KeyEncode for f64 {
    fn key_bytes(&self) -> Vec<u8> {
        let bits = self.to_bits();
        let ordered = if bits >> 63 == 1 { !bits } else { bits ^ (1 << 63) };
        ordered.to_be_bytes().to_vec()
    }
}

/// Serialize an arbitrary value for storage alongside the set.
///
/// The produced bytes carry no ordering guarantee; keys belong in
/// [`KeyEncode`]. Raw byte payloads are best stored as-is without this
/// helper.
pub fn value_to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ByteSetError> {
    serde_json::to_vec(value).map_err(|err| ByteSetError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    fn assert_order_preserved<T: KeyEncode>(sorted: &[T]) {
        for pair in sorted.windows(2) {
            assert!(
                pair[0].key_bytes() < pair[1].key_bytes(),
                "encoding broke ordering"
            );
        }
    }

    #[test]
    fn test_unsigned_encoding_order() {
        assert_order_preserved(&[0u64, 1, 2, 255, 256, 65_535, 1 << 32, u64::MAX]);
        assert_order_preserved(&[0u16, 9, 10, 300, u16::MAX]);
    }

    #[test]
    fn test_signed_encoding_order() {
        assert_order_preserved(&[i64::MIN, -1_000_000, -1, 0, 1, 42, i64::MAX]);
        assert_order_preserved(&[i8::MIN, -1, 0, 1, i8::MAX]);
    }

    #[test]
    fn test_float_encoding_order() {
        assert_order_preserved(&[f64::NEG_INFINITY, -1e300, -1.5, -f64::MIN_POSITIVE, 0.0, 1.5, 1e300, f64::INFINITY]);
        assert_order_preserved(&[-3.5f32, -0.25, 0.5, 7.0]);
    }

    #[test]
    fn test_text_and_bool_encoding() {
        assert_eq!("hi".key_bytes(), b"hi".to_vec());
        assert_eq!(b"hi"[..].key_bytes(), b"hi".to_vec());
        assert_order_preserved(&[false, true]);
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(7u64.key_bytes().len(), 8);
        assert_eq!(7u16.key_bytes().len(), 2);
        assert_eq!((-7i32).key_bytes().len(), 4);
        assert_eq!(7usize.key_bytes().len(), 8);
    }

    #[test]
    fn test_value_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Payload {
            name: String,
            hits: u32,
        }

        let payload = Payload { name: "k1".to_string(), hits: 3 };
        let bytes = value_to_bytes(&payload).unwrap();
        let back: Payload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, payload);
    }
}
