//! SCALE (Simple Concatenated Aggregate Little-Endian) codec.
//!
//! Encoders and decoders here are pure functions over byte strings with
//! explicit cursors: a decoder never reads past the declared buffer, never
//! retains a reference to it past return, and either succeeds advancing the
//! cursor by exactly the consumed count or fails with a typed error naming
//! the construct that failed.

pub mod compact;
pub mod primitive;

pub use compact::Compact;

use thiserror::Error;

/// Errors raised by SCALE encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Fewer bytes remained in the input than the construct being decoded
    /// required.
    #[error("truncated input while decoding {0}")]
    Truncated(&'static str),
    /// A `Compact<N>` length-mode prefix byte used a reserved/unsupported
    /// encoding.
    #[error("unsupported compact integer prefix")]
    BadCompactPrefix,
    /// A tagged-variant discriminant did not match any known case.
    #[error("unknown variant index {index} for {name}")]
    BadVariant { name: &'static str, index: u8 },
    /// A value supplied to an encoder exceeded the representable range of
    /// its target width.
    #[error("value out of range while encoding {0}")]
    OutOfRange(&'static str),
}

/// A read cursor over an immutable byte slice. Decoders take `&mut Input`
/// so the cursor position threads through nested calls without the caller
/// needing to track offsets by hand.
pub struct Input<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Input<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Input { bytes, offset: 0 }
    }

    /// Bytes remaining to be consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// How many bytes have been consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Take `n` bytes and advance the cursor, or fail naming `what`.
    pub fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], ScaleError> {
        let rest = self.remaining();
        if rest.len() < n {
            return Err(ScaleError::Truncated(what));
        }
        let (head, _) = rest.split_at(n);
        self.offset += n;
        Ok(head)
    }

    pub fn take_u8(&mut self, what: &'static str) -> Result<u8, ScaleError> {
        Ok(self.take(1, what)?[0])
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.bytes.len()
    }
}

/// An append-only output sink. Kept as a thin wrapper over `Vec<u8>` so
/// encoders read uniformly (`out.push_byte`, `out.extend`) regardless of the
/// construct being encoded.
#[derive(Default)]
pub struct Output {
    buf: Vec<u8>,
}

impl Output {
    pub fn new() -> Self {
        Output { buf: Vec::new() }
    }

    pub fn push_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

/// A type that can be SCALE-encoded.
pub trait Encode {
    fn encode_to(&self, out: &mut Output);

    fn encode(&self) -> Vec<u8> {
        let mut out = Output::new();
        self.encode_to(&mut out);
        out.into_vec()
    }
}

/// A type that can be SCALE-decoded from an `Input` cursor.
pub trait Decode: Sized {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError>;
}

impl Encode for bool {
    fn encode_to(&self, out: &mut Output) {
        out.push_byte(if *self { 0x01 } else { 0x00 });
    }
}

impl Decode for bool {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        match input.take_u8("bool")? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            other => Err(ScaleError::BadVariant { name: "bool", index: other }),
        }
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode_to(&self, out: &mut Output) {
        match self {
            None => out.push_byte(0x00),
            Some(v) => {
                out.push_byte(0x01);
                v.encode_to(out);
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        match input.take_u8("Option<T> tag")? {
            0x00 => Ok(None),
            0x01 => Ok(Some(T::decode(input)?)),
            other => Err(ScaleError::BadVariant { name: "Option", index: other }),
        }
    }
}

/// `Vec<T>` is `Compact<len> || enc(T)*len`.
impl<T: Encode> Encode for Vec<T> {
    fn encode_to(&self, out: &mut Output) {
        Compact(self.len() as u128).encode_to(out);
        for item in self {
            item.encode_to(out);
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let Compact(len) = Compact::<u128>::decode(input)?;
        let len: usize = len.try_into().map_err(|_| ScaleError::Truncated("Vec<T> length"))?;
        let mut out = Vec::with_capacity(len.min(1 << 20));
        for _ in 0..len {
            out.push(T::decode(input)?);
        }
        Ok(out)
    }
}

/// Raw byte strings (`Vec<u8>`) are specialized: `Compact<len> || raw`,
/// avoiding a per-byte `Encode` round trip.
pub struct RawBytes(pub Vec<u8>);

impl Encode for RawBytes {
    fn encode_to(&self, out: &mut Output) {
        Compact(self.0.len() as u128).encode_to(out);
        out.extend(&self.0);
    }
}

impl Decode for RawBytes {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let Compact(len) = Compact::<u128>::decode(input)?;
        let len: usize = len.try_into().map_err(|_| ScaleError::Truncated("bytes length"))?;
        let bytes = input.take(len, "raw bytes")?.to_vec();
        Ok(RawBytes(bytes))
    }
}

/// `String` is encoded the same way as a byte string: `Compact<len> || utf8`.
impl Encode for String {
    fn encode_to(&self, out: &mut Output) {
        RawBytes(self.as_bytes().to_vec()).encode_to(out);
    }
}

impl Decode for String {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let RawBytes(bytes) = RawBytes::decode(input)?;
        String::from_utf8(bytes).map_err(|_| ScaleError::Truncated("utf8 string"))
    }
}

/// Fixed-size arrays encode as `enc(T) * N`, with no length prefix.
impl<const N: usize> Encode for [u8; N] {
    fn encode_to(&self, out: &mut Output) {
        out.extend(self);
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let bytes = input.take(N, "fixed array")?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode_to(&self, out: &mut Output) {
                let ($($name,)+) = self;
                $($name.encode_to(out);)+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
                Ok(($($name::decode(input)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_round_trip() {
        let some: Option<u8> = Some(7);
        let encoded = some.encode();
        assert_eq!(encoded, vec![0x01, 0x07]);
        let mut input = Input::new(&encoded);
        assert_eq!(Option::<u8>::decode(&mut input).unwrap(), some);

        let none: Option<u8> = None;
        assert_eq!(none.encode(), vec![0x00]);
    }

    #[test]
    fn vec_round_trip() {
        let v = vec![1u8, 2, 3];
        let encoded = v.encode();
        let mut input = Input::new(&encoded);
        assert_eq!(Vec::<u8>::decode(&mut input).unwrap(), v);
        assert!(input.is_empty());
    }

    #[test]
    fn fixed_array_no_len_prefix() {
        let arr: [u8; 4] = [1, 2, 3, 4];
        assert_eq!(arr.encode(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn string_round_trip() {
        let s = "Balances".to_string();
        let encoded = s.encode();
        let mut input = Input::new(&encoded);
        assert_eq!(String::decode(&mut input).unwrap(), s);
        assert!(input.is_empty());
    }

    #[test]
    fn tuple_concatenates_in_order() {
        let t = (1u8, 2u16);
        let mut out = Output::new();
        t.encode_to(&mut out);
        assert_eq!(out.into_vec(), vec![1u8, 2, 0]);
    }
}
