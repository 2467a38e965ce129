//! Fixed-width integer encodings: little-endian, over-range values are an
//! encoder error where the width is narrower than the source type (there is
//! none here — Rust's integer types are already width-exact).

use super::{Decode, Encode, Input, Output, ScaleError};

macro_rules! impl_fixed_int {
    ($ty:ty, $what:expr) => {
        impl Encode for $ty {
            fn encode_to(&self, out: &mut Output) {
                out.extend(&self.to_le_bytes());
            }
        }

        impl Decode for $ty {
            fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
                let bytes = input.take(core::mem::size_of::<$ty>(), $what)?;
                let mut buf = [0u8; core::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                Ok(<$ty>::from_le_bytes(buf))
            }
        }
    };
}

impl_fixed_int!(u8, "u8");
impl_fixed_int!(u16, "u16");
impl_fixed_int!(u32, "u32");
impl_fixed_int!(u64, "u64");
impl_fixed_int!(u128, "u128");
impl_fixed_int!(i8, "i8");
impl_fixed_int!(i16, "i16");
impl_fixed_int!(i32, "i32");
impl_fixed_int!(i64, "i64");
impl_fixed_int!(i128, "i128");
