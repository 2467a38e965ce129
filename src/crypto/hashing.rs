//! Hashing primitives backing storage-key construction and payload hashing:
//! blake2b at arbitrary output widths, and the twox64/twox128 family used by
//! Substrate's `Twox64Concat`/`Twox128` storage hashers.

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use twox_hash::XxHash64;
use std::hash::Hasher;

/// `blake2b(input, out_len)`, `out_len` in `1..=64`.
///
/// # Panics
/// Panics if `out_len` is `0` or greater than `64` — this is a programmer
/// error (an internal call site with a bad constant), not a runtime
/// condition callers need to recover from.
pub fn blake2b(input: &[u8], out_len: usize) -> Vec<u8> {
    assert!((1..=64).contains(&out_len), "blake2b output length must be in 1..=64");
    let mut hasher = Blake2bVar::new(out_len).expect("validated above");
    hasher.update(input);
    let mut out = vec![0u8; out_len];
    hasher.finalize_variable(&mut out).expect("buffer sized to out_len");
    out
}

pub fn blake2_128(input: &[u8]) -> [u8; 16] {
    let v = blake2b(input, 16);
    v.try_into().unwrap()
}

pub fn blake2_256(input: &[u8]) -> [u8; 32] {
    let v = blake2b(input, 32);
    v.try_into().unwrap()
}

pub fn blake2_512(input: &[u8]) -> [u8; 64] {
    let v = blake2b(input, 64);
    v.try_into().unwrap()
}

/// Each 64-bit half of `twoxN` is `XXH64(input, seed)` with `seed` equal to
/// the half's zero-based index (`0` for the first 8 bytes, `1` for the
/// next, ...), little-endian.
fn xxh64_half(input: &[u8], seed: u64) -> [u8; 8] {
    let mut hasher = XxHash64::with_seed(seed);
    hasher.write(input);
    hasher.finish().to_le_bytes()
}

pub fn twox64(input: &[u8]) -> [u8; 8] {
    xxh64_half(input, 0)
}

pub fn twox128(input: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&xxh64_half(input, 0));
    out[8..].copy_from_slice(&xxh64_half(input, 1));
    out
}

pub fn twox256(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, chunk) in out.chunks_mut(8).enumerate() {
        chunk.copy_from_slice(&xxh64_half(input, i as u64));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2_widths_are_distinct_lengths() {
        assert_eq!(blake2_128(b"hello").len(), 16);
        assert_eq!(blake2_256(b"hello").len(), 32);
        assert_eq!(blake2_512(b"hello").len(), 64);
    }

    #[test]
    fn blake2_is_deterministic() {
        assert_eq!(blake2_256(b"substrate"), blake2_256(b"substrate"));
        assert_ne!(blake2_256(b"substrate"), blake2_256(b"polkadot"));
    }

    #[test]
    fn twox_widths() {
        assert_eq!(twox64(b"System").len(), 8);
        assert_eq!(twox128(b"System").len(), 16);
        assert_eq!(twox256(b"System").len(), 32);
    }

    #[test]
    fn twox128_is_two_independent_twox64_halves() {
        let full = twox128(b"Balances");
        assert_eq!(&full[..8], &twox64(b"Balances")[..]);
    }
}
