//! SS58 address encoding: Base58 over `version_byte || pubkey[32] ||
//! checksum[2]`, where the checksum is the first two bytes of
//! `blake2b_512("SS58PRE" || version_byte || pubkey)`.
//!
//! Only the single-byte version form (`version_byte < 64`) is supported, per
//! the core's scope; multi-byte "extended" prefixes are a future extension
//! (see `DESIGN.md`).

use super::hashing::blake2_512;
use super::CryptoError;

const CHECKSUM_PREFIX: &[u8] = b"SS58PRE";

fn checksum(payload: &[u8]) -> [u8; 2] {
    let mut preimage = Vec::with_capacity(CHECKSUM_PREFIX.len() + payload.len());
    preimage.extend_from_slice(CHECKSUM_PREFIX);
    preimage.extend_from_slice(payload);
    let hash = blake2_512(&preimage);
    [hash[0], hash[1]]
}

/// Encode a 32-byte public key with the given single-byte network prefix.
///
/// Returns `Err(Ss58FormatUnsupported)` for `version >= 64` — multi-byte
/// prefixes are out of scope for this core — mirroring how `decode` reports
/// the same condition rather than panicking on it.
pub fn encode(public: &[u8; 32], version: u16) -> Result<String, CryptoError> {
    if version >= 64 {
        return Err(CryptoError::Ss58FormatUnsupported);
    }
    let mut payload = Vec::with_capacity(1 + 32 + 2);
    payload.push(version as u8);
    payload.extend_from_slice(public);
    let checksum = checksum(&payload);
    payload.extend_from_slice(&checksum);
    Ok(bs58::encode(payload).into_string())
}

/// Decode an SS58 address string, verifying its checksum.
pub fn decode(s: &str) -> Result<([u8; 32], u16), CryptoError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|_| CryptoError::Ss58ChecksumInvalid)?;
    if bytes.len() != 1 + 32 + 2 {
        return Err(CryptoError::Ss58FormatUnsupported);
    }
    let version = bytes[0];
    if version >= 64 {
        return Err(CryptoError::Ss58FormatUnsupported);
    }
    let (payload, given_checksum) = bytes.split_at(bytes.len() - 2);
    let expected_checksum = checksum(payload);
    if given_checksum != expected_checksum {
        return Err(CryptoError::Ss58ChecksumInvalid);
    }
    let mut public = [0u8; 32];
    public.copy_from_slice(&payload[1..]);
    Ok((public, version as u16))
}
