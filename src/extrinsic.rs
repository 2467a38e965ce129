//! Assembles a call plus its signed extensions into the V4 extrinsic
//! envelope: hashes the signing payload if it's long, signs it, and emits
//! the length-prefixed wire body.

use thiserror::Error;

use crate::chain_properties::ChainProperties;
use crate::crypto::{CryptoCapability, CryptoError, DefaultCrypto};
use crate::keypair::{Keypair, KeypairError};
use crate::metadata::{Metadata, MetadataError};
use crate::scale::{Compact, Encode, Output};
use crate::signed_extensions::SignedExtensionEngine;

const SIGNED_VERSION: u8 = 0x84;
const UNSIGNED_VERSION: u8 = 0x04;
const HASH_THRESHOLD: usize = 256;

/// Every production runtime this core targets declares the account `Index`
/// (nonce) type as `u32`; a nonce above that ceiling would still
/// `Compact`-encode without truncation, but it could never match a real
/// chain's own `Index`, so it is rejected here rather than forwarded.
const MAX_NONCE: u64 = u32::MAX as u64;

#[derive(Debug, Error)]
pub enum ExtrinsicError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Keypair(#[from] KeypairError),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("nonce {0} exceeds this core's u32 nonce ceiling")]
    NonceOutOfRange(u64),
}

fn check_nonce(nonce: u64) -> Result<(), ExtrinsicError> {
    if nonce > MAX_NONCE {
        log::warn!("EXTRINSIC: nonce {nonce} exceeds the u32 nonce ceiling");
        return Err(ExtrinsicError::NonceOutOfRange(nonce));
    }
    Ok(())
}

/// Builds a signing payload — `call || extra || additional_signed`,
/// blake2b-256-hashed if longer than 256 bytes — without signing it. Exposed
/// separately from `build_signed` so callers that sign out-of-process (e.g.
/// a hardware wallet) can request a signature for exactly these bytes.
pub fn signing_payload(
    call_bytes: &[u8],
    nonce: u64,
    tip: u128,
    chain_props: &ChainProperties,
    metadata: &Metadata,
) -> Result<Vec<u8>, ExtrinsicError> {
    check_nonce(nonce)?;
    let extensions = SignedExtensionEngine::new(metadata).build(nonce, tip, chain_props)?;
    let mut payload = Vec::with_capacity(
        call_bytes.len() + extensions.extra.len() + extensions.additional_signed.len(),
    );
    payload.extend_from_slice(call_bytes);
    payload.extend_from_slice(&extensions.extra);
    payload.extend_from_slice(&extensions.additional_signed);

    log::debug!("EXTRINSIC: signing payload assembled ({} bytes)", payload.len());
    if payload.len() > HASH_THRESHOLD {
        log::debug!("EXTRINSIC: payload exceeds {HASH_THRESHOLD} bytes, hashing with blake2b-256");
        payload = DefaultCrypto.blake2b(&payload, 32);
    }
    Ok(payload)
}

/// Assemble, sign, and encode a V4 signed extrinsic.
pub fn build_signed(
    call_bytes: &[u8],
    keypair: &Keypair,
    nonce: u64,
    tip: u128,
    chain_props: &ChainProperties,
    metadata: &Metadata,
) -> Result<Vec<u8>, ExtrinsicError> {
    check_nonce(nonce)?;
    let extensions = SignedExtensionEngine::new(metadata).build(nonce, tip, chain_props)?;
    let mut payload = Vec::with_capacity(
        call_bytes.len() + extensions.extra.len() + extensions.additional_signed.len(),
    );
    payload.extend_from_slice(call_bytes);
    payload.extend_from_slice(&extensions.extra);
    payload.extend_from_slice(&extensions.additional_signed);

    let to_sign = if payload.len() > HASH_THRESHOLD {
        log::debug!("EXTRINSIC: payload exceeds {HASH_THRESHOLD} bytes, hashing with blake2b-256");
        DefaultCrypto.blake2b(&payload, 32)
    } else {
        payload
    };

    let signature = keypair.sign(&to_sign)?;

    let mut body = Output::new();
    body.push_byte(SIGNED_VERSION);
    body.push_byte(0x00); // MultiAddress::Id
    body.extend(&keypair.public());
    body.push_byte(keypair.scheme().wire_tag());
    body.extend(&signature);
    body.extend(&extensions.extra);
    body.extend(call_bytes);
    let body = body.into_vec();

    let mut out = Output::new();
    Compact(body.len() as u128).encode_to(&mut out);
    out.extend(&body);
    log::debug!("EXTRINSIC: built signed body ({} bytes)", body.len());
    Ok(out.into_vec())
}

/// Assemble an unsigned V4 extrinsic: `Compact<len> || 0x04 || call`.
pub fn build_unsigned(call_bytes: &[u8]) -> Vec<u8> {
    let mut body = Output::new();
    body.push_byte(UNSIGNED_VERSION);
    body.extend(call_bytes);
    let body = body.into_vec();

    let mut out = Output::new();
    Compact(body.len() as u128).encode_to(&mut out);
    out.extend(&body);
    log::debug!("EXTRINSIC: built unsigned body ({} bytes)", body.len());
    out.into_vec()
}
