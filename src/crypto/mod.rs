//! Abstract cryptographic capability the rest of the core depends on:
//! hashing, Ed25519 (and optionally Sr25519) signing, and SS58 addressing.
//!
//! This is deliberately a trait + a single default implementation, not a
//! conditionally-loaded native library: swap in a mock for tests, keep the
//! real one in production, with no FFI plumbing either way.

pub mod ed25519;
pub mod hashing;
pub mod sr25519;
pub mod ss58;

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("seed must be exactly 32 bytes")]
    BadSeedLength,
    #[error("signature must be exactly 64 bytes")]
    BadSignatureLength,
    #[error("signature did not verify")]
    SignatureInvalid,
    #[error("ss58 checksum did not match")]
    Ss58ChecksumInvalid,
    #[error("ss58 format is unsupported by this core (multi-byte prefix or wrong length)")]
    Ss58FormatUnsupported,
}

/// The signature scheme a `Keypair` or `MultiSignature` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Ed25519,
    Sr25519,
}

impl Scheme {
    /// The one-byte tag written into `MultiSignature`/`MultiAddress`-shaped
    /// wire data: `0x00` for Ed25519, `0x01` for Sr25519.
    pub fn wire_tag(self) -> u8 {
        match self {
            Scheme::Ed25519 => 0x00,
            Scheme::Sr25519 => 0x01,
        }
    }
}

/// Abstract cryptographic operations the core depends on. The crate ships
/// exactly one implementation (`DefaultCrypto`), backed by `blake2`,
/// `twox-hash`, `ed25519-dalek`, `schnorrkel`, and `bs58`; callers needing a
/// deterministic test double implement this trait themselves rather than
/// the core growing a second code path.
pub trait CryptoCapability {
    fn blake2b(&self, input: &[u8], out_len: usize) -> Vec<u8>;
    fn twox64(&self, input: &[u8]) -> [u8; 8];
    fn twox128(&self, input: &[u8]) -> [u8; 16];
    fn blake2_128(&self, input: &[u8]) -> [u8; 16];
    fn blake2_256(&self, input: &[u8]) -> [u8; 32];

    fn ed25519_keypair_from_seed(&self, seed: &[u8; 32]) -> [u8; 32];
    fn ed25519_sign(&self, seed: &[u8; 32], msg: &[u8]) -> [u8; 64];
    fn ed25519_verify(&self, public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> bool;

    fn sr25519_keypair_from_seed(&self, seed: &[u8; 32]) -> Result<[u8; 32], CryptoError>;
    fn sr25519_sign(&self, seed: &[u8; 32], msg: &[u8]) -> Result<[u8; 64], CryptoError>;
    fn sr25519_verify(&self, public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> Result<bool, CryptoError>;

    fn ss58_encode(&self, public: &[u8; 32], version: u16) -> Result<String, CryptoError>;
    fn ss58_decode(&self, address: &str) -> Result<([u8; 32], u16), CryptoError>;
}

/// The real implementation: blake2/twox-hash/ed25519-dalek/schnorrkel/bs58.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCrypto;

impl CryptoCapability for DefaultCrypto {
    fn blake2b(&self, input: &[u8], out_len: usize) -> Vec<u8> {
        hashing::blake2b(input, out_len)
    }

    fn twox64(&self, input: &[u8]) -> [u8; 8] {
        hashing::twox64(input)
    }

    fn twox128(&self, input: &[u8]) -> [u8; 16] {
        hashing::twox128(input)
    }

    fn blake2_128(&self, input: &[u8]) -> [u8; 16] {
        hashing::blake2_128(input)
    }

    fn blake2_256(&self, input: &[u8]) -> [u8; 32] {
        hashing::blake2_256(input)
    }

    fn ed25519_keypair_from_seed(&self, seed: &[u8; 32]) -> [u8; 32] {
        ed25519::keypair_from_seed(seed)
    }

    fn ed25519_sign(&self, seed: &[u8; 32], msg: &[u8]) -> [u8; 64] {
        ed25519::sign(seed, msg)
    }

    fn ed25519_verify(&self, public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> bool {
        ed25519::verify(public, msg, sig).unwrap_or(false)
    }

    fn sr25519_keypair_from_seed(&self, seed: &[u8; 32]) -> Result<[u8; 32], CryptoError> {
        sr25519::keypair_from_seed(seed)
    }

    fn sr25519_sign(&self, seed: &[u8; 32], msg: &[u8]) -> Result<[u8; 64], CryptoError> {
        sr25519::sign(seed, msg)
    }

    fn sr25519_verify(&self, public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> Result<bool, CryptoError> {
        sr25519::verify(public, msg, sig)
    }

    fn ss58_encode(&self, public: &[u8; 32], version: u16) -> Result<String, CryptoError> {
        ss58::encode(public, version)
    }

    fn ss58_decode(&self, address: &str) -> Result<([u8; 32], u16), CryptoError> {
        ss58::decode(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_crypto_round_trips_ed25519() {
        let crypto = DefaultCrypto;
        let seed = [5u8; 32];
        let public = crypto.ed25519_keypair_from_seed(&seed);
        let sig = crypto.ed25519_sign(&seed, b"msg");
        assert!(crypto.ed25519_verify(&public, b"msg", &sig));
    }

    #[test]
    fn default_crypto_round_trips_ss58() {
        let crypto = DefaultCrypto;
        let public = [4u8; 32];
        let address = crypto.ss58_encode(&public, 42).unwrap();
        assert_eq!(crypto.ss58_decode(&address).unwrap(), (public, 42));
    }

    #[test]
    fn wire_tags() {
        assert_eq!(Scheme::Ed25519.wire_tag(), 0x00);
        assert_eq!(Scheme::Sr25519.wire_tag(), 0x01);
    }
}
