//! `Keypair`: created from a seed, hex seed, BIP39 mnemonic, or a
//! well-known development URI (`//Alice`); immutable once built, with its
//! seed wiped on drop.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bytes;
use crate::crypto::{hashing, CryptoCapability, CryptoError, DefaultCrypto, Scheme};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypairError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("seed hex string is malformed: {0}")]
    MalformedHex(#[from] bytes::MalformedHex),
    #[error("seed must decode to exactly 32 bytes, got {0}")]
    WrongSeedLength(usize),
    #[error("mnemonic phrase is invalid: {0}")]
    InvalidMnemonic(String),
    #[error("URI junction '{0}' could not be parsed")]
    InvalidUri(String),
}

/// The standard Substrate "development" phrase that well-known test
/// accounts (`//Alice`, `//Bob`, ...) are derived against.
pub const DEV_PHRASE: &str =
    "bottom drive obey lake curtain smoke basket hold race lopping cute stage";

/// A signing keypair. The seed is the only secret state; it is zeroized
/// when the keypair is dropped.
pub struct Keypair {
    scheme: Scheme,
    seed: Seed,
    public: [u8; 32],
}

#[derive(Zeroize, ZeroizeOnDrop)]
struct Seed([u8; 32]);

impl Keypair {
    /// Build directly from a 32-byte seed.
    pub fn from_seed(scheme: Scheme, seed: [u8; 32]) -> Result<Self, KeypairError> {
        let crypto = DefaultCrypto;
        let public = match scheme {
            Scheme::Ed25519 => crypto.ed25519_keypair_from_seed(&seed),
            Scheme::Sr25519 => crypto.sr25519_keypair_from_seed(&seed)?,
        };
        Ok(Keypair { scheme, seed: Seed(seed), public })
    }

    /// Build from a hex-encoded 32-byte seed (with or without `0x` prefix).
    pub fn from_hex_seed(scheme: Scheme, hex_seed: &str) -> Result<Self, KeypairError> {
        let bytes = bytes::from_hex(hex_seed)?;
        let len = bytes.len();
        let seed: [u8; 32] = bytes.try_into().map_err(|_| KeypairError::WrongSeedLength(len))?;
        Self::from_seed(scheme, seed)
    }

    /// Build from a BIP39 mnemonic phrase (no passphrase).
    ///
    /// This core folds the standard 64-byte BIP39 seed down to the 32-byte
    /// master seed our schemes take via `blake2_256`; it does not reproduce
    /// `substrate-bip39`'s exact HDKD-compatible expansion bit-for-bit (see
    /// `DESIGN.md`).
    pub fn from_mnemonic(scheme: Scheme, phrase: &str) -> Result<Self, KeypairError> {
        let mnemonic = bip39::Mnemonic::parse_normalized(phrase)
            .map_err(|e| KeypairError::InvalidMnemonic(e.to_string()))?;
        let seed64 = mnemonic.to_seed_normalized("");
        let seed = hashing::blake2_256(&seed64);
        Self::from_seed(scheme, seed)
    }

    /// Build from a well-known Substrate URI: `<phrase or //Name>(/junction)*`.
    ///
    /// Supports the common forms used across the examples in this crate's
    /// tests: a bare `//Name` against [`DEV_PHRASE`], or a full phrase
    /// followed by `/soft` and/or `//hard` junctions. Each junction folds
    /// into the running seed via `blake2_256(seed || junction_bytes)`
    /// (soft and hard junctions are not distinguished beyond that fold —
    /// this core does not implement Sr25519's chain-code-based soft
    /// derivation, see `DESIGN.md`).
    pub fn from_uri(scheme: Scheme, uri: &str) -> Result<Self, KeypairError> {
        let mut parts = uri.split('/');
        let phrase = parts.next().unwrap_or_default();
        let phrase = if phrase.is_empty() { DEV_PHRASE } else { phrase };

        let mnemonic = bip39::Mnemonic::parse_normalized(phrase)
            .map_err(|e| KeypairError::InvalidMnemonic(e.to_string()))?;
        let seed64 = mnemonic.to_seed_normalized("");
        let mut seed = hashing::blake2_256(&seed64);

        for junction in parts {
            if junction.is_empty() {
                return Err(KeypairError::InvalidUri(uri.to_string()));
            }
            let mut preimage = Vec::with_capacity(32 + junction.len());
            preimage.extend_from_slice(&seed);
            preimage.extend_from_slice(junction.as_bytes());
            seed = hashing::blake2_256(&preimage);
        }

        Self::from_seed(scheme, seed)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn public(&self) -> [u8; 32] {
        self.public
    }

    pub fn sign(&self, msg: &[u8]) -> Result<[u8; 64], KeypairError> {
        let crypto = DefaultCrypto;
        Ok(match self.scheme {
            Scheme::Ed25519 => crypto.ed25519_sign(&self.seed.0, msg),
            Scheme::Sr25519 => crypto.sr25519_sign(&self.seed.0, msg)?,
        })
    }

    pub fn address(&self, network_prefix: u16) -> Result<String, KeypairError> {
        Ok(DefaultCrypto.ss58_encode(&self.public, network_prefix)?)
    }
}
