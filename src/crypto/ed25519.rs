//! Ed25519 signing backed by `ed25519-dalek` (RFC 8032).

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use super::CryptoError;

pub fn keypair_from_seed(seed: &[u8; 32]) -> [u8; 32] {
    let signing_key = SigningKey::from_bytes(seed);
    signing_key.verifying_key().to_bytes()
}

pub fn sign(seed: &[u8; 32], msg: &[u8]) -> [u8; 64] {
    let signing_key = SigningKey::from_bytes(seed);
    signing_key.sign(msg).to_bytes()
}

pub fn verify(public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> Result<bool, CryptoError> {
    let verifying_key =
        VerifyingKey::from_bytes(public).map_err(|_| CryptoError::BadSeedLength)?;
    let signature = Signature::from_bytes(sig);
    Ok(verifying_key.verify(msg, &signature).is_ok())
}
