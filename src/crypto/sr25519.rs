//! Sr25519 signing backed by `schnorrkel`, the scheme Substrate calls
//! "Schnorr over Ristretto25519". Offered as the capability layer's optional
//! alternative scheme alongside Ed25519, selected by the `MultiSignature`
//! scheme tag rather than assumed.

use schnorrkel::{signing_context, ExpansionMode, Keypair, MiniSecretKey, PublicKey, Signature};

use super::CryptoError;

const SIGNING_CONTEXT: &[u8] = b"substrate";

fn expand(seed: &[u8; 32]) -> Result<Keypair, CryptoError> {
    let mini = MiniSecretKey::from_bytes(seed).map_err(|_| CryptoError::BadSeedLength)?;
    Ok(mini.expand_to_keypair(ExpansionMode::Ed25519))
}

pub fn keypair_from_seed(seed: &[u8; 32]) -> Result<[u8; 32], CryptoError> {
    Ok(expand(seed)?.public.to_bytes())
}

pub fn sign(seed: &[u8; 32], msg: &[u8]) -> Result<[u8; 64], CryptoError> {
    let keypair = expand(seed)?;
    let sig = keypair.sign(signing_context(SIGNING_CONTEXT).bytes(msg));
    Ok(sig.to_bytes())
}

pub fn verify(public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> Result<bool, CryptoError> {
    let public_key = PublicKey::from_bytes(public).map_err(|_| CryptoError::BadSeedLength)?;
    let signature = Signature::from_bytes(sig).map_err(|_| CryptoError::BadSignatureLength)?;
    Ok(public_key
        .verify(signing_context(SIGNING_CONTEXT).bytes(msg), &signature)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let seed = [9u8; 32];
        let public = keypair_from_seed(&seed).unwrap();
        let msg = b"transfer 10 DOT";
        let sig = sign(&seed, msg).unwrap();
        assert!(verify(&public, msg, &sig).unwrap());
    }

    #[test]
    fn verification_fails_on_tampered_message() {
        let seed = [3u8; 32];
        let public = keypair_from_seed(&seed).unwrap();
        let sig = sign(&seed, b"original").unwrap();
        assert!(!verify(&public, b"tampered", &sig).unwrap());
    }
}
