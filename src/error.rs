//! Top-level `Error`, aggregating the per-kind error enums named in the
//! error-handling design: malformed input, metadata, crypto, RPC, and build
//! errors each keep their own taxonomy; this just lets a caller match on one
//! type if they don't care which subsystem failed.

use thiserror::Error;

use crate::bytes::MalformedHex;
use crate::call::CallError;
use crate::crypto::CryptoError;
use crate::extrinsic::ExtrinsicError;
use crate::keypair::KeypairError;
use crate::metadata::MetadataError;
use crate::rpc::RpcError;
use crate::scale::ScaleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedHex(#[from] MalformedHex),
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error(transparent)]
    Keypair(#[from] KeypairError),
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error(transparent)]
    Extrinsic(#[from] ExtrinsicError),
    #[error(transparent)]
    Call(#[from] CallError),
}
