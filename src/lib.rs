//! A lightweight client core for Substrate-based chains: SCALE codec, V14/V15
//! metadata parsing, extrinsic construction and signing, and XCM
//! asset-transfer encoding — everything an application needs to talk to a
//! Substrate chain over JSON-RPC without embedding a full node.
//!
//! The stack is dependency-ordered, leaves first: [`bytes`] and [`crypto`]
//! are the abstract capabilities everything else is built on; [`scale`] is
//! the wire codec; [`metadata`] turns a chain's self-description into typed
//! lookups; [`call`], [`signed_extensions`], and [`extrinsic`] build and sign
//! a transaction; [`xcm`] encodes cross-chain asset transfers; [`rpc`] is the
//! thin typed facade over a caller-supplied transport.
//!
//! This crate never initializes a logger — that's an application concern —
//! but does emit `log` records at module boundaries an operator would want
//! visibility into (metadata resolution, signed-extension gaps, extrinsic
//! assembly, unsupported destination address kinds).

pub mod bytes;
pub mod call;
pub mod chain_properties;
pub mod crypto;
pub mod error;
pub mod extrinsic;
pub mod keypair;
pub mod metadata;
pub mod rpc;
pub mod scale;
pub mod signed_extensions;
pub mod xcm;

pub use error::Error;

/// Common imports for a typical caller: build a keypair, resolve a call
/// through metadata, sign it, submit it.
pub mod prelude {
    pub use crate::call::{CallEncoder, CallError, MultiAddress, Recipient, TransferKind};
    pub use crate::chain_properties::ChainProperties;
    pub use crate::crypto::{CryptoCapability, DefaultCrypto, Scheme};
    pub use crate::error::Error;
    pub use crate::extrinsic::{build_signed, build_unsigned, signing_payload};
    pub use crate::keypair::Keypair;
    pub use crate::metadata::Metadata;
    pub use crate::rpc::{JsonRpcTransport, RpcClient, RpcError};
    pub use crate::scale::{Compact, Decode, Encode};
}
