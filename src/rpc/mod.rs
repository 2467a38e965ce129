//! Thin typed adapter over an abstract JSON-RPC transport. The
//! transport itself — HTTP/WebSocket framing, retries, reconnects — is
//! deliberately out of scope; callers plug in their own.

pub mod client;
pub mod types;

pub use client::{RpcClient, SubscriptionTransport};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures surfaced by the RPC facade. Transport-layer failures and
/// RPC-level `error` bodies are distinguished so callers can tell "the
/// socket is down" from "the node rejected this call".
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    RpcTransport(String),
    #[error("RPC call failed: {code} {message}")]
    RpcCall { code: i64, message: String },
    #[error("RPC response did not match the expected shape: {0}")]
    RpcResponseMalformed(String),
}

/// The capability this crate depends on for talking to a node: a single
/// JSON-RPC 2.0 `request`. Retries, reconnects, and framing belong to the
/// implementation a host application supplies.
#[async_trait]
pub trait JsonRpcTransport: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// A pull-based status update from `author_submitAndWatchExtrinsic`. Kept as
/// a plain async trait rather than committing the core to `futures::Stream`
/// so a transport backed by blocking long-polling can implement it just as
/// naturally as one backed by a WebSocket subscription.
#[async_trait]
pub trait StatusStream: Send {
    /// The next status update, or `None` once the subscription ends.
    async fn next(&mut self) -> Result<Option<types::TransactionStatus>, RpcError>;
}
