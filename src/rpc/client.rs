//! `RpcClient`: the typed facade over a caller-supplied `JsonRpcTransport`.
//! Metadata and runtime-version lookups are memoized behind a single lock
//! until explicitly invalidated.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::bytes;
use crate::crypto::{CryptoCapability, DefaultCrypto};
use crate::metadata::Metadata;

use super::types::{AccountInfo, RuntimeVersion, SystemProperties};
use super::{JsonRpcTransport, RpcError, StatusStream};

#[derive(Default)]
struct Cache {
    metadata: Option<Arc<Metadata>>,
    runtime_version: Option<RuntimeVersion>,
}

pub struct RpcClient<T: JsonRpcTransport> {
    transport: T,
    cache: Mutex<Cache>,
}

impl<T: JsonRpcTransport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        RpcClient { transport, cache: Mutex::new(Cache::default()) }
    }

    /// Drop any memoized metadata/runtime version, forcing the next lookup
    /// to hit the transport again.
    pub fn invalidate_cache(&self) {
        let mut cache = self.cache.lock();
        cache.metadata = None;
        cache.runtime_version = None;
    }

    pub async fn chain_get_block_hash(&self, number: Option<u64>) -> Result<[u8; 32], RpcError> {
        let params = match number {
            Some(n) => json!([n]),
            None => json!([]),
        };
        let hex = self.call_hex("chain_getBlockHash", params).await?;
        decode_hash32(&hex)
    }

    pub async fn chain_get_finalized_head(&self) -> Result<[u8; 32], RpcError> {
        let hex = self.call_hex("chain_getFinalizedHead", json!([])).await?;
        decode_hash32(&hex)
    }

    pub async fn state_get_runtime_version(&self) -> Result<RuntimeVersion, RpcError> {
        if let Some(cached) = self.cache.lock().runtime_version.clone() {
            return Ok(cached);
        }
        let value = self.transport.request("state_getRuntimeVersion", json!([])).await?;
        let version: RuntimeVersion = serde_json::from_value(value)
            .map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
        self.cache.lock().runtime_version = Some(version.clone());
        Ok(version)
    }

    pub async fn state_get_metadata(&self) -> Result<Arc<Metadata>, RpcError> {
        if let Some(cached) = self.cache.lock().metadata.clone() {
            return Ok(cached);
        }
        let hex = self.call_hex("state_getMetadata", json!([])).await?;
        let blob = bytes::from_hex(&hex)
            .map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
        let metadata = Arc::new(
            Metadata::parse(&blob).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?,
        );
        self.cache.lock().metadata = Some(metadata.clone());
        Ok(metadata)
    }

    pub async fn state_get_storage(
        &self,
        key: &[u8],
        at: Option<[u8; 32]>,
    ) -> Result<Option<Vec<u8>>, RpcError> {
        let params = storage_params(key, at);
        let value = self.transport.request("state_getStorage", params).await?;
        if value.is_null() {
            return Ok(None);
        }
        let hex: String =
            serde_json::from_value(value).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
        let bytes = bytes::from_hex(&hex).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
        Ok(Some(bytes))
    }

    pub async fn state_get_keys(
        &self,
        prefix: &[u8],
        at: Option<[u8; 32]>,
    ) -> Result<Vec<Vec<u8>>, RpcError> {
        let params = storage_params(prefix, at);
        let value = self.transport.request("state_getKeys", params).await?;
        let hexes: Vec<String> =
            serde_json::from_value(value).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
        hexes
            .into_iter()
            .map(|h| bytes::from_hex(&h).map_err(|e| RpcError::RpcResponseMalformed(e.to_string())))
            .collect()
    }

    pub async fn system_properties(&self) -> Result<SystemProperties, RpcError> {
        let value = self.transport.request("system_properties", json!([])).await?;
        serde_json::from_value(value).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))
    }

    /// Builds the `System::Account` storage key
    /// (`twox128("System") || twox128("Account") || blake2_128(pubkey) || pubkey`)
    /// and decodes the stored `AccountInfo`.
    pub async fn system_account(&self, public: &[u8; 32]) -> Result<AccountInfo, RpcError> {
        let crypto = DefaultCrypto;
        let mut key = Vec::with_capacity(16 + 16 + 16 + 32);
        key.extend_from_slice(&crypto.twox128(b"System"));
        key.extend_from_slice(&crypto.twox128(b"Account"));
        key.extend_from_slice(&crypto.blake2_128(public));
        key.extend_from_slice(public);

        let raw = self
            .state_get_storage(&key, None)
            .await?
            .ok_or_else(|| RpcError::RpcResponseMalformed("account not found".to_string()))?;
        let mut input = crate::scale::Input::new(&raw);
        crate::scale::Decode::decode(&mut input)
            .map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))
    }

    pub async fn system_account_next_index(&self, address: &str) -> Result<u32, RpcError> {
        let value =
            self.transport.request("system_accountNextIndex", json!([address])).await?;
        serde_json::from_value(value).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))
    }

    pub async fn system_dry_run(
        &self,
        extrinsic_hex: &str,
        at: Option<[u8; 32]>,
    ) -> Result<Vec<u8>, RpcError> {
        let params = match at {
            Some(hash) => json!([extrinsic_hex, bytes::to_hex_prefixed(&hash)]),
            None => json!([extrinsic_hex]),
        };
        let hex = self.call_hex("system_dryRun", params).await?;
        bytes::from_hex(&hex).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))
    }

    pub async fn author_submit_extrinsic(&self, extrinsic: &[u8]) -> Result<[u8; 32], RpcError> {
        let hex = bytes::to_hex_prefixed(extrinsic);
        let result_hex = self.call_hex("author_submitExtrinsic", json!([hex])).await?;
        decode_hash32(&result_hex)
    }

    async fn call_hex(&self, method: &str, params: Value) -> Result<String, RpcError> {
        let value = self.transport.request(method, params).await?;
        serde_json::from_value(value).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))
    }
}

fn storage_params(key: &[u8], at: Option<[u8; 32]>) -> Value {
    match at {
        Some(hash) => json!([bytes::to_hex_prefixed(key), bytes::to_hex_prefixed(&hash)]),
        None => json!([bytes::to_hex_prefixed(key)]),
    }
}

fn decode_hash32(hex: &str) -> Result<[u8; 32], RpcError> {
    let bytes = bytes::from_hex(hex).map_err(|e| RpcError::RpcResponseMalformed(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| RpcError::RpcResponseMalformed("expected a 32-byte hash".to_string()))
}

/// A transport that also supports long-lived subscriptions, needed for
/// `author_submitAndWatchExtrinsic`. Kept separate from `JsonRpcTransport`
/// so a transport only capable of one-shot request/response still
/// implements the bulk of this facade.
#[async_trait]
pub trait SubscriptionTransport: JsonRpcTransport {
    async fn subscribe(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Box<dyn StatusStream>, RpcError>;
}

impl<T: SubscriptionTransport> RpcClient<T> {
    pub async fn author_submit_and_watch_extrinsic(
        &self,
        extrinsic: &[u8],
    ) -> Result<Box<dyn StatusStream>, RpcError> {
        let hex = bytes::to_hex_prefixed(extrinsic);
        self.transport.subscribe("author_submitAndWatchExtrinsic", json!([hex])).await
    }
}
