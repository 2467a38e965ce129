//! `ChainProperties`: the handful of per-chain facts the signing pipeline
//! needs, fetched once over RPC and cached for the session.

/// Per-chain facts needed to build and sign extrinsics. Obtained from RPC
/// (`state_getRuntimeVersion`, `chain_getBlockHash(0)`, `system_properties`)
/// and reused across calls within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainProperties {
    pub spec_version: u32,
    pub transaction_version: u32,
    pub genesis_hash: [u8; 32],
    /// The mortality checkpoint hash. Equal to `genesis_hash` for an
    /// Immortal era, which is the only era this core supports.
    pub checkpoint_hash: [u8; 32],
    pub ss58_prefix: u16,
    pub token_decimals: u8,
    pub token_symbol: String,
}

impl ChainProperties {
    /// Build from a genesis hash alone, assuming Immortal mortality (the
    /// checkpoint is the genesis hash) and the given spec/transaction
    /// versions and SS58 prefix.
    pub fn immortal(
        spec_version: u32,
        transaction_version: u32,
        genesis_hash: [u8; 32],
        ss58_prefix: u16,
        token_decimals: u8,
        token_symbol: String,
    ) -> Self {
        ChainProperties {
            spec_version,
            transaction_version,
            genesis_hash,
            checkpoint_hash: genesis_hash,
            ss58_prefix,
            token_decimals,
            token_symbol,
        }
    }
}
