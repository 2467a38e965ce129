//! Wire-level shapes returned by the RPC methods this facade calls.

use serde::{Deserialize, Serialize};

use crate::scale::{Decode, Input, ScaleError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeVersion {
    pub spec_version: u32,
    pub transaction_version: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemProperties {
    pub ss58_format: Option<u16>,
    pub token_decimals: Option<u8>,
    pub token_symbol: Option<String>,
}

/// Decoded `System::Account` storage entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountInfo {
    pub nonce: u32,
    pub consumers: u32,
    pub providers: u32,
    pub sufficients: u32,
    pub data: AccountData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountData {
    pub free: u128,
    pub reserved: u128,
    pub frozen: u128,
    pub flags: u128,
}

impl Decode for AccountData {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(AccountData {
            free: u128::decode(input)?,
            reserved: u128::decode(input)?,
            frozen: u128::decode(input)?,
            flags: u128::decode(input)?,
        })
    }
}

impl Decode for AccountInfo {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(AccountInfo {
            nonce: u32::decode(input)?,
            consumers: u32::decode(input)?,
            providers: u32::decode(input)?,
            sufficients: u32::decode(input)?,
            data: AccountData::decode(input)?,
        })
    }
}

/// A status update from `author_submitAndWatchExtrinsic`. Only the
/// terminal/near-terminal states a caller usually branches on are modeled;
/// anything else surfaces as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    Future,
    Ready,
    InBlock([u8; 32]),
    Finalized([u8; 32]),
    Dropped,
    Invalid,
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_version_deserializes_real_node_camel_case_response() {
        let version: RuntimeVersion =
            serde_json::from_str(r#"{"specVersion":9110,"transactionVersion":25}"#).unwrap();
        assert_eq!(version, RuntimeVersion { spec_version: 9110, transaction_version: 25 });
    }

    #[test]
    fn system_properties_deserializes_real_node_camel_case_response() {
        let props: SystemProperties = serde_json::from_str(
            r#"{"ss58Format":0,"tokenDecimals":10,"tokenSymbol":"DOT"}"#,
        )
        .unwrap();
        assert_eq!(
            props,
            SystemProperties {
                ss58_format: Some(0),
                token_decimals: Some(10),
                token_symbol: Some("DOT".to_string()),
            }
        );
    }
}
