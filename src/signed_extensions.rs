//! Builds the `extra` (signed, transmitted) and `additional_signed`
//! (implicit, signing-payload-only) byte segments for the runtime's
//! declared signed extensions, in the order the runtime declared them.
//! Driven entirely by `Metadata::signed_extension_order`; this
//! core never assumes a fixed extension list.

use crate::chain_properties::ChainProperties;
use crate::metadata::{Metadata, MetadataError};
use crate::scale::{Compact, Encode, Output};

/// The `(extra, additional_signed)` byte pair for one signed-extrinsic
/// construction, assembled in metadata declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignedExtensionPayload {
    pub extra: Vec<u8>,
    pub additional_signed: Vec<u8>,
}

pub struct SignedExtensionEngine<'a> {
    metadata: &'a Metadata,
}

impl<'a> SignedExtensionEngine<'a> {
    pub fn new(metadata: &'a Metadata) -> Self {
        SignedExtensionEngine { metadata }
    }

    pub fn build(
        &self,
        nonce: u64,
        tip: u128,
        chain_props: &ChainProperties,
    ) -> Result<SignedExtensionPayload, MetadataError> {
        let mut payload = SignedExtensionPayload::default();
        for identifier in self.metadata.signed_extension_order() {
            let (included, additional) = contribution(identifier, nonce, tip, chain_props)
                .ok_or_else(|| {
                    log::warn!(
                        "SIGNED_EXTENSIONS: runtime declares '{identifier}', which this core does not recognize"
                    );
                    MetadataError::UnsupportedSignedExtension(identifier.to_string())
                })?;
            payload.extra.extend(included);
            payload.additional_signed.extend(additional);
        }
        log::debug!(
            "SIGNED_EXTENSIONS: built extra ({} bytes) and additional_signed ({} bytes) for {} extensions",
            payload.extra.len(),
            payload.additional_signed.len(),
            self.metadata.signed_extension_order().len()
        );
        Ok(payload)
    }
}

fn contribution(
    identifier: &str,
    nonce: u64,
    tip: u128,
    chain_props: &ChainProperties,
) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut included = Output::new();
    let mut additional = Output::new();
    match identifier {
        "CheckNonZeroSender" => {}
        "CheckSpecVersion" => {
            chain_props.spec_version.encode_to(&mut additional);
        }
        "CheckTxVersion" => {
            chain_props.transaction_version.encode_to(&mut additional);
        }
        "CheckGenesis" => {
            additional.extend(&chain_props.genesis_hash);
        }
        "CheckMortality" | "CheckEra" => {
            included.push_byte(0x00); // Immortal
            additional.extend(&chain_props.checkpoint_hash);
        }
        "CheckNonce" => {
            Compact(nonce as u128).encode_to(&mut included);
        }
        "CheckWeight" => {}
        "ChargeTransactionPayment" => {
            Compact(tip).encode_to(&mut included);
        }
        "ChargeAssetTxPayment" => {
            included.push_byte(0x00); // Option<AssetId>::None
        }
        "CheckMetadataHash" => {
            included.push_byte(0x00); // Mode::Disabled
            additional.push_byte(0x00); // Option<bytes32>::None
        }
        _ => return None,
    }
    Some((included.into_vec(), additional.into_vec()))
}
