//! Builds pallet-call byte strings (`pallet_index || call_index ||
//! arguments`), resolving indices through the metadata engine rather than
//! hard-coding them.

use thiserror::Error;

use crate::metadata::{Metadata, MetadataError};
use crate::scale::{Compact, Encode, Output};
use crate::xcm::transfer::{self, XcmTransferVariant};
use crate::xcm::{VersionedAssets, VersionedLocation, WeightLimit};

/// Errors building a call. Distinct from `MetadataError`: a call can fail to
/// build either because the runtime doesn't declare the requested
/// pallet/call, or because the caller supplied an address kind this core
/// doesn't encode for.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("destination address kind is not supported by this core")]
    AddressTypeUnsupported,
}

/// A fully-resolved pallet call: `pallet_index || call_index || arguments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub pallet_index: u8,
    pub call_index: u8,
    pub arguments: Vec<u8>,
}

impl Call {
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Output::new();
        out.push_byte(self.pallet_index);
        out.push_byte(self.call_index);
        out.extend(&self.arguments);
        out.into_vec()
    }
}

/// The `MultiAddress` enum as declared by `frame_system`: a destination can
/// be named by its raw account id, an assigned index, a raw byte string, or
/// a foreign-chain address width. This core only ever *builds* calls against
/// `Id` — see `CallEncoder::balances_transfer` — but models the full wire
/// shape so a caller passing through an address recovered from elsewhere
/// (e.g. an indexed or raw-keyed account) gets a typed rejection instead of
/// the wrong bytes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiAddress {
    Id([u8; 32]),
    Index(u64),
    Raw(Vec<u8>),
    Address32([u8; 32]),
    Address20([u8; 20]),
}

impl Encode for MultiAddress {
    fn encode_to(&self, out: &mut Output) {
        match self {
            MultiAddress::Id(id) => {
                out.push_byte(0x00);
                out.extend(id);
            }
            MultiAddress::Index(index) => {
                out.push_byte(0x01);
                Compact(*index as u128).encode_to(out);
            }
            MultiAddress::Raw(bytes) => {
                out.push_byte(0x02);
                bytes.encode_to(out);
            }
            MultiAddress::Address32(bytes) => {
                out.push_byte(0x03);
                out.extend(bytes);
            }
            MultiAddress::Address20(bytes) => {
                out.push_byte(0x04);
                out.extend(bytes);
            }
        }
    }
}

/// A call's destination, restricted to the one `MultiAddress` variant this
/// core builds calls against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient(pub [u8; 32]);

impl From<Recipient> for MultiAddress {
    fn from(recipient: Recipient) -> Self {
        MultiAddress::Id(recipient.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    AllowDeath,
    KeepAlive,
}

impl TransferKind {
    fn call_name(self) -> &'static str {
        match self {
            TransferKind::AllowDeath => "transfer_allow_death",
            TransferKind::KeepAlive => "transfer_keep_alive",
        }
    }
}

/// Builds calls for the pallets this core supports natively, always
/// resolving `(pallet_index, call_index)` through a `Metadata` instance.
pub struct CallEncoder<'a> {
    metadata: &'a Metadata,
}

impl<'a> CallEncoder<'a> {
    pub fn new(metadata: &'a Metadata) -> Self {
        CallEncoder { metadata }
    }

    pub fn balances_transfer(
        &self,
        kind: TransferKind,
        dest: impl Into<MultiAddress>,
        amount: u128,
    ) -> Result<Vec<u8>, CallError> {
        let dest = dest.into();
        if !matches!(dest, MultiAddress::Id(_)) {
            log::warn!("CALL: balances_transfer destination is not MultiAddress::Id");
            return Err(CallError::AddressTypeUnsupported);
        }
        let (pallet_index, call_index) = self.metadata.call_index("Balances", kind.call_name())?;
        let mut arguments = Output::new();
        dest.encode_to(&mut arguments);
        Compact(amount).encode_to(&mut arguments);
        Ok(Call { pallet_index, call_index, arguments: arguments.into_vec() }.into_bytes())
    }

    pub fn system_remark(&self, payload: &[u8]) -> Result<Vec<u8>, MetadataError> {
        let (pallet_index, call_index) = self.metadata.call_index("System", "remark")?;
        let mut arguments = Output::new();
        payload.to_vec().encode_to(&mut arguments);
        Ok(Call { pallet_index, call_index, arguments: arguments.into_vec() }.into_bytes())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn xcm_transfer(
        &self,
        variant: XcmTransferVariant,
        dest: VersionedLocation,
        beneficiary: VersionedLocation,
        assets: VersionedAssets,
        fee_asset_item: u32,
        weight_limit: WeightLimit,
    ) -> Result<Vec<u8>, MetadataError> {
        let (pallet_index, call_index) =
            self.metadata.call_index("PolkadotXcm", variant.call_name())?;
        let arguments =
            transfer::encode_arguments(dest, beneficiary, assets, fee_asset_item, weight_limit);
        Ok(Call { pallet_index, call_index, arguments }.into_bytes())
    }

    /// Escape hatch: build a call by pallet/call name with caller-supplied,
    /// already-SCALE-encoded argument bytes.
    pub fn custom(
        &self,
        pallet_name: &str,
        call_name: &str,
        arg_bytes: Vec<u8>,
    ) -> Result<Vec<u8>, MetadataError> {
        let (pallet_index, call_index) = self.metadata.call_index(pallet_name, call_name)?;
        Ok(Call { pallet_index, call_index, arguments: arg_bytes }.into_bytes())
    }
}
