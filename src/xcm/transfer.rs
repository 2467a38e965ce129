//! The three transfer call shapes this core builds against `PolkadotXcm`:
//! limited teleport, limited reserve transfer, and the newer `transfer_assets`
//! entry point. All three share one argument layout.

use crate::scale::{Encode, Output};

use super::{VersionedAssets, VersionedLocation, WeightLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XcmTransferVariant {
    LimitedTeleportAssets,
    LimitedReserveTransferAssets,
    TransferAssets,
}

impl XcmTransferVariant {
    pub fn call_name(self) -> &'static str {
        match self {
            XcmTransferVariant::LimitedTeleportAssets => "limited_teleport_assets",
            XcmTransferVariant::LimitedReserveTransferAssets => "limited_reserve_transfer_assets",
            XcmTransferVariant::TransferAssets => "transfer_assets",
        }
    }
}

/// Argument order: `dest, beneficiary, assets, u32(fee_asset_item), weight_limit`.
pub fn encode_arguments(
    dest: VersionedLocation,
    beneficiary: VersionedLocation,
    assets: VersionedAssets,
    fee_asset_item: u32,
    weight_limit: WeightLimit,
) -> Vec<u8> {
    let mut out = Output::new();
    dest.encode_to(&mut out);
    beneficiary.encode_to(&mut out);
    assets.encode_to(&mut out);
    fee_asset_item.encode_to(&mut out);
    weight_limit.encode_to(&mut out);
    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xcm::{Fungibility, Junctions, Location};

    #[test]
    fn call_names_match_runtime_dispatchable_names() {
        assert_eq!(XcmTransferVariant::LimitedTeleportAssets.call_name(), "limited_teleport_assets");
        assert_eq!(
            XcmTransferVariant::LimitedReserveTransferAssets.call_name(),
            "limited_reserve_transfer_assets"
        );
        assert_eq!(XcmTransferVariant::TransferAssets.call_name(), "transfer_assets");
    }

    #[test]
    fn argument_order_is_dest_beneficiary_assets_fee_item_weight() {
        let dest = VersionedLocation(Location { parents: 1, interior: Junctions::Here });
        let beneficiary = VersionedLocation(Location { parents: 0, interior: Junctions::Here });
        let assets = VersionedAssets(vec![]);
        let bytes = encode_arguments(dest.clone(), beneficiary.clone(), assets, 0, WeightLimit::Unlimited);

        let mut expected = Output::new();
        dest.encode_to(&mut expected);
        beneficiary.encode_to(&mut expected);
        VersionedAssets(vec![]).encode_to(&mut expected);
        0u32.encode_to(&mut expected);
        WeightLimit::Unlimited.encode_to(&mut expected);
        assert_eq!(bytes, expected.into_vec());
    }
}
