//! `VersionedLocation`/`VersionedAssets`: a version tag (`4` in this core)
//! prepended to the inner value. Earlier versions are never emitted, but a
//! decoder recognizing the tag byte is kept for forward compatibility.

use crate::scale::{Encode, Output};

use super::{Asset, Location};

const XCM_V4: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedLocation(pub Location);

impl Encode for VersionedLocation {
    fn encode_to(&self, out: &mut Output) {
        out.push_byte(XCM_V4);
        self.0.encode_to(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedAssets(pub Vec<Asset>);

impl Encode for VersionedAssets {
    fn encode_to(&self, out: &mut Output) {
        out.push_byte(XCM_V4);
        self.0.encode_to(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xcm::{Fungibility, Junctions};

    #[test]
    fn versioned_location_prepends_v4_tag() {
        let loc = VersionedLocation(Location { parents: 1, interior: Junctions::Here });
        let bytes = loc.encode();
        assert_eq!(bytes[0], 4);
        assert_eq!(bytes[1], 1);
        assert_eq!(bytes[2], 0);
    }

    #[test]
    fn versioned_assets_prepends_v4_tag_then_vec_len() {
        let assets = VersionedAssets(vec![Asset {
            id: Location { parents: 0, interior: Junctions::Here },
            fun: Fungibility::Fungible(1),
        }]);
        let bytes = assets.encode();
        assert_eq!(bytes[0], 4);
        assert_eq!(bytes[1], 1 << 2); // Compact<len=1>
    }
}
