//! V14/V15 metadata frame parsing: magic, version, type registry, pallets,
//! extrinsic metadata — in that order, all-or-nothing.

use std::collections::HashMap;

use crate::scale::{Decode, Input};

use super::error::MetadataError;
use super::types::{ExtrinsicMetadata, PalletInfo, PortableType, TypeDef, TypeId};
use super::Metadata;

const MAGIC: &[u8; 4] = b"meta";

pub fn parse(blob: &[u8]) -> Result<Metadata, MetadataError> {
    log::debug!("METADATA: parsing blob ({} bytes)", blob.len());
    let mut input = Input::new(blob);

    let magic = input.take(4, "metadata magic")?;
    if magic != MAGIC {
        log::warn!("METADATA: blob is missing the \"meta\" magic prefix");
        return Err(MetadataError::MagicMissing);
    }

    let version = input.take_u8("metadata version")?;
    if version != 14 && version != 15 {
        log::warn!("METADATA: unsupported metadata version {version}");
        return Err(MetadataError::UnsupportedVersion(version));
    }

    let portable_types = Vec::<PortableType>::decode(&mut input)?;
    let mut types: HashMap<TypeId, super::types::Type> = HashMap::with_capacity(portable_types.len());
    for pt in portable_types {
        types.insert(pt.id, pt.ty);
    }

    let raw_pallets = Vec::<PalletInfo>::decode(&mut input)?;
    let extrinsic = ExtrinsicMetadata::decode(&mut input)?;

    let mut pallets = HashMap::with_capacity(raw_pallets.len());
    for mut pallet in raw_pallets {
        if let Some(calls_type_id) = pallet.calls_type_id {
            pallet.calls = resolve_variant_indices(&types, calls_type_id)?;
        }
        pallets.insert(pallet.name.clone(), pallet);
    }

    let signed_extensions = extrinsic
        .signed_extensions
        .into_iter()
        .map(|decl| (decl.identifier, decl.included_type_id, decl.additional_type_id))
        .collect();

    log::debug!(
        "METADATA: parsed version {version} ({} types, {} pallets)",
        types.len(),
        pallets.len()
    );
    Ok(Metadata { version, types, pallets, signed_extensions })
}

fn resolve_variant_indices(
    types: &HashMap<TypeId, super::types::Type>,
    calls_type_id: TypeId,
) -> Result<HashMap<String, u8>, MetadataError> {
    let ty = types.get(&calls_type_id).ok_or(MetadataError::TypeNotFound(calls_type_id))?;
    match &ty.type_def {
        TypeDef::Variant { variants } => {
            Ok(variants.iter().map(|v| (v.name.clone(), v.index)).collect())
        }
        _ => Err(MetadataError::NotAVariant(calls_type_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::types::{Field, PalletConstant, SignedExtensionDecl, Type, VariantDef};
    use crate::scale::{Encode, Output};

    fn calls_variant_type(calls: &[(&str, u8)]) -> Type {
        Type {
            path: vec!["pallet_balances".into(), "Call".into()],
            type_def: TypeDef::Variant {
                variants: calls
                    .iter()
                    .map(|(name, index)| VariantDef {
                        name: name.to_string(),
                        fields: vec![Field { name: None, ty: 0, docs: vec![] }],
                        index: *index,
                        docs: vec![],
                    })
                    .collect(),
            },
            docs: vec![],
        }
    }

    fn build_fixture(pallets: Vec<PalletInfo>, portable_types: Vec<PortableType>) -> Vec<u8> {
        let mut out = Output::new();
        out.extend(MAGIC);
        out.push_byte(14);
        portable_types.encode_to(&mut out);
        pallets.encode_to(&mut out);
        let extrinsic = ExtrinsicMetadata {
            version: 4,
            signed_extensions: vec![SignedExtensionDecl {
                identifier: "CheckNonce".into(),
                included_type_id: 1,
                additional_type_id: 2,
            }],
        };
        extrinsic.encode_to(&mut out);
        out.into_vec()
    }

    #[test]
    fn rejects_missing_magic() {
        let err = parse(b"notmeta").unwrap_err();
        assert_eq!(err, MetadataError::MagicMissing);
    }

    #[test]
    fn rejects_unsupported_version() {
        let mut bytes = MAGIC.to_vec();
        bytes.push(13);
        let err = parse(&bytes).unwrap_err();
        assert_eq!(err, MetadataError::UnsupportedVersion(13));
    }

    #[test]
    fn resolves_non_contiguous_call_indices() {
        let portable_types = vec![PortableType { id: 0, ty: calls_variant_type(&[
            ("transfer_allow_death", 0),
            ("transfer_keep_alive", 1),
            ("force_transfer", 3),
        ]) }];
        let pallet = PalletInfo {
            name: "Balances".into(),
            storage: None,
            calls_type_id: Some(0),
            events_type_id: None,
            constants: vec![PalletConstant {
                name: "ExistentialDeposit".into(),
                ty: 0,
                value: 500u128.encode(),
                docs: vec![],
            }],
            errors_type_id: None,
            index: 5,
            docs: vec![],
            calls: HashMap::new(),
        };
        let blob = build_fixture(vec![pallet], portable_types);

        let metadata = parse(&blob).unwrap();
        let pallet = metadata.pallets.get("Balances").unwrap();
        assert_eq!(pallet.calls.get("force_transfer"), Some(&3));
        assert_eq!(pallet.calls.get("transfer_keep_alive"), Some(&1));
        assert_eq!(metadata.signed_extensions, vec![("CheckNonce".to_string(), 1, 2)]);
    }

    #[test]
    fn truncated_blob_is_rejected() {
        let mut bytes = MAGIC.to_vec();
        bytes.push(14);
        let err = parse(&bytes).unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }
}
