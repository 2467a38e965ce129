//! Hand-built V14 metadata blobs exercised end-to-end through `Metadata::parse`
//! and the public lookup API, separate from the unit-level fixtures
//! co-located in `src/metadata/decoder.rs`.

use std::collections::HashMap;

use subclient_core::metadata::{
    ExtrinsicMetadata, Field, Metadata, MetadataError, PalletConstant, PalletInfo, PortableType,
    SignedExtensionDecl, Type, TypeDef, VariantDef,
};
use subclient_core::scale::Encode;

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

fn build_blob(pallets: Vec<PalletInfo>, portable_types: Vec<PortableType>) -> Vec<u8> {
    let mut out = subclient_core::scale::Output::new();
    out.extend(b"meta");
    out.push_byte(14);
    portable_types.encode_to(&mut out);
    pallets.encode_to(&mut out);
    let extrinsic = ExtrinsicMetadata {
        version: 4,
        signed_extensions: vec![
            SignedExtensionDecl {
                identifier: "CheckSpecVersion".into(),
                included_type_id: 0,
                additional_type_id: 1,
            },
            SignedExtensionDecl {
                identifier: "CheckNonce".into(),
                included_type_id: 2,
                additional_type_id: 0,
            },
        ],
    };
    extrinsic.encode_to(&mut out);
    out.into_vec()
}

fn two_pallet_fixture() -> Vec<u8> {
    let balances_calls = calls_variant_type(&[
        ("transfer_allow_death", 0),
        ("transfer_keep_alive", 1),
        ("transfer_all", 2),
        ("force_transfer", 4), // gap at index 3
    ]);
    let system_calls = calls_variant_type(&[("remark", 0), ("remark_with_event", 7)]);

    let portable_types = vec![
        PortableType { id: 10, ty: balances_calls },
        PortableType { id: 20, ty: system_calls },
    ];

    let balances = PalletInfo {
        name: "Balances".into(),
        storage: None,
        calls_type_id: Some(10),
        events_type_id: None,
        constants: vec![PalletConstant {
            name: "ExistentialDeposit".into(),
            ty: 0,
            value: 1_000_000_000u128.encode(),
            docs: vec!["the minimum balance a non-dust account must hold".into()],
        }],
        errors_type_id: None,
        index: 5,
        docs: vec![],
        calls: HashMap::new(),
    };
    let system = PalletInfo {
        name: "System".into(),
        storage: None,
        calls_type_id: Some(20),
        events_type_id: None,
        constants: vec![],
        errors_type_id: None,
        index: 0,
        docs: vec![],
        calls: HashMap::new(),
    };

    build_blob(vec![balances, system], portable_types)
}

#[test]
fn parses_two_pallets_and_resolves_calls_by_name() {
    let blob = two_pallet_fixture();
    let metadata = Metadata::parse(&blob).unwrap();

    assert_eq!(metadata.call_index("Balances", "transfer_keep_alive").unwrap(), (5, 1));
    assert_eq!(metadata.call_index("Balances", "force_transfer").unwrap(), (5, 4));
    assert_eq!(metadata.call_index("System", "remark_with_event").unwrap(), (0, 7));
}

#[test]
fn constant_lookup_decodes_the_declared_type() {
    let blob = two_pallet_fixture();
    let metadata = Metadata::parse(&blob).unwrap();
    let deposit = metadata.constant_u128("Balances", "ExistentialDeposit").unwrap();
    assert_eq!(deposit, 1_000_000_000u128);
}

#[test]
fn signed_extension_order_and_type_ids_round_trip() {
    let blob = two_pallet_fixture();
    let metadata = Metadata::parse(&blob).unwrap();
    assert_eq!(metadata.signed_extension_order(), vec!["CheckSpecVersion", "CheckNonce"]);
    assert_eq!(metadata.signed_extension_type_ids("CheckNonce"), Some((2, 0)));
    assert_eq!(metadata.signed_extension_type_ids("ChargeTransactionPayment"), None);
}

#[test]
fn unknown_pallet_and_call_are_distinguishable_errors() {
    let blob = two_pallet_fixture();
    let metadata = Metadata::parse(&blob).unwrap();

    assert_eq!(
        metadata.call_index("Staking", "bond").unwrap_err(),
        MetadataError::PalletNotFound("Staking".to_string())
    );
    assert_eq!(
        metadata.call_index("Balances", "does_not_exist").unwrap_err(),
        MetadataError::CallNotFound {
            pallet: "Balances".to_string(),
            call: "does_not_exist".to_string(),
        }
    );
}
