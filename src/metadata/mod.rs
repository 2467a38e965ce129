//! Parses a runtime's self-description (a V14/V15 metadata blob) into a type
//! registry and pallet index, and resolves names against it so the rest of
//! this core never hard-codes a pallet or call index.

pub mod decoder;
pub mod error;
pub mod types;

use std::collections::HashMap;

pub use error::MetadataError;
pub use types::{
    ExtrinsicMetadata, Field, PalletConstant, PalletInfo, PalletStorage, PortableType, Primitive,
    SignedExtensionDecl, StorageEntry, StorageEntryModifier, StorageEntryType, StorageHasher, Type,
    TypeDef, TypeId, VariantDef,
};

use crate::scale::{Compact, Decode, Input};

/// A chain's decoded self-description. Once parsed, all lookups are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: u8,
    pub types: HashMap<TypeId, Type>,
    pub pallets: HashMap<String, PalletInfo>,
    /// `(identifier, included_type_id, additional_type_id)`, in the order the
    /// runtime declared them — order is part of the wire format.
    pub signed_extensions: Vec<(String, TypeId, TypeId)>,
}

impl Metadata {
    pub fn parse(blob: &[u8]) -> Result<Metadata, MetadataError> {
        decoder::parse(blob)
    }

    /// Resolve `(pallet, call) → (pallet_index, call_index)`.
    pub fn call_index(&self, pallet: &str, call: &str) -> Result<(u8, u8), MetadataError> {
        let info = self
            .pallets
            .get(pallet)
            .ok_or_else(|| MetadataError::PalletNotFound(pallet.to_string()))?;
        let call_index = info.calls.get(call).copied().ok_or_else(|| MetadataError::CallNotFound {
            pallet: pallet.to_string(),
            call: call.to_string(),
        })?;
        Ok((info.index, call_index))
    }

    /// The runtime-declared signed-extension identifiers, in wire order.
    pub fn signed_extension_order(&self) -> Vec<&str> {
        self.signed_extensions.iter().map(|(name, _, _)| name.as_str()).collect()
    }

    /// The identifiers a given signed extension contributes
    /// `(included_type_id, additional_type_id)` for, or `None` if the runtime
    /// never declared it.
    pub fn signed_extension_type_ids(&self, identifier: &str) -> Option<(TypeId, TypeId)> {
        self.signed_extensions
            .iter()
            .find(|(name, _, _)| name == identifier)
            .map(|(_, included, additional)| (*included, *additional))
    }

    /// Raw SCALE-encoded bytes of a pallet constant.
    pub fn constant(&self, pallet: &str, name: &str) -> Result<&[u8], MetadataError> {
        let info = self
            .pallets
            .get(pallet)
            .ok_or_else(|| MetadataError::PalletNotFound(pallet.to_string()))?;
        info.constants
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_slice())
            .ok_or_else(|| MetadataError::ConstantNotFound {
                pallet: pallet.to_string(),
                name: name.to_string(),
            })
    }

    /// Typed getter for a `u32`-shaped constant (e.g. a weight limit).
    pub fn constant_u32(&self, pallet: &str, name: &str) -> Result<u32, MetadataError> {
        let bytes = self.constant(pallet, name)?;
        Ok(u32::decode(&mut Input::new(bytes))?)
    }

    /// Typed getter for a `u128`-shaped constant (e.g. `ExistentialDeposit`).
    pub fn constant_u128(&self, pallet: &str, name: &str) -> Result<u128, MetadataError> {
        let bytes = self.constant(pallet, name)?;
        Ok(u128::decode(&mut Input::new(bytes))?)
    }

    /// Typed getter for a `Compact<u128>`-shaped constant.
    pub fn constant_compact_u128(&self, pallet: &str, name: &str) -> Result<u128, MetadataError> {
        let bytes = self.constant(pallet, name)?;
        let Compact(value) = Compact::<u128>::decode(&mut Input::new(bytes))?;
        Ok(value)
    }

    pub fn type_by_id(&self, id: TypeId) -> Result<&Type, MetadataError> {
        self.types.get(&id).ok_or(MetadataError::TypeNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pallet_is_a_typed_error() {
        let metadata = Metadata {
            version: 14,
            types: HashMap::new(),
            pallets: HashMap::new(),
            signed_extensions: vec![],
        };
        let err = metadata.call_index("Balances", "transfer_keep_alive").unwrap_err();
        assert_eq!(err, MetadataError::PalletNotFound("Balances".to_string()));
    }

    #[test]
    fn signed_extension_order_preserves_declaration_order() {
        let metadata = Metadata {
            version: 14,
            types: HashMap::new(),
            pallets: HashMap::new(),
            signed_extensions: vec![
                ("CheckSpecVersion".to_string(), 1, 2),
                ("CheckNonce".to_string(), 3, 4),
            ],
        };
        assert_eq!(metadata.signed_extension_order(), vec!["CheckSpecVersion", "CheckNonce"]);
    }
}
