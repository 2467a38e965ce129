use thiserror::Error;

use crate::scale::ScaleError;

/// Failures from parsing a metadata blob or resolving names against it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("metadata blob is missing the \"meta\" magic prefix")]
    MagicMissing,
    #[error("unsupported metadata version {0} (only 14 and 15 are supported)")]
    UnsupportedVersion(u8),
    #[error("pallet '{0}' not found in metadata")]
    PalletNotFound(String),
    #[error("call '{call}' not found in pallet '{pallet}'")]
    CallNotFound { pallet: String, call: String },
    #[error("constant '{name}' not found in pallet '{pallet}'")]
    ConstantNotFound { pallet: String, name: String },
    #[error("type id {0} not found in the type registry")]
    TypeNotFound(u32),
    #[error("type id {0} was expected to be a Variant")]
    NotAVariant(u32),
    #[error("signed extension '{0}' is declared by the runtime but unsupported by this core")]
    UnsupportedSignedExtension(String),
    #[error(transparent)]
    Malformed(#[from] ScaleError),
}
