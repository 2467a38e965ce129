//! The type registry and pallet-index shapes a V14/V15 metadata blob decodes
//! into. Mirrors `frame-metadata`'s `RuntimeMetadataV14` shape closely enough
//! to round-trip real chains, without depending on `scale-info`/`frame-metadata`
//! themselves (this core owns its own SCALE codec, see `crate::scale`).

use std::collections::HashMap;

use crate::scale::{Compact, Decode, Encode, Input, Output, ScaleError};

pub type TypeId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<String>,
    pub ty: TypeId,
    pub docs: Vec<String>,
}

impl Encode for Field {
    fn encode_to(&self, out: &mut Output) {
        self.name.encode_to(out);
        Compact(self.ty as u128).encode_to(out);
        self.docs.encode_to(out);
    }
}

impl Decode for Field {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let name = Option::<String>::decode(input)?;
        let Compact(ty) = Compact::<u128>::decode(input)?;
        let docs = Vec::<String>::decode(input)?;
        Ok(Field { name, ty: ty as TypeId, docs })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDef {
    pub name: String,
    pub fields: Vec<Field>,
    pub index: u8,
    pub docs: Vec<String>,
}

impl Encode for VariantDef {
    fn encode_to(&self, out: &mut Output) {
        self.name.encode_to(out);
        self.fields.encode_to(out);
        self.index.encode_to(out);
        self.docs.encode_to(out);
    }
}

impl Decode for VariantDef {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(VariantDef {
            name: String::decode(input)?,
            fields: Vec::<Field>::decode(input)?,
            index: u8::decode(input)?,
            docs: Vec::<String>::decode(input)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Char,
    Str,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl Encode for Primitive {
    fn encode_to(&self, out: &mut Output) {
        let tag: u8 = match self {
            Primitive::Bool => 0,
            Primitive::Char => 1,
            Primitive::Str => 2,
            Primitive::U8 => 3,
            Primitive::U16 => 4,
            Primitive::U32 => 5,
            Primitive::U64 => 6,
            Primitive::U128 => 7,
            Primitive::I8 => 8,
            Primitive::I16 => 9,
            Primitive::I32 => 10,
            Primitive::I64 => 11,
            Primitive::I128 => 12,
        };
        out.push_byte(tag);
    }
}

impl Decode for Primitive {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(match input.take_u8("Primitive")? {
            0 => Primitive::Bool,
            1 => Primitive::Char,
            2 => Primitive::Str,
            3 => Primitive::U8,
            4 => Primitive::U16,
            5 => Primitive::U32,
            6 => Primitive::U64,
            7 => Primitive::U128,
            8 => Primitive::I8,
            9 => Primitive::I16,
            10 => Primitive::I32,
            11 => Primitive::I64,
            12 => Primitive::I128,
            other => return Err(ScaleError::BadVariant { name: "Primitive", index: other }),
        })
    }
}

/// A node in the metadata type DAG. `path`/`docs` travel with every variant
/// per spec; only `TypeDef` determines decode shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub path: Vec<String>,
    pub type_def: TypeDef,
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    Composite { fields: Vec<Field> },
    Variant { variants: Vec<VariantDef> },
    Sequence { elem: TypeId },
    Array { len: u32, elem: TypeId },
    Tuple { elems: Vec<TypeId> },
    Primitive(Primitive),
    Compact { inner: TypeId },
    BitSequence { store: TypeId, order: TypeId },
}

impl Encode for Type {
    fn encode_to(&self, out: &mut Output) {
        self.path.encode_to(out);
        match &self.type_def {
            TypeDef::Composite { fields } => {
                out.push_byte(0);
                fields.encode_to(out);
            }
            TypeDef::Variant { variants } => {
                out.push_byte(1);
                variants.encode_to(out);
            }
            TypeDef::Sequence { elem } => {
                out.push_byte(2);
                Compact(*elem as u128).encode_to(out);
            }
            TypeDef::Array { len, elem } => {
                out.push_byte(3);
                len.encode_to(out);
                Compact(*elem as u128).encode_to(out);
            }
            TypeDef::Tuple { elems } => {
                out.push_byte(4);
                Compact(elems.len() as u128).encode_to(out);
                for e in elems {
                    Compact(*e as u128).encode_to(out);
                }
            }
            TypeDef::Primitive(p) => {
                out.push_byte(5);
                p.encode_to(out);
            }
            TypeDef::Compact { inner } => {
                out.push_byte(6);
                Compact(*inner as u128).encode_to(out);
            }
            TypeDef::BitSequence { store, order } => {
                out.push_byte(7);
                Compact(*store as u128).encode_to(out);
                Compact(*order as u128).encode_to(out);
            }
        }
        self.docs.encode_to(out);
    }
}

impl Decode for Type {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let path = Vec::<String>::decode(input)?;
        let tag = input.take_u8("TypeDef tag")?;
        let type_def = match tag {
            0 => TypeDef::Composite { fields: Vec::<Field>::decode(input)? },
            1 => TypeDef::Variant { variants: Vec::<VariantDef>::decode(input)? },
            2 => {
                let Compact(elem) = Compact::<u128>::decode(input)?;
                TypeDef::Sequence { elem: elem as TypeId }
            }
            3 => {
                let len = u32::decode(input)?;
                let Compact(elem) = Compact::<u128>::decode(input)?;
                TypeDef::Array { len, elem: elem as TypeId }
            }
            4 => {
                let Compact(n) = Compact::<u128>::decode(input)?;
                let mut elems = Vec::with_capacity(n as usize);
                for _ in 0..n {
                    let Compact(e) = Compact::<u128>::decode(input)?;
                    elems.push(e as TypeId);
                }
                TypeDef::Tuple { elems }
            }
            5 => TypeDef::Primitive(Primitive::decode(input)?),
            6 => {
                let Compact(inner) = Compact::<u128>::decode(input)?;
                TypeDef::Compact { inner: inner as TypeId }
            }
            7 => {
                let Compact(store) = Compact::<u128>::decode(input)?;
                let Compact(order) = Compact::<u128>::decode(input)?;
                TypeDef::BitSequence { store: store as TypeId, order: order as TypeId }
            }
            other => return Err(ScaleError::BadVariant { name: "TypeDef", index: other }),
        };
        let docs = Vec::<String>::decode(input)?;
        Ok(Type { path, type_def, docs })
    }
}

/// One entry of the portable type registry: `(id, Type)`, `id` compact-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortableType {
    pub id: TypeId,
    pub ty: Type,
}

impl Encode for PortableType {
    fn encode_to(&self, out: &mut Output) {
        Compact(self.id as u128).encode_to(out);
        self.ty.encode_to(out);
    }
}

impl Decode for PortableType {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let Compact(id) = Compact::<u128>::decode(input)?;
        let ty = Type::decode(input)?;
        Ok(PortableType { id: id as TypeId, ty })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageHasher {
    Blake2_128,
    Blake2_256,
    Blake2_128Concat,
    Twox128,
    Twox256,
    Twox64Concat,
    Identity,
}

impl Encode for StorageHasher {
    fn encode_to(&self, out: &mut Output) {
        let tag: u8 = match self {
            StorageHasher::Blake2_128 => 0,
            StorageHasher::Blake2_256 => 1,
            StorageHasher::Blake2_128Concat => 2,
            StorageHasher::Twox128 => 3,
            StorageHasher::Twox256 => 4,
            StorageHasher::Twox64Concat => 5,
            StorageHasher::Identity => 6,
        };
        out.push_byte(tag);
    }
}

impl Decode for StorageHasher {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(match input.take_u8("StorageHasher")? {
            0 => StorageHasher::Blake2_128,
            1 => StorageHasher::Blake2_256,
            2 => StorageHasher::Blake2_128Concat,
            3 => StorageHasher::Twox128,
            4 => StorageHasher::Twox256,
            5 => StorageHasher::Twox64Concat,
            6 => StorageHasher::Identity,
            other => return Err(ScaleError::BadVariant { name: "StorageHasher", index: other }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageEntryType {
    Plain { value: TypeId },
    Map { hashers: Vec<StorageHasher>, key: TypeId, value: TypeId },
}

impl Encode for StorageEntryType {
    fn encode_to(&self, out: &mut Output) {
        match self {
            StorageEntryType::Plain { value } => {
                out.push_byte(0);
                Compact(*value as u128).encode_to(out);
            }
            StorageEntryType::Map { hashers, key, value } => {
                out.push_byte(1);
                hashers.encode_to(out);
                Compact(*key as u128).encode_to(out);
                Compact(*value as u128).encode_to(out);
            }
        }
    }
}

impl Decode for StorageEntryType {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(match input.take_u8("StorageEntryType")? {
            0 => {
                let Compact(value) = Compact::<u128>::decode(input)?;
                StorageEntryType::Plain { value: value as TypeId }
            }
            1 => {
                let hashers = Vec::<StorageHasher>::decode(input)?;
                let Compact(key) = Compact::<u128>::decode(input)?;
                let Compact(value) = Compact::<u128>::decode(input)?;
                StorageEntryType::Map { hashers, key: key as TypeId, value: value as TypeId }
            }
            other => return Err(ScaleError::BadVariant { name: "StorageEntryType", index: other }),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEntryModifier {
    Optional,
    Default,
}

impl Encode for StorageEntryModifier {
    fn encode_to(&self, out: &mut Output) {
        out.push_byte(match self {
            StorageEntryModifier::Optional => 0,
            StorageEntryModifier::Default => 1,
        });
    }
}

impl Decode for StorageEntryModifier {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(match input.take_u8("StorageEntryModifier")? {
            0 => StorageEntryModifier::Optional,
            1 => StorageEntryModifier::Default,
            other => {
                return Err(ScaleError::BadVariant { name: "StorageEntryModifier", index: other })
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    pub name: String,
    pub modifier: StorageEntryModifier,
    pub ty: StorageEntryType,
    pub default: Vec<u8>,
    pub docs: Vec<String>,
}

impl Encode for StorageEntry {
    fn encode_to(&self, out: &mut Output) {
        self.name.encode_to(out);
        self.modifier.encode_to(out);
        self.ty.encode_to(out);
        self.default.encode_to(out);
        self.docs.encode_to(out);
    }
}

impl Decode for StorageEntry {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(StorageEntry {
            name: String::decode(input)?,
            modifier: StorageEntryModifier::decode(input)?,
            ty: StorageEntryType::decode(input)?,
            default: Vec::<u8>::decode(input)?,
            docs: Vec::<String>::decode(input)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletStorage {
    pub prefix: String,
    pub entries: Vec<StorageEntry>,
}

impl Encode for PalletStorage {
    fn encode_to(&self, out: &mut Output) {
        self.prefix.encode_to(out);
        self.entries.encode_to(out);
    }
}

impl Decode for PalletStorage {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(PalletStorage {
            prefix: String::decode(input)?,
            entries: Vec::<StorageEntry>::decode(input)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletConstant {
    pub name: String,
    pub ty: TypeId,
    pub value: Vec<u8>,
    pub docs: Vec<String>,
}

impl Encode for PalletConstant {
    fn encode_to(&self, out: &mut Output) {
        self.name.encode_to(out);
        Compact(self.ty as u128).encode_to(out);
        self.value.encode_to(out);
        self.docs.encode_to(out);
    }
}

impl Decode for PalletConstant {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let name = String::decode(input)?;
        let Compact(ty) = Compact::<u128>::decode(input)?;
        let value = Vec::<u8>::decode(input)?;
        let docs = Vec::<String>::decode(input)?;
        Ok(PalletConstant { name, ty: ty as TypeId, value, docs })
    }
}

/// Pallet description as declared by the runtime, plus the `calls` index
/// derived after type-registry resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletInfo {
    pub name: String,
    pub storage: Option<PalletStorage>,
    pub calls_type_id: Option<TypeId>,
    pub events_type_id: Option<TypeId>,
    pub constants: Vec<PalletConstant>,
    pub errors_type_id: Option<TypeId>,
    pub index: u8,
    pub docs: Vec<String>,
    pub calls: HashMap<String, u8>,
}

impl PalletInfo {
    fn decode_without_calls(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let name = String::decode(input)?;
        let storage = Option::<PalletStorage>::decode(input)?;
        let calls_type_id = decode_optional_type_id(input)?;
        let events_type_id = decode_optional_type_id(input)?;
        let constants = Vec::<PalletConstant>::decode(input)?;
        let errors_type_id = decode_optional_type_id(input)?;
        let index = u8::decode(input)?;
        let docs = Vec::<String>::decode(input)?;
        Ok(PalletInfo {
            name,
            storage,
            calls_type_id,
            events_type_id,
            constants,
            errors_type_id,
            index,
            docs,
            calls: HashMap::new(),
        })
    }
}

fn decode_optional_type_id(input: &mut Input<'_>) -> Result<Option<TypeId>, ScaleError> {
    match input.take_u8("Option<TypeId> tag")? {
        0x00 => Ok(None),
        0x01 => {
            let Compact(id) = Compact::<u128>::decode(input)?;
            Ok(Some(id as TypeId))
        }
        other => Err(ScaleError::BadVariant { name: "Option<TypeId>", index: other }),
    }
}

fn encode_optional_type_id(id: &Option<TypeId>, out: &mut Output) {
    match id {
        None => out.push_byte(0x00),
        Some(id) => {
            out.push_byte(0x01);
            Compact(*id as u128).encode_to(out);
        }
    }
}

impl Encode for PalletInfo {
    fn encode_to(&self, out: &mut Output) {
        self.name.encode_to(out);
        self.storage.encode_to(out);
        encode_optional_type_id(&self.calls_type_id, out);
        encode_optional_type_id(&self.events_type_id, out);
        self.constants.encode_to(out);
        encode_optional_type_id(&self.errors_type_id, out);
        self.index.encode_to(out);
        self.docs.encode_to(out);
    }
}

impl Decode for PalletInfo {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Self::decode_without_calls(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedExtensionDecl {
    pub identifier: String,
    pub included_type_id: TypeId,
    pub additional_type_id: TypeId,
}

impl Encode for SignedExtensionDecl {
    fn encode_to(&self, out: &mut Output) {
        self.identifier.encode_to(out);
        Compact(self.included_type_id as u128).encode_to(out);
        Compact(self.additional_type_id as u128).encode_to(out);
    }
}

impl Decode for SignedExtensionDecl {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        let identifier = String::decode(input)?;
        let Compact(included) = Compact::<u128>::decode(input)?;
        let Compact(additional) = Compact::<u128>::decode(input)?;
        Ok(SignedExtensionDecl {
            identifier,
            included_type_id: included as TypeId,
            additional_type_id: additional as TypeId,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtrinsicMetadata {
    pub version: u8,
    pub signed_extensions: Vec<SignedExtensionDecl>,
}

impl Encode for ExtrinsicMetadata {
    fn encode_to(&self, out: &mut Output) {
        self.version.encode_to(out);
        self.signed_extensions.encode_to(out);
    }
}

impl Decode for ExtrinsicMetadata {
    fn decode(input: &mut Input<'_>) -> Result<Self, ScaleError> {
        Ok(ExtrinsicMetadata {
            version: u8::decode(input)?,
            signed_extensions: Vec::<SignedExtensionDecl>::decode(input)?,
        })
    }
}
