// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime value model: the tagged "arbitrary value" the engine converts.

use crate::descriptor::{Charset, EnumType, SimpleType, TypeDescriptor};
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A runtime value of any type the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Primitives
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Charset(Charset),

    // Composites
    Seq(Vec<Value>),
    Map(MapValue),
    Struct(StructValue),
    Enum(EnumValue),

    // Special
    Null,
}

impl Value {
    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value's own runtime type identity, where one exists.
    ///
    /// `None` for null and for structs (structs have no erased target
    /// identity; they convert into maps, not the other way around).
    pub fn kind(&self) -> Option<SimpleType> {
        match self {
            Self::Bool(_) => Some(SimpleType::Bool),
            Self::I8(_) => Some(SimpleType::I8),
            Self::I16(_) => Some(SimpleType::I16),
            Self::I32(_) => Some(SimpleType::I32),
            Self::I64(_) => Some(SimpleType::I64),
            Self::U8(_) => Some(SimpleType::U8),
            Self::U16(_) => Some(SimpleType::U16),
            Self::U32(_) => Some(SimpleType::U32),
            Self::U64(_) => Some(SimpleType::U64),
            Self::F32(_) => Some(SimpleType::F32),
            Self::F64(_) => Some(SimpleType::F64),
            Self::Char(_) => Some(SimpleType::Char),
            Self::Str(_) => Some(SimpleType::Str),
            Self::Charset(_) => Some(SimpleType::Charset),
            Self::Seq(_) => Some(SimpleType::List),
            Self::Map(_) => Some(SimpleType::Map),
            Self::Enum(e) => Some(SimpleType::Enum(Arc::clone(e.ty()))),
            Self::Struct(_) | Self::Null => None,
        }
    }

    /// Short name of the value's runtime kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::Str(_) => "str",
            Self::Charset(_) => "charset",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
            Self::Enum(_) => "enum",
            Self::Null => "null",
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as char.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as charset.
    pub fn as_charset(&self) -> Option<Charset> {
        match self {
            Self::Charset(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any integer variant to `i128` (covers the full `u64` range).
    pub fn integer(&self) -> Option<i128> {
        match self {
            Self::I8(v) => Some(i128::from(*v)),
            Self::I16(v) => Some(i128::from(*v)),
            Self::I32(v) => Some(i128::from(*v)),
            Self::I64(v) => Some(i128::from(*v)),
            Self::U8(v) => Some(i128::from(*v)),
            Self::U16(v) => Some(i128::from(*v)),
            Self::U32(v) => Some(i128::from(*v)),
            Self::U64(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    /// Widen any float variant to `f64`.
    pub fn float(&self) -> Option<f64> {
        match self {
            Self::F32(v) => Some(f64::from(*v)),
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as map.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as enum value.
    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Wrap a boolean into an atomic cell at the crate border.
    ///
    /// `AtomicBool` is not `Clone`, so the engine normalizes atomic-bool
    /// targets to [`Value::Bool`] and the host constructs the cell here.
    pub fn into_atomic_bool(self) -> Option<AtomicBool> {
        self.as_bool().map(AtomicBool::new)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::I8(v) => v.fmt(f),
            Self::I16(v) => v.fmt(f),
            Self::I32(v) => v.fmt(f),
            Self::I64(v) => v.fmt(f),
            Self::U8(v) => v.fmt(f),
            Self::U16(v) => v.fmt(f),
            Self::U32(v) => v.fmt(f),
            Self::U64(v) => v.fmt(f),
            Self::F32(v) => v.fmt(f),
            Self::F64(v) => v.fmt(f),
            Self::Char(v) => v.fmt(f),
            Self::Str(v) => f.write_str(v),
            Self::Charset(v) => v.fmt(f),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Struct(s) => {
                f.write_str("{")?;
                for (i, (name, v)) in s.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Enum(e) => f.write_str(e.name()),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Insertion-ordered map value carrying its declared key/value types.
///
/// The declared types are what the map pass-through check compares against;
/// ordering follows the underlying entry list (overwrite keeps the original
/// position, matching linked-map semantics).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapValue {
    key_type: TypeDescriptor,
    value_type: TypeDescriptor,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Create an empty map with the given declared key/value types.
    pub fn new(key_type: TypeDescriptor, value_type: TypeDescriptor) -> Self {
        Self {
            key_type,
            value_type,
            entries: Vec::new(),
        }
    }

    /// Declared key type.
    pub fn key_type(&self) -> &TypeDescriptor {
        &self.key_type
    }

    /// Declared value type.
    pub fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }

    /// Insert an entry; an existing key is overwritten in place (last value
    /// wins, original position preserved). Returns the replaced value.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Consume the map, yielding its entries in insertion order.
    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered named fields: the structured "bean" shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructValue {
    fields: Vec<(String, Value)>,
}

impl StructValue {
    /// Create an empty struct value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; an existing field is overwritten in place.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Consume the struct, yielding its fields in declaration order.
    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A value of a runtime-described enum type.
#[derive(Debug, Clone)]
pub struct EnumValue {
    ty: Arc<EnumType>,
    index: usize,
}

impl EnumValue {
    pub(crate) fn new(ty: Arc<EnumType>, index: usize) -> Self {
        debug_assert!(index < ty.variants().len());
        Self { ty, index }
    }

    /// Resolve a variant of `ty` by declared name.
    pub fn of(ty: &Arc<EnumType>, name: &str) -> Option<Self> {
        ty.variant_index(name)
            .map(|index| Self::new(Arc::clone(ty), index))
    }

    /// The enum type this value belongs to.
    pub fn ty(&self) -> &Arc<EnumType> {
        &self.ty
    }

    /// Variant name.
    pub fn name(&self) -> &str {
        &self.ty.variants()[self.index].name
    }

    /// Underlying variant value.
    pub fn value(&self) -> i64 {
        self.ty.variants()[self.index].value
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.index == other.index
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::I8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Charset> for Value {
    fn from(v: Charset) -> Self {
        Self::Charset(v)
    }
}

impl From<MapValue> for Value {
    fn from(v: MapValue) -> Self {
        Self::Map(v)
    }
}

impl From<StructValue> for Value {
    fn from(v: StructValue) -> Self {
        Self::Struct(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}
