// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors: the declared shape of a conversion target.
//!
//! A [`TypeDescriptor`] is the tagged stand-in for "a type as declared" at a
//! call site: a bare [`SimpleType`], a parameterized container such as
//! `map<str, i64>`, an array of some element type, or [`TypeDescriptor::Unknown`]
//! when the declaration carries no usable information (wildcards, raw
//! containers). Descriptors are immutable and cheap to clone; the registry
//! uses them both to pick a converter and to key its converter cache.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Runtime description of an enumeration: a named, ordered set of variants.
///
/// Equality and hashing use the type name only, so two independently built
/// descriptions of the same enum compare equal for dispatch purposes.
#[derive(Debug)]
pub struct EnumType {
    name: Arc<str>,
    variants: Vec<EnumVariant>,
}

impl EnumType {
    /// Build an enum type from its declared variants.
    pub fn new(name: impl Into<Arc<str>>, variants: Vec<EnumVariant>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            variants,
        })
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared variants, in declaration order.
    pub fn variants(&self) -> &[EnumVariant] {
        &self.variants
    }

    /// Get variant by declared name (case-sensitive exact match).
    pub fn variant(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Get variant index by declared name.
    pub fn variant_index(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.name == name)
    }

    /// Get variant index by underlying value.
    pub fn variant_index_by_value(&self, value: i64) -> Option<usize> {
        self.variants.iter().position(|v| v.value == value)
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnumType {}

impl Hash for EnumType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Enum variant: declared name plus underlying value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumVariant {
    /// Variant name.
    pub name: String,
    /// Variant value.
    pub value: i64,
}

impl EnumVariant {
    /// Create an enum variant.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Named character set, resolved from its canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    Utf16Le,
    Utf16Be,
    UsAscii,
    Iso8859_1,
}

impl Charset {
    /// Resolve a charset from its canonical name or a common alias.
    ///
    /// Matching is ASCII case-insensitive; surrounding whitespace is ignored.
    pub fn for_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Some(Self::Utf8),
            "UTF-16LE" | "UTF16LE" => Some(Self::Utf16Le),
            "UTF-16BE" | "UTF16BE" => Some(Self::Utf16Be),
            "US-ASCII" | "ASCII" => Some(Self::UsAscii),
            "ISO-8859-1" | "LATIN1" => Some(Self::Iso8859_1),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::UsAscii => "US-ASCII",
            Self::Iso8859_1 => "ISO-8859-1",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Erased target-type identity, used to key converter dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleType {
    Bool,
    Char,
    Str,
    Charset,
    AtomicBool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// An enumeration, identified by its runtime description.
    Enum(Arc<EnumType>),
    /// Map erasure (key/value types live on the full descriptor).
    Map,
    /// Collection erasure (element type lives on the full descriptor).
    List,
    /// Host-defined target type, identified by name.
    Custom(Arc<str>),
}

impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Char => f.write_str("char"),
            Self::Str => f.write_str("str"),
            Self::Charset => f.write_str("charset"),
            Self::AtomicBool => f.write_str("atomic bool"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Enum(ty) => write!(f, "enum {}", ty.name()),
            Self::Map => f.write_str("map"),
            Self::List => f.write_str("list"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

static UNKNOWN: TypeDescriptor = TypeDescriptor::Unknown;

/// A declared type: simple, parameterized, array, or unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A concrete type with no generic arguments.
    Simple(SimpleType),
    /// A container type plus its declared type arguments.
    Parameterized {
        base: SimpleType,
        args: Vec<TypeDescriptor>,
    },
    /// An array of some element type.
    Array(Box<TypeDescriptor>),
    /// Wildcard, unresolved type variable, or raw container argument.
    ///
    /// Converters treat an unknown position as "accept the value's own
    /// runtime type with no further coercion".
    Unknown,
}

impl TypeDescriptor {
    /// Shorthand for a bare simple type.
    pub fn simple(ty: SimpleType) -> Self {
        Self::Simple(ty)
    }

    /// `map<key, value>` descriptor.
    pub fn map_of(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Parameterized {
            base: SimpleType::Map,
            args: vec![key, value],
        }
    }

    /// `list<element>` descriptor.
    pub fn list_of(element: TypeDescriptor) -> Self {
        Self::Parameterized {
            base: SimpleType::List,
            args: vec![element],
        }
    }

    /// `element[]` descriptor.
    pub fn array_of(element: TypeDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    /// Descriptor for a runtime-described enum type.
    pub fn enum_of(ty: Arc<EnumType>) -> Self {
        Self::Simple(SimpleType::Enum(ty))
    }

    /// The `index`-th declared type argument.
    ///
    /// Returns [`TypeDescriptor::Unknown`] for simple types, for array
    /// indices other than `0`, and for out-of-range indices.
    pub fn argument(&self, index: usize) -> &TypeDescriptor {
        match self {
            Self::Parameterized { args, .. } => args.get(index).unwrap_or(&UNKNOWN),
            Self::Array(element) if index == 0 => element,
            _ => &UNKNOWN,
        }
    }

    /// All declared type arguments, in declaration order.
    pub fn arguments(&self) -> &[TypeDescriptor] {
        match self {
            Self::Parameterized { args, .. } => args,
            Self::Array(element) => std::slice::from_ref(element.as_ref()),
            _ => &[],
        }
    }

    /// Erase to the bare target-type identity.
    ///
    /// `None` for arrays (dispatched structurally) and for unknown.
    pub fn simple_type(&self) -> Option<&SimpleType> {
        match self {
            Self::Simple(ty) | Self::Parameterized { base: ty, .. } => Some(ty),
            Self::Array(_) | Self::Unknown => None,
        }
    }

    /// True for wildcards and unresolved type variables.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(ty) => ty.fmt(f),
            Self::Parameterized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    arg.fmt(f)?;
                }
                f.write_str(">")
            }
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Unknown => f.write_str("?"),
        }
    }
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<SimpleType> for TypeDescriptor {
    fn from(ty: SimpleType) -> Self {
        Self::Simple(ty)
    }
}
