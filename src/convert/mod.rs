// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Converter contract and the built-in converter families.
//!
//! Every converter follows the same template, provided by [`Converter::convert`]:
//! null short-circuits to null, a value that already satisfies the target is
//! returned unchanged, and only the remaining cases reach the
//! [`Converter::convert_value`] hook. Hooks normalize leaf parse failures
//! into [`ConvertError::Conversion`](crate::ConvertError::Conversion) at the
//! failure site.

mod cast;
mod enums;
mod map;
mod primitive;
mod seq;

pub use cast::CastConverter;
pub use enums::EnumConverter;
pub use map::MapConverter;
pub use primitive::{
    AtomicBoolConverter, BoolConverter, CharConverter, CharsetConverter, NumberConverter,
    StrConverter,
};
pub use seq::SeqConverter;

use crate::descriptor::{SimpleType, TypeDescriptor};
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::value::Value;
use std::fmt;

/// Strategy that produces values of one target type.
///
/// Converters are stateless or near-stateless and shared across threads;
/// parameterized ones (enum, map, sequence) are built per distinct requested
/// descriptor and cached by the registry.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Target type this converter produces, used by the registry for
    /// indexing.
    fn target(&self) -> TypeDescriptor;

    /// Template entry point: null and pass-through short-circuits, then the
    /// [`Converter::convert_value`] hook.
    fn convert(
        &self,
        registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        if satisfies(&self.target(), &value) {
            return Ok(value);
        }
        self.convert_value(registry, value)
    }

    /// Conversion hook for inputs that actually need coercion. The input is
    /// never null here.
    fn convert_value(
        &self,
        registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError>;
}

/// Check whether a value's runtime type already satisfies a target type
/// (the conversion fast-path).
///
/// Primitive kinds match exactly; a bool satisfies the atomic-bool target;
/// a map satisfies a parameterized map target only when its declared
/// key/value types equal the target's, so re-keying still runs for
/// mismatched declarations.
pub fn satisfies(target: &TypeDescriptor, value: &Value) -> bool {
    match target {
        TypeDescriptor::Unknown => true,
        TypeDescriptor::Simple(SimpleType::AtomicBool) => matches!(value, Value::Bool(_)),
        TypeDescriptor::Simple(simple) => value.kind().as_ref() == Some(simple),
        TypeDescriptor::Parameterized {
            base: SimpleType::Map,
            ..
        } => match value {
            Value::Map(map) => {
                map.key_type() == target.argument(0) && map.value_type() == target.argument(1)
            }
            _ => false,
        },
        // Sequences carry no declared element type, so typed list/array
        // targets always go through element-wise conversion.
        TypeDescriptor::Parameterized { .. } | TypeDescriptor::Array(_) => false,
    }
}

/// Best-effort stringification of an arbitrary value, used by the
/// parse-style converters (bool, char, charset, enum).
pub fn stringify(value: &Value) -> String {
    value.to_string()
}
