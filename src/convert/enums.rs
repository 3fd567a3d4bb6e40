// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum conversion: resolve a variant of a runtime-described enum type.

use crate::convert::{stringify, Converter};
use crate::descriptor::{EnumType, SimpleType, TypeDescriptor};
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::value::{EnumValue, Value};
use std::sync::Arc;

/// Converter bound to one enum type, usually constructed by the registry
/// when an enum target is first requested.
///
/// Text input resolves by declared variant name (case-sensitive, no
/// fallback); integer input resolves by underlying value. A failed lookup
/// is [`ConvertError::UnknownVariant`], surfaced as-is rather than wrapped
/// into a generic conversion failure.
#[derive(Debug)]
pub struct EnumConverter {
    ty: Arc<EnumType>,
}

impl EnumConverter {
    /// Create a converter for the given enum type.
    pub fn new(ty: Arc<EnumType>) -> Self {
        Self { ty }
    }
}

impl Converter for EnumConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::Simple(SimpleType::Enum(Arc::clone(&self.ty)))
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        resolve_variant(&self.ty, &value).map(Value::Enum)
    }
}

impl EnumType {
    /// Typed counterpart of [`EnumConverter`] for call sites that know the
    /// enum type statically: same resolution rules, typed return.
    pub fn parse_value(self: &Arc<Self>, value: &Value) -> Result<EnumValue, ConvertError> {
        if let Value::Enum(e) = value {
            if e.ty() == self {
                return Ok(e.clone());
            }
        }
        resolve_variant(self, value)
    }
}

fn resolve_variant(ty: &Arc<EnumType>, value: &Value) -> Result<EnumValue, ConvertError> {
    if let Some(n) = value.integer() {
        return i64::try_from(n)
            .ok()
            .and_then(|v| ty.variant_index_by_value(v))
            .map(|index| EnumValue::new(Arc::clone(ty), index))
            .ok_or_else(|| ConvertError::UnknownVariant {
                enum_name: ty.name().to_string(),
                variant: n.to_string(),
            });
    }
    let name = stringify(value);
    ty.variant_index(name.trim())
        .map(|index| EnumValue::new(Arc::clone(ty), index))
        .ok_or(ConvertError::UnknownVariant {
            enum_name: ty.name().to_string(),
            variant: name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EnumVariant;

    fn color() -> Arc<EnumType> {
        EnumType::new(
            "Color",
            vec![
                EnumVariant::new("RED", 0),
                EnumVariant::new("GREEN", 1),
                EnumVariant::new("BLUE", 2),
            ],
        )
    }

    #[test]
    fn test_resolve_by_name() {
        let reg = ConverterRegistry::new();
        let conv = EnumConverter::new(color());
        let out = conv.convert(&reg, Value::from("GREEN")).unwrap();
        assert_eq!(out.as_enum().map(EnumValue::value), Some(1));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let reg = ConverterRegistry::new();
        let conv = EnumConverter::new(color());
        let err = conv.convert(&reg, Value::from("green")).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownVariant { .. }));
    }

    #[test]
    fn test_resolve_by_value() {
        let reg = ConverterRegistry::new();
        let conv = EnumConverter::new(color());
        let out = conv.convert(&reg, Value::from(2i64)).unwrap();
        assert_eq!(out.as_enum().map(|e| e.name().to_string()), Some("BLUE".into()));

        assert!(conv.convert(&reg, Value::from(9i64)).is_err());
    }

    #[test]
    fn test_own_value_passes_through() {
        let reg = ConverterRegistry::new();
        let ty = color();
        let conv = EnumConverter::new(Arc::clone(&ty));
        let value = Value::from(EnumValue::of(&ty, "RED").expect("variant"));
        assert_eq!(conv.convert(&reg, value.clone()).unwrap(), value);
    }

    #[test]
    fn test_typed_parse_value() {
        let ty = color();
        let v = ty.parse_value(&Value::from("BLUE")).unwrap();
        assert_eq!(v.value(), 2);
        assert!(ty.parse_value(&Value::from("PINK")).is_err());
    }
}
