// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Map conversion: re-key maps and flatten structs into maps.

use crate::convert::Converter;
use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::value::{MapValue, Value};

/// Converter for one requested map descriptor.
///
/// Key and value descriptors are resolved once at construction, not per
/// entry. A source map whose declared types already match is returned
/// unchanged; a struct source becomes entries with string keys; anything
/// else is an [`ConvertError::UnsupportedSource`].
#[derive(Debug)]
pub struct MapConverter {
    target: TypeDescriptor,
    key_type: TypeDescriptor,
    value_type: TypeDescriptor,
}

impl MapConverter {
    /// Create a converter for the given map descriptor.
    pub fn new(target: TypeDescriptor) -> Self {
        let key_type = target.argument(0).clone();
        let value_type = target.argument(1).clone();
        Self {
            target,
            key_type,
            value_type,
        }
    }

    fn rekey(
        &self,
        registry: &ConverterRegistry,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> Result<Value, ConvertError> {
        let mut out = MapValue::new(self.key_type.clone(), self.value_type.clone());
        for (key, value) in entries {
            // Unknown positions take the source entry verbatim.
            let key = if self.key_type.is_unknown() {
                key
            } else {
                registry.convert(&self.key_type, key)?
            };
            let value = if self.value_type.is_unknown() {
                value
            } else {
                registry.convert(&self.value_type, value)?
            };
            out.insert(key, value);
        }
        Ok(Value::Map(out))
    }
}

impl Converter for MapConverter {
    fn target(&self) -> TypeDescriptor {
        self.target.clone()
    }

    fn convert_value(
        &self,
        registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        match value {
            Value::Map(map) => {
                if map.key_type() == &self.key_type && map.value_type() == &self.value_type {
                    return Ok(Value::Map(map));
                }
                self.rekey(registry, map.into_entries())
            }
            Value::Struct(fields) => self.rekey(
                registry,
                fields
                    .into_fields()
                    .into_iter()
                    .map(|(name, value)| (Value::Str(name), value)),
            ),
            other => Err(ConvertError::UnsupportedSource {
                found: other.type_name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SimpleType;
    use crate::value::StructValue;

    fn str_desc() -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Str)
    }

    fn i64_desc() -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::I64)
    }

    #[test]
    fn test_rekey_string_map_to_integer_map() {
        let reg = ConverterRegistry::new();
        let mut source = MapValue::new(str_desc(), str_desc());
        source.insert(Value::from("1"), Value::from("2"));
        source.insert(Value::from("3"), Value::from("4"));

        let conv = MapConverter::new(TypeDescriptor::map_of(i64_desc(), i64_desc()));
        let out = conv.convert(&reg, Value::Map(source)).unwrap();
        let map = out.as_map().expect("map");
        assert_eq!(map.get(&Value::I64(1)), Some(&Value::I64(2)));
        assert_eq!(map.get(&Value::I64(3)), Some(&Value::I64(4)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_malformed_entry_aborts_whole_conversion() {
        let reg = ConverterRegistry::new();
        let mut source = MapValue::new(str_desc(), str_desc());
        source.insert(Value::from("1"), Value::from("2"));
        source.insert(Value::from("3"), Value::from("x"));

        let conv = MapConverter::new(TypeDescriptor::map_of(i64_desc(), i64_desc()));
        let err = conv.convert(&reg, Value::Map(source)).unwrap_err();
        assert!(matches!(err, ConvertError::Conversion { .. }));
    }

    #[test]
    fn test_matching_declared_types_pass_through_without_copy() {
        let reg = ConverterRegistry::new();
        let mut source = MapValue::new(str_desc(), i64_desc());
        source.insert(Value::from("a"), Value::from(1i64));
        let buffer = source.entries().as_ptr();

        let conv = MapConverter::new(TypeDescriptor::map_of(str_desc(), i64_desc()));
        let out = conv.convert(&reg, Value::Map(source)).unwrap();
        // Same entry buffer: the source map was moved through, not rebuilt.
        assert_eq!(out.as_map().expect("map").entries().as_ptr(), buffer);
    }

    #[test]
    fn test_unknown_key_type_keeps_keys_verbatim() {
        let reg = ConverterRegistry::new();
        let mut source = MapValue::new(str_desc(), str_desc());
        source.insert(Value::from("a"), Value::from("1"));

        let conv = MapConverter::new(TypeDescriptor::map_of(TypeDescriptor::Unknown, i64_desc()));
        let out = conv.convert(&reg, Value::Map(source)).unwrap();
        let map = out.as_map().expect("map");
        assert_eq!(map.get(&Value::from("a")), Some(&Value::I64(1)));
    }

    #[test]
    fn test_struct_source_becomes_string_keyed_map() {
        let reg = ConverterRegistry::new();
        let mut bean = StructValue::new();
        bean.set("x", Value::from(1i32));
        bean.set("y", Value::from(2i32));

        let conv = MapConverter::new(TypeDescriptor::map_of(str_desc(), i64_desc()));
        let out = conv.convert(&reg, Value::Struct(bean)).unwrap();
        let map = out.as_map().expect("map");
        assert_eq!(map.get(&Value::from("x")), Some(&Value::I64(1)));
        assert_eq!(map.get(&Value::from("y")), Some(&Value::I64(2)));
    }

    #[test]
    fn test_scalar_source_is_unsupported_shape() {
        let reg = ConverterRegistry::new();
        let conv = MapConverter::new(TypeDescriptor::map_of(str_desc(), i64_desc()));
        let err = conv.convert(&reg, Value::from(42i64)).unwrap_err();
        match err {
            ConvertError::UnsupportedSource { found } => assert_eq!(found, "i64"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_colliding_keys_after_conversion_last_wins() {
        let reg = ConverterRegistry::new();
        let mut source = MapValue::new(str_desc(), str_desc());
        source.insert(Value::from("1"), Value::from("10"));
        source.insert(Value::from("01"), Value::from("20"));

        let conv = MapConverter::new(TypeDescriptor::map_of(i64_desc(), i64_desc()));
        let out = conv.convert(&reg, Value::Map(source)).unwrap();
        let map = out.as_map().expect("map");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::I64(1)), Some(&Value::I64(20)));
    }
}
