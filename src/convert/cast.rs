// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Terminal fallback converter.

use crate::convert::Converter;
use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::value::Value;

/// Last-resort converter for target types with no strategy.
///
/// The template fast-path still applies first, so this only runs for values
/// that genuinely cannot satisfy the target, and then it always fails. It
/// exists so dispatch always resolves to a converter instead of branching
/// on "nothing found".
#[derive(Debug)]
pub struct CastConverter {
    target: TypeDescriptor,
}

impl CastConverter {
    /// Create a fallback converter for the given target.
    pub fn new(target: TypeDescriptor) -> Self {
        Self { target }
    }
}

impl Converter for CastConverter {
    fn target(&self) -> TypeDescriptor {
        self.target.clone()
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        Err(ConvertError::conversion(
            &self.target,
            format!("no conversion strategy from {}", value.type_name()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SimpleType;

    #[test]
    fn test_always_fails_for_mismatched_values() {
        let reg = ConverterRegistry::new();
        let conv = CastConverter::new(TypeDescriptor::simple(SimpleType::Custom("Point".into())));
        let err = conv.convert(&reg, Value::from(1i64)).unwrap_err();
        assert!(matches!(err, ConvertError::Conversion { .. }));
    }

    #[test]
    fn test_satisfying_value_still_passes_through() {
        let reg = ConverterRegistry::new();
        let conv = CastConverter::new(TypeDescriptor::simple(SimpleType::I64));
        assert_eq!(conv.convert(&reg, Value::I64(5)).unwrap(), Value::I64(5));
    }
}
