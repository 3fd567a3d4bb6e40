// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Element-wise sequence conversion for array and list targets.

use crate::convert::Converter;
use crate::descriptor::TypeDescriptor;
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::value::Value;

/// Converter for one requested array or list descriptor.
///
/// Allocates a fresh sequence of the resolved element type and converts
/// each source element independently; a single failing element aborts the
/// whole conversion (no partial results).
#[derive(Debug)]
pub struct SeqConverter {
    target: TypeDescriptor,
    element_type: TypeDescriptor,
}

impl SeqConverter {
    /// Create a converter for the given array or list descriptor.
    pub fn new(target: TypeDescriptor) -> Self {
        let element_type = target.argument(0).clone();
        Self {
            target,
            element_type,
        }
    }
}

impl Converter for SeqConverter {
    fn target(&self) -> TypeDescriptor {
        self.target.clone()
    }

    fn convert_value(
        &self,
        registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        let items = match value {
            Value::Seq(items) => items,
            other => {
                return Err(ConvertError::conversion(
                    &self.target,
                    format!("expected a sequence, got {}", other.type_name()),
                ))
            }
        };
        if self.element_type.is_unknown() {
            return Ok(Value::Seq(items));
        }
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(registry.convert(&self.element_type, item)?);
        }
        Ok(Value::Seq(out))
    }
}
