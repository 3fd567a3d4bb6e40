// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in converters for primitive and wrapped-primitive targets.

use crate::convert::{stringify, Converter};
use crate::descriptor::{Charset, SimpleType, TypeDescriptor};
use crate::error::ConvertError;
use crate::registry::ConverterRegistry;
use crate::text::{parse_bool, parse_char};
use crate::value::Value;

/// Converts to `bool`: nonzero numbers are true, text goes through
/// [`parse_bool`].
#[derive(Debug)]
pub struct BoolConverter;

impl Converter for BoolConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Bool)
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        if let Some(n) = value.integer() {
            return Ok(Value::Bool(n != 0));
        }
        if let Some(f) = value.float() {
            return Ok(Value::Bool(f != 0.0));
        }
        let text = stringify(&value);
        parse_bool(&text)
            .map(Value::Bool)
            .ok_or_else(|| ConvertError::conversion("bool", format!("not a boolean: {text:?}")))
    }
}

/// Converts to `char`: single-character text, or an integer code point.
#[derive(Debug)]
pub struct CharConverter;

impl Converter for CharConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Char)
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        if let Some(n) = value.integer() {
            let code = u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    ConvertError::conversion("char", format!("invalid code point {n}"))
                })?;
            return Ok(Value::Char(code));
        }
        let text = stringify(&value);
        parse_char(&text).map(Value::Char).ok_or_else(|| {
            ConvertError::conversion("char", format!("not a single character: {text:?}"))
        })
    }
}

/// Converts anything to its string form.
#[derive(Debug)]
pub struct StrConverter;

impl Converter for StrConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Str)
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        Ok(Value::Str(stringify(&value)))
    }
}

/// Converts to [`Charset`] by canonical name lookup.
#[derive(Debug)]
pub struct CharsetConverter;

impl Converter for CharsetConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Charset)
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        let text = stringify(&value);
        Charset::for_name(&text)
            .map(Value::Charset)
            .ok_or_else(|| {
                ConvertError::conversion("charset", format!("unknown charset name {text:?}"))
            })
    }
}

/// Converts to the atomic-bool target.
///
/// Parses exactly like [`BoolConverter`]; the result is normalized to
/// [`Value::Bool`] and wrapped into `AtomicBool` at the crate border via
/// [`Value::into_atomic_bool`].
#[derive(Debug)]
pub struct AtomicBoolConverter;

impl Converter for AtomicBoolConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::AtomicBool)
    }

    fn convert_value(
        &self,
        registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        BoolConverter
            .convert(registry, value)
            .map_err(|err| match err {
                ConvertError::Conversion { detail, .. } => ConvertError::Conversion {
                    target: "atomic bool".into(),
                    detail,
                },
                other => other,
            })
    }
}

/// Converts to one numeric target kind, given at construction.
///
/// Integer targets accept any integer width (checked, overflow fails),
/// bools, chars, floats (truncated) and integer text; float targets accept
/// any number and float text.
#[derive(Debug)]
pub struct NumberConverter {
    kind: SimpleType,
}

impl NumberConverter {
    /// `kind` must be one of the integer or float simple types.
    pub fn new(kind: SimpleType) -> Self {
        debug_assert!(matches!(
            kind,
            SimpleType::I8
                | SimpleType::I16
                | SimpleType::I32
                | SimpleType::I64
                | SimpleType::U8
                | SimpleType::U16
                | SimpleType::U32
                | SimpleType::U64
                | SimpleType::F32
                | SimpleType::F64
        ));
        Self { kind }
    }

    fn widen(&self, value: &Value) -> Result<i128, ConvertError> {
        if let Some(n) = value.integer() {
            return Ok(n);
        }
        if let Some(b) = value.as_bool() {
            return Ok(i128::from(b));
        }
        if let Some(c) = value.as_char() {
            return Ok(i128::from(u32::from(c)));
        }
        if let Some(f) = value.float() {
            if !f.is_finite() {
                return Err(ConvertError::conversion(
                    &self.kind,
                    format!("non-finite value {f}"),
                ));
            }
            return Ok(f as i128);
        }
        let text = stringify(value);
        text.trim()
            .parse::<i128>()
            .map_err(|err| ConvertError::conversion(&self.kind, format!("{err}: {text:?}")))
    }

    fn narrow(&self, wide: i128) -> Result<Value, ConvertError> {
        let overflow =
            |_| ConvertError::conversion(&self.kind, format!("value {wide} out of range"));
        match self.kind {
            SimpleType::I8 => Ok(Value::I8(i8::try_from(wide).map_err(overflow)?)),
            SimpleType::I16 => Ok(Value::I16(i16::try_from(wide).map_err(overflow)?)),
            SimpleType::I32 => Ok(Value::I32(i32::try_from(wide).map_err(overflow)?)),
            SimpleType::I64 => Ok(Value::I64(i64::try_from(wide).map_err(overflow)?)),
            SimpleType::U8 => Ok(Value::U8(u8::try_from(wide).map_err(overflow)?)),
            SimpleType::U16 => Ok(Value::U16(u16::try_from(wide).map_err(overflow)?)),
            SimpleType::U32 => Ok(Value::U32(u32::try_from(wide).map_err(overflow)?)),
            SimpleType::U64 => Ok(Value::U64(u64::try_from(wide).map_err(overflow)?)),
            _ => Err(ConvertError::conversion(&self.kind, "not an integer kind")),
        }
    }

    fn to_float(&self, value: &Value) -> Result<f64, ConvertError> {
        if let Some(f) = value.float() {
            return Ok(f);
        }
        if let Some(n) = value.integer() {
            return Ok(n as f64);
        }
        let text = stringify(value);
        text.trim()
            .parse::<f64>()
            .map_err(|err| ConvertError::conversion(&self.kind, format!("{err}: {text:?}")))
    }
}

impl Converter for NumberConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(self.kind.clone())
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        match self.kind {
            SimpleType::F32 => Ok(Value::F32(self.to_float(&value)? as f32)),
            SimpleType::F64 => Ok(Value::F64(self.to_float(&value)?)),
            _ => {
                let wide = self.widen(&value)?;
                self.narrow(wide)
            }
        }
    }
}
