// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynconv - Type-directed value conversion
//!
//! A conversion engine that coerces an arbitrary runtime [`Value`] into a
//! requested target type, including generic container targets (maps, enums,
//! sequences) whose element and key/value types come from a declared
//! [`TypeDescriptor`] rather than from the value itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynconv::{ConverterRegistry, SimpleType, TypeDescriptor, Value};
//!
//! let registry = ConverterRegistry::new();
//!
//! // Simple target: parse text into an integer.
//! let target = TypeDescriptor::simple(SimpleType::I32);
//! assert_eq!(registry.convert(&target, Value::from("42")).unwrap(), Value::I32(42));
//!
//! // Container target: re-key a sequence element-wise.
//! let target = TypeDescriptor::array_of(TypeDescriptor::simple(SimpleType::I64));
//! let out = registry.convert(&target, Value::from(vec!["1", "2", "3"])).unwrap();
//! assert_eq!(out, Value::Seq(vec![Value::I64(1), Value::I64(2), Value::I64(3)]));
//! ```
//!
//! ## Dispatch
//!
//! `convert` short-circuits null and values that already satisfy the target,
//! then resolves a converter: registered converters by erased target
//! identity first, then the category fallbacks (enum, map, array/list)
//! built per exact descriptor and cached, and finally a terminal cast
//! converter that fails with a descriptive error.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConverterRegistry`] | Converter dispatch and caching; the conversion entry point |
//! | [`TypeDescriptor`] | A declared type: simple, parameterized, array, or unknown |
//! | [`Value`] | Tagged runtime value the engine converts |
//! | [`Converter`] | Extension trait for host-defined target types |
//! | [`ConvertError`] | Conversion failure taxonomy |
//!
//! Hosts plug in their own target types by implementing [`Converter`] and
//! calling [`ConverterRegistry::register`]; tests construct isolated
//! registries with [`ConverterRegistry::new`] while
//! [`ConverterRegistry::global`] serves the populate-once process-wide case.

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod text;
pub mod value;

pub use convert::{satisfies, stringify, Converter};
pub use descriptor::{Charset, EnumType, EnumVariant, SimpleType, TypeDescriptor};
pub use error::ConvertError;
pub use registry::{ConverterRegistry, LookupStats};
pub use value::{EnumValue, MapValue, StructValue, Value};
