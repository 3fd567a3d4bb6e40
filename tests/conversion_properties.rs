// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end conversion properties, including concurrent registry use.

use dynconv::{
    ConvertError, Converter, ConverterRegistry, EnumType, EnumVariant, MapValue, SimpleType,
    StructValue, TypeDescriptor, Value,
};
use std::sync::Arc;
use std::thread;

fn str_desc() -> TypeDescriptor {
    TypeDescriptor::simple(SimpleType::Str)
}

fn i64_desc() -> TypeDescriptor {
    TypeDescriptor::simple(SimpleType::I64)
}

#[test]
fn null_converts_to_null_for_every_target() {
    let reg = ConverterRegistry::new();
    let targets = [
        TypeDescriptor::simple(SimpleType::Bool),
        TypeDescriptor::simple(SimpleType::Charset),
        TypeDescriptor::map_of(str_desc(), i64_desc()),
        TypeDescriptor::array_of(i64_desc()),
        TypeDescriptor::simple(SimpleType::Custom("Point".into())),
    ];
    for target in targets {
        assert_eq!(reg.convert(&target, Value::Null).unwrap(), Value::Null);
    }
}

#[test]
fn fast_path_is_idempotent() {
    let reg = ConverterRegistry::new();
    let cases = [
        (TypeDescriptor::simple(SimpleType::Bool), Value::Bool(true)),
        (str_desc(), Value::from("hello")),
        (i64_desc(), Value::I64(-7)),
    ];
    for (target, value) in cases {
        assert_eq!(reg.convert(&target, value.clone()).unwrap(), value);
    }
}

#[test]
fn map_with_matching_declared_types_passes_through_without_copy() {
    let reg = ConverterRegistry::new();
    let mut source = MapValue::new(str_desc(), i64_desc());
    source.insert(Value::from("a"), Value::I64(1));
    let buffer = source.entries().as_ptr();

    let target = TypeDescriptor::map_of(str_desc(), i64_desc());
    let out = reg.convert(&target, Value::Map(source)).unwrap();
    assert_eq!(out.as_map().expect("map").entries().as_ptr(), buffer);
}

#[test]
fn map_rekeying_converts_keys_and_values() {
    let reg = ConverterRegistry::new();
    let mut source = MapValue::new(str_desc(), str_desc());
    source.insert(Value::from("1"), Value::from("2"));
    source.insert(Value::from("3"), Value::from("4"));

    let target = TypeDescriptor::map_of(i64_desc(), i64_desc());
    let out = reg.convert(&target, Value::Map(source)).unwrap();
    let map = out.as_map().expect("map");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Value::I64(1)), Some(&Value::I64(2)));
    assert_eq!(map.get(&Value::I64(3)), Some(&Value::I64(4)));
}

#[test]
fn malformed_map_entry_yields_no_partial_map() {
    let reg = ConverterRegistry::new();
    let mut source = MapValue::new(str_desc(), str_desc());
    source.insert(Value::from("1"), Value::from("2"));
    source.insert(Value::from("3"), Value::from("x"));

    let target = TypeDescriptor::map_of(i64_desc(), i64_desc());
    let err = reg.convert(&target, Value::Map(source)).unwrap_err();
    assert!(matches!(err, ConvertError::Conversion { .. }));
}

#[test]
fn struct_source_converts_to_string_keyed_map() {
    let reg = ConverterRegistry::new();
    let mut bean = StructValue::new();
    bean.set("width", Value::from("640"));
    bean.set("height", Value::from("480"));

    let target = TypeDescriptor::map_of(str_desc(), i64_desc());
    let out = reg.convert(&target, Value::Struct(bean)).unwrap();
    let map = out.as_map().expect("map");
    assert_eq!(map.get(&Value::from("width")), Some(&Value::I64(640)));
    assert_eq!(map.get(&Value::from("height")), Some(&Value::I64(480)));
}

#[test]
fn enum_round_trip_and_missing_name() {
    let reg = ConverterRegistry::new();
    let color = EnumType::new(
        "Color",
        vec![
            EnumVariant::new("RED", 0),
            EnumVariant::new("GREEN", 1),
            EnumVariant::new("BLUE", 2),
        ],
    );
    let target = TypeDescriptor::enum_of(Arc::clone(&color));

    let out = reg.convert(&target, Value::from("BLUE")).unwrap();
    assert_eq!(out.as_enum().map(|e| e.value()), Some(2));

    let err = reg.convert(&target, Value::from("MAGENTA")).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownVariant { .. }));
}

#[test]
fn array_conversion_is_element_wise_and_all_or_nothing() {
    let reg = ConverterRegistry::new();
    let target = TypeDescriptor::array_of(i64_desc());

    let out = reg
        .convert(&target, Value::from(vec!["1", "2", "3"]))
        .unwrap();
    assert_eq!(
        out,
        Value::Seq(vec![Value::I64(1), Value::I64(2), Value::I64(3)])
    );

    let err = reg
        .convert(&target, Value::from(vec!["1", "x"]))
        .unwrap_err();
    assert!(matches!(err, ConvertError::Conversion { .. }));
}

#[test]
fn fallback_is_deterministic() {
    let reg = ConverterRegistry::new();
    let target = TypeDescriptor::simple(SimpleType::Custom("Point".into()));
    for _ in 0..3 {
        let err = reg.convert(&target, Value::from(1i64)).unwrap_err();
        assert!(matches!(err, ConvertError::Conversion { .. }));
    }
}

#[test]
fn global_registry_is_one_instance_across_threads() {
    let addrs: Vec<usize> = thread::scope(|scope| {
        (0..8)
            .map(|_| {
                scope.spawn(|| std::ptr::from_ref(ConverterRegistry::global()) as usize)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().expect("thread"))
            .collect()
    });
    assert!(addrs.windows(2).all(|pair| pair[0] == pair[1]));
}

/// Trivial host converter targeting a named custom type.
#[derive(Debug)]
struct TagConverter {
    name: Arc<str>,
}

impl Converter for TagConverter {
    fn target(&self) -> TypeDescriptor {
        TypeDescriptor::simple(SimpleType::Custom(Arc::clone(&self.name)))
    }

    fn convert_value(
        &self,
        _registry: &ConverterRegistry,
        value: Value,
    ) -> Result<Value, ConvertError> {
        Ok(Value::Str(format!("{}:{value}", self.name)))
    }
}

#[test]
fn concurrent_registration_loses_no_writes() {
    let reg = ConverterRegistry::new();
    let count = 16;

    thread::scope(|scope| {
        for i in 0..count {
            let reg = &reg;
            scope.spawn(move || {
                reg.register(Arc::new(TagConverter {
                    name: format!("tag{i}").into(),
                }));
            });
        }
    });

    for i in 0..count {
        let target = TypeDescriptor::simple(SimpleType::Custom(format!("tag{i}").into()));
        let out = reg.convert(&target, Value::I64(1)).unwrap();
        assert_eq!(out, Value::Str(format!("tag{i}:1")));
    }
}

#[test]
fn concurrent_conversions_for_distinct_targets() {
    let reg = ConverterRegistry::new();
    thread::scope(|scope| {
        for i in 0..8 {
            let reg = &reg;
            scope.spawn(move || {
                let target = TypeDescriptor::map_of(i64_desc(), i64_desc());
                let mut source = MapValue::new(str_desc(), str_desc());
                source.insert(Value::Str(i.to_string()), Value::from("1"));
                let out = reg.convert(&target, Value::Map(source)).unwrap();
                assert_eq!(out.as_map().map(MapValue::len), Some(1));
            });
        }
    });
}
