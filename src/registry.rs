// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Converter registry: dispatch, converter cache, custom registration.
//!
//! Lookups are served lock-free from a sharded map of registered converters.
//! Parameterized converters (enum, map, array/list) are built on first
//! request for a descriptor and memoized in a small LRU cache behind an
//! RwLock: peek under the read lock, re-check under the write lock. Two
//! threads racing on the same unseen descriptor may both build a converter;
//! both are correct, one survives in the cache.

use crate::convert::{
    satisfies, AtomicBoolConverter, BoolConverter, CastConverter, CharConverter,
    CharsetConverter, Converter, EnumConverter, MapConverter, NumberConverter, SeqConverter,
    StrConverter,
};
use crate::descriptor::{SimpleType, TypeDescriptor};
use crate::error::ConvertError;
use crate::value::Value;
use dashmap::DashMap;
use lru::LruCache;
use parking_lot::RwLock;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, OnceLock};

/// Capacity of the constructed-converter cache (enum/map/sequence
/// converters keyed by exact requested descriptor).
const CONSTRUCTED_CAPACITY: usize = 256;

static GLOBAL: OnceLock<ConverterRegistry> = OnceLock::new();

/// Constructed-converter cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
}

/// Registry mapping target types to converters; the conversion entry point.
pub struct ConverterRegistry {
    /// Built-in and custom converters, keyed by erased target identity.
    registered: DashMap<SimpleType, Arc<dyn Converter>>,
    /// Custom converters for targets with no erased identity (arrays),
    /// keyed by exact descriptor. Registrations must survive cache
    /// pressure, so these never go through the LRU.
    registered_exact: DashMap<TypeDescriptor, Arc<dyn Converter>>,
    /// Per-descriptor converters built by the category fallbacks.
    constructed: RwLock<LruCache<TypeDescriptor, Arc<dyn Converter>>>,
    stats: RwLock<LookupStats>,
}

impl ConverterRegistry {
    /// Create an isolated registry populated with the built-in converters.
    pub fn new() -> Self {
        let registry = Self {
            registered: DashMap::new(),
            registered_exact: DashMap::new(),
            #[allow(clippy::expect_used)] // capacity is a nonzero constant
            constructed: RwLock::new(LruCache::new(
                NonZeroUsize::new(CONSTRUCTED_CAPACITY).expect("capacity > 0"),
            )),
            stats: RwLock::new(LookupStats::default()),
        };
        registry.populate();
        registry
    }

    /// Process-wide registry, created exactly once on first use.
    pub fn global() -> &'static ConverterRegistry {
        GLOBAL.get_or_init(ConverterRegistry::new)
    }

    fn populate(&self) {
        self.register(Arc::new(BoolConverter));
        self.register(Arc::new(CharConverter));
        self.register(Arc::new(StrConverter));
        self.register(Arc::new(CharsetConverter));
        self.register(Arc::new(AtomicBoolConverter));
        for kind in [
            SimpleType::I8,
            SimpleType::I16,
            SimpleType::I32,
            SimpleType::I64,
            SimpleType::U8,
            SimpleType::U16,
            SimpleType::U32,
            SimpleType::U64,
            SimpleType::F32,
            SimpleType::F64,
        ] {
            self.register(Arc::new(NumberConverter::new(kind)));
        }
    }

    /// Register a converter under its target type.
    ///
    /// Last registration wins; safe to call concurrently with in-flight
    /// conversions, which may observe either the old or the new converter.
    pub fn register(&self, converter: Arc<dyn Converter>) {
        let target = converter.target();
        match target.simple_type() {
            Some(simple) => {
                self.registered.insert(simple.clone(), converter);
            }
            // Array targets have no erased identity; key by exact descriptor.
            None => {
                self.registered_exact.insert(target, converter);
            }
        }
    }

    /// Convert `value` into the requested target type.
    ///
    /// Null converts to null for every target. A value whose runtime type
    /// already satisfies the target is returned unchanged without touching
    /// any converter. Everything else dispatches: registered converter by
    /// erased target identity, then the category fallbacks (enum, map,
    /// array/list), then the terminal cast converter.
    pub fn convert(&self, target: &TypeDescriptor, value: Value) -> Result<Value, ConvertError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        if satisfies(target, &value) {
            log::trace!("[dynconv] {target}: pass-through for {}", value.type_name());
            return Ok(value);
        }
        self.resolve(target).convert(self, value)
    }

    /// Resolve the converter responsible for a target type.
    pub fn resolve(&self, target: &TypeDescriptor) -> Arc<dyn Converter> {
        if let Some(simple) = target.simple_type() {
            if let Some(hit) = self.registered.get(simple) {
                return Arc::clone(hit.value());
            }
        }
        if let Some(hit) = self.registered_exact.get(target) {
            return Arc::clone(hit.value());
        }
        self.construct(target)
    }

    /// Category fallback: build (or fetch the cached) converter for a
    /// previously unseen descriptor.
    fn construct(&self, target: &TypeDescriptor) -> Arc<dyn Converter> {
        if let Some(hit) = self.peek_constructed(target) {
            self.record_hit();
            return hit;
        }

        let mut cache = self.constructed.write();
        if let Some(hit) = cache.get(target) {
            self.record_hit();
            return Arc::clone(hit);
        }

        let built: Arc<dyn Converter> = match (target, target.simple_type()) {
            (_, Some(SimpleType::Enum(ty))) => {
                log::debug!("[dynconv] building enum converter for {target}");
                Arc::new(EnumConverter::new(Arc::clone(ty)))
            }
            (_, Some(SimpleType::Map)) => {
                log::debug!("[dynconv] building map converter for {target}");
                Arc::new(MapConverter::new(target.clone()))
            }
            (TypeDescriptor::Array(_), _) | (_, Some(SimpleType::List)) => {
                log::debug!("[dynconv] building sequence converter for {target}");
                Arc::new(SeqConverter::new(target.clone()))
            }
            _ => {
                log::debug!("[dynconv] no strategy for {target}, falling back to cast");
                Arc::new(CastConverter::new(target.clone()))
            }
        };
        cache.put(target.clone(), Arc::clone(&built));
        self.record_miss();
        built
    }

    /// Snapshot of the constructed-converter cache statistics.
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn peek_constructed(&self, target: &TypeDescriptor) -> Option<Arc<dyn Converter>> {
        let cache = self.constructed.read();
        cache.peek(target).map(Arc::clone)
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("registered", &self.registered.len())
            .field("registered_exact", &self.registered_exact.len())
            .field("constructed", &self.constructed.read().len())
            .finish_non_exhaustive()
    }
}
