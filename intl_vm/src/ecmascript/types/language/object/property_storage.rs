// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::RandomState;
use hashbrown::HashMap;

use super::PropertyKey;
use crate::ecmascript::types::{Function, PropertyDescriptor, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PropertyValue {
    Data {
        value: Value,
        writable: bool,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
    },
}

/// A fully populated own property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PropertyEntry {
    pub(crate) value: PropertyValue,
    pub(crate) enumerable: bool,
    pub(crate) configurable: bool,
}

impl PropertyEntry {
    pub(crate) fn data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self {
            value: PropertyValue::Data { value, writable },
            enumerable,
            configurable,
        }
    }

    /// Builds a new property from a descriptor, filling in the attribute
    /// defaults of [Table 3](https://tc39.es/ecma262/#table-object-property-attributes).
    pub(crate) fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        let value = if descriptor.is_accessor_descriptor() {
            PropertyValue::Accessor {
                get: descriptor.get.flatten(),
                set: descriptor.set.flatten(),
            }
        } else {
            PropertyValue::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
                writable: descriptor.writable.unwrap_or(false),
            }
        };
        Self {
            value,
            enumerable: descriptor.enumerable.unwrap_or(false),
            configurable: descriptor.configurable.unwrap_or(false),
        }
    }

    pub(crate) fn to_descriptor(self) -> PropertyDescriptor {
        match self.value {
            PropertyValue::Data { value, writable } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                get: None,
                set: None,
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
            },
            PropertyValue::Accessor { get, set } => PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(get),
                set: Some(set),
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
            },
        }
    }
}

/// Own properties of an object, remembering insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct PropertyStorage {
    keys: Vec<PropertyKey>,
    entries: HashMap<PropertyKey, PropertyEntry, RandomState>,
}

impl PropertyStorage {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            entries: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn get(&self, key: &PropertyKey) -> Option<&PropertyEntry> {
        self.entries.get(key)
    }

    pub(crate) fn contains(&self, key: &PropertyKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a property. Replacing keeps the original
    /// position in the key order.
    pub(crate) fn set(&mut self, key: PropertyKey, entry: PropertyEntry) {
        if self.entries.insert(key, entry).is_none() {
            self.keys.push(key);
        }
    }

    pub(crate) fn remove(&mut self, key: &PropertyKey) -> Option<PropertyEntry> {
        let removed = self.entries.remove(key)?;
        self.keys.retain(|existing| existing != key);
        Some(removed)
    }

    /// Keys in insertion order.
    pub(crate) fn keys(&self) -> &[PropertyKey] {
        &self.keys
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
