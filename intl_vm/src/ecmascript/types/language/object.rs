// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)

mod internal_methods;
mod property_key;
mod property_storage;

use std::ops::{Index, IndexMut};

pub use internal_methods::InternalMethods;
pub use property_key::PropertyKey;
pub(crate) use property_storage::{PropertyEntry, PropertyStorage, PropertyValue};

use super::{Function, Value};
use crate::{
    ecmascript::{
        builtins::{BuiltinFunctionHeapData, primitive_objects::PrimitiveObjectData},
        execution::Agent,
    },
    heap::{CreateHeapData, ObjectIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Object(pub(crate) ObjectIndex);

/// Which internal slots an object carries, and thus which internal methods
/// it uses. Everything else about an object lives in [`ObjectHeapData`].
#[derive(Debug, Clone)]
pub(crate) enum ObjectKind {
    Ordinary,
    /// ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)
    Array,
    /// An object with an \[\[ErrorData]] internal slot.
    Error,
    /// ### [10.3 Built-in Function Objects](https://tc39.es/ecma262/#sec-built-in-function-objects)
    BuiltinFunction(BuiltinFunctionHeapData),
    /// Boolean, Number, String and Symbol wrapper objects. String wrappers
    /// are String exotic objects.
    PrimitiveObject(PrimitiveObjectData),
}

#[derive(Debug, Clone)]
pub struct ObjectHeapData {
    /// \[\[Extensible]]
    pub(crate) extensible: bool,
    /// \[\[Prototype]]
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: PropertyStorage,
    pub(crate) kind: ObjectKind,
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>, kind: ObjectKind) -> Self {
        Self {
            extensible: true,
            prototype,
            properties: PropertyStorage::default(),
            kind,
        }
    }
}

impl Index<Object> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        &self.heap.objects[index.0.into_index()]
    }
}

impl IndexMut<Object> for Agent {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        &mut self.heap.objects[index.0.into_index()]
    }
}

impl Object {
    pub(crate) fn create(agent: &mut Agent, data: ObjectHeapData) -> Self {
        agent.heap.create(data)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self)
    }

    pub(crate) fn kind(self, agent: &Agent) -> &ObjectKind {
        &agent[self].kind
    }

    pub fn is_array(self, agent: &Agent) -> bool {
        matches!(self.kind(agent), ObjectKind::Array)
    }

    pub fn is_error(self, agent: &Agent) -> bool {
        matches!(self.kind(agent), ObjectKind::Error)
    }

    /// Returns the object as a function if it has a \[\[Call]] internal
    /// method.
    pub fn as_function(self, agent: &Agent) -> Option<Function> {
        if matches!(self.kind(agent), ObjectKind::BuiltinFunction(_)) {
            Some(Function(self))
        } else {
            None
        }
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Object(object) = value {
            Ok(object)
        } else {
            Err(())
        }
    }
}
