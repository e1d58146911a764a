// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, ObjectKind, PropertyKey};
use crate::ecmascript::{
    builtins::{
        array::array_define_own_property,
        ordinary::{
            ordinary_define_own_property, ordinary_delete, ordinary_get,
            ordinary_get_own_property, ordinary_get_prototype_of, ordinary_has_property,
            ordinary_is_extensible, ordinary_own_property_keys, ordinary_prevent_extensions,
            ordinary_set, ordinary_set_prototype_of,
        },
        primitive_objects::{
            PrimitiveObjectData, string_exotic_define_own_property,
            string_exotic_get_own_property, string_exotic_own_property_keys,
        },
    },
    execution::{Agent, JsResult},
    types::{PropertyDescriptor, String, Value},
};

/// ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
///
/// The essential internal methods of an object. Every object supports all of
/// them; exotic objects override the ordinary behaviour of some.
pub trait InternalMethods: Copy {
    /// ## \[\[GetPrototypeOf]]
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>>;

    /// ## \[\[SetPrototypeOf]]
    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool>;

    /// ## \[\[IsExtensible]]
    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool>;

    /// ## \[\[PreventExtensions]]
    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool>;

    /// ## \[\[GetOwnProperty]]
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>>;

    /// ## \[\[DefineOwnProperty]]
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool>;

    /// ## \[\[HasProperty]]
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey)
    -> JsResult<bool>;

    /// ## \[\[Get]]
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value>;

    /// ## \[\[Set]]
    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool>;

    /// ## \[\[Delete]]
    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool>;

    /// ## \[\[OwnPropertyKeys]]
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>>;
}

impl Object {
    /// Returns the wrapped String if this is a String exotic object.
    fn string_data(self, agent: &Agent) -> Option<String> {
        match self.kind(agent) {
            ObjectKind::PrimitiveObject(PrimitiveObjectData::String(string)) => Some(*string),
            _ => None,
        }
    }
}

impl InternalMethods for Object {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        Ok(ordinary_get_prototype_of(agent, self))
    }

    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        Ok(ordinary_set_prototype_of(agent, self, prototype))
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        Ok(ordinary_is_extensible(agent, self))
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        Ok(ordinary_prevent_extensions(agent, self))
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        if let Some(string) = self.string_data(agent) {
            // ### [10.4.3.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-string-exotic-objects-getownproperty-p)
            // 1. Let desc be OrdinaryGetOwnProperty(S, P).
            // 2. If desc is not undefined, return desc.
            if let Some(descriptor) = ordinary_get_own_property(agent, self, property_key) {
                return Ok(Some(descriptor));
            }
            // 3. Return StringGetOwnProperty(S, P).
            return Ok(string_exotic_get_own_property(agent, string, property_key));
        }
        Ok(ordinary_get_own_property(agent, self, property_key))
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        if matches!(self.kind(agent), ObjectKind::Array) {
            return array_define_own_property(agent, self, property_key, property_descriptor);
        }
        if let Some(string) = self.string_data(agent) {
            return Ok(string_exotic_define_own_property(
                agent,
                self,
                string,
                property_key,
                property_descriptor,
            ));
        }
        Ok(ordinary_define_own_property(
            agent,
            self,
            property_key,
            property_descriptor,
        ))
    }

    fn internal_has_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<bool> {
        ordinary_has_property(agent, self, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        ordinary_get(agent, self, property_key, receiver)
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        ordinary_set(agent, self, property_key, value, receiver)
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        ordinary_delete(agent, self, property_key)
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        if let Some(string) = self.string_data(agent) {
            return Ok(string_exotic_own_property_keys(agent, self, string));
        }
        Ok(ordinary_own_property_keys(agent, self))
    }
}
