// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        create_data_property_or_throw, get, has_property, is_callable, to_boolean,
    },
    builtins::ordinary::ordinary_object_create_with_intrinsics,
    execution::{Agent, JsResult, ProtoIntrinsics, agent::ExceptionType},
    types::{Function, Object, PropertyKey, Value},
};

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// \[\[Value]]
    pub value: Option<Value>,

    /// \[\[Writable]]
    pub writable: Option<bool>,

    /// \[\[Get]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub get: Option<Option<Function>>,

    /// \[\[Set]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub set: Option<Option<Function>>,

    /// \[\[Enumerable]]
    pub enumerable: Option<bool>,

    /// \[\[Configurable]]
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// A data property with the attributes used for builtin properties:
    /// writable, non-enumerable and configurable.
    pub fn new_data_descriptor(value: Value) -> Self {
        Self {
            value: Some(value),
            writable: Some(true),
            get: None,
            set: None,
            enumerable: Some(false),
            configurable: Some(true),
        }
    }

    /// ### [6.2.6.1 IsAccessorDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isaccessordescriptor)
    pub fn is_accessor_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        // 2. If Desc has a [[Get]] field, return true.
        // 3. If Desc has a [[Set]] field, return true.
        // 4. Return false.
        self.get.is_some() || self.set.is_some()
    }

    /// ### [6.2.6.2 IsDataDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isdatadescriptor)
    pub fn is_data_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        // 2. If Desc has a [[Value]] field, return true.
        // 3. If Desc has a [[Writable]] field, return true.
        // 4. Return false.
        self.value.is_some() || self.writable.is_some()
    }

    /// ### [6.2.6.3 IsGenericDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isgenericdescriptor)
    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    /// Returns true if the descriptor has no fields at all.
    pub fn has_fields(&self) -> bool {
        self.value.is_some()
            || self.writable.is_some()
            || self.get.is_some()
            || self.set.is_some()
            || self.enumerable.is_some()
            || self.configurable.is_some()
    }

    /// ### [6.2.6.4 FromPropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-frompropertydescriptor)
    pub fn from_property_descriptor(
        descriptor: Option<Self>,
        agent: &mut Agent,
    ) -> JsResult<Value> {
        // 1. If Desc is undefined, return undefined.
        let Some(descriptor) = descriptor else {
            return Ok(Value::Undefined);
        };
        // 2. Let obj be OrdinaryObjectCreate(%Object.prototype%).
        let obj =
            ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object), None);
        // 3. Assert: obj is an extensible ordinary object with no own properties.
        // 4. If Desc has a [[Value]] field, then
        if let Some(value) = descriptor.value {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "value", Desc.[[Value]]).
            let key = PropertyKey::from_str(agent, "value");
            create_data_property_or_throw(agent, obj, key, value)?;
        }
        // 5. If Desc has a [[Writable]] field, then
        if let Some(writable) = descriptor.writable {
            let key = PropertyKey::from_str(agent, "writable");
            create_data_property_or_throw(agent, obj, key, writable.into())?;
        }
        // 6. If Desc has a [[Get]] field, then
        if let Some(getter) = descriptor.get {
            let key = PropertyKey::from_str(agent, "get");
            let value = getter.map_or(Value::Undefined, Value::from);
            create_data_property_or_throw(agent, obj, key, value)?;
        }
        // 7. If Desc has a [[Set]] field, then
        if let Some(setter) = descriptor.set {
            let key = PropertyKey::from_str(agent, "set");
            let value = setter.map_or(Value::Undefined, Value::from);
            create_data_property_or_throw(agent, obj, key, value)?;
        }
        // 8. If Desc has an [[Enumerable]] field, then
        if let Some(enumerable) = descriptor.enumerable {
            let key = PropertyKey::from_str(agent, "enumerable");
            create_data_property_or_throw(agent, obj, key, enumerable.into())?;
        }
        // 9. If Desc has a [[Configurable]] field, then
        if let Some(configurable) = descriptor.configurable {
            let key = PropertyKey::from_str(agent, "configurable");
            create_data_property_or_throw(agent, obj, key, configurable.into())?;
        }
        // 10. Return obj.
        Ok(obj.into_value())
    }

    /// ### [6.2.6.5 ToPropertyDescriptor ( Obj )](https://tc39.es/ecma262/#sec-topropertydescriptor)
    ///
    /// The abstract operation ToPropertyDescriptor takes argument Obj (an
    /// ECMAScript language value) and returns either a normal completion
    /// containing a Property Descriptor or a throw completion.
    pub fn to_property_descriptor(agent: &mut Agent, obj: Value) -> JsResult<Self> {
        // 1. If Obj is not an Object, throw a TypeError exception.
        let Ok(obj) = Object::try_from(obj) else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Property descriptor must be an object",
            ));
        };
        // 2. Let desc be a new Property Descriptor that initially has no
        //    fields.
        let mut desc = PropertyDescriptor::default();
        // 3. Let hasEnumerable be ? HasProperty(Obj, "enumerable").
        // 4. If hasEnumerable is true, then
        if let Some(enumerable) = get_descriptor_field(agent, obj, "enumerable")? {
            // a. Let enumerable be ToBoolean(? Get(Obj, "enumerable")).
            // b. Set desc.[[Enumerable]] to enumerable.
            desc.enumerable = Some(to_boolean(agent, enumerable));
        }
        // 5. Let hasConfigurable be ? HasProperty(Obj, "configurable").
        // 6. If hasConfigurable is true, then
        if let Some(configurable) = get_descriptor_field(agent, obj, "configurable")? {
            desc.configurable = Some(to_boolean(agent, configurable));
        }
        // 7. Let hasValue be ? HasProperty(Obj, "value").
        // 8. If hasValue is true, then
        if let Some(value) = get_descriptor_field(agent, obj, "value")? {
            desc.value = Some(value);
        }
        // 9. Let hasWritable be ? HasProperty(Obj, "writable").
        // 10. If hasWritable is true, then
        if let Some(writable) = get_descriptor_field(agent, obj, "writable")? {
            desc.writable = Some(to_boolean(agent, writable));
        }
        // 11. Let hasGet be ? HasProperty(Obj, "get").
        // 12. If hasGet is true, then
        if let Some(getter) = get_descriptor_field(agent, obj, "get")? {
            // b. If IsCallable(getter) is false and getter is not undefined,
            //    throw a TypeError exception.
            desc.get = Some(accessor_function(agent, getter, "Getter")?);
        }
        // 13. Let hasSet be ? HasProperty(Obj, "set").
        // 14. If hasSet is true, then
        if let Some(setter) = get_descriptor_field(agent, obj, "set")? {
            desc.set = Some(accessor_function(agent, setter, "Setter")?);
        }
        // 15. If desc has a [[Get]] field or desc has a [[Set]] field, then
        // a. If desc has a [[Value]] field or desc has a [[Writable]] field,
        //    throw a TypeError exception.
        if desc.is_accessor_descriptor() && desc.is_data_descriptor() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute",
            ));
        }
        // 16. Return desc.
        Ok(desc)
    }
}

/// `? HasProperty(Obj, name)` followed by `? Get(Obj, name)` when present.
fn get_descriptor_field(agent: &mut Agent, obj: Object, name: &str) -> JsResult<Option<Value>> {
    let key = PropertyKey::from_str(agent, name);
    if has_property(agent, obj, key)? {
        Ok(Some(get(agent, obj, key)?))
    } else {
        Ok(None)
    }
}

fn accessor_function(agent: &mut Agent, value: Value, kind: &str) -> JsResult<Option<Function>> {
    if value.is_undefined() {
        return Ok(None);
    }
    match is_callable(agent, value) {
        Some(function) => Ok(Some(function)),
        None => Err(agent.throw_exception(
            ExceptionType::TypeError,
            format!("{kind} must be a function"),
        )),
    }
}
