// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{define_property_or_throw, get, to_object, to_property_key},
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::{ordinary_create_from_constructor, ordinary_object_create_with_intrinsics},
    },
    execution::{
        Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm,
        agent::ExceptionType,
    },
    types::{Function, InternalMethods, Object, PropertyDescriptor, Value},
};

pub(crate) struct ObjectConstructor;

impl Builtin for ObjectConstructor {
    const NAME: &'static str = "Object";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(ObjectConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for ObjectConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Object;
}

struct ObjectDefineProperties;

impl Builtin for ObjectDefineProperties {
    const NAME: &'static str = "defineProperties";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::define_properties);
}

struct ObjectDefineProperty;

impl Builtin for ObjectDefineProperty {
    const NAME: &'static str = "defineProperty";
    const LENGTH: u8 = 3;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::define_property);
}

struct ObjectGetOwnPropertyDescriptor;

impl Builtin for ObjectGetOwnPropertyDescriptor {
    const NAME: &'static str = "getOwnPropertyDescriptor";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour =
        Behaviour::Regular(ObjectConstructor::get_own_property_descriptor);
}

struct ObjectGetPrototypeOf;

impl Builtin for ObjectGetPrototypeOf {
    const NAME: &'static str = "getPrototypeOf";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::get_prototype_of);
}

impl ObjectConstructor {
    /// ### [20.1.1.1 Object ( \[ value \] )](https://tc39.es/ecma262/#sec-object-value)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        let value = arguments.get(0);
        // 1. If NewTarget is neither undefined nor the active function
        //    object, then
        if let Some(new_target) = new_target {
            let active_function = agent.running_execution_context().function;
            if active_function.map(Function::into_object) != Some(new_target) {
                // a. Return ? OrdinaryCreateFromConstructor(NewTarget,
                //    "%Object.prototype%").
                return ordinary_create_from_constructor(
                    agent,
                    Function(new_target),
                    ProtoIntrinsics::Object,
                )
                .map(Object::into_value);
            }
        }
        // 2. If value is either undefined or null, return
        //    OrdinaryObjectCreate(%Object.prototype%).
        if value.is_undefined() || value.is_null() {
            return Ok(
                ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object), None)
                    .into_value(),
            );
        }
        // 3. Return ! ToObject(value).
        to_object(agent, value).map(Object::into_value)
    }

    /// ### [20.1.2.3 Object.defineProperties ( O, Properties )](https://tc39.es/ecma262/#sec-object.defineproperties)
    fn define_properties(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let o = arguments.get(0);
        let properties = arguments.get(1);
        // 1. If O is not an Object, throw a TypeError exception.
        let Value::Object(o) = o else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Object.defineProperties called on non-object",
            ));
        };
        // 2. Return ? ObjectDefineProperties(O, Properties).
        object_define_properties(agent, o, properties).map(Object::into_value)
    }

    /// ### [20.1.2.4 Object.defineProperty ( O, P, Attributes )](https://tc39.es/ecma262/#sec-object.defineproperty)
    fn define_property(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let o = arguments.get(0);
        let p = arguments.get(1);
        let attributes = arguments.get(2);
        // 1. If O is not an Object, throw a TypeError exception.
        let Value::Object(o) = o else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Object.defineProperty called on non-object",
            ));
        };
        // 2. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, p)?;
        // 3. Let desc be ? ToPropertyDescriptor(Attributes).
        let desc = PropertyDescriptor::to_property_descriptor(agent, attributes)?;
        // 4. Perform ? DefinePropertyOrThrow(O, key, desc).
        define_property_or_throw(agent, o, key, desc)?;
        // 5. Return O.
        Ok(o.into_value())
    }

    /// ### [20.1.2.8 Object.getOwnPropertyDescriptor ( O, P )](https://tc39.es/ecma262/#sec-object.getownpropertydescriptor)
    fn get_own_property_descriptor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let obj be ? ToObject(O).
        let obj = to_object(agent, arguments.get(0))?;
        // 2. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, arguments.get(1))?;
        // 3. Let desc be ? obj.[[GetOwnProperty]](key).
        let desc = obj.internal_get_own_property(agent, key)?;
        // 4. Return FromPropertyDescriptor(desc).
        PropertyDescriptor::from_property_descriptor(desc, agent)
    }

    /// ### [20.1.2.12 Object.getPrototypeOf ( O )](https://tc39.es/ecma262/#sec-object.getprototypeof)
    fn get_prototype_of(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let obj be ? ToObject(O).
        let obj = to_object(agent, arguments.get(0))?;
        // 2. Return ? obj.[[GetPrototypeOf]]().
        obj.internal_get_prototype_of(agent).map(Value::from)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let object_prototype = agent[realm].intrinsics().object_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<ObjectConstructor>(agent, realm)
            .with_property_capacity(5)
            .with_builtin_function_property::<ObjectDefineProperties>()
            .with_builtin_function_property::<ObjectDefineProperty>()
            .with_builtin_function_property::<ObjectGetOwnPropertyDescriptor>()
            .with_builtin_function_property::<ObjectGetPrototypeOf>()
            .with_prototype_property(object_prototype)
            .build();
    }
}

/// ### [20.1.2.3.1 ObjectDefineProperties ( O, Properties )](https://tc39.es/ecma262/#sec-objectdefineproperties)
///
/// The abstract operation ObjectDefineProperties takes arguments O (an Object)
/// and Properties (an ECMAScript language value) and returns either a normal
/// completion containing an Object or a throw completion.
fn object_define_properties(
    agent: &mut Agent,
    o: Object,
    properties: Value,
) -> JsResult<Object> {
    // 1. Let props be ? ToObject(Properties).
    let props = to_object(agent, properties)?;
    // 2. Let keys be ? props.[[OwnPropertyKeys]]().
    let keys = props.internal_own_property_keys(agent)?;
    // 3. Let descriptors be a new empty List.
    let mut descriptors = Vec::with_capacity(keys.len());
    // 4. For each element nextKey of keys, do
    for next_key in keys {
        // a. Let propDesc be ? props.[[GetOwnProperty]](nextKey).
        let prop_desc = props.internal_get_own_property(agent, next_key)?;
        // b. If propDesc is not undefined and propDesc.[[Enumerable]] is
        //    true, then
        let Some(prop_desc) = prop_desc else {
            continue;
        };
        if prop_desc.enumerable != Some(true) {
            continue;
        }
        // i. Let descObj be ? Get(props, nextKey).
        let desc_obj = get(agent, props, next_key)?;
        // ii. Let desc be ? ToPropertyDescriptor(descObj).
        let desc = PropertyDescriptor::to_property_descriptor(agent, desc_obj)?;
        // iii. Append the Record { [[Key]]: nextKey, [[Descriptor]]: desc }
        //      to descriptors.
        descriptors.push((next_key, desc));
    }
    // 5. For each element property of descriptors, do
    for (key, desc) in descriptors {
        // a. Perform ? DefinePropertyOrThrow(O, property.[[Key]],
        //    property.[[Descriptor]]).
        define_property_or_throw(agent, o, key, desc)?;
    }
    // 6. Return O.
    Ok(o)
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, construct, get},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{InternalMethods, PropertyKey, Value},
    };

    #[test]
    fn define_property_installs_accessors() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let object_constructor = agent.current_realm().intrinsics().object();
            let target = construct(agent, object_constructor, None, None).unwrap();
            let define_property = PropertyKey::from_str(agent, "defineProperty");
            let Value::Object(define_property) =
                get(agent, object_constructor.into_object(), define_property).unwrap()
            else {
                panic!("Object.defineProperty is missing");
            };
            let define_property = define_property.as_function(agent).unwrap();
            let attributes = construct(agent, object_constructor, None, None).unwrap();
            let value_key = PropertyKey::from_str(agent, "value");
            attributes
                .internal_set(agent, value_key, Value::Number(3.0), attributes.into_value())
                .unwrap();
            let key = Value::from_str(agent, "three");
            call_function(
                agent,
                define_property,
                Value::Undefined,
                Some(ArgumentsList::new(&[
                    target.into_value(),
                    key,
                    attributes.into_value(),
                ])),
            )
            .unwrap();
            let three = PropertyKey::from_str(agent, "three");
            assert_eq!(get(agent, target, three).unwrap(), Value::Number(3.0));
            let descriptor = target
                .internal_get_own_property(agent, three)
                .unwrap()
                .unwrap();
            assert_eq!(descriptor.writable, Some(false));
            assert_eq!(descriptor.enumerable, Some(false));
        });
    }

    #[test]
    fn calling_object_wraps_primitives() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let object_constructor = agent.current_realm().intrinsics().object();
            let wrapped = call_function(
                agent,
                object_constructor,
                Value::Undefined,
                Some(ArgumentsList::new(&[Value::Number(7.0)])),
            )
            .unwrap();
            let Value::Object(wrapped) = wrapped else {
                panic!("Object(7) did not return an object");
            };
            assert_eq!(wrapped.primitive_value(agent), Some(Value::Number(7.0)));
        });
    }
}
