// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::{
    testing_and_comparison::{is_callable, is_constructor},
    type_conversion::{to_length, to_object},
};
use crate::ecmascript::{
    builtins::{
        ArgumentsList, BuiltinFunctionHeapData, array::array_create, builtin_call_or_construct,
    },
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{Function, InternalMethods, Object, ObjectKind, PropertyDescriptor, PropertyKey, Value},
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub fn get(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<Value> {
    // 1. Return ? O.[[Get]](P, O).
    o.internal_get(agent, p, o.into_value())
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// The abstract operation GetV takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It is used
/// to retrieve the value of a specific property of an ECMAScript language
/// value. If the value is not an object, the property lookup is performed
/// using a wrapper object appropriate for the type of the value.
pub fn get_v(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Value> {
    // 1. Let O be ? ToObject(V).
    let o = to_object(agent, v)?;
    // 2. Return ? O.[[Get]](P, V).
    o.internal_get(agent, p, v)
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
///
/// The abstract operation Set takes arguments O (an Object), P (a property
/// key), V (an ECMAScript language value), and Throw (a Boolean) and returns
/// either a normal completion containing UNUSED or a throw completion. It is
/// used to set the value of a specific property of an object. V is the new
/// value for the property.
pub fn set(agent: &mut Agent, o: Object, p: PropertyKey, v: Value, throw: bool) -> JsResult<()> {
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = o.internal_set(agent, p, v, o.into_value())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        let message = format!("Cannot assign to property {}", p.as_display(agent));
        return Err(agent.throw_exception(ExceptionType::TypeError, message));
    }
    // 3. Return UNUSED.
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// The abstract operation CreateDataProperty takes arguments O (an Object), P
/// (a property key), and V (an ECMAScript language value) and returns either a
/// normal completion containing a Boolean or a throw completion. It is used to
/// create a new own property of an object.
///
/// > NOTE: This abstract operation creates a property whose attributes are set
/// > to the same defaults used for properties created by the ECMAScript language
/// > assignment operator. Normally, the property will not already exist. If it
/// > does exist and is not configurable or if O is not extensible,
/// > \[\[DefineOwnProperty]] will return false.
pub fn create_data_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor {
        value: Some(value),
        writable: Some(true),
        get: None,
        set: None,
        enumerable: Some(true),
        configurable: Some(true),
    };
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, property_key, new_desc)
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
///
/// The abstract operation CreateDataPropertyOrThrow takes arguments O (an
/// Object), P (a property key), and V (an ECMAScript language value) and
/// returns either a normal completion containing UNUSED or a throw completion.
/// It is used to create a new own property of an object. It throws a TypeError
/// exception if the requested property update cannot be performed.
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    // 1. Let success be ? CreateDataProperty(O, P, V).
    let success = create_data_property(agent, object, property_key, value)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        let message = format!("Cannot define property {}", property_key.as_display(agent));
        Err(agent.throw_exception(ExceptionType::TypeError, message))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.8 CreateNonEnumerableDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createnonenumerabledatapropertyorthrow)
///
/// The abstract operation CreateNonEnumerableDataPropertyOrThrow takes
/// arguments O (an Object), P (a property key), and V (an ECMAScript language
/// value) and returns UNUSED. It is used to create a new non-enumerable own
/// property of an ordinary object.
pub fn create_non_enumerable_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) {
    // 1. Assert: O is an ordinary, extensible object with no non-configurable
    //    properties.
    // 2. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]:
    //    true, [[Enumerable]]: false, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor {
        value: Some(value),
        writable: Some(true),
        enumerable: Some(false),
        configurable: Some(true),
        ..Default::default()
    };
    // 3. Perform ! DefinePropertyOrThrow(O, P, newDesc).
    let defined = object.internal_define_own_property(agent, property_key, new_desc);
    debug_assert!(matches!(defined, Ok(true)));
    // 4. Return UNUSED.
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
///
/// The abstract operation DefinePropertyOrThrow takes arguments O (an Object),
/// P (a property key), and desc (a Property Descriptor) and returns either a
/// normal completion containing UNUSED or a throw completion. It is used to
/// call the \[\[DefineOwnProperty]] internal method of an object in a manner
/// that will throw a TypeError exception if the requested property update
/// cannot be performed.
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
    desc: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = object.internal_define_own_property(agent, property_key, desc)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        let message = format!("Cannot redefine property: {}", property_key.as_display(agent));
        Err(agent.throw_exception(ExceptionType::TypeError, message))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion. It
/// is used to get the value of a specific property of an ECMAScript language
/// value when the value of the property is expected to be a function.
pub fn get_method(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 2. If func is either undefined or null, return undefined.
    if func.is_undefined() || func.is_null() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    match is_callable(agent, func) {
        // 4. Return func.
        Some(func) => Ok(Some(func)),
        None => Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object")),
    }
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
///
/// The abstract operation HasProperty takes arguments O (an Object) and P (a
/// property key) and returns either a normal completion containing a Boolean
/// or a throw completion. It is used to determine whether an object has a
/// property with the specified property key. The property may be either own or
/// inherited.
pub fn has_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Return ? O.[[HasProperty]](P).
    o.internal_has_property(agent, p)
}

/// ### [7.3.13 HasOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-hasownproperty)
///
/// The abstract operation HasOwnProperty takes arguments O (an Object) and P
/// (a property key) and returns either a normal completion containing a
/// Boolean or a throw completion. It is used to determine whether an object
/// has an own property with the specified property key.
pub fn has_own_property(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let desc = o.internal_get_own_property(agent, p)?;
    // 2. If desc is undefined, return false.
    // 3. Return true.
    Ok(desc.is_some())
}

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// The abstract operation Call takes arguments F (an ECMAScript language
/// value) and V (an ECMAScript language value) and optional argument
/// argumentsList (a List of ECMAScript language values) and returns either a
/// normal completion containing an ECMAScript language value or a throw
/// completion. It is used to call the \[\[Call]] internal method of a function
/// object. F is the function object, V is an ECMAScript language value that is
/// the this value of the \[\[Call]], and argumentsList is the value passed to
/// the corresponding argument of the internal method. If argumentsList is not
/// present, a new empty List is used as its value.
pub fn call(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    let Some(f) = is_callable(agent, f) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(agent, f, v, arguments_list)
}

/// Abstract operation Call specialized for a Function.
pub fn call_function(
    agent: &mut Agent,
    f: Function,
    v: Value,
    arguments_list: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // ### [10.3.1 [[Call]] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    // 1. Return ? BuiltinCallOrConstruct(F, thisArgument, argumentsList, undefined).
    builtin_call_or_construct(agent, f, v, arguments_list, None)
}

/// ### [7.3.15 Construct ( F \[ , argumentsList \[ , newTarget \] \] )](https://tc39.es/ecma262/#sec-construct)
///
/// The abstract operation Construct takes argument F (a constructor) and
/// optional arguments argumentsList (a List of ECMAScript language values)
/// and newTarget (a constructor) and returns either a normal completion
/// containing an Object or a throw completion. It is used to call the
/// \[\[Construct]] internal method of a function object.
pub fn construct(
    agent: &mut Agent,
    f: Function,
    arguments_list: Option<ArgumentsList>,
    new_target: Option<Function>,
) -> JsResult<Object> {
    if is_constructor(agent, f.into_value()).is_none() {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"));
    }
    // 1. If newTarget is not present, set newTarget to F.
    let new_target = new_target.unwrap_or(f);
    // 2. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = arguments_list.unwrap_or_default();
    // 3. Return ? F.[[Construct]](argumentsList, newTarget).
    let result = builtin_call_or_construct(
        agent,
        f,
        Value::Undefined,
        arguments_list,
        Some(new_target),
    )?;
    match result {
        Value::Object(object) => Ok(object),
        _ => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Constructor did not return an object",
        )),
    }
}

/// ### [7.3.17 CreateArrayFromList ( elements )](https://tc39.es/ecma262/#sec-createarrayfromlist)
///
/// The abstract operation CreateArrayFromList takes argument elements (a List
/// of ECMAScript language values) and returns an Array. It is used to create
/// an Array whose elements are provided by elements.
pub fn create_array_from_list(agent: &mut Agent, elements: &[Value]) -> Object {
    // 1. Let array be ! ArrayCreate(0).
    let array = array_create(agent, elements.len() as u32, None);
    // 2. Let n be 0.
    // 3. For each element e of elements, do
    for (n, e) in elements.iter().enumerate() {
        // a. Perform ! CreateDataPropertyOrThrow(array, ! ToString(𝔽(n)), e).
        // b. Set n to n + 1.
        let created = create_data_property(agent, array, PropertyKey::Integer(n as u32), *e);
        debug_assert_eq!(created, Ok(true));
    }
    // 4. Return array.
    array
}

/// ### [7.3.18 LengthOfArrayLike ( obj )](https://tc39.es/ecma262/#sec-lengthofarraylike)
///
/// The abstract operation LengthOfArrayLike takes argument obj (an Object) and
/// returns either a normal completion containing a non-negative integer or a
/// throw completion. It returns the value of the "length" property of an
/// array-like object.
pub fn length_of_array_like(agent: &mut Agent, obj: Object) -> JsResult<u64> {
    // 1. Return ℝ(? ToLength(? Get(obj, "length"))).
    let key = PropertyKey::from_str(agent, "length");
    let property = get(agent, obj, key)?;
    to_length(agent, property)
}

/// ### [7.3.25 GetFunctionRealm ( obj )](https://tc39.es/ecma262/#sec-getfunctionrealm)
///
/// The abstract operation GetFunctionRealm takes argument obj (a function
/// object) and returns either a normal completion containing a Realm Record or
/// a throw completion.
pub fn get_function_realm(agent: &Agent, obj: Function) -> Realm {
    match obj.into_object().kind(agent) {
        // 1. If obj has a [[Realm]] internal slot, then
        // a. Return obj.[[Realm]].
        ObjectKind::BuiltinFunction(BuiltinFunctionHeapData { realm, .. }) => *realm,
        // 4. Return the current Realm Record.
        _ => agent.current_realm_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::Options;

    #[test]
    fn create_array_from_list_sets_length() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let first = Value::from_str(agent, "en");
            let array = create_array_from_list(agent, &[first, Value::Number(2.0)]);
            assert!(array.is_array(agent));
            assert_eq!(length_of_array_like(agent, array).unwrap(), 2);
            assert_eq!(get(agent, array, PropertyKey::Integer(0)).unwrap(), first);
            assert_eq!(
                get(agent, array, PropertyKey::Integer(2)).unwrap(),
                Value::Undefined
            );
        });
    }

    #[test]
    fn get_v_looks_up_the_wrapper_prototype() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let key = PropertyKey::from_str(agent, "length");
            let string = Value::from_str(agent, "abc");
            assert_eq!(get_v(agent, string, key).unwrap(), Value::Number(3.0));
            let key = PropertyKey::from_str(agent, "toString");
            assert!(get_method(agent, Value::Number(1.0), key).unwrap().is_some());
            assert!(get_v(agent, Value::Undefined, key).is_err());
        });
    }

    #[test]
    fn calling_a_non_callable_throws() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let error = call(agent, Value::Number(1.0), Value::Undefined, None).unwrap_err();
            assert_eq!(error.to_string(agent), "TypeError: Not a callable object");
        });
    }
}
