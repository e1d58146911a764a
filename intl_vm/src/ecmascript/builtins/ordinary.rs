// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)

use super::array::array_create;
use crate::ecmascript::{
    abstract_operations::{call_function, get, get_function_realm, same_value},
    execution::{Agent, JsResult, ProtoIntrinsics},
    types::{
        Function, InternalMethods, Object, ObjectHeapData, ObjectKind, PropertyDescriptor,
        PropertyEntry, PropertyKey, PropertyValue, Value,
    },
};

/// ### [10.1.1.1 OrdinaryGetPrototypeOf ( O )](https://tc39.es/ecma262/#sec-ordinarygetprototypeof)
pub(crate) fn ordinary_get_prototype_of(agent: &Agent, object: Object) -> Option<Object> {
    // 1. Return O.[[Prototype]].
    agent[object].prototype
}

/// ### [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
///
/// The abstract operation OrdinarySetPrototypeOf takes arguments O (an Object)
/// and V (an Object or null) and returns a Boolean.
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = agent[object].prototype;
    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }
    // 3. Let extensible be O.[[Extensible]].
    // 4. If extensible is false, return false.
    if !agent[object].extensible {
        return false;
    }
    // 5. Let p be V.
    let mut p = prototype;
    // 6. Let done be false.
    // 7. Repeat, while done is false,
    while let Some(p_inner) = p {
        // a. If p is null, then
        //     i. Set done to true.
        // b. Else if SameValue(p, O) is true, then
        if p_inner == object {
            // i. Return false.
            return false;
        }
        // c. Else,
        // i. If p.[[GetPrototypeOf]] is not the ordinary object internal
        //    method defined in 10.1.1, set done to true.
        // ii. Else, set p to p.[[Prototype]].
        p = agent[p_inner].prototype;
    }
    // 8. Set O.[[Prototype]] to V.
    agent[object].prototype = prototype;
    // 9. Return true.
    true
}

/// ### [10.1.3.1 OrdinaryIsExtensible ( O )](https://tc39.es/ecma262/#sec-ordinaryisextensible)
pub(crate) fn ordinary_is_extensible(agent: &Agent, object: Object) -> bool {
    // 1. Return O.[[Extensible]].
    agent[object].extensible
}

/// ### [10.1.4.1 OrdinaryPreventExtensions ( O )](https://tc39.es/ecma262/#sec-ordinarypreventextensions)
pub(crate) fn ordinary_prevent_extensions(agent: &mut Agent, object: Object) -> bool {
    // 1. Set O.[[Extensible]] to false.
    agent[object].extensible = false;
    // 2. Return true.
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: Object,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2. Let D be a newly created Property Descriptor with no fields.
    // 3. Let X be O's own property whose key is P.
    // 4. If X is a data property, then ...
    // 5. Else, ...
    // 6. Set D.[[Enumerable]] to the value of X's [[Enumerable]] attribute.
    // 7. Set D.[[Configurable]] to the value of X's [[Configurable]] attribute.
    // 8. Return D.
    agent[object]
        .properties
        .get(&property_key)
        .map(|entry| entry.to_descriptor())
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = agent[object].properties.get(&property_key).copied();
    // 2. Let extensible be ? IsExtensible(O).
    let extensible = agent[object].extensible;
    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    validate_and_apply_property_descriptor(
        agent,
        Some(object),
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.2 IsCompatiblePropertyDescriptor ( Extensible, Desc, Current )](https://tc39.es/ecma262/#sec-iscompatiblepropertydescriptor)
pub(crate) fn is_compatible_property_descriptor(
    agent: &mut Agent,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyEntry>,
) -> bool {
    // 1. Return ValidateAndApplyPropertyDescriptor(undefined, "", Extensible, Desc, Current).
    let property_key = PropertyKey::from_str(agent, "");
    validate_and_apply_property_descriptor(
        agent,
        None,
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
///
/// The abstract operation ValidateAndApplyPropertyDescriptor takes arguments O
/// (an Object or undefined), P (a property key), extensible (a Boolean), Desc
/// (a Property Descriptor), and current (a Property Descriptor or undefined)
/// and returns a Boolean. It returns true if and only if Desc can be applied
/// as the property of an object with specified extensibility and current
/// property current while upholding invariants. When such application is
/// possible and O is not undefined, it is performed for the property named P
/// (which is created if necessary).
fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    object: Option<Object>,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyEntry>,
) -> bool {
    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }
        // b. If O is undefined, return true.
        // c. If IsAccessorDescriptor(Desc) is true, then
        // i. Create an own accessor property named P of object O whose
        //    [[Get]], [[Set]], [[Enumerable]], and [[Configurable]]
        //    attributes are set to the value of the corresponding field in
        //    Desc if Desc has that field, or to the attribute's default value
        //    otherwise.
        // d. Else,
        // i. Create an own data property named P of object O whose [[Value]],
        //    [[Writable]], [[Enumerable]], and [[Configurable]] attributes are
        //    set to the value of the corresponding field in Desc if Desc has
        //    that field, or to the attribute's default value otherwise.
        if let Some(object) = object {
            agent[object]
                .properties
                .set(property_key, PropertyEntry::from_descriptor(&descriptor));
        }
        // e. Return true.
        return true;
    };

    // 3. Assert: current is a fully populated Property Descriptor.
    let current_is_accessor = matches!(current.value, PropertyValue::Accessor { .. });

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if !current.configurable {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]]
        //    is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }
        // b. If Desc has an [[Enumerable]] field and
        //    SameValue(Desc.[[Enumerable]], current.[[Enumerable]]) is false,
        //    return false.
        if descriptor
            .enumerable
            .is_some_and(|enumerable| enumerable != current.enumerable)
        {
            return false;
        }
        // c. If IsGenericDescriptor(Desc) is false and
        //    SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current))
        //    is false, return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current_is_accessor
        {
            return false;
        }
        match current.value {
            // d. If IsAccessorDescriptor(current) is true, then
            PropertyValue::Accessor { get, set } => {
                // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]],
                //    current.[[Get]]) is false, return false.
                if descriptor.get.is_some_and(|desc_get| desc_get != get) {
                    return false;
                }
                // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]],
                //     current.[[Set]]) is false, return false.
                if descriptor.set.is_some_and(|desc_set| desc_set != set) {
                    return false;
                }
            }
            // e. Else if current.[[Writable]] is false, then
            PropertyValue::Data {
                value,
                writable: false,
            } => {
                // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is
                //    true, return false.
                if descriptor.writable == Some(true) {
                    return false;
                }
                // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]],
                //     current.[[Value]]) is false, return false.
                if descriptor
                    .value
                    .is_some_and(|desc_value| !same_value(desc_value, value))
                {
                    return false;
                }
            }
            PropertyValue::Data { writable: true, .. } => {}
        }
    }

    // 6. If O is not undefined, then
    if let Some(object) = object {
        // i. If Desc has a [[Configurable]] field, let configurable be
        //    Desc.[[Configurable]]; else let configurable be
        //    current.[[Configurable]].
        let configurable = descriptor.configurable.unwrap_or(current.configurable);
        // ii. If Desc has a [[Enumerable]] field, let enumerable be
        //     Desc.[[Enumerable]]; else let enumerable be current.[[Enumerable]].
        let enumerable = descriptor.enumerable.unwrap_or(current.enumerable);
        let value = match current.value {
            // a. If IsDataDescriptor(current) is true and
            //    IsAccessorDescriptor(Desc) is true, then
            // iii. Replace the property named P of object O with an accessor
            //      property whose [[Get]] and [[Set]] attributes are set to the
            //      value of the corresponding field in Desc if Desc has that
            //      field, or to the attribute's default value otherwise.
            PropertyValue::Data { .. } if descriptor.is_accessor_descriptor() => {
                PropertyValue::Accessor {
                    get: descriptor.get.flatten(),
                    set: descriptor.set.flatten(),
                }
            }
            // b. Else if IsAccessorDescriptor(current) is true and
            //    IsDataDescriptor(Desc) is true, then
            // iii. Replace the property named P of object O with a data
            //      property whose [[Value]] and [[Writable]] attributes are set
            //      to the value of the corresponding field in Desc if Desc has
            //      that field, or to the attribute's default value otherwise.
            PropertyValue::Accessor { .. } if descriptor.is_data_descriptor() => {
                PropertyValue::Data {
                    value: descriptor.value.unwrap_or(Value::Undefined),
                    writable: descriptor.writable.unwrap_or(false),
                }
            }
            // c. Else,
            // i. For each field of Desc, set the corresponding attribute of
            //    the property named P of object O to the value of the field.
            PropertyValue::Data { value, writable } => PropertyValue::Data {
                value: descriptor.value.unwrap_or(value),
                writable: descriptor.writable.unwrap_or(writable),
            },
            PropertyValue::Accessor { get, set } => PropertyValue::Accessor {
                get: descriptor.get.unwrap_or(get),
                set: descriptor.set.unwrap_or(set),
            },
        };
        agent[object].properties.set(
            property_key,
            PropertyEntry {
                value,
                enumerable,
                configurable,
            },
        );
    }

    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    let has_own = object.internal_get_own_property(agent, property_key)?;
    // 2. If hasOwn is not undefined, return true.
    if has_own.is_some() {
        return Ok(true);
    }
    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    // 4. If parent is not null, then
    if let Some(parent) = object.internal_get_prototype_of(agent)? {
        // a. Return ? parent.[[HasProperty]](P).
        return parent.internal_has_property(agent, property_key);
    }
    // 5. Return false.
    Ok(false)
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. If desc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        // b. If parent is null, return undefined.
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            return Ok(Value::Undefined);
        };
        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };
    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if let Some(value) = descriptor.value {
        debug_assert!(descriptor.is_data_descriptor());
        return Ok(value);
    }
    // 4. Assert: IsAccessorDescriptor(desc) is true.
    debug_assert!(descriptor.is_accessor_descriptor());
    // 5. Let getter be desc.[[Get]].
    // 6. If getter is undefined, return undefined.
    let Some(getter) = descriptor.get.flatten() else {
        return Ok(Value::Undefined);
    };
    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let own_descriptor = object.internal_get_own_property(agent, property_key)?;
    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    // 1. If ownDesc is undefined, then
    let own_descriptor = match own_descriptor {
        Some(own_descriptor) => own_descriptor,
        None => {
            // a. Let parent be ? O.[[GetPrototypeOf]]().
            // b. If parent is not null, then
            if let Some(parent) = object.internal_get_prototype_of(agent)? {
                // i. Return ? parent.[[Set]](P, V, Receiver).
                return parent.internal_set(agent, property_key, value, receiver);
            }
            // c. Else,
            // i. Set ownDesc to the PropertyDescriptor { [[Value]]: undefined,
            //    [[Writable]]: true, [[Enumerable]]: true,
            //    [[Configurable]]: true }.
            PropertyDescriptor {
                value: Some(Value::Undefined),
                writable: Some(true),
                enumerable: Some(true),
                configurable: Some(true),
                ..Default::default()
            }
        }
    };

    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }
        // b. If Receiver is not an Object, return false.
        let Value::Object(receiver) = receiver else {
            return Ok(false);
        };
        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        // d. If existingDescriptor is not undefined, then
        if let Some(existing_descriptor) = receiver.internal_get_own_property(agent, property_key)?
        {
            // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
            if existing_descriptor.is_accessor_descriptor() {
                return Ok(false);
            }
            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing_descriptor.writable == Some(false) {
                return Ok(false);
            }
            // iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
            let value_descriptor = PropertyDescriptor {
                value: Some(value),
                ..Default::default()
            };
            // iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
            return receiver.internal_define_own_property(agent, property_key, value_descriptor);
        }
        // e. Else,
        // i. Assert: Receiver does not currently have a property P.
        // ii. Return ? CreateDataProperty(Receiver, P, V).
        return receiver.internal_define_own_property(
            agent,
            property_key,
            PropertyDescriptor {
                value: Some(value),
                writable: Some(true),
                enumerable: Some(true),
                configurable: Some(true),
                ..Default::default()
            },
        );
    }

    // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
    debug_assert!(own_descriptor.is_accessor_descriptor());
    // 4. Let setter be ownDesc.[[Set]].
    // 5. If setter is undefined, return false.
    let Some(setter) = own_descriptor.set.flatten() else {
        return Ok(false);
    };
    // 6. Perform ? Call(setter, Receiver, « V »).
    call_function(
        agent,
        setter,
        receiver,
        Some(super::ArgumentsList::new(&[value])),
    )?;
    // 7. Return true.
    Ok(true)
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. If desc is undefined, return true.
        return Ok(true);
    };
    // 3. If desc.[[Configurable]] is true, then
    if descriptor.configurable == Some(true) {
        // a. Remove the own property with name P from O.
        agent[object].properties.remove(&property_key);
        // b. Return true.
        return Ok(true);
    }
    // 4. Return false.
    Ok(false)
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
pub(crate) fn ordinary_own_property_keys(agent: &Agent, object: Object) -> Vec<PropertyKey> {
    let properties = &agent[object].properties;
    // 1. Let keys be a new empty List.
    let mut keys = Vec::with_capacity(properties.len());
    // 2. For each own property key P of O such that P is an array index, in
    //    ascending numeric index order, do
    let mut integer_keys = properties
        .keys()
        .iter()
        .filter_map(|key| match key {
            PropertyKey::Integer(index) => Some(*index),
            _ => None,
        })
        .collect::<Vec<_>>();
    integer_keys.sort_unstable();
    // a. Append P to keys.
    keys.extend(integer_keys.into_iter().map(PropertyKey::Integer));
    // 3. For each own property key P of O such that P is a String and P is
    //    not an array index, in ascending chronological order of property
    //    creation, do
    // a. Append P to keys.
    keys.extend(
        properties
            .keys()
            .iter()
            .filter(|key| matches!(key, PropertyKey::String(_))),
    );
    // 4. For each own property key P of O such that P is a Symbol, in
    //    ascending chronological order of property creation, do
    // a. Append P to keys.
    keys.extend(properties.keys().iter().filter(|key| key.is_symbol()));
    // 5. Return keys.
    keys
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// The abstract operation OrdinaryObjectCreate takes argument proto (an Object
/// or null) and optional argument additionalInternalSlotsList (a List of names
/// of internal slots) and returns an Object. It is used to specify the runtime
/// creation of new ordinary objects.
pub fn ordinary_object_create(agent: &mut Agent, proto: Option<Object>) -> Object {
    // 1. Let internalSlotsList be « [[Prototype]], [[Extensible]] ».
    // 2. If additionalInternalSlotsList is present, set internalSlotsList to
    //    the list-concatenation of internalSlotsList and
    //    additionalInternalSlotsList.
    // 3. Let O be MakeBasicObject(internalSlotsList).
    // 4. Set O.[[Prototype]] to proto.
    // 5. Return O.
    Object::create(agent, ObjectHeapData::new(proto, ObjectKind::Ordinary))
}

/// Creates an object whose internal slots are determined by
/// `proto_intrinsics`. The \[\[Prototype]] is `prototype` if given, and the
/// current realm's intrinsic default prototype otherwise.
pub(crate) fn ordinary_object_create_with_intrinsics(
    agent: &mut Agent,
    proto_intrinsics: Option<ProtoIntrinsics>,
    prototype: Option<Object>,
) -> Object {
    let Some(proto_intrinsics) = proto_intrinsics else {
        return ordinary_object_create(agent, prototype);
    };
    let prototype = prototype.unwrap_or_else(|| {
        agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(proto_intrinsics)
    });
    let kind = match proto_intrinsics {
        ProtoIntrinsics::Array => return array_create(agent, 0, Some(prototype)),
        ProtoIntrinsics::Error | ProtoIntrinsics::RangeError | ProtoIntrinsics::TypeError => {
            ObjectKind::Error
        }
        ProtoIntrinsics::Boolean
        | ProtoIntrinsics::Number
        | ProtoIntrinsics::Object
        | ProtoIntrinsics::String => ObjectKind::Ordinary,
    };
    Object::create(agent, ObjectHeapData::new(Some(prototype), kind))
}

/// ### [10.1.13 OrdinaryCreateFromConstructor ( constructor, intrinsicDefaultProto \[ , internalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinarycreatefromconstructor)
///
/// The abstract operation OrdinaryCreateFromConstructor takes arguments
/// constructor (a constructor) and intrinsicDefaultProto (a String) and
/// optional argument internalSlotsList (a List of names of internal slots) and
/// returns either a normal completion containing an Object or a throw
/// completion. It creates an ordinary object whose \[\[Prototype]] value is
/// retrieved from a constructor's "prototype" property, if it exists.
/// Otherwise the intrinsic named by intrinsicDefaultProto is used for
/// \[\[Prototype]].
pub(crate) fn ordinary_create_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object.
    // 2. Let proto be ? GetPrototypeFromConstructor(constructor,
    //    intrinsicDefaultProto).
    let proto = get_prototype_from_constructor(agent, constructor, intrinsic_default_proto)?;
    // 3. If internalSlotsList is present, let slotsList be internalSlotsList.
    // 4. Else, let slotsList be a new empty List.
    // 5. Return OrdinaryObjectCreate(proto, slotsList).
    Ok(ordinary_object_create_with_intrinsics(
        agent,
        Some(intrinsic_default_proto),
        Some(proto),
    ))
}

/// ### [10.1.14 GetPrototypeFromConstructor ( constructor, intrinsicDefaultProto )](https://tc39.es/ecma262/#sec-getprototypefromconstructor)
///
/// The abstract operation GetPrototypeFromConstructor takes arguments
/// constructor (a function object) and intrinsicDefaultProto (a String) and
/// returns either a normal completion containing an Object or a throw
/// completion. It determines the \[\[Prototype]] value that should be used to
/// create an object corresponding to a specific constructor. The value is
/// retrieved from the constructor's "prototype" property, if it exists.
/// Otherwise the intrinsic named by intrinsicDefaultProto is used for
/// \[\[Prototype]].
pub(crate) fn get_prototype_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object.
    // 2. Let proto be ? Get(constructor, "prototype").
    let key = PropertyKey::from_str(agent, "prototype");
    let proto = get(agent, constructor.into_object(), key)?;
    // 3. If proto is not an Object, then
    if let Value::Object(proto) = proto {
        return Ok(proto);
    }
    // a. Let realm be ? GetFunctionRealm(constructor).
    let realm = get_function_realm(agent, constructor);
    // b. Set proto to realm's intrinsic object named intrinsicDefaultProto.
    // 4. Return proto.
    Ok(agent[realm]
        .intrinsics()
        .get_intrinsic_default_proto(intrinsic_default_proto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::Options;

    fn with_realm<R>(f: impl FnOnce(&mut Agent) -> R) -> R {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, f)
    }

    #[test]
    fn prototype_cycles_are_rejected() {
        with_realm(|agent| {
            let a = ordinary_object_create(agent, None);
            let b = ordinary_object_create(agent, Some(a));
            assert!(!ordinary_set_prototype_of(agent, a, Some(b)));
            assert!(ordinary_set_prototype_of(agent, b, None));
            assert!(ordinary_set_prototype_of(agent, a, Some(b)));
        });
    }

    #[test]
    fn non_configurable_properties_reject_redefinition() {
        with_realm(|agent| {
            let object = ordinary_object_create(agent, None);
            let key = PropertyKey::from_str(agent, "fixed");
            let frozen = PropertyDescriptor {
                value: Some(Value::Number(1.0)),
                writable: Some(false),
                enumerable: Some(false),
                configurable: Some(false),
                ..Default::default()
            };
            assert!(ordinary_define_own_property(agent, object, key, frozen));
            assert!(ordinary_define_own_property(agent, object, key, frozen));
            let changed = PropertyDescriptor {
                value: Some(Value::Number(2.0)),
                ..Default::default()
            };
            assert!(!ordinary_define_own_property(agent, object, key, changed));
            assert!(!ordinary_delete(agent, object, key).unwrap());
            let enumerable_change = PropertyDescriptor {
                enumerable: Some(true),
                ..Default::default()
            };
            assert!(!ordinary_define_own_property(agent, object, key, enumerable_change));
        });
    }

    #[test]
    fn own_property_keys_order() {
        with_realm(|agent| {
            let object = ordinary_object_create(agent, None);
            let b = PropertyKey::from_str(agent, "b");
            let a = PropertyKey::from_str(agent, "a");
            let symbol = crate::ecmascript::types::Symbol::new(agent, None);
            for key in [b, PropertyKey::Integer(2), symbol.into(), a, PropertyKey::Integer(0)] {
                ordinary_define_own_property(
                    agent,
                    object,
                    key,
                    PropertyDescriptor::new_data_descriptor(Value::Null),
                );
            }
            assert_eq!(
                ordinary_own_property_keys(agent, object),
                vec![
                    PropertyKey::Integer(0),
                    PropertyKey::Integer(2),
                    b,
                    a,
                    PropertyKey::Symbol(symbol)
                ]
            );
        });
    }

    #[test]
    fn setting_through_a_prototype_creates_an_own_property() {
        with_realm(|agent| {
            let parent = ordinary_object_create(agent, None);
            let child = ordinary_object_create(agent, Some(parent));
            let key = PropertyKey::from_str(agent, "x");
            let value = Value::Number(3.0);
            assert!(ordinary_set(agent, child, key, value, child.into_value()).unwrap());
            assert!(agent[child].properties.contains(&key));
            assert!(!agent[parent].properties.contains(&key));
        });
    }
}
