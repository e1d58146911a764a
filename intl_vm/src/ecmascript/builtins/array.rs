// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)
//!
//! Array elements and `"length"` are stored as ordinary own properties; the
//! exotic \[\[DefineOwnProperty]] keeps the two consistent.

use super::ordinary::ordinary_define_own_property;
use crate::ecmascript::{
    abstract_operations::{to_number, to_uint32},
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{
        InternalMethods, Object, ObjectHeapData, ObjectKind, PropertyDescriptor, PropertyEntry,
        PropertyKey, PropertyStorage, PropertyValue, Value,
    },
};

/// ### [10.4.2.2 ArrayCreate ( length \[ , proto \] )](https://tc39.es/ecma262/#sec-arraycreate)
///
/// The abstract operation ArrayCreate takes argument length (a non-negative
/// integer) and optional argument proto (an Object) and returns either a
/// normal completion containing an Array exotic object or a throw completion.
/// It is used to specify the creation of new Arrays.
///
/// Lengths above `2**32 - 1` are unrepresentable here; callers that accept
/// arbitrary lengths throw the RangeError themselves.
pub(crate) fn array_create(agent: &mut Agent, length: u32, proto: Option<Object>) -> Object {
    // 2. If proto is not present, set proto to %Array.prototype%.
    let proto = proto.unwrap_or_else(|| agent.current_realm().intrinsics().array_prototype());
    let length_key = PropertyKey::from_str(agent, "length");
    let mut properties = PropertyStorage::with_capacity(length as usize + 1);
    // 6. Perform ! OrdinaryDefineOwnProperty(A, "length", PropertyDescriptor {
    //    [[Value]]: 𝔽(length), [[Writable]]: true, [[Enumerable]]: false,
    //    [[Configurable]]: false }).
    properties.set(
        length_key,
        PropertyEntry::data(length.into(), true, false, false),
    );
    // 3. Let A be MakeBasicObject(« [[Prototype]], [[Extensible]] »).
    // 4. Set A.[[Prototype]] to proto.
    // 5. Set A.[[DefineOwnProperty]] as specified in 10.4.2.1.
    // 7. Return A.
    Object::create(
        agent,
        ObjectHeapData {
            extensible: true,
            prototype: Some(proto),
            properties,
            kind: ObjectKind::Array,
        },
    )
}

/// Reads the current `"length"` of an Array and whether it is writable.
fn array_length(agent: &Agent, array: Object, length_key: PropertyKey) -> (u32, bool) {
    match agent[array].properties.get(&length_key) {
        Some(PropertyEntry {
            value:
                PropertyValue::Data {
                    value: Value::Number(length),
                    writable,
                },
            ..
        }) => (*length as u32, *writable),
        _ => unreachable!("Array without a length property"),
    }
}

fn write_array_length(
    agent: &mut Agent,
    array: Object,
    length_key: PropertyKey,
    length: u32,
    writable: bool,
) {
    agent[array].properties.set(
        length_key,
        PropertyEntry::data(length.into(), writable, false, false),
    );
}

/// ### [10.4.2.1 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-array-exotic-objects-defineownproperty-p-desc)
///
/// The \[\[DefineOwnProperty]] internal method of an Array exotic object A
/// takes arguments P (a property key) and Desc (a Property Descriptor) and
/// returns either a normal completion containing a Boolean or a throw
/// completion.
pub(crate) fn array_define_own_property(
    agent: &mut Agent,
    array: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    let length_key = PropertyKey::from_str(agent, "length");
    // 1. If P is "length", then
    if property_key == length_key {
        // a. Return ? ArraySetLength(A, Desc).
        return array_set_length(agent, array, descriptor);
    }
    // 2. Else if P is an array index, then
    let PropertyKey::Integer(index) = property_key else {
        // 3. Return ? OrdinaryDefineOwnProperty(A, P, Desc).
        return Ok(ordinary_define_own_property(
            agent,
            array,
            property_key,
            descriptor,
        ));
    };
    // a. Let lengthDesc be OrdinaryGetOwnProperty(A, "length").
    // b. Assert: IsDataDescriptor(lengthDesc) is true.
    // c. Assert: lengthDesc.[[Configurable]] is false.
    // d. Let length be lengthDesc.[[Value]].
    // e. Assert: length is a non-negative integral Number.
    let (length, length_writable) = array_length(agent, array, length_key);
    // f. Let index be ! ToUint32(P).
    // g. If index ≥ length and lengthDesc.[[Writable]] is false, return false.
    if index >= length && !length_writable {
        return Ok(false);
    }
    // h. Let succeeded be ! OrdinaryDefineOwnProperty(A, P, Desc).
    // i. If succeeded is false, return false.
    if !ordinary_define_own_property(agent, array, property_key, descriptor) {
        return Ok(false);
    }
    // j. If index ≥ length, then
    if index >= length {
        // i. Set lengthDesc.[[Value]] to index + 1𝔽.
        // ii. Set succeeded to ! OrdinaryDefineOwnProperty(A, "length", lengthDesc).
        // iii. Assert: succeeded is true.
        write_array_length(agent, array, length_key, index + 1, length_writable);
    }
    // k. Return true.
    Ok(true)
}

/// ### [10.4.2.4 ArraySetLength ( A, Desc )](https://tc39.es/ecma262/#sec-arraysetlength)
///
/// The abstract operation ArraySetLength takes arguments A (an Array) and
/// Desc (a Property Descriptor) and returns either a normal completion
/// containing a Boolean or a throw completion.
fn array_set_length(
    agent: &mut Agent,
    array: Object,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    let length_key = PropertyKey::from_str(agent, "length");
    // 1. If Desc does not have a [[Value]] field, then
    let Some(desc_value) = descriptor.value else {
        // a. Return ! OrdinaryDefineOwnProperty(A, "length", Desc).
        return Ok(ordinary_define_own_property(
            agent, array, length_key, descriptor,
        ));
    };
    // 2. Let newLenDesc be a copy of Desc.
    let mut new_len_desc = descriptor;
    // 3. Let newLen be ? ToUint32(Desc.[[Value]]).
    let new_len = to_uint32(agent, desc_value)?;
    // 4. Let numberLen be ? ToNumber(Desc.[[Value]]).
    let number_len = to_number(agent, desc_value)?;
    // 5. If SameValueZero(newLen, numberLen) is false, throw a RangeError
    //    exception.
    if f64::from(new_len) != number_len {
        return Err(agent.throw_exception(ExceptionType::RangeError, "Invalid array length"));
    }
    // 6. Set newLenDesc.[[Value]] to newLen.
    new_len_desc.value = Some(new_len.into());
    // 7. Let oldLenDesc be OrdinaryGetOwnProperty(A, "length").
    // 8. Assert: IsDataDescriptor(oldLenDesc) is true.
    // 9. Assert: oldLenDesc.[[Configurable]] is false.
    // 10. Let oldLen be oldLenDesc.[[Value]].
    let (old_len, old_len_writable) = array_length(agent, array, length_key);
    // 11. If newLen ≥ oldLen, then
    if new_len >= old_len {
        // a. Return ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
        return Ok(ordinary_define_own_property(
            agent,
            array,
            length_key,
            new_len_desc,
        ));
    }
    // 12. If oldLenDesc.[[Writable]] is false, return false.
    if !old_len_writable {
        return Ok(false);
    }
    // 13. If newLenDesc does not have a [[Writable]] field or
    //     newLenDesc.[[Writable]] is true, then
    //     a. Let newWritable be true.
    // 14. Else,
    //     a. NOTE: Setting the [[Writable]] attribute to false is deferred in
    //        case any elements cannot be deleted.
    //     b. Let newWritable be false.
    //     c. Set newLenDesc.[[Writable]] to true.
    let new_writable = new_len_desc.writable != Some(false);
    new_len_desc.writable = Some(true);
    // 15. Let succeeded be ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
    // 16. If succeeded is false, return false.
    if !ordinary_define_own_property(agent, array, length_key, new_len_desc) {
        return Ok(false);
    }
    // 17. For each own property key P of A such that P is an array index and
    //     ! ToUint32(P) ≥ newLen, in descending numeric index order, do
    let mut doomed = agent[array]
        .properties
        .keys()
        .iter()
        .filter_map(|key| match key {
            PropertyKey::Integer(index) if *index >= new_len => Some(*index),
            _ => None,
        })
        .collect::<Vec<_>>();
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for index in doomed {
        // a. Let deleteSucceeded be ! A.[[Delete]](P).
        let delete_succeeded = array.internal_delete(agent, PropertyKey::Integer(index))?;
        // b. If deleteSucceeded is false, then
        if !delete_succeeded {
            // i. Set newLenDesc.[[Value]] to ! ToUint32(P) + 1𝔽.
            // ii. If newWritable is false, set newLenDesc.[[Writable]] to false.
            // iii. Perform ! OrdinaryDefineOwnProperty(A, "length", newLenDesc).
            write_array_length(agent, array, length_key, index + 1, new_writable);
            // iv. Return false.
            return Ok(false);
        }
    }
    // 18. If newWritable is false, then
    if !new_writable {
        // a. Set succeeded to ! OrdinaryDefineOwnProperty(A, "length",
        //    PropertyDescriptor { [[Writable]]: false }).
        // b. Assert: succeeded is true.
        write_array_length(agent, array, length_key, new_len, false);
    }
    // 19. Return true.
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::{create_array_from_list, get, length_of_array_like, set},
        execution::Options,
    };

    fn with_realm<R>(f: impl FnOnce(&mut Agent) -> R) -> R {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, f)
    }

    #[test]
    fn defining_an_index_grows_length() {
        with_realm(|agent| {
            let array = array_create(agent, 0, None);
            set(agent, array, PropertyKey::Integer(4), Value::Null, true).unwrap();
            assert_eq!(length_of_array_like(agent, array).unwrap(), 5);
        });
    }

    #[test]
    fn shrinking_length_deletes_elements() {
        with_realm(|agent| {
            let values = [Value::Null, Value::Boolean(true), Value::Number(2.0)];
            let array = create_array_from_list(agent, &values);
            let length = PropertyKey::from_str(agent, "length");
            set(agent, array, length, Value::Number(1.0), true).unwrap();
            assert_eq!(length_of_array_like(agent, array).unwrap(), 1);
            assert_eq!(
                get(agent, array, PropertyKey::Integer(2)).unwrap(),
                Value::Undefined
            );
            assert_eq!(get(agent, array, PropertyKey::Integer(0)).unwrap(), Value::Null);
        });
    }

    #[test]
    fn invalid_length_throws_range_error() {
        with_realm(|agent| {
            let array = array_create(agent, 0, None);
            let length = PropertyKey::from_str(agent, "length");
            let error = set(agent, array, length, Value::Number(1.5), true).unwrap_err();
            assert_eq!(error.to_string(agent), "RangeError: Invalid array length");
        });
    }
}
