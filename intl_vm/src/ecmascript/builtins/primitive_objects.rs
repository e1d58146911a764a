// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean, Number, String and Symbol objects: the wrappers that ToObject
//! creates for primitive values.

use super::ordinary::{
    is_compatible_property_descriptor, ordinary_define_own_property, ordinary_own_property_keys,
};
use crate::ecmascript::{
    execution::Agent,
    types::{
        Object, ObjectHeapData, ObjectKind, PropertyDescriptor, PropertyEntry, PropertyKey,
        String, Symbol, Value,
    },
};

/// The \[\[BooleanData]], \[\[NumberData]], \[\[StringData]] or
/// \[\[SymbolData]] internal slot of a wrapper object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PrimitiveObjectData {
    Boolean(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
}

impl PrimitiveObjectData {
    pub(crate) fn into_value(self) -> Value {
        match self {
            PrimitiveObjectData::Boolean(data) => Value::Boolean(data),
            PrimitiveObjectData::Number(data) => Value::Number(data),
            PrimitiveObjectData::String(data) => Value::String(data),
            PrimitiveObjectData::Symbol(data) => Value::Symbol(data),
        }
    }
}

/// Creates a wrapper object. The \[\[Prototype]] defaults to the current
/// realm's prototype for the wrapped type.
pub(crate) fn create_primitive_object(
    agent: &mut Agent,
    data: PrimitiveObjectData,
    prototype: Option<Object>,
) -> Object {
    let prototype = prototype.unwrap_or_else(|| {
        let intrinsics = agent.current_realm().intrinsics();
        match data {
            PrimitiveObjectData::Boolean(_) => intrinsics.boolean_prototype(),
            PrimitiveObjectData::Number(_) => intrinsics.number_prototype(),
            PrimitiveObjectData::String(_) => intrinsics.string_prototype(),
            PrimitiveObjectData::Symbol(_) => intrinsics.symbol_prototype(),
        }
    });
    let object = Object::create(
        agent,
        ObjectHeapData::new(Some(prototype), ObjectKind::PrimitiveObject(data)),
    );
    if let PrimitiveObjectData::String(string) = data {
        // ### [10.4.3.4 StringCreate ( value, prototype )](https://tc39.es/ecma262/#sec-stringcreate)
        // 8. Let length be the length of value.
        let length = string.utf16_len(agent) as u32;
        // 9. Perform ! DefinePropertyOrThrow(S, "length", PropertyDescriptor {
        //    [[Value]]: 𝔽(length), [[Writable]]: false, [[Enumerable]]: false,
        //    [[Configurable]]: false }).
        let key = PropertyKey::from_str(agent, "length");
        agent[object]
            .properties
            .set(key, PropertyEntry::data(length.into(), false, false, false));
    }
    object
}

impl Object {
    /// Returns the primitive wrapped by a Boolean, Number, String or Symbol
    /// object.
    pub fn primitive_value(self, agent: &Agent) -> Option<Value> {
        match self.kind(agent) {
            ObjectKind::PrimitiveObject(data) => Some(data.into_value()),
            _ => None,
        }
    }
}

/// ### [10.4.3.5 StringGetOwnProperty ( S, P )](https://tc39.es/ecma262/#sec-stringgetownproperty)
fn string_get_own_property(
    agent: &mut Agent,
    string: String,
    property_key: PropertyKey,
) -> Option<PropertyEntry> {
    // 1. If P is not a String, return undefined.
    // 2. Let index be CanonicalNumericIndexString(P).
    // 3. If index is undefined, return undefined.
    // 4. If IsIntegralNumber(index) is false, return undefined.
    // 5. If index is -0𝔽 or index < -0𝔽, return undefined.
    let PropertyKey::Integer(index) = property_key else {
        return None;
    };
    // 6. Let str be S.[[StringData]].
    // 7. Assert: str is a String.
    // 8. Let len be the length of str.
    // 9. If ℝ(index) ≥ len, return undefined.
    // 10. Let resultStr be the substring of str from ℝ(index) to ℝ(index) + 1.
    let code_unit = agent[string].utf16_code_unit(index as usize)?;
    let result_str = String::from_code_unit(agent, code_unit);
    // 11. Return the PropertyDescriptor { [[Value]]: resultStr, [[Writable]]:
    //     false, [[Enumerable]]: true, [[Configurable]]: false }.
    Some(PropertyEntry::data(
        result_str.into_value(),
        false,
        true,
        false,
    ))
}

/// ### [10.4.3.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-string-exotic-objects-getownproperty-p)
///
/// Steps 3 onwards; the ordinary lookup is done by the caller.
pub(crate) fn string_exotic_get_own_property(
    agent: &mut Agent,
    string: String,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 3. Return StringGetOwnProperty(S, P).
    string_get_own_property(agent, string, property_key).map(PropertyEntry::to_descriptor)
}

/// ### [10.4.3.2 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-string-exotic-objects-defineownproperty-p-desc)
pub(crate) fn string_exotic_define_own_property(
    agent: &mut Agent,
    object: Object,
    string: String,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    // 1. Let stringDesc be StringGetOwnProperty(S, P).
    // 2. If stringDesc is not undefined, then
    if let Some(string_desc) = string_get_own_property(agent, string, property_key) {
        // a. Let extensible be S.[[Extensible]].
        let extensible = agent[object].extensible;
        // b. Return IsCompatiblePropertyDescriptor(extensible, Desc, stringDesc).
        return is_compatible_property_descriptor(agent, extensible, descriptor, Some(string_desc));
    }
    // 3. Return ! OrdinaryDefineOwnProperty(S, P, Desc).
    ordinary_define_own_property(agent, object, property_key, descriptor)
}

/// ### [10.4.3.3 \[\[OwnPropertyKeys\]\] ( )](https://tc39.es/ecma262/#sec-string-exotic-objects-ownpropertykeys)
pub(crate) fn string_exotic_own_property_keys(
    agent: &Agent,
    object: Object,
    string: String,
) -> Vec<PropertyKey> {
    // 1. Let keys be a new empty List.
    // 2. Let str be O.[[StringData]].
    // 3. Assert: str is a String.
    // 4. Let len be the length of str.
    let len = string.utf16_len(agent) as u32;
    // 5. For each integer i such that 0 ≤ i < len, in ascending order, do
    // a. Append ! ToString(𝔽(i)) to keys.
    let mut keys = (0..len).map(PropertyKey::Integer).collect::<Vec<_>>();
    // 6. For each own property key P of O such that P is an array index and
    //    ! ToIntegerOrInfinity(P) ≥ len, in ascending numeric index order, do
    // 7. For each own property key P of O such that P is a String and P is
    //    not an array index, in ascending chronological order of property
    //    creation, do
    // 8. For each own property key P of O such that P is a Symbol, in
    //    ascending chronological order of property creation, do
    // NOTE: Own array index properties below len cannot exist, as defining
    // them is rejected or forwarded to the string data above.
    keys.extend(ordinary_own_property_keys(agent, object));
    // 9. Return keys.
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::{create_data_property, get, to_object},
        execution::Options,
        types::InternalMethods,
    };

    #[test]
    fn string_objects_expose_code_units() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let string = Value::from_str(agent, "test");
            let object = to_object(agent, string).unwrap();
            let first = get(agent, object, PropertyKey::Integer(0)).unwrap();
            assert_eq!(first, Value::from_str(agent, "t"));
            assert_eq!(
                get(agent, object, PropertyKey::Integer(4)).unwrap(),
                Value::Undefined
            );
            let inside = create_data_property(agent, object, PropertyKey::Integer(1), Value::Null);
            assert!(!inside.unwrap());
            let past_end = create_data_property(agent, object, PropertyKey::Integer(9), Value::Null);
            assert!(past_end.unwrap());
            let keys = object.internal_own_property_keys(agent).unwrap();
            let length = PropertyKey::from_str(agent, "length");
            assert_eq!(
                keys,
                vec![
                    PropertyKey::Integer(0),
                    PropertyKey::Integer(1),
                    PropertyKey::Integer(2),
                    PropertyKey::Integer(3),
                    PropertyKey::Integer(9),
                    length,
                ]
            );
        });
    }

    #[test]
    fn wrappers_keep_their_primitive() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let object = to_object(agent, Value::Number(7.0)).unwrap();
            assert_eq!(object.primitive_value(agent), Some(Value::Number(7.0)));
            let object = to_object(agent, Value::Boolean(true)).unwrap();
            assert_eq!(object.primitive_value(agent), Some(Value::Boolean(true)));
        });
    }
}
