// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        create_data_property_or_throw, is_array, same_value_zero, set, to_uint32,
    },
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor, array::array_create,
        ordinary::get_prototype_from_constructor,
    },
    execution::{
        Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm,
        agent::ExceptionType,
    },
    types::{Function, Object, PropertyKey, Value},
};

pub(crate) struct ArrayConstructor;

impl Builtin for ArrayConstructor {
    const NAME: &'static str = "Array";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(ArrayConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for ArrayConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Array;
}

struct ArrayIsArray;

impl Builtin for ArrayIsArray {
    const NAME: &'static str = "isArray";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ArrayConstructor::is_array);
}

impl ArrayConstructor {
    /// ### [23.1.1.1 Array ( ...values )](https://tc39.es/ecma262/#sec-array)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is undefined, let newTarget be the active function
        //    object; else let newTarget be NewTarget.
        let new_target = match new_target {
            Some(new_target) => Function(new_target),
            None => match agent.running_execution_context().function {
                Some(active_function) => active_function,
                None => agent.current_realm().intrinsics().array(),
            },
        };
        // 2. Let proto be ? GetPrototypeFromConstructor(newTarget,
        //    "%Array.prototype%").
        let proto = get_prototype_from_constructor(agent, new_target, ProtoIntrinsics::Array)?;
        // 3. Let numberOfArgs be the number of elements in values.
        let number_of_args = arguments.len();
        // 4. If numberOfArgs = 0, then
        if number_of_args == 0 {
            // a. Return ! ArrayCreate(0, proto).
            return Ok(array_create(agent, 0, Some(proto)).into_value());
        }
        // 5. Else if numberOfArgs = 1, then
        if number_of_args == 1 {
            // a. Let len be values[0].
            let len = arguments.get(0);
            // b. Let array be ! ArrayCreate(0, proto).
            let array = array_create(agent, 0, Some(proto));
            // c. If len is not a Number, then
            let int_len = if !len.is_number() {
                // i. Perform ! CreateDataPropertyOrThrow(array, "0", len).
                create_data_property_or_throw(agent, array, PropertyKey::from_index(0), len)?;
                // ii. Let intLen be 1𝔽.
                1
            } else {
                // d. Else,
                // i. Let intLen be ! ToUint32(len).
                let int_len = to_uint32(agent, len)?;
                // ii. If SameValueZero(intLen, len) is false, throw a
                //     RangeError exception.
                if !same_value_zero(int_len.into(), len) {
                    return Err(
                        agent.throw_exception(ExceptionType::RangeError, "Invalid array length")
                    );
                }
                int_len
            };
            // e. Perform ! Set(array, "length", intLen, true).
            let length_key = PropertyKey::from_str(agent, "length");
            set(agent, array, length_key, int_len.into(), true)?;
            // f. Return array.
            return Ok(array.into_value());
        }
        // 6. Else,
        // a. Assert: numberOfArgs ≥ 2.
        // b. Let array be ? ArrayCreate(numberOfArgs, proto).
        let array = array_create(agent, number_of_args as u32, Some(proto));
        // c. Let k be 0.
        // d. Repeat, while k < numberOfArgs,
        for (k, item_k) in arguments.iter().enumerate() {
            // i. Let Pk be ! ToString(𝔽(k)).
            // ii. Let itemK be values[k].
            // iii. Perform ! CreateDataPropertyOrThrow(array, Pk, itemK).
            // iv. Set k to k + 1.
            create_data_property_or_throw(
                agent,
                array,
                PropertyKey::from_index(k as u32),
                *item_k,
            )?;
        }
        // e. Assert: The mathematical value of array's "length" property is
        //    numberOfArgs.
        // f. Return array.
        Ok(array.into_value())
    }

    /// ### [23.1.2.2 Array.isArray ( arg )](https://tc39.es/ecma262/#sec-array.isarray)
    fn is_array(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Return ? IsArray(arg).
        is_array(agent, arguments.get(0)).map(Value::Boolean)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let array_prototype = agent[realm].intrinsics().array_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<ArrayConstructor>(agent, realm)
            .with_property_capacity(2)
            .with_builtin_function_property::<ArrayIsArray>()
            .with_prototype_property(array_prototype)
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, construct, get, is_array, length_of_array_like},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn array_constructor_handles_lengths_and_items() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let array = agent.current_realm().intrinsics().array();
            let sized = construct(
                agent,
                array,
                Some(ArgumentsList::new(&[Value::Number(3.0)])),
                None,
            )
            .unwrap();
            assert!(is_array(agent, sized.into_value()).unwrap());
            assert_eq!(length_of_array_like(agent, sized).unwrap(), 3);

            let items = call_function(
                agent,
                array,
                Value::Undefined,
                Some(ArgumentsList::new(&[Value::Number(1.0), Value::Boolean(true)])),
            )
            .unwrap();
            let Value::Object(items) = items else {
                panic!("Array() did not return an object");
            };
            assert_eq!(length_of_array_like(agent, items).unwrap(), 2);
            assert_eq!(
                get(agent, items, PropertyKey::from_index(1)).unwrap(),
                Value::Boolean(true)
            );

            let error = construct(
                agent,
                array,
                Some(ArgumentsList::new(&[Value::Number(1.5)])),
                None,
            )
            .unwrap_err();
            assert_eq!(error.to_string(agent), "RangeError: Invalid array length");
        });
    }
}
