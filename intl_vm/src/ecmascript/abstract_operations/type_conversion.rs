// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.

use super::{
    operations_on_objects::{call_function, get, get_method},
    testing_and_comparison::is_callable,
};
use crate::{
    ecmascript::{
        builtins::{
            ArgumentsList,
            primitive_objects::{PrimitiveObjectData, create_primitive_object},
        },
        execution::{Agent, JsResult, agent::ExceptionType},
        types::{Number, Object, PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Ok(input) = Object::try_from(input) else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(
        agent,
        input.into_value(),
        WellKnownSymbolIndexes::ToPrimitive.into(),
    )?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        let hint = match preferred_type {
            // i. If preferredType is not present, then
            // 1. Let hint be "default".
            None => "default",
            // ii. Else if preferredType is STRING, then
            // 1. Let hint be "string".
            Some(PreferredType::String) => "string",
            // iii. Else,
            // 1. Assert: preferredType is NUMBER.
            // 2. Let hint be "number".
            Some(PreferredType::Number) => "number",
        };
        let hint = Value::from_str(agent, hint);
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(
            agent,
            exotic_to_prim,
            input.into_value(),
            Some(ArgumentsList::new(&[hint])),
        )?;
        // v. If result is not an Object, return result.
        if !result.is_object() {
            return Ok(result);
        }
        // vi. Throw a TypeError exception.
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert object to primitive value",
        ));
    }
    // c. If preferredType is not present, let preferredType be NUMBER.
    // d. Return ? OrdinaryToPrimitive(input, preferredType).
    ordinary_to_primitive(agent, input, preferred_type.unwrap_or(PreferredType::Number))
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub fn ordinary_to_primitive(agent: &mut Agent, o: Object, hint: PreferredType) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        // 1. If hint is STRING, then
        // a. Let methodNames be « "toString", "valueOf" ».
        PreferredType::String => [to_string_key, value_of_key],
        // 2. Else,
        // a. Let methodNames be « "valueOf", "toString" ».
        PreferredType::Number => [value_of_key, to_string_key],
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if let Some(method) = is_callable(agent, method) {
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, o.into_value(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(agent: &Agent, argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(boolean) => boolean,
        // 2. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or the
        //    empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Number(number) => !(number == 0.0 || number.is_nan()),
        Value::String(string) => !string.is_empty(agent),
        // 4. Return true.
        Value::Symbol(_) | Value::Object(_) => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(number) => Ok(number),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError
        //    exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(f64::NAN),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(0.0),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(1.0),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(string) => Ok(string
            .as_str(agent)
            .map_or(f64::NAN, |str| Number::from_str_literal(str).into_f64())),
        // 7. Assert: argument is an Object.
        Value::Object(_) => {
            // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
            // 9. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 10. Return ? ToNumber(primValue).
            to_number(agent, prim_value)
        }
    }
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
pub fn to_integer_or_infinity(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
    if number.is_nan() || number == 0.0 {
        return Ok(0.0);
    }
    // 3. If number is +∞𝔽, return +∞.
    // 4. If number is -∞𝔽, return -∞.
    // 5. Return truncate(ℝ(number)).
    Ok(number.trunc())
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(agent: &mut Agent, argument: Value) -> JsResult<u32> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    // 2. If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
    if !number.is_finite() || number == 0.0 {
        return Ok(0);
    }
    // 3. Let int be truncate(ℝ(number)).
    // 4. Let int32bit be int modulo 2**32.
    // 5. Return 𝔽(int32bit).
    Ok(number.trunc().rem_euclid(4294967296.0) as u32)
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(string) => Ok(string),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a string",
        )),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(String::from_str(agent, "undefined")),
        // 4. If argument is null, return "null".
        Value::Null => Ok(String::from_str(agent, "null")),
        // 5. If argument is true, return "true".
        Value::Boolean(true) => Ok(String::from_str(agent, "true")),
        // 6. If argument is false, return "false".
        Value::Boolean(false) => Ok(String::from_str(agent, "false")),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(number) => Ok(Number(number).to_string_radix_10(agent)),
        // 9. Assert: argument is an Object.
        Value::Object(_) => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 12. Return ? ToString(primValue).
            to_string(agent, prim_value)
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// The abstract operation ToObject takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an Object
/// or a throw completion. It converts argument to a value of type Object
/// according to [Table 13](https://tc39.es/ecma262/#table-toobject-conversions):
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    let data = match argument {
        Value::Undefined | Value::Null => {
            // Throw a TypeError exception.
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            ));
        }
        // Return a new Boolean object whose [[BooleanData]] internal slot is
        // set to argument.
        Value::Boolean(boolean) => PrimitiveObjectData::Boolean(boolean),
        // Return a new Number object whose [[NumberData]] internal slot is
        // set to argument.
        Value::Number(number) => PrimitiveObjectData::Number(number),
        // Return a new String object whose [[StringData]] internal slot is
        // set to argument.
        Value::String(string) => PrimitiveObjectData::String(string),
        // Return a new Symbol object whose [[SymbolData]] internal slot is
        // set to argument.
        Value::Symbol(symbol) => PrimitiveObjectData::Symbol(symbol),
        // Return argument.
        Value::Object(object) => return Ok(object),
    };
    Ok(create_primitive_object(agent, data, None))
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
pub fn to_property_key(agent: &mut Agent, argument: Value) -> JsResult<PropertyKey> {
    // 1. Let key be ? ToPrimitive(argument, STRING).
    let key = to_primitive(agent, argument, Some(PreferredType::String))?;
    // 2. If key is a Symbol, then
    if let Value::Symbol(symbol) = key {
        // a. Return key.
        return Ok(PropertyKey::Symbol(symbol));
    }
    // 3. Return ! ToString(key).
    let key = to_string(agent, key)?;
    Ok(PropertyKey::from_string(agent, key))
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
pub fn to_length(agent: &mut Agent, argument: Value) -> JsResult<u64> {
    // 1. Let len be ? ToIntegerOrInfinity(argument).
    let len = to_integer_or_infinity(agent, argument)?;
    // 2. If len ≤ 0, return +0𝔽.
    if len <= 0.0 {
        return Ok(0);
    }
    // 3. Return 𝔽(min(len, 2**53 - 1)).
    Ok(len.min(9007199254740991.0) as u64)
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
    fn to_number_of_strings() {
        with_realm(|agent| {
            let cases = [
                ("", 0.0),
                ("  42  ", 42.0),
                ("0x1F", 31.0),
                ("0b101", 5.0),
                ("1e3", 1000.0),
                ("-Infinity", f64::NEG_INFINITY),
            ];
            for (input, expected) in cases {
                let value = Value::from_str(agent, input);
                assert_eq!(to_number(agent, value).unwrap(), expected, "{input:?}");
            }
            for input in ["abc", "inf", "1_000", "0x"] {
                let value = Value::from_str(agent, input);
                assert!(to_number(agent, value).unwrap().is_nan(), "{input:?}");
            }
        });
    }

    #[test]
    fn to_string_of_numbers() {
        with_realm(|agent| {
            let cases = [
                (7.0, "7"),
                (-0.0, "0"),
                (0.5, "0.5"),
                (1e21, "1e+21"),
                (f64::NAN, "NaN"),
                (f64::NEG_INFINITY, "-Infinity"),
            ];
            for (input, expected) in cases {
                let string = to_string(agent, input.into()).unwrap();
                assert_eq!(string.as_str(agent), Some(expected));
            }
        });
    }

    #[test]
    fn to_object_wraps_primitives() {
        with_realm(|agent| {
            let symbol = crate::ecmascript::types::Symbol::new(agent, None);
            let samples = [
                Value::Boolean(true),
                Value::from_str(agent, "test"),
                Value::Number(7.0),
                Value::Symbol(symbol),
            ];
            for sample in samples {
                let object = to_object(agent, sample).unwrap();
                let prototype = agent[object].prototype;
                assert!(prototype.is_some());
                assert_ne!(
                    prototype,
                    Some(agent.current_realm().intrinsics().object_prototype())
                );
            }
            assert!(to_object(agent, Value::Undefined).is_err());
            assert!(to_object(agent, Value::Null).is_err());
        });
    }

    #[test]
    fn to_string_of_symbol_throws() {
        with_realm(|agent| {
            let symbol = crate::ecmascript::types::Symbol::new(agent, None);
            let error = to_string(agent, symbol.into_value()).unwrap_err();
            assert_eq!(
                error.to_string(agent),
                "TypeError: Cannot convert a Symbol value to a string"
            );
        });
    }
}
