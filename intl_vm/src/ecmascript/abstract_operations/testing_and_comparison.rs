// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::{
    builtins::BuiltinFunctionHeapData,
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{Function, ObjectKind, Value},
};

/// ### [7.2.1 RequireObjectCoercible ( argument )](https://tc39.es/ecma262/#sec-requireobjectcoercible)
///
/// The abstract operation RequireObjectCoercible takes argument argument (an
/// ECMAScript language value) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It throws
/// an error if argument is a value that cannot be converted to an Object
/// using ToObject.
pub fn require_object_coercible(agent: &mut Agent, argument: Value) -> JsResult<Value> {
    if argument.is_undefined() || argument.is_null() {
        Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Argument cannot be converted into an object",
        ))
    } else {
        Ok(argument)
    }
}

/// ### [7.2.2 IsArray ( argument )](https://tc39.es/ecma262/#sec-isarray)
///
/// The abstract operation IsArray takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a
/// Boolean or a throw completion.
pub fn is_array(agent: &Agent, argument: Value) -> JsResult<bool> {
    // 1. If argument is not an Object, return false.
    // 2. If argument is an Array exotic object, return true.
    // 3. If argument is a Proxy exotic object, then ...
    // 4. Return false.
    Ok(matches!(argument, Value::Object(object) if object.is_array(agent)))
}

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call]] internal method.
///
/// Returns the function when it is callable.
pub fn is_callable(agent: &Agent, argument: Value) -> Option<Function> {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    match argument {
        Value::Object(object) => object.as_function(agent),
        _ => None,
    }
}

/// ### [7.2.4 IsConstructor ( argument )](https://tc39.es/ecma262/#sec-isconstructor)
///
/// The abstract operation IsConstructor takes argument argument (an
/// ECMAScript language value) and returns a Boolean. It determines if
/// argument is a function object with a \[\[Construct]] internal method.
pub fn is_constructor(agent: &Agent, argument: Value) -> Option<Function> {
    // 1. If argument is not an Object, return false.
    let Value::Object(object) = argument else {
        return None;
    };
    // 2. If argument has a [[Construct]] internal method, return true.
    match object.kind(agent) {
        ObjectKind::BuiltinFunction(BuiltinFunctionHeapData { behaviour, .. })
            if behaviour.is_constructor() =>
        {
            Some(Function(object))
        }
        // 3. Return false.
        _ => None,
    }
}

/// ### [7.2.9 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// The abstract operation SameValue takes arguments x (an ECMAScript language
/// value) and y (an ECMAScript language value) and returns a Boolean. It
/// determines whether or not the two arguments are the same value.
///
/// Strings are interned, so comparing handles compares contents.
pub fn same_value(x: Value, y: Value) -> bool {
    match (x, y) {
        // 2. If x is a Number, then
        // a. Return Number::sameValue(x, y).
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x.to_bits() == y.to_bits()
            }
        }
        // 1. If Type(x) is not Type(y), return false.
        // 3. Return SameValueNonNumber(x, y).
        _ => x == y,
    }
}

/// ### [7.2.10 SameValueZero ( x, y )](https://tc39.es/ecma262/#sec-samevaluezero)
pub fn same_value_zero(x: Value, y: Value) -> bool {
    match (x, y) {
        (Value::Number(x), Value::Number(y)) => (x.is_nan() && y.is_nan()) || x == y,
        _ => x == y,
    }
}

#[cfg(test)]
mod tests {
    use super::{same_value, same_value_zero};
    use crate::ecmascript::types::Value;

    #[test]
    fn same_value_distinguishes_zeroes_and_equates_nans() {
        assert!(same_value(Value::Number(f64::NAN), Value::Number(f64::NAN)));
        assert!(!same_value(Value::Number(0.0), Value::Number(-0.0)));
        assert!(same_value_zero(Value::Number(0.0), Value::Number(-0.0)));
        assert!(same_value_zero(Value::Number(f64::NAN), Value::Number(f64::NAN)));
        assert!(!same_value(Value::Number(1.0), Value::Boolean(true)));
        assert!(same_value(Value::Undefined, Value::Undefined));
        assert!(!same_value(Value::Undefined, Value::Null));
    }
}
