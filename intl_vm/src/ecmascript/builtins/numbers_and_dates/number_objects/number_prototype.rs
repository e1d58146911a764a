// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::to_integer_or_infinity,
    builders::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, primitive_objects::PrimitiveObjectData},
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{Number, ObjectKind, Value},
};

pub(crate) struct NumberPrototype;

struct NumberPrototypeToString;

impl Builtin for NumberPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_string);
}

struct NumberPrototypeValueOf;

impl Builtin for NumberPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::value_of);
}

impl NumberPrototype {
    /// ### [21.1.3.6 Number.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-number.prototype.tostring)
    fn to_string(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let x be ? ThisNumberValue(this value).
        let x = this_number_value(agent, this_value)?;
        let radix = arguments.get(0);
        // 2. If radix is undefined, let radixMV be 10.
        let radix_mv = if radix.is_undefined() {
            10.0
        } else {
            // 3. Else, let radixMV be ? ToIntegerOrInfinity(radix).
            to_integer_or_infinity(agent, radix)?
        };
        // 4. If radixMV is not in the inclusive interval from 2 to 36, throw a
        //    RangeError exception.
        if !(2.0..=36.0).contains(&radix_mv) {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "radix must be an integer between 2 and 36",
            ));
        }
        // 5. Return Number::toString(x, radixMV).
        Ok(Number(x).to_string_radix(agent, radix_mv as u32).into_value())
    }

    /// ### [21.1.3.7 Number.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-number.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisNumberValue(this value).
        this_number_value(agent, this_value).map(Value::Number)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.number_prototype();
        let object_prototype = intrinsics.object_prototype();
        let number_constructor = intrinsics.number();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(3)
            .with_constructor_property(number_constructor)
            .with_builtin_function_property::<NumberPrototypeToString>()
            .with_builtin_function_property::<NumberPrototypeValueOf>()
            .build();
        // The Number prototype object has a [[NumberData]] internal slot with
        // the value +0𝔽.
        agent[this].kind = ObjectKind::PrimitiveObject(PrimitiveObjectData::Number(0.0));
    }
}

/// ### [21.1.3.7.1 ThisNumberValue ( value )](https://tc39.es/ecma262/#sec-thisnumbervalue)
fn this_number_value(agent: &mut Agent, value: Value) -> JsResult<f64> {
    match value {
        // 1. If value is a Number, return value.
        Value::Number(n) => Ok(n),
        // 2. If value is an Object and value has a [[NumberData]] internal
        //    slot, then
        //    a. Let n be value.[[NumberData]].
        //    b. Assert: n is a Number.
        //    c. Return n.
        Value::Object(object) => match object.kind(agent) {
            ObjectKind::PrimitiveObject(PrimitiveObjectData::Number(n)) => Ok(*n),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Number")),
        },
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Number")),
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call, get_v},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    fn number_to_string(agent: &mut Agent, this: Value, radix: Value) -> Result<String, String> {
        let key = PropertyKey::from_str(agent, "toString");
        let method = get_v(agent, this, key).unwrap();
        match call(agent, method, this, Some(ArgumentsList::new(&[radix]))) {
            Ok(Value::String(string)) => Ok(string.to_string_lossy(agent).into_owned()),
            Ok(other) => panic!("toString returned {other:?}"),
            Err(error) => Err(error.to_string(agent)),
        }
    }

    #[test]
    fn to_string_honours_radix() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            assert_eq!(
                number_to_string(agent, Value::Number(255.0), Value::Undefined).as_deref(),
                Ok("255")
            );
            assert_eq!(
                number_to_string(agent, Value::Number(255.0), Value::Number(16.0)).as_deref(),
                Ok("ff")
            );
            let error =
                number_to_string(agent, Value::Number(1.0), Value::Number(37.0)).unwrap_err();
            assert!(error.starts_with("RangeError"), "{error}");
        });
    }

    #[test]
    fn prototype_wraps_zero() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let prototype = agent.current_realm().intrinsics().number_prototype();
            assert_eq!(prototype.primitive_value(agent), Some(Value::Number(0.0)));
        });
    }
}
