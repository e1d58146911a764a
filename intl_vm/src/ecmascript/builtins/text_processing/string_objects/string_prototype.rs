// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, primitive_objects::PrimitiveObjectData},
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{ObjectKind, String, Value},
};

pub(crate) struct StringPrototype;

struct StringPrototypeToString;

impl Builtin for StringPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_string);
}

struct StringPrototypeValueOf;

impl Builtin for StringPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::value_of);
}

impl StringPrototype {
    /// ### [22.1.3.29 String.prototype.toString ( )](https://tc39.es/ecma262/#sec-string.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(String::into_value)
    }

    /// ### [22.1.3.35 String.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-string.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(String::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.string_prototype();
        let object_prototype = intrinsics.object_prototype();
        let string_constructor = intrinsics.string();
        let empty = String::from_str(agent, "");

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(4)
            .with_property(|builder| {
                builder
                    .with_key_from_str("length")
                    .with_enumerable(false)
                    .with_configurable(false)
                    .with_value_readonly(Value::Number(0.0))
                    .build()
            })
            .with_constructor_property(string_constructor)
            .with_builtin_function_property::<StringPrototypeToString>()
            .with_builtin_function_property::<StringPrototypeValueOf>()
            .build();
        // The String prototype object is a String exotic object whose
        // [[StringData]] is the empty String.
        agent[this].kind = ObjectKind::PrimitiveObject(PrimitiveObjectData::String(empty));
    }
}

/// ### [22.1.3.35.1 ThisStringValue ( value )](https://tc39.es/ecma262/#sec-thisstringvalue)
fn this_string_value(agent: &mut Agent, value: Value) -> JsResult<String> {
    match value {
        // 1. If value is a String, return value.
        Value::String(s) => Ok(s),
        // 2. If value is an Object and value has a [[StringData]] internal
        //    slot, then
        //    a. Let s be value.[[StringData]].
        //    b. Assert: s is a String.
        //    c. Return s.
        Value::Object(object) => match object.kind(agent) {
            ObjectKind::PrimitiveObject(PrimitiveObjectData::String(s)) => Ok(*s),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a String")),
        },
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a String")),
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call, get_v, to_object},
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn value_of_unwraps_string_objects() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let text = Value::from_str(agent, "abc");
            let wrapper = to_object(agent, text).unwrap().into_value();
            let key = PropertyKey::from_str(agent, "valueOf");
            let value_of = get_v(agent, wrapper, key).unwrap();
            assert_eq!(call(agent, value_of, wrapper, None).unwrap(), text);
            let error = call(agent, value_of, Value::Number(1.0), None).unwrap_err();
            assert_eq!(error.to_string(agent), "TypeError: Not a String");
        });
    }
}
