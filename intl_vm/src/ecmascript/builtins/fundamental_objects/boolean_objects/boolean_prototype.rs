// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, primitive_objects::PrimitiveObjectData},
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{ObjectKind, Value},
};

pub(crate) struct BooleanPrototype;

struct BooleanPrototypeToString;

impl Builtin for BooleanPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::to_string);
}

struct BooleanPrototypeValueOf;

impl Builtin for BooleanPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::value_of);
}

impl BooleanPrototype {
    /// ### [20.3.3.2 Boolean.prototype.toString ( )](https://tc39.es/ecma262/#sec-boolean.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let b be ? ThisBooleanValue(this value).
        let b = this_boolean_value(agent, this_value)?;
        // 2. If b is true, return "true"; else return "false".
        Ok(Value::from_str(agent, if b { "true" } else { "false" }))
    }

    /// ### [20.3.3.3 Boolean.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-boolean.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBooleanValue(this value).
        this_boolean_value(agent, this_value).map(Value::Boolean)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.boolean_prototype();
        let object_prototype = intrinsics.object_prototype();
        let boolean_constructor = intrinsics.boolean();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(3)
            .with_constructor_property(boolean_constructor)
            .with_builtin_function_property::<BooleanPrototypeToString>()
            .with_builtin_function_property::<BooleanPrototypeValueOf>()
            .build();
        // The Boolean prototype object is itself a Boolean object; it has a
        // [[BooleanData]] internal slot with the value false.
        agent[this].kind = ObjectKind::PrimitiveObject(PrimitiveObjectData::Boolean(false));
    }
}

/// ### [20.3.3.3.1 ThisBooleanValue ( value )](https://tc39.es/ecma262/#sec-thisbooleanvalue)
fn this_boolean_value(agent: &mut Agent, value: Value) -> JsResult<bool> {
    match value {
        // 1. If value is a Boolean, return value.
        Value::Boolean(b) => Ok(b),
        // 2. If value is an Object and value has a [[BooleanData]] internal
        //    slot, then
        Value::Object(object)
            if matches!(
                object.kind(agent),
                ObjectKind::PrimitiveObject(PrimitiveObjectData::Boolean(_))
            ) =>
        {
            // a. Let b be value.[[BooleanData]].
            // b. Assert: b is a Boolean.
            // c. Return b.
            match object.primitive_value(agent) {
                Some(Value::Boolean(b)) => Ok(b),
                _ => unreachable!(),
            }
        }
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Boolean")),
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{construct, to_string},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::Value,
    };

    #[test]
    fn boolean_objects_stringify() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let boolean = agent.current_realm().intrinsics().boolean();
            let wrapper = construct(
                agent,
                boolean,
                Some(ArgumentsList::new(&[Value::Number(1.0)])),
                None,
            )
            .unwrap();
            assert_eq!(wrapper.primitive_value(agent), Some(Value::Boolean(true)));
            let string = to_string(agent, wrapper.into_value()).unwrap();
            assert_eq!(string.to_string_lossy(agent), "true");
            let prototype = agent.current_realm().intrinsics().boolean_prototype();
            assert_eq!(prototype.primitive_value(agent), Some(Value::Boolean(false)));
        });
    }
}
