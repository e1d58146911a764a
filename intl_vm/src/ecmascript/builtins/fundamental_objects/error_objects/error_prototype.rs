// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{get, to_string},
    builders::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{PropertyKey, String, Value},
};

pub(crate) struct ErrorPrototype;

struct ErrorPrototypeToString;

impl Builtin for ErrorPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ErrorPrototype::to_string);
}

impl ErrorPrototype {
    /// ### [20.5.3.4 Error.prototype.toString ( )](https://tc39.es/ecma262/#sec-error.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. If O is not an Object, throw a TypeError exception.
        let Value::Object(o) = this_value else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "'this' is not an object"));
        };
        // 3. Let name be ? Get(O, "name").
        let key = PropertyKey::from_str(agent, "name");
        let name = get(agent, o, key)?;
        // 4. If name is undefined, set name to "Error"; otherwise set name to
        //    ? ToString(name).
        let name = if name.is_undefined() {
            String::from_str(agent, "Error")
        } else {
            to_string(agent, name)?
        };
        // 5. Let msg be ? Get(O, "message").
        let key = PropertyKey::from_str(agent, "message");
        let msg = get(agent, o, key)?;
        // 6. If msg is undefined, set msg to the empty String; otherwise set
        //    msg to ? ToString(msg).
        let msg = if msg.is_undefined() {
            String::from_str(agent, "")
        } else {
            to_string(agent, msg)?
        };
        if name.is_empty(agent) {
            // 7. If name is the empty String, return msg.
            Ok(msg.into_value())
        } else if msg.is_empty(agent) {
            // 8. If msg is the empty String, return name.
            Ok(name.into_value())
        } else {
            // 9. Return the string-concatenation of name, the code unit
            //    0x003A (COLON), the code unit 0x0020 (SPACE), and msg.
            let separator = String::from_str(agent, ": ");
            Ok(String::concat(agent, &[name, separator, msg]).into_value())
        }
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.error_prototype();
        let error_constructor = intrinsics.error();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_property_capacity(4)
            .with_prototype(object_prototype)
            .with_constructor_property(error_constructor)
            .with_property(|builder| {
                builder
                    .with_enumerable(false)
                    .with_key_from_str("message")
                    .with_value_creator(|agent| Value::from_str(agent, ""))
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_enumerable(false)
                    .with_key_from_str("name")
                    .with_value_creator(|agent| Value::from_str(agent, "Error"))
                    .build()
            })
            .with_builtin_function_property::<ErrorPrototypeToString>()
            .build();
    }
}
