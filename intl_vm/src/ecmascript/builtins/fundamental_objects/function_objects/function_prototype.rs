// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::is_callable,
    builders::BuiltinFunctionBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, JsResult, Realm, agent::ExceptionType},
    types::{String, Value},
};

/// ### [20.2.3 Properties of the Function Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-function-prototype-object)
///
/// The Function prototype object is itself a built-in function object that
/// accepts any arguments and returns undefined.
pub(crate) struct FunctionPrototype;

impl Builtin for FunctionPrototype {
    const NAME: &'static str = "";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(FunctionPrototype::behaviour);
}

struct FunctionPrototypeToString;

impl Builtin for FunctionPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(FunctionPrototype::to_string);
}

impl FunctionPrototype {
    fn behaviour(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::Undefined)
    }

    /// ### [20.2.3.5 Function.prototype.toString ( )](https://tc39.es/ecma262/#sec-function.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let func be the this value.
        // 3. If func is a built-in function object, return an
        //    implementation-defined String source code representation of
        //    func. The representation must have the syntax of a
        //    NativeFunction.
        let Some(func) = is_callable(agent, this_value) else {
            // 5. Throw a TypeError exception.
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Function.prototype.toString requires that 'this' be a Function",
            ));
        };
        let name = func.initial_name(agent);
        let source = format!("function {name}() {{ [native code] }}");
        Ok(String::from_string(agent, source).into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.function_prototype();
        // The Function prototype object has a [[Prototype]] internal slot
        // whose value is %Object.prototype%.
        let object_prototype = intrinsics.object_prototype();

        BuiltinFunctionBuilder::new_intrinsic_function::<FunctionPrototype>(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(1)
            .with_builtin_function_property::<FunctionPrototypeToString>()
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, to_string},
        execution::{Agent, Options},
        types::Value,
    };

    #[test]
    fn function_prototype_is_callable_and_stringifies_builtins() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let intrinsics = agent.current_realm().intrinsics();
            let function_prototype = intrinsics.function_prototype();
            let symbol = intrinsics.symbol();
            let function_prototype = function_prototype.as_function(agent).unwrap();
            let result = call_function(agent, function_prototype, Value::Undefined, None);
            assert_eq!(result.unwrap(), Value::Undefined);
            let source = to_string(agent, symbol.into_value()).unwrap();
            assert_eq!(
                source.to_string_lossy(agent),
                "function Symbol() { [native code] }"
            );
        });
    }
}
