// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::to_string,
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::get_prototype_from_constructor,
        primitive_objects::{PrimitiveObjectData, create_primitive_object},
    },
    execution::{Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm},
    types::{Function, Object, String, Value},
};

pub(crate) struct StringConstructor;

impl Builtin for StringConstructor {
    const NAME: &'static str = "String";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(StringConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for StringConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::String;
}

impl StringConstructor {
    /// ### [22.1.1.1 String ( value )](https://tc39.es/ecma262/#sec-string-constructor-string-value)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If value is not present, then
        let s = if arguments.is_empty() {
            // a. Let s be the empty String.
            String::from_str(agent, "")
        } else {
            // 2. Else,
            let value = arguments.get(0);
            match value {
                // a. If NewTarget is undefined and value is a Symbol, return
                //    SymbolDescriptiveString(value).
                Value::Symbol(symbol) if new_target.is_none() => {
                    return Ok(symbol.descriptive_string(agent).into_value());
                }
                // b. Let s be ? ToString(value).
                _ => to_string(agent, value)?,
            }
        };
        // 3. If NewTarget is undefined, return s.
        let Some(new_target) = new_target else {
            return Ok(s.into_value());
        };
        // 4. Return StringCreate(s, ? GetPrototypeFromConstructor(NewTarget,
        //    "%String.prototype%")).
        let prototype =
            get_prototype_from_constructor(agent, Function(new_target), ProtoIntrinsics::String)?;
        let s = create_primitive_object(agent, PrimitiveObjectData::String(s), Some(prototype));
        Ok(s.into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let string_prototype = agent[realm].intrinsics().string_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<StringConstructor>(agent, realm)
            .with_property_capacity(1)
            .with_prototype_property(string_prototype)
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, construct, get},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{PropertyKey, Symbol, Value},
    };

    #[test]
    fn string_converts_symbols_only_when_called() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let string = agent.current_realm().intrinsics().string();
            let description = crate::ecmascript::types::String::from_str(agent, "test");
            let symbol = Symbol::new(agent, Some(description)).into_value();
            let converted = call_function(
                agent,
                string,
                Value::Undefined,
                Some(ArgumentsList::new(&[symbol])),
            )
            .unwrap();
            let Value::String(converted) = converted else {
                panic!("String(symbol) did not return a string");
            };
            assert_eq!(converted.to_string_lossy(agent), "Symbol(test)");
            let error = construct(agent, string, Some(ArgumentsList::new(&[symbol])), None)
                .unwrap_err();
            assert!(error.to_string(agent).starts_with("TypeError"));

            let text = Value::from_str(agent, "test");
            let wrapper =
                construct(agent, string, Some(ArgumentsList::new(&[text])), None).unwrap();
            let length = PropertyKey::from_str(agent, "length");
            assert_eq!(get(agent, wrapper, length).unwrap(), Value::Number(4.0));
            assert_eq!(
                get(agent, wrapper, PropertyKey::from_index(0)).unwrap(),
                Value::from_str(agent, "t")
            );
        });
    }
}
