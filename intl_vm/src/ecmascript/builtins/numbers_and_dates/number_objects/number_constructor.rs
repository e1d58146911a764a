// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::to_number,
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::get_prototype_from_constructor,
        primitive_objects::{PrimitiveObjectData, create_primitive_object},
    },
    execution::{Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm},
    types::{Function, Object, Value},
};

pub(crate) struct NumberConstructor;

impl Builtin for NumberConstructor {
    const NAME: &'static str = "Number";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(NumberConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for NumberConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Number;
}

impl NumberConstructor {
    /// ### [21.1.1.1 Number ( value )](https://tc39.es/ecma262/#sec-number-constructor-number-value)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If value is present, then
        let n = if !arguments.is_empty() {
            // a. Let prim be ? ToNumeric(value).
            // b. If prim is a BigInt, let n be 𝔽(ℝ(prim)).
            // c. Otherwise, let n be prim.
            to_number(agent, arguments.get(0))?
        } else {
            // 2. Else,
            // a. Let n be +0𝔽.
            0.0
        };
        // 3. If NewTarget is undefined, return n.
        let Some(new_target) = new_target else {
            return Ok(Value::Number(n));
        };
        // 4. Let O be ? OrdinaryCreateFromConstructor(NewTarget,
        //    "%Number.prototype%", « [[NumberData]] »).
        let prototype =
            get_prototype_from_constructor(agent, Function(new_target), ProtoIntrinsics::Number)?;
        // 5. Set O.[[NumberData]] to n.
        let o = create_primitive_object(agent, PrimitiveObjectData::Number(n), Some(prototype));
        // 6. Return O.
        Ok(o.into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let number_prototype = agent[realm].intrinsics().number_prototype();
        let constants = [
            ("EPSILON", f64::EPSILON),
            ("MAX_SAFE_INTEGER", 9007199254740991.0),
            ("MIN_SAFE_INTEGER", -9007199254740991.0),
            ("NaN", f64::NAN),
            ("NEGATIVE_INFINITY", f64::NEG_INFINITY),
            ("POSITIVE_INFINITY", f64::INFINITY),
        ];
        let mut builder =
            BuiltinFunctionBuilder::new_intrinsic_constructor::<NumberConstructor>(agent, realm)
                .with_property_capacity(constants.len() + 1)
                .with_prototype_property(number_prototype);
        for (name, value) in constants {
            builder = builder.with_property(|builder| {
                builder
                    .with_key_from_str(name)
                    .with_enumerable(false)
                    .with_configurable(false)
                    .with_value_readonly(Value::Number(value))
                    .build()
            });
        }
        builder.build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, construct, get},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{InternalMethods, PropertyKey, Value},
    };

    #[test]
    fn number_converts_and_wraps() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let number = agent.current_realm().intrinsics().number();
            let empty = call_function(agent, number, Value::Undefined, None).unwrap();
            assert_eq!(empty, Value::Number(0.0));
            let text = Value::from_str(agent, " 0x1F ");
            let converted = call_function(
                agent,
                number,
                Value::Undefined,
                Some(ArgumentsList::new(&[text])),
            )
            .unwrap();
            assert_eq!(converted, Value::Number(31.0));
            let wrapper = construct(
                agent,
                number,
                Some(ArgumentsList::new(&[Value::Number(7.0)])),
                None,
            )
            .unwrap();
            assert_eq!(wrapper.primitive_value(agent), Some(Value::Number(7.0)));

            let key = PropertyKey::from_str(agent, "MAX_SAFE_INTEGER");
            let max = get(agent, number.into_object(), key).unwrap();
            assert_eq!(max, Value::Number(9007199254740991.0));
            let descriptor = number
                .into_object()
                .internal_get_own_property(agent, key)
                .unwrap()
                .unwrap();
            assert_eq!(descriptor.writable, Some(false));
            assert_eq!(descriptor.configurable, Some(false));
        });
    }
}
