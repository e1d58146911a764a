// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::to_string,
        builders::BuiltinFunctionBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor},
        execution::{
            Agent, IntrinsicConstructorIndexes, JsResult, Realm, agent::ExceptionType,
        },
        types::{Object, Symbol, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct SymbolConstructor;

impl Builtin for SymbolConstructor {
    const NAME: &'static str = "Symbol";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(SymbolConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for SymbolConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Symbol;
}

impl SymbolConstructor {
    /// ### [20.4.1.1 Symbol ( \[ description \] )](https://tc39.es/ecma262/#sec-symbol-description)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is not undefined, throw a TypeError exception.
        if new_target.is_some() {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "Symbol is not a constructor"),
            );
        }
        let description = arguments.get(0);
        // 2. If description is undefined, let descString be undefined.
        let desc_string = if description.is_undefined() {
            None
        } else {
            // 3. Else, let descString be ? ToString(description).
            Some(to_string(agent, description)?)
        };
        // 4. Return a new Symbol whose [[Description]] is descString.
        Ok(Symbol::new(agent, desc_string).into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let symbol_prototype = agent[realm].intrinsics().symbol_prototype();
        let well_known = [
            ("toPrimitive", WellKnownSymbolIndexes::ToPrimitive),
            ("toStringTag", WellKnownSymbolIndexes::ToStringTag),
        ];
        let mut builder =
            BuiltinFunctionBuilder::new_intrinsic_constructor::<SymbolConstructor>(agent, realm)
                .with_property_capacity(well_known.len() + 1)
                .with_prototype_property(symbol_prototype);
        for (name, symbol) in well_known {
            // Symbol.toPrimitive and friends are non-writable,
            // non-enumerable and non-configurable.
            builder = builder.with_property(|builder| {
                builder
                    .with_key_from_str(name)
                    .with_enumerable(false)
                    .with_configurable(false)
                    .with_value_readonly(Symbol::from(symbol).into_value())
                    .build()
            });
        }
        builder.build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call_function, construct},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::Value,
    };

    #[test]
    fn symbols_are_unique_and_not_constructible() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let symbol = agent.current_realm().intrinsics().symbol();
            let first = call_function(agent, symbol, Value::Undefined, None).unwrap();
            let second = call_function(agent, symbol, Value::Undefined, None).unwrap();
            assert!(first.is_symbol());
            assert_ne!(first, second);
            let description = Value::from_str(agent, "desc");
            let described = call_function(
                agent,
                symbol,
                Value::Undefined,
                Some(ArgumentsList::new(&[description])),
            )
            .unwrap();
            let Value::Symbol(described) = described else {
                panic!("Symbol() did not return a symbol");
            };
            let descriptive = described.descriptive_string(agent);
            assert_eq!(descriptive.to_string_lossy(agent), "Symbol(desc)");
            let error = construct(agent, symbol, None, None).unwrap_err();
            assert_eq!(
                error.to_string(agent),
                "TypeError: Symbol is not a constructor"
            );
        });
    }
}
