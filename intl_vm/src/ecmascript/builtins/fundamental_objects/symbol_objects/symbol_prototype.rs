// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builders::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin, primitive_objects::PrimitiveObjectData},
        execution::{Agent, JsResult, Realm, agent::ExceptionType},
        types::{ObjectKind, PropertyKey, Symbol, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct SymbolPrototype;

struct SymbolPrototypeToString;

impl Builtin for SymbolPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(SymbolPrototype::to_string);
}

struct SymbolPrototypeValueOf;

impl Builtin for SymbolPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(SymbolPrototype::value_of);
}

impl SymbolPrototype {
    /// ### [20.4.3.3 Symbol.prototype.toString ( )](https://tc39.es/ecma262/#sec-symbol.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let sym be ? ThisSymbolValue(this value).
        let sym = this_symbol_value(agent, this_value)?;
        // 2. Return SymbolDescriptiveString(sym).
        Ok(sym.descriptive_string(agent).into_value())
    }

    /// ### [20.4.3.4 Symbol.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-symbol.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisSymbolValue(this value).
        this_symbol_value(agent, this_value).map(Symbol::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.symbol_prototype();
        let object_prototype = intrinsics.object_prototype();
        let symbol_constructor = intrinsics.symbol();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(4)
            .with_constructor_property(symbol_constructor)
            .with_builtin_function_property::<SymbolPrototypeToString>()
            .with_builtin_function_property::<SymbolPrototypeValueOf>()
            .with_property(|builder| {
                builder
                    .with_key(PropertyKey::from(WellKnownSymbolIndexes::ToStringTag))
                    .with_value_creator_readonly(|agent| Value::from_str(agent, "Symbol"))
                    .with_enumerable(false)
                    .build()
            })
            .build();
    }
}

/// ### [20.4.3.4.1 ThisSymbolValue ( value )](https://tc39.es/ecma262/#sec-thissymbolvalue)
fn this_symbol_value(agent: &mut Agent, value: Value) -> JsResult<Symbol> {
    match value {
        // 1. If value is a Symbol, return value.
        Value::Symbol(symbol) => Ok(symbol),
        // 2. If value is an Object and value has a [[SymbolData]] internal
        //    slot, then
        Value::Object(object) => match object.kind(agent) {
            // a. Let s be value.[[SymbolData]].
            // b. Assert: s is a Symbol.
            // c. Return s.
            ObjectKind::PrimitiveObject(PrimitiveObjectData::Symbol(symbol)) => Ok(*symbol),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Symbol")),
        },
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Symbol")),
    }
}
