// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        create_non_enumerable_data_property_or_throw, get, has_property, to_string,
    },
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::ordinary_create_from_constructor,
    },
    execution::{
        Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm,
        agent::ExceptionType,
    },
    types::{Function, Object, PropertyKey, Value},
};

pub(crate) struct ErrorConstructor;

impl Builtin for ErrorConstructor {
    const NAME: &'static str = "Error";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(ErrorConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for ErrorConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Error;
}

impl ErrorConstructor {
    /// ### [20.5.1.1 Error ( message \[ , options \] )](https://tc39.es/ecma262/#sec-error-message)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        construct_error(agent, ExceptionType::Error, arguments, new_target)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let error_prototype = agent[realm].intrinsics().error_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<ErrorConstructor>(agent, realm)
            .with_property_capacity(1)
            .with_prototype_property(error_prototype)
            .build();
    }
}

/// Shared behaviour of `Error` and the NativeError constructors, which only
/// differ in the intrinsic default prototype of the created object.
pub(super) fn construct_error(
    agent: &mut Agent,
    kind: ExceptionType,
    arguments: ArgumentsList,
    new_target: Option<Object>,
) -> JsResult<Value> {
    let message = arguments.get(0);
    let options = arguments.get(1);
    // 1. If NewTarget is undefined, let newTarget be the active function
    //    object; else let newTarget be NewTarget.
    let new_target = match new_target {
        Some(new_target) => Function(new_target),
        None => match agent.running_execution_context().function {
            Some(active_function) => active_function,
            None => intrinsic_error_constructor(agent, kind),
        },
    };
    let intrinsic_default_proto = match kind {
        ExceptionType::Error => ProtoIntrinsics::Error,
        ExceptionType::RangeError => ProtoIntrinsics::RangeError,
        ExceptionType::TypeError => ProtoIntrinsics::TypeError,
    };
    // 2. Let O be ? OrdinaryCreateFromConstructor(newTarget,
    //    "%Error.prototype%", « [[ErrorData]] »).
    let o = ordinary_create_from_constructor(agent, new_target, intrinsic_default_proto)?;
    // 3. If message is not undefined, then
    if !message.is_undefined() {
        // a. Let msg be ? ToString(message).
        let msg = to_string(agent, message)?;
        // b. Perform CreateNonEnumerableDataPropertyOrThrow(O, "message", msg).
        let key = PropertyKey::from_str(agent, "message");
        create_non_enumerable_data_property_or_throw(agent, o, key, msg.into_value());
    }
    // 4. Perform ? InstallErrorCause(O, options).
    install_error_cause(agent, o, options)?;
    // 5. Return O.
    Ok(o.into_value())
}

fn intrinsic_error_constructor(agent: &Agent, kind: ExceptionType) -> Function {
    let intrinsics = agent.current_realm().intrinsics();
    match kind {
        ExceptionType::Error => intrinsics.error(),
        ExceptionType::RangeError => intrinsics.range_error(),
        ExceptionType::TypeError => intrinsics.type_error(),
    }
}

/// ### [20.5.8.1 InstallErrorCause ( O, options )](https://tc39.es/ecma262/#sec-installerrorcause)
fn install_error_cause(agent: &mut Agent, o: Object, options: Value) -> JsResult<()> {
    // 1. If options is an Object and ? HasProperty(options, "cause") is true,
    //    then
    if let Value::Object(options) = options {
        let key = PropertyKey::from_str(agent, "cause");
        if has_property(agent, options, key)? {
            // a. Let cause be ? Get(options, "cause").
            let cause = get(agent, options, key)?;
            // b. Perform CreateNonEnumerableDataPropertyOrThrow(O, "cause", cause).
            create_non_enumerable_data_property_or_throw(agent, o, key, cause);
        }
    }
    // 2. Return UNUSED.
    Ok(())
}
