// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [20.5.6 NativeError Object Structure](https://tc39.es/ecma262/#sec-nativeerror-object-structure)

use super::error_constructor::construct_error;
use crate::ecmascript::{
    builders::BuiltinFunctionBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor},
    execution::{Agent, IntrinsicConstructorIndexes, JsResult, Realm, agent::ExceptionType},
    types::{Object, Value},
};

struct RangeErrorConstructor;

impl Builtin for RangeErrorConstructor {
    const NAME: &'static str = "RangeError";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(NativeErrorConstructors::range_error);
}

impl BuiltinIntrinsicConstructor for RangeErrorConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::RangeError;
}

struct TypeErrorConstructor;

impl Builtin for TypeErrorConstructor {
    const NAME: &'static str = "TypeError";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(NativeErrorConstructors::type_error);
}

impl BuiltinIntrinsicConstructor for TypeErrorConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::TypeError;
}

pub(crate) struct NativeErrorConstructors;

impl NativeErrorConstructors {
    fn range_error(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        construct_error(agent, ExceptionType::RangeError, arguments, new_target)
    }

    fn type_error(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        construct_error(agent, ExceptionType::TypeError, arguments, new_target)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        // The [[Prototype]] of a NativeError constructor is %Error%.
        let error_constructor = intrinsics.error().into_object();
        let range_error_prototype = intrinsics.range_error_prototype();
        let type_error_prototype = intrinsics.type_error_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<RangeErrorConstructor>(agent, realm)
            .with_prototype(error_constructor)
            .with_property_capacity(1)
            .with_prototype_property(range_error_prototype)
            .build();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<TypeErrorConstructor>(agent, realm)
            .with_prototype(error_constructor)
            .with_property_capacity(1)
            .with_prototype_property(type_error_prototype)
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{construct, get, to_string},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{InternalMethods, PropertyKey, Value},
    };

    #[test]
    fn native_errors_inherit_from_error() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let intrinsics = agent.current_realm().intrinsics();
            let type_error = intrinsics.type_error();
            let error_prototype = intrinsics.error_prototype();
            let type_error_prototype = intrinsics.type_error_prototype();
            let message = Value::from_str(agent, "bad options");
            let error = construct(
                agent,
                type_error,
                Some(ArgumentsList::new(&[message])),
                None,
            )
            .unwrap();
            assert!(error.is_error(agent));
            assert_eq!(
                error.internal_get_prototype_of(agent).unwrap(),
                Some(type_error_prototype)
            );
            assert_eq!(
                type_error_prototype.internal_get_prototype_of(agent).unwrap(),
                Some(error_prototype)
            );
            let string = to_string(agent, error.into_value()).unwrap();
            assert_eq!(string.to_string_lossy(agent), "TypeError: bad options");
            let message_key = PropertyKey::from_str(agent, "message");
            let descriptor = error
                .internal_get_own_property(agent, message_key)
                .unwrap()
                .unwrap();
            assert_eq!(descriptor.enumerable, Some(false));
            let name = PropertyKey::from_str(agent, "name");
            let name = get(agent, type_error.into_object(), name).unwrap();
            assert_eq!(name, Value::from_str(agent, "TypeError"));
        });
    }
}
