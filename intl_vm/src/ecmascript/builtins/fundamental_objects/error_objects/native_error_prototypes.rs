// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::OrdinaryObjectBuilder,
    execution::{Agent, Realm, agent::ExceptionType},
    types::{Function, Object, Value},
};

/// ### [20.5.6.3 Properties of the NativeError Prototype Objects](https://tc39.es/ecma262/#sec-properties-of-the-nativeerror-prototype-objects)
pub(crate) struct NativeErrorPrototypes;

impl NativeErrorPrototypes {
    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let error_prototype = intrinsics.error_prototype();
        let native_errors = [
            (
                ExceptionType::RangeError,
                intrinsics.range_error_prototype(),
                intrinsics.range_error(),
            ),
            (
                ExceptionType::TypeError,
                intrinsics.type_error_prototype(),
                intrinsics.type_error(),
            ),
        ];
        for (kind, this, constructor) in native_errors {
            create_native_error_prototype(agent, realm, kind, this, constructor, error_prototype);
        }
    }
}

fn create_native_error_prototype(
    agent: &mut Agent,
    realm: Realm,
    kind: ExceptionType,
    this: Object,
    constructor: Function,
    error_prototype: Object,
) {
    // Each NativeError prototype object is not an Error instance and does
    // not have an [[ErrorData]] internal slot.
    OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
        .with_prototype(error_prototype)
        .with_property_capacity(3)
        .with_constructor_property(constructor)
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
                .with_value_creator(|agent| Value::from_str(agent, kind.name()))
                .build()
        })
        .build();
}
