// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::to_boolean,
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::get_prototype_from_constructor,
        primitive_objects::{PrimitiveObjectData, create_primitive_object},
    },
    execution::{Agent, IntrinsicConstructorIndexes, JsResult, ProtoIntrinsics, Realm},
    types::{Function, Object, Value},
};

pub(crate) struct BooleanConstructor;

impl Builtin for BooleanConstructor {
    const NAME: &'static str = "Boolean";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(BooleanConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for BooleanConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::Boolean;
}

impl BooleanConstructor {
    /// ### [20.3.1.1 Boolean ( value )](https://tc39.es/ecma262/#sec-boolean-constructor-boolean-value)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. Let b be ToBoolean(value).
        let b = to_boolean(agent, arguments.get(0));
        // 2. If NewTarget is undefined, return b.
        let Some(new_target) = new_target else {
            return Ok(b.into());
        };
        // 3. Let O be ? OrdinaryCreateFromConstructor(NewTarget,
        //    "%Boolean.prototype%", « [[BooleanData]] »).
        let prototype =
            get_prototype_from_constructor(agent, Function(new_target), ProtoIntrinsics::Boolean)?;
        // 4. Set O.[[BooleanData]] to b.
        let o = create_primitive_object(agent, PrimitiveObjectData::Boolean(b), Some(prototype));
        // 5. Return O.
        Ok(o.into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let boolean_prototype = agent[realm].intrinsics().boolean_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<BooleanConstructor>(agent, realm)
            .with_property_capacity(1)
            .with_prototype_property(boolean_prototype)
            .build();
    }
}
