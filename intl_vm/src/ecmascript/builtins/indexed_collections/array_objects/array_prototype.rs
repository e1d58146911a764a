// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::OrdinaryObjectBuilder,
    execution::{Agent, Realm},
    types::{ObjectKind, Value},
};

/// ### [23.1.3 Properties of the Array Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-array-prototype-object)
pub(crate) struct ArrayPrototype;

impl ArrayPrototype {
    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.array_prototype();
        let object_prototype = intrinsics.object_prototype();
        let array_constructor = intrinsics.array();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(2)
            .with_property(|builder| {
                builder
                    .with_key_from_str("length")
                    .with_enumerable(false)
                    .with_configurable(false)
                    .with_value(Value::Number(0.0))
                    .build()
            })
            .with_constructor_property(array_constructor)
            .build();
        // The Array prototype object is an Array exotic object.
        agent[this].kind = ObjectKind::Array;
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{is_array, length_of_array_like},
        execution::{Agent, Options},
    };

    #[test]
    fn array_prototype_is_an_empty_array() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let prototype = agent.current_realm().intrinsics().array_prototype();
            assert!(is_array(agent, prototype.into_value()).unwrap());
            assert_eq!(length_of_array_like(agent, prototype).unwrap(), 0);
        });
    }
}
