// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builders::OrdinaryObjectBuilder,
        execution::{Agent, Realm},
        types::{PropertyKey, Value},
    },
    heap::WellKnownSymbolIndexes,
};

/// ### [13.3 Properties of the Intl.ListFormat Prototype Object](https://tc39.es/ecma402/#sec-properties-of-intl-listformat-prototype-object)
///
/// `format`, `formatToParts` and `resolvedOptions` need an Intl.ListFormat
/// instance and are left out.
pub(crate) struct ListFormatPrototype;

impl ListFormatPrototype {
    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.list_format_prototype();
        let object_prototype = intrinsics.object_prototype();
        let list_format_constructor = intrinsics.list_format();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(2)
            .with_constructor_property(list_format_constructor)
            // ### [13.3.5 Intl.ListFormat.prototype \[ %Symbol.toStringTag% \]](https://tc39.es/ecma402/#sec-Intl.ListFormat.prototype-toStringTag)
            .with_property(|builder| {
                builder
                    .with_key(PropertyKey::from(WellKnownSymbolIndexes::ToStringTag))
                    .with_value_creator_readonly(|agent| Value::from_str(agent, "Intl.ListFormat"))
                    .with_enumerable(false)
                    .build()
            })
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{get, to_string},
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn prototype_is_tagged_and_linked_to_constructor() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let intrinsics = agent.current_realm().intrinsics();
            let prototype = intrinsics.list_format_prototype();
            let list_format = intrinsics.list_format();
            let tag = to_string(agent, prototype.into_value()).unwrap();
            assert_eq!(tag.to_string_lossy(agent), "[object Intl.ListFormat]");
            let key = PropertyKey::from_str(agent, "constructor");
            assert_eq!(get(agent, prototype, key).unwrap(), list_format.into_value());
            let key = PropertyKey::from_str(agent, "prototype");
            assert_eq!(
                get(agent, list_format.into_object(), key).unwrap(),
                Value::Object(prototype)
            );
        });
    }
}
