// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::locale_negotiation::canonicalize_locale_list;
use crate::{
    ecmascript::{
        abstract_operations::create_array_from_list,
        builders::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, JsResult, Realm},
        types::{PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

/// ### [8 The Intl Object](https://tc39.es/ecma402/#intl-object)
pub(crate) struct IntlObject;

struct IntlObjectGetCanonicalLocales;

impl Builtin for IntlObjectGetCanonicalLocales {
    const NAME: &'static str = "getCanonicalLocales";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(IntlObject::get_canonical_locales);
}

impl IntlObject {
    /// ### [8.3.1 Intl.getCanonicalLocales ( locales )](https://tc39.es/ecma402/#sec-intl.getcanonicallocales)
    fn get_canonical_locales(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let ll be ? CanonicalizeLocaleList(locales).
        let ll = canonicalize_locale_list(agent, arguments.get(0))?;
        // 2. Return CreateArrayFromList(ll).
        let ll: Vec<Value> = ll
            .into_iter()
            .map(|locale| String::from_string(agent, locale).into_value())
            .collect();
        Ok(create_array_from_list(agent, &ll).into_value())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.intl();
        let object_prototype = intrinsics.object_prototype();
        let list_format = intrinsics.list_format();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_prototype(object_prototype)
            .with_property_capacity(3)
            .with_builtin_function_property::<IntlObjectGetCanonicalLocales>()
            // ### [8.2.6 Intl.ListFormat ( . . . )](https://tc39.es/ecma402/#sec-intl.listformat-intro)
            .with_property(|builder| {
                builder
                    .with_key_from_str("ListFormat")
                    .with_enumerable(false)
                    .with_value(list_format.into_value())
                    .build()
            })
            // ### [8.1.1 Intl\[ %Symbol.toStringTag% \]](https://tc39.es/ecma402/#sec-Intl-toStringTag)
            .with_property(|builder| {
                builder
                    .with_key(PropertyKey::from(WellKnownSymbolIndexes::ToStringTag))
                    .with_value_creator_readonly(|agent| Value::from_str(agent, "Intl"))
                    .with_enumerable(false)
                    .build()
            })
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{call, get, get_v, to_string},
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn intl_namespace_canonicalizes_locales() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let intl = agent.current_realm().intrinsics().intl();
            let tag = to_string(agent, intl.into_value()).unwrap();
            assert_eq!(tag.to_string_lossy(agent), "[object Intl]");

            let key = PropertyKey::from_str(agent, "getCanonicalLocales");
            let get_canonical_locales = get(agent, intl, key).unwrap();
            let locales = Value::from_str(agent, "ZH-hant-tw");
            let result = call(
                agent,
                get_canonical_locales,
                intl.into_value(),
                Some(ArgumentsList::new(&[locales])),
            )
            .unwrap();
            let first = get_v(agent, result, PropertyKey::from_index(0)).unwrap();
            assert_eq!(first, Value::from_str(agent, "zh-Hant-TW"));
        });
    }
}
