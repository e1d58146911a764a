// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::AVAILABLE_LOCALES;
use crate::ecmascript::{
    builders::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        intl::locale_negotiation::{canonicalize_locale_list, supported_locales},
    },
    execution::{
        Agent, IntrinsicConstructorIndexes, JsResult, Realm, agent::ExceptionType,
    },
    types::{Object, Value},
};

pub(crate) struct ListFormatConstructor;

impl Builtin for ListFormatConstructor {
    const NAME: &'static str = "ListFormat";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(ListFormatConstructor::constructor);
}

impl BuiltinIntrinsicConstructor for ListFormatConstructor {
    const INDEX: IntrinsicConstructorIndexes = IntrinsicConstructorIndexes::ListFormat;
}

struct ListFormatSupportedLocalesOf;

impl Builtin for ListFormatSupportedLocalesOf {
    const NAME: &'static str = "supportedLocalesOf";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ListFormatConstructor::supported_locales_of);
}

impl ListFormatConstructor {
    /// ### [13.1.1 Intl.ListFormat ( \[ locales \[ , options \] \] )](https://tc39.es/ecma402/#sec-Intl.ListFormat)
    ///
    /// Intl.ListFormat objects cannot be created: no list patterns are
    /// available to initialise them with.
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        _arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is undefined, throw a TypeError exception.
        if new_target.is_none() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Constructor Intl.ListFormat requires 'new'",
            ));
        }
        Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Intl.ListFormat instances are not supported",
        ))
    }

    /// ### [13.2.2 Intl.ListFormat.supportedLocalesOf ( locales \[ , options \] )](https://tc39.es/ecma402/#sec-Intl.ListFormat.supportedLocalesOf)
    fn supported_locales_of(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let locales = arguments.get(0);
        let options = arguments.get(1);
        // 1. Let availableLocales be %Intl.ListFormat%.[[AvailableLocales]].
        let available_locales = AVAILABLE_LOCALES;
        // 2. Let requestedLocales be ? CanonicalizeLocaleList(locales).
        let requested_locales = canonicalize_locale_list(agent, locales)?;
        // 3. Return ? SupportedLocales(availableLocales, requestedLocales,
        //    options).
        supported_locales(agent, available_locales, requested_locales, options)
            .map(Object::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let list_format_prototype = agent[realm].intrinsics().list_format_prototype();
        BuiltinFunctionBuilder::new_intrinsic_constructor::<ListFormatConstructor>(agent, realm)
            .with_property_capacity(2)
            .with_prototype_property(list_format_prototype)
            .with_builtin_function_property::<ListFormatSupportedLocalesOf>()
            .build();
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{
            call, call_function, construct, create_array_from_list, get, is_array,
        },
        builtins::ArgumentsList,
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn list_format_cannot_be_instantiated() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let list_format = agent.current_realm().intrinsics().list_format();
            let error = call_function(agent, list_format, Value::Undefined, None).unwrap_err();
            assert_eq!(
                error.to_string(agent),
                "TypeError: Constructor Intl.ListFormat requires 'new'"
            );
            assert!(construct(agent, list_format, None, None).is_err());
        });
    }

    #[test]
    fn supported_locales_of_filters_requested_locales() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let list_format = agent.current_realm().intrinsics().list_format();
            let key = PropertyKey::from_str(agent, "supportedLocalesOf");
            let supported_locales_of = get(agent, list_format.into_object(), key).unwrap();
            let requested = [
                Value::from_str(agent, "en-CA"),
                Value::from_str(agent, "tlh"),
                Value::from_str(agent, "de-u-co-phonebk"),
            ];
            let locales = create_array_from_list(agent, &requested);
            let result = call(
                agent,
                supported_locales_of,
                list_format.into_value(),
                Some(ArgumentsList::new(&[locales.into_value(), Value::Boolean(true)])),
            )
            .unwrap();
            assert!(is_array(agent, result).unwrap());
            let Value::Object(result) = result else {
                unreachable!();
            };
            let first = get(agent, result, PropertyKey::from_index(0)).unwrap();
            let second = get(agent, result, PropertyKey::from_index(1)).unwrap();
            assert_eq!(first, Value::from_str(agent, "en-CA"));
            assert_eq!(second, Value::from_str(agent, "de-u-co-phonebk"));
        });
    }
}
