// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [9.2.12 CoerceOptionsToObject](https://tc39.es/ecma402/#sec-coerceoptionstoobject) and [9.2.13 GetOption](https://tc39.es/ecma402/#sec-getoption)

use crate::ecmascript::{
    abstract_operations::{get, to_object, to_string},
    builtins::ordinary_object_create,
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{Object, PropertyKey, Value},
};

/// ### [9.2.12 CoerceOptionsToObject ( options )](https://tc39.es/ecma402/#sec-coerceoptionstoobject)
///
/// The abstract operation CoerceOptionsToObject takes argument options (an
/// ECMAScript language value) and returns either a normal completion
/// containing an Object or a throw completion. It coerces options into an
/// Object suitable for use with GetOption, defaulting to an empty Object.
/// Because it coerces non-null primitive values into objects, its use is
/// discouraged for new functionality in favour of GetOptionsObject.
pub(crate) fn coerce_options_to_object(agent: &mut Agent, options: Value) -> JsResult<Object> {
    // 1. If options is undefined, then
    if options.is_undefined() {
        // a. Return OrdinaryObjectCreate(null).
        return Ok(ordinary_object_create(agent, None));
    }
    // 2. Return ? ToObject(options).
    to_object(agent, options)
}

/// A String-valued option whose allowed values map onto `Self`.
pub(crate) trait StringOption: Copy + 'static {
    /// The allowed values, in the order they are listed in error messages.
    const VALUES: &'static [(&'static str, Self)];
}

/// The `localeMatcher` option of the locale negotiating functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocaleMatcher {
    Lookup,
    BestFit,
}

impl StringOption for LocaleMatcher {
    const VALUES: &'static [(&'static str, Self)] =
        &[("lookup", LocaleMatcher::Lookup), ("best fit", LocaleMatcher::BestFit)];
}

/// ### [9.2.13 GetOption ( options, property, type, values, default )](https://tc39.es/ecma402/#sec-getoption)
///
/// GetOption for `type` string with a non-empty `values` list. A `default`
/// of `None` stands for undefined.
pub(crate) fn get_option<T: StringOption>(
    agent: &mut Agent,
    options: Object,
    property: &str,
    default: Option<T>,
) -> JsResult<Option<T>> {
    // 1. Let value be ? Get(options, property).
    let property_key = PropertyKey::from_str(agent, property);
    let value = get(agent, options, property_key)?;
    // 2. If value is undefined, then
    if value.is_undefined() {
        // a. If default is REQUIRED, throw a RangeError exception.
        // b. Return default.
        return Ok(default);
    }
    // 3. If type is BOOLEAN, then
    //    a. Set value to ToBoolean(value).
    // 4. If type is STRING, then
    //    a. Set value to ? ToString(value).
    let value = to_string(agent, value)?;
    // 5. If values is not EMPTY and values does not contain value, throw a
    //    RangeError exception.
    let value = value.to_string_lossy(agent).into_owned();
    let Some((_, option)) = T::VALUES.iter().find(|(name, _)| *name == value) else {
        let message = format!("Value {value} out of range for option {property}");
        return Err(agent.throw_exception(ExceptionType::RangeError, message));
    };
    // 6. Return value.
    Ok(Some(*option))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::create_data_property_or_throw, execution::Options, types::Symbol,
    };

    #[test]
    fn coerces_primitives_and_defaults() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let options = coerce_options_to_object(agent, Value::Undefined).unwrap();
            assert_eq!(agent[options].prototype, None);
            let matcher =
                get_option(agent, options, "localeMatcher", Some(LocaleMatcher::BestFit)).unwrap();
            assert_eq!(matcher, Some(LocaleMatcher::BestFit));

            let symbol = Symbol::new(agent, None).into_value();
            let wrapper = coerce_options_to_object(agent, symbol).unwrap();
            assert_eq!(wrapper.primitive_value(agent), Some(symbol));

            let error = coerce_options_to_object(agent, Value::Null).unwrap_err();
            assert!(error.to_string(agent).starts_with("TypeError"));
        });
    }

    #[test]
    fn rejects_values_outside_the_allowed_list() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let options = ordinary_object_create(agent, None);
            let key = PropertyKey::from_str(agent, "localeMatcher");
            let lookup = Value::from_str(agent, "lookup");
            create_data_property_or_throw(agent, options, key, lookup).unwrap();
            let matcher = get_option::<LocaleMatcher>(agent, options, "localeMatcher", None);
            assert_eq!(matcher.unwrap(), Some(LocaleMatcher::Lookup));

            let invalid = Value::from_str(agent, "best-fit");
            create_data_property_or_throw(agent, options, key, invalid).unwrap();
            let error =
                get_option::<LocaleMatcher>(agent, options, "localeMatcher", None).unwrap_err();
            assert_eq!(
                error.to_string(agent),
                "RangeError: Value best-fit out of range for option localeMatcher"
            );
        });
    }
}
