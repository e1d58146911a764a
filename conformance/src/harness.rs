// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rust counterparts of the test262 harness primitives (`assert.js`,
//! `sta.js` and `reportCompare`) that fixtures are written against.

use std::{cell::Cell, rc::Rc};

use intl_vm::ecmascript::{
    abstract_operations::{
        call_function, create_data_property_or_throw, get, is_callable, length_of_array_like,
        same_value, to_string,
    },
    builtins::{ArgumentsList, create_builtin_closure, ordinary_object_create},
    execution::{Agent, JsError, JsResult},
    types::{Function, Object, PropertyKey, String, Value},
};
use thiserror::Error;

/// Why a fixture did not run to completion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Test262Error {
    /// An `assert.*` check failed.
    #[error("Test262Error: {0}")]
    Assertion(std::string::String),

    /// A builtin the fixture exercises does not exist or is not callable.
    #[error("Test262Error: {path} is not a function, found {found}")]
    CapabilityMissing {
        path: std::string::String,
        found: std::string::String,
    },

    /// A JavaScript exception escaped the fixture body.
    #[error("Uncaught exception: {0}")]
    Uncaught(std::string::String),
}

impl Test262Error {
    pub fn uncaught(agent: &mut Agent, error: JsError) -> Self {
        Test262Error::Uncaught(error.to_string(agent))
    }

    /// The constructor name of an uncaught error, as far as the rendered
    /// `Name: message` form shows it.
    pub fn uncaught_error_type(&self) -> Option<&str> {
        match self {
            Test262Error::Uncaught(rendered) => {
                Some(rendered.split_once(':').map_or(rendered.as_str(), |(name, _)| name))
            }
            _ => None,
        }
    }
}

/// Lifts engine results into fixture results.
pub trait JsResultExt<T> {
    fn or_uncaught(self, agent: &mut Agent) -> Result<T, Test262Error>;
}

impl<T> JsResultExt<T> for JsResult<T> {
    fn or_uncaught(self, agent: &mut Agent) -> Result<T, Test262Error> {
        self.map_err(|error| Test262Error::uncaught(agent, error))
    }
}

/// Proof that a fixture reached its `reportCompare` call. Only
/// [`report_compare`] creates one.
#[derive(Debug)]
pub struct TestCompletion(());

/// Renders `value` the way `String(value)` does. Unlike ToString, Symbols
/// render as `Symbol(description)`.
pub fn display_value(agent: &mut Agent, value: Value) -> std::string::String {
    if let Value::Symbol(symbol) = value {
        return symbol
            .descriptive_string(agent)
            .to_string_lossy(agent)
            .into_owned();
    }
    match to_string(agent, value) {
        Ok(string) => string.to_string_lossy(agent).into_owned(),
        Err(_) => "<unprintable value>".to_string(),
    }
}

/// `assert.sameValue(actual, expected, message)`
pub fn assert_same_value(
    agent: &mut Agent,
    actual: Value,
    expected: Value,
    message: &str,
) -> Result<(), Test262Error> {
    if same_value(actual, expected) {
        return Ok(());
    }
    let actual = display_value(agent, actual);
    let expected = display_value(agent, expected);
    Err(Test262Error::Assertion(format!(
        "{message} Expected SameValue(«{actual}», «{expected}») to be true"
    )))
}

/// `assert(value, message)`
pub fn assert_true(value: bool, message: &str) -> Result<(), Test262Error> {
    if value {
        Ok(())
    } else {
        Err(Test262Error::Assertion(format!(
            "{message} Expected true but got false"
        )))
    }
}

/// `assert.throws(ErrorConstructor, func, message)`
///
/// The thrown value must be an object whose `constructor` is the global
/// constructor named `error_type` in the running realm.
pub fn assert_throws(
    agent: &mut Agent,
    error_type: &str,
    func: impl FnOnce(&mut Agent) -> JsResult<Value>,
    message: &str,
) -> Result<(), Test262Error> {
    let thrown = match func(agent) {
        Ok(_) => {
            return Err(Test262Error::Assertion(format!(
                "{message} Expected a {error_type} to be thrown but no exception was thrown at all"
            )));
        }
        Err(error) => error.value(),
    };
    let Value::Object(thrown) = thrown else {
        return Err(Test262Error::Assertion(format!(
            "{message} Thrown value was not an object!"
        )));
    };
    let expected = lookup_global(agent, &[error_type])?;
    let constructor_key = PropertyKey::from_str(agent, "constructor");
    let constructor = get(agent, thrown, constructor_key).or_uncaught(agent)?;
    if same_value(constructor, expected) {
        return Ok(());
    }
    let actual_name = match constructor {
        Value::Object(constructor) => {
            let name_key = PropertyKey::from_str(agent, "name");
            let name = get(agent, constructor, name_key).or_uncaught(agent)?;
            display_value(agent, name)
        }
        _ => display_value(agent, constructor),
    };
    if actual_name == error_type {
        Err(Test262Error::Assertion(format!(
            "{message} Expected a {error_type} but got a different error constructor with the same name"
        )))
    } else {
        Err(Test262Error::Assertion(format!(
            "{message} Expected a {error_type} but got a {actual_name}"
        )))
    }
}

/// `assert.compareArray(actual, expected, message)` for arrays of strings.
pub fn assert_compare_array(
    agent: &mut Agent,
    actual: Value,
    expected: &[&str],
    message: &str,
) -> Result<(), Test262Error> {
    let Value::Object(array) = actual else {
        let actual = display_value(agent, actual);
        return Err(Test262Error::Assertion(format!(
            "{message} Expected an array but got «{actual}»"
        )));
    };
    let len = length_of_array_like(agent, array).or_uncaught(agent)?;
    let mut elements = Vec::new();
    for index in 0..len {
        let key = u32::try_from(index)
            .map(PropertyKey::from_index)
            .map_err(|_| Test262Error::Assertion(format!("{message} Array is too long")))?;
        let element = get(agent, array, key).or_uncaught(agent)?;
        elements.push(display_value(agent, element));
    }
    if elements.iter().map(std::string::String::as_str).eq(expected.iter().copied()) {
        return Ok(());
    }
    Err(Test262Error::Assertion(format!(
        "{message} Expected [{}] and [{}] to have the same contents.",
        elements.join(", "),
        expected.join(", ")
    )))
}

/// `reportCompare(expected, actual)`, the completion signal every fixture
/// ends with.
pub fn report_compare(
    agent: &mut Agent,
    expected: Value,
    actual: Value,
) -> Result<TestCompletion, Test262Error> {
    assert_same_value(agent, actual, expected, "reportCompare:")?;
    Ok(TestCompletion(()))
}

/// Resolves a dotted path of properties starting at the global object of the
/// running realm.
pub fn lookup_global(agent: &mut Agent, path: &[&str]) -> Result<Value, Test262Error> {
    let mut current = agent
        .current_realm_id()
        .global_object(agent)
        .into_value();
    for segment in path {
        let Value::Object(object) = current else {
            return Ok(Value::Undefined);
        };
        let key = PropertyKey::from_str(agent, segment);
        current = get(agent, object, key).or_uncaught(agent)?;
    }
    Ok(current)
}

/// Resolves a builtin function such as `Intl.ListFormat.supportedLocalesOf`
/// and checks that `typeof` reports it as a function.
pub fn lookup_capability(agent: &mut Agent, path: &[&str]) -> Result<Function, Test262Error> {
    let value = lookup_global(agent, path)?;
    let type_of = value.type_of(agent).to_string_lossy(agent).into_owned();
    match is_callable(agent, value) {
        Some(function) if type_of == "function" => Ok(function),
        _ => Err(Test262Error::CapabilityMissing {
            path: path.join("."),
            found: type_of,
        }),
    }
}

/// A read counter shared between a fixture and the getter it installs.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self) {
        self.0.set(0);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Creates a getter function that counts its calls on `counter` and returns
/// `sentinel`.
pub fn counting_getter(agent: &mut Agent, counter: &CallCounter, sentinel: &str) -> Function {
    let counter = counter.clone();
    let sentinel = String::from_str(agent, sentinel).into_value();
    create_builtin_closure(agent, "get", 0, move |_, _, _| {
        counter.increment();
        Ok(sentinel)
    })
}

/// `Object.defineProperties(target, { [property]: { get: getter } })`
///
/// The descriptor objects inherit from `Object.prototype` like the object
/// literals a test262 file would write.
pub fn define_getter(
    agent: &mut Agent,
    target: Object,
    property: &str,
    getter: Function,
) -> Result<(), Test262Error> {
    let define_properties = lookup_capability(agent, &["Object", "defineProperties"])?;
    let object = lookup_global(agent, &["Object"])?;
    let object_prototype = match lookup_global(agent, &["Object", "prototype"])? {
        Value::Object(object_prototype) => Some(object_prototype),
        _ => None,
    };

    let descriptor = ordinary_object_create(agent, object_prototype);
    let get_key = PropertyKey::from_str(agent, "get");
    create_data_property_or_throw(agent, descriptor, get_key, getter.into_value())
        .or_uncaught(agent)?;
    let properties = ordinary_object_create(agent, object_prototype);
    let key = PropertyKey::from_str(agent, property);
    create_data_property_or_throw(agent, properties, key, descriptor.into_value())
        .or_uncaught(agent)?;

    let arguments = [target.into_value(), properties.into_value()];
    call_function(agent, define_properties, object, Some(ArgumentsList::new(&arguments)))
        .or_uncaught(agent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use intl_vm::ecmascript::{
        abstract_operations::{get, set, to_object},
        execution::Options,
        types::{InternalMethods, Symbol},
    };

    use super::*;

    #[test]
    fn same_value_failures_render_both_sides() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let symbol = Symbol::new(agent, None).into_value();
            let error =
                assert_same_value(agent, symbol, 1u32.into(), "Expected one call from Symbol()")
                    .unwrap_err();
            assert_eq!(
                error.to_string(),
                "Test262Error: Expected one call from Symbol() Expected SameValue(«Symbol()», «1») to be true"
            );
            assert!(assert_same_value(agent, 0u32.into(), 0u32.into(), "").is_ok());
        });
    }

    #[test]
    fn assert_throws_checks_the_constructor() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let throw_type_error =
                |agent: &mut Agent| to_object(agent, Value::Null).map(Object::into_value);
            assert!(assert_throws(agent, "TypeError", throw_type_error, "").is_ok());
            let error = assert_throws(agent, "RangeError", throw_type_error, "").unwrap_err();
            assert_eq!(
                error.to_string(),
                "Test262Error:  Expected a RangeError but got a TypeError"
            );
            let error =
                assert_throws(agent, "TypeError", |_| Ok(Value::Undefined), "").unwrap_err();
            assert!(error.to_string().contains("no exception was thrown at all"));
        });
    }

    #[test]
    fn counting_getter_counts_reads_through_the_prototype_chain() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let counter = CallCounter::new();
            let getter = counting_getter(agent, &counter, "best fit");
            let object_prototype = lookup_global(agent, &["Object", "prototype"]).unwrap();
            let Value::Object(object_prototype) = object_prototype else {
                panic!("Object.prototype is not an object");
            };
            define_getter(agent, object_prototype, "localeMatcher", getter).unwrap();

            let wrapper = to_object(agent, 7u32.into()).unwrap();
            let key = PropertyKey::from_str(agent, "localeMatcher");
            let value = get(agent, wrapper, key).unwrap();
            assert_eq!(display_value(agent, value), "best fit");
            assert_eq!(counter.count(), 1);
            counter.reset();
            assert_eq!(counter.count(), 0);
        });
    }

    #[test]
    fn getters_are_installed_through_object_define_properties() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let counter = CallCounter::new();
            let getter = counting_getter(agent, &counter, "best fit");
            let Value::Object(object_prototype) =
                lookup_global(agent, &["Object", "prototype"]).unwrap()
            else {
                panic!("Object.prototype is not an object");
            };
            define_getter(agent, object_prototype, "localeMatcher", getter).unwrap();

            let key = PropertyKey::from_str(agent, "localeMatcher");
            let descriptor = object_prototype
                .internal_get_own_property(agent, key)
                .unwrap()
                .unwrap();
            assert_eq!(descriptor.get, Some(Some(getter)));
            assert_eq!(descriptor.set, Some(None));
            assert_eq!(descriptor.enumerable, Some(false));
            assert_eq!(descriptor.configurable, Some(false));
            assert_eq!(counter.count(), 0);

            // Without the builtin there is nothing to install the getter with.
            let Value::Object(object) = lookup_global(agent, &["Object"]).unwrap() else {
                panic!("Object is not an object");
            };
            let define_properties = PropertyKey::from_str(agent, "defineProperties");
            set(agent, object, define_properties, Value::Undefined, true).unwrap();
            let target = ordinary_object_create(agent, None);
            let error = define_getter(agent, target, "localeMatcher", getter).unwrap_err();
            assert_eq!(
                error,
                Test262Error::CapabilityMissing {
                    path: "Object.defineProperties".to_string(),
                    found: "undefined".to_string(),
                }
            );
        });
    }

    #[test]
    fn missing_capabilities_are_reported() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            assert!(lookup_capability(agent, &["Intl", "getCanonicalLocales"]).is_ok());
            let error = lookup_capability(agent, &["Intl", "Segmenter", "supportedLocalesOf"])
                .unwrap_err();
            assert_eq!(
                error,
                Test262Error::CapabilityMissing {
                    path: "Intl.Segmenter.supportedLocalesOf".to_string(),
                    found: "undefined".to_string(),
                }
            );
            let report = report_compare(agent, 0u32.into(), 1u32.into());
            assert!(report.is_err());
        });
    }
}
