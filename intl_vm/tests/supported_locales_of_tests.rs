// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, rc::Rc};

use intl_vm::ecmascript::{
    abstract_operations::{
        call_function, create_array_from_list, define_property_or_throw, get, is_array,
        length_of_array_like, to_string,
    },
    builtins::{ArgumentsList, create_builtin_closure},
    execution::{Agent, Options},
    types::{Function, Object, PropertyDescriptor, PropertyKey, String as JsString, Symbol, Value},
};

fn global(agent: &mut Agent, path: &[&str]) -> Value {
    let mut current = agent.current_realm_id().global_object(agent).into_value();
    for segment in path {
        let Value::Object(object) = current else {
            panic!("{segment} is not reachable");
        };
        let key = PropertyKey::from_str(agent, segment);
        current = get(agent, object, key).unwrap();
    }
    current
}

fn supported_locales_of(agent: &mut Agent) -> Function {
    let Value::Object(function) = global(agent, &["Intl", "ListFormat", "supportedLocalesOf"])
    else {
        panic!("supportedLocalesOf is not an object");
    };
    function.as_function(agent).unwrap()
}

fn strings(agent: &mut Agent, array: Value) -> Vec<String> {
    let Value::Object(array) = array else {
        panic!("not an array");
    };
    let len = length_of_array_like(agent, array).unwrap();
    (0..len as u32)
        .map(|index| {
            let element = get(agent, array, PropertyKey::from_index(index)).unwrap();
            let element = to_string(agent, element).unwrap();
            element.to_string_lossy(agent).into_owned()
        })
        .collect()
}

fn call(agent: &mut Agent, function: Function, arguments: &[Value]) -> Value {
    call_function(agent, function, Value::Undefined, Some(ArgumentsList::new(arguments))).unwrap()
}

/// Installs a counting `localeMatcher` getter on `target`.
fn count_locale_matcher_reads(agent: &mut Agent, target: Object) -> Rc<Cell<u32>> {
    let reads = Rc::new(Cell::new(0));
    let counter = reads.clone();
    let best_fit = JsString::from_str(agent, "best fit").into_value();
    let getter = create_builtin_closure(agent, "get", 0, move |_, _, _| {
        counter.set(counter.get() + 1);
        Ok(best_fit)
    });
    let key = PropertyKey::from_str(agent, "localeMatcher");
    let descriptor = PropertyDescriptor {
        get: Some(Some(getter)),
        configurable: Some(true),
        ..Default::default()
    };
    define_property_or_throw(agent, target, key, descriptor).unwrap();
    reads
}

#[test]
fn primitive_options_are_coerced_and_read_once() {
    let mut agent = Agent::new(Options::default());
    let realm = agent.create_realm();
    agent.run_in_realm(realm, |agent| {
        let function = supported_locales_of(agent);
        let Value::Object(object_prototype) = global(agent, &["Object", "prototype"]) else {
            panic!("Object.prototype is not an object");
        };
        let reads = count_locale_matcher_reads(agent, object_prototype);

        let test = Value::from_str(agent, "test");
        let symbol = Symbol::new(agent, None).into_value();
        for options in [Value::from(true), test, Value::from(7u32), symbol] {
            reads.set(0);
            let locales = create_array_from_list(agent, &[]).into_value();
            let arguments = [locales, options];
            let result = call(agent, function, &arguments);
            assert!(is_array(agent, result).unwrap());
            assert_eq!(reads.get(), 1);
        }

        reads.set(0);
        let locales = create_array_from_list(agent, &[]).into_value();
        let arguments = [locales, Value::Undefined];
        call(agent, function, &arguments);
        assert_eq!(reads.get(), 0);
    });
}

#[test]
fn realms_do_not_share_instrumentation() {
    let mut agent = Agent::new(Options::default());
    let instrumented = agent.create_realm();
    let clean = agent.create_realm();
    let reads = agent.run_in_realm(instrumented, |agent| {
        let Value::Object(object_prototype) = global(agent, &["Object", "prototype"]) else {
            panic!("Object.prototype is not an object");
        };
        count_locale_matcher_reads(agent, object_prototype)
    });
    agent.run_in_realm(clean, |agent| {
        let function = supported_locales_of(agent);
        let en = Value::from_str(agent, "EN-us");
        let arguments = [en, Value::from(7u32)];
        let result = call(agent, function, &arguments);
        assert_eq!(strings(agent, result), ["en-US"]);
    });
    assert_eq!(reads.get(), 0);
}

#[test]
fn lookup_keeps_requested_locales_with_available_prefixes() {
    let mut agent = Agent::new(Options::default());
    let realm = agent.create_realm();
    agent.run_in_realm(realm, |agent| {
        let function = supported_locales_of(agent);
        let requested: Vec<Value> = ["zh-hant-tw", "de-AT-u-co-phonebk", "tlh", "en-GB"]
            .into_iter()
            .map(|locale| Value::from_str(agent, locale))
            .collect();
        let locales = create_array_from_list(agent, &requested).into_value();
        let arguments = [locales];
        let result = call(agent, function, &arguments);
        assert_eq!(
            strings(agent, result),
            ["zh-Hant-TW", "de-AT-u-co-phonebk", "en-GB"]
        );
    });
}

#[test]
fn supported_locales_are_returned_in_canonical_syntax() {
    let mut agent = Agent::new(Options::default());
    let realm = agent.create_realm();
    agent.run_in_realm(realm, |agent| {
        let function = supported_locales_of(agent);
        let requested: Vec<Value> = [
            "EN-us-u-nu-latn-ca-gregory",
            "de-rozaj-biske-1994",
            "fr-b-bb-a-aa-x-zz",
            "ja-u-kn-true",
        ]
        .into_iter()
        .map(|locale| Value::from_str(agent, locale))
        .collect();
        let locales = create_array_from_list(agent, &requested).into_value();
        let arguments = [locales];
        let result = call(agent, function, &arguments);
        assert_eq!(
            strings(agent, result),
            [
                "en-US-u-ca-gregory-nu-latn",
                "de-1994-biske-rozaj",
                "fr-a-aa-b-bb-x-zz",
                "ja-u-kn",
            ]
        );
    });
}
