// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The registered conformance fixtures. Each fixture carries the path it
//! would have in the test262 tree, its frontmatter and a body that runs
//! against a fresh realm.

use intl_vm::ecmascript::{
    abstract_operations::{
        call_function, create_array_from_list, create_data_property_or_throw, has_own_property,
        is_array,
    },
    builtins::{ArgumentsList, ordinary_object_create},
    execution::{Agent, JsResult},
    types::{Function, Object, PropertyKey, Symbol, Value},
};

use crate::harness::{
    CallCounter, JsResultExt, Test262Error, TestCompletion, assert_compare_array,
    assert_same_value, assert_throws, assert_true, counting_getter, define_getter,
    display_value, lookup_capability, lookup_global, report_compare,
};

pub type FixtureBody = fn(&mut Agent) -> Result<TestCompletion, Test262Error>;

#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Path relative to the test262 `test` directory.
    pub path: &'static str,
    /// The YAML frontmatter.
    pub metadata: &'static str,
    pub body: FixtureBody,
}

pub static FIXTURES: &[Fixture] = &[
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/options-toobject.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: Checks handling of non-object options arguments to the supportedLocalesOf function.
info: |
    SupportedLocales ( availableLocales, requestedLocales, options )

    1. If options is not undefined, then
        a. Let options be ? ToObject(options).
features: [Intl.ListFormat]
"#,
        body: options_toobject,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/options-undefined.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks that undefined options are not read from Object.prototype.
info: |
    CoerceOptionsToObject ( options )

    1. If options is undefined, then
        a. Return OrdinaryObjectCreate(null).
features: [Intl.ListFormat]
"#,
        body: options_undefined,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/options-own-accessor.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks that the localeMatcher option is read exactly once from the options object.
info: |
    SupportedLocales ( availableLocales, requestedLocales, options )

    2. Let matcher be ? GetOption(options, "localeMatcher", string,
       « "lookup", "best fit" », "best fit").
features: [Intl.ListFormat]
"#,
        body: options_own_accessor,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/options-null.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks handling of a null options argument to the supportedLocalesOf function.
info: |
    CoerceOptionsToObject ( options )

    2. Return ? ToObject(options).
features: [Intl.ListFormat]
"#,
        body: options_null,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/options-localeMatcher-invalid.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks handling of invalid values for the localeMatcher option to the
    supportedLocalesOf function.
info: |
    GetOption ( options, property, type, values, default )

    5. If values is not empty and values does not contain value, throw a RangeError exception.
features: [Intl.ListFormat]
"#,
        body: options_locale_matcher_invalid,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/locales-canonicalized.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks that requested locales are canonicalized, deduplicated and filtered.
info: |
    Intl.ListFormat.supportedLocalesOf ( locales [, options ] )

    2. Let requestedLocales be ? CanonicalizeLocaleList(locales).
    3. Return ? SupportedLocales(availableLocales, requestedLocales, options).
includes: [compareArray.js]
features: [Intl.ListFormat]
"#,
        body: locales_canonicalized,
    },
    Fixture {
        path: "intl402/ListFormat/constructor/supportedLocalesOf/locales-invalid-tag.js",
        metadata: r#"
esid: sec-Intl.ListFormat.supportedLocalesOf
description: >
    Checks error cases for the locales argument to the supportedLocalesOf function.
info: |
    CanonicalizeLocaleList ( locales )

    7.c.ii. If kValue is not a String and kValue is not an Object, throw a TypeError exception.
    7.c.v. If IsStructurallyValidLanguageTag(tag) is false, throw a RangeError exception.
features: [Intl.ListFormat]
"#,
        body: locales_invalid_tag,
    },
    Fixture {
        path: "intl402/Intl/getCanonicalLocales/canonicalized-tags.js",
        metadata: r#"
esid: sec-intl.getcanonicallocales
description: >
    Checks that Intl.getCanonicalLocales returns canonicalized tags: subtag
    case, variant order, extension order and Unicode keyword order.
info: |
    CanonicalizeLocaleList ( locales )

    7.c.vii. Let canonicalizedTag be CanonicalizeUnicodeLocaleId(tag).
includes: [compareArray.js]
features: [Intl.getCanonicalLocales]
"#,
        body: get_canonical_locales_canonicalized_tags,
    },
];

/// Looks a fixture up by its test262 path.
pub fn find(path: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|fixture| fixture.path == path)
}

const SUPPORTED_LOCALES_OF: &[&str] = &["Intl", "ListFormat", "supportedLocalesOf"];

fn object_prototype(agent: &mut Agent) -> Result<Object, Test262Error> {
    match lookup_global(agent, &["Object", "prototype"])? {
        Value::Object(object) => Ok(object),
        other => Err(Test262Error::Assertion(format!(
            "Object.prototype is not an object: {}",
            display_value(agent, other)
        ))),
    }
}

/// `Intl.ListFormat.supportedLocalesOf(...arguments)`
fn supported_locales_of(
    agent: &mut Agent,
    function: Function,
    arguments: &[Value],
) -> JsResult<Value> {
    let list_format = lookup_global(agent, &["Intl", "ListFormat"]).unwrap_or(Value::Undefined);
    call_function(agent, function, list_format, Some(ArgumentsList::new(arguments)))
}

fn empty_array(agent: &mut Agent) -> Value {
    create_array_from_list(agent, &[]).into_value()
}

fn assert_is_array(agent: &mut Agent, value: Value, message: &str) -> Result<(), Test262Error> {
    let is_array = is_array(agent, value).or_uncaught(agent)?;
    assert_same_value(agent, is_array.into(), true.into(), message)
}

fn assert_count(
    agent: &mut Agent,
    counter: &CallCounter,
    expected: u32,
    message: &str,
) -> Result<(), Test262Error> {
    let count = Value::from(counter.count() as f64);
    assert_same_value(agent, count, expected.into(), message)
}

fn options_toobject(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;

    let counter = CallCounter::new();
    let getter = counting_getter(agent, &counter, "best fit");
    let object_prototype = object_prototype(agent)?;
    define_getter(agent, object_prototype, "localeMatcher", getter)?;

    let test = Value::from_str(agent, "test");
    let symbol = Symbol::new(agent, None).into_value();
    for options in [Value::from(true), test, Value::from(7u32), symbol] {
        counter.reset();
        let locales = empty_array(agent);
        let result = supported_locales_of(agent, function, &[locales, options]).or_uncaught(agent)?;
        let sample = display_value(agent, options);
        assert_is_array(agent, result, &format!("Expected array from {sample}"))?;
        assert_count(agent, &counter, 1, &format!("Expected one call from {sample}"))?;
    }

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn options_undefined(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;

    let counter = CallCounter::new();
    let getter = counting_getter(agent, &counter, "best fit");
    let object_prototype = object_prototype(agent)?;
    define_getter(agent, object_prototype, "localeMatcher", getter)?;

    let locales = empty_array(agent);
    let result = supported_locales_of(agent, function, &[locales, Value::Undefined])
        .or_uncaught(agent)?;
    assert_is_array(agent, result, "Expected array from undefined")?;
    assert_count(agent, &counter, 0, "Expected no calls from undefined")?;

    let locales = empty_array(agent);
    let result = supported_locales_of(agent, function, &[locales]).or_uncaught(agent)?;
    assert_is_array(agent, result, "Expected array without options")?;
    assert_count(agent, &counter, 0, "Expected no calls without options")?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn options_own_accessor(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;
    let object_prototype = object_prototype(agent)?;

    for matcher in ["lookup", "best fit"] {
        let counter = CallCounter::new();
        let getter = counting_getter(agent, &counter, matcher);
        let options = ordinary_object_create(agent, Some(object_prototype));
        define_getter(agent, options, "localeMatcher", getter)?;
        // Repeated calls each read the option once.
        for _ in 0..3 {
            counter.reset();
            let locales = Value::from_str(agent, "en-US");
            let result = supported_locales_of(agent, function, &[locales, options.into_value()])
                .or_uncaught(agent)?;
            assert_compare_array(agent, result, &["en-US"], &format!("Using {matcher}"))?;
            assert_count(agent, &counter, 1, &format!("Expected one call using {matcher}"))?;
        }
    }

    let key = PropertyKey::from_str(agent, "localeMatcher");
    let leaked = has_own_property(agent, object_prototype, key).or_uncaught(agent)?;
    assert_true(!leaked, "Object.prototype must not be modified.")?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn options_null(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;

    let counter = CallCounter::new();
    let getter = counting_getter(agent, &counter, "best fit");
    let object_prototype = object_prototype(agent)?;
    define_getter(agent, object_prototype, "localeMatcher", getter)?;

    assert_throws(
        agent,
        "TypeError",
        |agent| {
            let locales = empty_array(agent);
            supported_locales_of(agent, function, &[locales, Value::Null])
        },
        "Should throw when passed null as options.",
    )?;
    assert_count(agent, &counter, 0, "Expected no calls from null")?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn options_locale_matcher_invalid(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;
    let key = PropertyKey::from_str(agent, "localeMatcher");

    let invalid_values = [
        Value::Null,
        Value::from_str(agent, ""),
        Value::from_str(agent, "Lookup"),
        Value::from_str(agent, "LOOKUP"),
        Value::from_str(agent, "lookup\0"),
        Value::from_str(agent, "Best fit"),
        Value::from_str(agent, "best-fit"),
        Value::from_str(agent, "bestfit"),
        Value::from(7u32),
        Value::from(false),
    ];
    for invalid in invalid_values {
        let options = ordinary_object_create(agent, None);
        create_data_property_or_throw(agent, options, key, invalid).or_uncaught(agent)?;
        let sample = display_value(agent, invalid);
        let arguments = [Value::Undefined, options.into_value()];
        assert_throws(
            agent,
            "RangeError",
            |agent| supported_locales_of(agent, function, &arguments),
            &format!("Invalid localeMatcher value: {sample}"),
        )?;
    }

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn locales_canonicalized(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;

    let requested = ["EN-us", "en-US", "de-u-co-phonebk", "tlh", "zh-hant-tw", "FR-x-Private"];
    let requested: Vec<Value> = requested
        .iter()
        .map(|locale| Value::from_str(agent, locale))
        .collect();
    let locales = create_array_from_list(agent, &requested).into_value();
    let result = supported_locales_of(agent, function, &[locales]).or_uncaught(agent)?;
    assert_compare_array(
        agent,
        result,
        &["en-US", "de-u-co-phonebk", "zh-Hant-TW", "fr-x-private"],
        "Supported locales are canonicalized and unsupported ones dropped.",
    )?;

    let locales = Value::from_str(agent, "EN-gb");
    let result = supported_locales_of(agent, function, &[locales]).or_uncaught(agent)?;
    assert_compare_array(agent, result, &["en-GB"], "A single String is a locale list.")?;

    let result = supported_locales_of(agent, function, &[]).or_uncaught(agent)?;
    assert_compare_array(agent, result, &[], "Undefined locales are an empty list.")?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn locales_invalid_tag(agent: &mut Agent) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, SUPPORTED_LOCALES_OF)?;

    for tag in ["", "en_US", "i", "x-private", "de-DE-1996-1996", "en-u-ca-u-nu", "root"] {
        let tag_value = Value::from_str(agent, tag);
        let locales = create_array_from_list(agent, &[tag_value]).into_value();
        assert_throws(
            agent,
            "RangeError",
            |agent| supported_locales_of(agent, function, &[locales]),
            &format!("Invalid language tag: {tag:?}"),
        )?;
    }

    for element in [Value::Null, Value::from(true), Value::from(7u32)] {
        let locales = create_array_from_list(agent, &[element]).into_value();
        let sample = display_value(agent, element);
        assert_throws(
            agent,
            "TypeError",
            |agent| supported_locales_of(agent, function, &[locales]),
            &format!("Locale list element: {sample}"),
        )?;
    }

    assert_throws(
        agent,
        "TypeError",
        |agent| supported_locales_of(agent, function, &[Value::Null]),
        "Null locales cannot be converted to an object.",
    )?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

fn get_canonical_locales_canonicalized_tags(
    agent: &mut Agent,
) -> Result<TestCompletion, Test262Error> {
    let function = lookup_capability(agent, &["Intl", "getCanonicalLocales"])?;
    let intl = lookup_global(agent, &["Intl"])?;

    let canonicalized_tags = [
        ("de", "de"),
        ("DE-de", "de-DE"),
        ("de-DE", "de-DE"),
        ("es-419", "es-419"),
        ("es-419-u-nu-latn", "es-419-u-nu-latn"),
        ("zh-hans-cn-u-ca-t-ca-x-t-u", "zh-Hans-CN-t-ca-u-ca-x-t-u"),
        ("de-gregory-u-ca-gregory", "de-gregory-u-ca-gregory"),
        ("sr-cyrl-ekavsk", "sr-Cyrl-ekavsk"),
        ("en-ca-newfound", "en-CA-newfound"),
        ("sl-rozaj-biske-1994", "sl-1994-biske-rozaj"),
        ("da-u-attr", "da-u-attr"),
        ("da-u-attr-co-search", "da-u-attr-co-search"),
        ("en-u-nu-latn-ca-gregory", "en-u-ca-gregory-nu-latn"),
        ("en-u-ca-true", "en-u-ca"),
    ];
    for (tag, canonical) in canonicalized_tags {
        let arguments = [Value::from_str(agent, tag)];
        let result = call_function(agent, function, intl, Some(ArgumentsList::new(&arguments)))
            .or_uncaught(agent)?;
        assert_compare_array(agent, result, &[canonical], tag)?;
    }

    // Duplicates are detected after canonicalization.
    let duplicates: Vec<Value> = ["EN-us", "en-US", "sl-biske-rozaj", "SL-ROZAJ-BISKE"]
        .iter()
        .map(|locale| Value::from_str(agent, locale))
        .collect();
    let locales = create_array_from_list(agent, &duplicates).into_value();
    let arguments = [locales];
    let result = call_function(agent, function, intl, Some(ArgumentsList::new(&arguments)))
        .or_uncaught(agent)?;
    assert_compare_array(
        agent,
        result,
        &["en-US", "sl-biske-rozaj"],
        "Canonically equal tags are returned once.",
    )?;

    report_compare(agent, 0u32.into(), 0u32.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata;

    #[test]
    fn fixture_paths_are_unique_test_files() {
        for (i, fixture) in FIXTURES.iter().enumerate() {
            assert!(fixture.path.ends_with(".js"), "{}", fixture.path);
            assert!(
                FIXTURES[..i].iter().all(|other| other.path != fixture.path),
                "{}",
                fixture.path
            );
            assert!(find(fixture.path).is_some());
        }
    }

    #[test]
    fn fixture_metadata_parses() {
        for fixture in FIXTURES {
            let metadata = metadata::parse(fixture.metadata).unwrap();
            assert!(metadata.esid.is_some(), "{}", fixture.path);
            assert!(metadata.description.is_some(), "{}", fixture.path);
            assert!(!metadata.features.is_empty(), "{}", fixture.path);
        }
    }
}
