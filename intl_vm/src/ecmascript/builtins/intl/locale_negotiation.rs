// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [9.2 Abstract Operations](https://tc39.es/ecma402/#sec-abstract-operations)
//!
//! Locale list canonicalisation and the lookup matcher. There is no locale
//! data to back a distinct "best fit" matcher, so both matchers run the
//! lookup algorithm.

use super::{
    language_tags::{
        canonicalize_unicode_locale_id, is_structurally_valid_language_tag,
        remove_unicode_extensions,
    },
    options::{LocaleMatcher, coerce_options_to_object, get_option},
};
use crate::ecmascript::{
    abstract_operations::{
        create_array_from_list, get, has_property, length_of_array_like, to_object, to_string,
    },
    execution::{Agent, JsResult, agent::ExceptionType},
    types::{Object, PropertyKey, String, Value},
};

/// ### [9.2.1 CanonicalizeLocaleList ( locales )](https://tc39.es/ecma402/#sec-canonicalizelocalelist)
///
/// The abstract operation CanonicalizeLocaleList takes argument locales (an
/// ECMAScript language value) and returns either a normal completion
/// containing a List of Strings or a throw completion.
pub(crate) fn canonicalize_locale_list(
    agent: &mut Agent,
    locales: Value,
) -> JsResult<Vec<std::string::String>> {
    // 1. If locales is undefined, then
    if locales.is_undefined() {
        // a. Return a new empty List.
        return Ok(Vec::new());
    }
    // 2. Let seen be a new empty List.
    let mut seen: Vec<std::string::String> = Vec::new();
    // 3. If locales is a String or locales is an Object and locales has an
    //    [[InitializedLocale]] internal slot, then
    let o = if locales.is_string() {
        // a. Let O be CreateArrayFromList(« locales »).
        create_array_from_list(agent, &[locales])
    } else {
        // 4. Else,
        // a. Let O be ? ToObject(locales).
        to_object(agent, locales)?
    };
    // 5. Let len be ? LengthOfArrayLike(O).
    let len = length_of_array_like(agent, o)?;
    // 6. Let k be 0.
    // 7. Repeat, while k < len,
    for k in 0..len {
        // a. Let Pk be ! ToString(𝔽(k)).
        let pk = index_key(agent, k);
        // b. Let kPresent be ? HasProperty(O, Pk).
        // c. If kPresent is true, then
        if !has_property(agent, o, pk)? {
            continue;
        }
        // i. Let kValue be ? Get(O, Pk).
        let k_value = get(agent, o, pk)?;
        // ii. If kValue is not a String and kValue is not an Object, throw a
        //     TypeError exception.
        if !k_value.is_string() && !k_value.is_object() {
            let message = format!(
                "Locale list elements must be strings or objects, got {}",
                type_name(k_value)
            );
            return Err(agent.throw_exception(ExceptionType::TypeError, message));
        }
        // iii. If kValue is an Object and kValue has an [[InitializedLocale]]
        //      internal slot, then
        //      1. Let tag be kValue.[[Locale]].
        // iv. Else,
        //     1. Let tag be ? ToString(kValue).
        let tag = to_string(agent, k_value)?;
        let tag = tag.to_string_lossy(agent).into_owned();
        // v. If IsStructurallyValidLanguageTag(tag) is false, throw a
        //    RangeError exception.
        if !is_structurally_valid_language_tag(&tag) {
            let message = format!("Incorrect locale information provided: {tag}");
            return Err(agent.throw_exception(ExceptionType::RangeError, message));
        }
        // vi. Let canonicalizedTag be CanonicalizeUnicodeLocaleId(tag).
        let canonicalized_tag = canonicalize_unicode_locale_id(&tag);
        // vii. If seen does not contain canonicalizedTag, append
        //      canonicalizedTag to seen.
        if !seen.contains(&canonicalized_tag) {
            seen.push(canonicalized_tag);
        }
        // d. Set k to k + 1.
    }
    // 8. Return seen.
    Ok(seen)
}

/// `! ToString(𝔽(k))` as a property key. Array-like lengths go up to
/// `2**53 - 1`, past the last array index.
fn index_key(agent: &mut Agent, k: u64) -> PropertyKey {
    match u32::try_from(k) {
        Ok(index) if index < u32::MAX => PropertyKey::from_index(index),
        _ => PropertyKey::from_str(agent, &k.to_string()),
    }
}

fn type_name(value: Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::Symbol(_) => "symbol",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}

/// ### [9.2.2 BestAvailableLocale ( availableLocales, locale )](https://tc39.es/ecma402/#sec-bestavailablelocale)
///
/// The abstract operation BestAvailableLocale takes arguments
/// availableLocales (an Available Locales List) and locale (a language tag)
/// and returns either a language tag or undefined. It compares the provided
/// argument locale, which must be a String value with a structurally valid
/// and canonicalized Unicode BCP 47 locale identifier, against the locales in
/// availableLocales and returns either the longest non-empty prefix of locale
/// that is an element of availableLocales, or undefined if there is no such
/// element.
pub(crate) fn best_available_locale<'a>(
    available_locales: &[&'a str],
    locale: &str,
) -> Option<&'a str> {
    // 1. Let candidate be locale.
    let mut candidate = locale;
    // 2. Repeat,
    loop {
        // a. If availableLocales contains candidate, return candidate.
        if let Some(available) = available_locales.iter().find(|a| **a == candidate) {
            return Some(*available);
        }
        // b. Let pos be the character index of the last occurrence of "-"
        //    (U+002D) within candidate. If that character does not occur,
        //    return undefined.
        let mut pos = candidate.rfind('-')?;
        // c. If pos ≥ 2 and the character "-" occurs at index pos - 2 of
        //    candidate, decrease pos by 2.
        if pos >= 2 && candidate.as_bytes()[pos - 2] == b'-' {
            pos -= 2;
        }
        // d. Let candidate be the substring of candidate from 0 to pos.
        candidate = &candidate[..pos];
    }
}

/// ### [9.2.7 LookupSupportedLocales ( availableLocales, requestedLocales )](https://tc39.es/ecma402/#sec-lookupsupportedlocales)
///
/// The abstract operation LookupSupportedLocales takes arguments
/// availableLocales (an Available Locales List) and requestedLocales (a
/// Language Priority List) and returns a List of Unicode canonicalized locale
/// identifiers. The returned List contains the elements of requestedLocales
/// for which the lookup matcher finds a match in availableLocales.
pub(crate) fn lookup_supported_locales(
    available_locales: &[&str],
    requested_locales: Vec<std::string::String>,
) -> Vec<std::string::String> {
    // 1. Let subset be a new empty List.
    // 2. For each element locale of requestedLocales, do
    //    a. Let noExtensionsLocale be the String value that is locale with
    //       any Unicode locale extension sequences removed.
    //    b. Let availableLocale be BestAvailableLocale(availableLocales,
    //       noExtensionsLocale).
    //    c. If availableLocale is not undefined, append locale to the end of
    //       subset.
    // 3. Return subset.
    requested_locales
        .into_iter()
        .filter(|locale| {
            let no_extensions_locale = remove_unicode_extensions(locale);
            best_available_locale(available_locales, &no_extensions_locale).is_some()
        })
        .collect()
}

/// ### [9.2.8 BestFitSupportedLocales ( availableLocales, requestedLocales )](https://tc39.es/ecma402/#sec-bestfitsupportedlocales)
///
/// The best fit matcher is implementation-defined. Without locale data to
/// rank candidates this is the lookup matcher.
pub(crate) fn best_fit_supported_locales(
    available_locales: &[&str],
    requested_locales: Vec<std::string::String>,
) -> Vec<std::string::String> {
    lookup_supported_locales(available_locales, requested_locales)
}

/// ### [9.2.10 SupportedLocales ( availableLocales, requestedLocales, options )](https://tc39.es/ecma402/#sec-supportedlocales)
///
/// The abstract operation SupportedLocales takes arguments availableLocales
/// (an Available Locales List), requestedLocales (a Language Priority List),
/// and options (an ECMAScript language value) and returns either a normal
/// completion containing an Array or a throw completion. It determines the
/// subset of requestedLocales for which availableLocales has a match.
pub(crate) fn supported_locales(
    agent: &mut Agent,
    available_locales: &[&str],
    requested_locales: Vec<std::string::String>,
    options: Value,
) -> JsResult<Object> {
    // 1. Set options to ? CoerceOptionsToObject(options).
    let options = coerce_options_to_object(agent, options)?;
    // 2. Let matcher be ? GetOption(options, "localeMatcher", STRING,
    //    « "lookup", "best fit" », "best fit").
    let matcher = get_option(agent, options, "localeMatcher", Some(LocaleMatcher::BestFit))?;
    // 3. If matcher is "best fit", then
    //    a. Let MatcherOperation be the abstract operation
    //       BestFitSupportedLocales.
    // 4. Else,
    //    a. Let MatcherOperation be the abstract operation
    //       LookupSupportedLocales.
    // 5. Let supportedLocales be MatcherOperation(availableLocales,
    //    requestedLocales).
    let supported = match matcher.unwrap_or(LocaleMatcher::BestFit) {
        LocaleMatcher::BestFit => best_fit_supported_locales(available_locales, requested_locales),
        LocaleMatcher::Lookup => lookup_supported_locales(available_locales, requested_locales),
    };
    // 6. Return CreateArrayFromList(supportedLocales).
    let supported: Vec<Value> = supported
        .into_iter()
        .map(|locale| String::from_string(agent, locale).into_value())
        .collect();
    Ok(create_array_from_list(agent, &supported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::Options;

    const AVAILABLE: &[&str] = &["de", "en", "en-US", "zh-Hant"];

    #[test]
    fn best_available_locale_truncates_from_the_right() {
        assert_eq!(best_available_locale(AVAILABLE, "en-US"), Some("en-US"));
        assert_eq!(best_available_locale(AVAILABLE, "en-GB"), Some("en"));
        assert_eq!(best_available_locale(AVAILABLE, "zh-Hant-TW"), Some("zh-Hant"));
        assert_eq!(best_available_locale(AVAILABLE, "de-CH-1996"), Some("de"));
        assert_eq!(best_available_locale(AVAILABLE, "fr-FR"), None);
    }

    #[test]
    fn lookup_keeps_extensions_of_supported_locales() {
        let requested = vec![
            "de-u-co-phonebk".to_string(),
            "fr".to_string(),
            "en-GB".to_string(),
        ];
        assert_eq!(
            lookup_supported_locales(AVAILABLE, requested),
            ["de-u-co-phonebk", "en-GB"]
        );
    }

    #[test]
    fn canonicalize_locale_list_accepts_strings_and_array_likes() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            assert!(canonicalize_locale_list(agent, Value::Undefined).unwrap().is_empty());
            let single = Value::from_str(agent, "EN-us");
            assert_eq!(canonicalize_locale_list(agent, single).unwrap(), ["en-US"]);

            let de = Value::from_str(agent, "de");
            let de_upper = Value::from_str(agent, "DE");
            let list = create_array_from_list(agent, &[de, de_upper]);
            let locales = canonicalize_locale_list(agent, list.into_value()).unwrap();
            assert_eq!(locales, ["de"]);

            // Primitives other than strings are wrapped and have no length.
            assert!(canonicalize_locale_list(agent, Value::Number(7.0)).unwrap().is_empty());

            let list = create_array_from_list(agent, &[Value::Boolean(true)]);
            let error = canonicalize_locale_list(agent, list.into_value()).unwrap_err();
            assert!(error.to_string(agent).starts_with("TypeError"));

            let invalid = Value::from_str(agent, "en_US");
            let error = canonicalize_locale_list(agent, invalid).unwrap_err();
            assert_eq!(
                error.to_string(agent),
                "RangeError: Incorrect locale information provided: en_US"
            );
        });
    }
}
