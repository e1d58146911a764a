// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [6.2 Language Tags](https://tc39.es/ecma402/#sec-language-tags)
//!
//! Language tags are Unicode BCP 47 locale identifiers as defined by
//! [UTS #35](https://unicode.org/reports/tr35/#Unicode_locale_identifier),
//! restricted to the `-` separator and without the `root` form.

use std::sync::LazyLock;

use regex::Regex;

const ALPHA: &str = "[A-Za-z]";
const DIGIT: &str = "[0-9]";
const ALPHANUM: &str = "[0-9A-Za-z]";

/// Matches the `unicode_locale_id` production.
static UNICODE_LOCALE_ID: LazyLock<Regex> = LazyLock::new(|| {
    let language = format!("(?:{ALPHA}{{2,3}}|{ALPHA}{{5,8}})");
    let script = format!("{ALPHA}{{4}}");
    let region = format!("(?:{ALPHA}{{2}}|{DIGIT}{{3}})");
    let variant = format!("(?:{ALPHANUM}{{5,8}}|{DIGIT}{ALPHANUM}{{3}})");
    let language_id = format!("{language}(?:-{script})?(?:-{region})?(?:-{variant})*");

    let keyword = format!("{ALPHANUM}{ALPHA}(?:-{ALPHANUM}{{3,8}})*");
    let attribute = format!("{ALPHANUM}{{3,8}}");
    let unicode_extension =
        format!("[uU](?:(?:-{keyword})+|(?:-{attribute})+(?:-{keyword})*)");
    let tfield = format!("{ALPHA}{DIGIT}(?:-{ALPHANUM}{{3,8}})+");
    let transformed_extension = format!("[tT](?:-{language_id}(?:-{tfield})*|(?:-{tfield})+)");
    let other_extension = format!("[0-9A-SV-WYZa-sv-wyz](?:-{ALPHANUM}{{2,8}})+");
    let private_use = format!("[xX](?:-{ALPHANUM}{{1,8}})+");

    let extension = format!("(?:{unicode_extension}|{transformed_extension}|{other_extension})");
    let pattern = format!("^{language_id}(?:-{extension})*(?:-{private_use})?$");
    Regex::new(&pattern).expect("unicode_locale_id pattern is valid")
});

/// A structurally valid language tag split into its subtags.
struct LanguageTag<'a> {
    language: &'a str,
    script: Option<&'a str>,
    region: Option<&'a str>,
    variants: Vec<&'a str>,
    /// Extension singletons each followed by their subtags, in source order.
    /// A private use sequence, if any, is the last entry.
    extensions: Vec<&'a [&'a str]>,
}

/// Consumes the first subtag of `rest` if `accept` holds for it.
fn take_subtag<'a>(rest: &mut &'a [&'a str], accept: fn(&str) -> bool) -> Option<&'a str> {
    match rest.split_first() {
        Some((subtag, tail)) if accept(subtag) => {
            *rest = tail;
            Some(*subtag)
        }
        _ => None,
    }
}

fn is_alpha(subtag: &str) -> bool {
    subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_digit(subtag: &str) -> bool {
    subtag.bytes().all(|b| b.is_ascii_digit())
}

impl<'a> LanguageTag<'a> {
    /// Splits a tag that already matched [`UNICODE_LOCALE_ID`].
    fn split(subtags: &'a [&'a str]) -> Self {
        let mut rest = subtags;
        let (language, tail) = rest.split_first().map_or(("", rest), |(l, t)| (*l, t));
        rest = tail;
        let script = take_subtag(&mut rest, |s| s.len() == 4 && is_alpha(s));
        let region = take_subtag(&mut rest, |s| {
            (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && is_digit(s))
        });
        let mut variants = Vec::new();
        while let Some(variant) = take_subtag(&mut rest, |s| s.len() >= 4) {
            variants.push(variant);
        }
        let mut extensions = Vec::new();
        while !rest.is_empty() {
            // Private use swallows everything after its singleton.
            let end = if rest[0].eq_ignore_ascii_case("x") {
                rest.len()
            } else {
                rest[1..]
                    .iter()
                    .position(|subtag| subtag.len() == 1)
                    .map_or(rest.len(), |position| position + 1)
            };
            extensions.push(&rest[..end]);
            rest = &rest[end..];
        }
        Self {
            language,
            script,
            region,
            variants,
            extensions,
        }
    }

    fn has_duplicate_variants(&self) -> bool {
        self.variants.iter().enumerate().any(|(i, variant)| {
            self.variants[..i]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(variant))
        })
    }

    fn has_duplicate_singletons(&self) -> bool {
        let singletons: Vec<&str> = self
            .extensions
            .iter()
            .map(|extension| extension[0])
            .collect();
        singletons.iter().enumerate().any(|(i, singleton)| {
            singletons[..i]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(singleton))
        })
    }
}

/// ### [6.2.1 IsStructurallyValidLanguageTag ( locale )](https://tc39.es/ecma402/#sec-isstructurallyvalidlanguagetag)
///
/// The abstract operation IsStructurallyValidLanguageTag takes argument
/// locale (a String) and returns a Boolean. It determines whether locale is a
/// syntactically well-formed language tag. It does not consider whether
/// locale conveys any meaningful semantics, nor does it differentiate between
/// aliased subtags and their preferred replacement subtags or require
/// canonical casing or subtag ordering.
pub(crate) fn is_structurally_valid_language_tag(locale: &str) -> bool {
    // 1. Let lowerLocale be the ASCII-lowercase of locale.
    // 2. If lowerLocale cannot be matched by the unicode_locale_id Unicode
    //    locale nonterminal, return false.
    if !UNICODE_LOCALE_ID.is_match(locale) {
        return false;
    }
    let subtags: Vec<&str> = locale.split('-').collect();
    let tag = LanguageTag::split(&subtags);
    // 3. If lowerLocale uses any of the backwards compatibility syntax
    //    described in Unicode Technical Standard #35 Part 1 Core, Section 3.3
    //    BCP 47 Conformance, return false.
    // 4. Let languageId be the longest prefix of lowerLocale matched by the
    //    unicode_language_id Unicode locale nonterminal.
    // 5. Let variants be GetLocaleVariants(languageId).
    // 6. If variants is not undefined, then
    //    a. If variants contains any duplicate subtags, return false.
    // 7. Let allExtensions be the suffix of lowerLocale following
    //    languageId.
    // 8. If allExtensions contains a substring matched by the pu_extensions
    //    Unicode locale nonterminal, let extensions be the prefix of
    //    allExtensions preceding the longest such substring. Otherwise, let
    //    extensions be allExtensions.
    // 9. If extensions is not the empty String, then
    //    a. If extensions contains any duplicate singleton subtags, return
    //       false.
    // 10. Return true.
    !tag.has_duplicate_variants() && !tag.has_duplicate_singletons()
}

/// ### [6.2.2 CanonicalizeUnicodeLocaleId ( locale )](https://tc39.es/ecma402/#sec-canonicalizeunicodelocaleid)
///
/// Returns the canonical syntax of a language tag as described by
/// [UTS #35 section 3.2.1](https://unicode.org/reports/tr35/#Canonical_Unicode_Locale_Identifiers):
///
/// * the language and all variant and extension subtags are lowercase, the
///   script is titlecase and the region uppercase;
/// * variants are sorted;
/// * extensions are sorted by singleton, with private use last;
/// * Unicode extension attributes are sorted without duplicates, keywords
///   are sorted by key keeping the first of duplicate keys, and a `true`
///   type is dropped;
/// * transformed extension fields are sorted by key, and a `true` value is
///   dropped.
///
/// Alias replacement needs CLDR data and is not done.
///
/// `locale` must be a structurally valid language tag.
pub(crate) fn canonicalize_unicode_locale_id(locale: &str) -> String {
    debug_assert!(is_structurally_valid_language_tag(locale));
    let lowercase = locale.to_ascii_lowercase();
    let subtags: Vec<&str> = lowercase.split('-').collect();
    let tag = LanguageTag::split(&subtags);

    let mut canonical = canonicalize_language_id(&tag);
    let (private_use, mut extensions): (Vec<&[&str]>, Vec<&[&str]>) = tag
        .extensions
        .iter()
        .copied()
        .partition(|extension| extension[0] == "x");
    extensions.sort_by_key(|extension| extension[0]);
    for extension in extensions {
        match extension[0] {
            "u" => canonical.extend(canonicalize_unicode_extension(&extension[1..])),
            "t" => canonical.extend(canonicalize_transformed_extension(&extension[1..])),
            singleton => {
                canonical.push(singleton.to_string());
                canonical.extend(extension[1..].iter().map(|subtag| subtag.to_string()));
            }
        }
    }
    for extension in private_use {
        canonical.extend(extension.iter().map(|subtag| subtag.to_string()));
    }
    canonical.join("-")
}

/// Canonical casing and variant order of the `unicode_language_id` part of a
/// lowercased tag.
fn canonicalize_language_id(tag: &LanguageTag) -> Vec<String> {
    let mut canonical = vec![tag.language.to_string()];
    if let Some(script) = tag.script {
        let (first, rest) = script.split_at(1);
        canonical.push(first.to_ascii_uppercase() + rest);
    }
    if let Some(region) = tag.region {
        canonical.push(region.to_ascii_uppercase());
    }
    let mut variants = tag.variants.clone();
    variants.sort_unstable();
    canonical.extend(variants.into_iter().map(str::to_string));
    canonical
}

/// Splits `subtags` into runs that each start with a two character key.
fn keyed_runs<'a>(subtags: &'a [&'a str]) -> Vec<&'a [&'a str]> {
    let mut runs = Vec::new();
    let mut rest = subtags;
    while !rest.is_empty() {
        let end = rest[1..]
            .iter()
            .position(|subtag| subtag.len() == 2)
            .map_or(rest.len(), |position| position + 1);
        runs.push(&rest[..end]);
        rest = &rest[end..];
    }
    runs
}

/// Appends a key and its value subtags, leaving out a lone `true` value.
fn push_keyed_run(canonical: &mut Vec<String>, run: &[&str]) {
    canonical.push(run[0].to_string());
    if run[1..] != ["true"] {
        canonical.extend(run[1..].iter().map(|subtag| subtag.to_string()));
    }
}

/// Canonical syntax of the subtags following a `u` singleton.
fn canonicalize_unicode_extension(subtags: &[&str]) -> Vec<String> {
    let attributes_len = subtags
        .iter()
        .position(|subtag| subtag.len() == 2)
        .unwrap_or(subtags.len());
    let (attributes, keywords) = subtags.split_at(attributes_len);

    let mut attributes = attributes.to_vec();
    attributes.sort_unstable();
    attributes.dedup();
    let mut keywords = keyed_runs(keywords);
    // Stable, so the first of any duplicate keys comes first.
    keywords.sort_by_key(|keyword| keyword[0]);
    keywords.dedup_by_key(|keyword| keyword[0]);

    let mut canonical = vec!["u".to_string()];
    canonical.extend(attributes.into_iter().map(str::to_string));
    for keyword in keywords {
        push_keyed_run(&mut canonical, keyword);
    }
    canonical
}

/// Canonical syntax of the subtags following a `t` singleton.
fn canonicalize_transformed_extension(subtags: &[&str]) -> Vec<String> {
    // A tfield key is a letter followed by a digit; everything before the
    // first one is the tlang.
    let is_tfield_key =
        |subtag: &&str| subtag.len() == 2 && subtag.as_bytes()[1].is_ascii_digit();
    let tlang_len = subtags
        .iter()
        .position(is_tfield_key)
        .unwrap_or(subtags.len());
    let (tlang, tfields) = subtags.split_at(tlang_len);

    let mut fields = keyed_runs(tfields);
    fields.sort_by_key(|field| field[0]);

    let mut canonical = vec!["t".to_string()];
    if !tlang.is_empty() {
        let tlang = LanguageTag::split(tlang);
        canonical.extend(
            canonicalize_language_id(&tlang)
                .into_iter()
                .map(|subtag| subtag.to_ascii_lowercase()),
        );
    }
    for field in fields {
        push_keyed_run(&mut canonical, field);
    }
    canonical
}

/// Removes every Unicode locale extension sequence (`-u-...`) from a
/// canonicalised language tag.
pub(crate) fn remove_unicode_extensions(locale: &str) -> String {
    let subtags: Vec<&str> = locale.split('-').collect();
    let tag = LanguageTag::split(&subtags);
    let extensions_len: usize = tag.extensions.iter().map(|extension| extension.len()).sum();
    let language_id_len = subtags.len() - extensions_len;
    let mut result = subtags[..language_id_len].join("-");
    for extension in tag.extensions.iter().filter(|extension| extension[0] != "u") {
        result.push('-');
        result.push_str(&extension.join("-"));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_tags() {
        for tag in [
            "en",
            "EN-us",
            "zh-Hant-TW",
            "de-DE-1996",
            "sl-rozaj-biske",
            "en-u-ca-gregory-nu-latn",
            "en-u-attr-co-phonebk",
            "ja-t-it",
            "und-t-en-us-h0-hybrid",
            "en-a-bbb-x-a-ccc",
            "fr-x-private",
            "es-419",
        ] {
            assert!(is_structurally_valid_language_tag(tag), "{tag}");
        }
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in [
            "",
            "i",
            "x-private",
            "en_US",
            "en-",
            "zh-yue",
            "de-1996-1996",
            "de-DE-1996-1996",
            "en-u-ca-u-nu",
            "en-a-foo-a-bar",
            "root",
            "abcdefghi",
            "en-US-\u{212A}",
            "en-t",
            "en-u",
        ] {
            assert!(!is_structurally_valid_language_tag(tag), "{tag}");
        }
    }

    #[test]
    fn canonicalizes_case() {
        assert_eq!(canonicalize_unicode_locale_id("EN-us"), "en-US");
        assert_eq!(canonicalize_unicode_locale_id("zh-hant-tw"), "zh-Hant-TW");
        assert_eq!(
            canonicalize_unicode_locale_id("DE-u-CO-PHONEBK-X-PRIVATE"),
            "de-u-co-phonebk-x-private"
        );
        assert_eq!(canonicalize_unicode_locale_id("sl-ROZAJ"), "sl-rozaj");
    }

    #[test]
    fn sorts_variants_and_extensions() {
        for (tag, canonical) in [
            ("sl-rozaj-biske-1994", "sl-1994-biske-rozaj"),
            ("SR-cyrl-EKAVSK", "sr-Cyrl-ekavsk"),
            ("en-ca-newfound", "en-CA-newfound"),
            ("en-b-bb-a-aa", "en-a-aa-b-bb"),
            ("zh-hans-cn-u-ca-t-ca-x-t-u", "zh-Hans-CN-t-ca-u-ca-x-t-u"),
            ("de-x-b-a-u-ca", "de-x-b-a-u-ca"),
        ] {
            assert_eq!(canonicalize_unicode_locale_id(tag), canonical, "{tag}");
        }
    }

    #[test]
    fn canonicalizes_unicode_extension_keywords() {
        for (tag, canonical) in [
            ("en-u-nu-latn-ca-gregory", "en-u-ca-gregory-nu-latn"),
            ("en-u-ca-true", "en-u-ca"),
            ("en-u-kn-true-co-phonebk", "en-u-co-phonebk-kn"),
            ("en-u-ca-islamic-civil-ca-gregory", "en-u-ca-islamic-civil"),
            ("da-u-search-attr-attr-co-search", "da-u-attr-search-co-search"),
            ("es-419-u-nu-latn", "es-419-u-nu-latn"),
        ] {
            assert_eq!(canonicalize_unicode_locale_id(tag), canonical, "{tag}");
        }
    }

    #[test]
    fn canonicalizes_transformed_extension_fields() {
        for (tag, canonical) in [
            ("ja-t-it-m0-true-h0-hybrid", "ja-t-it-h0-hybrid-m0"),
            ("und-t-EN-US-m0-names", "und-t-en-us-m0-names"),
            ("und-t-en-rozaj-biske", "und-t-en-biske-rozaj"),
            ("en-t-m0-names", "en-t-m0-names"),
        ] {
            assert_eq!(canonicalize_unicode_locale_id(tag), canonical, "{tag}");
        }
    }

    #[test]
    fn strips_unicode_extensions() {
        assert_eq!(remove_unicode_extensions("de-u-co-phonebk"), "de");
        assert_eq!(
            remove_unicode_extensions("en-US-a-bbb-u-nu-thai-x-u-private"),
            "en-US-a-bbb-x-u-private"
        );
        assert_eq!(remove_unicode_extensions("zh-Hant"), "zh-Hant");
    }
}
