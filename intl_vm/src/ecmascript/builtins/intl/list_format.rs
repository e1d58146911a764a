// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [13 ListFormat Objects](https://tc39.es/ecma402/#listformat-objects)

pub(crate) mod list_format_constructor;
pub(crate) mod list_format_prototype;

/// The value of the \[\[AvailableLocales]] internal slot of
/// %Intl.ListFormat%. Every entry is in canonical form and has no Unicode
/// extension sequence.
pub(crate) const AVAILABLE_LOCALES: &[&str] = &[
    "ar", "de", "en", "en-GB", "en-US", "es", "fr", "ja", "pt", "ru", "zh", "zh-Hant",
];
