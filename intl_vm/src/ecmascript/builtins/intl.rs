// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # [ECMAScript® Internationalization API](https://tc39.es/ecma402/)
//!
//! Only the locale list plumbing shared by every Intl service constructor is
//! implemented: locale list canonicalisation, the `localeMatcher` option and
//! the lookup matcher. `Intl.ListFormat` exists so that its
//! `supportedLocalesOf` can be called; it cannot create instances.

pub(crate) mod intl_object;
pub(crate) mod language_tags;
pub(crate) mod list_format;
pub(crate) mod locale_negotiation;
pub(crate) mod options;
