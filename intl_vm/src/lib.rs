// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Intl VM
//!
//! A small ECMAScript object model: values, ordinary and exotic objects,
//! realms with their intrinsics, and the builtins needed to exercise the
//! ECMA-402 locale list operations (`Intl.getCanonicalLocales` and
//! `Intl.ListFormat.supportedLocalesOf`) from a Rust embedder.
//!
//! There is no parser or bytecode interpreter: embedders drive the engine
//! through the abstract operations exported from [`ecmascript`], the same
//! way ECMA-262 algorithm steps call one another.

pub mod ecmascript;
pub mod heap;

pub use heap::Heap;

/// Returns the test262 feature names this build of the engine supports.
///
/// Conformance runners use this to decide whether a test whose metadata
/// lists `features` can run at all.
pub fn supported_features() -> &'static [&'static str] {
    #[cfg(feature = "intl")]
    const FEATURES: &[&str] = &[
        "Symbol",
        "Symbol.toPrimitive",
        "Symbol.toStringTag",
        "globalThis",
        "Intl.ListFormat",
        "Intl.getCanonicalLocales",
    ];
    #[cfg(not(feature = "intl"))]
    const FEATURES: &[&str] = &[
        "Symbol",
        "Symbol.toPrimitive",
        "Symbol.toStringTag",
        "globalThis",
    ];
    FEATURES
}
