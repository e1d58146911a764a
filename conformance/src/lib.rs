// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Intl conformance
//!
//! test262-style conformance fixtures for `intl_vm`. Fixtures are Rust
//! functions written against Rust versions of the test262 harness
//! primitives; each runs in a fresh agent and realm so that the
//! instrumentation a fixture installs never outlives it.

pub mod fixtures;
pub mod harness;
pub mod metadata;
pub mod runner;
