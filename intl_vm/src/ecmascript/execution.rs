// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [9 Executable Code and Execution Contexts](https://tc39.es/ecma262/#sec-executable-code-and-execution-contexts)

pub mod agent;
mod execution_context;
mod realm;

pub use agent::{Agent, JsError, JsResult, Options};
pub(crate) use execution_context::ExecutionContext;
pub use realm::{Realm, RealmRecord, create_realm, initialize_host_defined_realm};
pub(crate) use realm::{IntrinsicConstructorIndexes, ProtoIntrinsics};
