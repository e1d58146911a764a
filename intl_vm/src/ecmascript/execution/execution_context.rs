// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Realm;
use crate::ecmascript::types::Function;

/// ### [9.4 Execution Contexts](https://tc39.es/ecma262/#sec-execution-contexts)
///
/// Only the state components needed by builtin functions are kept: there is
/// no code evaluation state as no ECMAScript code is ever evaluated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExecutionContext {
    /// ### Function
    ///
    /// If this execution context is evaluating the code of a function object,
    /// then the value of this component is that function object. If the
    /// context is evaluating the code of a Script or Module, the value is
    /// null (here represented by None).
    pub(crate) function: Option<Function>,

    /// ### Realm
    ///
    /// The Realm Record from which associated code accesses ECMAScript
    /// resources.
    pub(crate) realm: Realm,
}
