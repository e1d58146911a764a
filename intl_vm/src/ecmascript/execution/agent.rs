// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [9.7 Agents](https://tc39.es/ecma262/#sec-agents)

use std::ops::{Index, IndexMut};

use super::{ExecutionContext, Realm, RealmRecord, initialize_host_defined_realm};
use crate::{
    Heap,
    ecmascript::{
        abstract_operations::to_string,
        builtins::error::create_error_object,
        types::{Object, String, Value},
    },
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Print a line to stderr for every builtin function call.
    pub print_internals: bool,
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsError(Value);

impl JsError {
    pub fn value(self) -> Value {
        self.0
    }

    /// Renders the thrown value the way `String(value)` would. Error objects
    /// thus render as `Name: message`.
    ///
    /// Must be called while a realm is running.
    pub fn to_string(self, agent: &mut Agent) -> std::string::String {
        if let Value::Symbol(symbol) = self.0 {
            return symbol
                .descriptive_string(agent)
                .to_string_lossy(agent)
                .into_owned();
        }
        match to_string(agent, self.0) {
            Ok(string) => string.to_string_lossy(agent).into_owned(),
            Err(_) => "<uncaught exception while converting thrown value>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    RangeError,
    TypeError,
}

impl ExceptionType {
    /// The `name` of the error constructor for this exception type.
    pub fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) execution_context_stack: Vec<ExecutionContext>,
}

impl Agent {
    pub fn new(options: Options) -> Self {
        Self {
            heap: Heap::new(),
            options,
            execution_context_stack: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Creates a new realm with all intrinsics and a populated global
    /// object. Realms created by one agent share nothing but the heap.
    pub fn create_realm(&mut self) -> Realm {
        initialize_host_defined_realm(self, None::<fn(&mut Agent, Object)>)
    }

    /// Runs `func` with `realm` as the current realm.
    pub fn run_in_realm<F, R>(&mut self, realm: Realm, func: F) -> R
    where
        F: FnOnce(&mut Agent) -> R,
    {
        self.execution_context_stack.push(ExecutionContext {
            function: None,
            realm,
        });
        let result = func(self);
        self.execution_context_stack.pop();
        result
    }

    /// ## Panics
    ///
    /// If no realm is running.
    pub fn current_realm_id(&self) -> Realm {
        self.running_execution_context().realm
    }

    pub fn current_realm(&self) -> &RealmRecord {
        self.get_realm(self.current_realm_id())
    }

    pub fn get_realm(&self, id: Realm) -> &RealmRecord {
        &self[id]
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    ///
    /// Creates an error object of the given type in the current realm.
    pub fn throw_exception(&mut self, kind: ExceptionType, message: impl AsRef<str>) -> JsError {
        let message = String::from_str(self, message.as_ref());
        let error = create_error_object(self, kind, Some(message));
        JsError(error.into_value())
    }

    pub(crate) fn running_execution_context(&self) -> &ExecutionContext {
        self.execution_context_stack
            .last()
            .expect("No execution context is running")
    }
}

impl Index<Realm> for Agent {
    type Output = RealmRecord;

    fn index(&self, index: Realm) -> &Self::Output {
        &self.heap.realms[index.0.into_index()]
    }
}

impl IndexMut<Realm> for Agent {
    fn index_mut(&mut self, index: Realm) -> &mut Self::Output {
        &mut self.heap.realms[index.0.into_index()]
    }
}
