// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)

use std::ops::Index;

use super::{String, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, SymbolIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(pub(crate) SymbolIndex);

#[derive(Debug, Clone, Copy)]
pub struct SymbolHeapData {
    /// \[\[Description]]
    pub(crate) descriptor: Option<String>,
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        &self.heap.symbols[index.0.into_index()]
    }
}

impl Symbol {
    /// Creates a new unique Symbol value.
    pub fn new(agent: &mut Agent, descriptor: Option<String>) -> Self {
        agent.heap.create(SymbolHeapData { descriptor })
    }

    pub fn descriptor(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }

    /// ### [20.4.3.3.1 SymbolDescriptiveString ( sym )](https://tc39.es/ecma262/#sec-symboldescriptivestring)
    ///
    /// The abstract operation SymbolDescriptiveString takes argument sym (a
    /// Symbol) and returns a String.
    pub fn descriptive_string(self, agent: &mut Agent) -> String {
        // 1. Let desc be sym's [[Description]] value.
        // 2. If desc is undefined, set desc to the empty String.
        // 3. Assert: desc is a String.
        // 4. Return the string-concatenation of "Symbol(", desc, and ")".
        let description = match self.descriptor(agent) {
            Some(descriptor) => descriptor,
            None => String::from_str(agent, ""),
        };
        let prefix = String::from_str(agent, "Symbol(");
        let suffix = String::from_str(agent, ")");
        String::concat(agent, &[prefix, description, suffix])
    }

    pub fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}
