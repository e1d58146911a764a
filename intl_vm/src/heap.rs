// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage for every engine value that does not fit in a [`Value`] directly.
//!
//! Handles such as [`Object`] or [`String`] are plain indexes into the
//! vectors held here. Nothing is ever freed: a heap lives exactly as long as
//! the [`Agent`](crate::ecmascript::execution::Agent) that owns it, and
//! conformance runs create one agent per test.
//!
//! [`Value`]: crate::ecmascript::types::Value

pub(crate) mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;
use wtf8::Wtf8Buf;

use crate::ecmascript::{
    execution::RealmRecord,
    types::{Object, ObjectHeapData, String, StringHeapData, Symbol, SymbolHeapData},
};
pub(crate) use indexes::{ObjectIndex, RealmIndex, StringIndex, SymbolIndex};

#[derive(Debug)]
pub struct Heap {
    pub(crate) objects: Vec<ObjectHeapData>,
    pub(crate) realms: Vec<RealmRecord>,
    pub(crate) strings: Vec<StringHeapData>,
    pub(crate) symbols: Vec<SymbolHeapData>,
    /// Interning table: every distinct string content is stored once, so
    /// comparing two [`String`] handles compares their contents.
    string_lookup: HashMap<Wtf8Buf, String, RandomState>,
}

pub(crate) trait CreateHeapData<T, F> {
    /// Creates a [`Value`](crate::ecmascript::types::Value) handle from
    /// some data type.
    fn create(&mut self, data: T) -> F;
}

impl CreateHeapData<ObjectHeapData, Object> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> Object {
        self.objects.push(data);
        Object(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(data);
        Symbol(SymbolIndex::last(&self.symbols))
    }
}

impl CreateHeapData<Wtf8Buf, String> for Heap {
    fn create(&mut self, data: Wtf8Buf) -> String {
        if let Some(existing) = self.string_lookup.get(&data) {
            return *existing;
        }
        self.strings.push(StringHeapData::from_wtf8_buf(data.clone()));
        let string = String(StringIndex::last(&self.strings));
        self.string_lookup.insert(data, string);
        string
    }
}

/// Symbols that every realm shares, allocated when the heap is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
    ToStringTag,
}

impl WellKnownSymbolIndexes {
    const ALL: [(WellKnownSymbolIndexes, &'static str); 2] = [
        (WellKnownSymbolIndexes::ToPrimitive, "Symbol.toPrimitive"),
        (WellKnownSymbolIndexes::ToStringTag, "Symbol.toStringTag"),
    ];
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Symbol(SymbolIndex::from_u32_index(value as u32))
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            objects: Vec::with_capacity(256),
            realms: Vec::with_capacity(1),
            strings: Vec::with_capacity(256),
            symbols: Vec::with_capacity(8),
            string_lookup: HashMap::default(),
        };
        for (expected, description) in WellKnownSymbolIndexes::ALL {
            let descriptor: String = heap.create(Wtf8Buf::from_str(description));
            let symbol: Symbol = heap.create(SymbolHeapData {
                descriptor: Some(descriptor),
            });
            debug_assert_eq!(symbol, Symbol::from(expected));
        }
        heap
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
