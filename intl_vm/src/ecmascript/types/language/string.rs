// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)

use std::{borrow::Cow, ops::Index};

use wtf8::{CodePoint, Wtf8, Wtf8Buf};

use super::Value;
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, StringIndex},
};

/// An interned ECMAScript String. Two handles are equal exactly when the
/// strings they refer to are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct String(pub(crate) StringIndex);

#[derive(Debug, Clone)]
pub struct StringHeapData {
    data: Wtf8Buf,
    /// Length of the string in UTF-16 code units, which is what ECMAScript
    /// means by the length of a String.
    utf16_len: usize,
}

impl StringHeapData {
    pub(crate) fn from_wtf8_buf(data: Wtf8Buf) -> Self {
        let utf16_len = data
            .code_points()
            .map(|cp| if cp.to_u32() > 0xFFFF { 2 } else { 1 })
            .sum();
        Self { data, utf16_len }
    }

    pub fn as_wtf8(&self) -> &Wtf8 {
        &self.data
    }

    pub fn utf16_len(&self) -> usize {
        self.utf16_len
    }

    /// Returns the UTF-16 code unit at `index`, splitting supplementary code
    /// points into their surrogate pairs.
    pub fn utf16_code_unit(&self, index: usize) -> Option<u16> {
        if index >= self.utf16_len {
            return None;
        }
        let mut position = 0;
        for code_point in self.data.code_points() {
            let code = code_point.to_u32();
            if code > 0xFFFF {
                let offset = code - 0x1_0000;
                if position == index {
                    return Some((0xD800 + (offset >> 10)) as u16);
                }
                if position + 1 == index {
                    return Some((0xDC00 + (offset & 0x3FF)) as u16);
                }
                position += 2;
            } else {
                if position == index {
                    return Some(code as u16);
                }
                position += 1;
            }
        }
        None
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.heap.strings[index.0.into_index()]
    }
}

impl String {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        agent.heap.create(Wtf8Buf::from_str(str))
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Self {
        agent.heap.create(Wtf8Buf::from_string(string))
    }

    pub fn from_wtf8_buf(agent: &mut Agent, buf: Wtf8Buf) -> Self {
        agent.heap.create(buf)
    }

    /// Creates a one code unit long String. Lone surrogates are kept as such.
    pub fn from_code_unit(agent: &mut Agent, code_unit: u16) -> Self {
        let mut buf = Wtf8Buf::new();
        if let Some(code_point) = CodePoint::from_u32(u32::from(code_unit)) {
            buf.push(code_point);
        }
        Self::from_wtf8_buf(agent, buf)
    }

    /// ### [string-concatenation](https://tc39.es/ecma262/#string-concatenation)
    pub fn concat(agent: &mut Agent, strings: &[String]) -> Self {
        let mut buf = Wtf8Buf::new();
        for string in strings {
            buf.push_wtf8(agent[*string].as_wtf8());
        }
        Self::from_wtf8_buf(agent, buf)
    }

    pub fn as_wtf8(self, agent: &Agent) -> &Wtf8 {
        agent[self].as_wtf8()
    }

    /// Returns the string as UTF-8 if it contains no lone surrogates.
    pub fn as_str(self, agent: &Agent) -> Option<&str> {
        agent[self].as_wtf8().as_str()
    }

    pub fn to_string_lossy(self, agent: &Agent) -> Cow<'_, str> {
        agent[self].as_wtf8().to_string_lossy()
    }

    pub fn utf16_len(self, agent: &Agent) -> usize {
        agent[self].utf16_len()
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].utf16_len() == 0
    }

    pub fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::String(string) = value {
            Ok(string)
        } else {
            Err(())
        }
    }
}
