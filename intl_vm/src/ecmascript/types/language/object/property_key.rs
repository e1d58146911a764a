// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        execution::Agent,
        types::{String, Symbol, Value},
    },
    heap::WellKnownSymbolIndexes,
};

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. All Strings and Symbols,
/// including the empty String, are valid as property keys.
///
/// An _array index_ is a property name `n` whose canonical numeric value is
/// an integer in the inclusive interval from `+0𝔽` to `𝔽(2**32 - 2)`. Array
/// indices are always stored as [`PropertyKey::Integer`], never as strings,
/// so that `"0"` and `0` name the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Integer(u32),
    String(String),
    Symbol(Symbol),
}

/// Largest array index, `2**32 - 2`.
const MAX_ARRAY_INDEX: u32 = u32::MAX - 1;

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        if let Some(index) = parse_array_index(str) {
            PropertyKey::Integer(index)
        } else {
            PropertyKey::String(String::from_str(agent, str))
        }
    }

    pub fn from_string(agent: &Agent, string: String) -> Self {
        if let Some(index) = string.as_str(agent).and_then(parse_array_index) {
            PropertyKey::Integer(index)
        } else {
            PropertyKey::String(string)
        }
    }

    /// Creates the key for an array index.
    ///
    /// ## Panics
    ///
    /// If `index` is `2**32 - 1`, which is not an array index.
    pub fn from_index(index: u32) -> Self {
        assert!(index <= MAX_ARRAY_INDEX);
        PropertyKey::Integer(index)
    }

    pub fn is_array_index(self) -> bool {
        matches!(self, PropertyKey::Integer(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Converts the key back into a language value: array indices become
    /// their canonical string form.
    pub fn into_value(self, agent: &mut Agent) -> Value {
        match self {
            PropertyKey::Integer(index) => Value::from_string(agent, index.to_string()),
            PropertyKey::String(string) => Value::String(string),
            PropertyKey::Symbol(symbol) => Value::Symbol(symbol),
        }
    }

    /// Renders the key for diagnostics, e.g. error messages.
    pub fn as_display(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::Integer(index) => index.to_string(),
            PropertyKey::String(string) => string.to_string_lossy(agent).into_owned(),
            PropertyKey::Symbol(symbol) => match symbol.descriptor(agent) {
                Some(descriptor) => format!("[{}]", descriptor.to_string_lossy(agent)),
                None => "[Symbol()]".to_string(),
            },
        }
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<WellKnownSymbolIndexes> for PropertyKey {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        PropertyKey::Symbol(value.into())
    }
}

/// Parses `str` as a canonical array index: decimal digits without leading
/// zeroes, at most `2**32 - 2`.
fn parse_array_index(str: &str) -> Option<u32> {
    if str.is_empty() || !str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if str.len() > 1 && str.starts_with('0') {
        return None;
    }
    let value: u64 = str.parse().ok()?;
    if value > u64::from(MAX_ARRAY_INDEX) {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::parse_array_index;

    #[test]
    fn array_index_parsing() {
        assert_eq!(parse_array_index("0"), Some(0));
        assert_eq!(parse_array_index("42"), Some(42));
        assert_eq!(parse_array_index("4294967294"), Some(4294967294));
        assert_eq!(parse_array_index("4294967295"), None);
        assert_eq!(parse_array_index("01"), None);
        assert_eq!(parse_array_index(""), None);
        assert_eq!(parse_array_index("-1"), None);
        assert_eq!(parse_array_index("1.5"), None);
        assert_eq!(parse_array_index("length"), None);
    }
}
