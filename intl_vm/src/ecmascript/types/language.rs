// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)

mod function;
mod number;
mod object;
mod string;
mod symbol;
mod value;

pub use function::Function;
pub use number::Number;
pub(crate) use object::{ObjectKind, PropertyEntry, PropertyStorage, PropertyValue};
pub use object::{InternalMethods, Object, ObjectHeapData, PropertyKey};
pub use string::{String, StringHeapData};
pub use symbol::{Symbol, SymbolHeapData};
pub use value::Value;
