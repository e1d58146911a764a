// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, Value};

/// An object with a \[\[Call]] internal method.
///
/// Only builtin functions exist in this engine, so a `Function` is always
/// backed by an object whose kind is a builtin function. Obtain one through
/// [`is_callable`](crate::ecmascript::abstract_operations::is_callable) or
/// [`Object::as_function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Function(pub(crate) Object);

impl Function {
    pub fn into_object(self) -> Object {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        value.0
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Object(value.0)
    }
}
