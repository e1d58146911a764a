// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ECMAScript standard library: builtin function objects, the ordinary
//! and exotic object internal methods, and the intrinsic constructors and
//! prototypes that every realm carries.

pub(crate) mod array;
mod builtin_function;
pub(crate) mod error;
pub(crate) mod fundamental_objects;
pub(crate) mod indexed_collections;
#[cfg(feature = "intl")]
pub(crate) mod intl;
pub(crate) mod numbers_and_dates;
pub(crate) mod ordinary;
pub(crate) mod primitive_objects;
pub(crate) mod text_processing;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunctionArgs, BuiltinFunctionHeapData, ClosureFn,
    ConstructorFn, RegularFn, create_builtin_closure, create_builtin_function,
};
pub(crate) use builtin_function::{BuiltinIntrinsicConstructor, builtin_call_or_construct};
pub use ordinary::ordinary_object_create;
