// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7 Abstract Operations](https://tc39.es/ecma262/#sec-abstract-operations)

pub mod operations_on_objects;
pub mod testing_and_comparison;
pub mod type_conversion;

pub use operations_on_objects::{
    call, call_function, construct, create_array_from_list, create_data_property,
    create_data_property_or_throw, create_non_enumerable_data_property_or_throw,
    define_property_or_throw, get, get_function_realm, get_method,
    get_v, has_own_property, has_property, length_of_array_like, set,
};
pub use testing_and_comparison::{
    is_array, is_callable, is_constructor, require_object_coercible, same_value, same_value_zero,
};
pub use type_conversion::{
    PreferredType, ordinary_to_primitive, to_boolean, to_integer_or_infinity, to_length,
    to_number, to_object, to_primitive, to_property_key, to_string, to_uint32,
};
