// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7.4 Well-Known Intrinsic Objects](https://tc39.es/ecma262/#sec-well-known-intrinsic-objects)
//!
//! Every intrinsic is allocated as an empty object when the realm is
//! created, so that intrinsics can refer to each other regardless of the
//! order in which they are initialised. Each builtin's `create_intrinsic`
//! then fills in its pre-allocated object.

#[cfg(feature = "intl")]
use crate::ecmascript::builtins::intl::{
    intl_object::IntlObject,
    list_format::{
        list_format_constructor::ListFormatConstructor,
        list_format_prototype::ListFormatPrototype,
    },
};
use crate::ecmascript::{
    builtins::{
        fundamental_objects::{
            boolean_objects::{
                boolean_constructor::BooleanConstructor, boolean_prototype::BooleanPrototype,
            },
            error_objects::{
                error_constructor::ErrorConstructor, error_prototype::ErrorPrototype,
                native_error_constructors::NativeErrorConstructors,
                native_error_prototypes::NativeErrorPrototypes,
            },
            function_objects::function_prototype::FunctionPrototype,
            object_objects::{
                object_constructor::ObjectConstructor, object_prototype::ObjectPrototype,
            },
            symbol_objects::{
                symbol_constructor::SymbolConstructor, symbol_prototype::SymbolPrototype,
            },
        },
        indexed_collections::array_objects::{
            array_constructor::ArrayConstructor, array_prototype::ArrayPrototype,
        },
        numbers_and_dates::number_objects::{
            number_constructor::NumberConstructor, number_prototype::NumberPrototype,
        },
        text_processing::string_objects::{
            string_constructor::StringConstructor, string_prototype::StringPrototype,
        },
    },
    execution::{Agent, Realm},
    types::{Function, Object, ObjectHeapData, ObjectKind},
};

/// The intrinsic that provides the default \[\[Prototype]] of objects
/// created by builtins, as in `OrdinaryCreateFromConstructor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProtoIntrinsics {
    Array,
    Boolean,
    Error,
    Number,
    Object,
    RangeError,
    String,
    TypeError,
}

/// Intrinsic constructors that are created through
/// [`BuiltinFunctionBuilder::new_intrinsic_constructor`](crate::ecmascript::builders::builtin_function_builder::BuiltinFunctionBuilder::new_intrinsic_constructor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntrinsicConstructorIndexes {
    Array,
    Boolean,
    Error,
    Number,
    Object,
    RangeError,
    String,
    Symbol,
    TypeError,
    #[cfg(feature = "intl")]
    ListFormat,
}

#[derive(Debug, Clone)]
pub(crate) struct Intrinsics {
    /// %Array%
    array: Object,
    /// %Array.prototype%
    array_prototype: Object,
    /// %Boolean%
    boolean: Object,
    /// %Boolean.prototype%
    boolean_prototype: Object,
    /// %Error%
    error: Object,
    /// %Error.prototype%
    error_prototype: Object,
    /// %Function.prototype%
    function_prototype: Object,
    /// %Intl%
    #[cfg(feature = "intl")]
    intl: Object,
    /// %Intl.ListFormat%
    #[cfg(feature = "intl")]
    list_format: Object,
    /// %Intl.ListFormat.prototype%
    #[cfg(feature = "intl")]
    list_format_prototype: Object,
    /// %Number%
    number: Object,
    /// %Number.prototype%
    number_prototype: Object,
    /// %Object%
    object: Object,
    /// %Object.prototype%
    object_prototype: Object,
    /// %RangeError%
    range_error: Object,
    /// %RangeError.prototype%
    range_error_prototype: Object,
    /// %String%
    string: Object,
    /// %String.prototype%
    string_prototype: Object,
    /// %Symbol%
    symbol: Object,
    /// %Symbol.prototype%
    symbol_prototype: Object,
    /// %TypeError%
    type_error: Object,
    /// %TypeError.prototype%
    type_error_prototype: Object,
}

impl Intrinsics {
    pub(crate) fn new(agent: &mut Agent) -> Self {
        let mut reserve = || Object::create(agent, ObjectHeapData::new(None, ObjectKind::Ordinary));
        Self {
            array: reserve(),
            array_prototype: reserve(),
            boolean: reserve(),
            boolean_prototype: reserve(),
            error: reserve(),
            error_prototype: reserve(),
            function_prototype: reserve(),
            #[cfg(feature = "intl")]
            intl: reserve(),
            #[cfg(feature = "intl")]
            list_format: reserve(),
            #[cfg(feature = "intl")]
            list_format_prototype: reserve(),
            number: reserve(),
            number_prototype: reserve(),
            object: reserve(),
            object_prototype: reserve(),
            range_error: reserve(),
            range_error_prototype: reserve(),
            string: reserve(),
            string_prototype: reserve(),
            symbol: reserve(),
            symbol_prototype: reserve(),
            type_error: reserve(),
            type_error_prototype: reserve(),
        }
    }

    pub(crate) fn create_intrinsics(agent: &mut Agent, realm: Realm) {
        ObjectPrototype::create_intrinsic(agent, realm);
        ObjectConstructor::create_intrinsic(agent, realm);
        FunctionPrototype::create_intrinsic(agent, realm);
        ErrorPrototype::create_intrinsic(agent, realm);
        ErrorConstructor::create_intrinsic(agent, realm);
        NativeErrorPrototypes::create_intrinsic(agent, realm);
        NativeErrorConstructors::create_intrinsic(agent, realm);
        BooleanPrototype::create_intrinsic(agent, realm);
        BooleanConstructor::create_intrinsic(agent, realm);
        SymbolPrototype::create_intrinsic(agent, realm);
        SymbolConstructor::create_intrinsic(agent, realm);
        NumberPrototype::create_intrinsic(agent, realm);
        NumberConstructor::create_intrinsic(agent, realm);
        StringPrototype::create_intrinsic(agent, realm);
        StringConstructor::create_intrinsic(agent, realm);
        ArrayPrototype::create_intrinsic(agent, realm);
        ArrayConstructor::create_intrinsic(agent, realm);
        #[cfg(feature = "intl")]
        {
            IntlObject::create_intrinsic(agent, realm);
            ListFormatPrototype::create_intrinsic(agent, realm);
            ListFormatConstructor::create_intrinsic(agent, realm);
        }
    }

    pub(crate) fn get_intrinsic_default_proto(
        &self,
        intrinsic_default_proto: ProtoIntrinsics,
    ) -> Object {
        match intrinsic_default_proto {
            ProtoIntrinsics::Array => self.array_prototype(),
            ProtoIntrinsics::Boolean => self.boolean_prototype(),
            ProtoIntrinsics::Error => self.error_prototype(),
            ProtoIntrinsics::Number => self.number_prototype(),
            ProtoIntrinsics::Object => self.object_prototype(),
            ProtoIntrinsics::RangeError => self.range_error_prototype(),
            ProtoIntrinsics::String => self.string_prototype(),
            ProtoIntrinsics::TypeError => self.type_error_prototype(),
        }
    }

    /// Returns the pre-allocated object of an intrinsic constructor.
    pub(crate) fn intrinsic_constructor(&self, index: IntrinsicConstructorIndexes) -> Object {
        match index {
            IntrinsicConstructorIndexes::Array => self.array,
            IntrinsicConstructorIndexes::Boolean => self.boolean,
            IntrinsicConstructorIndexes::Error => self.error,
            IntrinsicConstructorIndexes::Number => self.number,
            IntrinsicConstructorIndexes::Object => self.object,
            IntrinsicConstructorIndexes::RangeError => self.range_error,
            IntrinsicConstructorIndexes::String => self.string,
            IntrinsicConstructorIndexes::Symbol => self.symbol,
            IntrinsicConstructorIndexes::TypeError => self.type_error,
            #[cfg(feature = "intl")]
            IntrinsicConstructorIndexes::ListFormat => self.list_format,
        }
    }

    /// %Array%
    pub(crate) fn array(&self) -> Function {
        Function(self.array)
    }

    /// %Array.prototype%
    pub(crate) fn array_prototype(&self) -> Object {
        self.array_prototype
    }

    /// %Boolean%
    pub(crate) fn boolean(&self) -> Function {
        Function(self.boolean)
    }

    /// %Boolean.prototype%
    pub(crate) fn boolean_prototype(&self) -> Object {
        self.boolean_prototype
    }

    /// %Error%
    pub(crate) fn error(&self) -> Function {
        Function(self.error)
    }

    /// %Error.prototype%
    pub(crate) fn error_prototype(&self) -> Object {
        self.error_prototype
    }

    /// %Function.prototype%
    pub(crate) fn function_prototype(&self) -> Object {
        self.function_prototype
    }

    /// %Intl%
    #[cfg(feature = "intl")]
    pub(crate) fn intl(&self) -> Object {
        self.intl
    }

    /// %Intl.ListFormat%
    #[cfg(feature = "intl")]
    pub(crate) fn list_format(&self) -> Function {
        Function(self.list_format)
    }

    /// %Intl.ListFormat.prototype%
    #[cfg(feature = "intl")]
    pub(crate) fn list_format_prototype(&self) -> Object {
        self.list_format_prototype
    }

    /// %Number%
    pub(crate) fn number(&self) -> Function {
        Function(self.number)
    }

    /// %Number.prototype%
    pub(crate) fn number_prototype(&self) -> Object {
        self.number_prototype
    }

    /// %Object%
    pub(crate) fn object(&self) -> Function {
        Function(self.object)
    }

    /// %Object.prototype%
    pub(crate) fn object_prototype(&self) -> Object {
        self.object_prototype
    }

    /// %RangeError%
    pub(crate) fn range_error(&self) -> Function {
        Function(self.range_error)
    }

    /// %RangeError.prototype%
    pub(crate) fn range_error_prototype(&self) -> Object {
        self.range_error_prototype
    }

    /// %String%
    pub(crate) fn string(&self) -> Function {
        Function(self.string)
    }

    /// %String.prototype%
    pub(crate) fn string_prototype(&self) -> Object {
        self.string_prototype
    }

    /// %Symbol%
    pub(crate) fn symbol(&self) -> Function {
        Function(self.symbol)
    }

    /// %Symbol.prototype%
    pub(crate) fn symbol_prototype(&self) -> Object {
        self.symbol_prototype
    }

    /// %TypeError%
    pub(crate) fn type_error(&self) -> Function {
        Function(self.type_error)
    }

    /// %TypeError.prototype%
    pub(crate) fn type_error_prototype(&self) -> Object {
        self.type_error_prototype
    }
}
