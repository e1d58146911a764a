// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    ordinary_object_builder::properties_into_storage,
    property_builder::{self, PropertyBuilder},
};
use crate::ecmascript::{
    builtins::{Behaviour, Builtin, BuiltinFunctionHeapData, BuiltinIntrinsicConstructor},
    execution::{Agent, Realm},
    types::{Function, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey, String},
};

#[derive(Default, Clone, Copy)]
pub struct NoPrototype;

#[derive(Clone, Copy)]
pub struct CreatorPrototype(Object);

#[derive(Default, Clone, Copy)]
pub struct NoProperties;

#[derive(Clone)]
pub struct CreatorProperties(Vec<(PropertyKey, PropertyEntry)>);

#[doc(hidden)]
pub trait FunctionPropertiesState {
    fn into_list(self) -> Vec<(PropertyKey, PropertyEntry)>;
}

impl FunctionPropertiesState for NoProperties {
    fn into_list(self) -> Vec<(PropertyKey, PropertyEntry)> {
        Vec::new()
    }
}

impl FunctionPropertiesState for CreatorProperties {
    fn into_list(self) -> Vec<(PropertyKey, PropertyEntry)> {
        self.0
    }
}

#[doc(hidden)]
pub trait FunctionPrototypeState {
    fn into_prototype(self, agent: &Agent, realm: Realm) -> Object;
}

impl FunctionPrototypeState for NoPrototype {
    fn into_prototype(self, agent: &Agent, realm: Realm) -> Object {
        agent[realm].intrinsics().function_prototype()
    }
}

impl FunctionPrototypeState for CreatorPrototype {
    fn into_prototype(self, _: &Agent, _: Realm) -> Object {
        self.0
    }
}

pub struct BuiltinFunctionBuilder<'agent, P, Pr> {
    pub(crate) agent: &'agent mut Agent,
    this: Object,
    realm: Realm,
    prototype: P,
    length: u8,
    name: &'static str,
    behaviour: Behaviour,
    properties: Pr,
}

impl<'agent> BuiltinFunctionBuilder<'agent, NoPrototype, NoProperties> {
    #[must_use]
    pub fn new<T: Builtin>(agent: &'agent mut Agent, realm: Realm) -> Self {
        let this = Object::create(agent, ObjectHeapData::new(None, ObjectKind::Ordinary));
        Self::from_parts::<T>(agent, realm, this)
    }

    /// Fills in the intrinsic constructor `T` that was reserved when its
    /// realm was created.
    #[must_use]
    pub(crate) fn new_intrinsic_constructor<T: BuiltinIntrinsicConstructor>(
        agent: &'agent mut Agent,
        realm: Realm,
    ) -> Self {
        let this = agent[realm].intrinsics().intrinsic_constructor(T::INDEX);
        Self::from_parts::<T>(agent, realm, this)
    }

    /// Fills in a reserved intrinsic function object that is not a
    /// constructor, such as %Function.prototype%.
    #[must_use]
    pub(crate) fn new_intrinsic_function<T: Builtin>(
        agent: &'agent mut Agent,
        realm: Realm,
        this: Object,
    ) -> Self {
        Self::from_parts::<T>(agent, realm, this)
    }

    fn from_parts<T: Builtin>(agent: &'agent mut Agent, realm: Realm, this: Object) -> Self {
        Self {
            agent,
            this,
            realm,
            prototype: NoPrototype,
            length: T::LENGTH,
            name: T::NAME,
            behaviour: T::BEHAVIOUR,
            properties: NoProperties,
        }
    }
}

impl<'agent, Pr> BuiltinFunctionBuilder<'agent, NoPrototype, Pr> {
    #[must_use]
    pub fn with_prototype(
        self,
        prototype: Object,
    ) -> BuiltinFunctionBuilder<'agent, CreatorPrototype, Pr> {
        BuiltinFunctionBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: CreatorPrototype(prototype),
            length: self.length,
            name: self.name,
            behaviour: self.behaviour,
            properties: self.properties,
        }
    }
}

impl<'agent, P> BuiltinFunctionBuilder<'agent, P, NoProperties> {
    #[must_use]
    pub fn with_property_capacity(
        self,
        cap: usize,
    ) -> BuiltinFunctionBuilder<'agent, P, CreatorProperties> {
        BuiltinFunctionBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: self.prototype,
            length: self.length,
            name: self.name,
            behaviour: self.behaviour,
            properties: CreatorProperties(Vec::with_capacity(cap)),
        }
    }
}

impl<P> BuiltinFunctionBuilder<'_, P, CreatorProperties> {
    #[must_use]
    pub fn with_property(
        mut self,
        creator: impl FnOnce(
            PropertyBuilder<'_, property_builder::NoKey, property_builder::NoDefinition>,
        ) -> (PropertyKey, PropertyEntry),
    ) -> Self {
        let property = creator(PropertyBuilder::new(self.agent));
        self.properties.0.push(property);
        self
    }

    /// Defines the constructor's `"prototype"` property. It is neither
    /// writable, enumerable nor configurable.
    #[must_use]
    pub fn with_prototype_property(mut self, prototype: Object) -> Self {
        let property = PropertyBuilder::new(self.agent)
            .with_key_from_str("prototype")
            .with_enumerable(false)
            .with_configurable(false)
            .with_value_readonly(prototype.into_value())
            .build();
        self.properties.0.push(property);
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let value = BuiltinFunctionBuilder::new::<T>(self.agent, self.realm)
            .build()
            .into_value();
        let builder = PropertyBuilder::new(self.agent)
            .with_key_from_str(T::NAME)
            .with_configurable(T::CONFIGURABLE)
            .with_enumerable(T::ENUMERABLE);
        let property = if T::WRITABLE {
            builder.with_value(value).build()
        } else {
            builder.with_value_readonly(value).build()
        };
        self.properties.0.push(property);
        self
    }
}

impl<P: FunctionPrototypeState, Pr: FunctionPropertiesState> BuiltinFunctionBuilder<'_, P, Pr> {
    pub fn build(self) -> Function {
        let Self {
            agent,
            this,
            realm,
            prototype,
            length,
            name,
            behaviour,
            properties,
        } = self;
        let prototype = prototype.into_prototype(agent, realm);
        let initial_name = String::from_str(agent, name);
        let length_key = PropertyKey::from_str(agent, "length");
        let name_key = PropertyKey::from_str(agent, "name");
        let extra = properties.into_list();
        let mut list = Vec::with_capacity(extra.len() + 2);
        // SetFunctionLength and SetFunctionName come first, as in
        // CreateBuiltinFunction.
        list.push((
            length_key,
            PropertyEntry::data(u32::from(length).into(), false, false, true),
        ));
        list.push((
            name_key,
            PropertyEntry::data(initial_name.into_value(), false, false, true),
        ));
        list.extend(extra);
        debug_assert_eq!(agent[this].properties.len(), 0);
        agent[this] = ObjectHeapData {
            extensible: true,
            prototype: Some(prototype),
            properties: properties_into_storage(list),
            kind: ObjectKind::BuiltinFunction(BuiltinFunctionHeapData {
                behaviour,
                initial_name: Some(initial_name),
                realm,
            }),
        };
        Function(this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::{call_function, get, is_constructor},
        builtins::ArgumentsList,
        execution::{JsResult, Options},
        types::{InternalMethods, Value},
    };

    struct Twice;

    impl Builtin for Twice {
        const NAME: &'static str = "twice";
        const LENGTH: u8 = 1;
        const BEHAVIOUR: Behaviour = Behaviour::Regular(Twice::behaviour);
    }

    impl Twice {
        fn behaviour(_: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
            match arguments.get(0) {
                Value::Number(number) => Ok(Value::Number(number * 2.0)),
                _ => Ok(Value::Undefined),
            }
        }
    }

    #[test]
    fn builds_callable_functions() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let twice = BuiltinFunctionBuilder::new::<Twice>(agent, realm).build();
            assert!(is_constructor(agent, twice.into_value()).is_none());
            let result = call_function(
                agent,
                twice,
                Value::Undefined,
                Some(ArgumentsList::new(&[Value::Number(21.0)])),
            )
            .unwrap();
            assert_eq!(result, Value::Number(42.0));
            let function_prototype = agent.current_realm().intrinsics().function_prototype();
            assert_eq!(
                twice.into_object().internal_get_prototype_of(agent).unwrap(),
                Some(function_prototype)
            );
            let length = PropertyKey::from_str(agent, "length");
            let keys = twice.into_object().internal_own_property_keys(agent).unwrap();
            assert_eq!(keys[0], length);
            assert_eq!(
                get(agent, twice.into_object(), length).unwrap(),
                Value::Number(1.0)
            );
        });
    }
}
