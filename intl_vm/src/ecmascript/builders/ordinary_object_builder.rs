// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    builtin_function_builder::BuiltinFunctionBuilder,
    property_builder::{self, PropertyBuilder},
};
use crate::ecmascript::{
    builtins::Builtin,
    execution::{Agent, Realm},
    types::{
        Function, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey, PropertyStorage,
    },
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
pub trait PrototypeState {
    fn into_prototype(self) -> Option<Object>;
}

impl PrototypeState for NoPrototype {
    fn into_prototype(self) -> Option<Object> {
        None
    }
}

impl PrototypeState for CreatorPrototype {
    fn into_prototype(self) -> Option<Object> {
        Some(self.0)
    }
}

#[doc(hidden)]
pub trait PropertiesState {
    fn into_storage(self) -> PropertyStorage;
}

impl PropertiesState for NoProperties {
    fn into_storage(self) -> PropertyStorage {
        PropertyStorage::default()
    }
}

impl PropertiesState for CreatorProperties {
    fn into_storage(self) -> PropertyStorage {
        properties_into_storage(self.0)
    }
}

/// Collects builder properties into object storage, keeping their order.
///
/// ## Panics
///
/// In debug builds, if the same key was added twice.
pub(super) fn properties_into_storage(
    properties: Vec<(PropertyKey, PropertyEntry)>,
) -> PropertyStorage {
    let mut storage = PropertyStorage::with_capacity(properties.len());
    for (key, entry) in properties {
        debug_assert!(!storage.contains(&key), "Duplicate key found: {key:?}");
        storage.set(key, entry);
    }
    storage
}

pub struct OrdinaryObjectBuilder<'agent, P, Pr> {
    pub(crate) agent: &'agent mut Agent,
    this: Object,
    realm: Realm,
    prototype: P,
    extensible: bool,
    properties: Pr,
}

impl<'agent> OrdinaryObjectBuilder<'agent, NoPrototype, NoProperties> {
    /// Fills in an intrinsic object that was reserved when its realm was
    /// created.
    #[must_use]
    pub(crate) fn new_intrinsic_object(
        agent: &'agent mut Agent,
        realm: Realm,
        this: Object,
    ) -> Self {
        Self {
            agent,
            this,
            realm,
            prototype: NoPrototype,
            extensible: true,
            properties: NoProperties,
        }
    }
}

impl<P, Pr> OrdinaryObjectBuilder<'_, P, Pr> {
    #[must_use]
    pub fn with_extensible(self, extensible: bool) -> Self {
        Self { extensible, ..self }
    }
}

impl<'agent, Pr> OrdinaryObjectBuilder<'agent, NoPrototype, Pr> {
    #[must_use]
    pub fn with_prototype(
        self,
        prototype: Object,
    ) -> OrdinaryObjectBuilder<'agent, CreatorPrototype, Pr> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: CreatorPrototype(prototype),
            extensible: self.extensible,
            properties: self.properties,
        }
    }
}

impl<'agent, P> OrdinaryObjectBuilder<'agent, P, NoProperties> {
    #[must_use]
    pub fn with_property_capacity(
        self,
        cap: usize,
    ) -> OrdinaryObjectBuilder<'agent, P, CreatorProperties> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: self.prototype,
            extensible: self.extensible,
            properties: CreatorProperties(Vec::with_capacity(cap)),
        }
    }
}

impl<P> OrdinaryObjectBuilder<'_, P, CreatorProperties> {
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

    #[must_use]
    pub fn with_constructor_property(mut self, constructor: Function) -> Self {
        let property = PropertyBuilder::new(self.agent)
            .with_enumerable(false)
            .with_key_from_str("constructor")
            .with_value(constructor.into_value())
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

impl<P: PrototypeState, Pr: PropertiesState> OrdinaryObjectBuilder<'_, P, Pr> {
    pub fn build(self) -> Object {
        let Self {
            agent,
            this,
            prototype,
            extensible,
            properties,
            ..
        } = self;
        debug_assert_eq!(agent[this].properties.len(), 0);
        agent[this] = ObjectHeapData {
            extensible,
            prototype: prototype.into_prototype(),
            properties: properties.into_storage(),
            kind: ObjectKind::Ordinary,
        };
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::get,
        builtins::{ArgumentsList, Behaviour},
        execution::{JsResult, Options},
        types::{InternalMethods, Value},
    };

    struct Answer;

    impl Builtin for Answer {
        const NAME: &'static str = "answer";
        const LENGTH: u8 = 0;
        const BEHAVIOUR: Behaviour = Behaviour::Regular(Answer::behaviour);
    }

    impl Answer {
        fn behaviour(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
            Ok(Value::Number(42.0))
        }
    }

    #[test]
    fn builds_objects_with_builtin_methods() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let object_prototype = agent.current_realm().intrinsics().object_prototype();
            let this = Object::create(agent, ObjectHeapData::new(None, ObjectKind::Ordinary));
            let object = OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
                .with_prototype(object_prototype)
                .with_property_capacity(2)
                .with_builtin_function_property::<Answer>()
                .with_property(|builder| {
                    builder
                        .with_key_from_str("hidden")
                        .with_enumerable(false)
                        .with_value_readonly(Value::Null)
                        .build()
                })
                .build();
            assert_eq!(
                object.internal_get_prototype_of(agent).unwrap(),
                Some(object_prototype)
            );
            let answer = PropertyKey::from_str(agent, "answer");
            let Value::Object(method) = get(agent, object, answer).unwrap() else {
                panic!("answer is not an object");
            };
            assert!(method.as_function(agent).is_some());
            let hidden = PropertyKey::from_str(agent, "hidden");
            let descriptor = object
                .internal_get_own_property(agent, hidden)
                .unwrap()
                .unwrap();
            assert_eq!(descriptor.writable, Some(false));
            assert_eq!(descriptor.enumerable, Some(false));
            assert_eq!(descriptor.configurable, Some(true));
        });
    }
}
