// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{get, has_own_property, is_array, to_object, to_property_key},
        builders::OrdinaryObjectBuilder,
        builtins::{
            ArgumentsList, Behaviour, Builtin, primitive_objects::PrimitiveObjectData,
        },
        execution::{Agent, JsResult, Realm},
        types::{Object, ObjectKind, PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeHasOwnProperty;

impl Builtin for ObjectPrototypeHasOwnProperty {
    const NAME: &'static str = "hasOwnProperty";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::has_own_property);
}

struct ObjectPrototypeToString;

impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;

impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.2 Object.prototype.hasOwnProperty ( V )](https://tc39.es/ecma262/#sec-object.prototype.hasownproperty)
    fn has_own_property(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 3. Return ? HasOwnProperty(O, P).
        has_own_property(agent, o, p).map(Value::Boolean)
    }

    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. If the this value is undefined, return "[object Undefined]".
        // 2. If the this value is null, return "[object Null]".
        match this_value {
            Value::Undefined => return Ok(Value::from_str(agent, "[object Undefined]")),
            Value::Null => return Ok(Value::from_str(agent, "[object Null]")),
            _ => {}
        }
        // 3. Let O be ! ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 4. Let isArray be ? IsArray(O).
        let builtin_tag = if is_array(agent, o.into_value())? {
            // 5. If isArray is true, let builtinTag be "Array".
            "Array"
        } else {
            builtin_tag(agent, o)
        };
        // 15. Let tag be ? Get(O, %Symbol.toStringTag%).
        let tag = get(
            agent,
            o,
            PropertyKey::from(WellKnownSymbolIndexes::ToStringTag),
        )?;
        // 16. If tag is not a String, set tag to builtinTag.
        let tag = match tag {
            Value::String(tag) => tag.to_string_lossy(agent).into_owned(),
            _ => builtin_tag.to_string(),
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(String::from_string(agent, format!("[object {tag}]")).into_value())
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        to_object(agent, this_value).map(Object::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: Realm) {
        let intrinsics = agent[realm].intrinsics();
        let this = intrinsics.object_prototype();
        let object_constructor = intrinsics.object();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            // has an [[Extensible]] internal slot whose value is true.
            .with_extensible(true)
            // has a [[Prototype]] internal slot whose value is null.
            .with_property_capacity(4)
            .with_constructor_property(object_constructor)
            .with_builtin_function_property::<ObjectPrototypeHasOwnProperty>()
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>()
            .build();
    }
}

/// Steps 6 to 14 of Object.prototype.toString: the tag implied by the
/// internal slots of `o`.
fn builtin_tag(agent: &Agent, o: Object) -> &'static str {
    match o.kind(agent) {
        // 7. Else if O has a [[Call]] internal method, let builtinTag be
        //    "Function".
        ObjectKind::BuiltinFunction(_) => "Function",
        // 8. Else if O has an [[ErrorData]] internal slot, let builtinTag be
        //    "Error".
        ObjectKind::Error => "Error",
        // 9. Else if O has a [[BooleanData]] internal slot, let builtinTag be
        //    "Boolean".
        ObjectKind::PrimitiveObject(PrimitiveObjectData::Boolean(_)) => "Boolean",
        // 10. Else if O has a [[NumberData]] internal slot, let builtinTag be
        //     "Number".
        ObjectKind::PrimitiveObject(PrimitiveObjectData::Number(_)) => "Number",
        // 11. Else if O has a [[StringData]] internal slot, let builtinTag be
        //     "String".
        ObjectKind::PrimitiveObject(PrimitiveObjectData::String(_)) => "String",
        // 14. Else, let builtinTag be "Object".
        ObjectKind::PrimitiveObject(PrimitiveObjectData::Symbol(_))
        | ObjectKind::Ordinary
        | ObjectKind::Array => "Object",
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::{create_array_from_list, to_string},
        builtins::ordinary_object_create,
        execution::{Agent, Options},
        types::Value,
    };

    fn object_to_string(agent: &mut Agent, value: Value) -> std::string::String {
        // String(value) goes through OrdinaryToPrimitive and thus
        // Object.prototype.toString for objects that do not override it.
        let string = to_string(agent, value).unwrap();
        string.to_string_lossy(agent).into_owned()
    }

    #[test]
    fn builtin_tags() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let object_prototype = agent.current_realm().intrinsics().object_prototype();
            let object = ordinary_object_create(agent, Some(object_prototype));
            assert_eq!(object_to_string(agent, object.into_value()), "[object Object]");
            let array = create_array_from_list(agent, &[]);
            // Array.prototype has no toString of its own here.
            assert_eq!(object_to_string(agent, array.into_value()), "[object Array]");
        });
    }
}
