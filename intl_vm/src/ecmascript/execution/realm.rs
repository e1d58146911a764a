// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

use super::{Agent, ExecutionContext};
use crate::{
    ecmascript::{
        builtins::ordinary::ordinary_define_own_property,
        types::{Object, ObjectHeapData, ObjectKind, PropertyDescriptor, PropertyKey, Value},
    },
    heap::RealmIndex,
};
pub(crate) use intrinsics::{IntrinsicConstructorIndexes, Intrinsics, ProtoIntrinsics};

/// A handle to a [`RealmRecord`] owned by an [`Agent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Realm(pub(crate) RealmIndex);

impl Realm {
    /// ### \[\[GlobalObject]]
    pub fn global_object(self, agent: &Agent) -> Object {
        agent[self].global_object
    }
}

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// Before it is evaluated, all ECMAScript code must be associated with a
/// realm. Conceptually, a realm consists of a set of intrinsic objects, an
/// ECMAScript global environment, all of the ECMAScript code that is loaded
/// within the scope of that global environment, and other associated state
/// and resources.
#[derive(Debug)]
pub struct RealmRecord {
    /// ### \[\[Intrinsics]]
    ///
    /// The intrinsic values used by code associated with this realm.
    pub(crate) intrinsics: Intrinsics,

    /// ### \[\[GlobalObject]]
    ///
    /// The global object for this realm.
    pub(crate) global_object: Object,
}

impl RealmRecord {
    pub(crate) fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }
}

/// ### [9.3.1 CreateRealm ( )](https://tc39.es/ecma262/#sec-createrealm)
///
/// The abstract operation CreateRealm takes no arguments and returns a Realm
/// Record.
pub fn create_realm(agent: &mut Agent) -> Realm {
    // 1. Let realmRec be a new Realm Record.
    let realm_rec = RealmRecord {
        // 2. Perform CreateIntrinsics(realmRec).
        intrinsics: Intrinsics::new(agent),
        // 4. Set realmRec.[[GlobalObject]] to undefined.
        // NOTE: The global object is allocated up front and initialised by
        // SetRealmGlobalObject.
        global_object: Object::create(agent, ObjectHeapData::new(None, ObjectKind::Ordinary)),
    };

    // 7. Return realmRec.
    agent.heap.realms.push(realm_rec);
    let realm = Realm(RealmIndex::last(&agent.heap.realms));
    Intrinsics::create_intrinsics(agent, realm);
    realm
}

/// ### [9.3.3 SetRealmGlobalObject ( realmRec, globalObj, thisValue )](https://tc39.es/ecma262/#sec-setrealmglobalobject)
fn set_realm_global_object(agent: &mut Agent, realm: Realm) {
    // 1. If globalObj is undefined, then
    // a. Let intrinsics be realmRec.[[Intrinsics]].
    // b. Set globalObj to OrdinaryObjectCreate(intrinsics.[[%Object.prototype%]]).
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let global_object = agent[realm].global_object;
    agent[global_object].prototype = Some(object_prototype);
    // 3. If thisValue is undefined, set thisValue to globalObj.
    // 4. Set realmRec.[[GlobalObject]] to globalObj.
    // NOTE: There is no global environment: nothing evaluates code in it.
}

/// ### [9.3.4 SetDefaultGlobalBindings ( realmRec )](https://tc39.es/ecma262/#sec-setdefaultglobalbindings)
///
/// The abstract operation SetDefaultGlobalBindings takes argument realmRec (a
/// Realm Record) and returns either a normal completion containing an Object
/// or a throw completion.
///
/// The global object is a fresh ordinary object, so defining its properties
/// cannot fail.
fn set_default_global_bindings(agent: &mut Agent, realm: Realm) -> Object {
    // 1. Let global be realmRec.[[GlobalObject]].
    let global = agent[realm].global_object;

    // 2. For each property of the Global Object specified in clause 19, do
    let define_property = |agent: &mut Agent,
                               name: &str,
                               value: Value,
                               writable: bool,
                               configurable: bool| {
        // a. Let name be the String value of the property name.
        let name = PropertyKey::from_str(agent, name);
        // b. Let desc be the fully populated data Property Descriptor for the
        //    property, containing the specified attributes for the property.
        //    For properties listed in 19.2, 19.3, or 19.4 the value of the
        //    [[Value]] attribute is the corresponding intrinsic object from
        //    realmRec.
        let desc = PropertyDescriptor {
            value: Some(value),
            writable: Some(writable),
            enumerable: Some(false),
            configurable: Some(configurable),
            ..Default::default()
        };
        // c. Perform ? DefinePropertyOrThrow(global, name, desc).
        let defined = ordinary_define_own_property(agent, global, name, desc);
        debug_assert!(defined);
    };

    // 19.1 Value Properties of the Global Object
    define_property(agent, "globalThis", global.into_value(), true, true);
    define_property(agent, "Infinity", f64::INFINITY.into(), false, false);
    define_property(agent, "NaN", f64::NAN.into(), false, false);
    define_property(agent, "undefined", Value::Undefined, false, false);

    // 19.3 Constructor Properties of the Global Object
    let intrinsics = agent[realm].intrinsics();
    let constructors = [
        ("Array", intrinsics.array()),
        ("Boolean", intrinsics.boolean()),
        ("Error", intrinsics.error()),
        ("Number", intrinsics.number()),
        ("Object", intrinsics.object()),
        ("RangeError", intrinsics.range_error()),
        ("String", intrinsics.string()),
        ("Symbol", intrinsics.symbol()),
        ("TypeError", intrinsics.type_error()),
    ];
    for (name, constructor) in constructors {
        define_property(agent, name, constructor.into_value(), true, true);
    }

    // 19.4 Other Properties of the Global Object
    #[cfg(feature = "intl")]
    {
        let intl = agent[realm].intrinsics().intl();
        define_property(agent, "Intl", intl.into_value(), true, true);
    }

    // 3. Return global.
    global
}

/// ### [9.6 InitializeHostDefinedRealm ( )](https://tc39.es/ecma262/#sec-initializehostdefinedrealm)
///
/// `initialize_global_object` is called with the realm running to create
/// any host-defined global object properties.
pub fn initialize_host_defined_realm(
    agent: &mut Agent,
    initialize_global_object: Option<impl FnOnce(&mut Agent, Object)>,
) -> Realm {
    // 1. Let realm be CreateRealm().
    let realm = create_realm(agent);

    // 2. Let newContext be a new execution context.
    let new_context = ExecutionContext {
        // 3. Set the Function of newContext to null.
        function: None,
        // 4. Set the Realm of newContext to realm.
        realm,
    };

    // 6. Push newContext onto the execution context stack; newContext is now
    //    the running execution context.
    agent.execution_context_stack.push(new_context);

    // 9. Perform SetRealmGlobalObject(realm, global, thisValue).
    set_realm_global_object(agent, realm);

    // 10. Let globalObj be ? SetDefaultGlobalBindings(realm).
    let global_object = set_default_global_bindings(agent, realm);

    // 11. Create any host-defined global object properties on globalObj.
    if let Some(initialize_global_object) = initialize_global_object {
        initialize_global_object(agent, global_object);
    }

    // 12. Return UNUSED.
    // NOTE: The realm is handed back to the embedder, which re-enters it
    // through Agent::run_in_realm.
    agent.execution_context_stack.pop();
    realm
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::get,
        execution::{Agent, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn realms_do_not_share_intrinsics() {
        let mut agent = Agent::new(Options::default());
        let first = agent.create_realm();
        let second = agent.create_realm();
        assert_ne!(
            agent[first].intrinsics().object_prototype(),
            agent[second].intrinsics().object_prototype()
        );
        assert_ne!(first.global_object(&agent), second.global_object(&agent));
    }

    #[test]
    fn global_this_is_the_global_object() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let global = realm.global_object(agent);
            let key = PropertyKey::from_str(agent, "globalThis");
            let value = get(agent, global, key).unwrap();
            assert_eq!(value, Value::Object(global));
        });
    }
}
