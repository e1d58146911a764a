// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{fmt, ops::Deref, rc::Rc};

use crate::ecmascript::{
    execution::{
        Agent, ExecutionContext, IntrinsicConstructorIndexes, JsResult, Realm,
        agent::ExceptionType,
    },
    types::{
        Function, Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey,
        PropertyStorage, String, Value,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;
/// Behaviour of a function created by the embedder at runtime. Closures can
/// capture host state, such as a call counter shared with the embedder.
pub type ClosureFn = Rc<dyn Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>>;

#[derive(Clone)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
    Closure(ClosureFn),
}

impl Behaviour {
    pub(crate) fn is_constructor(&self) -> bool {
        matches!(self, Behaviour::Constructor(_))
    }
}

impl fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behaviour::Regular(_) => f.write_str("Regular"),
            Behaviour::Constructor(_) => f.write_str("Constructor"),
            Behaviour::Closure(_) => f.write_str("Closure"),
        }
    }
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;
}

pub(crate) trait BuiltinIntrinsicConstructor: Builtin {
    const INDEX: IntrinsicConstructorIndexes;
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs<'a> {
    pub length: u32,
    pub name: &'a str,
    pub realm: Option<Realm>,
    pub prototype: Option<Object>,
    pub prefix: Option<&'static str>,
}

impl<'a> BuiltinFunctionArgs<'a> {
    pub fn new(length: u32, name: &'a str, realm: Realm) -> Self {
        Self {
            length,
            name,
            realm: Some(realm),
            ..Default::default()
        }
    }
}

/// Internal slots of a built-in function object.
#[derive(Debug, Clone)]
pub struct BuiltinFunctionHeapData {
    pub(crate) behaviour: Behaviour,
    /// \[\[InitialName]]
    pub(crate) initial_name: Option<String>,
    /// \[\[Realm]]
    pub(crate) realm: Realm,
}

impl Function {
    /// Returns the \[\[InitialName]] of the function, or the empty string.
    pub fn initial_name(self, agent: &Agent) -> std::string::String {
        match self.into_object().kind(agent) {
            ObjectKind::BuiltinFunction(BuiltinFunctionHeapData {
                initial_name: Some(name),
                ..
            }) => name.to_string_lossy(agent).into_owned(),
            _ => std::string::String::new(),
        }
    }
}

/// ### [10.3.3 BuiltinCallOrConstruct ( F, thisArgument, argumentsList, newTarget )](https://tc39.es/ecma262/#sec-builtincallorconstruct)
///
/// The abstract operation BuiltinCallOrConstruct takes arguments F (a built-in
/// function object), thisArgument (an ECMAScript language value or
/// uninitialized), argumentsList (a List of ECMAScript language values), and
/// newTarget (a constructor or undefined) and returns either a normal
/// completion containing an ECMAScript language value or a throw completion.
pub(crate) fn builtin_call_or_construct(
    agent: &mut Agent,
    f: Function,
    this_argument: Value,
    arguments_list: ArgumentsList,
    new_target: Option<Function>,
) -> JsResult<Value> {
    // 5. Let calleeRealm be F.[[Realm]].
    let (callee_realm, behaviour) = match f.into_object().kind(agent) {
        ObjectKind::BuiltinFunction(heap_data) => (heap_data.realm, heap_data.behaviour.clone()),
        _ => {
            return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
        }
    };
    if agent.options.print_internals {
        let kind = if new_target.is_some() {
            "Constructing"
        } else {
            "Calling"
        };
        eprintln!(
            "{kind} builtin {} with {} argument(s)",
            f.initial_name(agent),
            arguments_list.len()
        );
    }
    // 3. Let calleeContext be a new execution context.
    let callee_context = ExecutionContext {
        // 4. Set the Function of calleeContext to F.
        function: Some(f),
        // 6. Set the Realm of calleeContext to calleeRealm.
        realm: callee_realm,
    };
    // 9. Push calleeContext onto the execution context stack; calleeContext
    //    is now the running execution context.
    agent.execution_context_stack.push(callee_context);
    // 10. Let result be the Completion Record that is the result of
    //     evaluating F in a manner that conforms to the specification of F.
    let result = match behaviour {
        Behaviour::Regular(func) => {
            if new_target.is_some() {
                Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"))
            } else {
                func(agent, this_argument, arguments_list)
            }
        }
        Behaviour::Constructor(func) => func(
            agent,
            this_argument,
            arguments_list,
            new_target.map(Function::into_object),
        ),
        Behaviour::Closure(func) => {
            if new_target.is_some() {
                Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"))
            } else {
                func(agent, this_argument, arguments_list)
            }
        }
    };
    // 12. Remove calleeContext from the execution context stack and restore
    //     callerContext as the running execution context.
    agent.execution_context_stack.pop();
    // 13. Return ? result.
    result
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The abstract operation CreateBuiltinFunction takes arguments behaviour (an
/// Abstract Closure, a set of algorithm steps, or some other definition of a
/// function's behaviour provided in this specification), length (a
/// non-negative integer or +∞), name (a property key or a Private Name), and
/// additionalInternalSlotsList (a List of names of internal slots) and
/// optional arguments realm (a Realm Record), prototype (an Object or null),
/// and prefix (a String) and returns a function object.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> Function {
    // 1. If realm is not present, set realm to the current Realm Record.
    let realm = args.realm.unwrap_or_else(|| agent.current_realm_id());
    // 2. If prototype is not present, set prototype to
    //    realm.[[Intrinsics]].[[%Function.prototype%]].
    let prototype = args
        .prototype
        .unwrap_or_else(|| agent[realm].intrinsics().function_prototype());
    // 11. If prefix is not present, then
    // a. Perform SetFunctionName(func, name).
    // 12. Else,
    // a. Perform SetFunctionName(func, name, prefix).
    let initial_name = match args.prefix {
        Some(prefix) => String::from_string(agent, format!("{prefix} {}", args.name)),
        None => String::from_str(agent, args.name),
    };
    let length_key = PropertyKey::from_str(agent, "length");
    let name_key = PropertyKey::from_str(agent, "name");
    let mut properties = PropertyStorage::with_capacity(2);
    // 10. Perform SetFunctionLength(func, length).
    properties.set(
        length_key,
        PropertyEntry::data(args.length.into(), false, false, true),
    );
    properties.set(
        name_key,
        PropertyEntry::data(initial_name.into_value(), false, false, true),
    );
    // 5. Let func be a new built-in function object that, when called,
    //    performs the action described by behaviour.
    // 6. Set func.[[Prototype]] to prototype.
    // 7. Set func.[[Extensible]] to true.
    let func = Object::create(
        agent,
        ObjectHeapData {
            extensible: true,
            prototype: Some(prototype),
            properties,
            kind: ObjectKind::BuiltinFunction(BuiltinFunctionHeapData {
                behaviour,
                // 9. Set func.[[InitialName]] to null.
                initial_name: Some(initial_name),
                // 8. Set func.[[Realm]] to realm.
                realm,
            }),
        },
    );
    // 13. Return func.
    Function(func)
}

/// Creates a built-in function in the current realm whose behaviour is a
/// Rust closure.
pub fn create_builtin_closure(
    agent: &mut Agent,
    name: &str,
    length: u32,
    closure: impl Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value> + 'static,
) -> Function {
    create_builtin_function(
        agent,
        Behaviour::Closure(Rc::new(closure)),
        BuiltinFunctionArgs {
            length,
            name,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::ecmascript::{
        abstract_operations::{call_function, construct, get},
        execution::Options,
    };

    #[test]
    fn closures_capture_host_state() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let calls = Rc::new(Cell::new(0u32));
            let counter = calls.clone();
            let function = create_builtin_closure(agent, "count", 0, move |_, _, _| {
                counter.set(counter.get() + 1);
                Ok(Value::Undefined)
            });
            call_function(agent, function, Value::Undefined, None).unwrap();
            call_function(agent, function, Value::Undefined, None).unwrap();
            assert_eq!(calls.get(), 2);
            assert!(construct(agent, function, None, None).is_err());
        });
    }

    #[test]
    fn function_name_and_length_properties() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let function = create_builtin_function(
                agent,
                Behaviour::Regular(|_, _, _| Ok(Value::Undefined)),
                BuiltinFunctionArgs {
                    length: 1,
                    name: "localeMatcher",
                    prefix: Some("get"),
                    ..Default::default()
                },
            );
            let name = PropertyKey::from_str(agent, "name");
            let length = PropertyKey::from_str(agent, "length");
            let name = get(agent, function.into_object(), name).unwrap();
            let expected = Value::from_str(agent, "get localeMatcher");
            assert_eq!(name, expected);
            assert_eq!(
                get(agent, function.into_object(), length).unwrap(),
                Value::Number(1.0)
            );
        });
    }
}
