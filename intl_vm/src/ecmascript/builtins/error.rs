// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::{Agent, agent::ExceptionType},
    types::{Object, ObjectHeapData, ObjectKind, PropertyEntry, PropertyKey, String},
};

/// Creates an error object of the given type in the current realm, as the
/// error constructors do when called with a message.
pub(crate) fn create_error_object(
    agent: &mut Agent,
    kind: ExceptionType,
    message: Option<String>,
) -> Object {
    let intrinsics = agent.current_realm().intrinsics();
    let prototype = match kind {
        ExceptionType::Error => intrinsics.error_prototype(),
        ExceptionType::RangeError => intrinsics.range_error_prototype(),
        ExceptionType::TypeError => intrinsics.type_error_prototype(),
    };
    let error = Object::create(agent, ObjectHeapData::new(Some(prototype), ObjectKind::Error));
    if let Some(message) = message {
        // a. Let msg be ? ToString(message).
        // b. Perform CreateNonEnumerableDataPropertyOrThrow(O, "message", msg).
        let key = PropertyKey::from_str(agent, "message");
        agent[error]
            .properties
            .set(key, PropertyEntry::data(message.into_value(), true, false, true));
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{abstract_operations::get, execution::Options, types::Value};

    #[test]
    fn thrown_errors_carry_name_and_message() {
        let mut agent = Agent::new(Options::default());
        let realm = agent.create_realm();
        agent.run_in_realm(realm, |agent| {
            let error = agent.throw_exception(
                ExceptionType::RangeError,
                "Incorrect locale information provided",
            );
            let Value::Object(object) = error.value() else {
                panic!("thrown value is not an object");
            };
            assert!(object.is_error(agent));
            let name = PropertyKey::from_str(agent, "name");
            let name = get(agent, object, name).unwrap();
            assert_eq!(name, Value::from_str(agent, "RangeError"));
            assert_eq!(
                error.to_string(agent),
                "RangeError: Incorrect locale information provided"
            );
        });
    }
}
