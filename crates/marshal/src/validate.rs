// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Argument validators for host-supplied values.
//!
//! Every host-facing entry point runs these before any marshaling or native
//! work. Each validator checks exactly one precondition, is pure with
//! respect to the value handle, and fails with a message naming the violated
//! precondition. A failed validator aborts the call — validators are early
//! return points, not resumable conditions.

use crate::{check_host, MarshalError, Result};
use host_env::{CallContext, HostEnv, HostValue, ValueKind};

/// Checks that a value is an object.
#[track_caller]
pub fn expect_object<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<()> {
    if check_host(env, env.kind_of(value))? == ValueKind::Object {
        Ok(())
    } else {
        Err(MarshalError::validation("Argument is not an object!"))
    }
}

/// Checks that a value is a string.
#[track_caller]
pub fn expect_string<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<()> {
    if check_host(env, env.kind_of(value))? == ValueKind::String {
        Ok(())
    } else {
        Err(MarshalError::validation("Argument is not a string!"))
    }
}

/// Checks that a value is a number.
#[track_caller]
pub fn expect_number<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<()> {
    if check_host(env, env.kind_of(value))? == ValueKind::Number {
        Ok(())
    } else {
        Err(MarshalError::validation("Argument is not a number!"))
    }
}

/// Checks that a value is an array.
#[track_caller]
pub fn expect_array<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<()> {
    if check_host(env, env.is_array(value))? {
        Ok(())
    } else {
        Err(MarshalError::validation("Argument is not an array!"))
    }
}

/// Checks that a value is a typed buffer.
#[track_caller]
pub fn expect_typed_buffer<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<()> {
    if check_host(env, env.is_typed_buffer(value))? {
        Ok(())
    } else {
        Err(MarshalError::validation("Argument is not a typed-array!"))
    }
}

/// Unwraps an optional produced by a foreign call, failing on `None`.
#[track_caller]
pub fn expect_some<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| MarshalError::validation("Argument is null!"))
}

/// Checks that `value <= max`. Equality passes; only strictly greater fails.
#[track_caller]
pub fn expect_at_most(value: u32, max: u32) -> Result<()> {
    if value > max {
        Err(MarshalError::validation(format!(
            "Argument is greater than max: {value} > {max}"
        )))
    } else {
        Ok(())
    }
}

/// Checks that the current call entered through a constructor invocation.
#[track_caller]
pub fn expect_constructor_call<E: HostEnv + ?Sized>(env: &E, ctx: CallContext) -> Result<()> {
    if check_host(env, env.is_constructor_call(ctx))? {
        Ok(())
    } else {
        Err(MarshalError::validation(
            "Function not used as a constructor!",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::{FakeHostEnv, Value};

    #[test]
    fn test_expect_object() {
        let env = FakeHostEnv::new();
        assert!(expect_object(&env, env.value(Value::Object)).is_ok());
        // Arrays and typed buffers report as objects.
        assert!(expect_object(&env, env.int_array(&[1])).is_ok());

        let err = expect_object(&env, env.number(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Argument is not an object!");
    }

    #[test]
    fn test_expect_string() {
        let env = FakeHostEnv::new();
        assert!(expect_string(&env, env.string("hi")).is_ok());
        let err = expect_string(&env, env.number(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Argument is not a string!");
    }

    #[test]
    fn test_expect_number() {
        let env = FakeHostEnv::new();
        assert!(expect_number(&env, env.number(3.5)).is_ok());
        let err = expect_number(&env, env.string("3.5")).unwrap_err();
        assert_eq!(err.to_string(), "Argument is not a number!");
    }

    #[test]
    fn test_expect_array_rejects_all_non_arrays() {
        let env = FakeHostEnv::new();
        assert!(expect_array(&env, env.int_array(&[])).is_ok());

        let non_arrays = [
            env.value(Value::Undefined),
            env.value(Value::Null),
            env.value(Value::Bool(true)),
            env.number(0.0),
            env.string(""),
            env.value(Value::Object),
            env.typed_buffer(host_env::BufferElementType::Int32, vec![0; 4]),
        ];
        for value in non_arrays {
            let err = expect_array(&env, value).unwrap_err();
            assert_eq!(err.to_string(), "Argument is not an array!");
        }
    }

    #[test]
    fn test_expect_typed_buffer() {
        let env = FakeHostEnv::new();
        let buf = env.typed_buffer(host_env::BufferElementType::Float32, vec![0; 8]);
        assert!(expect_typed_buffer(&env, buf).is_ok());

        let err = expect_typed_buffer(&env, env.int_array(&[1])).unwrap_err();
        assert_eq!(err.to_string(), "Argument is not a typed-array!");
    }

    #[test]
    fn test_expect_some() {
        assert_eq!(expect_some(Some(5)).unwrap(), 5);
        let err = expect_some::<i32>(None).unwrap_err();
        assert_eq!(err.to_string(), "Argument is null!");
    }

    #[test]
    fn test_expect_at_most_boundary() {
        // Equal to max passes; one past fails with both values reported.
        assert!(expect_at_most(4, 4).is_ok());
        assert!(expect_at_most(0, 4).is_ok());
        let err = expect_at_most(5, 4).unwrap_err();
        assert_eq!(err.to_string(), "Argument is greater than max: 5 > 4");
    }

    #[test]
    fn test_expect_constructor_call() {
        let env = FakeHostEnv::new();
        assert!(expect_constructor_call(&env, env.call_context(true)).is_ok());

        let err = expect_constructor_call(&env, env.call_context(false)).unwrap_err();
        assert_eq!(err.to_string(), "Function not used as a constructor!");
    }
}
