// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: full host-facing call flows.
//!
//! These tests exercise the complete discipline — validate → convert →
//! native call under a status guard → surface — proving that exactly one
//! error reaches the host per failing call and that no foreign resource
//! outlives its call on any exit path.

use host_env::{HostEnv, HostStatusCode, HostValue};
use marshal::{
    array_shape, element_count, expect_array, expect_constructor_call, expect_string,
    int32_scalar_tensor, placeholder, string_value, ExceptionBridge, MarshalConfig,
};
use tensor_api::{DataType, StatusCode, TensorApi};
use test_support::{FakeHostEnv, FakeOp, FakeTensorLib, Value};

// ── A host-facing entry point, as the binding would write it ──

/// Creates a named placeholder from host arguments: a string name and a
/// shape array. Returns `None` after raising exactly one error on any
/// failure.
fn create_placeholder_entry(
    env: &FakeHostEnv,
    lib: &FakeTensorLib,
    ctx: host_env::CallContext,
    name_value: HostValue,
    shape_value: HostValue,
) -> Option<tensor_api::OpHandle> {
    let bridge = ExceptionBridge::new(env);
    let result = (|| {
        expect_constructor_call(env, ctx)?;
        expect_string(env, name_value)?;
        expect_array(env, shape_value)?;
        let name = string_value(env, name_value)?;
        let dims = array_shape(env, shape_value)?;
        let graph = lib.new_graph();
        placeholder(lib, graph, &name, DataType::Float, &dims)
    })();
    bridge.surface(result)
}

#[test]
fn test_entry_happy_path() {
    let env = FakeHostEnv::new();
    let lib = FakeTensorLib::new();

    let op = create_placeholder_entry(
        &env,
        &lib,
        env.call_context(true),
        env.string("input"),
        env.int_array(&[1, 784]),
    )
    .unwrap();

    let record = lib.op(op);
    assert_eq!(record.name, "input");
    assert_eq!(record.shape_attrs, vec![("shape".to_string(), vec![1, 784])]);
    assert_eq!(env.throw_count(), 0);

    // All statuses released.
    assert_eq!(lib.live_status_count(), 0);
}

#[test]
fn test_entry_validation_failure_raises_once_and_skips_native_work() {
    let env = FakeHostEnv::new();
    let lib = FakeTensorLib::new();

    // Shape argument is a number, not an array.
    let out = create_placeholder_entry(
        &env,
        &lib,
        env.call_context(true),
        env.string("input"),
        env.number(3.0),
    );

    assert!(out.is_none());
    assert_eq!(env.thrown(), vec!["Argument is not an array!".to_string()]);
    // Validation failed before any native call was made.
    let (created, _) = lib.status_counts();
    assert_eq!(created, 0);
}

#[test]
fn test_entry_non_constructor_call() {
    let env = FakeHostEnv::new();
    let lib = FakeTensorLib::new();

    let out = create_placeholder_entry(
        &env,
        &lib,
        env.call_context(false),
        env.string("x"),
        env.int_array(&[2]),
    );

    assert!(out.is_none());
    assert_eq!(
        env.thrown(),
        vec!["Function not used as a constructor!".to_string()]
    );
}

#[test]
fn test_entry_native_failure_funnels_code_and_message() {
    let env = FakeHostEnv::new();
    let lib = FakeTensorLib::new();
    lib.inject_finish_error(StatusCode::AlreadyExists, "node 'input' exists");

    let out = create_placeholder_entry(
        &env,
        &lib,
        env.call_context(true),
        env.string("input"),
        env.int_array(&[4]),
    );

    assert!(out.is_none());
    assert_eq!(
        env.thrown(),
        vec!["native status 6: node 'input' exists".to_string()]
    );
    // The guard released the failed status too.
    assert_eq!(lib.live_status_count(), 0);
}

#[test]
fn test_entry_host_failure_uses_runtime_message() {
    let env = FakeHostEnv::new();
    let lib = FakeTensorLib::new();
    env.fail_next(
        FakeOp::ArrayLength,
        HostStatusCode::GenericFailure,
        "detached array buffer",
    );

    let out = create_placeholder_entry(
        &env,
        &lib,
        env.call_context(true),
        env.string("x"),
        env.int_array(&[2]),
    );

    assert!(out.is_none());
    assert_eq!(
        env.thrown(),
        vec!["invalid host-runtime status: detached array buffer".to_string()]
    );
}

// ── Shape extraction properties ────────────────────────────────

#[test]
fn test_shape_extraction_fails_for_every_non_array_kind() {
    let env = FakeHostEnv::new();
    let non_arrays = vec![
        env.value(Value::Undefined),
        env.value(Value::Null),
        env.value(Value::Bool(false)),
        env.number(7.0),
        env.string("[1,2]"),
        env.value(Value::Object),
    ];

    for value in non_arrays {
        let kind = env.kind_of(value).unwrap();
        let checked = expect_array(&env, value).and_then(|_| array_shape(&env, value));
        assert!(checked.is_err(), "expected failure for {kind}");
    }
}

#[test]
fn test_shape_order_and_lengths() {
    let env = FakeHostEnv::new();
    for dims in [vec![], vec![3], vec![2, 3, 4], vec![5, 1, 0, 2]] {
        let array = env.int_array(&dims);
        let shape = array_shape(&env, array).unwrap();
        assert_eq!(shape, dims);
        assert_eq!(shape.len(), dims.len());
    }
}

#[test]
fn test_element_count_matches_shape_products() {
    assert_eq!(element_count(&[]), 1);
    assert_eq!(element_count(&[3]), 3);
    assert_eq!(element_count(&[2, 3, 4]), 24);
    assert_eq!(element_count(&[2, 3, 0]), 0);
}

// ── Adopted-buffer lifetime across a whole call ────────────────

#[test]
fn test_adopted_scalar_survives_until_library_release() {
    let lib = FakeTensorLib::new();

    let t1 = int32_scalar_tensor(&lib, 1);
    let t2 = int32_scalar_tensor(&lib, 2);
    assert_eq!(lib.live_tensor_count(), 2);
    assert!(lib.adopted_releases().is_empty());

    lib.delete_tensor(t1);
    assert_eq!(lib.adopted_releases().len(), 1);

    lib.delete_tensor(t2);
    let releases = lib.adopted_releases();
    assert_eq!(releases.len(), 2);
    // Distinct allocations, each 4 bytes.
    assert_ne!(releases[0].0, releases[1].0);
    assert!(releases.iter().all(|&(_, len)| len == 4));
}

// ── Message bounding end to end ────────────────────────────────

#[test]
fn test_configured_bound_applies_to_surfaced_errors() {
    let env = FakeHostEnv::new();
    let bridge = ExceptionBridge::with_config(
        &env,
        &MarshalConfig {
            max_message_bytes: 24,
            ..Default::default()
        },
    );

    let long_name = "n".repeat(200);
    let err = marshal::MarshalError::validation(format!("bad name: {long_name}"));
    bridge.surface::<()>(Err(err));

    let thrown = env.thrown();
    assert_eq!(thrown.len(), 1);
    assert_eq!(thrown[0].len(), 24);
}
