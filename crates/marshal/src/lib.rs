// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # marshal
//!
//! The bidirectional marshaling and error-propagation core between a
//! dynamically-typed host runtime ([`host_env`]) and a native tensor library
//! ([`tensor_api`]). It moves values and error state across the ABI boundary
//! safely; it performs no computation of its own.
//!
//! # Call Discipline
//!
//! Every host-facing entry point follows the same shape:
//!
//! ```text
//! validate arguments      (validate::expect_*)
//!       │ ?
//! convert values          (convert::*, tensor::*)
//!       │ ?
//! call native, guarded    (StatusGuard + check_native)
//!       │ ?
//! surface one error       (ExceptionBridge::surface)
//! ```
//!
//! Checks return [`Result`]; failures propagate with `?` and are raised into
//! the host exactly once at the entry point. Foreign statuses and scratch
//! buffers are call-local and released on every exit path.
//!
//! # Example
//! ```
//! use marshal::{ExceptionBridge, expect_array, array_shape};
//! use test_support::FakeHostEnv;
//!
//! fn shape_entry(env: &FakeHostEnv, value: host_env::HostValue) -> Option<Vec<i64>> {
//!     let bridge = ExceptionBridge::new(env);
//!     bridge.surface(expect_array(env, value).and_then(|_| array_shape(env, value)))
//! }
//!
//! let env = FakeHostEnv::new();
//! assert_eq!(shape_entry(&env, env.int_array(&[2, 3])), Some(vec![2, 3]));
//! assert_eq!(shape_entry(&env, env.number(1.0)), None);
//! assert_eq!(env.thrown(), vec!["Argument is not an array!".to_string()]);
//! ```

mod bridge;
mod config;
mod convert;
mod error;
mod graph;
mod tensor;
mod validate;

pub use bridge::{bounded_message, check_host, check_native, ExceptionBridge};
pub use config::{MarshalConfig, DEFAULT_MAX_MESSAGE_BYTES, DEFAULT_MAX_TENSOR_RANK};
pub use convert::{
    array_shape, array_shape_bounded, attr_type_from_raw, buffer_element_dtype,
    data_type_from_raw, element_count, split_commas, string_value, tensor_dtype,
    tensor_num_elements,
};
pub use error::{Location, MarshalError, Result, TagDomain};
pub use graph::placeholder;
pub use tensor::{int32_scalar_tensor, int32_tensor, int32_vector_tensor};
pub use validate::{
    expect_array, expect_at_most, expect_constructor_call, expect_number, expect_object,
    expect_some, expect_string, expect_typed_buffer,
};
