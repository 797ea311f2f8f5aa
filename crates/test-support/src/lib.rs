// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # test-support
//!
//! In-memory doubles of the two foreign sides of the marshaling boundary:
//!
//! - [`FakeHostEnv`] — a value table implementing `host_env::HostEnv`, with
//!   per-operation failure injection and a record of thrown errors.
//! - [`FakeTensorLib`] — a handle table implementing `tensor_api::TensorApi`,
//!   with status/tensor lifetime accounting and adopted-buffer release logs.
//!
//! Both are strictly single-threaded (interior mutability via `RefCell`),
//! matching the call-scoped execution model of the layer under test. They
//! implement the foreign *interfaces*, not the foreign *semantics*: no
//! computation happens here, only bookkeeping that tests can assert on.

mod host;
mod native;

pub use host::{FakeHostEnv, FakeOp, Value};
pub use native::{FakeTensorLib, FinishedOp};
