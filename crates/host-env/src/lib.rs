// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # host-env
//!
//! The interface this binding layer consumes from the dynamically-typed host
//! runtime. The runtime itself lives on the other side of a C-style ABI; this
//! crate only describes what the marshaling core is allowed to ask of it:
//!
//! - [`HostEnv`] — the capability trait: value inspection, string/array
//!   reads, error throwing, and the pending-error query.
//! - [`HostValue`] / [`CallContext`] — opaque, non-owning handles into the
//!   runtime's value graph, valid only for the duration of the current call.
//! - [`ValueKind`] / [`BufferElementType`] — the runtime's closed type tags.
//! - [`HostStatusCode`] — the runtime's own call-failure codes.
//!
//! Nothing in this crate allocates native resources or performs computation.
//! The pending-error state belongs to the runtime; the core queries it
//! through [`HostEnv::error_pending`] rather than keeping a flag of its own.

mod env;
mod handle;
mod kind;
mod status;

pub use env::HostEnv;
pub use handle::{CallContext, HostValue};
pub use kind::{BufferElementType, ValueKind};
pub use status::{HostResult, HostStatusCode};
