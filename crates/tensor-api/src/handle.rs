// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Opaque handles to objects owned by the native library.
//!
//! Each handle is a plain id; the library owns the object behind it.
//! Deletion discipline differs per handle type: statuses are released by
//! [`StatusGuard`](crate::StatusGuard), tensors by an explicit
//! [`TensorApi::delete_tensor`](crate::TensorApi::delete_tensor), and
//! operation descriptors are consumed by
//! [`TensorApi::finish_operation`](crate::TensorApi::finish_operation).

macro_rules! native_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw id minted by the native library.
            pub fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw id.
            pub fn as_raw(self) -> u64 {
                self.0
            }
        }
    };
}

native_handle! {
    /// A foreign error-carrying status object.
    StatusHandle
}

native_handle! {
    /// A native tensor object.
    TensorHandle
}

native_handle! {
    /// A native computation graph.
    GraphHandle
}

native_handle! {
    /// An in-progress operation descriptor (open, not yet finalized).
    OpDescHandle
}

native_handle! {
    /// A finalized graph operation.
    OpHandle
}
