// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Opaque, non-owning handles into the host runtime.
//!
//! Handles are plain ids minted by the runtime. They carry no lifetime in the
//! Rust sense because the runtime owns the values; the contract is that a
//! handle is only valid for the duration of the host-to-native call that
//! produced it. The marshaling core never stores one across calls.

/// An opaque reference to a value owned by the host runtime.
///
/// `HostValue` is `Copy` because it is a non-owning view; copying it does not
/// duplicate or retain the underlying value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostValue(u64);

impl HostValue {
    /// Wraps a raw handle id minted by the runtime.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle id.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// An opaque reference to the invocation context of the current host call.
///
/// Used to answer questions about *how* the layer was entered — most
/// importantly whether the current call is a constructor invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext(u64);

impl CallContext {
    /// Wraps a raw context id minted by the runtime.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw context id.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}
