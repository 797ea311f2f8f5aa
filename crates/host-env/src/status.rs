// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Failure codes for calls into the host runtime's own API.
//!
//! Every [`HostEnv`](crate::HostEnv) method returns [`HostResult`]; a bare
//! code is all the runtime reports at the call site. The human-readable
//! detail, if any, is fetched separately through
//! [`HostEnv::last_error_message`](crate::HostEnv::last_error_message) when
//! the failure is turned into a host-visible error.

/// Result of a call into the host runtime's API.
pub type HostResult<T> = Result<T, HostStatusCode>;

/// Failure codes the host runtime reports for its own API calls.
///
/// The success case is not represented here — success is `Ok` in
/// [`HostResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum HostStatusCode {
    /// An argument to the runtime call was invalid.
    #[error("invalid argument")]
    InvalidArg,
    /// The runtime expected an object value.
    #[error("object expected")]
    ObjectExpected,
    /// The runtime expected a string value.
    #[error("string expected")]
    StringExpected,
    /// The runtime expected a number value.
    #[error("number expected")]
    NumberExpected,
    /// The runtime expected an array value.
    #[error("array expected")]
    ArrayExpected,
    /// An unspecified runtime failure.
    #[error("generic failure")]
    GenericFailure,
    /// An error is already pending in the runtime; no further runtime calls
    /// may be made until it is consumed.
    #[error("exception pending")]
    PendingException,
}
