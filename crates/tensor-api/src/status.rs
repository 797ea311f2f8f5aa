// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scoped acquisition of a foreign status handle.
//!
//! [`StatusGuard`] is the acquire-use-release discipline for the library's
//! error-carrying status objects: allocated on construction, populated by a
//! native call, inspected, then released unconditionally when the guard goes
//! out of scope — on normal returns and error returns alike. A status is
//! never leaked on an early `?`.

use crate::{StatusCode, StatusHandle, TensorApi};

/// An RAII wrapper around a foreign status handle.
///
/// # Example
/// ```ignore
/// let status = StatusGuard::new(api);
/// let op = api.finish_operation(desc, status.handle());
/// check_native(&status)?;          // early return releases the status too
/// ```
pub struct StatusGuard<'a, A: TensorApi + ?Sized> {
    api: &'a A,
    handle: StatusHandle,
}

impl<'a, A: TensorApi + ?Sized> StatusGuard<'a, A> {
    /// Allocates a fresh status (success sentinel, empty message).
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            handle: api.new_status(),
        }
    }

    /// Returns the handle for passing into native calls.
    pub fn handle(&self) -> StatusHandle {
        self.handle
    }

    /// Returns the raw code currently carried by the status.
    pub fn code_raw(&self) -> u32 {
        self.api.status_code(self.handle)
    }

    /// Returns the decoded code, or `None` if the library reported a value
    /// outside the documented set.
    pub fn code(&self) -> Option<StatusCode> {
        StatusCode::from_raw(self.code_raw())
    }

    /// Returns the message currently carried by the status.
    pub fn message(&self) -> String {
        self.api.status_message(self.handle)
    }

    /// Returns `true` if the status carries the success sentinel.
    pub fn is_ok(&self) -> bool {
        self.code_raw() == StatusCode::Ok.as_raw()
    }
}

impl<A: TensorApi + ?Sized> Drop for StatusGuard<'_, A> {
    fn drop(&mut self) {
        self.api.delete_status(self.handle);
    }
}

impl<A: TensorApi + ?Sized> std::fmt::Debug for StatusGuard<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusGuard")
            .field("handle", &self.handle)
            .field("code", &self.code_raw())
            .finish()
    }
}
