// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The exception bridge: one host-visible error channel for every failure.
//!
//! Checks in this layer return [`Result`](crate::Result) and propagate with
//! `?`; nothing unwinds across the boundary. [`ExceptionBridge::surface`] is
//! the single funnel at a host-facing entry point where an accumulated
//! failure is formatted, bounded, logged, and thrown into the host runtime.
//! Exactly one error is surfaced per failing call: if the runtime already
//! has an error pending, a second raise is suppressed.

use crate::{MarshalConfig, MarshalError, Result};
use host_env::{HostEnv, HostResult};
use tensor_api::{StatusGuard, TensorApi};

/// Formats and raises errors into the host runtime.
///
/// The bridge borrows the host capability for the duration of one call; it
/// owns no state of its own beyond the message bound. The pending-error flag
/// lives in the runtime and is only queried here.
pub struct ExceptionBridge<'e, E: HostEnv + ?Sized> {
    env: &'e E,
    max_message_bytes: usize,
}

impl<'e, E: HostEnv + ?Sized> ExceptionBridge<'e, E> {
    /// Creates a bridge with the default message bound.
    pub fn new(env: &'e E) -> Self {
        Self {
            env,
            max_message_bytes: crate::DEFAULT_MAX_MESSAGE_BYTES,
        }
    }

    /// Creates a bridge with bounds taken from `config`.
    pub fn with_config(env: &'e E, config: &MarshalConfig) -> Self {
        Self {
            env,
            max_message_bytes: config.max_message_bytes,
        }
    }

    /// Raises `error` as the single active host-visible error.
    ///
    /// The formatted message is truncated at the configured bound. If an
    /// error is already pending in the runtime, this one is dropped — the
    /// first failure in a call chain wins.
    pub fn raise(&self, error: &MarshalError) {
        tracing::debug!(location = %error.location(), "raising host error: {error}");
        if self.error_pending() {
            return;
        }
        let message = bounded_message(&error.to_string(), self.max_message_bytes);
        self.env.throw_error(&message);
    }

    /// Surfaces a `Result` at a host-facing entry point.
    ///
    /// `Ok` passes the value through; `Err` is raised and `None` is returned
    /// so the caller can abort the call immediately.
    pub fn surface<T>(&self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.raise(&error);
                None
            }
        }
    }

    /// Returns `true` if an error was already raised earlier in the current
    /// call chain. A failed query counts as "not pending".
    pub fn error_pending(&self) -> bool {
        self.env.error_pending().unwrap_or(false)
    }
}

/// Checks the outcome of a call into the host runtime's own API.
///
/// On failure the runtime's last-error message (or `"unknown"`) becomes a
/// host-call error recorded at this check's call site.
#[track_caller]
pub fn check_host<T, E: HostEnv + ?Sized>(env: &E, result: HostResult<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(_code) => {
            let detail = env
                .last_error_message()
                .unwrap_or_else(|| "unknown".to_string());
            Err(MarshalError::host_call(detail))
        }
    }
}

/// Checks a native status against the ok sentinel.
///
/// Any other code becomes a native-call error carrying the numeric code and
/// the library's own message text.
#[track_caller]
pub fn check_native<A: TensorApi + ?Sized>(status: &StatusGuard<'_, A>) -> Result<()> {
    if status.is_ok() {
        Ok(())
    } else {
        Err(MarshalError::native_call(
            status.code_raw(),
            status.message(),
        ))
    }
}

/// Truncates `message` to at most `max_bytes`, respecting char boundaries.
pub fn bounded_message(message: &str, max_bytes: usize) -> String {
    if message.len() <= max_bytes {
        return message.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use host_env::HostStatusCode;
    use test_support::{FakeHostEnv, FakeOp, FakeTensorLib};

    #[test]
    fn test_raise_throws_once() {
        let env = FakeHostEnv::new();
        let bridge = ExceptionBridge::new(&env);

        bridge.raise(&MarshalError::validation("Argument is not an array!"));
        assert_eq!(env.thrown(), vec!["Argument is not an array!".to_string()]);

        // A second raise while the first is pending is suppressed.
        bridge.raise(&MarshalError::validation("Argument is null!"));
        assert_eq!(env.throw_count(), 1);
    }

    #[test]
    fn test_raise_truncates_long_messages() {
        let env = FakeHostEnv::new();
        let bridge = ExceptionBridge::with_config(
            &env,
            &MarshalConfig {
                max_message_bytes: 16,
                ..Default::default()
            },
        );

        bridge.raise(&MarshalError::validation("x".repeat(100)));
        let thrown = env.thrown();
        assert_eq!(thrown[0].len(), 16);
        assert_eq!(thrown[0], "x".repeat(16));
    }

    #[test]
    fn test_bounded_message_char_boundary() {
        // "é" is two bytes; cutting at byte 1 would split it.
        assert_eq!(bounded_message("é", 1), "");
        assert_eq!(bounded_message("aé", 2), "a");
        assert_eq!(bounded_message("abc", 10), "abc");
    }

    #[test]
    fn test_surface_ok_and_err() {
        let env = FakeHostEnv::new();
        let bridge = ExceptionBridge::new(&env);

        assert_eq!(bridge.surface(Ok(7)), Some(7));
        assert_eq!(env.throw_count(), 0);

        let failed: crate::Result<i32> = Err(MarshalError::validation("bad"));
        assert_eq!(bridge.surface(failed), None);
        assert_eq!(env.thrown(), vec!["bad".to_string()]);
    }

    #[test]
    fn test_check_host_formats_last_error() {
        let env = FakeHostEnv::new();
        let v = env.int_array(&[1]);
        env.fail_next(FakeOp::ArrayLength, HostStatusCode::GenericFailure, "boom");

        let err = check_host(&env, env.array_length(v)).unwrap_err();
        assert_eq!(err.to_string(), "invalid host-runtime status: boom");
    }

    #[test]
    fn test_check_host_unknown_detail() {
        let env = FakeHostEnv::new();
        let result: host_env::HostResult<()> = Err(HostStatusCode::GenericFailure);
        let err = check_host(&env, result).unwrap_err();
        assert_eq!(err.to_string(), "invalid host-runtime status: unknown");
    }

    #[test]
    fn test_check_native_ok_and_failure() {
        let lib = FakeTensorLib::new();
        let status = StatusGuard::new(&lib);
        assert!(check_native(&status).is_ok());
        drop(status);

        let graph = lib.new_graph();
        let desc = lib.new_operation(graph, "Placeholder", "x");
        lib.inject_finish_error(tensor_api::StatusCode::Internal, "kernel error");
        let status = StatusGuard::new(&lib);
        let op = lib.finish_operation(desc, status.handle());
        assert!(op.is_none());

        let err = check_native(&status).unwrap_err();
        assert_eq!(err.to_string(), "native status 13: kernel error");
    }

    #[test]
    fn test_error_pending_query_failure_counts_as_not_pending() {
        let env = FakeHostEnv::new();
        let bridge = ExceptionBridge::new(&env);
        env.fail_next(FakeOp::ErrorPending, HostStatusCode::GenericFailure, "no");
        assert!(!bridge.error_pending());
    }
}
