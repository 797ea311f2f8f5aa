// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`HostEnv`] capability trait.

use crate::{BufferElementType, CallContext, HostResult, HostValue, ValueKind};

/// Everything the marshaling core is allowed to ask of the host runtime.
///
/// Implementations wrap the runtime's C ABI (or, in tests, an in-memory
/// fake). All methods are synchronous and call-scoped; none of them may
/// retain the handles they are given.
///
/// Inspection methods are pure with respect to the value graph — they never
/// mutate host values or allocate native resources. The only side-effecting
/// entry point is [`throw_error`](HostEnv::throw_error), which sets the
/// runtime's single pending-error slot.
pub trait HostEnv {
    /// Returns the dynamic type tag of a value.
    fn kind_of(&self, value: HostValue) -> HostResult<ValueKind>;

    /// Returns `true` if the value is an array.
    fn is_array(&self, value: HostValue) -> HostResult<bool>;

    /// Returns `true` if the value is a typed buffer.
    fn is_typed_buffer(&self, value: HostValue) -> HostResult<bool>;

    /// Returns the element-type tag of a typed buffer.
    fn typed_buffer_kind(&self, value: HostValue) -> HostResult<BufferElementType>;

    /// Returns the length of an array value.
    fn array_length(&self, array: HostValue) -> HostResult<u32>;

    /// Returns the element of an array at `index`.
    fn element(&self, array: HostValue, index: u32) -> HostResult<HostValue>;

    /// Converts a number value to a signed 64-bit integer (truncating).
    fn value_i64(&self, value: HostValue) -> HostResult<i64>;

    /// Returns the UTF-8 byte length of a string value, excluding any
    /// terminator.
    fn string_utf8_len(&self, value: HostValue) -> HostResult<usize>;

    /// Copies the UTF-8 bytes of a string value into `buf` and returns the
    /// number of bytes written. `buf` must have room for the byte length
    /// plus one (the runtime writes a trailing terminator).
    fn read_string_utf8(&self, value: HostValue, buf: &mut [u8]) -> HostResult<usize>;

    /// Returns `true` if the current call entered through a constructor
    /// invocation.
    fn is_constructor_call(&self, ctx: CallContext) -> HostResult<bool>;

    /// Throws `message` as the single active host-visible error. Does not
    /// unwind; callers abort the current call by returning early.
    fn throw_error(&self, message: &str);

    /// Returns `true` if an error was already thrown earlier in the current
    /// call chain.
    fn error_pending(&self) -> HostResult<bool>;

    /// Returns the runtime's message for the most recent failed call, if it
    /// recorded one.
    fn last_error_message(&self) -> Option<String>;
}
