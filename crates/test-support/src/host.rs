// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! An in-memory host runtime.

use host_env::{
    BufferElementType, CallContext, HostEnv, HostResult, HostStatusCode, HostValue, ValueKind,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// A host value as the fake runtime stores it.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<HostValue>),
    TypedBuffer {
        kind: BufferElementType,
        bytes: Vec<u8>,
    },
    Object,
}

/// Host-runtime operations that can be made to fail on their next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeOp {
    KindOf,
    IsArray,
    IsTypedBuffer,
    TypedBufferKind,
    ArrayLength,
    Element,
    ValueI64,
    StringLen,
    ReadString,
    IsConstructorCall,
    ErrorPending,
}

#[derive(Default)]
struct Inner {
    values: HashMap<u64, Value>,
    contexts: HashMap<u64, bool>,
    next_id: u64,
    thrown: Vec<String>,
    fail_next: HashMap<FakeOp, (HostStatusCode, String)>,
    last_error: Option<String>,
}

/// An in-memory implementation of [`HostEnv`].
///
/// Values are interned into a handle table; tests build inputs with the
/// constructors below and hand the resulting [`HostValue`]s to the code
/// under test. Failures are injected per operation with
/// [`fail_next`](FakeHostEnv::fail_next), and every thrown error is recorded
/// for assertion.
#[derive(Default)]
pub struct FakeHostEnv {
    inner: RefCell<Inner>,
}

impl FakeHostEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a value and returns its handle.
    pub fn value(&self, value: Value) -> HostValue {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.values.insert(id, value);
        HostValue::from_raw(id)
    }

    /// Interns a number value.
    pub fn number(&self, n: f64) -> HostValue {
        self.value(Value::Number(n))
    }

    /// Interns a string value.
    pub fn string(&self, s: &str) -> HostValue {
        self.value(Value::Str(s.to_string()))
    }

    /// Interns an array whose elements are interned first.
    pub fn array(&self, elements: Vec<Value>) -> HostValue {
        let handles: Vec<HostValue> = elements.into_iter().map(|e| self.value(e)).collect();
        self.value(Value::Array(handles))
    }

    /// Interns an array of integer-valued numbers.
    pub fn int_array(&self, dims: &[i64]) -> HostValue {
        self.array(dims.iter().map(|&d| Value::Number(d as f64)).collect())
    }

    /// Interns a typed buffer.
    pub fn typed_buffer(&self, kind: BufferElementType, bytes: Vec<u8>) -> HostValue {
        self.value(Value::TypedBuffer { kind, bytes })
    }

    /// Mints a call context; `construct` controls the constructor-call check.
    pub fn call_context(&self, construct: bool) -> CallContext {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.contexts.insert(id, construct);
        CallContext::from_raw(id)
    }

    /// Makes the next call of `op` fail with `code`, recording `message` as
    /// the runtime's last-error text.
    pub fn fail_next(&self, op: FakeOp, code: HostStatusCode, message: &str) {
        self.inner
            .borrow_mut()
            .fail_next
            .insert(op, (code, message.to_string()));
    }

    /// All error messages thrown into this runtime, in order.
    pub fn thrown(&self) -> Vec<String> {
        self.inner.borrow().thrown.clone()
    }

    /// Number of errors thrown so far.
    pub fn throw_count(&self) -> usize {
        self.inner.borrow().thrown.len()
    }

    // ── Internal ───────────────────────────────────────────────

    fn check_injection(&self, op: FakeOp) -> HostResult<()> {
        let mut inner = self.inner.borrow_mut();
        if let Some((code, message)) = inner.fail_next.remove(&op) {
            inner.last_error = Some(message);
            return Err(code);
        }
        Ok(())
    }

    fn fail(&self, code: HostStatusCode, message: &str) -> HostStatusCode {
        self.inner.borrow_mut().last_error = Some(message.to_string());
        code
    }

    fn with_value<T>(
        &self,
        value: HostValue,
        f: impl FnOnce(&Value) -> HostResult<T>,
    ) -> HostResult<T> {
        match self.inner.borrow().values.get(&value.as_raw()) {
            Some(v) => f(v),
            None => Err(HostStatusCode::InvalidArg),
        }
    }
}

impl HostEnv for FakeHostEnv {
    fn kind_of(&self, value: HostValue) -> HostResult<ValueKind> {
        self.check_injection(FakeOp::KindOf)?;
        self.with_value(value, |v| {
            Ok(match v {
                Value::Undefined => ValueKind::Undefined,
                Value::Null => ValueKind::Null,
                Value::Bool(_) => ValueKind::Boolean,
                Value::Number(_) => ValueKind::Number,
                Value::Str(_) => ValueKind::String,
                // Arrays and typed buffers report as objects, as the real
                // runtime does; the dedicated predicates tell them apart.
                Value::Array(_) | Value::TypedBuffer { .. } | Value::Object => ValueKind::Object,
            })
        })
    }

    fn is_array(&self, value: HostValue) -> HostResult<bool> {
        self.check_injection(FakeOp::IsArray)?;
        self.with_value(value, |v| Ok(matches!(v, Value::Array(_))))
    }

    fn is_typed_buffer(&self, value: HostValue) -> HostResult<bool> {
        self.check_injection(FakeOp::IsTypedBuffer)?;
        self.with_value(value, |v| Ok(matches!(v, Value::TypedBuffer { .. })))
    }

    fn typed_buffer_kind(&self, value: HostValue) -> HostResult<BufferElementType> {
        self.check_injection(FakeOp::TypedBufferKind)?;
        self.with_value(value, |v| match v {
            Value::TypedBuffer { kind, .. } => Ok(*kind),
            _ => Err(HostStatusCode::InvalidArg),
        })
    }

    fn array_length(&self, array: HostValue) -> HostResult<u32> {
        self.check_injection(FakeOp::ArrayLength)?;
        self.with_value(array, |v| match v {
            Value::Array(elements) => Ok(elements.len() as u32),
            _ => Err(HostStatusCode::ArrayExpected),
        })
    }

    fn element(&self, array: HostValue, index: u32) -> HostResult<HostValue> {
        self.check_injection(FakeOp::Element)?;
        let out = self.with_value(array, |v| match v {
            Value::Array(elements) => elements
                .get(index as usize)
                .copied()
                .ok_or(HostStatusCode::InvalidArg),
            _ => Err(HostStatusCode::ArrayExpected),
        });
        if out == Err(HostStatusCode::InvalidArg) {
            return Err(self.fail(HostStatusCode::InvalidArg, "array index out of bounds"));
        }
        out
    }

    fn value_i64(&self, value: HostValue) -> HostResult<i64> {
        self.check_injection(FakeOp::ValueI64)?;
        self.with_value(value, |v| match v {
            Value::Number(n) => Ok(*n as i64),
            _ => Err(HostStatusCode::NumberExpected),
        })
    }

    fn string_utf8_len(&self, value: HostValue) -> HostResult<usize> {
        self.check_injection(FakeOp::StringLen)?;
        self.with_value(value, |v| match v {
            Value::Str(s) => Ok(s.len()),
            _ => Err(HostStatusCode::StringExpected),
        })
    }

    fn read_string_utf8(&self, value: HostValue, buf: &mut [u8]) -> HostResult<usize> {
        self.check_injection(FakeOp::ReadString)?;
        self.with_value(value, |v| match v {
            Value::Str(s) => {
                // The real runtime writes at most buf.len() - 1 bytes plus a
                // trailing terminator.
                if buf.is_empty() {
                    return Err(HostStatusCode::InvalidArg);
                }
                let n = s.len().min(buf.len() - 1);
                buf[..n].copy_from_slice(&s.as_bytes()[..n]);
                buf[n] = 0;
                Ok(n)
            }
            _ => Err(HostStatusCode::StringExpected),
        })
    }

    fn is_constructor_call(&self, ctx: CallContext) -> HostResult<bool> {
        self.check_injection(FakeOp::IsConstructorCall)?;
        self.inner
            .borrow()
            .contexts
            .get(&ctx.as_raw())
            .copied()
            .ok_or(HostStatusCode::InvalidArg)
    }

    fn throw_error(&self, message: &str) {
        self.inner.borrow_mut().thrown.push(message.to_string());
    }

    fn error_pending(&self) -> HostResult<bool> {
        self.check_injection(FakeOp::ErrorPending)?;
        Ok(!self.inner.borrow().thrown.is_empty())
    }

    fn last_error_message(&self) -> Option<String> {
        self.inner.borrow().last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let env = FakeHostEnv::new();
        assert_eq!(env.kind_of(env.number(1.0)), Ok(ValueKind::Number));
        assert_eq!(env.kind_of(env.string("x")), Ok(ValueKind::String));
        assert_eq!(env.kind_of(env.int_array(&[1])), Ok(ValueKind::Object));
        assert_eq!(env.is_array(env.int_array(&[1])), Ok(true));
        assert_eq!(env.is_array(env.number(1.0)), Ok(false));
    }

    #[test]
    fn test_failure_injection_consumed_once() {
        let env = FakeHostEnv::new();
        let v = env.int_array(&[1, 2]);
        env.fail_next(FakeOp::ArrayLength, HostStatusCode::GenericFailure, "boom");

        assert_eq!(env.array_length(v), Err(HostStatusCode::GenericFailure));
        assert_eq!(env.last_error_message().as_deref(), Some("boom"));
        // Next call succeeds again.
        assert_eq!(env.array_length(v), Ok(2));
    }

    #[test]
    fn test_thrown_and_pending() {
        let env = FakeHostEnv::new();
        assert_eq!(env.error_pending(), Ok(false));
        env.throw_error("first");
        assert_eq!(env.error_pending(), Ok(true));
        assert_eq!(env.thrown(), vec!["first".to_string()]);
    }

    #[test]
    fn test_read_string_terminator() {
        let env = FakeHostEnv::new();
        let v = env.string("abc");
        let mut buf = vec![0xffu8; 4];
        assert_eq!(env.read_string_utf8(v, &mut buf), Ok(3));
        assert_eq!(&buf, b"abc\0");
    }
}
