// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The host runtime's closed value-type and buffer-element tags.

/// The dynamic type tag of a host value.
///
/// Note that "array" and "typed buffer" are not kinds of their own in the
/// host's type system — arrays report [`ValueKind::Object`] and are
/// distinguished through [`HostEnv::is_array`](crate::HostEnv::is_array) and
/// [`HostEnv::is_typed_buffer`](crate::HostEnv::is_typed_buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Object,
    Function,
    External,
    BigInt,
}

impl ValueKind {
    /// Returns a human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
            ValueKind::External => "external",
            ValueKind::BigInt => "bigint",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element-type tag of a host typed buffer, with the runtime's raw values.
///
/// The marshaling core maps a subset of these to native element types; any
/// tag without a mapping is reported through the unknown-tag error channel
/// rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum BufferElementType {
    Int8 = 0,
    Uint8 = 1,
    Uint8Clamped = 2,
    Int16 = 3,
    Uint16 = 4,
    Int32 = 5,
    Uint32 = 6,
    Float32 = 7,
    Float64 = 8,
    BigInt64 = 9,
    BigUint64 = 10,
}

impl BufferElementType {
    /// Decodes a raw tag from the runtime. Returns `None` for values outside
    /// the documented set; callers report those as unknown-tag failures.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Int8),
            1 => Some(Self::Uint8),
            2 => Some(Self::Uint8Clamped),
            3 => Some(Self::Int16),
            4 => Some(Self::Uint16),
            5 => Some(Self::Int32),
            6 => Some(Self::Uint32),
            7 => Some(Self::Float32),
            8 => Some(Self::Float64),
            9 => Some(Self::BigInt64),
            10 => Some(Self::BigUint64),
            _ => None,
        }
    }

    /// Returns the raw tag value.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Size of one buffer element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 | Self::BigInt64 | Self::BigUint64 => 8,
        }
    }
}
