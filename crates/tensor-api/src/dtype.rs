// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor element types and operation-attribute types as the native library
//! enumerates them.

/// Element data types a native tensor can hold, with the library's raw tag
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum DataType {
    /// 32-bit IEEE 754 floating point.
    Float = 1,
    /// 64-bit IEEE 754 floating point.
    Double = 2,
    /// 32-bit signed integer.
    Int32 = 3,
    /// 8-bit unsigned integer.
    Uint8 = 4,
    /// 16-bit signed integer.
    Int16 = 5,
    /// 8-bit signed integer.
    Int8 = 6,
    /// 64-bit signed integer.
    Int64 = 9,
    /// Boolean, stored as one byte.
    Bool = 10,
}

impl DataType {
    /// Decodes a raw tag from the library. Returns `None` for values outside
    /// the documented set; callers report those as unknown-tag failures.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Float),
            2 => Some(Self::Double),
            3 => Some(Self::Int32),
            4 => Some(Self::Uint8),
            5 => Some(Self::Int16),
            6 => Some(Self::Int8),
            9 => Some(Self::Int64),
            10 => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns the raw tag value.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DataType::Float | DataType::Int32 => 4,
            DataType::Double | DataType::Int64 => 8,
            DataType::Int16 => 2,
            DataType::Uint8 | DataType::Int8 | DataType::Bool => 1,
        }
    }

    /// Returns a human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Int32 => "int32",
            DataType::Uint8 => "uint8",
            DataType::Int16 => "int16",
            DataType::Int8 => "int8",
            DataType::Int64 => "int64",
            DataType::Bool => "bool",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute value types for graph-operation construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttrType {
    String = 0,
    Int = 1,
    Float = 2,
    Bool = 3,
    Type = 4,
    Shape = 5,
    Tensor = 6,
    Placeholder = 7,
    Func = 8,
}

impl AttrType {
    /// Decodes a raw tag from the library. Returns `None` for values outside
    /// the documented set.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::String),
            1 => Some(Self::Int),
            2 => Some(Self::Float),
            3 => Some(Self::Bool),
            4 => Some(Self::Type),
            5 => Some(Self::Shape),
            6 => Some(Self::Tensor),
            7 => Some(Self::Placeholder),
            8 => Some(Self::Func),
            _ => None,
        }
    }

    /// Returns the raw tag value.
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}
