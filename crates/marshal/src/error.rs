// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The unified error record for every failure crossing the boundary.
//!
//! Four failure domains funnel into one [`MarshalError`]:
//!
//! 1. **Validation** — a host-supplied value does not meet a precondition.
//! 2. **Host call** — the host runtime's own API reported a failure code.
//! 3. **Native call** — the native library's status is not the ok sentinel.
//! 4. **Unknown tag** — a foreign enumerated value has no handling case.
//!
//! Errors are never persisted or aggregated: the first failure in a call
//! chain is surfaced once and the call unwinds via `?` at every check point.
//! Each record captures the source location of the check that produced it
//! (via `#[track_caller]`), which goes to the debug log, not to the host.

/// Result alias used throughout the marshaling core.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Source location of the failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    /// Captures the caller's location.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }

    /// The source file of the failed check.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line of the failed check.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The foreign enumeration a tag belongs to, for unknown-tag reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDomain {
    DataType,
    AttrType,
    BufferElementType,
}

impl TagDomain {
    fn as_str(self) -> &'static str {
        match self {
            TagDomain::DataType => "data type",
            TagDomain::AttrType => "attribute type",
            TagDomain::BufferElementType => "buffer element type",
        }
    }
}

impl std::fmt::Display for TagDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failure crossing the marshaling boundary.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// A host-supplied value failed a precondition check.
    #[error("{message}")]
    Validation { message: String, location: Location },

    /// The host runtime's own API reported a failure.
    #[error("invalid host-runtime status: {message}")]
    HostCall { message: String, location: Location },

    /// The native library's status carried a non-ok code.
    #[error("native status {code}: {message}")]
    NativeCall {
        code: u32,
        message: String,
        location: Location,
    },

    /// A foreign enumerated value had no handling case.
    #[error("unhandled {domain} tag: {raw}")]
    UnknownTag {
        domain: TagDomain,
        raw: u32,
        location: Location,
    },
}

impl MarshalError {
    /// A validation failure with the given precondition message.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// A host-runtime call failure.
    #[track_caller]
    pub fn host_call(message: impl Into<String>) -> Self {
        Self::HostCall {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// A native-library call failure with the library's code and message.
    #[track_caller]
    pub fn native_call(code: u32, message: impl Into<String>) -> Self {
        Self::NativeCall {
            code,
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// An element-type tag this binding does not handle.
    #[track_caller]
    pub fn unknown_data_type(raw: u32) -> Self {
        Self::unknown_tag(TagDomain::DataType, raw)
    }

    /// An attribute-type tag this binding does not handle.
    #[track_caller]
    pub fn unknown_attr_type(raw: u32) -> Self {
        Self::unknown_tag(TagDomain::AttrType, raw)
    }

    /// A typed-buffer element tag this binding does not handle.
    #[track_caller]
    pub fn unknown_buffer_element_type(raw: u32) -> Self {
        Self::unknown_tag(TagDomain::BufferElementType, raw)
    }

    #[track_caller]
    fn unknown_tag(domain: TagDomain, raw: u32) -> Self {
        Self::UnknownTag {
            domain,
            raw,
            location: Location::caller(),
        }
    }

    /// The source location of the check that produced this error.
    pub fn location(&self) -> Location {
        match self {
            Self::Validation { location, .. }
            | Self::HostCall { location, .. }
            | Self::NativeCall { location, .. }
            | Self::UnknownTag { location, .. } => *location,
        }
    }
}
