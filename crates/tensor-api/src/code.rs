// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The native library's status codes.

/// Status codes reported by the native library.
///
/// [`StatusCode::Ok`] (raw value `0`) is the success sentinel; every other
/// code is a failure. Raw codes cross the ABI as `u32`; codes outside the
/// documented set still flow through numerically in error messages, so
/// decoding is lossless for the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StatusCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl StatusCode {
    /// Decodes a raw code. Returns `None` for values outside the documented
    /// set.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Ok,
            1 => Self::Cancelled,
            2 => Self::Unknown,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            7 => Self::PermissionDenied,
            8 => Self::ResourceExhausted,
            9 => Self::FailedPrecondition,
            10 => Self::Aborted,
            11 => Self::OutOfRange,
            12 => Self::Unimplemented,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            16 => Self::Unauthenticated,
            _ => return None,
        })
    }

    /// Returns the raw wire value.
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Returns `true` for the success sentinel.
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_roundtrip() {
        for raw in 0..=16 {
            let code = StatusCode::from_raw(raw).unwrap();
            assert_eq!(code.as_raw(), raw);
        }
        assert_eq!(StatusCode::from_raw(17), None);
    }

    #[test]
    fn test_ok_sentinel() {
        assert!(StatusCode::Ok.is_ok());
        assert_eq!(StatusCode::Ok.as_raw(), 0);
        assert!(!StatusCode::Internal.is_ok());
    }
}
