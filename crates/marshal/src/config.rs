// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tunables for the marshaling layer, loadable from TOML.
//!
//! # TOML Format
//! ```toml
//! max_message_bytes = 500
//! max_tensor_rank = 4
//! ```

/// Default bound for formatted error messages, in bytes.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 500;

/// Default bound for tensor shape rank accepted from the host.
pub const DEFAULT_MAX_TENSOR_RANK: u32 = 4;

/// Configuration for the marshaling layer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MarshalConfig {
    /// Upper bound for a raised error message; longer messages are truncated
    /// on a character boundary, never overflowed.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
    /// Upper bound for the rank of a shape array accepted from the host.
    #[serde(default = "default_max_tensor_rank")]
    pub max_tensor_rank: u32,
}

fn default_max_message_bytes() -> usize {
    DEFAULT_MAX_MESSAGE_BYTES
}

fn default_max_tensor_rank() -> u32 {
    DEFAULT_MAX_TENSOR_RANK
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            max_tensor_rank: DEFAULT_MAX_TENSOR_RANK,
        }
    }
}

impl MarshalConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = MarshalConfig::default();
        assert_eq!(c.max_message_bytes, 500);
        assert_eq!(c.max_tensor_rank, 4);
    }

    #[test]
    fn test_from_toml_partial() {
        let c = MarshalConfig::from_toml("max_tensor_rank = 8\n").unwrap();
        assert_eq!(c.max_tensor_rank, 8);
        assert_eq!(c.max_message_bytes, 500);
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = MarshalConfig {
            max_message_bytes: 120,
            max_tensor_rank: 2,
        };
        let toml = c.to_toml().unwrap();
        let back = MarshalConfig::from_toml(&toml).unwrap();
        assert_eq!(back.max_message_bytes, 120);
        assert_eq!(back.max_tensor_rank, 2);
    }
}
