// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-api
//!
//! The interface this binding layer consumes from the foreign native tensor
//! library. The library sits behind a C ABI with its own memory-management
//! and error models; this crate pins down exactly what crosses the boundary:
//!
//! - [`TensorApi`] — the capability trait: status allocation, tensor
//!   construction, dimension queries, and graph-operation building.
//! - [`StatusGuard`] — scoped acquisition of a foreign status handle with
//!   guaranteed release on every exit path.
//! - [`StatusCode`] / [`DataType`] / [`AttrType`] — the library's closed
//!   enumerated tags, decoded with `from_raw -> Option` so unknown variants
//!   surface as errors instead of being silently ignored.
//! - [`TensorData`] / [`AdoptedBuffer`] — the buffer-ownership model. Every
//!   byte region backing a tensor is either copied into library-managed
//!   memory or adopted from a heap allocation with a deallocator callback
//!   the library invokes exactly once.
//!
//! # Ownership Model
//!
//! ```text
//! TensorData::Copied(Vec<u8>) ──► library owns a copy
//!
//! TensorData::Adopted(AdoptedBuffer) ──► library holds the buffer
//!        │                                    │ tensor destroyed
//!        │ deallocator closure                ▼
//!        └───────────────────────► runs exactly once, frees the bytes
//! ```
//!
//! Whichever path is chosen, exactly one owner is responsible for the bytes
//! at any time. The marshaling layer never retains a pointer after handing
//! ownership to the library.

mod api;
mod buffer;
mod code;
mod dtype;
mod handle;
mod status;

pub use api::TensorApi;
pub use buffer::{AdoptedBuffer, Deallocator, TensorData};
pub use code::StatusCode;
pub use dtype::{AttrType, DataType};
pub use handle::{GraphHandle, OpDescHandle, OpHandle, StatusHandle, TensorHandle};
pub use status::StatusGuard;
