// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`TensorApi`] capability trait.

use crate::{
    DataType, GraphHandle, OpDescHandle, OpHandle, StatusHandle, TensorData, TensorHandle,
};

/// Everything the marshaling core is allowed to ask of the native library.
///
/// Implementations wrap the library's C ABI (or, in tests, an in-memory
/// fake). Calls are synchronous; failures are reported through status
/// handles populated by the failing call, never by unwinding.
///
/// Enumerated tags cross the boundary as raw `u32` values where the library
/// reports them (status codes, tensor element types); decoding and
/// unknown-variant reporting belong to the marshaling core.
pub trait TensorApi {
    // ── Status objects ─────────────────────────────────────────

    /// Allocates a fresh status with the success sentinel and an empty
    /// message. Release through [`delete_status`](TensorApi::delete_status);
    /// prefer [`StatusGuard`](crate::StatusGuard) for scoped release.
    fn new_status(&self) -> StatusHandle;

    /// Returns the raw code currently carried by a status.
    fn status_code(&self, status: StatusHandle) -> u32;

    /// Returns the message currently carried by a status.
    fn status_message(&self, status: StatusHandle) -> String;

    /// Releases a status. The handle is a dangling view afterwards.
    fn delete_status(&self, status: StatusHandle);

    // ── Tensors ────────────────────────────────────────────────

    /// Constructs a tensor of `dtype` with the given dimension list, backed
    /// by `data` under its ownership tag. An empty `dims` means scalar.
    fn new_tensor(&self, dtype: DataType, dims: &[i64], data: TensorData) -> TensorHandle;

    /// Returns the raw element-type tag of a tensor.
    fn tensor_dtype_raw(&self, tensor: TensorHandle) -> u32;

    /// Returns the number of dimensions of a tensor.
    fn tensor_num_dims(&self, tensor: TensorHandle) -> usize;

    /// Returns the size of dimension `index`.
    fn tensor_dim(&self, tensor: TensorHandle, index: usize) -> i64;

    /// Returns the byte length of the tensor's backing region.
    fn tensor_byte_size(&self, tensor: TensorHandle) -> usize;

    /// Destroys a tensor. For adopted buffers this is the point where the
    /// library invokes the deallocator callback.
    fn delete_tensor(&self, tensor: TensorHandle);

    // ── Graph operations ───────────────────────────────────────

    /// Creates an empty computation graph.
    fn new_graph(&self) -> GraphHandle;

    /// Opens an operation descriptor of `op_type` named `name` in `graph`.
    fn new_operation(&self, graph: GraphHandle, op_type: &str, name: &str) -> OpDescHandle;

    /// Sets an element-type attribute on an open descriptor.
    fn set_attr_type(&self, desc: OpDescHandle, attr: &str, dtype: DataType);

    /// Sets a shape attribute on an open descriptor.
    fn set_attr_shape(&self, desc: OpDescHandle, attr: &str, dims: &[i64]);

    /// Finalizes a descriptor, consuming it. On failure the returned handle
    /// is `None` and `status` carries the code and message.
    fn finish_operation(&self, desc: OpDescHandle, status: StatusHandle) -> Option<OpHandle>;
}
