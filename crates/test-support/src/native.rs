// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! An in-memory native tensor library.

use std::cell::RefCell;
use std::collections::HashMap;
use tensor_api::{
    DataType, GraphHandle, OpDescHandle, OpHandle, StatusCode, StatusHandle, TensorApi,
    TensorData, TensorHandle,
};

struct FakeTensor {
    dtype_raw: u32,
    dims: Vec<i64>,
    data: TensorData,
}

struct OpDesc {
    op_type: String,
    name: String,
    type_attrs: Vec<(String, DataType)>,
    shape_attrs: Vec<(String, Vec<i64>)>,
}

/// A finalized operation as recorded by the fake library.
#[derive(Debug, Clone)]
pub struct FinishedOp {
    pub op_type: String,
    pub name: String,
    pub type_attrs: Vec<(String, DataType)>,
    pub shape_attrs: Vec<(String, Vec<i64>)>,
}

#[derive(Default)]
struct Inner {
    statuses: HashMap<u64, (u32, String)>,
    tensors: HashMap<u64, FakeTensor>,
    descs: HashMap<u64, OpDesc>,
    ops: HashMap<u64, FinishedOp>,
    next_id: u64,
    statuses_created: usize,
    statuses_deleted: usize,
    finish_failure: Option<(u32, String)>,
    adopted_releases: Vec<(usize, usize)>,
}

impl Inner {
    fn mint(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// An in-memory implementation of [`TensorApi`].
///
/// Tracks every status, tensor, and operation by handle so tests can assert
/// on lifetimes: statuses created vs. deleted, tensors still live, and the
/// exact `(pointer, length)` pairs of adopted buffers released through
/// [`delete_tensor`](TensorApi::delete_tensor). Finalization failures are
/// injected with [`inject_finish_error`](FakeTensorLib::inject_finish_error).
#[derive(Default)]
pub struct FakeTensorLib {
    inner: RefCell<Inner>,
}

impl FakeTensorLib {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `finish_operation` fail, populating its status with
    /// `code` and `message`.
    pub fn inject_finish_error(&self, code: StatusCode, message: &str) {
        self.inner.borrow_mut().finish_failure = Some((code.as_raw(), message.to_string()));
    }

    /// Overwrites a tensor's element-type tag with an arbitrary raw value,
    /// simulating a type this binding does not handle.
    pub fn set_tensor_dtype_raw(&self, tensor: TensorHandle, raw: u32) {
        if let Some(t) = self.inner.borrow_mut().tensors.get_mut(&tensor.as_raw()) {
            t.dtype_raw = raw;
        }
    }

    /// Copies out a tensor's backing bytes.
    pub fn tensor_bytes(&self, tensor: TensorHandle) -> Vec<u8> {
        self.inner.borrow().tensors[&tensor.as_raw()].data.bytes().to_vec()
    }

    /// Returns a tensor's dimension list.
    pub fn tensor_dims(&self, tensor: TensorHandle) -> Vec<i64> {
        self.inner.borrow().tensors[&tensor.as_raw()].dims.clone()
    }

    /// Returns a finalized operation's record.
    pub fn op(&self, op: OpHandle) -> FinishedOp {
        self.inner.borrow().ops[&op.as_raw()].clone()
    }

    /// Number of tensors not yet deleted.
    pub fn live_tensor_count(&self) -> usize {
        self.inner.borrow().tensors.len()
    }

    /// Number of statuses not yet deleted.
    pub fn live_status_count(&self) -> usize {
        self.inner.borrow().statuses.len()
    }

    /// Statuses allocated and released so far.
    pub fn status_counts(&self) -> (usize, usize) {
        let inner = self.inner.borrow();
        (inner.statuses_created, inner.statuses_deleted)
    }

    /// The `(pointer, length)` pairs of adopted buffers released so far, in
    /// release order.
    pub fn adopted_releases(&self) -> Vec<(usize, usize)> {
        self.inner.borrow().adopted_releases.clone()
    }
}

impl TensorApi for FakeTensorLib {
    fn new_status(&self) -> StatusHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.mint();
        inner.statuses.insert(id, (StatusCode::Ok.as_raw(), String::new()));
        inner.statuses_created += 1;
        StatusHandle::from_raw(id)
    }

    fn status_code(&self, status: StatusHandle) -> u32 {
        self.inner.borrow().statuses[&status.as_raw()].0
    }

    fn status_message(&self, status: StatusHandle) -> String {
        self.inner.borrow().statuses[&status.as_raw()].1.clone()
    }

    fn delete_status(&self, status: StatusHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.statuses.remove(&status.as_raw());
        inner.statuses_deleted += 1;
    }

    fn new_tensor(&self, dtype: DataType, dims: &[i64], data: TensorData) -> TensorHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.mint();
        inner.tensors.insert(
            id,
            FakeTensor {
                dtype_raw: dtype.as_raw(),
                dims: dims.to_vec(),
                data,
            },
        );
        TensorHandle::from_raw(id)
    }

    fn tensor_dtype_raw(&self, tensor: TensorHandle) -> u32 {
        self.inner.borrow().tensors[&tensor.as_raw()].dtype_raw
    }

    fn tensor_num_dims(&self, tensor: TensorHandle) -> usize {
        self.inner.borrow().tensors[&tensor.as_raw()].dims.len()
    }

    fn tensor_dim(&self, tensor: TensorHandle, index: usize) -> i64 {
        self.inner.borrow().tensors[&tensor.as_raw()].dims[index]
    }

    fn tensor_byte_size(&self, tensor: TensorHandle) -> usize {
        self.inner.borrow().tensors[&tensor.as_raw()].data.len()
    }

    fn delete_tensor(&self, tensor: TensorHandle) {
        let removed = self.inner.borrow_mut().tensors.remove(&tensor.as_raw());
        if let Some(t) = removed {
            if let TensorData::Adopted(buffer) = &t.data {
                self.inner
                    .borrow_mut()
                    .adopted_releases
                    .push((buffer.as_ptr() as usize, buffer.len()));
            }
            // The adopted deallocator runs here, outside any borrow.
            drop(t);
        }
    }

    fn new_graph(&self) -> GraphHandle {
        GraphHandle::from_raw(self.inner.borrow_mut().mint())
    }

    fn new_operation(&self, _graph: GraphHandle, op_type: &str, name: &str) -> OpDescHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.mint();
        inner.descs.insert(
            id,
            OpDesc {
                op_type: op_type.to_string(),
                name: name.to_string(),
                type_attrs: Vec::new(),
                shape_attrs: Vec::new(),
            },
        );
        OpDescHandle::from_raw(id)
    }

    fn set_attr_type(&self, desc: OpDescHandle, attr: &str, dtype: DataType) {
        if let Some(d) = self.inner.borrow_mut().descs.get_mut(&desc.as_raw()) {
            d.type_attrs.push((attr.to_string(), dtype));
        }
    }

    fn set_attr_shape(&self, desc: OpDescHandle, attr: &str, dims: &[i64]) {
        if let Some(d) = self.inner.borrow_mut().descs.get_mut(&desc.as_raw()) {
            d.shape_attrs.push((attr.to_string(), dims.to_vec()));
        }
    }

    fn finish_operation(&self, desc: OpDescHandle, status: StatusHandle) -> Option<OpHandle> {
        let mut inner = self.inner.borrow_mut();
        let d = inner.descs.remove(&desc.as_raw())?;

        if let Some((code, message)) = inner.finish_failure.take() {
            inner
                .statuses
                .insert(status.as_raw(), (code, message));
            return None;
        }

        let id = inner.mint();
        inner.ops.insert(
            id,
            FinishedOp {
                op_type: d.op_type,
                name: d.name,
                type_attrs: d.type_attrs,
                shape_attrs: d.shape_attrs,
            },
        );
        Some(OpHandle::from_raw(id))
    }
}
