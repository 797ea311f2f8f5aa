// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Native tensor construction from host-owned data.
//!
//! Two ownership paths, one per constructor family:
//!
//! - [`int32_tensor`] / [`int32_vector_tensor`] copy values into
//!   library-managed memory (`TensorData::Copied`).
//! - [`int32_scalar_tensor`] adopts a heap allocation with a deallocator
//!   callback (`TensorData::Adopted`); the library frees the bytes exactly
//!   once, when it destroys the tensor.
//!
//! Constructors for further element types follow the same two paths; only
//! i32 is wired up today.

use crate::{element_count, MarshalError, Result};
use tensor_api::{AdoptedBuffer, DataType, Deallocator, TensorApi, TensorData, TensorHandle};

/// Builds an i32 tensor of the given shape by copying `values` into
/// library-managed memory.
///
/// Fails validation if the value count does not match the element count
/// implied by `dims`.
#[track_caller]
pub fn int32_tensor<A: TensorApi + ?Sized>(
    api: &A,
    dims: &[i64],
    values: &[i32],
) -> Result<TensorHandle> {
    let count = element_count(dims);
    if count < 0 || values.len() != count as usize {
        return Err(MarshalError::validation(format!(
            "Value count does not match shape: {} != {count}",
            values.len()
        )));
    }

    // SAFETY: reinterpreting &[i32] as &[u8] is safe for Copy types.
    let byte_slice = unsafe {
        std::slice::from_raw_parts(values.as_ptr() as *const u8, values.len() * 4)
    };
    Ok(api.new_tensor(DataType::Int32, dims, TensorData::Copied(byte_slice.to_vec())))
}

/// Builds a 1-D i32 tensor from `values` (copy-in path).
#[track_caller]
pub fn int32_vector_tensor<A: TensorApi + ?Sized>(
    api: &A,
    values: &[i32],
) -> Result<TensorHandle> {
    int32_tensor(api, &[values.len() as i64], values)
}

/// Builds a scalar i32 tensor by adopting a heap allocation.
///
/// The deallocator closure is bound to exactly the allocation it frees and
/// runs once, when the library destroys the tensor. This layer keeps no
/// pointer to the bytes after the call.
pub fn int32_scalar_tensor<A: TensorApi + ?Sized>(api: &A, value: i32) -> TensorHandle {
    let boxed: Box<[i32; 1]> = Box::new([value]);
    let len = std::mem::size_of::<[i32; 1]>();
    let ptr = Box::into_raw(boxed) as *mut u8;

    let dealloc: Deallocator = Box::new(|p, _len| {
        // SAFETY: `p` came from Box::into_raw on a Box<[i32; 1]> above.
        unsafe { drop(Box::from_raw(p as *mut [i32; 1])) };
    });
    // SAFETY: `ptr` is a live heap allocation of exactly `len` bytes; the
    // closure frees exactly that allocation.
    let buffer = unsafe { AdoptedBuffer::from_raw(ptr, len, dealloc) };

    api.new_tensor(DataType::Int32, &[], TensorData::Adopted(buffer))
}
