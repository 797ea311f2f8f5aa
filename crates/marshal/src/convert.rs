// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Value conversions between host and native representations.
//!
//! Conversions here move data only; no numerical work happens. Every host
//! read goes through [`check_host`] so any runtime failure aborts the
//! conversion immediately — partial results are never returned.

use crate::{check_host, expect_at_most, expect_string, MarshalError, Result};
use host_env::{BufferElementType, HostEnv, HostValue};
use tensor_api::{AttrType, DataType, TensorApi, TensorHandle};

/// Extracts an owned UTF-8 string from a host string value.
///
/// Reads the byte length first, then copies into an exact-size scratch
/// buffer (+1 for the runtime's trailing terminator). The scratch is an
/// owned `Vec`, so it is released on every exit path.
#[track_caller]
pub fn string_value<E: HostEnv + ?Sized>(env: &E, value: HostValue) -> Result<String> {
    expect_string(env, value)?;

    let len = check_host(env, env.string_utf8_len(value))?;
    let mut buf = vec![0u8; len + 1];
    let written = check_host(env, env.read_string_utf8(value, &mut buf))?;
    buf.truncate(written);

    String::from_utf8(buf).map_err(|_| MarshalError::validation("Argument is not valid UTF-8!"))
}

/// Reads a shape from a host array value, element by element in index order.
///
/// Array-ness is the caller's responsibility (validate with
/// [`expect_array`](crate::expect_array) first). Any per-element host
/// failure aborts extraction; a partial shape is never returned.
#[track_caller]
pub fn array_shape<E: HostEnv + ?Sized>(env: &E, array: HostValue) -> Result<Vec<i64>> {
    shape_with_limit(env, array, None)
}

/// [`array_shape`] with the rank bounded by `max_rank` (inclusive).
#[track_caller]
pub fn array_shape_bounded<E: HostEnv + ?Sized>(
    env: &E,
    array: HostValue,
    max_rank: u32,
) -> Result<Vec<i64>> {
    shape_with_limit(env, array, Some(max_rank))
}

#[track_caller]
fn shape_with_limit<E: HostEnv + ?Sized>(
    env: &E,
    array: HostValue,
    max_rank: Option<u32>,
) -> Result<Vec<i64>> {
    let length = check_host(env, env.array_length(array))?;
    if let Some(max) = max_rank {
        expect_at_most(length, max)?;
    }

    let mut dims = Vec::with_capacity(length as usize);
    for index in 0..length {
        let element = check_host(env, env.element(array, index))?;
        dims.push(check_host(env, env.value_i64(element))?);
    }
    Ok(dims)
}

/// Returns the number of elements described by a dimension list.
///
/// An empty list is a scalar shape: count 1. Any zero dimension yields 0.
pub fn element_count(dims: &[i64]) -> i64 {
    dims.iter().product()
}

/// Returns the number of elements in a native tensor, queried dimension by
/// dimension from the library.
pub fn tensor_num_elements<A: TensorApi + ?Sized>(api: &A, tensor: TensorHandle) -> usize {
    let mut count: i64 = 1;
    for index in 0..api.tensor_num_dims(tensor) {
        count *= api.tensor_dim(tensor, index);
    }
    count as usize
}

/// Maps a host typed-buffer element tag to a native element type.
///
/// Tags without a native counterpart are reported through the unknown-tag
/// channel, never silently coerced.
#[track_caller]
pub fn buffer_element_dtype(kind: BufferElementType) -> Result<DataType> {
    match kind {
        BufferElementType::Int8 => Ok(DataType::Int8),
        BufferElementType::Uint8 => Ok(DataType::Uint8),
        BufferElementType::Int16 => Ok(DataType::Int16),
        BufferElementType::Int32 => Ok(DataType::Int32),
        BufferElementType::Float32 => Ok(DataType::Float),
        BufferElementType::Float64 => Ok(DataType::Double),
        BufferElementType::BigInt64 => Ok(DataType::Int64),
        BufferElementType::Uint8Clamped
        | BufferElementType::Uint16
        | BufferElementType::Uint32
        | BufferElementType::BigUint64 => {
            Err(MarshalError::unknown_buffer_element_type(kind.as_raw()))
        }
    }
}

/// Decodes a raw element-type tag from the library, reporting unknown tags.
#[track_caller]
pub fn data_type_from_raw(raw: u32) -> Result<DataType> {
    DataType::from_raw(raw).ok_or_else(|| MarshalError::unknown_data_type(raw))
}

/// Decodes a raw attribute-type tag from the library, reporting unknown tags.
#[track_caller]
pub fn attr_type_from_raw(raw: u32) -> Result<AttrType> {
    AttrType::from_raw(raw).ok_or_else(|| MarshalError::unknown_attr_type(raw))
}

/// Returns the decoded element type of a native tensor.
#[track_caller]
pub fn tensor_dtype<A: TensorApi + ?Sized>(api: &A, tensor: TensorHandle) -> Result<DataType> {
    data_type_from_raw(api.tensor_dtype_raw(tensor))
}

/// Splits a comma-delimited string, dropping empty tokens.
///
/// Not a CSV parser: no quoting, no escaping.
pub fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
