// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Native graph-primitive construction.
//!
//! The pattern for any multi-attribute native builder: open a descriptor,
//! set zero or more optional attributes conditioned on presence, finalize
//! under a status guard, check the status, null-check the handle. The guard
//! releases the status on the error paths as well.

use crate::{check_native, expect_some, Result};
use tensor_api::{DataType, GraphHandle, OpHandle, StatusGuard, TensorApi};

/// Builds a typed input placeholder in `graph`.
///
/// The shape attribute is only set when `dims` is non-empty; an empty
/// dimension list means the placeholder's shape is unknown.
#[track_caller]
pub fn placeholder<A: TensorApi + ?Sized>(
    api: &A,
    graph: GraphHandle,
    name: &str,
    dtype: DataType,
    dims: &[i64],
) -> Result<OpHandle> {
    let desc = api.new_operation(graph, "Placeholder", name);
    api.set_attr_type(desc, "dtype", dtype);
    if !dims.is_empty() {
        api.set_attr_shape(desc, "shape", dims);
    }

    let status = StatusGuard::new(api);
    let op = api.finish_operation(desc, status.handle());
    check_native(&status)?;
    expect_some(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_api::StatusCode;
    use test_support::FakeTensorLib;

    #[test]
    fn test_placeholder_with_shape() {
        let lib = FakeTensorLib::new();
        let graph = lib.new_graph();

        let op = placeholder(&lib, graph, "input", DataType::Float, &[1, 28, 28]).unwrap();

        let record = lib.op(op);
        assert_eq!(record.op_type, "Placeholder");
        assert_eq!(record.name, "input");
        assert_eq!(record.type_attrs, vec![("dtype".to_string(), DataType::Float)]);
        assert_eq!(
            record.shape_attrs,
            vec![("shape".to_string(), vec![1, 28, 28])]
        );
    }

    #[test]
    fn test_placeholder_unknown_shape_skips_attr() {
        let lib = FakeTensorLib::new();
        let graph = lib.new_graph();

        let op = placeholder(&lib, graph, "x", DataType::Int32, &[]).unwrap();
        assert!(lib.op(op).shape_attrs.is_empty());
    }

    #[test]
    fn test_placeholder_failure_reports_code_and_message() {
        let lib = FakeTensorLib::new();
        let graph = lib.new_graph();
        lib.inject_finish_error(StatusCode::InvalidArgument, "duplicate node name");

        let err = placeholder(&lib, graph, "x", DataType::Float, &[2]).unwrap_err();
        assert_eq!(err.to_string(), "native status 3: duplicate node name");
    }

    #[test]
    fn test_status_released_on_both_paths() {
        let lib = FakeTensorLib::new();
        let graph = lib.new_graph();

        let _ = placeholder(&lib, graph, "ok", DataType::Float, &[2]).unwrap();
        lib.inject_finish_error(StatusCode::Internal, "boom");
        let _ = placeholder(&lib, graph, "bad", DataType::Float, &[2]).unwrap_err();

        let (created, deleted) = lib.status_counts();
        assert_eq!(created, 2);
        assert_eq!(created, deleted, "status leaked on an exit path");
        assert_eq!(lib.live_status_count(), 0);
    }
}
