// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for host-value conversion paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marshal::{array_shape, split_commas, string_value};
use test_support::FakeHostEnv;

fn bench_array_shape(c: &mut Criterion) {
    let env = FakeHostEnv::new();
    let small = env.int_array(&[1, 28, 28, 3]);
    let large: Vec<i64> = (0..64).collect();
    let large = env.int_array(&large);

    c.bench_function("array_shape/rank4", |b| {
        b.iter(|| array_shape(&env, black_box(small)).unwrap())
    });
    c.bench_function("array_shape/rank64", |b| {
        b.iter(|| array_shape(&env, black_box(large)).unwrap())
    });
}

fn bench_string_value(c: &mut Criterion) {
    let env = FakeHostEnv::new();
    let short = env.string("Placeholder");
    let long = env.string(&"x".repeat(1024));

    c.bench_function("string_value/short", |b| {
        b.iter(|| string_value(&env, black_box(short)).unwrap())
    });
    c.bench_function("string_value/1k", |b| {
        b.iter(|| string_value(&env, black_box(long)).unwrap())
    });
}

fn bench_split_commas(c: &mut Criterion) {
    let names = (0..32).map(|i| format!("op_{i}")).collect::<Vec<_>>().join(",");

    c.bench_function("split_commas/32", |b| {
        b.iter(|| split_commas(black_box(&names)))
    });
}

criterion_group!(benches, bench_array_shape, bench_string_value, bench_split_commas);
criterion_main!(benches);
