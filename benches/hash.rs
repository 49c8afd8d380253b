/*
 * Copyright (c) Adrian Alic <contact@alic.dev>
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use kwhash::generate;
use kwhash::hash::djb2;
use kwhash::keywords::KEYWORDS;

pub fn criterion_benchmark(c: &mut Criterion) {
    let bytes: usize = KEYWORDS.iter().map(|kw| kw.len()).sum();
    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("djb2_keyword_table", |b| {
        b.iter(|| {
            for kw in KEYWORDS {
                black_box(djb2(black_box(kw)));
            }
        })
    });
    group.finish();

    c.bench_function("generate_full_table", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(8 * 1024);
            generate(&mut out, black_box(&KEYWORDS)).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
