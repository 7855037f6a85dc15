// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use peniko::Color;
use understory_label::{Anchor, Labels, RecordingSurface};

const ANCHORS: [Anchor; 5] = [
    Anchor::NorthWest,
    Anchor::NorthEast,
    Anchor::SouthWest,
    Anchor::SouthEast,
    Anchor::Center,
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Labels on a regular grid, spaced so that most of them fit on their own rule.
fn gen_grid_labels(n: usize, cell: f64) -> Labels<usize> {
    let ink = Color::from_rgba8(0, 0, 0, 255);
    let mut labels = Labels::new();
    for y in 0..n {
        for x in 0..n {
            let i = y * n + x;
            let pos = Point::new(x as f64 * cell, y as f64 * cell);
            labels.add_with_color(i, ink, pos, ANCHORS[i % ANCHORS.len()], "label");
        }
    }
    labels
}

/// Labels scattered around a few centers so most of them collide and fall back.
fn gen_clustered_labels(n_clusters: usize, per_cluster: usize, spread: f64) -> Labels<usize> {
    let ink = Color::from_rgba8(0, 0, 0, 255);
    let mut labels = Labels::new();
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            let i = labels.len();
            let pos = Point::new(cx + dx, cy + dy);
            labels.add_with_color(i, ink, pos, Anchor::NorthWest, "node");
        }
    }
    labels
}

fn bench_paint_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_grid");
    for &n in &[8usize, 16, 32] {
        let labels = gen_grid_labels(n, 48.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("{}x{}", n, n), |b| {
            b.iter_batched(
                || (labels.clone(), RecordingSurface::default()),
                |(mut labels, mut surface)| {
                    let damage = labels.paint(&mut surface);
                    black_box(damage.fallbacks);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_paint_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_clustered");
    let labels = gen_clustered_labels(16, 32, 64.0);
    group.throughput(Throughput::Elements(labels.len() as u64));
    group.bench_function("16x32", |b| {
        b.iter_batched(
            || (labels.clone(), RecordingSurface::default()),
            |(mut labels, mut surface)| {
                let damage = labels.paint(&mut surface);
                black_box(damage.overlapping);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries_after_paint");
    let mut labels = gen_grid_labels(32, 48.0);
    let _ = labels.paint(&mut RecordingSurface::default());
    group.bench_function("find_256", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * 97.0;
                let y = (q / 16) as f64 * 97.0;
                hits += usize::from(labels.find(Point::new(x, y)).is_some());
            }
            black_box(hits);
        })
    });
    group.bench_function("blocked_256", |b| {
        b.iter(|| {
            let mut blocked = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * 97.0;
                let y = (q / 16) as f64 * 97.0;
                blocked += usize::from(labels.blocked(Point::new(x, y), 16.0, 16.0));
            }
            black_box(blocked);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_paint_grid, bench_paint_clustered, bench_queries);
criterion_main!(benches);
