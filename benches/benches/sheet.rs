// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for spacing-table construction and drag resolution.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_sheet::{
    Detent, DetentSet, SheetController, SheetGeometry, SheetPreference, SpacingTable, nearest,
};

fn detents(len: usize) -> DetentSet {
    let mut set: DetentSet = [Detent::Natural, Detent::Medium, Detent::Large]
        .into_iter()
        .collect();
    for i in 0..len.saturating_sub(3) {
        set.insert(Detent::Fraction(i as f64 / len as f64));
    }
    set
}

fn bench_spacing_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/spacing_table");
    let geometry = SheetGeometry::new(844.0, 34.0, 320.0);

    // Deduplication scans the table, so building is quadratic in the detent count.
    for len in [3_usize, 8, 32] {
        let set = detents(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("new", len), &set, |b, set| {
            b.iter(|| black_box(SpacingTable::new(set, &geometry)));
        });

        let table = SpacingTable::new(&set, &geometry);
        group.bench_with_input(BenchmarkId::new("nearest", len), &table, |b, table| {
            b.iter(|| black_box(nearest(black_box(431.0), table)));
        });
    }

    group.finish();
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/drag_cycle");

    group.bench_function("sixty_samples_then_release", |b| {
        let mut sheet = SheetController::default();
        sheet.set_geometry(SheetGeometry::new(844.0, 34.0, 320.0));
        sheet.apply_preference(SheetPreference::detents([
            Detent::Fraction(0.2),
            Detent::Medium,
            Detent::Large,
        ]));
        sheet.apply_preference(SheetPreference::InteractiveDismissDisabled(true));
        sheet.present();
        b.iter(|| {
            for i in 0..60 {
                sheet.update_drag(Vec2::new(0.0, -(i as f64) * 4.0));
                black_box(sheet.render_offset());
            }
            black_box(sheet.release());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spacing_table, bench_drag_cycle);
criterion_main!(benches);
