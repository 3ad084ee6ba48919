use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mirrorstroke_core::{Coords, Extent};
use mirrorstroke_paint::{derive_strokes, select_transform, MirrorState, TransformCache};

fn all_symmetries() -> MirrorState {
    MirrorState {
        horizontal: true,
        vertical: true,
        point_symmetry: true,
        horizontal_position: 300.0,
        vertical_position: 400.0,
        disable_transformation: false,
    }
}

fn bench_derive_strokes(c: &mut Criterion) {
    let state = all_symmetries();
    let origin = Coords::new(123.5, 45.25);
    c.bench_function("derive_strokes_all_symmetries", |b| {
        b.iter(|| derive_strokes(black_box(&origin), black_box(&state)))
    });
}

fn bench_select_transform(c: &mut Criterion) {
    let state = all_symmetries();
    c.bench_function("select_transform_per_stroke", |b| {
        b.iter(|| {
            for index in 0..4 {
                black_box(select_transform(black_box(index), 64, 64, &state));
            }
        })
    });
}

fn bench_transform_cache(c: &mut Criterion) {
    let mut cache = TransformCache::new();
    c.bench_function("transform_cache_hit", |b| {
        b.iter(|| cache.prepare(black_box(Extent::new(64, 64))))
    });

    let mut cache = TransformCache::new();
    let mut flip = false;
    c.bench_function("transform_cache_rebuild", |b| {
        b.iter(|| {
            flip = !flip;
            let size = if flip { 64 } else { 65 };
            cache.prepare(black_box(Extent::new(size, size)))
        })
    });
}

criterion_group!(
    benches,
    bench_derive_strokes,
    bench_select_transform,
    bench_transform_cache
);
criterion_main!(benches);
