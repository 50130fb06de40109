//! Benchmarks for the per-frame wave update.
//!
//! Measures the CPU cost of rewriting every particle's y coordinate, at the
//! two field sizes the viewer ships with.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wavefield::{apply_wave, FieldConfig, ParticleField};

fn bench_wave_update(c: &mut Criterion) {
    for count in [2_000u32, 20_000] {
        let config = FieldConfig {
            count,
            spread: 10.0,
            vertex_colors: false,
        };
        let mut field = ParticleField::generate(&config, &mut StdRng::seed_from_u64(1));

        c.bench_function(&format!("apply_wave_{}", count), |b| {
            let mut t = 0.0_f32;
            b.iter(|| {
                t += 1.0 / 60.0;
                apply_wave(black_box(field.positions_mut()), black_box(t));
            });
        });
    }
}

criterion_group!(benches, bench_wave_update);
criterion_main!(benches);
