use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mathgame_core::generator::generate;
use mathgame_core::model::{Difficulty, Operation};

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for difficulty in [Difficulty::EASY, Difficulty::HARD] {
        let bound = difficulty.upper_bound();

        c.bench_function(&format!("addition_{}", difficulty.label()), |b| {
            b.iter(|| generate(black_box(Operation::Addition), black_box(bound), &mut rng))
        });

        // Rejection sampling dominates here.
        c.bench_function(&format!("division_{}", difficulty.label()), |b| {
            b.iter(|| generate(black_box(Operation::Division), black_box(bound), &mut rng))
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
