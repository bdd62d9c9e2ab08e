use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::{GameConfig, GameEngine, RandomMineGenerator};

fn create(c: &mut Criterion) {
    let config = GameConfig::new(30, 180).unwrap();
    c.bench_function("create 30x30/180", |b| {
        b.iter(|| GameEngine::create(black_box(config), RandomMineGenerator::new(7)).unwrap())
    });
}

fn flood_fill(c: &mut Criterion) {
    // an empty board is the worst case, one reveal floods every cell
    let config = GameConfig::new(255, 0).unwrap();
    let engine = GameEngine::create(config, RandomMineGenerator::new(0)).unwrap();
    c.bench_function("flood 255x255", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| engine.reveal(black_box(0)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, create, flood_fill);
criterion_main!(benches);
