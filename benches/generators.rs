use criterion::{criterion_group, criterion_main, Criterion};
use prim_mazes::{
    connectivity,
    generators::{self, ScriptedIndices},
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_prim_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("prim_maze_32", move |b| {
        b.iter(|| generators::prim(Width(32), Height(32), &mut rng).unwrap())
    });
}

fn bench_prim_maze_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    c.bench_function("prim_maze_128", move |b| {
        b.iter(|| generators::prim(Width(128), Height(128), &mut rng).unwrap())
    });
}

fn bench_prim_maze_scripted_64(c: &mut Criterion) {
    c.bench_function("prim_maze_scripted_64", |b| {
        b.iter(|| {
            let mut script = ScriptedIndices::new(vec![7, 3, 11, 0, 5]);
            generators::prim(Width(64), Height(64), &mut script).unwrap()
        })
    });
}

fn bench_summarise_maze_64(c: &mut Criterion) {
    let maze = generators::prim(Width(64), Height(64), &mut XorShiftRng::seed_from_u64(64)).unwrap();
    c.bench_function("summarise_maze_64", move |b| b.iter(|| connectivity::summarise(&maze)));
}

criterion_group!(
    benches,
    bench_prim_maze_32,
    bench_prim_maze_128,
    bench_prim_maze_scripted_64,
    bench_summarise_maze_64
);
criterion_main!(benches);
