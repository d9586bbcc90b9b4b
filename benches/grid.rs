use criterion::{criterion_group, criterion_main, Criterion};
use prim_mazes::{
    cells::{CellType, Point},
    grid::Grid,
    neighbours::{count_spaces, neighbours},
    units::{Height, Width},
};

fn bench_grid_128(c: &mut Criterion) {
    c.bench_function("grid_128", |b| {
        b.iter(|| Grid::new(Width(128), Height(128), CellType::Wall).unwrap())
    });
}

fn bench_neighbour_spaces_128(c: &mut Criterion) {
    let mut g = Grid::new(Width(128), Height(128), CellType::Wall).unwrap();
    for x in (1..127).step_by(2) {
        g.set(Point::new(x, 64), CellType::Space).unwrap();
    }
    c.bench_function("neighbour_spaces_128", move |b| {
        b.iter(|| {
            g.iter()
                .map(|p| count_spaces(&g, &neighbours(&g, p)).unwrap())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_grid_128, bench_neighbour_spaces_128);
criterion_main!(benches);
