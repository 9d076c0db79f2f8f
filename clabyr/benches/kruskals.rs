use clabyr::{
    algorithms::{random_from_seed, PassageGenerator as _, RndKruskals},
    Maze,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: usize = 201;

pub fn kruskals_passages(c: &mut Criterion) {
    c.bench_function("kruskals_passages", |b| {
        b.iter(|| {
            let (mut rng, _) = random_from_seed(Some(0));
            RndKruskals.generate(black_box(SIZE), black_box(SIZE), &mut rng)
        })
    });
}

pub fn generate_maze(c: &mut Criterion) {
    c.bench_function("generate_maze", |b| {
        b.iter(|| Maze::with_seed(black_box(SIZE), black_box(SIZE), 0))
    });
}

pub fn find_escape(c: &mut Criterion) {
    let maze = Maze::with_seed(SIZE, SIZE, 0);
    c.bench_function("find_escape", |b| {
        b.iter(|| {
            let mut maze = black_box(maze.clone());
            maze.solve().len()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = kruskals_passages, generate_maze, find_escape}
criterion_main!(benches);
