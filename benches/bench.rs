use criterion::{Criterion, criterion_group, criterion_main};
use crossword_solver::crossword::puzzle::Puzzle;
use crossword_solver::crossword::structure::Structure;
use crossword_solver::csp::arc_consistency::{ArcQueue, FifoQueue, LifoStack, ac3};
use crossword_solver::csp::backtracking::Backtracking;
use crossword_solver::csp::domain::Domains;
use crossword_solver::csp::parallel::ParallelBacktracking;
use crossword_solver::csp::solver::{DefaultConfig, Solver, SolverConfig};
use crossword_solver::csp::value_ordering::{
    DomainOrder, EliminationCount, LeastConstrainingValue, ValueOrdering,
};
use crossword_solver::csp::variable_selection::{
    FixedOrder, MinimumRemainingValues, RandomOrder, VariableSelection,
};
use std::fmt::Debug;
use std::hint::black_box;
use std::marker::PhantomData;
use std::time::Duration;

#[derive(Debug, Clone)]
struct SelectorConfig<V: VariableSelection>(PhantomData<V>);

impl<V: VariableSelection> SolverConfig for SelectorConfig<V> {
    type VariableSelector = V;
    type ValueOrder = LeastConstrainingValue;
    type Queue = FifoQueue;
}

#[derive(Debug, Clone)]
struct OrderingConfig<O: ValueOrdering>(PhantomData<O>);

impl<O: ValueOrdering> SolverConfig for OrderingConfig<O> {
    type VariableSelector = MinimumRemainingValues;
    type ValueOrder = O;
    type Queue = FifoQueue;
}

/// A fully open `size`x`size` grid and `count` random words over a small
/// alphabet, which gives plenty of crossings and dead ends.
fn word_square(size: usize, count: usize, seed: u64) -> Puzzle {
    let mut rng = fastrand::Rng::with_seed(seed);
    let words: Vec<String> = (0..count)
        .map(|_| (0..size).map(|_| rng.char('A'..='E')).collect())
        .collect();
    let structure = Structure::new(size, size, vec![true; size * size])
        .expect("square grid dimensions match");
    Puzzle::new(structure, words.into_iter().collect())
}

fn data_puzzles() -> Vec<Puzzle> {
    [
        ("data/structure0.structure", "data/words0.txt"),
        ("data/structure1.structure", "data/words1.txt"),
    ]
    .into_iter()
    .filter_map(|(structure, words)| match Puzzle::from_files(structure, words) {
        Ok(puzzle) => Some(puzzle),
        Err(e) => {
            eprintln!("Failed to load {structure}: {e}");
            None
        }
    })
    .collect()
}

fn solve_all<Config: SolverConfig>(puzzles: &[Puzzle]) {
    for puzzle in puzzles {
        let mut solver: Backtracking<Config> = Solver::new(puzzle);
        black_box(solver.solve());
    }
}

fn bench_data(c: &mut Criterion) {
    let puzzles = data_puzzles();
    c.bench_function("data - default", |b| {
        b.iter(|| solve_all::<DefaultConfig>(&puzzles));
    });
}

fn bench_variable_selection(c: &mut Criterion) {
    let puzzles: Vec<Puzzle> = (0..20).map(|seed| word_square(4, 300, seed)).collect();

    let mut group = c.benchmark_group("word square - variable selection");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("MRV", |b| {
        b.iter(|| solve_all::<SelectorConfig<MinimumRemainingValues>>(&puzzles));
    });
    group.bench_function("Fixed", |b| {
        b.iter(|| solve_all::<SelectorConfig<FixedOrder>>(&puzzles));
    });
    group.bench_function("Random", |b| {
        b.iter(|| solve_all::<SelectorConfig<RandomOrder>>(&puzzles));
    });
}

fn bench_value_ordering(c: &mut Criterion) {
    let puzzles: Vec<Puzzle> = (0..20).map(|seed| word_square(4, 300, seed)).collect();

    let mut group = c.benchmark_group("word square - value ordering");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("LCV", |b| {
        b.iter(|| solve_all::<OrderingConfig<LeastConstrainingValue>>(&puzzles));
    });
    group.bench_function("Elimination", |b| {
        b.iter(|| solve_all::<OrderingConfig<EliminationCount>>(&puzzles));
    });
    group.bench_function("Domain", |b| {
        b.iter(|| solve_all::<OrderingConfig<DomainOrder>>(&puzzles));
    });
}

fn run_ac3<Q: ArcQueue>(puzzle: &Puzzle) {
    let mut domains = Domains::new(puzzle);
    domains.enforce_node_consistency(puzzle);
    black_box(ac3(puzzle, &mut domains, None, &mut Q::default()));
}

fn bench_ac3(c: &mut Criterion) {
    let puzzle = word_square(5, 2000, 7);

    let mut group = c.benchmark_group("ac3 - work list");
    group.bench_function("FIFO", |b| b.iter(|| run_ac3::<FifoQueue>(&puzzle)));
    group.bench_function("LIFO", |b| b.iter(|| run_ac3::<LifoStack>(&puzzle)));
}

fn bench_parallel(c: &mut Criterion) {
    let puzzles: Vec<Puzzle> = (0..20).map(|seed| word_square(4, 300, seed)).collect();

    let mut group = c.benchmark_group("word square - solver");
    group.sample_size(20);
    group.bench_function("Backtracking", |b| {
        b.iter(|| solve_all::<DefaultConfig>(&puzzles));
    });
    group.bench_function("Parallel", |b| {
        b.iter(|| {
            for puzzle in &puzzles {
                let mut solver: ParallelBacktracking = Solver::new(puzzle);
                black_box(solver.solve());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_data,
    bench_variable_selection,
    bench_value_ordering,
    bench_ac3,
    bench_parallel
);
criterion_main!(benches);
