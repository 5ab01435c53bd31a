use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Cell, FrontierKind, GridView, Pathfinder, SearchConfig, Severity};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Random obstacle grid with a fixed seed, plus start/end pairs on walkable cells.
fn random_scenarios(n: usize, density: f64, count: usize) -> (Vec<Vec<u8>>, Vec<(Cell, Cell)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let grid: Vec<Vec<u8>> = (0..n)
        .map(|_| (0..n).map(|_| u8::from(!rng.gen_bool(density))).collect())
        .collect();
    let random_walkable = |rng: &mut StdRng| loop {
        let c = Cell::new(rng.gen_range(0..n) as i32, rng.gen_range(0..n) as i32);
        if grid[c.row as usize][c.col as usize] != 0 {
            break c;
        }
    };
    let scenarios = (0..count)
        .map(|_| (random_walkable(&mut rng), random_walkable(&mut rng)))
        .collect();
    (grid, scenarios)
}

fn frontier_bench(c: &mut Criterion) {
    for n in [32, 128] {
        let (grid, scenarios) = random_scenarios(n, 0.25, 20);
        let view = GridView::new(&grid).unwrap();
        for (kind, kind_str) in [
            (FrontierKind::BinaryHeap, "binary heap"),
            (FrontierKind::LinearScan, "linear scan"),
        ] {
            for precheck in [false, true] {
                let config = SearchConfig::default()
                    .with_frontier(kind)
                    .with_component_precheck(precheck);
                let pathfinder = Pathfinder::new(config);
                let precheck_str = if precheck { " (component precheck)" } else { "" };
                c.bench_function(format!("{n}x{n}, {kind_str}{precheck_str}").as_str(), |b| {
                    b.iter(|| {
                        for (start, end) in &scenarios {
                            let outcome = pathfinder.find_path_in(
                                &view,
                                *start,
                                *end,
                                &mut |_: &str, _: Severity| (),
                            );
                            black_box(outcome.ok());
                        }
                    })
                });
            }
        }
    }
}

criterion_group!(benches, frontier_bench);
criterion_main!(benches);
