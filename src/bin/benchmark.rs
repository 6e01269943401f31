//! Generation-stepping throughput: serial vs z-slice-parallel evolution

use std::time::Instant;

use life3d::application::ALIVE_PROBABILITY;
use life3d::domain::{Grid, StandardRule};

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut rng = rand::rng();
    let mut current = Grid::new(size);
    current.randomize_with(&mut rng, ALIVE_PROBABILITY);
    let mut next = Grid::new(size);

    let start = Instant::now();
    for _ in 0..iterations {
        current.evolve_into(&StandardRule, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut rng = rand::rng();
    let mut current = Grid::new(size);
    current.randomize_with(&mut rng, ALIVE_PROBABILITY);
    let mut next = Grid::new(size);

    let start = Instant::now();
    for _ in 0..iterations {
        current.evolve_into_parallel(&StandardRule, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== 3D Game of Life Stepping Benchmark ===\n");

    let sizes = [8, 16, 24, 32, 48, 64];
    let iterations = 20;

    println!(
        "{:>12} {:>12} {:>12} {:>12} {:>14}",
        "Size", "Serial", "Parallel", "Speedup", "Throughput"
    );
    println!("{:-<66}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        let cells = (size * size * size) as f64;
        let best_ms = serial_ms.min(parallel_ms);
        let throughput = cells / (best_ms / 1000.0) / 1_000_000.0;

        println!(
            "{:>12} {:>10.2}ms {:>10.2}ms {:>11.1}x {:>11.1}M/s",
            format!("{size}^3"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            throughput
        );
    }
}
