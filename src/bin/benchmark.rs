//! Step timing for each strategy across board sizes

use std::time::Instant;
use life_engine::{LifeEngine, Strategy};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(strategy: Strategy, rows: usize, cols: usize, iterations: u32) -> anyhow::Result<f64> {
    let mut engine = LifeEngine::new(rows, cols)?;
    engine.set_strategy(strategy);
    engine.randomize_with(&mut StdRng::seed_from_u64(1));

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Step Benchmark ===\n");

    // First entry is the 800x600 px board at 16 px cells
    let sizes = [(37, 50), (100, 100), (500, 500), (1000, 1000), (2000, 2000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let serial_ms = benchmark(Strategy::Serial, rows, cols, iterations)?;
        let parallel_ms = benchmark(Strategy::Parallel, rows, cols, iterations)?;

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", rows, cols),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
