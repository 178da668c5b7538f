//! `hif_bench` — thin CLI wrapper running the read-path micro-benchmark
//! in-process against one or more existing session directories
//! (SPEC_FULL.md §6 ambient addition, grounded in
//! `tests/hif_bench.cpp`). Stdout format is not stable; `benches/` holds
//! the `criterion`-driven benchmarks used for real measurement.

use std::time::Instant;

use clap::Parser;
use hif::cli::args::HifBenchArgs;
use hif::session::Reader;

fn bench_one(dir: &std::path::Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut reader = Reader::open(dir)?;
    let mut count: u64 = 1; // header statement
    while reader.next_statement()? {
        count += 1;
    }
    let elapsed = start.elapsed();
    let rate = count as f64 / elapsed.as_secs_f64().max(1e-9);
    println!(
        "{}: {count} statements in {:.3}ms ({rate:.0} statements/s)",
        dir.display(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn run(args: HifBenchArgs) -> anyhow::Result<()> {
    let mut any = false;
    for entry in std::fs::read_dir(&args.directory)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            any = true;
            bench_one(&entry.path())?;
        }
    }
    if !any {
        // The directory itself may be a single session.
        bench_one(&args.directory)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = HifBenchArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("hif_bench: {e}");
        std::process::exit(1);
    }
}
