//! `clap`-derived argument sets for the three binaries. Analogous to
//! the teacher's `ParsedArgs` (`cli::args`), but one small `Parser`
//! struct per binary rather than one combined struct for an argv family,
//! since `hif_cat`/`hif_rand`/`hif_bench` don't share an alias-detection
//! scheme the way `lz4`/`lz4cat`/`unlz4`/`lz4c` do.

use std::path::PathBuf;

use clap::Parser;

/// `hif_cat <directory>` — print every statement of a session directory
/// in the textual dump grammar (spec.md §6 contract).
#[derive(Debug, Parser)]
#[command(name = "hif_cat", about = "Print a HIF session directory as text")]
pub struct HifCatArgs {
    /// Session directory containing `<N>.st`/`<N>.id` chunk pairs.
    pub directory: PathBuf,
}

/// `hif_rand <directory> [--seed N] [--statements N]` — write a
/// reproducible pseudo-random session (SPEC_FULL.md §6 ambient addition,
/// grounded in `tests/hif_rand_test.cpp`).
#[derive(Debug, Parser)]
#[command(name = "hif_rand", about = "Generate a pseudo-random HIF session")]
pub struct HifRandArgs {
    /// Directory to create (or clean and reuse) for the generated session.
    pub directory: PathBuf,

    /// Seed for the reproducible pseudo-random generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of statements to emit after the mandatory header.
    #[arg(long, default_value_t = 100)]
    pub statements: u32,
}

/// `hif_bench <directory-of-sessions>` — run the in-process
/// micro-benchmarks against one or more existing sessions (SPEC_FULL.md
/// §6 ambient addition, grounded in `tests/hif_bench.cpp`).
#[derive(Debug, Parser)]
#[command(name = "hif_bench", about = "Benchmark reading existing HIF sessions")]
pub struct HifBenchArgs {
    /// Directory containing one or more session subdirectories, each a
    /// set of `<N>.st`/`<N>.id` chunk pairs.
    pub directory: PathBuf,
}
