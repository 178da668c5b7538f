//! CLI argument parsing shared by `hif_cat`, `hif_rand`, `hif_bench`.
//!
//! Mirrors the teacher's `cli::args` / `cli::constants` split, but built
//! on `clap`'s derive API rather than the teacher's hand-rolled argv
//! loop — the ambient-stack addition calls for `clap` (SPEC_FULL.md §2).

pub mod args;
pub mod constants;
