//! `hif_rand` — write a reproducible pseudo-random HIF session
//! (SPEC_FULL.md §6 ambient addition, grounded in
//! `tests/hif_rand_test.cpp`). Useful as a fixture generator for tests
//! and fuzzing without checking binary blobs into the repository.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hif::cli::args::HifRandArgs;
use hif::cli::constants::{DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION};
use hif::session::{SessionConfig, Writer};
use hif::{IdCategory, Statement, StatementClass};

const CLASSES: [fn(u16) -> Statement; 9] = [
    Statement::node,
    Statement::assign,
    Statement::attr,
    Statement::open_call,
    Statement::closed_call,
    Statement::open_def,
    Statement::closed_def,
    Statement::end,
    Statement::use_stmt,
];

const CATEGORIES: [IdCategory; 5] = [
    IdCategory::String,
    IdCategory::Base2,
    IdCategory::Base3,
    IdCategory::Base4,
    IdCategory::Custom,
];

fn random_side(rng: &mut StdRng, cat: IdCategory) -> Vec<u8> {
    match cat {
        IdCategory::String => {
            let len = rng.gen_range(1..8);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
        }
        _ => {
            let len = rng.gen_range(1..9);
            (0..len).map(|_| rng.gen()).collect()
        }
    }
}

fn random_statement(rng: &mut StdRng) -> Statement {
    let ctor = CLASSES[rng.gen_range(0..CLASSES.len())];
    let mut stmt = ctor(rng.gen_range(0..=4095));

    if rng.gen_bool(0.7) {
        stmt = stmt.with_instance(random_side(rng, IdCategory::String));
    }

    let io_count = rng.gen_range(0..6);
    for _ in 0..io_count {
        let input = rng.gen_bool(0.5);
        let lhs_cat = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let lhs = random_side(rng, lhs_cat);
        if rng.gen_bool(0.6) {
            let rhs_cat = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            let rhs = random_side(rng, rhs_cat);
            stmt = if input {
                stmt.push_input(lhs, lhs_cat, rhs, rhs_cat)
            } else {
                stmt.push_output(lhs, lhs_cat, rhs, rhs_cat)
            };
        } else {
            stmt = if input {
                stmt.push_bare_input(lhs, lhs_cat)
            } else {
                stmt.push_bare_output(lhs, lhs_cat)
            };
        }
    }

    let attr_count = rng.gen_range(0..3);
    for _ in 0..attr_count {
        let name = random_side(rng, IdCategory::String);
        let value = random_side(rng, IdCategory::String);
        stmt = stmt.push_attr(name, value);
    }

    stmt
}

fn run(args: HifRandArgs) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let config = SessionConfig::new(DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION);
    let mut writer = Writer::create(&args.directory, config)?;

    for _ in 0..args.statements {
        let stmt = random_statement(&mut rng);
        writer.add(&stmt)?;
    }

    writer.release()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let args = HifRandArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("hif_rand: {e}");
        std::process::exit(1);
    }
}
