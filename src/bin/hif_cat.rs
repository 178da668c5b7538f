//! `hif_cat` — print every statement of a session directory in the
//! textual dump grammar (spec.md §6's contractual tool). Entry-point
//! style mirrors the teacher's `main.rs`: parse args, dispatch, map
//! errors to a process exit code via `anyhow`.

use std::io::{self, Write};

use clap::Parser;
use hif::cli::args::HifCatArgs;
use hif::session::Reader;

fn run(args: HifCatArgs) -> anyhow::Result<()> {
    let mut reader = Reader::open(&args.directory)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    hif::dump::write_statement(&mut out, reader.header())?;
    while reader.next_statement()? {
        if let Some(stmt) = reader.current() {
            hif::dump::write_statement(&mut out, stmt)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = HifCatArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("hif_cat: {e}");
        std::process::exit(1);
    }
}
