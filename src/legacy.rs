//! Legacy textual front-end stub, port of `Hif::input` (`hif.hpp`/`hif.cpp`).
//!
//! The original `Hif::input(std::string_view text)` reads a hand-rolled
//! textual grammar (`node <instance> { ... }`-style blocks) and is meant
//! to build the same `Statement` stream the binary codec produces, but
//! the body is unfinished: the tokenizer only recognizes a handful of
//! keywords and `input` returns before ever constructing a `Statement`
//! for anything past the first `node` header. Per SPEC_FULL.md §9's
//! decision, this crate does not complete that grammar — the textual
//! front-end is out of scope for the binary container this crate
//! implements — and keeps the entry point only so callers migrating off
//! the original tool have somewhere to land with a clear error instead
//! of a missing symbol.

use crate::error::{Error, FormatError};

/// Always fails. The original textual grammar this mirrors never reached
/// a complete state; reimplementing guesswork around an unfinished
/// parser would invent behavior this crate cannot ground in anything.
pub fn input(_text: &str) -> Result<(), Error> {
    Err(Error::Format(FormatError::BadHeader(
        "legacy textual input grammar is not implemented; write statements through \
         hif::session::Writer instead"
            .to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_always_errors() {
        assert!(input("node foo {}").is_err());
    }
}
