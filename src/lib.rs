//! HIF — Hardware Interchange Format binary statement-stream codec.
//!
//! A HIF document is a directory of paired `<N>.st` (statement) /
//! `<N>.id` (identifier table) chunk files. See the module docs of
//! `codec`, `ident`, and `session` for the on-wire details.

pub mod cli;
pub mod codec;
pub mod dump;
pub mod error;
pub mod ident;
pub mod legacy;
pub mod session;
pub mod sink;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level error type. Equivalent in role to the original's bare
/// `bool`-returning failure convention throughout `hif_base.hpp`.
pub use error::{Error, FormatError, Result};

/// Append-only buffered byte sink. Equivalent to `File_write`.
pub use sink::ByteSink;

/// The data model: categories, classes, tuple entries, statements.
/// Equivalent to `Hif_base`'s `ID_cat` / `Statement_class` /
/// `Tuple_entry` / `Statement`.
pub use codec::types::{IdCategory, Statement, StatementClass, TupleEntry};

/// Encode/decode one statement. Equivalent to `Hif_write::append` /
/// the decode loop `Hif_read::each` was meant to run.
pub use codec::statement::{decode_statement, encode_statement};

/// Writer-side identifier interner and reader-side resolver. Equivalent
/// to `Hif_write::append_declare` and `Hif_read::read_idfile`.
pub use ident::{IdLookup, Interner, Resolver};

/// Writer-side and reader-side session handles over a chunk directory.
/// Equivalent to `Hif_write::open`/`append` and `Hif_read::open`/`each`.
pub use session::{Reader, SessionConfig, Writer};

/// Render a statement in the (unstable) textual dump grammar `hif_cat`
/// prints. Equivalent to `Hif_base::Statement::dump()`.
pub use dump::write_statement;
