//! Shared CLI string constants, analogous to the teacher's
//! `cli::constants` (`COMPRESSOR_NAME`, `AUTHOR`, `LZ4_EXTENSION`, ...).

pub const AUTHOR: &str = "masc-ucsc";

/// Default `tool` header-statement attribute for sessions written by
/// `hif_rand` when the caller doesn't override it.
pub const DEFAULT_TOOL_NAME: &str = "hif_rand";

/// Default `version` header-statement attribute for `hif_rand`-written
/// sessions: this crate's own package version, not the HIF format
/// version (which is fixed at [`crate::session::config::HIF_VERSION`]).
pub const DEFAULT_TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
