//! Session reader (spec.md §4.4 "Reader"). Opens a directory, validates
//! chunk pairing, memory-maps each chunk's `.id` then `.st` file, parses
//! the mandatory header, and exposes two equivalent iteration APIs.
//!
//! Generalizes `Hif_read::open`/`each` (`hif_read.cpp`), whose `each`
//! loop in the original source never actually advances `pos` or decodes
//! anything (`while(pos < base.size()) { Statement stmt; fn(stmt); }` —
//! an infinite loop over a default-constructed `Statement`). This port
//! replaces that with the real statement-by-statement decode described
//! in spec.md §4.3.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::codec::statement::decode_statement;
use crate::codec::types::Statement;
use crate::error::{Error, FormatError, Result};
use crate::ident::{IdLookup, Resolver};
use crate::session::chunk::discover_chunks;
use crate::session::config::HIF_VERSION;

/// Reader state machine per chunk (spec.md §4.4): `Unopened →
/// HeaderParsed → Iterating → Drained → Closed`. Transitions on error
/// jump to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    Unopened,
    HeaderParsed,
    Iterating,
    Drained,
    Closed,
}

struct Chunk {
    #[allow(dead_code)]
    st_mmap: Mmap,
    resolver: Resolver<Mmap>,
    /// Byte offset of the next statement to decode, within `st_mmap`.
    cursor: usize,
    state: ChunkState,
}

/// Reader-side session over a directory of one or more chunks.
pub struct Reader {
    dir: PathBuf,
    chunks: Vec<Chunk>,
    chunk_idx: usize,
    header: Statement,
    current: Option<Statement>,
}

impl Reader {
    /// Open `dir`, validate pairing, mmap every chunk, and parse the
    /// header statement of the first chunk. Mirrors `Hif_read::open`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        log::debug!("hif::session::Reader: opening {}", dir.display());
        let pairs = discover_chunks(&dir)?;
        if pairs.is_empty() {
            return Err(Error::Directory(format!(
                "{} contains no chunk files",
                dir.display()
            )));
        }

        let mut chunks = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            // SAFETY: the session model assumes exclusive writer ownership
            // for the duration of a writing session (spec.md §1); readers
            // only open a directory once no writer is concurrently
            // mutating it.
            let id_file = File::open(&pair.id_path)?;
            let id_mmap = unsafe { Mmap::map(&id_file)? };
            let resolver = Resolver::build(id_mmap)
                .map_err(|e| annotate_format_error(&pair.stem, e))?;

            let st_file = File::open(&pair.st_path)?;
            let st_mmap = unsafe { Mmap::map(&st_file)? };

            chunks.push(Chunk {
                st_mmap,
                resolver,
                cursor: 0,
                state: ChunkState::Unopened,
            });
        }

        let mut reader = Self {
            dir,
            chunks,
            chunk_idx: 0,
            header: Statement::new(crate::codec::types::StatementClass::Attr),
            current: None,
        };

        reader.parse_header()?;
        Ok(reader)
    }

    fn parse_header(&mut self) -> Result<()> {
        let chunk = &mut self.chunks[0];
        let (stmt, consumed) = decode_statement(&chunk.st_mmap, 0, &chunk.resolver).map_err(|e| {
            chunk.state = ChunkState::Closed;
            e
        })?;
        chunk.cursor = consumed;

        validate_header(&stmt)?;
        chunk.state = ChunkState::HeaderParsed;
        self.header = stmt;
        Ok(())
    }

    /// The mandatory first statement (`HIF`/`tool`/`version` attributes).
    pub fn header(&self) -> &Statement {
        &self.header
    }

    /// Pull-driven iteration: advance to the next statement, returning
    /// `true` if one was produced. Mirrors the reader's second iteration
    /// API from spec.md §4.4.
    pub fn next_statement(&mut self) -> Result<bool> {
        loop {
            if self.chunk_idx >= self.chunks.len() {
                self.current = None;
                return Ok(false);
            }
            let chunk = &mut self.chunks[self.chunk_idx];
            if chunk.cursor >= chunk.st_mmap.len() {
                chunk.state = ChunkState::Drained;
                self.chunk_idx += 1;
                continue;
            }
            chunk.state = ChunkState::Iterating;
            match decode_statement(&chunk.st_mmap, chunk.cursor, &chunk.resolver) {
                Ok((stmt, consumed)) => {
                    chunk.cursor += consumed;
                    self.current = Some(stmt);
                    return Ok(true);
                }
                Err(e) => {
                    chunk.state = ChunkState::Closed;
                    self.current = None;
                    return Err(e);
                }
            }
        }
    }

    /// The statement most recently produced by [`Reader::next_statement`].
    pub fn current(&self) -> Option<&Statement> {
        self.current.as_ref()
    }

    /// Callback-driven iteration: invoke `consumer` once per remaining
    /// statement, in order. Per spec.md §7, a per-statement decoding
    /// error terminates iteration — statements already delivered to
    /// `consumer` remain valid.
    pub fn each(&mut self, mut consumer: impl FnMut(&Statement)) -> Result<()> {
        while self.next_statement()? {
            if let Some(stmt) = self.current.take() {
                consumer(&stmt);
                self.current = Some(stmt);
            }
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn annotate_format_error(stem: &str, e: FormatError) -> Error {
    log::error!("hif::session::Reader: chunk {stem}: {e}");
    Error::Format(e)
}

/// Validate the mandatory header statement (spec.md §4.3 "Header-
/// statement (first statement)"): class `Attr`, exactly three attributes
/// `("HIF", version)`, `("tool", T)`, `("version", V)` in order, with a
/// supported `HIF` version.
fn validate_header(stmt: &Statement) -> Result<()> {
    use crate::codec::types::StatementClass;

    if stmt.sclass != StatementClass::Attr {
        return Err(FormatError::BadHeader(format!(
            "first statement has class {:?}, expected Attr",
            stmt.sclass
        ))
        .into());
    }
    if stmt.attr.len() != 3 {
        return Err(FormatError::BadHeader(format!(
            "first statement has {} attributes, expected exactly 3",
            stmt.attr.len()
        ))
        .into());
    }
    let names: Vec<&[u8]> = stmt.attr.iter().map(|e| e.lhs.as_slice()).collect();
    if names != [b"HIF".as_slice(), b"tool".as_slice(), b"version".as_slice()] {
        return Err(FormatError::BadHeader(
            "header attributes must be (HIF, tool, version) in that order".to_string(),
        )
        .into());
    }
    let version = &stmt.attr[0].rhs;
    if version != HIF_VERSION.as_bytes() {
        return Err(FormatError::BadHeader(format!(
            "unsupported HIF version {:?}, expected {HIF_VERSION:?}",
            String::from_utf8_lossy(version)
        ))
        .into());
    }
    Ok(())
}
