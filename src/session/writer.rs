//! Session writer (spec.md §4.4 "Writer"). Owns one chunk's `.st`/`.id`
//! byte sinks and identifier interner, writes the mandatory header
//! statement on creation, and exposes `add` as the only per-statement
//! operation. Generalizes `Hif_write::open`/`append` (`hif_write.cpp`).

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::codec::statement::encode_statement;
use crate::codec::types::{assert_statement_preconditions, Statement};
use crate::error::{Error, Result};
use crate::ident::Interner;
use crate::session::chunk::{chunk_path, prepare_directory};
use crate::session::config::{SessionConfig, HIF_VERSION};
use crate::sink::ByteSink;

/// Writer-side session. Single chunk (`0.st`/`0.id`) in this
/// implementation — see [`Writer::add`] for the chunk-rotation boundary
/// behavior.
pub struct Writer {
    dir: PathBuf,
    config: SessionConfig,
    chunk_index: u64,
    st_sink: ByteSink,
    id_sink: ByteSink,
    interner: Interner,
}

impl Writer {
    /// Create (or clean and reuse) `dir` and write the mandatory header
    /// statement. Mirrors `Hif_write::open` + the header write that
    /// spec.md §4.3/§4.4 require before any user statement.
    pub fn create(dir: impl AsRef<Path>, config: SessionConfig) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        log::debug!("hif::session::Writer: opening {}", dir.display());
        prepare_directory(&dir, config.dir_mode)?;

        let st_path = chunk_path(&dir, 0, "st");
        let id_path = chunk_path(&dir, 0, "id");
        let st_sink = ByteSink::new(File::create(&st_path)?);
        let id_sink = ByteSink::new(File::create(&id_path)?);

        let mut writer = Self {
            dir,
            config,
            chunk_index: 0,
            st_sink,
            id_sink,
            interner: Interner::new(),
        };

        let header = Statement::attr(0)
            .push_attr("HIF", HIF_VERSION)
            .push_attr("tool", writer.config.tool.clone())
            .push_attr("version", writer.config.tool_version.clone());
        assert_statement_preconditions(&header);
        encode_statement(&mut writer.st_sink, &mut writer.id_sink, &mut writer.interner, &header)?;

        Ok(writer)
    }

    /// Append one statement. Precondition violations (`type > 4095`, an
    /// empty attribute `lhs`) panic per spec.md §7; `add` itself is
    /// otherwise infallible except for I/O errors from the byte sinks and
    /// the chunk-capacity limit below.
    ///
    /// Chunk rotation (spec.md §4.4, §9): before encoding, this estimates
    /// the identifier table size after accounting for the new statement's
    /// tuple entries (`interner.len() + 2 * (io.len() + attr.len())`,
    /// spec.md's own estimate formula) against `config.rotation_threshold`.
    /// Rotation itself (starting `1.st`/`1.id` with a fresh interner) is
    /// not implemented — per the source's own incomplete, assertion-
    /// guarded rotation path — so crossing the threshold is treated as a
    /// hard session-size limit: `add` returns `Error::CapacityExceeded`
    /// rather than silently continuing past it.
    pub fn add(&mut self, stmt: &Statement) -> Result<()> {
        assert_statement_preconditions(stmt);

        let estimate = self.interner.len() + 2 * (stmt.io.len() + stmt.attr.len());
        if estimate > self.config.rotation_threshold {
            log::warn!(
                "hif::session::Writer: chunk {} would exceed rotation threshold ({} > {}); \
                 rotation is not implemented, refusing to add statement",
                self.chunk_index,
                estimate,
                self.config.rotation_threshold
            );
            return Err(Error::CapacityExceeded(format!(
                "identifier table would grow to ~{estimate} entries, exceeding the configured \
                 threshold of {} and chunk rotation is unimplemented",
                self.config.rotation_threshold
            )));
        }

        encode_statement(&mut self.st_sink, &mut self.id_sink, &mut self.interner, stmt)
    }

    /// Number of distinct identifiers interned in the current chunk.
    pub fn identifier_count(&self) -> usize {
        self.interner.len()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Drain both sinks, surfacing any I/O error. `Drop` best-effort
    /// flushes if this is never called, but cannot propagate a `Result`
    /// (spec.md §5: "writer's buffered sinks MUST be drained before file
    /// close; failure to do so is a defect").
    pub fn release(mut self) -> Result<()> {
        log::debug!("hif::session::Writer: releasing {}", self.dir.display());
        self.st_sink.drain()?;
        self.id_sink.drain()?;
        Ok(())
    }
}
