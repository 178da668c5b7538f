//! Writer-side identifier interner (spec.md §4.2 "Writer-side interner").
//!
//! Maps a `(category, bytes)` key to a monotonically assigned dense index,
//! emitting a record into the `.id` sink on first insertion. Generalizes
//! `Hif_write::append_declare` (`hif_write.cpp`): the original keys its
//! `unordered_map` on a pointer-stable `dvector` slot guarded by a custom
//! hash (`waterhash`) and a ring-buffer eviction scheme capped at
//! `20 * 1024 * 1024` slots; per spec.md §9's "Stable pointers for interned
//! strings" design note, this port takes the simpler of the two options
//! the note allows — copy the bytes into the map's own storage (a
//! `HashMap<(IdCategory, Vec<u8>), u32>`) rather than reproduce the
//! original's pointer-stability workaround.

use std::collections::HashMap;

use crate::codec::reference::RESERVED_TERMINATOR_INDEX;
use crate::codec::types::IdCategory;
use crate::error::Result;
use crate::ident::record::write_record;
use crate::sink::ByteSink;

/// Writer-side interner. One instance per session chunk (§4.4: a fresh
/// table accompanies each chunk rotation).
pub struct Interner {
    table: HashMap<(IdCategory, Vec<u8>), u32>,
    next_index: u32,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            next_index: 0,
        }
    }

    /// Number of distinct `(category, bytes)` pairs interned so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Intern `(category, bytes)`, returning its dense index. Emits an
    /// identifier record into `id_sink` on first occurrence; subsequent
    /// calls with the same key are a cheap map lookup and write nothing.
    ///
    /// Never assigns [`RESERVED_TERMINATOR_INDEX`] (31) — that index is
    /// skipped so `0xFF` unambiguously means "terminator", never "a
    /// reference to a real identifier" (spec.md §4.2, §9). No `.id`
    /// record is emitted for the skipped position; `ident::reader::
    /// Resolver::build` must reserve the matching array slot instead of
    /// packing scanned records back-to-back, or every index at or past
    /// 32 would resolve to the wrong record.
    pub fn intern(&mut self, id_sink: &mut ByteSink, category: IdCategory, bytes: &[u8]) -> Result<u32> {
        let key = (category, bytes.to_vec());
        if let Some(&index) = self.table.get(&key) {
            return Ok(index);
        }

        if self.next_index == RESERVED_TERMINATOR_INDEX {
            self.next_index += 1;
        }
        let index = self.next_index;
        assert!(
            index <= crate::codec::reference::MAX_REFERENCE_INDEX,
            "hif: identifier table exceeded the 21-bit reference width ({index} entries)"
        );

        write_record(id_sink, category, bytes)?;

        self.table.insert(key, index);
        self.next_index += 1;
        Ok(index)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
