//! Reader-side identifier resolver (spec.md §4.2 "Reader-side resolver").
//!
//! Scans an entire `.id` file once, decoding records sequentially into a
//! dense array that mirrors the writer's index assignment. [`Resolver`]
//! is generic over its backing storage (`Vec<u8>` for in-memory tests and
//! fixtures, `memmap2::Mmap` for the real reader) so it can own the bytes
//! it indexes into rather than borrowing them — avoiding a
//! self-referential struct between the resolver and the mmap that owns
//! the session reader's chunk.
//!
//! `Interner::intern` (`ident::writer`) skips array position
//! [`RESERVED_TERMINATOR_INDEX`] (31) in *index space* without emitting a
//! `.id` record for it, so the `.id` file itself has no record for
//! position 31 whenever a chunk interns 32 or more distinct identifiers.
//! `Resolver::build` mirrors that same skip while assigning array
//! positions to scanned records, so position 31 is reserved as a
//! [`Entry::Reserved`] placeholder and the first record scanned after it
//! lands at position 32 — keeping the reader's array indexed exactly the
//! way the writer's `next_index` counted.

use crate::codec::reference::RESERVED_TERMINATOR_INDEX;
use crate::codec::types::IdCategory;
use crate::error::FormatError;
use crate::ident::record::read_record;

/// One slot of the reader's positional array: either a real identifier
/// record, or the placeholder reserving position 31 (spec.md §4.2, §9) so
/// later positions stay aligned with the writer's index space.
enum Entry {
    Real { category: IdCategory, start: usize, end: usize },
    Reserved,
}

/// Anything `Resolver` can index into: an owned `Vec<u8>`, a borrowed
/// `&[u8]`, or a memory-mapped file.
pub trait IdLookup {
    fn lookup(&self, index: u32) -> Result<(IdCategory, &[u8]), FormatError>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered array of `(category, bytes)` identifiers, indexed by the same
/// dense index the writer's interner assigned, backed by `B`.
pub struct Resolver<B> {
    backing: B,
    entries: Vec<Entry>,
}

impl<B: AsRef<[u8]>> Resolver<B> {
    /// Scan `backing` (the full contents of a `.id` chunk file) and build
    /// the positional array. Port of `Hif_read::read_idfile`.
    pub fn build(backing: B) -> Result<Self, FormatError> {
        let mut entries = Vec::new();
        let buf = backing.as_ref();
        let mut pos = 0usize;
        while pos < buf.len() {
            // The writer's interner skips assigning this array position to
            // a real identifier (see module doc comment); reserve it here
            // too, before consuming the record that the writer actually
            // placed at the next position.
            if entries.len() == RESERVED_TERMINATOR_INDEX as usize {
                entries.push(Entry::Reserved);
            }
            let (category, payload, consumed) = read_record(buf, pos)?;
            let start = pos + (consumed - payload.len());
            entries.push(Entry::Real {
                category,
                start,
                end: start + payload.len(),
            });
            pos += consumed;
        }
        Ok(Self { backing, entries })
    }
}

impl<B: AsRef<[u8]>> IdLookup for Resolver<B> {
    fn lookup(&self, index: u32) -> Result<(IdCategory, &[u8]), FormatError> {
        let entry = self
            .entries
            .get(index as usize)
            .ok_or(FormatError::ReferenceOutOfRange {
                index,
                table_len: self.entries.len(),
            })?;
        match entry {
            Entry::Real { category, start, end } => Ok((*category, &self.backing.as_ref()[*start..*end])),
            Entry::Reserved => Err(FormatError::ReservedIndexReferenced(index)),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
