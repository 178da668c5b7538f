//! On-disk identifier-record encoding (spec.md §4.2 "Identifier record
//! encoding (on disk)"). One record per distinct `(category, bytes)` pair,
//! appended to the `.id` chunk file in first-intern order.
//!
//! This generalizes the original `Hif_write::append_declare`
//! (`hif_write.cpp`), which only emits a 1-byte-small/3-byte-large header
//! (8-bit or 24-bit length, no category-agnostic short/long split) ahead
//! of a `Declare_class` tag. spec.md's redesigned layout instead packs the
//! category tag into the low 3 bits and trades the original's byte-length
//! field for a 4/20-bit split so that most short identifiers (types,
//! small literals) cost a single header byte.

use crate::codec::types::IdCategory;
use crate::error::FormatError;
use crate::sink::ByteSink;

/// Maximum payload length representable by the short-form (4-bit) header.
pub const SHORT_FORM_MAX_LEN: usize = 0b1111;

/// Maximum payload length representable by the long-form (20-bit) header.
pub const LONG_FORM_MAX_LEN: usize = (1 << 20) - 1;

/// Append one identifier record: `category`-tagged, length-prefixed
/// `bytes`. Chooses the short (1-byte header) form whenever the payload
/// fits, per §4.2's tie-break rule ("the short form must be used whenever
/// the length is representable in it").
pub fn write_record(sink: &mut ByteSink, category: IdCategory, bytes: &[u8]) -> crate::error::Result<()> {
    let len = bytes.len();
    assert!(
        len <= LONG_FORM_MAX_LEN,
        "hif: identifier payload length {len} exceeds the 20-bit record length field"
    );
    let cat = category.tag();
    if len <= SHORT_FORM_MAX_LEN {
        let byte0 = cat | 0b1000 | ((len as u8) << 4);
        sink.add8(byte0)?;
    } else {
        let low_nibble = (len & 0xF) as u8;
        let byte0 = cat | (low_nibble << 4);
        let high16 = (len >> 4) as u16;
        sink.add8(byte0)?;
        sink.add16(high16)?;
    }
    sink.add(bytes)
}

/// Decode one identifier record starting at `buf[pos]`. Returns the
/// record's category, its payload slice (borrowed from `buf`, matching
/// the reader-side's mmap-resident storage model), and the total number
/// of bytes consumed (header + payload).
pub fn read_record(buf: &[u8], pos: usize) -> Result<(IdCategory, &[u8], usize), FormatError> {
    let byte0 = *buf.get(pos).ok_or(FormatError::TruncatedIdentifierRecord)?;
    let category = IdCategory::from_tag(byte0 & 0b111)?;
    let short_form = byte0 & 0b1000 != 0;
    let (len, header_len) = if short_form {
        ((byte0 >> 4) as usize, 1usize)
    } else {
        let low_nibble = (byte0 >> 4) as usize;
        let b1 = *buf.get(pos + 1).ok_or(FormatError::TruncatedIdentifierRecord)?;
        let b2 = *buf.get(pos + 2).ok_or(FormatError::TruncatedIdentifierRecord)?;
        let high16 = u16::from_le_bytes([b1, b2]) as usize;
        (low_nibble | (high16 << 4), 3usize)
    };
    let payload_start = pos + header_len;
    let payload_end = payload_start
        .checked_add(len)
        .ok_or(FormatError::TruncatedIdentifierRecord)?;
    let payload = buf
        .get(payload_start..payload_end)
        .ok_or(FormatError::TruncatedIdentifierRecord)?;
    Ok((category, payload, header_len + len))
}
