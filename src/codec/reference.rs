//! Reference-word encoding: the 1- or 3-byte encoded pointer into the
//! identifier table that carries the 2-bit role field `ee` (spec.md §4.3
//! "Reference encoding").
//!
//! This is new relative to the original C++ source — `hif_write.cpp`'s
//! `append_entry` is an unimplemented stub (`{}`) and `hif_read.cpp`'s
//! statement loop never reads anything, so the bit layout here follows
//! spec.md's description directly rather than a concrete original
//! implementation; SPEC_FULL.md §9 records the two bit-layout open
//! questions (role-field variant, short-form shift) as resolved in favor
//! of the `(input, last)` / shift-by-5 variant, per spec.md's own
//! direction.

use crate::error::FormatError;
use crate::sink::ByteSink;

/// Index value that can never be assigned to a real identifier (spec.md
/// §4.2, §9): the short-form byte `0xFF` decodes to `(small=1, ee=0b11,
/// p=0b11111)`, so index 31 is reserved as the tuple-entry-list and
/// instance-reference sentinel. `ident::writer::Interner` skips this
/// value in index space without emitting an `.id` record for it, and
/// `ident::reader::Resolver` reserves the matching array position so the
/// two sides' index spaces never drift apart.
pub const RESERVED_TERMINATOR_INDEX: u32 = 31;

/// Sentinel byte terminating an io-list, an attr-list, or signalling
/// "no instance" — `(small=1, ee=0b11, p=31)`.
pub const TERMINATOR_BYTE: u8 = 0xFF;

/// Largest index representable by the 3-byte long form: 5 low bits in the
/// header byte plus a 16-bit little-endian extension, `5 + 16 = 21` bits.
pub const MAX_REFERENCE_INDEX: u32 = (1 << 21) - 1;

/// Role pattern reserved for instance references — standalone, not part
/// of an io/attr pair. Spec.md leaves the exact `ee` value for instance
/// references unspecified ("role bits set to the designated 'instance'
/// pattern"); this crate always writes `Role::terminal(true)` (matching
/// a bare lhs-only tuple entry) and the reader ignores `ee` entirely when
/// decoding an instance reference, so the exact bit pattern is an
/// internal writer convention, not part of the stable wire contract.
pub const INSTANCE_EE: u8 = 0b10;

/// The 2-bit role field distinguishing input-vs-output and
/// non-terminal-vs-terminal reference roles (spec.md §4.3, GLOSSARY).
///
/// Bit layout of `ee` (as stored in header bits 1..2): bit0 (`ee & 1`) is
/// clear for an input-side reference and set for an output-side
/// reference; bit1 (`ee & 2`) is clear for a non-terminal (first-of-pair)
/// reference and set for a terminal (last, or bare/singleton) reference.
/// This reproduces exactly the four values spec.md enumerates:
/// `0b00` non-terminal/input, `0b01` non-terminal/output, `0b10`
/// terminal/input, `0b11` terminal/output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub input: bool,
    pub last: bool,
}

impl Role {
    pub fn new(input: bool, last: bool) -> Self {
        Self { input, last }
    }

    pub fn non_terminal(input: bool) -> Self {
        Self::new(input, false)
    }

    pub fn terminal(input: bool) -> Self {
        Self::new(input, true)
    }

    fn to_ee(self) -> u8 {
        let mut ee = 0u8;
        if !self.input {
            ee |= 0b01;
        }
        if self.last {
            ee |= 0b10;
        }
        ee
    }

    fn from_ee(ee: u8) -> Self {
        Self {
            input: ee & 0b01 == 0,
            last: ee & 0b10 != 0,
        }
    }
}

/// A decoded reference word: the role and the identifier-table index it
/// points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedRef {
    pub role: Role,
    pub index: u32,
}

/// Encode a reference to identifier-table index `index` with role `role`.
/// Chooses the short (1-byte) form whenever `index < 31`, matching the
/// short-form tie-break rule from §4.2's identifier-record encoding
/// ("the short form must be used whenever the length is representable in
/// it") applied analogously to reference words.
///
/// `index == RESERVED_TERMINATOR_INDEX` must never reach this function —
/// the identifier interner never assigns it (see `ident::writer`).
pub fn encode_reference(sink: &mut ByteSink, role: Role, index: u32) -> crate::error::Result<()> {
    debug_assert_ne!(index, RESERVED_TERMINATOR_INDEX, "index 31 is reserved");
    let ee = role.to_ee();
    if index < RESERVED_TERMINATOR_INDEX {
        let byte = 1u8 | (ee << 1) | ((index as u8) << 3);
        sink.add8(byte)
    } else {
        assert!(
            index <= MAX_REFERENCE_INDEX,
            "hif: identifier index {index} exceeds the 21-bit long-form reference width"
        );
        let low5 = (index & 0x1F) as u8;
        let byte0 = (ee << 1) | (low5 << 3);
        let high16 = (index >> 5) as u16;
        sink.add8(byte0)?;
        sink.add16(high16)
    }
}

/// Write the `0xFF` sentinel that terminates a tuple-entry list or marks
/// "no instance".
pub fn encode_terminator(sink: &mut ByteSink) -> crate::error::Result<()> {
    sink.add8(TERMINATOR_BYTE)
}

/// Decode one reference word (or recognize the terminator) starting at
/// `buf[pos]`. Returns `(None, 1)` for the terminator byte, or
/// `(Some(decoded), consumed)` for a real reference. Does not itself
/// validate `index` against the identifier table's length — that check
/// happens once the resolver is available (`ident::reader::Resolver`).
pub fn decode_reference(buf: &[u8], pos: usize) -> Result<(Option<DecodedRef>, usize), FormatError> {
    let b0 = *buf.get(pos).ok_or(FormatError::TruncatedStatement)?;
    if b0 == TERMINATOR_BYTE {
        return Ok((None, 1));
    }
    let small = b0 & 1 != 0;
    let ee = (b0 >> 1) & 0b11;
    let role = Role::from_ee(ee);
    if small {
        let index = (b0 >> 3) as u32;
        Ok((Some(DecodedRef { role, index }), 1))
    } else {
        let low5 = (b0 >> 3) as u32;
        let b1 = *buf.get(pos + 1).ok_or(FormatError::TruncatedStatement)?;
        let b2 = *buf.get(pos + 2).ok_or(FormatError::TruncatedStatement)?;
        let high16 = u16::from_le_bytes([b1, b2]) as u32;
        let index = low5 | (high16 << 5);
        Ok((Some(DecodedRef { role, index }), 3))
    }
}
