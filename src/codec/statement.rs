//! Statement encode/decode (spec.md §4.3 "Statement codec" — the
//! paper-worthy ≈55% of the core). Ties the reference-word encoding
//! (`codec::reference`) to the identifier table (`ident::writer::Interner`
//! on write, `ident::reader::Resolver` on read) to produce/consume one
//! complete on-wire statement: header, optional instance, io-list,
//! attr-list.
//!
//! The original `Hif_write::append` (`hif_write.cpp:99-134`) implements
//! the header and terminator bytes but leaves `append_entry` — the part
//! that actually encodes a `Tuple_entry` as references — as an empty stub
//! (`void Hif_write::append_entry(const Hif_base::Tuple_entry &ent) {}`).
//! This port completes that stub per spec.md §4.3's reference encoding
//! and tuple-entry-list termination rules, which is the core design work
//! this crate contributes relative to the original tree.

use crate::codec::reference::{decode_reference, encode_reference, encode_terminator, DecodedRef, Role};
use crate::codec::types::{IdCategory, Statement, StatementClass, TupleEntry};
use crate::error::{FormatError, Result};
use crate::ident::{IdLookup, Interner};
use crate::sink::ByteSink;

/// Encode one statement into `sink`, interning any new identifiers into
/// `id_sink` via `interner` as a side effect. Mirrors `Hif_write::append`.
pub fn encode_statement(
    sink: &mut ByteSink,
    id_sink: &mut ByteSink,
    interner: &mut Interner,
    stmt: &Statement,
) -> Result<()> {
    let byte0 = (stmt.r#type as u8 & 0x0F) | (stmt.sclass.tag() << 4);
    let byte1 = (stmt.r#type >> 4) as u8;
    sink.add8(byte0)?;
    sink.add8(byte1)?;

    match &stmt.instance {
        None => sink.add8(crate::codec::reference::TERMINATOR_BYTE)?,
        Some(instance) => {
            let index = interner.intern(id_sink, IdCategory::String, instance)?;
            encode_reference(sink, Role::terminal(true), index)?;
        }
    }

    encode_tuple_entries(sink, id_sink, interner, &stmt.io)?;
    encode_tuple_entries(sink, id_sink, interner, &stmt.attr)?;
    Ok(())
}

fn encode_tuple_entries(
    sink: &mut ByteSink,
    id_sink: &mut ByteSink,
    interner: &mut Interner,
    entries: &[TupleEntry],
) -> Result<()> {
    for entry in entries {
        let lhs_index = interner.intern(id_sink, entry.lhs_cat, &entry.lhs)?;
        if entry.rhs.is_empty() {
            encode_reference(sink, Role::terminal(entry.input), lhs_index)?;
        } else {
            encode_reference(sink, Role::non_terminal(entry.input), lhs_index)?;
            let rhs_index = interner.intern(id_sink, entry.rhs_cat, &entry.rhs)?;
            encode_reference(sink, Role::terminal(entry.input), rhs_index)?;
        }
    }
    encode_terminator(sink)
}

/// Decode one statement starting at `buf[pos]`, resolving identifier
/// references through `resolver`. Returns the statement and the number of
/// bytes consumed.
pub fn decode_statement(buf: &[u8], pos: usize, resolver: &impl IdLookup) -> Result<(Statement, usize)> {
    let start = pos;
    let byte0 = *buf.get(pos).ok_or(FormatError::TruncatedStatement)?;
    let byte1 = *buf.get(pos + 1).ok_or(FormatError::TruncatedStatement)?;
    let mut pos = pos + 2;

    let sclass = StatementClass::from_tag(byte0 >> 4)?;
    let r#type = ((byte0 & 0x0F) as u16) | ((byte1 as u16) << 4);

    let (instance_ref, consumed) = decode_reference(buf, pos)?;
    pos += consumed;
    let instance = match instance_ref {
        None => None,
        Some(DecodedRef { index, .. }) => Some(resolver.lookup(index)?.1.to_vec()),
    };

    let io = decode_tuple_entries(buf, &mut pos, resolver)?;
    let attr = decode_tuple_entries(buf, &mut pos, resolver)?;

    Ok((
        Statement {
            sclass,
            r#type,
            instance,
            io,
            attr,
        },
        pos - start,
    ))
}

fn decode_tuple_entries(buf: &[u8], pos: &mut usize, resolver: &impl IdLookup) -> Result<Vec<TupleEntry>> {
    let mut entries = Vec::new();
    let mut pending: Option<DecodedRef> = None;

    loop {
        let (decoded, consumed) = decode_reference(buf, *pos)?;
        *pos += consumed;

        match decoded {
            None => {
                if pending.is_some() {
                    return Err(FormatError::UnbalancedPair.into());
                }
                break;
            }
            Some(r) if !r.role.last => {
                if pending.is_some() {
                    return Err(FormatError::DanglingNonTerminal.into());
                }
                pending = Some(r);
            }
            Some(r) => {
                if let Some(prev) = pending.take() {
                    let (lhs_cat, lhs) = resolver.lookup(prev.index)?;
                    let (rhs_cat, rhs) = resolver.lookup(r.index)?;
                    entries.push(TupleEntry {
                        input: prev.role.input,
                        lhs: lhs.to_vec(),
                        lhs_cat,
                        rhs: rhs.to_vec(),
                        rhs_cat,
                    });
                } else {
                    let (lhs_cat, lhs) = resolver.lookup(r.index)?;
                    entries.push(TupleEntry {
                        input: r.role.input,
                        lhs: lhs.to_vec(),
                        lhs_cat,
                        rhs: Vec::new(),
                        rhs_cat: IdCategory::String,
                    });
                }
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::types::assert_statement_preconditions;
    use crate::ident::Resolver;
    use std::fs::File;

    fn encode_one(stmt: &Statement) -> (Vec<u8>, Vec<u8>) {
        let dir = tempfile::tempdir().unwrap();
        let st_path = dir.path().join("0.st");
        let id_path = dir.path().join("0.id");
        let mut sink = ByteSink::new(File::create(&st_path).unwrap());
        let mut id_sink = ByteSink::new(File::create(&id_path).unwrap());
        let mut interner = Interner::new();
        assert_statement_preconditions(stmt);
        encode_statement(&mut sink, &mut id_sink, &mut interner, stmt).unwrap();
        sink.release().unwrap();
        id_sink.release().unwrap();
        (std::fs::read(&st_path).unwrap(), std::fs::read(&id_path).unwrap())
    }

    #[test]
    fn trivial_assign_round_trips() {
        let stmt = Statement::assign(0)
            .with_instance("jojojo")
            .push_input("A", IdCategory::String, "0", IdCategory::String)
            .push_input("A", IdCategory::String, "1", IdCategory::String)
            .push_input("A", IdCategory::String, "2", IdCategory::String)
            .push_input("A", IdCategory::String, "3", IdCategory::String)
            .push_bare_output("Z", IdCategory::String)
            .push_attr("loc", "3");

        let (st_buf, id_buf) = encode_one(&stmt);
        let resolver = Resolver::build(&id_buf).unwrap();
        let (decoded, consumed) = decode_statement(&st_buf, 0, &resolver).unwrap();
        assert_eq!(consumed, st_buf.len());
        assert_eq!(decoded, stmt);
    }

    #[test]
    fn all_classes_round_trip() {
        let ctors: Vec<fn(u16) -> Statement> = vec![
            Statement::node,
            Statement::assign,
            Statement::attr,
            Statement::open_call,
            Statement::closed_call,
            Statement::open_def,
            Statement::closed_def,
            Statement::end,
            Statement::use_stmt,
        ];
        for ctor in ctors {
            let stmt = ctor(1).with_instance("inst");
            let (st_buf, id_buf) = encode_one(&stmt);
            let resolver = Resolver::build(&id_buf).unwrap();
            let (decoded, _) = decode_statement(&st_buf, 0, &resolver).unwrap();
            assert_eq!(decoded.sclass, stmt.sclass);
        }
    }

    #[test]
    fn empty_rhs_attribute_round_trips_as_empty_string() {
        let stmt = Statement::attr(0).push_attr("name", "");
        let (st_buf, id_buf) = encode_one(&stmt);
        let resolver = Resolver::build(&id_buf).unwrap();
        let (decoded, _) = decode_statement(&st_buf, 0, &resolver).unwrap();
        assert_eq!(decoded.attr[0].lhs, b"name");
        assert_eq!(decoded.attr[0].rhs, b"");
        assert_eq!(decoded.attr[0].rhs_cat, IdCategory::String);
    }

    #[test]
    fn large_statement_uses_long_form_references() {
        let mut stmt = Statement::assign(1);
        for i in 0..1024u32 {
            let lhs = format!("in{i}").into_bytes();
            stmt = stmt.push_bare_input(lhs, IdCategory::String);
        }
        for i in 0..1024u32 {
            let lhs = format!("out{i}").into_bytes();
            stmt = stmt.push_bare_output(lhs, IdCategory::String);
        }
        let (st_buf, id_buf) = encode_one(&stmt);
        let resolver = Resolver::build(&id_buf).unwrap();
        assert!(resolver.len() >= 2048);
        let (decoded, consumed) = decode_statement(&st_buf, 0, &resolver).unwrap();
        assert_eq!(consumed, st_buf.len());
        assert_eq!(decoded, stmt);
    }

    #[test]
    fn base2_category_round_trips_raw_bytes() {
        let mut stmt = Statement::node(2);
        for i in 0..16i64 {
            let raw = i.to_le_bytes();
            stmt = stmt.push_input("v", IdCategory::String, raw.to_vec(), IdCategory::Base2);
        }
        let (st_buf, id_buf) = encode_one(&stmt);
        let resolver = Resolver::build(&id_buf).unwrap();
        let (decoded, _) = decode_statement(&st_buf, 0, &resolver).unwrap();
        for (orig, got) in stmt.io.iter().zip(decoded.io.iter()) {
            assert_eq!(orig.rhs_cat, got.rhs_cat);
            assert_eq!(orig.rhs, got.rhs);
        }
    }

    #[test]
    fn unbalanced_pending_pair_is_an_error() {
        // Hand-crafted stream: header + a non-terminal reference + sentinel
        // with no terminal in between.
        let dir = tempfile::tempdir().unwrap();
        let id_path = dir.path().join("0.id");
        let mut id_sink = ByteSink::new(File::create(&id_path).unwrap());
        let mut interner = Interner::new();
        let idx = interner.intern(&mut id_sink, IdCategory::String, b"x").unwrap();
        id_sink.release().unwrap();
        let id_buf = std::fs::read(&id_path).unwrap();
        let resolver = Resolver::build(&id_buf).unwrap();

        let mut buf = vec![0x20u8, 0x00]; // header: class=Attr(2)<<4, type=0
        buf.push(0xFF); // no instance
        let non_terminal_byte = 1u8 | (0 << 1) | ((idx as u8) << 3); // ee=0 non-terminal input
        buf.push(non_terminal_byte);
        buf.push(0xFF); // sentinel while pending

        let err = decode_statement(&buf, 0, &resolver).unwrap_err();
        match err {
            crate::error::Error::Format(FormatError::UnbalancedPair) => {}
            other => panic!("expected UnbalancedPair, got {other:?}"),
        }
    }
}
