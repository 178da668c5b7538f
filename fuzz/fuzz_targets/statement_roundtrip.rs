#![no_main]
use libfuzzer_sys::fuzz_target;

use hif::codec::statement::{decode_statement, encode_statement};
use hif::{IdCategory, Interner, Resolver, Statement};

/// Build a `Statement` deterministically from arbitrary fuzzer bytes,
/// then round-trip it through the real encode/decode path. Any mismatch
/// or panic is a codec bug.
fn statement_from_bytes(data: &[u8]) -> Option<Statement> {
    if data.is_empty() {
        return None;
    }
    let classes: [fn(u16) -> Statement; 9] = [
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
    let categories = [
        IdCategory::String,
        IdCategory::Base2,
        IdCategory::Base3,
        IdCategory::Base4,
        IdCategory::Custom,
    ];

    let mut pos = 0usize;
    let mut next = || -> u8 {
        let b = data[pos % data.len()];
        pos += 1;
        b
    };

    let ctor = classes[(next() as usize) % classes.len()];
    let mut stmt = ctor(((next() as u16) << 4) & 0x0FFF);

    if next() % 2 == 0 {
        let len = 1 + (next() as usize % 8);
        let bytes: Vec<u8> = (0..len).map(|_| b'a' + (next() % 26)).collect();
        stmt = stmt.with_instance(bytes);
    }

    let entry_count = next() % 6;
    for _ in 0..entry_count {
        let input = next() % 2 == 0;
        let lhs_cat = categories[next() as usize % categories.len()];
        let lhs_len = 1 + (next() as usize % 6);
        let lhs: Vec<u8> = (0..lhs_len).map(|_| next()).collect();
        if next() % 2 == 0 {
            stmt = if input {
                stmt.push_bare_input(lhs, lhs_cat)
            } else {
                stmt.push_bare_output(lhs, lhs_cat)
            };
        } else {
            let rhs_cat = categories[next() as usize % categories.len()];
            let rhs_len = 1 + (next() as usize % 6);
            let rhs: Vec<u8> = (0..rhs_len).map(|_| next()).collect();
            stmt = if input {
                stmt.push_input(lhs, lhs_cat, rhs, rhs_cat)
            } else {
                stmt.push_output(lhs, lhs_cat, rhs, rhs_cat)
            };
        }
    }

    let attr_count = next() % 3;
    for _ in 0..attr_count {
        let len = 1 + (next() as usize % 6);
        let name: Vec<u8> = (0..len).map(|_| b'a' + (next() % 26)).collect();
        let vlen = next() as usize % 6;
        let value: Vec<u8> = (0..vlen).map(|_| next()).collect();
        stmt = stmt.push_attr(name, value);
    }

    Some(stmt)
}

fuzz_target!(|data: &[u8]| {
    let Some(stmt) = statement_from_bytes(data) else {
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let st_path = dir.path().join("0.st");
    let id_path = dir.path().join("0.id");
    let mut sink = hif::ByteSink::new(std::fs::File::create(&st_path).unwrap());
    let mut id_sink = hif::ByteSink::new(std::fs::File::create(&id_path).unwrap());
    let mut interner = Interner::new();

    if encode_statement(&mut sink, &mut id_sink, &mut interner, &stmt).is_err() {
        return;
    }
    sink.release().unwrap();
    id_sink.release().unwrap();

    let st_buf = std::fs::read(&st_path).unwrap();
    let id_buf = std::fs::read(&id_path).unwrap();
    let resolver = Resolver::build(id_buf).unwrap();

    let (decoded, consumed) = decode_statement(&st_buf, 0, &resolver).expect("encoded statement must decode");
    assert_eq!(consumed, st_buf.len());
    assert_eq!(decoded, stmt);
});
