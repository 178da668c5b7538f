//! Writer → reader round-trip scenarios (spec.md §8 "Concrete
//! scenarios" 1, 2, 3, 4, 6), driven through the public `Writer`/`Reader`
//! session API rather than the codec functions directly.

use hif::{IdCategory, SessionConfig, Statement, StatementClass};

fn write_session(dir: &std::path::Path, stmts: &[Statement]) {
    let mut writer = hif::session::Writer::create(dir, SessionConfig::new("hif-tests", "0.0.0")).unwrap();
    for stmt in stmts {
        writer.add(stmt).unwrap();
    }
    writer.release().unwrap();
}

#[test]
fn trivial_round_trip_preserves_one_statement() {
    let dir = tempfile::tempdir().unwrap();
    let stmt = Statement::assign(0)
        .with_instance("jojojo")
        .push_input("A", IdCategory::String, "0", IdCategory::String)
        .push_input("A", IdCategory::String, "1", IdCategory::String)
        .push_input("A", IdCategory::String, "2", IdCategory::String)
        .push_input("A", IdCategory::String, "3", IdCategory::String)
        .push_bare_output("Z", IdCategory::String)
        .push_attr("loc", "3");

    write_session(dir.path(), std::slice::from_ref(&stmt));

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    assert_eq!(reader.current().unwrap(), &stmt);
    assert!(!reader.next_statement().unwrap());
}

#[test]
fn large_statement_round_trips_and_uses_long_form_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let mut stmt = Statement::assign(0);
    for i in 0..1024u32 {
        stmt = stmt.push_bare_input(format!("in{i}"), IdCategory::String);
    }
    for i in 0..1024u32 {
        stmt = stmt.push_bare_output(format!("out{i}"), IdCategory::String);
    }

    write_session(dir.path(), std::slice::from_ref(&stmt));

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    assert_eq!(reader.current().unwrap(), &stmt);
}

#[test]
fn empty_rhs_attribute_preserves_empty_string_category() {
    let dir = tempfile::tempdir().unwrap();
    let stmt = Statement::attr(0).push_attr("name", "");

    write_session(dir.path(), std::slice::from_ref(&stmt));

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    let decoded = reader.current().unwrap();
    assert_eq!(decoded.attr[0].lhs, b"name");
    assert_eq!(decoded.attr[0].rhs, b"");
    assert_eq!(decoded.attr[0].rhs_cat, IdCategory::String);
}

#[test]
fn base2_category_preserves_raw_little_endian_integers() {
    let dir = tempfile::tempdir().unwrap();
    let mut stmt = Statement::node(0);
    for i in 0..1024i64 {
        stmt = stmt.push_input("v", IdCategory::String, i.to_le_bytes().to_vec(), IdCategory::Base2);
    }

    write_session(dir.path(), std::slice::from_ref(&stmt));

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    let decoded = reader.current().unwrap();
    for (i, entry) in decoded.io.iter().enumerate() {
        assert_eq!(entry.rhs_cat, IdCategory::Base2);
        assert_eq!(entry.rhs, (i as i64).to_le_bytes().to_vec());
    }
}

#[test]
fn every_statement_class_round_trips_with_an_instance() {
    let dir = tempfile::tempdir().unwrap();
    let ctors: [fn(u16) -> Statement; 9] = [
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
    let stmts: Vec<Statement> = ctors.iter().map(|ctor| ctor(7).with_instance("inst")).collect();
    write_session(dir.path(), &stmts);

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    let expected_classes = [
        StatementClass::Node,
        StatementClass::Assign,
        StatementClass::Attr,
        StatementClass::OpenCall,
        StatementClass::ClosedCall,
        StatementClass::OpenDef,
        StatementClass::ClosedDef,
        StatementClass::End,
        StatementClass::Use,
    ];
    for expected in expected_classes {
        assert!(reader.next_statement().unwrap());
        assert_eq!(reader.current().unwrap().sclass, expected);
    }
    assert!(!reader.next_statement().unwrap());
}
