//! Header-statement presence and contract (spec.md §4.3 "Header-
//! statement", §4.4 writer/reader lifecycle).

use hif::{SessionConfig, StatementClass};

#[test]
fn writer_emits_header_before_any_user_statement() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = hif::session::Writer::create(dir.path(), SessionConfig::new("mytool", "1.2.3")).unwrap();
    writer.add(&hif::Statement::end(0)).unwrap();
    writer.release().unwrap();

    let reader = hif::session::Reader::open(dir.path()).unwrap();
    let header = reader.header();
    assert_eq!(header.sclass, StatementClass::Attr);
    assert_eq!(header.attr.len(), 3);
    assert_eq!(header.attr[0].lhs, b"HIF");
    assert_eq!(header.attr[0].rhs, b"0.0.1");
    assert_eq!(header.attr[1].lhs, b"tool");
    assert_eq!(header.attr[1].rhs, b"mytool");
    assert_eq!(header.attr[2].lhs, b"version");
    assert_eq!(header.attr[2].rhs, b"1.2.3");
}

#[test]
fn reader_exposes_header_separately_from_next_statement() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = hif::session::Writer::create(dir.path(), SessionConfig::new("t", "0")).unwrap();
    writer.add(&hif::Statement::end(0)).unwrap();
    writer.release().unwrap();

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    assert_eq!(reader.current().unwrap().sclass, StatementClass::End);
    assert!(!reader.next_statement().unwrap());
}
