//! Sentinel independence (spec.md §8): a `0xFF` byte occurring inside an
//! identifier's payload must never be mistaken for the tuple-entry-list
//! terminator — only a reference *word* positioned at a list boundary is
//! interpreted as the sentinel.

use hif::{IdCategory, Statement};

fn round_trip(stmt: &Statement) -> Statement {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = hif::session::Writer::create(dir.path(), hif::SessionConfig::new("t", "0")).unwrap();
    writer.add(stmt).unwrap();
    writer.release().unwrap();

    let mut reader = hif::session::Reader::open(dir.path()).unwrap();
    assert!(reader.next_statement().unwrap());
    reader.current().unwrap().clone()
}

#[test]
fn payload_containing_0xff_bytes_round_trips() {
    let stmt = Statement::node(0)
        .push_input(vec![0xFF, 0xFF, 0xFF], IdCategory::Base2, vec![0x00, 0xFF], IdCategory::Base2)
        .push_attr("name", vec![0xFFu8; 4]);

    let decoded = round_trip(&stmt);
    assert_eq!(decoded.io[0].lhs, vec![0xFF, 0xFF, 0xFF]);
    assert_eq!(decoded.io[0].rhs, vec![0x00, 0xFF]);
    assert_eq!(decoded.attr[0].rhs, vec![0xFFu8; 4]);
}
