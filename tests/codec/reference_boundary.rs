//! Reference-width boundary coverage (spec.md §8) at the whole-statement
//! level: io-list lengths straddling the short/long-form cutover
//! (index 31) must round-trip identically through a full session.

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
fn io_list_lengths_straddling_the_short_form_cutover() {
    for &count in &[0u32, 1, 29, 30, 31, 32, 33, 8192] {
        let mut stmt = Statement::node(0);
        for i in 0..count {
            let lhs = format!("id{i}").into_bytes();
            stmt = stmt.push_bare_input(lhs, IdCategory::String);
        }
        let decoded = round_trip(&stmt);
        assert_eq!(decoded.io.len(), count as usize, "count = {count}");
        assert_eq!(decoded, stmt, "count = {count}");
    }
}

/// A session whose identifier table crosses the reserved index-31
/// boundary (spec.md §9) must still round-trip every tuple entry
/// byte-for-byte: the reader's positional array must reserve the same
/// array slot the writer's interner skipped, or every reference at or
/// past index 32 resolves to the wrong identifier record.
#[test]
fn session_crossing_32_distinct_identifiers_round_trips_exactly() {
    let mut stmt = Statement::assign(0).with_instance("past_the_boundary");
    for i in 0..40u32 {
        let lhs = format!("id{i}").into_bytes();
        let rhs = format!("v{i}").into_bytes();
        stmt = stmt.push_input(lhs, IdCategory::String, rhs, IdCategory::String);
    }
    let decoded = round_trip(&stmt);
    assert_eq!(decoded, stmt);
    for (i, entry) in decoded.io.iter().enumerate() {
        assert_eq!(entry.lhs, format!("id{i}").into_bytes());
        assert_eq!(entry.rhs, format!("v{i}").into_bytes());
    }
}
