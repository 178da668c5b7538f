//! Directory corruption refusal (spec.md §8 "Concrete scenario" 5 and
//! the directory-layout error cases of §4.4/§7).

use std::fs;

#[test]
fn missing_id_file_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0.st"), b"").unwrap();
    fs::write(dir.path().join("1.id"), b"").unwrap();

    let err = hif::session::Reader::open(dir.path()).unwrap_err();
    assert!(matches!(err, hif::Error::Directory(_)));
}

#[test]
fn empty_directory_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let err = hif::session::Reader::open(dir.path()).unwrap_err();
    assert!(matches!(err, hif::Error::Directory(_)));
}

#[test]
fn unexpected_file_in_directory_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0.st"), b"").unwrap();
    fs::write(dir.path().join("0.id"), b"").unwrap();
    fs::write(dir.path().join("README.md"), b"notes").unwrap();

    let err = hif::session::Reader::open(dir.path()).unwrap_err();
    assert!(matches!(err, hif::Error::Directory(_)));
}

#[test]
fn truncated_st_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = hif::session::Writer::create(dir.path(), hif::SessionConfig::new("t", "0")).unwrap();
    writer.add(&hif::Statement::end(0)).unwrap();
    writer.release().unwrap();

    // Truncate mid-header so even the mandatory first statement can't
    // decode (the reader only needs to parse the header to open).
    let st_path = dir.path().join("0.st");
    fs::write(&st_path, [0u8]).unwrap();

    let err = hif::session::Reader::open(dir.path()).unwrap_err();
    assert!(matches!(err, hif::Error::Format(_)));
}
