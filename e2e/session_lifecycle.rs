//! Whole-program scenario: `hif_rand` writes a session, the library
//! reads it back directly. Exercises the binary → library boundary
//! rather than re-testing codec internals (covered by `tests/`).

use std::path::PathBuf;
use std::process::Command;

fn hif_rand_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hif_rand"))
}

#[test]
fn hif_rand_writes_a_session_the_library_can_read() {
    let dir = tempfile::tempdir().unwrap();
    let session_dir = dir.path().join("session");

    let status = Command::new(hif_rand_bin())
        .args([
            session_dir.to_str().unwrap(),
            "--seed",
            "42",
            "--statements",
            "25",
        ])
        .status()
        .expect("spawn hif_rand");
    assert!(status.success());

    let mut reader = hif::session::Reader::open(&session_dir).unwrap();
    let mut count = 0;
    while reader.next_statement().unwrap() {
        count += 1;
    }
    assert_eq!(count, 25);
}

#[test]
fn hif_rand_is_deterministic_for_a_fixed_seed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");

    for target in [&a, &b] {
        let status = Command::new(hif_rand_bin())
            .args([target.to_str().unwrap(), "--seed", "7", "--statements", "10"])
            .status()
            .expect("spawn hif_rand");
        assert!(status.success());
    }

    let bytes_a = std::fs::read(a.join("0.st")).unwrap();
    let bytes_b = std::fs::read(b.join("0.st")).unwrap();
    assert_eq!(bytes_a, bytes_b);
}
