//! Whole-program scenarios for `hif_rand` standalone.

use std::path::PathBuf;
use std::process::Command;

fn hif_rand_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hif_rand"))
}

#[test]
fn different_seeds_produce_different_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");

    for (target, seed) in [(&a, "1"), (&b, "2")] {
        let status = Command::new(hif_rand_bin())
            .args([target.to_str().unwrap(), "--seed", seed, "--statements", "20"])
            .status()
            .expect("spawn hif_rand");
        assert!(status.success());
    }

    let bytes_a = std::fs::read(a.join("0.st")).unwrap();
    let bytes_b = std::fs::read(b.join("0.st")).unwrap();
    assert_ne!(bytes_a, bytes_b);
}

#[test]
fn default_statement_count_is_one_hundred() {
    let dir = tempfile::tempdir().unwrap();
    let session_dir = dir.path().join("session");

    let status = Command::new(hif_rand_bin())
        .arg(session_dir.to_str().unwrap())
        .status()
        .expect("spawn hif_rand");
    assert!(status.success());

    let mut reader = hif::session::Reader::open(&session_dir).unwrap();
    let mut count = 0;
    while reader.next_statement().unwrap() {
        count += 1;
    }
    assert_eq!(count, 100);
}
