//! Whole-program scenario: `hif_cat` refuses a directory with mismatched
//! chunk pairing instead of panicking or printing partial output.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn hif_cat_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hif_cat"))
}

#[test]
fn hif_cat_refuses_a_directory_with_missing_id_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("0.st"), b"").unwrap();
    fs::write(dir.path().join("1.id"), b"").unwrap();

    let output = Command::new(hif_cat_bin())
        .arg(dir.path().to_str().unwrap())
        .output()
        .expect("spawn hif_cat");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("hif_cat:"));
}
