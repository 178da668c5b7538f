//! Whole-program scenario: `hif_rand` writes a session, `hif_cat` prints
//! it. Verifies only the presence of the expected structural markers —
//! the textual dump grammar is explicitly not a stable interface
//! (spec.md §6), so this test doesn't pin the exact text layout.

use std::path::PathBuf;
use std::process::Command;

fn bin(name: &str) -> PathBuf {
    PathBuf::from(std::env::var(format!("CARGO_BIN_EXE_{name}")).unwrap())
}

#[test]
fn hif_cat_prints_header_and_every_statement() {
    let dir = tempfile::tempdir().unwrap();
    let session_dir = dir.path().join("session");

    let status = Command::new(bin("hif_rand"))
        .args([session_dir.to_str().unwrap(), "--seed", "1", "--statements", "5"])
        .status()
        .expect("spawn hif_rand");
    assert!(status.success());

    let output = Command::new(bin("hif_cat"))
        .arg(session_dir.to_str().unwrap())
        .output()
        .expect("spawn hif_cat");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("hif.attr"));
    assert!(text.contains("@.0(\"HIF\" = \"0.0.1\")"));
    assert_eq!(text.matches("hif.").count(), 1 + 5);
}

#[test]
fn hif_cat_refuses_a_nonexistent_directory() {
    let output = Command::new(bin("hif_cat"))
        .arg("/nonexistent/hif/session/path")
        .output()
        .expect("spawn hif_cat");
    assert!(!output.status.success());
}
