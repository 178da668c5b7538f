//! Chunk-file naming and pairing (spec.md §4.4, §6): a HIF document is a
//! directory of `<N>.st` + `<N>.id` pairs. This module hand-rolls the two
//! character-class checks spec.md gives (no `regex` dependency — the
//! teacher's stack never pulls one in either) and the reader-side
//! pairing/validation logic shared by directory open.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Writer-side cleanup grammar (spec.md §4.4): `^[0-9][^/]*\.(st|id)$`.
/// Filenames can never contain `/` once listed from a directory, so this
/// reduces to "starts with an ASCII digit and ends in `.st` or `.id`".
pub fn matches_cleanup_grammar(name: &str) -> bool {
    let Some(stem_and_ext) = split_ext(name) else {
        return false;
    };
    let (stem, _ext) = stem_and_ext;
    stem.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// External-interface grammar (spec.md §6): chunk stems match
/// `[0-9][0-9a-zA-Z_]*`, stricter than the writer's own cleanup pattern.
pub fn matches_external_grammar(stem: &str) -> bool {
    let mut chars = stem.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn split_ext(name: &str) -> Option<(&str, &str)> {
    if let Some(stem) = name.strip_suffix(".st") {
        Some((stem, "st"))
    } else if let Some(stem) = name.strip_suffix(".id") {
        Some((stem, "id"))
    } else {
        None
    }
}

/// One matched pair of chunk files, by stem (`N`).
#[derive(Debug, Clone)]
pub struct ChunkPair {
    pub stem: String,
    pub st_path: std::path::PathBuf,
    pub id_path: std::path::PathBuf,
}

/// Enumerate a session directory, collecting `.st`/`.id` stems and
/// validating pairing per spec.md §4.4 reader step 1: sorted stem lists
/// must have equal length and match pairwise; any mismatch or unexpected
/// file is a directory-level error refusing to open the session.
pub fn discover_chunks(dir: &Path) -> Result<Vec<ChunkPair>> {
    let mut st_stems = Vec::new();
    let mut id_stems = Vec::new();
    let mut others = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            others.push(entry.file_name());
            continue;
        };
        match split_ext(name) {
            Some((stem, "st")) if matches_external_grammar(stem) => st_stems.push(stem.to_string()),
            Some((stem, "id")) if matches_external_grammar(stem) => id_stems.push(stem.to_string()),
            _ => others.push(entry.file_name()),
        }
    }

    if !others.is_empty() {
        return Err(Error::Directory(format!(
            "unexpected file(s) in session directory: {}",
            others
                .iter()
                .map(|n| n.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    st_stems.sort();
    id_stems.sort();

    if st_stems.len() != id_stems.len() {
        return Err(Error::Directory(format!(
            "{} .st file(s) but {} .id file(s) — chunk pairing mismatch",
            st_stems.len(),
            id_stems.len()
        )));
    }
    for (st, id) in st_stems.iter().zip(id_stems.iter()) {
        if st != id {
            return Err(Error::Directory(format!(
                "chunk stem mismatch: {st}.st has no matching {st}.id (found {id}.id instead)"
            )));
        }
    }

    Ok(st_stems
        .into_iter()
        .map(|stem| ChunkPair {
            st_path: dir.join(format!("{stem}.st")),
            id_path: dir.join(format!("{stem}.id")),
            stem,
        })
        .collect())
}

/// Writer-side directory preparation (spec.md §4.4 writer step 1/2): if
/// the directory exists, validate and remove every matching chunk entry
/// (aborting if any entry doesn't match the cleanup grammar); otherwise
/// create it.
pub fn prepare_directory(dir: &Path, dir_mode: u32) -> Result<()> {
    if dir.exists() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name_str = name.to_str().ok_or_else(|| {
                Error::Directory(format!("non-UTF-8 entry name in {}", dir.display()))
            })?;
            if name_str == "." || name_str == ".." {
                continue;
            }
            if !matches_cleanup_grammar(name_str) {
                return Err(Error::Directory(format!(
                    "refusing to reuse {}: unexpected entry {name_str:?}",
                    dir.display()
                )));
            }
        }
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            fs::remove_file(entry.path())?;
        }
    } else {
        create_dir_with_mode(dir, dir_mode)?;
    }
    Ok(())
}

#[cfg(unix)]
fn create_dir_with_mode(dir: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .mode(mode)
        .create(dir)
        .map_err(Error::from)
}

#[cfg(not(unix))]
fn create_dir_with_mode(dir: &Path, _mode: u32) -> Result<()> {
    fs::create_dir(dir).map_err(Error::from)
}

/// Path for chunk `index` within `dir`, e.g. `dir/0.st`.
pub fn chunk_path(dir: &Path, index: u64, ext: &str) -> std::path::PathBuf {
    dir.join(format!("{index}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_grammar_accepts_digit_prefixed_names() {
        assert!(matches_cleanup_grammar("0.st"));
        assert!(matches_cleanup_grammar("0.id"));
        assert!(matches_cleanup_grammar("12weird-name!!.st"));
        assert!(!matches_cleanup_grammar("chunk.st"));
        assert!(!matches_cleanup_grammar("0.txt"));
    }

    #[test]
    fn external_grammar_is_alnum_and_underscore_only() {
        assert!(matches_external_grammar("0"));
        assert!(matches_external_grammar("12_a"));
        assert!(!matches_external_grammar("1-2"));
        assert!(!matches_external_grammar("a0"));
    }

    #[test]
    fn discover_chunks_pairs_matching_stems() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("0.st"), b"").unwrap();
        fs::write(dir.path().join("0.id"), b"").unwrap();
        let pairs = discover_chunks(dir.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].stem, "0");
    }

    #[test]
    fn discover_chunks_rejects_missing_id_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("0.st"), b"").unwrap();
        fs::write(dir.path().join("1.id"), b"").unwrap();
        let err = discover_chunks(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Directory(_)));
    }

    #[test]
    fn discover_chunks_rejects_unexpected_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("0.st"), b"").unwrap();
        fs::write(dir.path().join("0.id"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        let err = discover_chunks(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Directory(_)));
    }
}
