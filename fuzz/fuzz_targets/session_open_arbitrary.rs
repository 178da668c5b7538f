#![no_main]
use libfuzzer_sys::fuzz_target;

use hif::session::Reader;

fuzz_target!(|data: &[u8]| {
    // Split the arbitrary input into an .st half and an .id half and feed
    // both through Reader::open. Err results are expected and fine; what
    // we verify is no panics or UB while opening a malformed directory.
    if data.is_empty() {
        return;
    }
    let rest = &data[1..];
    let split = if rest.is_empty() { 0 } else { data[0] as usize % (rest.len() + 1) };
    let (st_bytes, id_bytes) = rest.split_at(split);

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("0.st"), st_bytes).unwrap();
    std::fs::write(dir.path().join("0.id"), id_bytes).unwrap();

    if let Ok(mut reader) = Reader::open(dir.path()) {
        for _ in 0..1000 {
            match reader.next_statement() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(_) => break,
            }
        }
    }
});
