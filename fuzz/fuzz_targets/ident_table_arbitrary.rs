#![no_main]
use libfuzzer_sys::fuzz_target;

use hif::Resolver;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the identifier-record scanner.
    // Err results are expected and fine; what we verify is no panics or UB.
    let _ = Resolver::build(data.to_vec());
});
