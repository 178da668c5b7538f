//! Append-only buffered byte sink over a file handle.
//!
//! Rust port of `File_write` (`file_write.hpp` / `file_write.cpp`): a fixed
//! capacity buffer with `add8`/`add16`/`add24`/`add32` little-endian integer
//! helpers and a raw byte-string `add`. Unlike the C original's
//! `buffer[buffer_max + 64]` over-allocation trick (room for the largest
//! single `add8`/`add16`/`add24`/`add32` call to overrun before the
//! `buffer_pos >= buffer_max` check fires), this port checks capacity before
//! writing so the buffer never needs slack bytes.
//!
//! §4.1 invariant: on release all buffered bytes are flushed exactly once;
//! a partial underlying write is a fatal session error. Appends at least as
//! large as the buffer capacity bypass it entirely, after first flushing
//! anything already pending.

use std::fs::File;
use std::io::{self, Write};

use crate::error::{Error, Result};

/// Minimum buffer capacity per spec.md §4.1 ("fixed-size (≥8 KiB) buffer").
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// Buffered append-only writer. One [`ByteSink`] owns one [`File`] — mirrors
/// `File_write` owning one `fd`, rather than being generic over `io::Write`,
/// so the `add32`-bypasses-buffer fast path can hit the file directly.
pub struct ByteSink {
    file: File,
    buffer: Vec<u8>,
    released: bool,
}

impl ByteSink {
    /// Wrap an already-open file. Equivalent to `File_write::File_write(int fd_)`.
    pub fn new(file: File) -> Self {
        Self::with_capacity(file, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(file: File, capacity: usize) -> Self {
        Self {
            file,
            buffer: Vec::with_capacity(capacity.max(DEFAULT_BUFFER_CAPACITY)),
            released: false,
        }
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Append a single byte. Equivalent to `File_write::add8`.
    pub fn add8(&mut self, x: u8) -> Result<()> {
        if self.buffer.len() + 1 > self.capacity() {
            self.drain()?;
        }
        self.buffer.push(x);
        Ok(())
    }

    /// Append a little-endian 16-bit integer. Equivalent to `File_write::add16`.
    pub fn add16(&mut self, v: u16) -> Result<()> {
        self.add(&v.to_le_bytes())
    }

    /// Append the low 24 bits of `v`, little-endian. Equivalent to `File_write::add24`.
    pub fn add24(&mut self, v: u32) -> Result<()> {
        let b = v.to_le_bytes();
        self.add(&b[..3])
    }

    /// Append a little-endian 32-bit integer. Equivalent to `File_write::add32`.
    pub fn add32(&mut self, v: u32) -> Result<()> {
        self.add(&v.to_le_bytes())
    }

    /// Append raw bytes, buffering where possible. Equivalent to `File_write::add(string_view)`.
    pub fn add(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() >= self.capacity() {
            if !self.buffer.is_empty() {
                self.drain()?;
            }
            self.write_direct(bytes)?;
            return Ok(());
        }

        if self.buffer.len() + bytes.len() > self.capacity() {
            self.drain()?;
        }
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Flush buffered bytes to the file. Equivalent to `File_write::drain`.
    ///
    /// A short write (`write()` returning fewer bytes than requested) is
    /// reported as a fatal session error per §7, not silently retried —
    /// the original's `drain` only logs the mismatch; this port surfaces
    /// it as `Error::Io` instead of continuing with a half-written buffer.
    pub fn drain(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.write_direct(&self.buffer.clone())?;
        self.buffer.clear();
        Ok(())
    }

    fn write_direct(&mut self, bytes: &[u8]) -> Result<()> {
        let n = self.file.write(bytes)?;
        if n != bytes.len() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: wrote {n} of {} bytes", bytes.len()),
            )));
        }
        Ok(())
    }

    /// Drain and close, surfacing any flush error. Equivalent to the
    /// `File_write` destructor's `drain()` + `::close(fd)`. Call this
    /// explicitly to observe I/O errors — `Drop` best-effort flushes but
    /// cannot propagate a `Result`.
    pub fn release(mut self) -> Result<()> {
        self.drain()?;
        self.released = true;
        Ok(())
    }
}

impl Drop for ByteSink {
    fn drop(&mut self) {
        if !self.released && !self.buffer.is_empty() {
            let _ = self.drain();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn reopen(path: &std::path::Path) -> Vec<u8> {
        let mut f = File::open(path).unwrap();
        let mut buf = Vec::new();
        f.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn small_appends_buffer_and_flush_on_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bin");
        let file = File::create(&path).unwrap();
        let mut sink = ByteSink::new(file);
        sink.add8(1).unwrap();
        sink.add16(0x0302).unwrap();
        sink.add24(0x06_0504).unwrap();
        sink.add32(0x0A09_0807).unwrap();
        sink.add(b"tail").unwrap();
        sink.release().unwrap();

        let got = reopen(&path);
        assert_eq!(
            got,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, b't', b'a', b'i', b'l']
        );
    }

    #[test]
    fn large_append_bypasses_buffer_after_flushing_pending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.bin");
        let file = File::create(&path).unwrap();
        let mut sink = ByteSink::with_capacity(file, 16);
        sink.add8(0xAA).unwrap();
        let big = vec![0x42u8; 64];
        sink.add(&big).unwrap();
        sink.release().unwrap();

        let mut expected = vec![0xAA];
        expected.extend_from_slice(&big);
        assert_eq!(reopen(&path), expected);
    }

    #[test]
    fn le_encodings_independent_of_host_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.bin");
        let file = File::create(&path).unwrap();
        let mut sink = ByteSink::new(file);
        sink.add32(0x1234_5678).unwrap();
        sink.release().unwrap();
        assert_eq!(reopen(&path), vec![0x78, 0x56, 0x34, 0x12]);
    }
}
