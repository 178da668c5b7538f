//! Session / directory layout (spec.md §4.4): open-or-create a directory,
//! enumerate and validate chunk file pairs, and expose the read/write API
//! as a sequence of statements terminated by the mandatory header.

pub mod chunk;
pub mod config;
pub mod reader;
pub mod writer;

pub use config::SessionConfig;
pub use reader::{ChunkState, Reader};
pub use writer::Writer;
