//! Filesystem utilities for charter.
//!
//! The composer never touches the filesystem. These helpers serve the CLI
//! when it writes a composed document to `--output`.

pub mod atomic;

pub use atomic::atomic_write_file;
