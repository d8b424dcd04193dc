/// Error types for mesh loading
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the OBJ loader
#[derive(Error, Debug)]
pub enum ObjError {
    /// Requested mesh file does not exist
    #[error("mesh file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Other I/O fault while reading the file
    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),

    /// A `v` or `f` line with missing or unparseable tokens
    #[error("malformed `{directive}` directive on line {line}")]
    MalformedLine { line: usize, directive: &'static str },

    /// A face reference that resolves outside the vertex sequence
    #[error("face reference {reference} on line {line} is outside the vertex range 0..{vertex_count}")]
    IndexOutOfRange {
        line: usize,
        reference: i64,
        vertex_count: usize,
    },
}
