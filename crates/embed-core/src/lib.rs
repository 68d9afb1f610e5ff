//! Embed Core - shader sources as C string literals
//!
//! This crate provides:
//! - The Embedding Table (ordered symbol to path pairs)
//! - String Literal Escaping for shader text
//! - The embedding pass that reads each file and writes its declaration
//!
//! The pass is fail-fast: the first unreadable file aborts it, and nothing is
//! written for that entry or any entry after it.

pub mod literal;
pub mod table;

pub use literal::{LINE_CONTINUATION, escape_source, render_declaration};
pub use table::{EmbeddingTable, TableEntry};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// The shader file is missing, unreadable, or not valid UTF-8
    #[error("Failed to read shader {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write
    #[error("Failed to write generated source: {0}")]
    Output(#[from] io::Error),
}

/// Read a shader file fully into memory
pub fn read_shader_source(path: &Path) -> Result<String, EmbedError> {
    fs::read_to_string(path).map_err(|source| EmbedError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one entry's file and write its declaration to `out`
pub fn embed_entry<W: Write>(entry: &TableEntry, out: &mut W) -> Result<(), EmbedError> {
    let source = read_shader_source(&entry.path)?;
    log::debug!(
        "Embedding {:?} as {} ({} bytes)",
        entry.path,
        entry.symbol,
        source.len()
    );
    out.write_all(render_declaration(&entry.symbol, &source).as_bytes())?;
    Ok(())
}

/// Write one declaration per table entry, in table order
///
/// Returns the number of declarations written.
pub fn embed_table<W: Write>(table: &EmbeddingTable, out: &mut W) -> Result<usize, EmbedError> {
    let mut written = 0;
    for entry in table {
        embed_entry(entry, out)?;
        written += 1;
    }
    out.flush()?;
    log::debug!("Embedded {} shader(s)", written);
    Ok(written)
}
