//! Embedding Table
//!
//! Ordered list of (symbol, path) pairs. Output order follows insertion order.

use std::path::{Path, PathBuf};

/// One generated constant: the C symbol and the shader file backing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Identifier of the emitted constant, not validated
    pub symbol: String,
    /// Shader source file
    pub path: PathBuf,
}

impl TableEntry {
    pub fn new(symbol: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            symbol: symbol.into(),
            path: path.into(),
        }
    }

    /// Resolve a relative path against `base`, leaving absolute paths alone
    pub fn rebased(mut self, base: &Path) -> Self {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
        self
    }
}

/// Ordered mapping from symbol name to shader path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddingTable {
    entries: Vec<TableEntry>,
}

impl EmbeddingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate symbols are kept as given.
    pub fn push(&mut self, entry: TableEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }
}

impl FromIterator<TableEntry> for EmbeddingTable {
    fn from_iter<I: IntoIterator<Item = TableEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EmbeddingTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
