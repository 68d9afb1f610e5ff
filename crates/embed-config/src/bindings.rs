//! Command-line table bindings
//!
//! A binding is a `symbol=path` pair. The split happens on the first `=`, so
//! paths may contain `=` but symbols may not.

use embed_core::TableEntry;

use crate::ConfigError;

/// Parse a `symbol=path` argument into a table entry
pub fn parse_binding(arg: &str) -> Result<TableEntry, ConfigError> {
    let (symbol, path) = arg
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidBinding(arg.to_string()))?;

    let symbol = symbol.trim();
    if symbol.is_empty() || path.is_empty() {
        return Err(ConfigError::InvalidBinding(arg.to_string()));
    }

    Ok(TableEntry::new(symbol, path))
}
