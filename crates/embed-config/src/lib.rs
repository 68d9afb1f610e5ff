//! Embed Configuration
//!
//! Builds the Embedding Table from one of:
//! - `symbol=path` command-line bindings
//! - a TOML table file (`embed-shader.toml` by default)
//! - the built-in table when neither is given
//!
//! Table file format:
//! ```toml
//! [[shader]]
//! name = "fshader_glsl"
//! path = "gen/fshader-debug.glsl"
//! ```

pub mod bindings;

pub use bindings::parse_binding;

use embed_core::{EmbeddingTable, TableEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Table file looked up in the working directory when no source is given
pub const DEFAULT_TABLE_FILE: &str = "embed-shader.toml";

/// One `[[shader]]` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderEntry {
    /// Symbol of the generated constant
    pub name: String,
    /// Shader file, relative to the table file's directory
    pub path: PathBuf,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Shaders to embed, in output order
    #[serde(default, rename = "shader")]
    pub shaders: Vec<ShaderEntry>,
}

impl Default for Config {
    /// The table the tool ships with: the debug fragment shader
    fn default() -> Self {
        Self {
            shaders: vec![ShaderEntry {
                name: "fshader_glsl".to_string(),
                path: PathBuf::from("gen/fshader-debug.glsl"),
            }],
        }
    }
}

impl Config {
    /// Load a table file from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        log::info!(
            "Loaded {} shader(s) from {:?}",
            config.shaders.len(),
            path
        );
        Ok(config)
    }

    /// Load `embed-shader.toml` from `dir`, falling back to the built-in table
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_TABLE_FILE);
        if path.is_file() {
            return Self::load_from(&path);
        }

        log::info!("No {} in {:?}, using built-in table", DEFAULT_TABLE_FILE, dir);
        Ok(Self::default())
    }

    /// Convert to an Embedding Table, resolving relative paths against `base_dir`
    pub fn into_table(self, base_dir: &Path) -> EmbeddingTable {
        self.shaders
            .into_iter()
            .map(|shader| TableEntry::new(shader.name, shader.path).rebased(base_dir))
            .collect()
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Command-line binding is not `symbol=path`
    #[error("Invalid binding {0:?}, expected SYMBOL=PATH")]
    InvalidBinding(String),

    /// Failed to read table file
    #[error("Failed to read {0:?}: {1}")]
    ReadError(PathBuf, #[source] std::io::Error),

    /// Failed to parse table file
    #[error("Failed to parse {0:?}: {1}")]
    ParseError(PathBuf, #[source] toml::de::Error),
}
