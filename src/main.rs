//! embed-shader
//!
//! Reads shader sources and prints one C string-literal constant per shader,
//! for builds that cannot load shader files at runtime:
//!
//! ```sh
//! embed-shader fshader_glsl=gen/fshader-debug.glsl > gen/shaders.h
//! embed-shader --config shaders.toml --output gen/shaders.h
//! ```

mod output;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser};
use embed_config::{Config, parse_binding};
use embed_core::{EmbeddingTable, TableEntry, embed_table};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Embed shader sources as C string literals")]
struct CliArgs {
    /// Shaders to embed, in output order
    #[arg(value_name = "SYMBOL=PATH", value_parser = parse_binding, conflicts_with = "config")]
    bindings: Vec<TableEntry>,

    /// Read the table from a TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write to FILE instead of stdout, replacing it only on success
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose {
        "debug"
    } else {
        "warn,embed_shader=info,embed_config=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let table = resolve_table(&args)?;
    if table.is_empty() {
        log::warn!("Embedding table is empty, nothing to generate");
    }

    let written = match &args.output {
        Some(path) => output::write_atomically(path, |out| embed_table(&table, out))?,
        None => embed_table(&table, &mut io::stdout().lock())?,
    };

    log::debug!("Wrote {} declaration(s)", written);
    Ok(())
}

/// Pick the table source: bindings, then --config, then discovery
fn resolve_table(args: &CliArgs) -> Result<EmbeddingTable> {
    if !args.bindings.is_empty() {
        log::debug!("Using {} command-line binding(s)", args.bindings.len());
        return Ok(args.bindings.iter().cloned().collect());
    }

    if let Some(path) = &args.config {
        let config = Config::load_from(path)?;
        let base_dir = path.parent().unwrap_or(Path::new(""));
        return Ok(config.into_table(base_dir));
    }

    let config = Config::discover(Path::new("."))?;
    Ok(config.into_table(Path::new("")))
}
