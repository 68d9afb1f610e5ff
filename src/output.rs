//! Atomic output file replacement
//!
//! Generated source goes to a temporary file beside the target, which is only
//! renamed over the target once every declaration was written. The result keeps
//! an existing target's permissions; a new target gets the usual 0666 minus
//! umask rather than the temp file's 0600.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use embed_core::EmbedError;
use tempfile::Builder;

/// Run `write` against a temp file and persist it to `target` on success
///
/// On error the temp file is dropped and `target` keeps its old contents.
pub fn write_atomically<T, F>(target: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<T, EmbedError>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

    let value = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let value = write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write temporary file for {:?}", target))?;
        value
    };

    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of {:?}", target))?;
    }

    temp.persist(target)
        .with_context(|| format!("Failed to replace {:?}", target))?;

    log::info!("Wrote {:?}", target);
    Ok(value)
}
