//! Writing the generated artifacts to disk.
//!
//! Both files are staged next to their destinations first and renamed into
//! place only once both have been written, so a failure while staging leaves
//! any previous `newdb.h`/`newdb.c` pair untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::{GenError, GeneratedTables, OutputPaths};

/// Write `tables` to the header and source paths in `paths`.
///
/// # Errors
/// Returns `GenError::Write` naming the destination that could not be staged
/// or renamed into place.
pub fn write_tables(tables: &GeneratedTables, paths: &OutputPaths) -> Result<(), GenError> {
    let header = stage(&paths.header, &tables.header)?;
    let source = stage(&paths.source, &tables.source)?;

    commit(header, &paths.header)?;
    commit(source, &paths.source)?;
    info!("wrote {} and {}", paths.header.display(), paths.source.display());
    Ok(())
}

fn stage(dest: &Path, contents: &str) -> Result<NamedTempFile, GenError> {
    let write_err = |source| GenError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".dungeon_gen")
        .tempfile_in(dir)
        .map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    if let Some(permissions) = output_permissions(dest) {
        file.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    debug!("staged {} bytes for {} at {}", contents.len(), dest.display(), file.path().display());
    Ok(file)
}

fn commit(file: NamedTempFile, dest: &Path) -> Result<(), GenError> {
    file.persist(dest).map_err(|err| GenError::Write {
        path: PathBuf::from(dest),
        source: err.error,
    })?;
    Ok(())
}

/// Keep the mode of an existing output; fresh outputs get the usual 0644.
fn output_permissions(dest: &Path) -> Option<fs::Permissions> {
    match fs::metadata(dest) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
