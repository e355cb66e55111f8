use crate::errors::{FileOperation, IoError};
use crate::layout::FileEntry;
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(medichain_setup::scaffold::io))]
    Io(#[from] IoError),
}

/// Creates every directory in `paths` under `root`, missing ancestors
/// included. Directories that already exist are left untouched.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if a path component exists as a regular file
/// or the filesystem denies creation. The first failure aborts the loop;
/// directories created before it stay in place.
pub fn ensure_directories(root: &Path, paths: &[&str]) -> Result<(), ScaffoldError> {
    for relative in paths {
        let path = root.join(relative);

        fs::create_dir_all(&path)
            .map_err(|error| IoError::new(FileOperation::Mkdir, path.clone(), error))?;

        let msg = format!("{} {}", "create".green(), relative);

        println!("{}", &msg);

        log::debug!("directory in place: {}", path.display());
    }

    Ok(())
}

/// Writes every entry in `entries` under `root`, creating or truncating as
/// needed. Pre-existing content is always overwritten; re-running the tool
/// resets generated files to their defaults.
///
/// Each handle is opened, written, and released within a single [`fs::write`]
/// call before the next entry is touched.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if a write fails. The first failure aborts the
/// loop; files written before it stay in place.
pub fn write_files(root: &Path, entries: &[FileEntry]) -> Result<(), ScaffoldError> {
    for entry in entries {
        let path = root.join(entry.path);

        fs::write(&path, entry.contents)
            .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

        let msg = format!("{} {}", "create".green(), entry.path);

        println!("{}", &msg);

        log::debug!("wrote {} bytes to {}", entry.contents.len(), path.display());
    }

    Ok(())
}
