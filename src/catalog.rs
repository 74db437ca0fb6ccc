//! Template catalog enumeration.
//! Walks a materialized template source tree and produces the flat set of
//! candidate relative file paths the rule engine decides over.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Enumerates all files (including dot-files, excluding directories) under
/// `source_root` as sorted, `/`-separated relative paths.
///
/// # Errors
/// * `Error::CatalogError` when the root is missing, unreadable or contains
///   no files at all. This is checked before any destination write happens.
pub fn enumerate<P: AsRef<Path>>(source_root: P) -> Result<Vec<String>> {
    let source_root = source_root.as_ref();
    if !source_root.is_dir() {
        return Err(Error::CatalogError(format!(
            "template source '{}' does not exist",
            source_root.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(source_root) {
        let entry = entry.map_err(|e| Error::CatalogError(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(source_root)
            .map_err(|e| Error::CatalogError(e.to_string()))?;
        let relative_path = relative_path
            .to_str()
            .ok_or_else(|| {
                Error::CatalogError(format!(
                    "non UTF-8 path in template source: {}",
                    entry.path().display()
                ))
            })?
            .replace('\\', "/");
        paths.push(relative_path);
    }

    if paths.is_empty() {
        return Err(Error::CatalogError(format!(
            "template source '{}' contains no files",
            source_root.display()
        )));
    }

    paths.sort();
    debug!("Catalog holds {} candidate files", paths.len());
    Ok(paths)
}
