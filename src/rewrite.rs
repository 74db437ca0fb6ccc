//! Destination path computation for kept files.

use crate::options::{OptionSet, ViewExtension};
use crate::rules::{extension, VIEW_FILES};

/// Computes the destination relative path for a kept catalog path.
///
/// Only the final extension component is ever touched: when the path carries
/// a recognized view extension and is view-file-listed, that extension is
/// replaced with the selected one. Every other path passes through unchanged.
/// This applies to rendered files too; rendering affects content, not the
/// destination path.
pub fn destination_rel_path(options: &OptionSet, path: &str) -> String {
    let ext = extension(path);
    if ViewExtension::from_extension(ext).is_some() && VIEW_FILES.contains(&path) {
        let stem = &path[..path.len() - ext.len() - 1];
        format!("{}.{}", stem, options.view_extension.extension())
    } else {
        path.to_string()
    }
}
