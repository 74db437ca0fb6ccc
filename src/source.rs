//! Template source providers.
//! The projection core only needs a local root to walk; how that root comes
//! into existence (remote archive download and extraction, for instance) is
//! the provider's business behind this trait. Tests substitute a fixture
//! tree the same way.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Produces a materialized local template source tree.
pub trait TemplateSourceProvider {
    /// Materializes the source tree and returns its local root.
    ///
    /// # Errors
    /// * `Error::FetchError` when the tree cannot be made available
    fn materialize(&self) -> Result<PathBuf>;
}

/// Provider for an already materialized local template tree.
pub struct LocalTemplateSource {
    root: PathBuf,
}

impl LocalTemplateSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl TemplateSourceProvider for LocalTemplateSource {
    fn materialize(&self) -> Result<PathBuf> {
        if !self.root.is_dir() {
            return Err(Error::FetchError(format!(
                "template source '{}' does not exist",
                self.root.display()
            )));
        }
        Ok(self.root.clone())
    }
}
