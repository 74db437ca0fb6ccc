//! Projection pipeline orchestration.
//! Runs every catalog path through the rule engine, computes destination
//! paths and content, and materializes the destination tree. Files are
//! independent of each other, so the write phase runs on a small bounded
//! worker pool; the first fatal write error stops further scheduling.

use crate::error::{Error, Result};
use crate::options::OptionSet;
use crate::renderer::{render_context, TemplateRenderer};
use crate::rewrite::destination_rel_path;
use crate::rules::{decide, Decision};
use log::debug;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Worker count for the write phase. The work is dominated by file reads and
/// writes, so this is sized for I/O concurrency rather than CPU count.
const WRITE_WORKERS: usize = 8;

/// Outcome of a projection run.
#[derive(Debug, Default)]
pub struct ProjectionResult {
    /// Destination paths written, sorted.
    pub written: Vec<PathBuf>,
    /// Catalog paths dropped by the rule engine, sorted.
    pub dropped: Vec<String>,
}

/// A planned write: one kept catalog entry with its resolved source,
/// destination and content handling.
#[derive(Debug)]
struct PlannedWrite {
    source: PathBuf,
    target: PathBuf,
    render: bool,
}

/// Orchestrates a single projection run over a catalog.
pub struct ProjectionPipeline<'a> {
    options: &'a OptionSet,
    renderer: &'a dyn TemplateRenderer,
    source_root: &'a Path,
    dest_root: &'a Path,
    context: serde_json::Value,
}

impl<'a> ProjectionPipeline<'a> {
    pub fn new(
        options: &'a OptionSet,
        renderer: &'a dyn TemplateRenderer,
        source_root: &'a Path,
        dest_root: &'a Path,
        version: &str,
    ) -> Self {
        Self {
            options,
            renderer,
            source_root,
            dest_root,
            context: render_context(options, version),
        }
    }

    /// Projects the catalog into the destination tree.
    ///
    /// The decision phase is pure and sequential; the write phase runs the
    /// planned writes through the worker pool. Destination paths are pairwise
    /// distinct (the catalog is path-unique), so workers never contend on a
    /// file, and directory creation is create-if-absent.
    ///
    /// # Errors
    /// * `Error::WriteError` on the first failed destination write; no
    ///   further writes are scheduled once one fails.
    pub fn project(&self, catalog: &[String]) -> Result<ProjectionResult> {
        let mut planned = Vec::new();
        let mut dropped = Vec::new();

        for path in catalog {
            match decide(self.options, path) {
                Decision::Drop => {
                    debug!("Dropping '{}'", path);
                    dropped.push(path.clone());
                }
                decision => {
                    let target_rel = destination_rel_path(self.options, path);
                    debug!("Keeping '{}' as '{}' ({:?})", path, target_rel, decision);
                    planned.push(PlannedWrite {
                        source: self.source_root.join(path),
                        target: self.dest_root.join(target_rel),
                        render: decision == Decision::Render,
                    });
                }
            }
        }

        let written = self.write_all(planned)?;

        let mut result = ProjectionResult { written, dropped };
        result.written.sort();
        result.dropped.sort();
        Ok(result)
    }

    /// Executes the planned writes on a bounded worker pool, fail-fast.
    fn write_all(&self, planned: Vec<PlannedWrite>) -> Result<Vec<PathBuf>> {
        let workers = WRITE_WORKERS.min(planned.len()).max(1);
        let queue = Mutex::new(planned.into_iter().collect::<VecDeque<_>>());
        let written = Mutex::new(Vec::new());
        let failed = Mutex::new(None);
        let abort = AtomicBool::new(false);

        std::thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        if abort.load(Ordering::Relaxed) {
                            break;
                        }
                        let Some(job) = queue.lock().unwrap().pop_front() else {
                            break;
                        };
                        match self.write_one(&job) {
                            Ok(()) => written.lock().unwrap().push(job.target),
                            Err(e) => {
                                abort.store(true, Ordering::Relaxed);
                                let mut failed = failed.lock().unwrap();
                                if failed.is_none() {
                                    *failed = Some(e);
                                }
                                break;
                            }
                        }
                    }
                });
            }
        });

        if let Some(err) = failed.into_inner().unwrap() {
            return Err(err);
        }
        Ok(written.into_inner().unwrap())
    }

    /// Writes a single planned file: rendered for render-marked sources,
    /// byte-for-byte copy otherwise.
    fn write_one(&self, job: &PlannedWrite) -> Result<()> {
        let to_write_error = |source: std::io::Error| Error::WriteError {
            path: job.target.display().to_string(),
            source,
        };

        if let Some(parent) = job.target.parent() {
            std::fs::create_dir_all(parent).map_err(to_write_error)?;
        }

        if job.render {
            let content = std::fs::read_to_string(&job.source).map_err(Error::IoError)?;
            let rendered = self.renderer.render(&content, &self.context)?;
            std::fs::write(&job.target, rendered).map_err(to_write_error)?;
        } else {
            std::fs::copy(&job.source, &job.target).map(|_| ()).map_err(to_write_error)?;
        }
        Ok(())
    }
}
