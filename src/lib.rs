//! nitrogen scaffolds a frontend project from a superset template tree.
//! A small set of feature flags (preprocessor, script compiler, view file
//! extension and four toggles) drives a deterministic projection: every
//! candidate template path is dropped, copied, extension-rewritten or
//! rendered with variable substitution.

/// Command-line interface module for the nitrogen application
pub mod cli;

/// Template catalog enumeration over a materialized source tree
pub mod catalog;

/// Error types and handling for the nitrogen application
pub mod error;

/// Post-projection package manager invocation
pub mod install;

/// Logger configuration
pub mod logger;

/// Option set, enums and layered option resolution
pub mod options;

/// Projection orchestration and destination writes
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Destination path computation for kept files
pub mod rewrite;

/// The inclusion rule engine and its rule tables
pub mod rules;

/// Template source providers
pub mod source;

/// Persisted scaffold state for update runs
pub mod state;
