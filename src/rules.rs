//! The inclusion rule engine.
//! Decides, for every candidate template path, whether it is dropped, copied
//! verbatim, kept with a rewritten view extension, or rendered with variable
//! substitution. The rule tables are static data versioned with the engine;
//! evaluation is an ordered predicate chain with first-match-wins semantics.

use crate::options::{OptionSet, Preprocessor, ScriptCompiler, ViewExtension};

/// Files that never reach the destination.
pub const IGNORED: &[&str] = &[".DS_Store", ".npmignore", "frontend-defaults.zip"];

/// Files additionally skipped when updating an existing project, so that
/// user-owned configuration is never clobbered.
pub const UPDATE_IGNORED: &[&str] = &["config/local.js"];

/// Files shipped only for the TypeScript compiler.
pub const TYPESCRIPT_ONLY: &[&str] = &["tsd.json", "gulp/compile-ts.js"];

/// Files shipped only when client side templates are enabled.
pub const CLIENT_TEMPLATE_ONLY: &[&str] = &[
    "src/patterns/molecules/example/_data/example-template.json",
    "src/patterns/molecules/example/js/decorator/example-template.js",
    "src/patterns/molecules/example/template/example.hbs",
    "src/patterns/molecules/example/template/example.links.hbs",
    "src/patterns/molecules/example/template/partial/example.link.hbs",
    "project/docs/client-templates.md",
    "project/blueprints/pattern/template/pattern.hbs",
    "gulp/clean-templates.js",
    "gulp/compile-templates.js",
];

/// Path fragments identifying example code. Matched by substring containment
/// on the whole relative path, not by path segment.
pub const EXAMPLE_PREFIXES: &[&str] = &[
    "src/patterns/atoms/icon/",
    "src/patterns/molecules/example/",
    "src/assets/css/example/",
    "src/assets/img/icon/",
    "project/routes/",
];

/// Fragments of example paths that stay in place even with example code
/// disabled. Same substring containment semantics as [`EXAMPLE_PREFIXES`];
/// the loose matching is load-bearing, it keeps nested files covered.
pub const EXAMPLE_INCLUDE_ANYWAY: &[&str] = &["project/routes/readme.md", ".gitkeep"];

/// Files shipped only with static exporting enabled.
pub const EXPORTER_ONLY: &[&str] = &["config/default/exporter.js"];

/// Files shipped only with release management enabled.
pub const RELEASE_ONLY: &[&str] = &["config/default/release.js"];

/// Files whose content is rendered with variable substitution instead of a
/// verbatim copy.
pub const RENDERED: &[&str] = &[
    "app/core/config.js",
    "app/tests/jasmine/templating/patternSpec.js",
    "config/default.js",
    "config/default/assets.js",
    "gulp/compile-css.js",
    "gulp/compile-css-proto.js",
    "gulp/compile-js.js",
    "gulp/utils.js",
    "gulp/watch-assets.js",
    "project/.githooks/pre-commit",
    "project/docs/nitro.md",
    "src/patterns/molecules/example/example.html",
    "src/patterns/molecules/example/schema.json",
    "src/proto/js/prototype.js",
    "src/views/index.html",
    "src/views/_partials/head.html",
    "src/views/_partials/foot.html",
    "tests/backstop/backstop.config.js",
    "gulpfile.js",
    "package.json",
];

/// Files whose destination extension follows the selected view extension.
pub const VIEW_FILES: &[&str] = &[
    "src/views/404.html",
    "src/views/index.html",
    "src/views/_layouts/default.html",
    "src/views/_partials/foot.html",
    "src/views/_partials/head.html",
    "src/patterns/atoms/icon/icon.html",
    "src/patterns/molecules/example/example.html",
    "project/blueprints/pattern/pattern.html",
];

/// Root prefixes of the scaffolding blueprint areas in which script files are
/// filtered by the selected compiler. String prefix match, not segment match.
pub const SCRIPT_ROOTS: &[&str] = &["project", "src/patterns"];

/// The per-path outcome of the inclusion rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The path does not reach the destination.
    Drop,
    /// Byte-for-byte copy to the unchanged relative path.
    Copy,
    /// Copy, with the destination extension rewritten to the selected view
    /// extension.
    RewriteExtension,
    /// Content is rendered with variable substitution. The view extension
    /// rewrite still applies to the destination path when the path is also
    /// view-file-listed.
    Render,
}

/// The final extension of a relative path, without the leading dot.
/// Empty when the file name has no extension.
pub fn extension(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

/// Decides the fate of a single catalog path under the given options.
///
/// The predicates run in a fixed order and the first match wins; later rules
/// assume earlier ones already removed irrelevant cases. For a fixed
/// `(options, path)` pair the result is total and deterministic.
pub fn decide(options: &OptionSet, path: &str) -> Decision {
    if IGNORED.contains(&path) {
        return Decision::Drop;
    }

    if options.update_mode && UPDATE_IGNORED.contains(&path) {
        return Decision::Drop;
    }

    if options.script_compiler != ScriptCompiler::TypeScript
        && TYPESCRIPT_ONLY.contains(&path)
    {
        return Decision::Drop;
    }

    if !options.client_templates && CLIENT_TEMPLATE_ONLY.contains(&path) {
        return Decision::Drop;
    }

    if !options.example_code
        && EXAMPLE_PREFIXES.iter().any(|prefix| path.contains(prefix))
        && !EXAMPLE_INCLUDE_ANYWAY.iter().any(|part| path.contains(part))
    {
        return Decision::Drop;
    }

    if !options.exporter && EXPORTER_ONLY.contains(&path) {
        return Decision::Drop;
    }

    if !options.release && RELEASE_ONLY.contains(&path) {
        return Decision::Drop;
    }

    let ext = extension(path);

    // Only the selected stylesheet dialect ships.
    if let Some(dialect) = Preprocessor::from_extension(ext) {
        if dialect != options.preprocessor {
            return Decision::Drop;
        }
    }

    // Blueprint areas carry both script dialects; keep the selected one.
    if SCRIPT_ROOTS.iter().any(|root| path.starts_with(root))
        && (ext == "js" || ext == "ts")
        && ext != options.script_compiler.extension()
    {
        return Decision::Drop;
    }

    if RENDERED.contains(&path) {
        Decision::Render
    } else if ViewExtension::from_extension(ext).is_some() && VIEW_FILES.contains(&path) {
        Decision::RewriteExtension
    } else {
        Decision::Copy
    }
}
