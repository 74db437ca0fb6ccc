use nitrogen::catalog::enumerate;
use nitrogen::options::{OptionSet, ViewExtension};
use nitrogen::pipeline::ProjectionPipeline;
use nitrogen::renderer::MiniJinjaRenderer;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small template source tree exercising every decision kind.
fn fixture_tree(root: &Path) {
    write(root, "package.json", "{\"name\": \"{{ name }}\", \"version\": \"{{ version }}\"}");
    write(root, "src/views/index.html", "<title>{{ name }}</title>");
    write(root, "src/views/404.html", "<h1>Not found</h1>");
    write(root, "src/assets/css/ui.scss", "$color: red;");
    write(root, "src/assets/css/ui.less", "@color: red;");
    write(root, "config/local.js", "module.exports = {};");
    write(root, "readme.md", "hello");
    write(root, ".DS_Store", "junk");
}

fn options() -> OptionSet {
    OptionSet { name: "demo-app".to_string(), ..OptionSet::default() }
}

fn project_into(options: &OptionSet, source: &Path, dest: &Path) -> nitrogen::pipeline::ProjectionResult {
    let renderer = MiniJinjaRenderer::new();
    let pipeline = ProjectionPipeline::new(options, &renderer, source, dest, "7.7.7");
    let catalog = enumerate(source).unwrap();
    pipeline.project(&catalog).unwrap()
}

#[test]
fn test_fresh_projection() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    fixture_tree(source.path());

    let opts = options();
    let result = project_into(&opts, source.path(), dest.path());

    // Rendered file with substituted variables.
    let pkg = fs::read_to_string(dest.path().join("package.json")).unwrap();
    assert_eq!(pkg, "{\"name\": \"demo-app\", \"version\": \"7.7.7\"}");

    // Render-marked and view-file-listed: content rendered, extension rewritten.
    let index = fs::read_to_string(dest.path().join("src/views/index.hbs")).unwrap();
    assert_eq!(index, "<title>demo-app</title>");
    assert!(!dest.path().join("src/views/index.html").exists());

    // View file without render marking: extension rewritten, content verbatim.
    let not_found = fs::read_to_string(dest.path().join("src/views/404.hbs")).unwrap();
    assert_eq!(not_found, "<h1>Not found</h1>");

    // Preprocessor exclusivity.
    assert!(dest.path().join("src/assets/css/ui.scss").exists());
    assert!(!dest.path().join("src/assets/css/ui.less").exists());

    // Fresh run keeps the user config file; the ignore set drops junk.
    assert!(dest.path().join("config/local.js").exists());
    assert!(!dest.path().join(".DS_Store").exists());

    assert_eq!(result.written.len(), 6);
    assert!(result.dropped.contains(&".DS_Store".to_string()));
    assert!(result.dropped.contains(&"src/assets/css/ui.less".to_string()));
}

#[test]
fn test_update_run_never_touches_update_ignored_files() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    fixture_tree(source.path());

    let opts = OptionSet { update_mode: true, ..options() };
    let result = project_into(&opts, source.path(), dest.path());

    assert!(!dest.path().join("config/local.js").exists());
    assert!(result.dropped.contains(&"config/local.js".to_string()));
    assert!(result
        .written
        .iter()
        .all(|p| !p.ends_with("config/local.js")));
}

#[test]
fn test_projection_is_idempotent() {
    let source = TempDir::new().unwrap();
    let dest_a = TempDir::new().unwrap();
    let dest_b = TempDir::new().unwrap();
    fixture_tree(source.path());

    let opts = options();
    project_into(&opts, source.path(), dest_a.path());
    project_into(&opts, source.path(), dest_b.path());

    assert!(!dir_diff::is_different(dest_a.path(), dest_b.path()).unwrap());
}

#[test]
fn test_view_extension_selection() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    fixture_tree(source.path());

    let opts = OptionSet { view_extension: ViewExtension::Mustache, ..options() };
    project_into(&opts, source.path(), dest.path());

    assert!(dest.path().join("src/views/index.mustache").exists());
    assert!(dest.path().join("src/views/404.mustache").exists());
    assert!(!dest.path().join("src/views/index.hbs").exists());
}

#[test]
fn test_missing_source_file_content_is_reported() {
    // A catalog entry that disappears between the catalog and write phases
    // surfaces as an error instead of silently continuing.
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    fixture_tree(source.path());

    let catalog = vec!["package.json".to_string(), "gone/package.json".to_string()];
    let opts = options();
    let renderer = MiniJinjaRenderer::new();
    let pipeline =
        ProjectionPipeline::new(&opts, &renderer, source.path(), dest.path(), "7.7.7");

    assert!(pipeline.project(&catalog).is_err());
}
