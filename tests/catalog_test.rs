use nitrogen::catalog::enumerate;
use nitrogen::error::Error;
use std::fs;
use tempfile::TempDir;

fn touch(root: &std::path::Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"x").unwrap();
}

#[test]
fn test_enumerate_files_only_including_dotfiles() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    touch(root, "package.json");
    touch(root, ".editorconfig");
    touch(root, "src/views/index.html");
    touch(root, "project/routes/.gitkeep");
    fs::create_dir_all(root.join("empty/dir")).unwrap();

    let catalog = enumerate(root).unwrap();
    assert_eq!(
        catalog,
        vec![
            ".editorconfig",
            "package.json",
            "project/routes/.gitkeep",
            "src/views/index.html",
        ]
    );
}

#[test]
fn test_missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    match enumerate(&missing) {
        Err(Error::CatalogError(_)) => (),
        other => panic!("Expected CatalogError, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_empty_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    match enumerate(temp_dir.path()) {
        Err(Error::CatalogError(_)) => (),
        other => panic!("Expected CatalogError, got {:?}", other.map(|c| c.len())),
    }
}
