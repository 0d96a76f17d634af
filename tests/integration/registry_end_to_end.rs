//! End-to-end registry build and write tests

use super::test_utils::{root_with_files, sha256_hex, write_file};
use register::{build_registry, write_registry, RegistryError, ScanOptions, WriteOutcome};
use std::fs;

fn dirs(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_data_directory_scenario() {
    let root = root_with_files(&[("data/a.csv", "1,2,3"), ("data/b.csv", "4,5,6")]);
    let options = ScanOptions {
        dirs: dirs(&["data"]),
        ..ScanOptions::default()
    };

    let registry = build_registry(root.path(), &options).unwrap();
    let output = root.path().join("pooch-registry.txt");
    let outcome = write_registry(&registry, &output).unwrap();

    assert_eq!(
        outcome,
        WriteOutcome::Written {
            path: output.clone(),
            entries: 2
        }
    );
    let expected = format!(
        "data/a.csv {}\ndata/b.csv {}\n",
        sha256_hex(b"1,2,3"),
        sha256_hex(b"4,5,6")
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_output_sorted_regardless_of_creation_order() {
    let root = root_with_files(&[("b.txt", "b"), ("a.txt", "a")]);
    let registry = build_registry(root.path(), &ScanOptions::default()).unwrap();

    let text = registry.render();
    let keys: Vec<_> = text
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(keys, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_empty_scan_writes_no_file() {
    let root = root_with_files(&[("data/notes.md", "# notes")]);
    let options = ScanOptions {
        dirs: dirs(&["data"]),
        ext: Some(".csv".to_string()),
        ..ScanOptions::default()
    };

    let registry = build_registry(root.path(), &options).unwrap();
    assert!(registry.is_empty());

    let output = root.path().join("pooch-registry.txt");
    assert_eq!(
        write_registry(&registry, &output).unwrap(),
        WriteOutcome::Skipped
    );
    assert!(!output.exists());
}

#[test]
fn test_extension_filter() {
    let root = root_with_files(&[("x.txt", "t"), ("x.bin", "b")]);
    let options = ScanOptions {
        ext: Some(".txt".to_string()),
        ..ScanOptions::default()
    };

    let registry = build_registry(root.path(), &options).unwrap();
    let keys: Vec<_> = registry.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["x.txt"]);
}

#[test]
fn test_recursive_and_non_recursive() {
    let root = root_with_files(&[("sub/top.txt", "t"), ("sub/inner/y.txt", "y")]);

    let flat = ScanOptions {
        dirs: dirs(&["sub"]),
        recursive: false,
        ..ScanOptions::default()
    };
    let registry = build_registry(root.path(), &flat).unwrap();
    assert!(registry.contains("sub/top.txt"));
    assert!(!registry.contains("sub/inner/y.txt"));

    let deep = ScanOptions {
        dirs: dirs(&["sub"]),
        ..ScanOptions::default()
    };
    let registry = build_registry(root.path(), &deep).unwrap();
    assert_eq!(
        registry.get("sub/inner/y.txt").map(|d| d.as_str().to_string()),
        Some(sha256_hex(b"y"))
    );
}

#[test]
fn test_multiple_directories_union() {
    let root = root_with_files(&[
        ("data/a.csv", "a"),
        ("assets/logo.png", "png"),
        ("ignored/z.txt", "z"),
    ]);
    let options = ScanOptions {
        dirs: dirs(&["data", "assets"]),
        ..ScanOptions::default()
    };

    let registry = build_registry(root.path(), &options).unwrap();
    let keys: Vec<_> = registry.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["assets/logo.png", "data/a.csv"]);
}

#[test]
fn test_missing_directory_aborts_without_output() {
    let root = root_with_files(&[("data/a.csv", "a")]);
    let options = ScanOptions {
        dirs: dirs(&["data", "missing"]),
        ..ScanOptions::default()
    };

    let err = build_registry(root.path(), &options).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
    assert!(!root.path().join("pooch-registry.txt").exists());
}

#[test]
fn test_existing_registry_is_rescanned() {
    let root = root_with_files(&[("a.txt", "a")]);
    let output = root.path().join("pooch-registry.txt");

    let first = build_registry(root.path(), &ScanOptions::default()).unwrap();
    write_registry(&first, &output).unwrap();

    // The previous registry lives under the root, so the next scan picks it up
    let second = build_registry(root.path(), &ScanOptions::default()).unwrap();
    assert!(second.contains("pooch-registry.txt"));
    assert_eq!(second.len(), 2);
}

#[test]
fn test_rewrite_replaces_stale_registry() {
    let root = root_with_files(&[("data/a.csv", "old")]);
    let output = root.path().join("pooch-registry.txt");
    let options = ScanOptions {
        dirs: dirs(&["data"]),
        ..ScanOptions::default()
    };

    write_registry(&build_registry(root.path(), &options).unwrap(), &output).unwrap();
    write_file(root.path(), "data/a.csv", b"new");
    write_registry(&build_registry(root.path(), &options).unwrap(), &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("data/a.csv {}\n", sha256_hex(b"new"))
    );
}
