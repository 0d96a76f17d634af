//! CLI run context tests: flags, config files, and root discovery working together

use super::test_utils::{root_with_files, sha256_hex, write_file};
use clap::Parser;
use register::cli::{Cli, RunContext};
use register::discovery::{MarkerRootLocator, RootLocator};
use register::RegistryError;
use std::fs;

fn run(root: &std::path::Path, args: &[&str]) -> Result<String, RegistryError> {
    let root_arg = root.to_string_lossy().into_owned();
    let mut argv = vec!["register", "--root", root_arg.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let ctx = RunContext::new(cli.root.clone(), cli.config.clone())?;
    ctx.execute(&cli)
}

#[test]
fn test_run_writes_default_output() {
    let root = root_with_files(&[("data/a.csv", "1,2,3"), ("data/b.csv", "4,5,6")]);

    let summary = run(root.path(), &["-d", "data"]).unwrap();
    assert!(summary.starts_with("Wrote 2 entries to "));

    let text = fs::read_to_string(root.path().join("pooch-registry.txt")).unwrap();
    assert_eq!(
        text,
        format!(
            "data/a.csv {}\ndata/b.csv {}\n",
            sha256_hex(b"1,2,3"),
            sha256_hex(b"4,5,6")
        )
    );
}

#[test]
fn test_run_custom_output_and_extension() {
    let root = root_with_files(&[("data/a.csv", "a"), ("data/readme.md", "r")]);

    run(root.path(), &["-d", "data", "--ext", ".csv", "-o", "registry/files.txt"]).unwrap();

    let text = fs::read_to_string(root.path().join("registry/files.txt")).unwrap();
    assert_eq!(text, format!("data/a.csv {}\n", sha256_hex(b"a")));
}

#[test]
fn test_run_with_no_matches_skips_write() {
    let root = root_with_files(&[("data/a.csv", "a")]);

    let summary = run(root.path(), &["-d", "data", "--ext", ".parquet"]).unwrap();
    assert_eq!(summary, "No matching files; registry not written");
    assert!(!root.path().join("pooch-registry.txt").exists());
}

#[test]
fn test_run_missing_root_fails() {
    let root = root_with_files(&[]);
    let err = run(&root.path().join("absent"), &[]).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn test_run_reads_root_config_file() {
    let root = root_with_files(&[("data/a.csv", "a"), ("data/deep/b.csv", "b")]);
    write_file(
        root.path(),
        ".register.toml",
        b"[registry]\ndirs = [\"data\"]\nrecursive = false\noutput = \"reg.txt\"\n",
    );

    run(root.path(), &[]).unwrap();
    let text = fs::read_to_string(root.path().join("reg.txt")).unwrap();
    assert_eq!(text, format!("data/a.csv {}\n", sha256_hex(b"a")));

    // Flags still override the file
    run(root.path(), &["--recursive"]).unwrap();
    let text = fs::read_to_string(root.path().join("reg.txt")).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_run_error_policy_on_overlap() {
    let root = root_with_files(&[("data/nested/n.txt", "n")]);
    let err = run(
        root.path(),
        &["-d", "data,data/nested", "--on-conflict", "error"],
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateEntry { .. }));
    assert!(!root.path().join("pooch-registry.txt").exists());
}

#[test]
fn test_git_root_discovery_from_nested_directory() {
    let root = root_with_files(&[("pkg/data/a.csv", "a")]);
    fs::create_dir(root.path().join(".git")).unwrap();

    let discovered = MarkerRootLocator::git()
        .locate(&root.path().join("pkg").join("data"))
        .unwrap();
    assert_eq!(discovered, dunce::canonicalize(root.path()).unwrap());
}
