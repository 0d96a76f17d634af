//! Hasher Implementation Verification Tests
//!
//! Checks that file digests are plain SHA-256 of the file bytes, independent of
//! how the file is chunked while reading.

use super::test_utils::{root_with_files, sha256_hex, write_file};
use register::scan::hasher;

/// Test that file digests match SHA-256 computed directly
#[test]
fn test_file_digest_matches_sha256() {
    let root = root_with_files(&[("a.csv", "1,2,3")]);
    let digest = hasher::file_digest(&root.path().join("a.csv")).unwrap();
    assert_eq!(digest.as_str(), sha256_hex(b"1,2,3"));
}

/// Test digests of files larger than one chunk
#[test]
fn test_multi_chunk_file_digest() {
    let content: Vec<u8> = (0..(3 * hasher::DEFAULT_CHUNK_SIZE + 17))
        .map(|i| (i * 31 % 256) as u8)
        .collect();
    let root = root_with_files(&[]);
    write_file(root.path(), "big.bin", &content);
    let path = root.path().join("big.bin");

    let expected = sha256_hex(&content);
    assert_eq!(hasher::file_digest(&path).unwrap().as_str(), expected);
    for chunk_size in [1, 63, 4096, hasher::DEFAULT_CHUNK_SIZE, content.len() * 2] {
        assert_eq!(
            hasher::file_digest_with_chunk_size(&path, chunk_size)
                .unwrap()
                .as_str(),
            expected,
            "chunk size {chunk_size} changed the digest"
        );
    }
}

/// Test that repeated hashing of unchanged content is stable
#[test]
fn test_digest_determinism() {
    let root = root_with_files(&[("x", "payload")]);
    let path = root.path().join("x");
    let first = hasher::file_digest(&path).unwrap();
    let second = hasher::file_digest(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, hasher::bytes_digest(b"payload"));
}
