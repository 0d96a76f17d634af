//! Content digests for registry entries using SHA-256

use crate::error::RegistryError;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read size for streaming a file through the hasher (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-256 digest of a file's full content
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    fn from_bytes(bytes: &[u8]) -> Self {
        Digest(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the digest of in-memory bytes
pub fn bytes_digest(content: &[u8]) -> Digest {
    Digest::from_bytes(&Sha256::digest(content))
}

/// Compute the digest of a file, reading it in [`DEFAULT_CHUNK_SIZE`] chunks
pub fn file_digest(path: &Path) -> Result<Digest, RegistryError> {
    file_digest_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
}

/// Compute the digest of a file, reading `chunk_size` bytes at a time
///
/// Memory use is bounded by `chunk_size` regardless of file size. The file
/// handle is closed before returning on both success and failure.
pub fn file_digest_with_chunk_size(path: &Path, chunk_size: usize) -> Result<Digest, RegistryError> {
    if chunk_size == 0 {
        return Err(RegistryError::Config(
            "chunk_size must be greater than zero".to_string(),
        ));
    }

    let mut file = File::open(path).map_err(|e| RegistryError::io(path, e))?;
    let metadata = file.metadata().map_err(|e| RegistryError::io(path, e))?;
    if !metadata.is_file() {
        return Err(RegistryError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RegistryError::io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(Digest::from_bytes(&hasher.finalize()))
}
