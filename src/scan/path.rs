//! Registry key construction and directory-list parsing

use crate::error::RegistryError;
use std::path::{Component, Path};

/// Express `path` relative to `root` as a forward-slash separated key
///
/// The prefix is stripped lexically, so `root` must be spelled the same way
/// the scan paths were built from it.
pub fn relative_key(root: &Path, path: &Path) -> Result<String, RegistryError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        RegistryError::InvalidPath(format!(
            "{} is not under root {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    RegistryError::InvalidPath(format!(
                        "{} is not valid UTF-8",
                        path.display()
                    ))
                })?;
                parts.push(name);
            }
            Component::ParentDir => parts.push(".."),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => {
                return Err(RegistryError::InvalidPath(format!(
                    "{} is not relative to root {}",
                    path.display(),
                    root.display()
                )))
            }
        }
    }

    if parts.is_empty() {
        return Err(RegistryError::InvalidPath(format!(
            "{} is the root itself",
            path.display()
        )));
    }

    Ok(parts.join("/"))
}

/// Split a comma-separated directory list
///
/// An empty string means the root itself. Entries are not trimmed, and an
/// empty entry inside the list also names the root.
pub fn split_dirs(list: &str) -> Vec<String> {
    if list.is_empty() {
        return vec![String::new()];
    }
    list.split(',').map(str::to_string).collect()
}
