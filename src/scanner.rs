use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::PathError;

/// Resolves `path` to an absolute path of an existing folder.
pub fn resolve_root(path: &Path) -> Result<PathBuf, PathError> {
    let resolved = path.canonicalize().map_err(|source| PathError::Resolve {
        path: path.to_owned(),
        source,
    })?;

    if !resolved.is_dir() {
        return Err(PathError::NotAFolder { path: resolved });
    }

    Ok(resolved)
}

/// Immediate subfolders of `root`, sorted by path. Files are ignored.
pub fn list_subfolders(root: &Path) -> Result<Vec<PathBuf>, PathError> {
    let list_error = |source| PathError::List {
        path: root.to_owned(),
        source,
    };

    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if path.is_dir() {
            folders.push(path);
        }
    }

    folders.sort();
    Ok(folders)
}
