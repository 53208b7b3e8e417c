/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Translation between S3 object keys and local filesystem paths, and the
//! atomic temp-file discipline used when writing a downloaded object to its
//! final destination.

use std::path::{Path, PathBuf};

use crate::error::FsError;

/// Default S3 key delimiter.
pub const DEFAULT_DELIMITER: char = '/';

const TEMP_MARKER: &str = ".s3tmp.";
const SUFFIX_LEN: usize = 8;

/// Translate an S3 object key to a destination path under `dest_root`.
///
/// Returns `None` for keys that should be skipped entirely: "folder"
/// placeholder keys (those ending in `delimiter`), and keys that would
/// escape `dest_root` via a leading or unbalanced `..` component.
pub fn key_to_path(
    key: &str,
    dest_root: &Path,
    prefix: Option<&str>,
    delimiter: char,
) -> Option<PathBuf> {
    let key = match prefix {
        Some(p) => key.strip_prefix(p).unwrap_or(key),
        None => key,
    };

    if key.is_empty() || key.ends_with(delimiter) {
        return None;
    }

    if !is_within_root(key, delimiter) {
        return None;
    }

    let mut path = dest_root.to_path_buf();
    for component in key.split(delimiter).filter(|c| !c.is_empty()) {
        path.push(component);
    }

    Some(path)
}

/// Translate a local path (relative to `source_root`) to an S3 object key,
/// replacing OS path separators with `delimiter` and prepending `prefix`.
pub fn path_to_key(
    path: &Path,
    source_root: &Path,
    prefix: Option<&str>,
    delimiter: char,
) -> Result<String, FsError> {
    let relative = path.strip_prefix(source_root).unwrap_or(path);

    if delimiter != DEFAULT_DELIMITER {
        if let Some(name) = relative.file_name().and_then(|n| n.to_str()) {
            if name.contains(delimiter) {
                return Err(FsError::InvalidFileName(name.to_string()));
            }
        }
    }

    let mut components = Vec::new();
    for component in relative.components() {
        let std::path::Component::Normal(part) = component else {
            continue;
        };
        let part = part
            .to_str()
            .ok_or_else(|| FsError::InvalidFileName(relative.display().to_string()))?;
        components.push(part.to_string());
    }

    let mut key = String::new();
    if let Some(prefix) = prefix {
        key.push_str(prefix);
        if !prefix.ends_with(delimiter) {
            key.push(delimiter);
        }
    }
    key.push_str(&components.join(&delimiter.to_string()));

    Ok(key)
}

/// Conservative traversal-escape guard: walk `key`'s components left to
/// right, tracking a running depth counter (`..` decrements, anything else
/// increments). If depth ever goes negative the key is rejected, even if
/// later components would bring it back into `dest_root`.
fn is_within_root(key: &str, delimiter: char) -> bool {
    let mut depth: i64 = 0;
    for component in key.split(delimiter) {
        if component.is_empty() {
            continue;
        }
        if component == ".." {
            depth -= 1;
        } else {
            depth += 1;
        }
        if depth < 0 {
            return false;
        }
    }
    true
}

/// Ensure `root` exists and is a directory, creating it (and any missing
/// parents) if it doesn't exist yet.
pub async fn ensure_destination_root(root: &Path) -> Result<(), FsError> {
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(FsError::ProvidedDestinationIsNotADirectory(root.to_path_buf())),
        Err(_) => tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| FsError::FailedToCreateDestinationDirectory(root.to_path_buf(), e)),
    }
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// missing intermediate directories) idempotently.
pub async fn ensure_parent_dir(path: &Path) -> Result<(), FsError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| FsError::FailedToCreateNestedDestinationDirectory(path.to_path_buf(), e))
}

fn random_suffix() -> String {
    format!("{:08x}", rand::random::<u32>())
}

/// Build the sibling temp-file name for `final_path`:
/// `<basename>.s3tmp.<8-hex>[.ext]`.
fn construct(final_path: &Path, suffix: &str) -> PathBuf {
    let file_name = final_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let temp_name = match file_name.split_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}{TEMP_MARKER}{suffix}.{ext}"),
        _ => format!("{file_name}{TEMP_MARKER}{suffix}"),
    };

    final_path.with_file_name(temp_name)
}

/// Recover the final path from a temp path produced by [`construct`].
/// Returns `None` if `temp_path` doesn't carry the `.s3tmp.<8-hex>` marker.
fn deconstruct(temp_path: &Path) -> Option<PathBuf> {
    let file_name = temp_path.file_name()?.to_str()?;
    let marker_start = file_name.find(TEMP_MARKER)?;
    let suffix_start = marker_start + TEMP_MARKER.len();
    let suffix_end = suffix_start + SUFFIX_LEN;
    if suffix_end > file_name.len() {
        return None;
    }
    if !file_name[suffix_start..suffix_end].chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let stem = &file_name[..marker_start];
    let rest = &file_name[suffix_end..];
    Some(temp_path.with_file_name(format!("{stem}{rest}")))
}

/// A destination file being written to a temp sibling, to be atomically
/// renamed into place once the download fully completes.
#[derive(Debug)]
pub struct TempFile {
    pub final_path: PathBuf,
    pub temp_path: PathBuf,
}

impl TempFile {
    /// Create a [`TempFile`] for `final_path`, picking a temp sibling name
    /// that doesn't already exist (regenerating the random suffix on
    /// collision).
    pub async fn for_destination(final_path: PathBuf) -> Result<Self, FsError> {
        ensure_parent_dir(&final_path).await?;

        loop {
            let candidate = construct(&final_path, &random_suffix());
            if tokio::fs::metadata(&candidate).await.is_err() {
                return Ok(Self {
                    final_path,
                    temp_path: candidate,
                });
            }
        }
    }

    /// Atomically rename the temp file into its final destination,
    /// overwriting any existing file there. On failure the temp file is
    /// removed before the error is returned.
    pub async fn commit(self) -> Result<PathBuf, FsError> {
        match tokio::fs::rename(&self.temp_path, &self.final_path).await {
            Ok(()) => Ok(self.final_path),
            Err(_) => {
                let _ = tokio::fs::remove_file(&self.temp_path).await;
                Err(FsError::FailedToRenameTemporaryFileAfterDownload(
                    self.temp_path,
                ))
            }
        }
    }

    /// Remove the temp file without committing it. Best-effort: a missing
    /// file (already cleaned up, or never created) is not an error.
    pub async fn discard(self) {
        if let Err(err) = tokio::fs::remove_file(&self.temp_path).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %err, path = ?self.temp_path, "failed to remove temp file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_escape_guard() {
        assert!(!is_within_root("../x", '/'));
        assert!(!is_within_root("a/../../b", '/'));
        assert!(is_within_root("a/../b/c", '/'));
        assert!(is_within_root("a.txt", '/'));
    }

    #[test]
    fn test_key_to_path_skips_folder_placeholder() {
        let root = Path::new("/dest");
        assert!(key_to_path("photos/", root, None, '/').is_none());
    }

    #[test]
    fn test_key_to_path_rejects_escape() {
        let root = Path::new("/dest");
        assert!(key_to_path("../etc/passwd", root, None, '/').is_none());
    }

    #[test]
    fn test_key_to_path_strips_prefix_and_joins() {
        let root = Path::new("/dest");
        let path = key_to_path("backups/2024/a.txt", root, Some("backups/"), '/').unwrap();
        assert_eq!(path, Path::new("/dest/2024/a.txt"));
    }

    #[test]
    fn test_path_to_key_joins_with_delimiter() {
        let root = Path::new("/src");
        let key = path_to_key(Path::new("/src/2024/a.txt"), root, None, '/').unwrap();
        assert_eq!(key, "2024/a.txt");
    }

    #[test]
    fn test_path_to_key_prepends_prefix() {
        let root = Path::new("/src");
        let key = path_to_key(Path::new("/src/a.txt"), root, Some("backups"), '/').unwrap();
        assert_eq!(key, "backups/a.txt");
    }

    #[test]
    fn test_temp_file_construct_deconstruct_round_trip() {
        let final_path = Path::new("/dest/report.csv");
        let temp = construct(final_path, "deadbeef");
        assert_eq!(temp, Path::new("/dest/report.s3tmp.deadbeef.csv"));
        assert_eq!(deconstruct(&temp).unwrap(), final_path);
    }

    #[test]
    fn test_temp_file_construct_deconstruct_round_trip_no_extension() {
        let final_path = Path::new("/dest/README");
        let temp = construct(final_path, "0badc0de");
        assert_eq!(deconstruct(&temp).unwrap(), final_path);
    }

    #[tokio::test]
    async fn test_temp_file_for_destination_and_commit() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("out.bin");

        let temp_file = TempFile::for_destination(final_path.clone()).await.unwrap();
        assert_ne!(temp_file.temp_path, final_path);

        tokio::fs::write(&temp_file.temp_path, b"hello").await.unwrap();
        let committed = temp_file.commit().await.unwrap();

        assert_eq!(committed, final_path);
        let contents = tokio::fs::read(&final_path).await.unwrap();
        assert_eq!(contents, b"hello");
    }

    #[tokio::test]
    async fn test_temp_file_discard_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("out.bin");

        let temp_file = TempFile::for_destination(final_path).await.unwrap();
        tokio::fs::write(&temp_file.temp_path, b"partial")
            .await
            .unwrap();
        let temp_path = temp_file.temp_path.clone();
        temp_file.discard().await;

        assert!(tokio::fs::metadata(&temp_path).await.is_err());
    }
}
