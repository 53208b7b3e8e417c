/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lazy, breadth-first traversal of a local directory tree.
//!
//! [`spawn`] starts walking `root` on a background task and returns a
//! receiver that yields files as they're discovered, so a directory upload
//! can start fanning out work before the whole tree has been walked.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::FsError;

/// A file discovered while walking a directory tree.
#[derive(Debug, Clone)]
pub struct TraversedFile {
    /// Absolute (or root-relative) path to the file on disk.
    pub path: PathBuf,
    /// Path relative to the root that was walked, used to derive the S3 key.
    pub relative: PathBuf,
}

/// Start walking `root` on a background task, returning a channel of
/// discovered files.
///
/// When `recursive` is `false`, only the immediate children of `root` are
/// visited. When `follow_symlinks` is `false`, symlinks are skipped
/// entirely; when `true`, a symlink's target is visited and its
/// canonicalized path is recorded in a visited-set to break cycles (a
/// symlink loop would otherwise walk forever).
///
/// The channel closes after the last file (or error) has been sent; a
/// terminal I/O error ends the walk but does not drop files already
/// buffered in the channel.
pub(crate) fn spawn(
    root: PathBuf,
    recursive: bool,
    follow_symlinks: bool,
) -> async_channel::Receiver<Result<TraversedFile, FsError>> {
    let (tx, rx) = async_channel::unbounded();
    tokio::spawn(walk(root, recursive, follow_symlinks, tx));
    rx
}

async fn walk(
    root: PathBuf,
    recursive: bool,
    follow_symlinks: bool,
    tx: async_channel::Sender<Result<TraversedFile, FsError>>,
) {
    let mut visited: HashSet<PathBuf> = HashSet::new();
    if let Ok(canon) = tokio::fs::canonicalize(&root).await {
        visited.insert(canon);
    }

    let mut dirs = VecDeque::new();
    dirs.push_back(root.clone());

    while let Some(dir) = dirs.pop_front() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                let _ = tx
                    .send(Err(FsError::FailedToTraverseDirectory(dir, err)))
                    .await;
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    let _ = tx
                        .send(Err(FsError::FailedToTraverseDirectory(dir.clone(), err)))
                        .await;
                    break;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type().await {
                Ok(ft) => ft,
                Err(err) => {
                    let _ = tx
                        .send(Err(FsError::FailedToTraverseDirectory(path, err)))
                        .await;
                    continue;
                }
            };

            if file_type.is_symlink() {
                if !follow_symlinks {
                    continue;
                }
                match resolve_symlink(&path, &mut visited).await {
                    Ok(Some(target_is_dir)) => {
                        if target_is_dir {
                            if recursive {
                                dirs.push_back(path);
                            }
                        } else if send_file(&tx, &path, &root).await.is_err() {
                            return;
                        }
                    }
                    Ok(None) => {
                        // already visited (cycle); skip silently
                    }
                    Err(err) => {
                        if tx
                            .send(Err(FsError::FailedToResolveSymlink(path, err)))
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                }
                continue;
            }

            if file_type.is_dir() {
                if recursive {
                    dirs.push_back(path);
                }
                continue;
            }

            if send_file(&tx, &path, &root).await.is_err() {
                return;
            }
        }
    }
}

/// Resolve a symlink's canonical target, recording it in `visited`.
///
/// Returns `Ok(Some(is_dir))` the first time a given target is seen,
/// `Ok(None)` if the target was already visited (a cycle), or `Err` if the
/// symlink can't be resolved (dangling, permission denied, etc).
async fn resolve_symlink(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
) -> std::io::Result<Option<bool>> {
    let canon = tokio::fs::canonicalize(path).await?;
    if !visited.insert(canon.clone()) {
        return Ok(None);
    }
    let meta = tokio::fs::metadata(path).await?;
    Ok(Some(meta.is_dir()))
}

async fn send_file(
    tx: &async_channel::Sender<Result<TraversedFile, FsError>>,
    path: &Path,
    root: &Path,
) -> Result<(), async_channel::SendError<Result<TraversedFile, FsError>>> {
    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    tx.send(Ok(TraversedFile {
        path: path.to_path_buf(),
        relative,
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(
        rx: async_channel::Receiver<Result<TraversedFile, FsError>>,
    ) -> Vec<TraversedFile> {
        let mut files = Vec::new();
        while let Ok(item) = rx.recv().await {
            files.push(item.expect("traversal error"));
        }
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        files
    }

    #[tokio::test]
    async fn test_non_recursive_only_visits_top_level() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("a.txt"), b"a").await.unwrap();
        tokio::fs::create_dir(dir.path().join("nested")).await.unwrap();
        tokio::fs::write(dir.path().join("nested/b.txt"), b"b")
            .await
            .unwrap();

        let rx = spawn(dir.path().to_path_buf(), false, false);
        let files = drain(rx).await;

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, Path::new("a.txt"));
    }

    #[tokio::test]
    async fn test_recursive_visits_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("a.txt"), b"a").await.unwrap();
        tokio::fs::create_dir(dir.path().join("nested")).await.unwrap();
        tokio::fs::write(dir.path().join("nested/b.txt"), b"b")
            .await
            .unwrap();

        let rx = spawn(dir.path().to_path_buf(), true, false);
        let files = drain(rx).await;

        let relatives: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            relatives,
            vec![Path::new("a.txt"), Path::new("nested/b.txt")]
        );
    }

    #[tokio::test]
    async fn test_symlinks_skipped_when_not_following() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("real.txt"), b"x").await.unwrap();
        #[cfg(unix)]
        {
            tokio::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
                .await
                .unwrap();
        }

        let rx = spawn(dir.path().to_path_buf(), true, false);
        let files = drain(rx).await;

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, Path::new("real.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_cycle_does_not_loop_forever() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        tokio::fs::create_dir(&sub).await.unwrap();
        // sub/loop -> dir (an ancestor), forming a cycle when followed recursively
        tokio::fs::symlink(dir.path(), sub.join("loop")).await.unwrap();

        let rx = spawn(dir.path().to_path_buf(), true, true);
        // must terminate; if it looped forever this await would hang
        let _files = drain(rx).await;
    }
}
