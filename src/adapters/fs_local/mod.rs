// Local filesystem adapter - File system operations on the host

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use async_trait::async_trait;
use std::path::Path;
use walkdir::WalkDir;

/// Local filesystem adapter
#[derive(Debug, Default, Clone)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new filesystem adapter
    pub fn new() -> Self {
        Self
    }

    fn fail(action: &str, path: &Path, err: impl std::fmt::Display) -> DomainError {
        DomainError::FsFail(format!("Failed to {} {}: {}", action, path.display(), err))
    }

    /// Recursive copy of `from` into `to`
    fn copy_tree(from: &Path, to: &Path) -> Result<(), DomainError> {
        for entry in WalkDir::new(from) {
            let entry = entry.map_err(|e| Self::fail("walk", from, e))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| Self::fail("walk", entry.path(), e))?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).map_err(|e| Self::fail("create", &target, e))?;
            } else {
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| Self::fail("copy", entry.path(), e))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, DomainError> {
        let mut reader = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| Self::fail("read directory", dir, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| Self::fail("read directory", dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Self::fail("stat", &entry.path(), e))?;
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                kind,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn exists(&self, path: &Path) -> Result<bool, DomainError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| Self::fail("stat", path, e))
    }

    async fn create_dir_all(&self, dir: &Path) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| Self::fail("create directory", dir, e))
    }

    async fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        let from = from.to_path_buf();
        let to = to.to_path_buf();
        tokio::task::spawn_blocking(move || Self::copy_tree(&from, &to))
            .await
            .map_err(|e| DomainError::FsFail(format!("Copy task failed: {}", e)))?
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        tokio::fs::copy(from, to)
            .await
            .map(|_| ())
            .map_err(|e| Self::fail("copy", from, e))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Self::fail("read", path, e))
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), DomainError> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| Self::fail("write", path, e))
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        tokio::fs::rename(from, to)
            .await
            .map_err(|e| Self::fail("rename", from, e))
    }

    async fn remove_file(&self, path: &Path) -> Result<(), DomainError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| Self::fail("delete", path, e))
    }
}
