// Ports - Interface definitions (contracts)

use crate::domain::errors::*;
use crate::domain::model::*;
use async_trait::async_trait;
use std::path::Path;

/// Port for running external programs
#[async_trait]
pub trait CommandPort: Send + Sync {
    /// Run with inherited stdio; a non-zero exit is an error
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), DomainError>;

    /// Run and capture stdout; a non-zero exit is an error
    async fn capture(&self, invocation: &ToolInvocation) -> Result<String, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// List a directory (non-recursive)
    async fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, DomainError>;

    /// Check if a file or directory exists
    async fn exists(&self, path: &Path) -> Result<bool, DomainError>;

    /// Create directory (including parent directories)
    async fn create_dir_all(&self, dir: &Path) -> Result<(), DomainError>;

    /// Copy a directory tree
    async fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), DomainError>;

    /// Copy file
    async fn copy_file(&self, from: &Path, to: &Path) -> Result<(), DomainError>;

    /// Read a UTF-8 file
    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError>;

    /// Write a file, replacing any previous content
    async fn write(&self, path: &Path, contents: &str) -> Result<(), DomainError>;

    /// Rename file
    async fn rename(&self, from: &Path, to: &Path) -> Result<(), DomainError>;

    /// Delete file
    async fn remove_file(&self, path: &Path) -> Result<(), DomainError>;
}
