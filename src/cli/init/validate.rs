//! Pre-initialization validation.

use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `blogconf init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `blogconf init <name>` - create new subdirectory (must not exist)
    NewDir,
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("current directory is not empty, use `blogconf init <name>` to create a new one")]
    NotEmpty,

    #[error("directory `{0}` already exists, choose a different name")]
    AlreadyExists(PathBuf),

    #[error("failed to read directory `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<(), InitError> {
    match mode {
        InitMode::CurrentDir if !is_empty(root)? => Err(InitError::NotEmpty),
        InitMode::NewDir if root.exists() => Err(InitError::AlreadyExists(root.to_path_buf())),
        _ => Ok(()),
    }
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool, InitError> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(err) => Err(InitError::Io(path.to_path_buf(), err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blog.toml"), "").unwrap();
        assert!(matches!(
            validate_target(temp.path(), InitMode::CurrentDir),
            Err(InitError::NotEmpty)
        ));
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            validate_target(temp.path(), InitMode::NewDir),
            Err(InitError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_blog");
        assert!(validate_target(&new_path, InitMode::NewDir).is_ok());
    }
}
