//! Blog initialization module.
//!
//! Creates `blog.toml` and the directories its paths point into.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::Path;

pub use config::generate_config_template;
pub use validate::InitMode;

/// Create a new blog with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration file
///
/// `name` is a new directory below cwd; without it the current directory
/// is used. If `dry_run` is true, only prints the config template to stdout.
pub fn new_blog(name: Option<&Path>, config_name: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    init_at(&root, config_name, mode)?;

    log!("init"; "blog initialized in {}", root.display());
    Ok(())
}

/// Validate `root`, then create the directories and `blog.toml`.
fn init_at(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    validate::validate_target(root, mode)?;
    structure::create_structure(root)?;
    config::write_config(root, config_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_new_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-blog");

        init_at(&root, Path::new("blog.toml"), InitMode::NewDir).unwrap();

        assert!(root.join("src/assets/images").is_dir());
        assert!(root.join("public/favicon").is_dir());
        let content = fs::read_to_string(root.join("blog.toml")).unwrap();
        let config = BlogConfig::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_non_empty_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.md"), "").unwrap();

        assert!(init_at(temp.path(), Path::new("blog.toml"), InitMode::CurrentDir).is_err());
        assert!(!temp.path().join("blog.toml").exists());
    }
}
