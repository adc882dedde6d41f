//! Blog directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories the default config points into.
const BLOG_DIRS: &[&str] = &["src/assets/images", "public/favicon"];

/// Create blog directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in BLOG_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}
