//! Configuration file generation.
//!
//! Builds a commented `blog.toml` from each section's defaults.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{BuildConfig, LicenseConfig, NavConfig, ProfileConfig, SiteConfig};

/// Generate blog.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# blogconf configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Run `blogconf check` after editing.\n\n");

    let sections = [
        SiteConfig::template_with_header(),
        NavConfig::template_with_header(),
        ProfileConfig::template_with_header(),
        LicenseConfig::template_with_header(),
        BuildConfig::template_with_header(),
    ];
    out.push_str(&sections.join("\n"));

    out
}

/// Write default blog.toml configuration
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
