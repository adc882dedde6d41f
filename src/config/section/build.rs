//! `[build]` section configuration.
//!
//! Directories the theme resolves image paths against, and the base path
//! of the deployed site.
//!
//! # Example
//!
//! ```toml
//! [build]
//! src = "src"         # Root for relative paths (banner, avatar)
//! public = "public"   # Root for paths starting with '/'
//! base = "/blog/"     # Site deployed under a subdirectory
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Build directories and base path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Asset root. Relative image paths are resolved against it.
    #[config(default = "src")]
    pub src: PathBuf,

    /// Public directory. Paths starting with '/' are resolved against it.
    #[config(default = "public")]
    pub public: PathBuf,

    /// Base path of the deployed site, prefixed to internal links.
    #[config(default = "/")]
    pub base: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src: "src".into(),
            public: "public".into(),
            base: "/".into(),
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base `{}` must start and end with '/'", self.base),
                "e.g.: base = \"/\" or base = \"/blog/\"",
            );
        }
        if self.src.as_os_str().is_empty() {
            diag.error(Self::FIELDS.src, "asset root must not be empty");
        }
        if self.public.as_os_str().is_empty() {
            diag.error(Self::FIELDS.public, "public directory must not be empty");
        }
    }
}
