//! Blog configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] and sub-sections
//! │   ├── nav        # [nav]
//! │   ├── profile    # [profile]
//! │   ├── license    # [license]
//! │   └── build      # [build]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                    |
//! |----------------------|--------------------------------------------|
//! | `[site]`             | Title, subtitle, language, favicons        |
//! | `[site.theme_color]` | Palette hue and picker visibility          |
//! | `[site.banner]`      | Banner image                               |
//! | `[nav]`              | Navigation bar links                       |
//! | `[profile]`          | Author card and social links               |
//! | `[license]`          | Content license                            |
//! | `[build]`            | Asset roots and base path                  |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BannerConfig, BannerPosition, BuildConfig, CustomLink, Favicon, FaviconTheme, LicenseConfig,
    LinkPreset, Locale, NavConfig, NavLink, ProfileConfig, ResolvedLink, SiteConfig, SocialLink,
    ThemeColorConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug,
    utils::path::{normalize_path, resolve_under},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Blog root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Keys present in the file but unknown to the schema (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Site identity and appearance
    #[serde(default)]
    pub site: SiteConfig,

    /// Navigation bar
    #[serde(default)]
    pub nav: NavConfig,

    /// Author profile
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Content license
    #[serde(default)]
    pub license: LicenseConfig,

    /// Asset roots and base path
    #[serde(default)]
    pub build: BuildConfig,
}

/// Compares the configuration records only, not where they were loaded from.
impl PartialEq for BlogConfig {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site
            && self.nav == other.nav
            && self.profile == other.profile
            && self.license == other.license
            && self.build == other.build
    }
}

impl BlogConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The blog root is
    /// the config file's parent directory. `check` collects validation
    /// results itself; every other command fails here on invalid config.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file `{}` not found, run `blogconf init` to create one",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.set_root(&root);

        debug!("config"; "loaded {}", config.config_path.display());
        debug!("config"; "asset root {}", config.build.src.display());

        if !cli.is_check() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize config to TOML")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory and resolve `build.src`/`build.public` against it.
    pub fn set_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.src = resolve_under(root, &self.build.src);
        self.build.public = resolve_under(root, &self.build.public);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section validator.
    ///
    /// Unknown fields are reported as warnings.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        for field in &self.unknown_fields {
            diag.warn(FieldPath::from(field.clone()), "unknown field is ignored");
        }

        self.site.validate(&mut diag);
        self.nav.validate(&self.build.base, &mut diag);
        self.profile.validate(&mut diag);
        self.license.validate(&mut diag);
        self.build.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> BlogConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = BlogConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
