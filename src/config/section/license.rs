//! `[license]` configuration: content license shown below each post.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::utils::path::route::is_http_url;

/// Content license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "license")]
pub struct LicenseConfig {
    /// Show the license block.
    pub enable: bool,

    /// License name.
    pub name: String,

    /// Link to the license text.
    pub url: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            enable: true,
            name: "CC BY-NC-SA 4.0".into(),
            url: "https://creativecommons.org/licenses/by-nc-sa/4.0/".into(),
        }
    }
}

impl LicenseConfig {
    /// Name and url are only checked while the license is shown.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "license name must not be empty",
                "e.g.: name = \"CC BY-NC-SA 4.0\", or set enable = false",
            );
        }
        if self.url.trim().is_empty() {
            diag.error(Self::FIELDS.url, "license url must not be empty");
        } else if !is_http_url(&self.url) {
            diag.error(
                Self::FIELDS.url,
                format!("`{}` is not an absolute http(s) url", self.url),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_license() {
        let config = test_parse_config("");
        assert!(config.license.enable);
        assert_eq!(config.license.name, "CC BY-NC-SA 4.0");
    }

    #[test]
    fn test_enabled_license_needs_name_and_url() {
        let config = test_parse_config("[license]\nenable = true\nname = \"\"\nurl = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.license.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["license.name", "license.url"]);
    }

    #[test]
    fn test_disabled_license_is_not_checked() {
        let config = test_parse_config("[license]\nenable = false\nname = \"\"\nurl = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.license.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_relative_url_rejected() {
        let config = test_parse_config("[license]\nurl = \"licenses/by-nc-sa\"");
        let mut diag = ConfigDiagnostics::new();
        config.license.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
