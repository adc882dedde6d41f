//! `[site.theme_color]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Largest accepted hue, in degrees.
pub const MAX_HUE: u16 = 360;

/// Default hue of the generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.theme_color")]
pub struct ThemeColorConfig {
    /// Hue from 0 to 360. e.g. red: 0, teal: 200, cyan: 250, pink: 345
    pub hue: u16,

    /// Hide the theme color picker from visitors.
    pub fixed: bool,
}

impl Default for ThemeColorConfig {
    fn default() -> Self {
        Self {
            hue: 250,
            fixed: false,
        }
    }
}

impl ThemeColorConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.hue > MAX_HUE {
            diag.error_with_hint(
                Self::FIELDS.hue,
                format!("hue {} is out of range 0..={}", self.hue, MAX_HUE),
                "e.g. red: 0, teal: 200, cyan: 250, pink: 345",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;

    fn diagnose(hue: u16) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        ThemeColorConfig { hue, fixed: false }.validate(&mut diag);
        diag
    }

    #[test]
    fn test_hue_bounds() {
        assert!(diagnose(0).is_empty());
        assert!(diagnose(345).is_empty());
        assert!(diagnose(360).is_empty());

        let diag = diagnose(361);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.theme_color.hue");
    }

    #[test]
    fn test_negative_hue_fails_to_parse() {
        let result: Result<BlogConfig, _> = toml::from_str("[site.theme_color]\nhue = -10");
        assert!(result.is_err());
    }
}
