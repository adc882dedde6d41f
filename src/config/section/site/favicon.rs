//! `[[site.favicon]]` entries.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Pixel sizes of the bundled favicon set.
const DEFAULT_SIZES: [u32; 4] = [32, 128, 180, 192];

/// A single favicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favicon {
    /// Path of the icon, relative to `public/`.
    pub src: String,

    /// Only set when there are separate icons for light and dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<FaviconTheme>,

    /// Only set when there are icons of different sizes, e.g. `32x32`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Color scheme a favicon is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaviconTheme {
    Light,
    Dark,
}

impl FaviconTheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Favicon {
    /// Favicons used when none are configured.
    pub fn default_set() -> Vec<Self> {
        [FaviconTheme::Light, FaviconTheme::Dark]
            .into_iter()
            .flat_map(|theme| {
                DEFAULT_SIZES.into_iter().map(move |size| Self {
                    src: format!("/favicon/favicon-{}-{}.png", theme.as_str(), size),
                    theme: Some(theme),
                    sizes: Some(format!("{size}x{size}")),
                })
            })
            .collect()
    }

    /// Validate one entry; `path` is its position, e.g. `site.favicon[0]`.
    pub fn validate(&self, path: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.src.trim().is_empty() {
            diag.error_with_hint(
                path.join("src"),
                "favicon src must not be empty",
                "e.g.: src = \"/favicon/icon.png\"",
            );
        }

        if let Some(sizes) = &self.sizes
            && !is_valid_sizes(sizes)
        {
            diag.error_with_hint(
                path.join("sizes"),
                format!("invalid favicon sizes `{sizes}`"),
                "use WIDTHxHEIGHT (e.g. \"32x32\") or \"any\"",
            );
        }
    }
}

/// `any`, or one or more space separated `WxH` pairs of positive integers.
fn is_valid_sizes(sizes: &str) -> bool {
    if sizes == "any" {
        return true;
    }
    let mut parts = sizes.split_ascii_whitespace().peekable();
    parts.peek().is_some()
        && parts.all(|part| {
            part.split_once(['x', 'X']).is_some_and(|(w, h)| {
                is_positive_int(w) && is_positive_int(h)
            })
        })
}

fn is_positive_int(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.bytes().any(|b| b != b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_set() {
        let set = Favicon::default_set();
        assert_eq!(set.len(), 8);
        assert_eq!(set[0].src, "/favicon/favicon-light-32.png");
        assert_eq!(set[0].theme, Some(FaviconTheme::Light));
        assert_eq!(set[0].sizes.as_deref(), Some("32x32"));
        assert_eq!(set[7].src, "/favicon/favicon-dark-192.png");
        assert_eq!(set[7].theme, Some(FaviconTheme::Dark));
    }

    #[test]
    fn test_theme_tag() {
        let config = test_parse_config(
            "[[site.favicon]]\nsrc = \"/favicon/icon.png\"\ntheme = \"dark\"\nsizes = \"32x32\"",
        );
        assert_eq!(config.site.favicon[0].theme, Some(FaviconTheme::Dark));

        let result: Result<crate::config::BlogConfig, _> =
            toml::from_str("[[site.favicon]]\nsrc = \"/a.png\"\ntheme = \"sepia\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sizes() {
        assert!(is_valid_sizes("32x32"));
        assert!(is_valid_sizes("16x16 32x32"));
        assert!(is_valid_sizes("any"));
        assert!(!is_valid_sizes(""));
        assert!(!is_valid_sizes("32"));
        assert!(!is_valid_sizes("0x0"));
        assert!(!is_valid_sizes("32x"));
        assert!(!is_valid_sizes("-32x32"));
    }

    #[test]
    fn test_validate_reports_indexed_path() {
        let favicon = Favicon {
            src: "/favicon/icon.png".into(),
            theme: None,
            sizes: Some("big".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        favicon.validate(FieldPath::new("site.favicon").at(2), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.favicon[2].sizes");
    }
}
