//! `[site]` section configuration.
//!
//! Site identity, interface language and appearance.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "赛博法师"
//! subtitle = "Lazy Cat"
//! lang = "zh_CN"
//!
//! [site.theme_color]
//! hue = 250
//! fixed = false
//!
//! [site.banner]
//! enable = true
//! src = "assets/images/background.jpg"
//! position = "center"
//!
//! [[site.favicon]]
//! src = "/favicon/icon.png"
//! theme = "light"
//! sizes = "32x32"
//! ```

mod banner;
mod favicon;
mod locale;
mod theme_color;

pub use banner::{BannerConfig, BannerPosition};
pub use favicon::{Favicon, FaviconTheme};
pub use locale::Locale;
pub use theme_color::ThemeColorConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site identity, language and appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteConfig {
    /// Site title, shown in the browser tab and the navbar.
    #[config(default = "My Blog")]
    pub title: String,

    /// Subtitle, shown next to the title on the home page.
    pub subtitle: String,

    /// Interface language.
    #[config(inline_doc = "en | zh_CN | zh_TW | ja | ko | es | th | vi | tr | id")]
    pub lang: Locale,

    /// Favicons. Leave this empty to use the default set.
    pub favicon: Vec<Favicon>,

    /// Theme color.
    #[config(sub)]
    pub theme_color: ThemeColorConfig,

    /// Banner image.
    #[config(sub)]
    pub banner: BannerConfig,
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `theme_color.hue` is within `0..=360`
    /// - `banner.src` is set when the banner is enabled
    /// - every favicon has a `src` and well-formed `sizes`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "set a title, e.g.: title = \"My Blog\"",
            );
        }

        self.theme_color.validate(diag);
        self.banner.validate(diag);

        for (i, favicon) in self.favicon.iter().enumerate() {
            favicon.validate(Self::FIELDS.favicon.at(i), diag);
        }
    }

    /// Favicons to emit: the configured list, or the default set when empty.
    pub fn favicons(&self) -> Vec<Favicon> {
        if self.favicon.is_empty() {
            Favicon::default_set()
        } else {
            self.favicon.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.subtitle, "");
        assert_eq!(config.site.lang, Locale::En);
        assert_eq!(config.site.theme_color.hue, 250);
        assert!(!config.site.theme_color.fixed);
        assert!(!config.site.banner.enable);
        assert_eq!(config.site.banner.position, BannerPosition::Center);
        assert!(config.site.favicon.is_empty());
    }

    #[test]
    fn test_example_site_is_valid() {
        let config = test_parse_config(
            r#"[site.theme_color]
hue = 250
fixed = false

[site.banner]
enable = true
src = "assets/images/background.jpg"
position = "center""#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
        assert!(config.site.banner.enable);
        assert_eq!(config.site.banner.src, "assets/images/background.jpg");
    }

    #[test]
    fn test_empty_title_rejected() {
        let config: crate::config::BlogConfig = toml::from_str("[site]\ntitle = \"  \"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.title");
    }

    #[test]
    fn test_favicon_errors_point_at_index() {
        let config = test_parse_config(
            r#"[[site.favicon]]
src = "/favicon/icon.png"

[[site.favicon]]
src = """#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.favicon[1].src");
    }

    #[test]
    fn test_favicons_fall_back_to_default_set() {
        let config = test_parse_config("");
        assert_eq!(config.site.favicons(), Favicon::default_set());

        let config = test_parse_config("[[site.favicon]]\nsrc = \"/favicon/icon.png\"");
        let favicons = config.site.favicons();
        assert_eq!(favicons.len(), 1);
        assert_eq!(favicons[0].src, "/favicon/icon.png");
    }
}
