//! `[site.banner]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Banner image shown on top of every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.banner")]
pub struct BannerConfig {
    /// Show the banner.
    pub enable: bool,

    /// Image path. Relative to `src/`; paths starting with '/' are relative to `public/`.
    pub src: String,

    /// Focal point of the image, same as CSS `object-position`.
    #[config(inline_doc = "top | center | bottom")]
    pub position: BannerPosition,
}

impl BannerConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.src.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.src,
                "banner is enabled but no image is set",
                "set src, e.g.: \"assets/images/banner.png\", or disable the banner",
            );
        }
    }
}

/// CSS `object-position` anchor of the banner image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

impl BannerPosition {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}
