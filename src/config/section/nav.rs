//! `[nav]` configuration: links shown in the navigation bar.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! links = [
//!     "home",
//!     "archive",
//!     "about",
//!     { name = "GitHub", url = "https://github.com/ZOUYIQAQ", external = true },
//! ]
//! ```

use std::fmt;
use std::str::FromStr;

use macros::Config;
use rustc_hash::FxHashSet;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::config::ConfigDiagnostics;
use crate::config::section::site::Locale;
use crate::utils::path::route::{is_external_link, is_http_url, url_with_base};

/// Navigation bar links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "nav")]
pub struct NavConfig {
    /// Preset names ("home", "archive", "about") or { name, url, external } tables.
    /// Internal urls must not include build.base, it is added automatically.
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            links: LinkPreset::ALL.into_iter().map(NavLink::Preset).collect(),
        }
    }
}

impl NavConfig {
    /// Validate navigation links.
    ///
    /// # Checks
    /// - custom links have a name and a url
    /// - external links are absolute `http(s)` urls
    /// - internal links do not repeat `base` (hint)
    /// - each preset appears once (warning)
    pub fn validate(&self, base: &str, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for (i, link) in self.links.iter().enumerate() {
            let path = Self::FIELDS.links.at(i);
            match link {
                NavLink::Preset(preset) => {
                    if !seen.insert(*preset) {
                        diag.warn(path, format!("preset `{preset}` is listed more than once"));
                    }
                }
                NavLink::Custom(custom) => {
                    if custom.name.trim().is_empty() {
                        diag.error(path.join("name"), "link name must not be empty");
                    }
                    let url = custom.url.trim();
                    if url.is_empty() {
                        diag.error(path.join("url"), "link url must not be empty");
                    } else if custom.external && !is_http_url(url) {
                        diag.error_with_hint(
                            path.join("url"),
                            format!("external link `{url}` is not an absolute http(s) url"),
                            "e.g.: url = \"https://github.com/you\"",
                        );
                    } else if !custom.external && is_external_link(url) {
                        diag.error_with_hint(
                            path.join("url"),
                            format!("internal link `{url}` has a URL scheme"),
                            "set external = true to link to another site",
                        );
                    } else if !custom.external && base != "/" && url.starts_with(base) {
                        diag.hint(
                            path.join("url"),
                            format!("`{url}` already starts with base `{base}`, it is added automatically"),
                        );
                    }
                }
            }
        }
    }

    /// Links with localized preset names and base-prefixed internal urls.
    pub fn resolve(&self, locale: Locale, base: &str) -> Vec<ResolvedLink> {
        self.links
            .iter()
            .map(|link| link.resolve(locale, base))
            .collect()
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Navigation targets every site has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkPreset {
    Home,
    Archive,
    About,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown navigation preset `{0}`, expected one of: home, archive, about")]
pub struct UnknownPreset(pub String);

impl LinkPreset {
    pub const ALL: [LinkPreset; 3] = [Self::Home, Self::Archive, Self::About];

    /// Name as written in `blog.toml`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Archive => "archive",
            Self::About => "about",
        }
    }

    /// Site-relative path, before `build.base` is applied.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Archive => "/archive/",
            Self::About => "/about/",
        }
    }

    /// Display name in the given interface language.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Home, Locale::ZhCn) => "首页",
            (Self::Home, Locale::ZhTw) => "首頁",
            (Self::Home, Locale::Ja) => "ホーム",
            (Self::Archive, Locale::ZhCn) => "归档",
            (Self::Archive, Locale::ZhTw) => "彙整",
            (Self::Archive, Locale::Ja) => "アーカイブ",
            (Self::About, Locale::ZhCn) => "关于",
            (Self::About, Locale::ZhTw) => "關於",
            (Self::About, Locale::Ja) => "概要",
            (Self::Home, _) => "Home",
            (Self::Archive, _) => "Archive",
            (Self::About, _) => "About",
        }
    }
}

impl FromStr for LinkPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for LinkPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Links
// ============================================================================

/// One entry of `nav.links`.
#[derive(Debug, Clone, PartialEq)]
pub enum NavLink {
    Preset(LinkPreset),
    Custom(CustomLink),
}

/// A link written out in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomLink {
    pub name: String,
    pub url: String,
    /// Open in a new tab and show an external-link icon.
    #[serde(default)]
    pub external: bool,
}

/// A link ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub name: String,
    pub url: String,
    pub external: bool,
}

impl NavLink {
    pub fn resolve(&self, locale: Locale, base: &str) -> ResolvedLink {
        match self {
            Self::Preset(preset) => ResolvedLink {
                name: preset.name(locale).to_string(),
                url: url_with_base(base, preset.path()),
                external: false,
            },
            Self::Custom(link) if link.external => ResolvedLink {
                name: link.name.clone(),
                url: link.url.clone(),
                external: true,
            },
            Self::Custom(link) => ResolvedLink {
                name: link.name.clone(),
                url: url_with_base(base, &link.url),
                external: false,
            },
        }
    }
}

impl Serialize for NavLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Preset(preset) => serializer.serialize_str(preset.as_str()),
            Self::Custom(link) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", &link.name)?;
                map.serialize_entry("url", &link.url)?;
                map.serialize_entry("external", &link.external)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for NavLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NavLinkVisitor;

        impl<'de> Visitor<'de> for NavLinkVisitor {
            type Value = NavLink;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a preset name or a { name, url, external } table")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map(NavLink::Preset).map_err(E::custom)
            }

            fn visit_map<M: MapAccess<'de>>(self, map: M) -> Result<Self::Value, M::Error> {
                CustomLink::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(NavLink::Custom)
            }
        }

        deserializer.deserialize_any(NavLinkVisitor)
    }
}
