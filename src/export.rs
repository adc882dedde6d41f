//! Export the four records in the shape the theme consumes.
//!
//! Keys are camelCase (`siteConfig`, `navBarConfig`, `profileConfig`,
//! `licenseConfig`). With `resolved`, presets are expanded to concrete
//! links and an empty favicon list is replaced by the default set.

use std::borrow::Cow;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::config::{
    BannerConfig, BlogConfig, Favicon, LicenseConfig, Locale, NavLink, ProfileConfig,
    ResolvedLink, ThemeColorConfig,
};

/// Output format of `blogconf export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedConfig<'a> {
    pub site_config: ExportedSite<'a>,
    pub nav_bar_config: ExportedNav<'a>,
    pub profile_config: &'a ProfileConfig,
    pub license_config: &'a LicenseConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSite<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub lang: Locale,
    pub theme_color: &'a ThemeColorConfig,
    pub banner: &'a BannerConfig,
    pub favicon: Cow<'a, [Favicon]>,
}

#[derive(Debug, Serialize)]
pub struct ExportedNav<'a> {
    pub links: ExportedLinks<'a>,
}

/// Links as written, or resolved for the configured language and base.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExportedLinks<'a> {
    Raw(&'a [NavLink]),
    Resolved(Vec<ResolvedLink>),
}

impl<'a> ExportedConfig<'a> {
    pub fn from_config(config: &'a BlogConfig, resolved: bool) -> Self {
        let site = &config.site;

        let favicon = if resolved {
            Cow::Owned(site.favicons())
        } else {
            Cow::Borrowed(site.favicon.as_slice())
        };

        let links = if resolved {
            ExportedLinks::Resolved(config.nav.resolve(site.lang, &config.build.base))
        } else {
            ExportedLinks::Raw(&config.nav.links)
        };

        Self {
            site_config: ExportedSite {
                title: &site.title,
                subtitle: &site.subtitle,
                lang: site.lang,
                theme_color: &site.theme_color,
                banner: &site.banner,
                favicon,
            },
            nav_bar_config: ExportedNav { links },
            profile_config: &config.profile,
            license_config: &config.license,
        }
    }

    /// Serialize in the requested format.
    pub fn render(&self, format: ExportFormat, pretty: bool) -> Result<String> {
        let out = match (format, pretty) {
            (ExportFormat::Json, true) => serde_json::to_string_pretty(self)?,
            (ExportFormat::Json, false) => serde_json::to_string(self)?,
            (ExportFormat::Toml, true) => {
                toml::to_string_pretty(self).context("failed to export config as TOML")?
            }
            (ExportFormat::Toml, false) => {
                toml::to_string(self).context("failed to export config as TOML")?
            }
        };
        Ok(out)
    }
}
