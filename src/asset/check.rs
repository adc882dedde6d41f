//! Existence checks for local asset references (`check --assets`).

use crate::config::{
    BannerConfig, BlogConfig, ConfigDiagnostics, FieldPath, ProfileConfig, SiteConfig,
};
use crate::debug;

use super::AssetRef;

/// Report every local image the config points at that is missing on disk.
///
/// Covers the banner (when enabled), the avatar (when set) and each
/// configured favicon. Remote references are skipped. The default favicon
/// set is not checked since it ships with the theme.
pub fn check_assets(config: &BlogConfig, diag: &mut ConfigDiagnostics) {
    let banner = &config.site.banner;
    if banner.enable && !banner.src.trim().is_empty() {
        check_one(config, &banner.src, BannerConfig::FIELDS.src, diag);
    }

    if !config.profile.avatar.trim().is_empty() {
        check_one(
            config,
            &config.profile.avatar,
            ProfileConfig::FIELDS.avatar,
            diag,
        );
    }

    let favicons = SiteConfig::FIELDS.favicon;
    for (i, favicon) in config.site.favicon.iter().enumerate() {
        if !favicon.src.trim().is_empty() {
            check_one(config, &favicon.src, favicons.at(i).join("src"), diag);
        }
    }
}

fn check_one(config: &BlogConfig, src: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    let asset = AssetRef::parse(src);
    let Some(path) = asset.resolve(&config.build) else {
        debug!("assets"; "skipping remote {}", src);
        return;
    };

    if path.is_file() {
        debug!("assets"; "found {}", path.display());
        return;
    }

    let hint = match asset {
        AssetRef::Public(_) => "paths starting with '/' are resolved against build.public",
        _ => "relative paths are resolved against build.src",
    };
    diag.error_with_hint(field, format!("`{}` not found", path.display()), hint);
}
