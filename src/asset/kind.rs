//! Asset reference classification.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::utils::path::route::url_with_base;

/// Where a configured image path points.
///
/// | Written as                      | Kind     | Resolved under  |
/// |---------------------------------|----------|-----------------|
/// | `https://cdn.example.com/a.png` | `Remote` | nothing         |
/// | `/favicon/icon.png`             | `Public` | `build.public`  |
/// | `assets/images/banner.png`      | `Source` | `build.src`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRef<'a> {
    Remote(&'a str),
    /// Path below the public directory, without the leading `/`.
    Public(&'a str),
    /// Path below the asset root.
    Source(&'a str),
}

impl<'a> AssetRef<'a> {
    pub fn parse(path: &'a str) -> Self {
        let path = path.trim();
        if path.starts_with("http://") || path.starts_with("https://") {
            Self::Remote(path)
        } else if let Some(rel) = path.strip_prefix('/') {
            Self::Public(rel)
        } else {
            Self::Source(path.strip_prefix("./").unwrap_or(path))
        }
    }

    /// Filesystem location, `None` for remote references.
    pub fn resolve(&self, build: &BuildConfig) -> Option<PathBuf> {
        match *self {
            Self::Remote(_) => None,
            Self::Public(rel) => Some(build.public.join(rel)),
            Self::Source(rel) => Some(build.src.join(rel)),
        }
    }

    /// URL used in rendered previews.
    ///
    /// Source assets are emitted by the site bundler under a hashed name;
    /// previews show them base-prefixed at their relative path instead.
    pub fn href(&self, base: &str) -> String {
        match *self {
            Self::Remote(url) => url.to_string(),
            Self::Public(rel) | Self::Source(rel) => url_with_base(base, rel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse() {
        assert_eq!(
            AssetRef::parse("https://cdn.example.com/a.png"),
            AssetRef::Remote("https://cdn.example.com/a.png")
        );
        assert_eq!(
            AssetRef::parse("/favicon/icon.png"),
            AssetRef::Public("favicon/icon.png")
        );
        assert_eq!(
            AssetRef::parse("assets/images/background.jpg"),
            AssetRef::Source("assets/images/background.jpg")
        );
        assert_eq!(
            AssetRef::parse("./assets/avatar.png"),
            AssetRef::Source("assets/avatar.png")
        );
    }

    #[test]
    fn test_banner_resolves_under_asset_root() {
        let build = BuildConfig::default();
        let path = AssetRef::parse("assets/images/background.jpg")
            .resolve(&build)
            .unwrap();
        assert_eq!(path, Path::new("src/assets/images/background.jpg"));
    }

    #[test]
    fn test_resolve_public_and_remote() {
        let build = BuildConfig {
            public: "/blog/public".into(),
            ..Default::default()
        };
        assert_eq!(
            AssetRef::parse("/favicon/icon.png").resolve(&build),
            Some(PathBuf::from("/blog/public/favicon/icon.png"))
        );
        assert_eq!(AssetRef::parse("http://example.com/a.png").resolve(&build), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(AssetRef::parse("/favicon/icon.png").href("/blog/"), "/blog/favicon/icon.png");
        assert_eq!(AssetRef::parse("assets/a.png").href("/"), "/assets/a.png");
        assert_eq!(
            AssetRef::parse("https://cdn.example.com/a.png").href("/blog/"),
            "https://cdn.example.com/a.png"
        );
    }
}
