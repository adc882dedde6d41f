//! `<head>` elements: favicons and the theme hue.

use crate::config::BlogConfig;
use crate::asset::AssetRef;
use crate::utils::html::escape_attr;

pub fn render_head(config: &BlogConfig) -> String {
    let base = &config.build.base;
    let mut out = String::new();

    for favicon in config.site.favicons() {
        let href = AssetRef::parse(&favicon.src).href(base);
        out.push_str(&format!("<link rel=\"icon\" href=\"{}\"", escape_attr(&href)));
        if let Some(theme) = favicon.theme {
            out.push_str(&format!(
                " media=\"(prefers-color-scheme: {})\"",
                theme.as_str()
            ));
        }
        if let Some(sizes) = &favicon.sizes {
            out.push_str(&format!(" sizes=\"{}\"", escape_attr(sizes)));
        }
        out.push_str(">\n");
    }

    out.push_str(&format!(
        "<style>:root{{--hue:{}}}</style>\n",
        config.site.theme_color.hue
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_favicons() {
        let html = render_head(&test_parse_config(""));
        assert_eq!(html.matches("<link rel=\"icon\"").count(), 8);
        assert!(html.contains(
            "<link rel=\"icon\" href=\"/favicon/favicon-dark-192.png\" media=\"(prefers-color-scheme: dark)\" sizes=\"192x192\">"
        ));
        assert!(html.contains("<style>:root{--hue:250}</style>"));
    }

    #[test]
    fn test_configured_favicon_without_theme() {
        let config = test_parse_config(
            "[site.theme_color]\nhue = 345\n[[site.favicon]]\nsrc = \"/favicon/icon.png\"\n[build]\nbase = \"/blog/\"",
        );
        let html = render_head(&config);
        assert_eq!(
            html,
            "<link rel=\"icon\" href=\"/blog/favicon/icon.png\">\n<style>:root{--hue:345}</style>\n"
        );
    }
}
