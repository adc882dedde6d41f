//! Banner image.

use crate::asset::AssetRef;
use crate::config::BlogConfig;
use crate::utils::html::escape_attr;

/// Empty when the banner is disabled.
pub fn render_banner(config: &BlogConfig) -> String {
    let banner = &config.site.banner;
    if !banner.enable {
        return String::new();
    }

    let src = AssetRef::parse(&banner.src).href(&config.build.base);
    let position = banner.position.as_css();
    format!(
        "<div id=\"banner\" class=\"banner\">\n  <img src=\"{}\" alt=\"\" class=\"object-cover object-{position}\" style=\"object-position: {position}\">\n</div>\n",
        escape_attr(&src)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_disabled_banner_is_empty() {
        assert!(render_banner(&test_parse_config("")).is_empty());
    }

    #[test]
    fn test_banner_position() {
        let config = test_parse_config(
            "[site.banner]\nenable = true\nsrc = \"assets/images/background.jpg\"\nposition = \"top\"",
        );
        let html = render_banner(&config);
        assert!(html.contains("src=\"/assets/images/background.jpg\""));
        assert!(html.contains("object-position: top"));
    }
}
