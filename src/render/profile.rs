//! Author card.

use crate::asset::AssetRef;
use crate::config::BlogConfig;
use crate::utils::html::{escape, escape_attr};

pub fn render_profile(config: &BlogConfig) -> String {
    let profile = &config.profile;
    let mut out = String::from("<div class=\"profile\">\n");

    if !profile.avatar.trim().is_empty() {
        let src = AssetRef::parse(&profile.avatar).href(&config.build.base);
        out.push_str(&format!(
            "  <img class=\"avatar\" src=\"{}\" alt=\"Profile Image of the Author\">\n",
            escape_attr(&src)
        ));
    }
    out.push_str(&format!("  <div class=\"name\">{}</div>\n", escape(&profile.name)));
    if !profile.bio.is_empty() {
        out.push_str(&format!("  <div class=\"bio\">{}</div>\n", escape(&profile.bio)));
    }

    if !profile.links.is_empty() {
        out.push_str("  <div class=\"links\">\n");
        for link in &profile.links {
            out.push_str(&format!(
                "    <a href=\"{}\" aria-label=\"{}\" data-icon=\"{}\" target=\"_blank\" rel=\"me\"></a>\n",
                escape_attr(&link.url),
                escape_attr(&link.name),
                escape_attr(&link.icon)
            ));
        }
        out.push_str("  </div>\n");
    }

    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_profile_card() {
        let config = test_parse_config(
            r#"[profile]
avatar = "assets/images/good-spirit.jpg"
name = "赛博法师"
bio = "Lazy Cat"

[[profile.links]]
name = "GitHub"
icon = "fa6-brands:github"
url = "https://github.com/ZOUYIQAQ""#,
        );
        let html = render_profile(&config);
        assert!(html.contains("src=\"/assets/images/good-spirit.jpg\""));
        assert!(html.contains("<div class=\"name\">赛博法师</div>"));
        assert!(html.contains("data-icon=\"fa6-brands:github\""));
    }

    #[test]
    fn test_empty_profile_has_no_avatar_or_links() {
        let html = render_profile(&test_parse_config(""));
        assert!(!html.contains("<img"));
        assert!(!html.contains("links"));
    }
}
