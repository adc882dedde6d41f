//! Navigation bar.

use crate::config::BlogConfig;
use crate::utils::html::{escape, escape_attr};
use crate::utils::path::route::url_with_base;

/// Title link, one anchor per resolved link, and the hue picker unless fixed.
pub fn render_nav(config: &BlogConfig) -> String {
    let site = &config.site;
    let base = &config.build.base;
    let mut out = format!(
        "<nav class=\"navbar\" lang=\"{}\">\n  <a class=\"title\" href=\"{}\">{}</a>\n",
        site.lang.html_lang(),
        escape_attr(&url_with_base(base, "/")),
        escape(&site.title)
    );

    for link in config.nav.resolve(site.lang, base) {
        let name = escape(&link.name);
        let href = escape_attr(&link.url);
        if link.external {
            out.push_str(&format!(
                "  <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{name}<span class=\"external-icon\" aria-hidden=\"true\"></span></a>\n"
            ));
        } else {
            out.push_str(&format!("  <a href=\"{href}\">{name}</a>\n"));
        }
    }

    if !site.theme_color.fixed {
        out.push_str("  <button class=\"hue-picker\" aria-label=\"Display Settings\"></button>\n");
    }
    out.push_str("</nav>\n");
    out
}
