//! License block under each post.

use crate::config::BlogConfig;
use crate::utils::html::{escape, escape_attr};

/// Empty when `license.enable` is false.
pub fn render_license(config: &BlogConfig) -> String {
    let license = &config.license;
    if !license.enable {
        return String::new();
    }
    format!(
        "<div class=\"license\">\n  <span class=\"license-label\">License</span>\n  <a href=\"{}\" target=\"_blank\" rel=\"license noopener\">{}</a>\n</div>\n",
        escape_attr(&license.url),
        escape(&license.name)
    )
}
