//! `[profile]` configuration: the author card in the sidebar.
//!
//! # Example
//!
//! ```toml
//! [profile]
//! avatar = "assets/images/good-spirit.jpg"
//! name = "赛博法师"
//! bio = "最棒最强精神状况最稳定的赛博法师"
//!
//! [[profile.links]]
//! name = "GitHub"
//! icon = "fa6-brands:github"
//! url = "https://github.com/ZOUYIQAQ"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::route::is_http_or_mailto;

/// Author profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "profile")]
pub struct ProfileConfig {
    /// Avatar image. Relative to `src/`; paths starting with '/' are relative to `public/`.
    pub avatar: String,

    /// Display name.
    pub name: String,

    /// Short bio under the name.
    pub bio: String,

    /// Social links, written as [[profile.links]] tables.
    pub links: Vec<SocialLink>,
}

/// A social link with an iconify icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    /// Iconify identifier `collection:name`, e.g. `fa6-brands:github`.
    pub icon: String,
    pub url: String,
}

impl ProfileConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, link) in self.links.iter().enumerate() {
            link.validate(Self::FIELDS.links.at(i), diag);
        }
    }
}

impl SocialLink {
    fn validate(&self, path: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(path.join("name"), "link name must not be empty");
        }

        if self.icon.trim().is_empty() {
            diag.error_with_hint(
                path.join("icon"),
                "icon must not be empty",
                "find icon codes at https://icones.js.org/, e.g.: icon = \"fa6-brands:github\"",
            );
        } else if !is_icon_id(&self.icon) {
            diag.error_with_hint(
                path.join("icon"),
                format!("`{}` is not an iconify identifier", self.icon),
                "use collection:name, e.g.: icon = \"fa6-brands:github\"",
            );
        }

        if self.url.trim().is_empty() {
            diag.error(path.join("url"), "link url must not be empty");
        } else if !is_http_or_mailto(&self.url) {
            diag.error(
                path.join("url"),
                format!("`{}` is not an absolute http(s) or mailto: url", self.url),
            );
        }
    }
}

/// `collection:name`, both parts made of lowercase letters, digits and `-`.
fn is_icon_id(icon: &str) -> bool {
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    };
    icon.split_once(':')
        .is_some_and(|(collection, name)| valid(collection) && valid(name))
}
