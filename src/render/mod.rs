//! Reference HTML fragments.
//!
//! Shows how the theme consumes each record. This is a preview, not a
//! templating engine: every fragment is a fixed shape filled from the
//! config, with all text HTML-escaped.
//!
//! | Fragment  | Source                                  |
//! |-----------|-----------------------------------------|
//! | `head`    | `site.favicon`, `site.theme_color.hue`  |
//! | `banner`  | `site.banner`                           |
//! | `nav`     | `site.title`, `nav.links`               |
//! | `profile` | `profile`                               |
//! | `license` | `license` (empty when disabled)         |

mod banner;
mod head;
mod license;
mod nav;
mod profile;

use clap::ValueEnum;

use crate::config::BlogConfig;

pub use banner::render_banner;
pub use head::render_head;
pub use license::render_license;
pub use nav::render_nav;
pub use profile::render_profile;

/// Fragment selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Fragment {
    Head,
    Banner,
    Nav,
    Profile,
    License,
    #[default]
    All,
}

impl Fragment {
    const PARTS: [Fragment; 5] = [
        Self::Head,
        Self::Banner,
        Self::Nav,
        Self::Profile,
        Self::License,
    ];
}

/// Render one fragment, or all non-empty ones separated by blank lines.
pub fn render(config: &BlogConfig, fragment: Fragment) -> String {
    match fragment {
        Fragment::Head => render_head(config),
        Fragment::Banner => render_banner(config),
        Fragment::Nav => render_nav(config),
        Fragment::Profile => render_profile(config),
        Fragment::License => render_license(config),
        Fragment::All => Fragment::PARTS
            .into_iter()
            .map(|part| render(config, part))
            .filter(|html| !html.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
