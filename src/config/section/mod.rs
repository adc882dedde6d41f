//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `site`    | `[site]`     | Title, language, theme color, banner     |
//! | `nav`     | `[nav]`      | Navigation bar links                     |
//! | `profile` | `[profile]`  | Author card and social links             |
//! | `license` | `[license]`  | Content license                          |
//! | `build`   | `[build]`    | Asset roots and base path                |

pub mod build;
mod license;
pub mod nav;
mod profile;
pub mod site;

// Re-export section configs
pub use build::BuildConfig;
pub use license::LicenseConfig;
pub use nav::{CustomLink, LinkPreset, NavConfig, NavLink, ResolvedLink};
pub use profile::{ProfileConfig, SocialLink};
pub use site::{
    BannerConfig, BannerPosition, Favicon, FaviconTheme, Locale, SiteConfig, ThemeColorConfig,
};
