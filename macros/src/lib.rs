//! Proc macros for blogconf.
//!
//! # Config derive macro
//!
//! Generates field path accessors for diagnostics and a commented TOML
//! template used by `blogconf init`.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.banner")]
//! /// Banner image shown at the top of every page.
//! pub struct BannerConfig {
//!     /// Show the banner.
//!     pub enable: bool,
//!
//!     /// Image path (relative to `src/`, or `/`-prefixed for `public/`).
//!     #[config(inline_doc = "relative to src/")]
//!     pub src: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub resolved: Option<PathBuf>,
//! }
//!
//! // Generates:
//! // - BannerConfig::FIELDS.src -> FieldPath("site.banner.src")
//! // - BannerConfig::template() -> TOML body with comments
//! // - BannerConfig::template_with_header() -> with [site.banner] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested section, emitted after the own fields
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc = "x")]` - Trailing comment on the value line
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ProfileConfig` → `profile`
//! - `ThemeColorConfig` → `theme_color`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
