//! Image and icon references made by the config.
//!
//! - [`AssetRef`]: where a configured path points (remote, `public/`, `src/`)
//! - [`check_assets`]: verify local references exist on disk

mod check;
mod kind;

pub use check::check_assets;
pub use kind::AssetRef;
