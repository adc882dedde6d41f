//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects besides
//! `canonicalize()` in [`fs::normalize_path`].
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_under`)
//! - [`route`]: URL utilities (`is_external_link`, `is_http_url`, `url_with_base`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, resolve_under};
