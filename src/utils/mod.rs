//! Shared helpers for paths, URLs and HTML output.

pub mod html;
pub mod path;
