//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format default value based on field type.
/// Numbers and booleans are used as-is, everything else gets quoted.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    let bare = matches!(
        ty,
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64" | "f32"
            | "f64"
    ) || ty.starts_with("Vec<");

    if bare {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("ProfileConfig"), "profile");
        assert_eq!(infer_section("ThemeColorConfig"), "theme_color");
        assert_eq!(infer_section("SiteSectionConfig"), "site");
        assert_eq!(infer_section("Banner"), "banner");
    }

    #[test]
    fn test_format_default_for_type() {
        assert_eq!(format_default_for_type("250", "u16"), "250");
        assert_eq!(format_default_for_type("true", "bool"), "true");
        assert_eq!(format_default_for_type("center", "BannerPosition"), "\"center\"");
        assert_eq!(format_default_for_type("src", "PathBuf"), "\"src\"");
        assert_eq!(format_default_for_type("[]", "Vec<Favicon>"), "[]");
    }
}
