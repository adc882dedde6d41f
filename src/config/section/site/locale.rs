//! Interface language codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface language of the theme.
///
/// Codes follow the theme's i18n file names (`zh_CN`, not `zh-CN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "th")]
    Th,
    #[serde(rename = "vi")]
    Vi,
    #[serde(rename = "tr")]
    Tr,
    #[serde(rename = "id")]
    Id,
}

impl Locale {
    pub const ALL: [Locale; 10] = [
        Self::En,
        Self::ZhCn,
        Self::ZhTw,
        Self::Ja,
        Self::Ko,
        Self::Es,
        Self::Th,
        Self::Vi,
        Self::Tr,
        Self::Id,
    ];

    /// Code as written in `blog.toml`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Es => "es",
            Self::Th => "th",
            Self::Vi => "vi",
            Self::Tr => "tr",
            Self::Id => "id",
        }
    }

    /// BCP 47 tag for the `<html lang>` attribute.
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            other => other.code(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;

    #[test]
    fn test_parse_codes() {
        for locale in Locale::ALL {
            let content = format!("[site]\nlang = \"{}\"", locale.code());
            let config: BlogConfig = toml::from_str(&content).unwrap();
            assert_eq!(config.site.lang, locale);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let result: Result<BlogConfig, _> = toml::from_str("[site]\nlang = \"zh-CN\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("zh-CN"), "{err}");
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Locale::ZhCn.html_lang(), "zh-CN");
        assert_eq!(Locale::ZhTw.html_lang(), "zh-TW");
        assert_eq!(Locale::Ja.html_lang(), "ja");
    }
}
