//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Short language code as written in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Parse a language code such as `en`, `zh` or `zh-CN`
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("My Counter Application", "我的计数器应用"));
    map.insert(
        "app-welcome",
        ("Welcome to my counter application!", "欢迎使用我的计数器应用！"),
    );

    // Counter
    map.insert("counter-title", ("Counter Component", "计数器组件"));
    map.insert("counter-current", ("Current Count:", "当前计数："));

    // Actions
    map.insert("action-increment", ("Increment", "增加"));
    map.insert("action-decrement", ("Decrement", "减少"));
    map.insert("action-reset", ("Reset", "重置"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_both_locales() {
        assert_eq!(t(Locale::EnUS, "action-increment").as_ref(), "Increment");
        assert_eq!(t(Locale::ZhCN, "action-increment").as_ref(), "增加");
        assert_eq!(t(Locale::EnUS, "counter-title").as_ref(), "Counter Component");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::ZhCN, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn test_every_key_has_both_translations() {
        for (key, (en, zh)) in translations() {
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!zh.is_empty(), "missing zh for {key}");
        }
    }

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::EnUS));
        assert_eq!(Locale::from_code("en-GB"), Some(Locale::EnUS));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("ZH"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_locale_toggle_roundtrip() {
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        assert_eq!(Locale::EnUS.toggled().toggled(), Locale::EnUS);
        assert_eq!(Locale::ZhCN.code(), "zh");
    }
}
