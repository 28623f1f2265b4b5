use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class placed on the root element; tailwind's `dark:` variants key off it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().class_name(), "dark");
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_stored_form() {
        let stored = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(stored, "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }
}
