use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class put on the `<html>` element.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_label_names_the_other_theme() {
        assert!(Theme::Dark.toggle_label().contains("Light"));
        assert!(Theme::Light.toggle_label().contains("Dark"));
        assert_eq!(Theme::Light.class(), "light");
        // nothing else sets the <html> class, so first paint is the default
        assert_eq!(Theme::default().class(), "dark");
    }

    #[test]
    fn test_light_stylesheet_targets_theme_class() {
        let css = include_str!("../input.css");
        let light = format!("html.{} main", Theme::Light.class());
        assert!(css.contains(&light), "no page background override for {light}");
        let text = format!("html.{} :is(", Theme::Light.class());
        assert!(css.contains(&text), "no text colour override for the light theme");
    }
}
